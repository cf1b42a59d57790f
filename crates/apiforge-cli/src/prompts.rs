//! Interactive input collection for `apiforge generate`.
//!
//! One prompt per setup input, each with a sensible default. The answers are
//! assembled into the immutable [`SetupInputs`] record the pipeline runs on.
//! With `--defaults`, every prompt is skipped and its default used directly,
//! which also makes the command scriptable without a terminal.

use std::str::FromStr;

use dialoguer::Input;

use apiforge_core::domain::{Credentials, Driver, SetupInputs};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Collect every setup input for the named service.
pub fn collect(name: &str, config: &AppConfig, accept_defaults: bool) -> CliResult<SetupInputs> {
    let driver_answer = text(
        "Database driver (postgres/mysql)",
        config.defaults.driver.clone(),
        accept_defaults,
    )?;
    // Resolve the driver first: an unsupported identifier is fatal before
    // anything else is asked or provisioned.
    let driver = Driver::from_str(&driver_answer)
        .map_err(apiforge_core::error::ForgeError::from)?;

    let container_name = text(
        "Database container name",
        driver.default_container_name().into(),
        accept_defaults,
    )?
    .to_lowercase();

    let container_port = number(
        "Host port for the container",
        config.defaults.container_port,
        accept_defaults,
    )?;

    let user = text("Database user", driver.default_user().into(), accept_defaults)?;
    let password = text("Database password", "password".into(), accept_defaults)?;

    let credentials = match driver {
        Driver::Mysql => {
            let root = text("MySQL root password", "secret".into(), accept_defaults)?;
            Credentials::with_root(user.clone(), password, root)
        }
        Driver::Postgres => Credentials::new(user.clone(), password),
    };

    // The original tooling convention: database defaults to the user name.
    let db_name = text("Database name", user, accept_defaults)?.to_lowercase();
    let table_name = text(
        "Table name",
        config.defaults.table_name.clone(),
        accept_defaults,
    )?;
    let api_group = text(
        "API group",
        config.defaults.api_group.clone(),
        accept_defaults,
    )?;
    let module_path = text(
        "Module base path",
        config.defaults.module_path.clone(),
        accept_defaults,
    )?;

    Ok(SetupInputs {
        module_path,
        workdir: name.to_string(),
        driver,
        container_name,
        container_port,
        credentials,
        db_name,
        table_name,
        api_group,
    })
}

fn text(prompt: &str, default: String, accept_defaults: bool) -> CliResult<String> {
    if accept_defaults {
        return Ok(default);
    }
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

fn number(prompt: &str, default: u16, accept_defaults: bool) -> CliResult<u16> {
    if accept_defaults {
        return Ok(default);
    }
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Interactive paths need a TTY; the defaults path is what CI exercises.

    #[test]
    fn defaults_build_postgres_inputs() {
        let inputs = collect("orders-api", &AppConfig::default(), true).unwrap();
        assert_eq!(inputs.workdir, "orders-api");
        assert_eq!(inputs.driver, Driver::Postgres);
        assert_eq!(inputs.container_name, "postgres_db");
        assert_eq!(inputs.container_port, 6432);
        assert_eq!(inputs.credentials.user, "postgres");
        assert_eq!(inputs.db_name, "postgres");
        assert_eq!(inputs.table_name, "api_table");
        assert_eq!(inputs.api_group, "dummy");
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn defaults_honour_configured_driver() {
        let mut config = AppConfig::default();
        config.defaults.driver = "mysql".into();

        let inputs = collect("svc", &config, true).unwrap();
        assert_eq!(inputs.driver, Driver::Mysql);
        assert_eq!(inputs.container_name, "mysql_db");
        assert_eq!(inputs.credentials.user, "root");
        assert_eq!(inputs.credentials.root_password.as_deref(), Some("secret"));
    }

    #[test]
    fn unsupported_configured_driver_is_fatal() {
        let mut config = AppConfig::default();
        config.defaults.driver = "mongodb".into();

        let err = collect("svc", &config, true).unwrap_err();
        assert!(err.to_string().contains("driver not supported"));
    }
}

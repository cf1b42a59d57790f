//! Setup inputs collected from the CLI.
//!
//! One immutable record describing the service to generate. Created once
//! from user answers, read-only through the pipeline — derived values
//! (module name, CamelCase titles) are computed on demand, never cached.

use crate::domain::driver::Driver;
use crate::domain::error::DomainError;

/// Database credentials for the provisioned container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    /// MySQL containers additionally require a root password; `None` for
    /// engines that don't use one.
    pub root_password: Option<String>,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            root_password: None,
        }
    }

    pub fn with_root(
        user: impl Into<String>,
        password: impl Into<String>,
        root_password: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            root_password: Some(root_password.into()),
        }
    }
}

/// Everything the setup pipeline needs to know, fixed at start.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupInputs {
    /// Module base path for `go mod init` (e.g. `github.com/acme`).
    pub module_path: String,
    /// Name of the generated service directory.
    pub workdir: String,
    pub driver: Driver,
    pub container_name: String,
    /// Host port mapped onto the engine's internal port.
    pub container_port: u16,
    pub credentials: Credentials,
    pub db_name: String,
    pub table_name: String,
    /// URL segment and Go package name of the generated API group.
    pub api_group: String,
}

impl SetupInputs {
    /// Full module name passed to the module initializer.
    pub fn module_name(&self) -> String {
        format!("{}/{}", self.module_path, self.workdir)
    }

    /// CamelCase form of the table name, used for generated Go type names.
    pub fn table_title(&self) -> String {
        to_camel_case(&self.table_name)
    }

    /// CamelCase form of the API group, used for generated Go type names.
    pub fn api_group_title(&self) -> String {
        to_camel_case(&self.api_group)
    }

    /// Validate every field before any side effect happens.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_service_name(&self.workdir)?;

        if self.module_path.trim().is_empty() {
            return Err(DomainError::EmptyModulePath);
        }
        if self.container_port == 0 {
            return Err(DomainError::InvalidPort);
        }
        for (field, value) in [
            ("table", self.table_name.as_str()),
            ("api group", self.api_group.as_str()),
            ("database", self.db_name.as_str()),
        ] {
            if value.is_empty() || !is_valid_identifier(value) {
                return Err(DomainError::InvalidIdentifier {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate_service_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidServiceName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid(
            "only alphanumeric characters, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// True for identifiers safe to splice into SQL and Go source.
fn is_valid_identifier(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert a snake_case identifier to CamelCase.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_handles_single_word() {
        assert_eq!(to_camel_case("users"), "Users");
    }

    #[test]
    fn camel_case_handles_multiple_segments() {
        assert_eq!(to_camel_case("user_account_log"), "UserAccountLog");
    }

    #[test]
    fn camel_case_tolerates_double_underscore() {
        assert_eq!(to_camel_case("a__b"), "AB");
    }

    #[test]
    fn identifier_rules() {
        assert!(is_valid_identifier("users_2"));
        assert!(!is_valid_identifier("users-2"));
        assert!(!is_valid_identifier("users 2"));
        assert!(!is_valid_identifier("users;"));
    }

    #[test]
    fn service_name_rules() {
        assert!(validate_service_name("orders-api").is_ok());
        assert!(validate_service_name("").is_err());
        assert!(validate_service_name(".hidden").is_err());
        assert!(validate_service_name("a/b").is_err());
        assert!(validate_service_name("a b").is_err());
    }
}

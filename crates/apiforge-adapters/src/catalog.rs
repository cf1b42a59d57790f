//! Compiled-in template catalog.
//!
//! The bodies are opaque format strings; the core renders them through
//! `RenderContext` and never inspects them. Driver-specific differences
//! (connection string, driver module) are carried by render variables, so
//! one body serves both engines.

use apiforge_core::{
    application::ports::TemplateCatalog,
    domain::Artifact,
    error::ForgeResult,
};

/// Catalog backed by templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn body(&self, artifact: Artifact) -> ForgeResult<String> {
        let body = match artifact {
            Artifact::Controller => CONTROLLER,
            Artifact::ServiceLayer => SERVICE_LAYER,
            Artifact::CorsMiddleware => CORS_MIDDLEWARE,
            Artifact::AuthMiddleware => AUTH_MIDDLEWARE,
            Artifact::UtilsConfig => UTILS_CONFIG,
            Artifact::UtilsHelpers => UTILS_HELPERS,
            Artifact::Connection => CONNECTION,
            Artifact::ConnectionTestHarness => CONNECTION_TEST_HARNESS,
            Artifact::MainFile => MAIN_FILE,
            Artifact::Makefile => MAKEFILE,
            Artifact::EnvFile => ENV_FILE,
            Artifact::HttpScratch => HTTP_SCRATCH,
            Artifact::MigrationUp => MIGRATION_UP,
            Artifact::MigrationDown => MIGRATION_DOWN,
            Artifact::TableQuery => TABLE_QUERY,
        };
        Ok(body.to_string())
    }
}

// ── Go sources ────────────────────────────────────────────────────────────────

const CONTROLLER: &str = r#"// Generated by apiforge.
package {{API_GROUP}}

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

type {{API_GROUP_TITLE}}Resource struct {
	service Service
}

func ResourceHandler(r *gin.RouterGroup, service Service) {
	resource := New{{API_GROUP_TITLE}}Resource(service)

	r.GET("/{{API_GROUP}}", resource.List{{TABLE_NAME_TITLE}})
}

func New{{API_GROUP_TITLE}}Resource(service Service) {{API_GROUP_TITLE}}Resource {
	return {{API_GROUP_TITLE}}Resource{service}
}

func (r *{{API_GROUP_TITLE}}Resource) List{{TABLE_NAME_TITLE}}(c *gin.Context) {
	rows, err := r.service.List{{TABLE_NAME_TITLE}}(c)
	if err != nil {
		c.JSON(http.StatusInternalServerError, gin.H{"error": err.Error()})
		return
	}

	c.JSON(http.StatusOK, rows)
}
"#;

const SERVICE_LAYER: &str = r#"// Generated by apiforge.
package {{API_GROUP}}

import (
	"context"

	"{{MODULE_NAME}}/pkg/db"
)

type Service interface {
	List{{TABLE_NAME_TITLE}}(ctx context.Context) ([]db.{{TABLE_NAME_TITLE}}, error)
}

type {{API_GROUP_TITLE}}Service struct {
	queries *db.Queries
}

func New{{API_GROUP_TITLE}}Service(queries *db.Queries) {{API_GROUP_TITLE}}Service {
	return {{API_GROUP_TITLE}}Service{queries}
}

func (s *{{API_GROUP_TITLE}}Service) List{{TABLE_NAME_TITLE}}(ctx context.Context) ([]db.{{TABLE_NAME_TITLE}}, error) {
	return s.queries.List{{TABLE_NAME_TITLE}}(ctx)
}
"#;

const CORS_MIDDLEWARE: &str = r#"// Generated by apiforge.
package cors

import (
	ginCors "github.com/gin-contrib/cors"
	"github.com/gin-gonic/gin"
)

func Middleware() gin.HandlerFunc {
	config := ginCors.DefaultConfig()
	config.AllowAllOrigins = true
	config.AllowHeaders = []string{"Origin", "Content-Type", "Authorization"}
	config.AllowMethods = []string{"GET", "POST", "PUT", "DELETE"}
	return ginCors.New(config)
}
"#;

const AUTH_MIDDLEWARE: &str = r#"// Generated by apiforge.
package auth

import (
	"net/http"
	"strings"

	"github.com/gin-gonic/gin"
)

func Middleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		header := c.GetHeader("Authorization")
		if !strings.HasPrefix(header, "Bearer ") {
			c.AbortWithStatusJSON(http.StatusUnauthorized, gin.H{"error": "missing bearer token"})
			return
		}
		c.Next()
	}
}
"#;

const UTILS_CONFIG: &str = r#"// Generated by apiforge.
package utils

import "github.com/spf13/viper"

type Config struct {
	DBDriver      string `mapstructure:"DB_DRIVER"`
	DBSource      string `mapstructure:"DB_SOURCE"`
	ServerAddress string `mapstructure:"SERVER_ADDRESS"`
}

func LoadConfig(path string) (config Config, err error) {
	viper.AddConfigPath(path)
	viper.SetConfigName("app")
	viper.SetConfigType("env")

	viper.AutomaticEnv()

	err = viper.ReadInConfig()
	if err != nil {
		return
	}

	err = viper.Unmarshal(&config)
	return
}
"#;

const UTILS_HELPERS: &str = r#"// Generated by apiforge.
package utils

import "github.com/IBM/alchemy-logging/src/go/alog"

var log = alog.UseChannel("MAIN")

func ConfigureLogger() {
	alog.Config(alog.INFO, alog.ChannelMap{})
}

func LogError(err error) {
	if err != nil {
		log.Log(alog.ERROR, "%v", err)
	}
}
"#;

const CONNECTION: &str = r#"// Generated by apiforge.
package db

import (
	"database/sql"

	_ "{{DRIVER_PACKAGE}}"
)

func Connect(driver, source string) (*sql.DB, error) {
	conn, err := sql.Open(driver, source)
	if err != nil {
		return nil, err
	}

	if err := conn.Ping(); err != nil {
		return nil, err
	}

	return conn, nil
}
"#;

const CONNECTION_TEST_HARNESS: &str = r#"// Generated by apiforge.
package db

import (
	"os"
	"testing"

	"{{MODULE_NAME}}/utils"
)

var testQueries *Queries

func TestMain(m *testing.M) {
	config, err := utils.LoadConfig("../..")
	if err != nil {
		os.Exit(1)
	}

	conn, err := Connect(config.DBDriver, config.DBSource)
	if err != nil {
		os.Exit(1)
	}

	testQueries = New(conn)

	os.Exit(m.Run())
}
"#;

const MAIN_FILE: &str = r#"// Generated by apiforge.
package main

import (
	"github.com/gin-gonic/gin"

	"{{MODULE_NAME}}/api/v1/{{API_GROUP}}"
	"{{MODULE_NAME}}/api/v1/mw/auth"
	"{{MODULE_NAME}}/api/v1/mw/cors"
	"{{MODULE_NAME}}/pkg/db"
	"{{MODULE_NAME}}/utils"
)

func main() {
	utils.ConfigureLogger()

	config, err := utils.LoadConfig(".")
	if err != nil {
		panic(err)
	}

	conn, err := db.Connect(config.DBDriver, config.DBSource)
	if err != nil {
		panic(err)
	}

	queries := db.New(conn)
	service := {{API_GROUP}}.New{{API_GROUP_TITLE}}Service(queries)

	router := gin.Default()
	router.Use(cors.Middleware())

	v1 := router.Group("/api/v1")
	v1.Use(auth.Middleware())
	{{API_GROUP}}.ResourceHandler(v1, &service)

	utils.LogError(router.Run(config.ServerAddress))
}
"#;

// ── Project files ─────────────────────────────────────────────────────────────

const MAKEFILE: &str = r#"# Generated by apiforge.

DB_SOURCE={{DB_SOURCE}}

db:
	docker start {{CONTAINER_NAME}}

migrateup:
	migrate -path pkg/db/migrations -database "$(DB_SOURCE)" -verbose up

migratedown:
	migrate -path pkg/db/migrations -database "$(DB_SOURCE)" -verbose down

sqlc:
	sqlc generate

test:
	go test -v -cover ./...

server:
	go run main.go

.PHONY: db migrateup migratedown sqlc test server
"#;

const ENV_FILE: &str = r#"DB_DRIVER={{DB_DRIVER}}
DB_SOURCE={{DB_SOURCE}}
SERVER_ADDRESS=0.0.0.0:8080
"#;

const HTTP_SCRATCH: &str = r#"# Generated by apiforge.
# Ready-made requests for quick manual testing from the editor.

GET http://localhost:8080/api/v1/{{API_GROUP}}
Authorization: Bearer dev-token
"#;

// ── SQL ───────────────────────────────────────────────────────────────────────

const MIGRATION_UP: &str = r#"-- Generated by apiforge.

CREATE TABLE IF NOT EXISTS {{TABLE_NAME}} (
    id INTEGER PRIMARY KEY,
    name VARCHAR(255)
);
"#;

const MIGRATION_DOWN: &str = r#"-- Generated by apiforge.

DROP TABLE IF EXISTS {{TABLE_NAME}};
"#;

const TABLE_QUERY: &str = r#"-- Generated by apiforge.

-- name: List{{TABLE_NAME_TITLE}} :many
SELECT * FROM {{TABLE_NAME}};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_artifact_has_a_body() {
        let catalog = BuiltinCatalog::new();
        for artifact in [
            Artifact::Controller,
            Artifact::ServiceLayer,
            Artifact::CorsMiddleware,
            Artifact::AuthMiddleware,
            Artifact::UtilsConfig,
            Artifact::UtilsHelpers,
            Artifact::Connection,
            Artifact::ConnectionTestHarness,
            Artifact::MainFile,
            Artifact::Makefile,
            Artifact::EnvFile,
            Artifact::HttpScratch,
            Artifact::MigrationUp,
            Artifact::MigrationDown,
            Artifact::TableQuery,
        ] {
            assert!(!catalog.body(artifact).unwrap().is_empty(), "{artifact:?}");
        }
    }

    #[test]
    fn go_sources_carry_generated_marker() {
        let catalog = BuiltinCatalog::new();
        for artifact in [Artifact::Controller, Artifact::MainFile, Artifact::Connection] {
            assert!(
                catalog
                    .body(artifact)
                    .unwrap()
                    .starts_with("// Generated by apiforge.")
            );
        }
    }

    #[test]
    fn query_body_uses_title_case_name() {
        let body = BuiltinCatalog::new().body(Artifact::TableQuery).unwrap();
        assert!(body.contains("List{{TABLE_NAME_TITLE}}"));
    }
}

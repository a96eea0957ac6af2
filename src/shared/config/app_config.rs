// Explicit configuration for the whole process.
//
// Built once from the environment profile and handed by reference to the datastore
// initializer, the GraphQL schema builder and the HTTP server.

use std::path::PathBuf;

use crate::shared::config::environment::EnvironmentProfile;
use crate::shared::config::error::ConfigError;
use crate::shared::infrastructure::database::DatabaseConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_profile(profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        let host = profile.get("SERVER_HOST").unwrap_or(DEFAULT_HOST).to_string();
        let port = match profile.get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: raw.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphqlDriver {
    AsyncGraphql,
}

/// Where the generated schema goes. It is always generated; a path additionally
/// writes the SDL to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSchemaFile {
    InMemory,
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlConfig {
    pub auto_schema_file: AutoSchemaFile,
    pub driver: GraphqlDriver,
    pub path: &'static str,
    pub playground: bool,
}

impl GraphqlConfig {
    pub fn from_profile(profile: &EnvironmentProfile) -> Self {
        let auto_schema_file = match profile.get("GRAPHQL_SCHEMA_FILE") {
            Some(path) if !path.is_empty() => AutoSchemaFile::Path(PathBuf::from(path)),
            _ => AutoSchemaFile::InMemory,
        };
        Self {
            auto_schema_file,
            driver: GraphqlDriver::AsyncGraphql,
            path: GRAPHQL_PATH,
            playground: true,
        }
    }

    pub fn auto_schema(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn from_profile(profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_profile(profile)?,
            database: DatabaseConfig::from_profile(profile)?,
            graphql: GraphqlConfig::from_profile(profile),
        })
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use crate::tests::fixtures::profile::complete_profile;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_the_server_address() {
        let config = AppConfig::from_profile(&complete_profile()).unwrap();
        assert_eq!(config.server.socket_addr(), "0.0.0.0:3000");
    }

    #[rstest]
    fn it_should_read_the_server_address_from_the_profile() {
        let mut profile = complete_profile();
        profile.overlay([("SERVER_HOST", "127.0.0.1"), ("PORT", "4000")]);
        let config = AppConfig::from_profile(&profile).unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:4000");
    }

    #[rstest]
    #[case("not-a-port")]
    #[case("70000")]
    #[case("-1")]
    fn it_should_reject_an_invalid_port(#[case] port: &str) {
        let mut profile = complete_profile();
        profile.overlay([("PORT", port)]);
        let result = AppConfig::from_profile(&profile);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key, value }) if key == "PORT" && value == port
        ));
    }

    #[rstest]
    fn it_should_always_request_automatic_schema_generation() {
        let config = AppConfig::from_profile(&complete_profile()).unwrap();
        assert!(config.graphql.auto_schema());
        assert_eq!(config.graphql.auto_schema_file, AutoSchemaFile::InMemory);
        assert_eq!(config.graphql.driver, GraphqlDriver::AsyncGraphql);
        assert_eq!(config.graphql.path, "/graphql");
        assert!(config.graphql.playground);
    }

    #[rstest]
    fn it_should_write_the_schema_to_a_file_when_configured() {
        let mut profile = complete_profile();
        profile.overlay([("GRAPHQL_SCHEMA_FILE", "schema.graphql")]);
        let config = AppConfig::from_profile(&profile).unwrap();
        assert!(config.graphql.auto_schema());
        assert_eq!(
            config.graphql.auto_schema_file,
            AutoSchemaFile::Path(PathBuf::from("schema.graphql"))
        );
    }
}

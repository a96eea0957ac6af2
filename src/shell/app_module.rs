// The application graph, assembled once at startup.
//
// Registration order is fixed: environment, datastore, GraphQL, then the feature
// modules. Nothing here talks to the outside world; `main` drives the subsystems
// with the configuration collected here.

use crate::modules::restaurants::module::RestaurantsModule;
use crate::shared::config::app_config::AppConfig;
use crate::shared::config::environment::{EnvironmentProfile, RunMode};
use crate::shared::config::error::ConfigError;
use crate::shared::core::feature_module::FeatureModule;
use crate::shared::infrastructure::database::EntitySchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Environment {
        mode: RunMode,
        env_file: &'static str,
    },
    Datastore,
    Graphql,
    Feature(&'static str),
}

pub struct AppModule {
    mode: RunMode,
    config: AppConfig,
    features: Vec<Box<dyn FeatureModule>>,
}

impl AppModule {
    pub fn compose(mode: RunMode, profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        let config = AppConfig::from_profile(profile)?;
        let features: Vec<Box<dyn FeatureModule>> = vec![Box::new(RestaurantsModule)];

        let module = Self {
            mode,
            config,
            features,
        };
        for registration in module.registrations() {
            tracing::debug!(?registration, "registered");
        }
        Ok(module)
    }

    pub fn registrations(&self) -> Vec<Registration> {
        let mut registrations = vec![
            Registration::Environment {
                mode: self.mode,
                env_file: self.mode.env_file_path(),
            },
            Registration::Datastore,
            Registration::Graphql,
        ];
        registrations.extend(
            self.features
                .iter()
                .map(|feature| Registration::Feature(feature.name())),
        );
        registrations
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn features(&self) -> &[Box<dyn FeatureModule>] {
        &self.features
    }

    /// Every table owned by the included feature modules.
    pub fn entities(&self) -> Vec<EntitySchema> {
        self.features
            .iter()
            .flat_map(|feature| feature.entities())
            .collect()
    }
}

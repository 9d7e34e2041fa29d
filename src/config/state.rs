// Application state: the single place where every component is built and wired

use std::sync::Arc;
use crate::actuator::{
    contributors::{hello_health_indicator, ExampleHealthIndicator, ExampleInfoContributor},
    health::HealthRegistry,
    info::InfoRegistry,
    Actuator,
};
use crate::config::environment::EnvironmentVariables;
use crate::services::greeting::GreetingService;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub greeting: GreetingService,
    pub actuator: Arc<Actuator>,
}

impl AppState {
    /// Builds the state from an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> anyhow::Result<Self> {
        let mut health: HealthRegistry = HealthRegistry::new();
        health.register("example", ExampleHealthIndicator)?;
        health.register("hello", hello_health_indicator)?;

        let mut info: InfoRegistry = InfoRegistry::new();
        info.register(ExampleInfoContributor);

        let actuator: Actuator = Actuator::new(health, info, environment.health_show_details);

        Ok(Self {
            environment: Arc::new(environment),
            greeting: GreetingService,
            actuator: Arc::new(actuator),
        })
    }

    /// Loads configuration from the environment and builds the state
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Self::new(environment)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment)
            .field("health_components", &self.actuator.health().names())
            .finish()
    }
}

// Start of file: /src/actuator/mod.rs

/*
    * Actuator-style operational endpoints: health indicators, info
    * contributors and the registry that serves both.
*/

pub mod contributors;
pub mod health;
pub mod info;

use axum::http::StatusCode;

use crate::config::environment::ShowDetails;
use health::{CompositeHealth, HealthRegistry};
use info::{Info, InfoRegistry};

pub struct Actuator {
    health: HealthRegistry,
    info: InfoRegistry,
    show_details: ShowDetails,
}

impl Actuator {
    pub fn new(health: HealthRegistry, info: InfoRegistry, show_details: ShowDetails) -> Self {
        Self {
            health,
            info,
            show_details,
        }
    }

    pub fn health(&self) -> &HealthRegistry {
        &self.health
    }

    /// The aggregated health document and the HTTP status it should be served with.
    pub fn health_report(&self) -> (StatusCode, CompositeHealth) {
        let composite: CompositeHealth = self.health.check(self.show_details == ShowDetails::Always);
        (composite.status.http_status(), composite)
    }

    pub fn info(&self) -> Info {
        self.info.info()
    }
}


// End of file: /src/actuator/mod.rs

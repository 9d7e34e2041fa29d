// Start of file: /src/actuator/contributors.rs

// * The indicators and contributors this service ships with.

use serde_json::json;

use super::health::{Health, HealthIndicator};
use super::info::{InfoBuilder, InfoContributor};

/// Always up, with a fixed counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExampleHealthIndicator;

impl HealthIndicator for ExampleHealthIndicator {
    fn health(&self) -> Health {
        Health::up().with_detail("counter", 42).build()
    }
}

pub fn hello_health_indicator() -> Health {
    Health::up().with_detail("hello", "world").build()
}

/// Publishes the `example` section of the info endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExampleInfoContributor;

impl InfoContributor for ExampleInfoContributor {
    fn contribute(&self, builder: &mut InfoBuilder) {
        builder.with_detail("example", json!({ "customKey": "This is an example value" }));
    }
}


// End of file: /src/actuator/contributors.rs

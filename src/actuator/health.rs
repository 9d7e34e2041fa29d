// Start of file: /src/actuator/health.rs

/*
    * Health model: indicators report a status plus free-form details, the
    * registry keeps them by name and folds their statuses into one.
*/

use std::{collections::BTreeMap, sync::Arc};

use anyhow::{bail, Result};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Up,
    Down,
    OutOfService,
    Unknown,
}

impl Status {
    // * Lower ranks win during aggregation
    fn rank(self) -> u8 {
        match self {
            Status::Down => 0,
            Status::OutOfService => 1,
            Status::Up => 2,
            Status::Unknown => 3,
        }
    }

    /// HTTP status the health endpoint answers with for this status.
    pub fn http_status(self) -> StatusCode {
        match self {
            Status::Down | Status::OutOfService => StatusCode::SERVICE_UNAVAILABLE,
            Status::Up | Status::Unknown => StatusCode::OK,
        }
    }
}

/// Folds many statuses into one, worst first. Nothing to fold is `Unknown`.
pub fn aggregate_status(statuses: impl IntoIterator<Item = Status>) -> Status {
    statuses
        .into_iter()
        .min_by_key(|status| status.rank())
        .unwrap_or(Status::Unknown)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Health {
    status: Status,
    #[serde(skip_serializing_if = "Map::is_empty")]
    details: Map<String, Value>,
}

impl Health {
    pub fn with_status(status: Status) -> HealthBuilder {
        HealthBuilder {
            status,
            details: Map::new(),
        }
    }

    pub fn up() -> HealthBuilder {
        Self::with_status(Status::Up)
    }

    pub fn down() -> HealthBuilder {
        Self::with_status(Status::Down)
    }

    pub fn out_of_service() -> HealthBuilder {
        Self::with_status(Status::OutOfService)
    }

    pub fn unknown() -> HealthBuilder {
        Self::with_status(Status::Unknown)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

pub struct HealthBuilder {
    status: Status,
    details: Map<String, Value>,
}

impl HealthBuilder {
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Health {
        Health {
            status: self.status,
            details: self.details,
        }
    }
}

/// Anything that can report on a part of the system.
pub trait HealthIndicator: Send + Sync {
    fn health(&self) -> Health;
}

impl<F> HealthIndicator for F
where
    F: Fn() -> Health + Send + Sync,
{
    fn health(&self) -> Health {
        self()
    }
}

/// The combined view over every registered indicator.
#[derive(Clone, Debug, Serialize)]
pub struct CompositeHealth {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<BTreeMap<String, Health>>,
}

#[derive(Default, Clone)]
pub struct HealthRegistry {
    indicators: BTreeMap<String, Arc<dyn HealthIndicator>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an indicator under a unique name.
    pub fn register<I>(&mut self, name: impl Into<String>, indicator: I) -> Result<()>
    where
        I: HealthIndicator + 'static,
    {
        let name: String = name.into();

        if name.is_empty() {
            bail!("Health indicator name must not be empty");
        }
        if self.indicators.contains_key(&name) {
            bail!("A health indicator named '{name}' is already registered");
        }

        self.indicators.insert(name, Arc::new(indicator));
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.indicators.keys().map(String::as_str).collect()
    }

    /// Runs a single indicator by name.
    pub fn component(&self, name: &str) -> Option<Health> {
        self.indicators.get(name).map(|indicator| indicator.health())
    }

    /// Runs every indicator once. Components are only kept when requested.
    pub fn check(&self, include_components: bool) -> CompositeHealth {
        let components: BTreeMap<String, Health> = self
            .indicators
            .iter()
            .map(|(name, indicator)| (name.clone(), indicator.health()))
            .collect();

        let status: Status = aggregate_status(components.values().map(Health::status));

        CompositeHealth {
            status,
            components: include_components.then_some(components),
        }
    }
}


// End of file: /src/actuator/health.rs

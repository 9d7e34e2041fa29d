// Start of file: /src/config/environment.rs

// * Environment configuration, loaded once at startup and handed to the
// * composition root. Nothing here is global: callers own the value.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
const DEFAULT_SERVICE_NAME: &str = "World";

// * Variables under this prefix belong to the `service.*` namespace
const SERVICE_PREFIX: &str = "SERVICE_";
const SERVICE_NAME_KEY: &str = "SERVICE_NAME";

/// Properties bound from the `service.*` namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceProperties {
    name: String,
}

impl Default for ServiceProperties {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl ServiceProperties {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the service name. A null assignment is rejected and leaves
    /// the current name untouched.
    pub fn set_name(&mut self, name: Option<String>) -> Result<()> {
        match name {
            Some(name) => {
                self.name = name;
                Ok(())
            }
            None => bail!("Name must not be null"),
        }
    }

    // * Binds the namespace from raw variables, refusing keys it does not know
    fn bind(get_var: impl Fn(&str) -> Option<String>, keys: &[&str]) -> Result<Self> {
        if let Some(unknown) = keys
            .iter()
            .find(|key| key.starts_with(SERVICE_PREFIX) && **key != SERVICE_NAME_KEY)
        {
            bail!("Unknown property '{unknown}' in the service namespace");
        }

        let mut properties: ServiceProperties = ServiceProperties::default();

        // ? A present variable always carries a value, even an empty one
        if let Some(raw) = get_var(SERVICE_NAME_KEY) {
            properties
                .set_name(Some(raw))
                .context("Invalid SERVICE_NAME value")?;
        }

        Ok(properties)
    }
}

/// Whether `/actuator/health` lists the individual components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowDetails {
    Never,
    Always,
}

impl std::str::FromStr for ShowDetails {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "never" => Ok(ShowDetails::Never),
            "always" => Ok(ShowDetails::Always),
            other => bail!("expected 'never' or 'always', got '{other}'"),
        }
    }
}

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub health_show_details: ShowDetails,
    pub service: ServiceProperties,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            health_show_details: ShowDetails::Always,
            service: ServiceProperties::default(),
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process and, outside
    // * production, from a .env file.
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        let config: EnvironmentVariables = Self::from_vars(&vars)?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    // * Builds the configuration from an explicit variable map, providing
    // * defaults for anything missing.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);
        let keys: Vec<&str> = vars.keys().map(String::as_str).collect();

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            protocol: get_var("PROTOCOL")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_PROTOCOL)),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            health_show_details: get_var("MANAGEMENT_HEALTH_SHOW_DETAILS")
                .map(|s| s.parse().context("Invalid MANAGEMENT_HEALTH_SHOW_DETAILS"))
                .transpose()?
                .unwrap_or(ShowDetails::Always),

            service: ServiceProperties::bind(|key| get_var(key).map(str::to_string), &keys)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let env = EnvironmentVariables::from_vars(&HashMap::new()).unwrap();

        assert_eq!(env.port, 8080);
        assert_eq!(env.host, "127.0.0.1");
        assert_eq!(env.service.name(), "World");
        assert_eq!(env.health_show_details, ShowDetails::Always);
    }

    #[test]
    fn service_name_is_read_from_its_namespace() {
        let env = EnvironmentVariables::from_vars(&vars(&[("SERVICE_NAME", "Docker")])).unwrap();
        assert_eq!(env.service.name(), "Docker");
    }

    #[test]
    fn empty_service_name_is_bound_as_is() {
        let env = EnvironmentVariables::from_vars(&vars(&[("SERVICE_NAME", "")])).unwrap();
        assert_eq!(env.service.name(), "");
    }

    #[test]
    fn unknown_service_keys_are_rejected() {
        let result = EnvironmentVariables::from_vars(&vars(&[("SERVICE_COLOUR", "blue")]));
        assert!(result.is_err());
    }

    #[test]
    fn null_assignment_keeps_previous_name() {
        let mut properties = ServiceProperties::default();

        assert!(properties.set_name(None).is_err());
        assert_eq!(properties.name(), "World");

        properties.set_name(Some("Home".into())).unwrap();
        assert_eq!(properties.name(), "Home");
    }

    #[test]
    fn invalid_numbers_fail_loudly() {
        assert!(EnvironmentVariables::from_vars(&vars(&[("PORT", "eighty")])).is_err());
        assert!(EnvironmentVariables::from_vars(&vars(&[(
            "MANAGEMENT_HEALTH_SHOW_DETAILS",
            "sometimes"
        )]))
        .is_err());
    }
}

// End of file: /src/config/environment.rs

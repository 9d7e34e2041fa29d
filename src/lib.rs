// Library root for the actuator sample service

pub mod actuator;
pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::config::environment::{EnvironmentVariables, ServiceProperties};
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::utils::error_handler::AppError;

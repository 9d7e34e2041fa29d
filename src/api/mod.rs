// HTTP surface: one sub-module per route group, each with routes + handlers

pub mod actuator;
pub mod sample;

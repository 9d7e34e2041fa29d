// Process-level plumbing: logging setup, router assembly, listener and shutdown

pub mod logging;
pub mod server;

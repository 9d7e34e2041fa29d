// Start of file: /src/config/mod.rs

/*
    * Configuration loaded at startup and the state built from it.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs

// Start of file: /src/models/mod.rs

/*
    * Wire-level data models shared by handlers and services.
*/

pub mod message;

// End of file: /src/models/mod.rs

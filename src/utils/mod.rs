// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers: error translation, response logging and
    * JSON formatting.
*/

pub mod error_handler;
pub mod response_handler;
pub mod utils;

// End of file: /src/utils/mod.rs

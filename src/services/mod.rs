// Start of file: /src/services/mod.rs

/*
    * Business logic behind the root endpoints: the greeting, message
    * validation and the message-to-response mapping.
*/

pub mod greeting;
pub mod mapper;
pub mod validation;

// End of file: /src/services/mod.rs

// Start of file: /src/services/greeting.rs

const GREETING: &str = "Spring boot says hello from a Docker container";

#[derive(Clone, Copy, Debug, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn greeting(&self) -> &'static str {
        GREETING
    }
}


// End of file: /src/services/greeting.rs

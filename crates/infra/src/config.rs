use tracing::{info, warn};

const DEFAULT_MESSAGE: &str = "Hello from the backend!";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Content served by the message endpoint
    pub message: String,
}

impl Config {
    pub fn new() -> Self {
        let message = match std::env::var("MESSAGE") {
            Ok(message) => message,
            Err(_) => {
                info!(
                    "Did not find MESSAGE environment variable. Falling back to the default message."
                );
                DEFAULT_MESSAGE.into()
            }
        };
        let default_port = "8000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        Self { port, message }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_port_when_invalid() {
        std::env::set_var("PORT", "not-a-port");
        let config = Config::new();
        assert_eq!(config.port, 8000);
        std::env::remove_var("PORT");
    }
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: Box<Error>,
    },

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown coffee '{0}' (expected one of: espresso, cappuccino, latte)")]
    UnknownCoffee(String),

    #[error("Scenario has no orders")]
    EmptyOrders,
}

impl Error {
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }

    pub fn parse_config(path: impl Into<PathBuf>, source: Error) -> Self {
        Self::ParseConfig {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::UnknownCoffee("mocha".to_string());
        assert!(err.to_string().contains("'mocha'"));
        assert_eq!(Error::EmptyOrders.to_string(), "Scenario has no orders");
    }

    #[test]
    fn test_read_config_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::read_config("orders.toml", io);
        let msg = err.to_string();
        assert!(msg.contains("orders.toml"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_parse_config_names_file_and_cause() {
        let err = Error::parse_config("orders.json", Error::EmptyOrders);
        assert_eq!(err.to_string(), "Failed to parse orders.json: Scenario has no orders");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_location() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  oops").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().contains("line 2"));
    }
}

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use self::config::*;
pub use error::*;
pub use logging::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.database.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.database.database_name, "cine");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_error_handling() {
        let error = CineError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");

        let error = CineError::store_unavailable("connection refused");
        assert_eq!(error.error_code(), "STORE_UNAVAILABLE");
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error {status}: {body}")]
    Storage { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let storage = KioskError::Storage {
            status: 401,
            body: "JWT expired".to_string(),
        };
        assert_eq!(storage.to_string(), "Storage error 401: JWT expired");
        assert_eq!(
            KioskError::OrderNotFound("abc".to_string()).to_string(),
            "Order not found: abc"
        );
        assert_eq!(
            KioskError::Config("SUPABASE_URL is empty".to_string()).to_string(),
            "Configuration error: SUPABASE_URL is empty"
        );
    }
}

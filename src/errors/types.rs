use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, schema or query failure in the report store.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The record could not be inserted as given (missing required column,
    /// constraint violation). Nothing was written.
    #[error("Insert error: {0}")]
    Insert(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl EchoError {
    /// Process exit code for this error when it reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            EchoError::Config(_) | EchoError::Yaml(_) => 2,
            EchoError::Storage(_) => 3,
            EchoError::Insert(_) | EchoError::Validation(_) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EchoError::Config("bad".into()).exit_code(), 2);
        assert_eq!(EchoError::Storage("locked".into()).exit_code(), 3);
        assert_eq!(EchoError::Insert("missing lv_size".into()).exit_code(), 4);
        assert_eq!(EchoError::NotFound("report 9".into()).exit_code(), 1);
    }

    #[test]
    fn test_display_prefixes() {
        let err = EchoError::Insert("Missing required field: scan_quality".into());
        assert_eq!(err.to_string(), "Insert error: Missing required field: scan_quality");
    }
}

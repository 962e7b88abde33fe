//! Schema registry error types.

use thiserror::Error;

/// Errors raised by schema lookups.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::NotFound("Input".into()).to_string(),
            "Schema not found: Input"
        );
    }
}

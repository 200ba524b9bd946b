//! Error types for keypunt.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeypuntError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Input parsing errors
    #[error("Failed to parse segments from {path}: {message}")]
    SegmentParse { path: String, message: String },

    #[error("Failed to parse candidates from {path}: {message}")]
    CandidateParse { path: String, message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, KeypuntError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_segment_parse_display() {
        let error = KeypuntError::SegmentParse {
            path: "segments.json".to_string(),
            message: "expected an array".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse segments from segments.json: expected an array"
        );
    }

    #[test]
    fn test_candidate_parse_display() {
        let error = KeypuntError::CandidateParse {
            path: "candidates.json".to_string(),
            message: "missing score".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse candidates from candidates.json: missing score"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: KeypuntError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: KeypuntError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);

        fn returns_error() -> Result<i32> {
            Err(KeypuntError::SegmentParse {
                path: "segments.json".to_string(),
                message: "test error".to_string(),
            })
        }
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: KeypuntError = io_error.into();

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<KeypuntError>();
        assert_sync::<KeypuntError>();
    }

    #[test]
    fn test_error_debug_format() {
        let error = KeypuntError::CandidateParse {
            path: "/test/path".to_string(),
            message: "expected an array".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("CandidateParse"));
        assert!(debug_str.contains("/test/path"));
    }
}

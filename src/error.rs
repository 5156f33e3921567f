use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// A peg label or key that names none of the three pegs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown peg '{0}' (expected A, B, C or 1, 2, 3)")]
pub struct ParsePegError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("puzzle.size must be <= 20".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: puzzle.size must be <= 20"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("hanoi.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file hanoi.toml: denied"
        );
    }

    #[test]
    fn test_parse_peg_error_display() {
        let err = ParsePegError("x".to_string());
        assert_eq!(
            err.to_string(),
            "unknown peg 'x' (expected A, B, C or 1, 2, 3)"
        );
    }
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("navigation error: {0}")]
    NavigationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuickJumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bridge error: {0}")]
    Bridge(String),
}

impl From<serde_json::Error> for QuickJumpError {
    fn from(e: serde_json::Error) -> Self {
        Self::Bridge(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("picker.max_results = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: picker.max_results = 0"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::NavigationError("tab 7 is gone".into());
        assert_eq!(err.to_string(), "navigation error: tab 7 is gone");
    }

    #[test]
    fn quickjump_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: QuickJumpError = config_err.into();
        assert!(matches!(err, QuickJumpError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn quickjump_error_from_platform() {
        let platform_err = PlatformError::NavigationError("window closed".into());
        let err: QuickJumpError = platform_err.into();
        assert!(matches!(err, QuickJumpError::Platform(_)));
        assert!(err.to_string().contains("window closed"));
    }

    #[test]
    fn quickjump_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: QuickJumpError = io_err.into();
        assert!(matches!(err, QuickJumpError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn quickjump_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: QuickJumpError = json_err.into();
        assert!(matches!(err, QuickJumpError::Bridge(_)));
        assert!(err.to_string().starts_with("bridge error: "));
    }
}

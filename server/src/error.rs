use std::fmt;

#[derive(Debug)]
pub enum SiteError {
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for SiteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display() {
        let err = SiteError::Config("Invalid LEPTOS_SITE_ADDR".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid LEPTOS_SITE_ADDR"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: SiteError = io.into();
        assert!(matches!(err, SiteError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.source().is_some());
    }
}

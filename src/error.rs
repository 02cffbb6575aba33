//! Error types for popkit
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! The toolkit is almost entirely total; these cover the few recoverable
//! lookups plus style-sheet parsing.

use snafu::Snafu;

/// Main error type for the toolkit
#[derive(Debug, Snafu)]
pub enum Error {
    /// Shared default indicator requested before one was registered
    #[snafu(display(
        "no default indicator registered; call SharedIndicator::set before requesting it"
    ))]
    DefaultIndicatorUnset,

    /// Toast style lookup miss
    #[snafu(display("no toast style registered for key {key:?}"))]
    StyleNotFound { key: String },

    /// Style-sheet deserialization error
    #[snafu(display("style sheet parse error: {source}"))]
    StyleSheet { source: toml::de::Error },
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::StyleSheet { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::StyleNotFound {
            key: "success".into(),
        };
        assert_eq!(
            err.to_string(),
            "no toast style registered for key \"success\""
        );
        assert!(
            Error::DefaultIndicatorUnset
                .to_string()
                .contains("SharedIndicator::set")
        );
    }
}

//! Crate-level error types.

use std::fmt;

use crate::focus::TargetId;

/// Errors produced by the focal crate.
///
/// Runtime operations (`tick`, `back`, hover updates on known targets) are
/// total; everything here surfaces either at scene setup or as a caller
/// integration bug.
#[derive(Debug)]
pub enum FocalError {
    /// A target id was registered twice.
    DuplicateTarget(TargetId),
    /// A target id was looked up, focused, or hovered without being
    /// registered.
    UnknownTarget(TargetId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FocalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTarget(id) => {
                write!(f, "focus target '{id}' is already registered")
            }
            Self::UnknownTarget(id) => {
                write!(f, "unknown focus target '{id}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FocalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FocalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_target() {
        let err = FocalError::UnknownTarget(TargetId::from("stage"));
        assert_eq!(err.to_string(), "unknown focus target 'stage'");

        let err = FocalError::DuplicateTarget(TargetId::from("market"));
        assert!(err.to_string().contains("market"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = FocalError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}

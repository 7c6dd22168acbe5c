//! Error types for the two I/O surfaces: the config file and the
//! statistics store.
//!
//! Rule violations are never errors. An illegal move is `false`, an
//! illegal selection is `None`.

use std::fmt;
use std::io;

/// Failure to read or parse the text configuration.
///
/// Non-fatal: callers fall back to `Config::default()`.
#[derive(Debug)]
pub enum ConfigError {
    /// A non-blank line with no `=`.
    MissingEquals { line: usize },
    /// The key is not one of the five known settings.
    UnknownKey { line: usize, key: String },
    /// Expected `true` or `false`.
    InvalidBool { line: usize, value: String },
    /// Expected an integer in `0..=255`.
    InvalidNumber { line: usize, value: String },
    /// Reading the file or writing the defaults failed.
    Io(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEquals { line } => write!(f, "line {line}: missing '='"),
            Self::UnknownKey { line, key } => write!(f, "line {line}: invalid setting '{key}'"),
            Self::InvalidBool { line, value } => write!(f, "line {line}: invalid bool '{value}'"),
            Self::InvalidNumber { line, value } => {
                write!(f, "line {line}: invalid number '{value}' (expected 0..=255)")
            }
            Self::Io(err) => write!(f, "config file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Failure to load or persist the statistics store.
///
/// `Write` must be treated as fatal by the caller: accumulated records
/// would otherwise be lost silently.
#[derive(Debug)]
pub enum StatsError {
    /// The file exists but could not be read.
    Read(io::Error),
    /// The file could not be written.
    Write(io::Error),
    /// Record `index` could not be decoded.
    Corrupt { index: usize, source: bincode::Error },
    /// A record could not be encoded.
    Encode(bincode::Error),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "reading statistics: {err}"),
            Self::Write(err) => write!(f, "writing statistics: {err}"),
            Self::Corrupt { index, source } => write!(f, "statistics record {index} is corrupt: {source}"),
            Self::Encode(err) => write!(f, "encoding statistics record: {err}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::Corrupt { source, .. } => Some(&**source),
            Self::Encode(err) => Some(&**err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownKey { line: 3, key: "speed".to_string() };
        assert_eq!(err.to_string(), "line 3: invalid setting 'speed'");

        let err = ConfigError::InvalidNumber { line: 1, value: "300".to_string() };
        assert!(err.to_string().contains("0..=255"));
    }

    #[test]
    fn test_stats_error_source() {
        use std::error::Error;

        let err = StatsError::Write(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("writing statistics"));
    }
}

// HitMapper - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Lines that fail to match are not errors; only stream and config
// failures are represented here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all HitMapper operations.
#[derive(Debug)]
pub enum HitMapperError {
    /// Reading input or writing output failed.
    Stream(StreamError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for HitMapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(e) => write!(f, "Stream error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for HitMapperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Stream errors
// ---------------------------------------------------------------------------

/// Failures of the stdin/stdout data streams.
#[derive(Debug)]
pub enum StreamError {
    /// A line could not be read or decoded as UTF-8.
    Read { line_number: u64, source: io::Error },

    /// An output record could not be written (e.g. broken pipe).
    Write { line_number: u64, source: io::Error },

    /// Buffered output could not be flushed at end of stream.
    Flush { source: io::Error },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read {
                line_number,
                source,
            } => write!(f, "failed to read input line {line_number}: {source}"),
            Self::Write {
                line_number,
                source,
            } => write!(
                f,
                "failed to write output for input line {line_number}: {source}"
            ),
            Self::Flush { source } => write!(f, "failed to flush output: {source}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Flush { source } => Some(source),
        }
    }
}

impl From<StreamError> for HitMapperError {
    fn from(e: StreamError) -> Self {
        Self::Stream(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::FileTooLarge { .. } => None,
        }
    }
}

impl From<ConfigError> for HitMapperError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for HitMapper results.
pub type Result<T> = std::result::Result<T, HitMapperError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_stream_error_display_names_line() {
        let err = HitMapperError::from(StreamError::Write {
            line_number: 42,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        });
        let msg = err.to_string();
        assert!(msg.contains("line 42"), "got: {msg}");
        assert!(msg.contains("pipe closed"), "got: {msg}");
    }

    #[test]
    fn test_source_chain_reaches_io_error() {
        let err = HitMapperError::from(StreamError::Flush {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        });
        let stream = err.source().expect("stream error source");
        let io = stream.source().expect("io error source");
        assert_eq!(io.to_string(), "pipe closed");
    }

    #[test]
    fn test_file_too_large_has_no_source() {
        let err = ConfigError::FileTooLarge {
            path: PathBuf::from("big.toml"),
            size: 100,
            max_size: 10,
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("big.toml"));
    }
}

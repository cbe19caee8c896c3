//! Error handling types for xmlwalk
//!
//! Every failure the program can report is an [`Error`] with one of a small
//! number of categories. Invalid paths typed at the prompt are not errors at
//! all: the resolver handles them by asking again.

use std::{error::Error as StdError, fmt, io};

/// Main error type for xmlwalk
#[derive(Debug)]
pub struct Error {
    /// The specific kind of error
    kind: ErrorKind,
    /// Location in the XML text, for syntax errors
    location: Option<Location>,
    /// Additional context, usually the path being processed
    context: Option<String>,
    /// Underlying error that caused this one
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Represents a location in the XML text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    IO(IOError),
    Syntax(SyntaxError),
    Security(SecurityError),
    Config(ConfigError),
    Input(InputError),
}

/// File access errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file, including invalid UTF-8
    ReadError(String),
    /// Error writing the tree
    WriteError(String),
}

/// The document is not well-formed XML
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    Malformed(String),
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// File is larger than the configured maximum
    MaxSizeExceeded { size: u64, max: u64 },
    /// Elements nest deeper than the configured maximum
    DepthExceeded { depth: usize, max: usize },
}

/// Parser setup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNodesLimit,
    InvalidMaxSize,
    InvalidMaxDepth,
    /// The parsing thread could not be started or did not finish
    ParserThread(String),
}

/// Failures while reading a path from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input closed before an existing file was named
    EndOfInput,
    ReadError(String),
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
            context: None,
            source: None,
        }
    }

    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Maps an [`io::Error`] raised while reading `path` onto [`IOError`].
    pub fn from_read(err: io::Error, path: &str) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::ReadError(err.to_string()),
        };
        Self::new(ErrorKind::IO(kind)).with_source(err)
    }

    pub fn from_write(err: io::Error) -> Self {
        Self::new(ErrorKind::IO(IOError::WriteError(err.to_string()))).with_source(err)
    }

    /// Short label used in the user facing failure message.
    pub fn category(&self) -> &'static str {
        match self.kind {
            ErrorKind::IO(_) | ErrorKind::Syntax(_) | ErrorKind::Security(_) => "SAXException",
            ErrorKind::Config(_) => "configuration",
            ErrorKind::Input(_) => "input",
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::new(ErrorKind::Syntax(SyntaxError::Malformed(err.to_string())))
            .with_location(pos.row, pos.col)
            .with_source(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::IO(err) => write!(f, "{}", err)?,
            ErrorKind::Syntax(err) => write!(f, "{}", err)?,
            ErrorKind::Security(err) => write!(f, "{}", err)?,
            ErrorKind::Config(err) => write!(f, "{}", err)?,
            ErrorKind::Input(err) => write!(f, "{}", err)?,
        }

        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }

        Ok(())
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(path) => write!(f, "Permission denied: {}", path),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // roxmltree messages already carry the position
            Self::Malformed(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSizeExceeded { size, max } => {
                write!(f, "File is {} bytes, maximum input size is {} bytes", size, max)
            }
            Self::DepthExceeded { depth, max } => {
                write!(f, "Elements nest {} levels deep, maximum depth is {}", depth, max)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNodesLimit => write!(f, "nodes limit must be greater than zero"),
            Self::InvalidMaxSize => write!(f, "maximum input size must be greater than zero"),
            Self::InvalidMaxDepth => write!(f, "maximum depth must be greater than zero"),
            Self::ParserThread(msg) => write!(f, "parser thread failed: {}", msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "input ended before a file path was entered"),
            Self::ReadError(msg) => write!(f, "could not read from input: {}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Error::from_read(io_err, "missing.xml");
        assert_eq!(
            err.kind(),
            &ErrorKind::IO(IOError::FileNotFound("missing.xml".to_string()))
        );
        assert_eq!(err.to_string(), "File not found: missing.xml");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_syntax_error_keeps_position() {
        let result = roxmltree::Document::parse("<a>").map_err(Error::from);
        let Err(err) = result else {
            panic!("unclosed root element should not parse");
        };
        assert!(matches!(err.kind(), ErrorKind::Syntax(_)));
        assert!(err.location().is_some());
        assert_eq!(err.category(), "SAXException");
    }

    #[test]
    fn test_context_is_appended() {
        let err = Error::new(ErrorKind::Config(ConfigError::InvalidNodesLimit))
            .with_context("--nodes-limit");
        assert_eq!(
            err.to_string(),
            "nodes limit must be greater than zero (--nodes-limit)"
        );
    }
}

use roxmltree::ParsingOptions;

use crate::error::{ConfigError, Error, ErrorKind, Result};

pub const DEFAULT_MAX_SIZE: u64 = 64 * 1024 * 1024; // 64MB
pub const DEFAULT_NODES_LIMIT: u32 = u32::MAX;
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Configuration for the XML parser and its input limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept documents with a DOCTYPE and expand its internal entities
    pub allow_dtd: bool,
    /// Maximum number of nodes the parser may allocate
    pub nodes_limit: u32,
    /// Maximum input size in bytes
    pub max_size: u64,
    /// Maximum element nesting depth
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_dtd: true,
            nodes_limit: DEFAULT_NODES_LIMIT,
            max_size: DEFAULT_MAX_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        if self.nodes_limit == 0 {
            return Err(Error::new(ErrorKind::Config(ConfigError::InvalidNodesLimit)));
        }
        if self.max_size == 0 {
            return Err(Error::new(ErrorKind::Config(ConfigError::InvalidMaxSize)));
        }
        if self.max_depth == 0 {
            return Err(Error::new(ErrorKind::Config(ConfigError::InvalidMaxDepth)));
        }
        Ok(())
    }

    pub fn parsing_options(&self) -> ParsingOptions {
        let mut options = ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;
        options.nodes_limit = self.nodes_limit;
        options
    }
}

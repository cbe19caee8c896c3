//! Loading and parsing XML documents
//!
//! The file is read into memory in one go, decoded to UTF-8 and handed to
//! `roxmltree`, a non-validating parser. The resulting [`roxmltree::Document`]
//! borrows the text owned by [`XmlSource`], so the source must outlive the
//! tree.
//!
//! `roxmltree` descends recursively into nested elements. The nesting depth
//! is measured before parsing and checked against
//! [`ParserConfig::max_depth`], and [`XmlSource::render`] parses on a thread
//! whose stack is sized for that depth.

pub mod config;
pub mod depth;
pub mod encoding;

use std::{fs, path::Path, thread};

use roxmltree::Document;
use tracing::{debug, info, instrument};

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, DEFAULT_NODES_LIMIT};
pub use depth::nesting_depth;

use crate::{
    error::{ConfigError, Error, ErrorKind, Result, SecurityError},
    formatter::{FormatConfig, TreeFormatter},
};

const BOM: char = '\u{FEFF}';

// Parser thread stack: a fixed base plus room per nesting level
const STACK_BASE: usize = 2 * 1024 * 1024;
const STACK_PER_LEVEL: usize = 16 * 1024;

/// The text of an XML file together with the options used to parse it
#[derive(Debug, Clone)]
pub struct XmlSource {
    text: String,
    config: ParserConfig,
}

impl XmlSource {
    /// Reads `path` into memory. The file is closed before this returns.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path, config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let display = path.display().to_string();

        let metadata = fs::metadata(path).map_err(|e| Error::from_read(e, &display))?;
        if metadata.len() > config.max_size {
            return Err(Error::new(ErrorKind::Security(SecurityError::MaxSizeExceeded {
                size: metadata.len(),
                max: config.max_size,
            }))
            .with_context(display));
        }

        let bytes = fs::read(path).map_err(|e| Error::from_read(e, &display))?;
        debug!("Read {} bytes", bytes.len());

        let text = encoding::decode(&bytes, &display)?;

        info!("File read successfully");
        Ok(Self::from_text(text, config.clone()))
    }

    pub fn from_text(text: impl Into<String>, config: ParserConfig) -> Self {
        let mut text = text.into();
        if text.starts_with(BOM) {
            text.drain(..BOM.len_utf8());
        }
        Self { text, config }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses on the calling thread.
    ///
    /// Documents near [`ParserConfig::max_depth`] may need more stack than
    /// the caller has; [`XmlSource::render`] does not have that problem.
    pub fn parse(&self) -> Result<Document<'_>> {
        let doc = parse_str(&self.text, &self.config)?;
        debug!(
            "Parsed document with root element <{}>",
            doc.root_element().tag_name().name()
        );
        Ok(doc)
    }

    /// Parses the text and formats its element tree.
    ///
    /// Both steps run on a dedicated thread with a stack large enough for
    /// the document's nesting depth.
    pub fn render(&self, format: &FormatConfig) -> Result<String> {
        let depth = check_depth(&self.text, &self.config)?;
        let stack_size = STACK_BASE.saturating_add(depth.saturating_mul(STACK_PER_LEVEL));
        debug!("Parsing {} levels on a {} byte stack", depth, stack_size);

        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name("xmlwalk-parse".to_string())
                .stack_size(stack_size)
                .spawn_scoped(scope, || -> Result<String> {
                    let doc =
                        Document::parse_with_options(&self.text, self.config.parsing_options())?;
                    Ok(TreeFormatter::new(format.clone()).format(doc.root_element()))
                })
                .map_err(|e| {
                    Error::new(ErrorKind::Config(ConfigError::ParserThread(e.to_string())))
                        .with_source(e)
                })?;

            worker.join().map_err(|_| {
                Error::new(ErrorKind::Config(ConfigError::ParserThread(
                    "parser thread panicked".to_string(),
                )))
            })?
        })
    }
}

/// Parses in-memory XML text.
pub fn parse_str<'input>(text: &'input str, config: &ParserConfig) -> Result<Document<'input>> {
    check_depth(text, config)?;
    Ok(Document::parse_with_options(text, config.parsing_options())?)
}

fn check_depth(text: &str, config: &ParserConfig) -> Result<usize> {
    config.validate()?;
    let depth = nesting_depth(text);
    if depth > config.max_depth {
        return Err(Error::new(ErrorKind::Security(SecurityError::DepthExceeded {
            depth,
            max: config.max_depth,
        })));
    }
    Ok(depth)
}

/// Byte offset of the first `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

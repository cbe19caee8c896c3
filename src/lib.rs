//! xmlwalk: print the element tree of an XML file
//!
//! This crate provides functionality to:
//! - Ask the user for the path of an XML file until a readable one is given
//! - Decode and parse the file with a non-validating XML parser
//! - Print every element, its attributes and its text as a tab-indented tree
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//! use xmlwalk::{dump_file, ParserConfig, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = dump_file(Path::new("catalog.xml"), &ParserConfig::default())?;
//!     print!("{}", tree);
//!     Ok(())
//! }
//! ```

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

pub mod error;
pub mod formatter;
pub mod parser;
pub mod resolver;
pub mod test_utils;

// Re-exports
pub use error::{Error, ErrorKind, Result};
pub use formatter::{format_document, FormatConfig, TreeFormatter};
pub use parser::{parse_str, ParserConfig, XmlSource};
pub use resolver::{resolve_initial, resolve_path};

/// Everything a single run needs besides its input and output streams
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to try before prompting
    pub file: Option<PathBuf>,
    pub parser: ParserConfig,
    pub format: FormatConfig,
}

/// Resolves a path, parses the file and writes its tree to `output`.
///
/// Nothing from the tree is written unless the whole document parsed.
pub fn run<R, W>(options: &RunOptions, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let path = resolve_initial(options.file.as_deref(), input, output)?;
    let source = XmlSource::open(&path, &options.parser)?;
    let tree = source.render(&options.format)?;

    info!("Printing tree of {}", path.display());
    output
        .write_all(tree.as_bytes())
        .and_then(|()| output.flush())
        .map_err(Error::from_write)?;

    debug!("Done");
    Ok(())
}

/// Reads, parses and formats the file at `path` in one call.
#[instrument(skip(config))]
pub fn dump_file(path: &Path, config: &ParserConfig) -> Result<String> {
    XmlSource::open(path, config)?.render(&FormatConfig::default())
}

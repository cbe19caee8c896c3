mod fixtures;
mod helpers;

pub use fixtures::{INVALID_XML_SAMPLES, TREE_SAMPLES};
pub use helpers::{dump_str, tmp_file_path, write_tmp_bytes, write_tmp_file};

// Re-export common test types/traits
pub use crate::{
    dump_file,
    error::{
        ConfigError, Error, ErrorKind, IOError, InputError, Result, SecurityError, SyntaxError,
    },
    formatter::{
        attribute_pairs, format_document, has_element_children, qualified_name, text_content,
        FormatConfig, TreeFormatter,
    },
    parser::{
        nesting_depth, parse_str, ParserConfig, XmlSource, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE,
        DEFAULT_NODES_LIMIT,
    },
    resolver::{is_existing_file, resolve_initial, resolve_path, PROMPT, RETRY_MESSAGE},
    run, RunOptions,
};

use std::{env, fs, path::PathBuf};

use crate::{
    error::{Error, Result},
    formatter::FormatConfig,
    parser::{ParserConfig, XmlSource},
};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("xmlwalk_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Writes `content` to a fresh file under the shared temp directory.
pub fn write_tmp_file(name: &str, content: &str) -> Result<PathBuf> {
    let path = tmp_file_path(name);
    fs::write(&path, content).map_err(Error::from_write)?;
    Ok(path)
}

/// Like [`write_tmp_file`], for content that is not UTF-8.
pub fn write_tmp_bytes(name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = tmp_file_path(name);
    fs::write(&path, content).map_err(Error::from_write)?;
    Ok(path)
}

/// Parses `xml` with the default configuration and returns its tree dump.
pub fn dump_str(xml: &str) -> Result<String> {
    XmlSource::from_text(xml, ParserConfig::default()).render(&FormatConfig::default())
}

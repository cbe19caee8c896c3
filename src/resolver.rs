//! Interactive selection of the XML file

use std::{
    fs::File,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::error::{Error, ErrorKind, InputError, Result};

pub const PROMPT: &str = "Enter the route for the xml file you want to read: ";
pub const RETRY_MESSAGE: &str = "File not found, try again.";

/// True if `path` is a regular file that can be opened for reading.
pub fn is_existing_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// Prompts on `output` and reads lines from `input` until one of them names
/// an existing, readable file.
///
/// Only end of input (or a failing input stream) stops the loop.
pub fn resolve_path<R, W>(input: &mut R, output: &mut W) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        write_line(output, PROMPT)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| {
            Error::new(ErrorKind::Input(InputError::ReadError(e.to_string()))).with_source(e)
        })?;
        if read == 0 {
            debug!("Input closed after {} prompts", attempts);
            return Err(Error::new(ErrorKind::Input(InputError::EndOfInput)));
        }

        let candidate = Path::new(strip_line_ending(&line));
        if is_existing_file(candidate) {
            info!("Using {} after {} prompts", candidate.display(), attempts);
            return Ok(candidate.to_path_buf());
        }

        debug!("Not a readable file: {:?}", candidate);
        write_line(output, RETRY_MESSAGE)?;
    }
}

/// Uses `candidate` when it names an existing file, otherwise falls back to
/// prompting.
pub fn resolve_initial<R, W>(
    candidate: Option<&Path>,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    if let Some(path) = candidate {
        if is_existing_file(path) {
            return Ok(path.to_path_buf());
        }
        debug!("Not a readable file: {:?}", path);
        write_line(output, RETRY_MESSAGE)?;
    }
    resolve_path(input, output)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{}", text)
        .and_then(|()| output.flush())
        .map_err(Error::from_write)
}

//! Reading routing input from files and streams.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::RouterError;

/// Read all of `reader` as UTF-8 text.
pub fn read_input<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Read the file at `path` as routing input.
pub fn read_input_file(path: &Path) -> Result<String, RouterError> {
    let file = File::open(path)?;
    let text = read_input(BufReader::new(file))?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

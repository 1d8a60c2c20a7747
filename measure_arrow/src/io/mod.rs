//! File input and output helpers for measurement requests and drawings.

use std::fs::File;
use std::io::{self, Read, Write};

pub mod request;

pub use request::{parse_requests_json, read_requests_json, write_requests_json, RequestFile};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

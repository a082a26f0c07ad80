use std::fs;
use std::path::Path;

use winnow::{
    Parser,
    ascii::{hex_uint, multispace0},
    combinator::{delimited, preceded, separated},
};

use crate::error::{FixtureError, Result};

/// Writes `bytes` verbatim to `path`, creating parent directories and
/// truncating any existing file. No header or length prefix is added.
pub fn write_fixture(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, bytes).map_err(io_err)?;
    tracing::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Renders bytes as `[0x2c, 0x3a, 0x0]`.
pub fn to_hex_list(bytes: &[u8]) -> String {
    let literals: Vec<String> = bytes.iter().map(|byte| format!("{byte:#x}")).collect();
    format!("[{}]", literals.join(", "))
}

/// Parses the output of [`to_hex_list`], tolerating extra whitespace.
pub fn parse_hex_list(text: &str) -> Result<Vec<u8>> {
    delimited(multispace0, hex_list, multispace0)
        .parse(text.as_bytes())
        .map_err(|e| FixtureError::Parse(e.to_string()))
}

fn hex_list(input: &mut &[u8]) -> winnow::Result<Vec<u8>> {
    delimited(
        (b'[', multispace0),
        separated(0.., hex_literal, (multispace0, b',', multispace0)),
        (multispace0, b']'),
    )
    .parse_next(input)
}

fn hex_literal(input: &mut &[u8]) -> winnow::Result<u8> {
    preceded("0x", hex_uint).parse_next(input)
}

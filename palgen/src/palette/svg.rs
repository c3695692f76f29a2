//! SVG palette parsing (`name r g b` lines)

use std::io::BufRead;
use std::path::Path;

use super::NamedColor;
use crate::error::{Error, Result};

/// Parse an SVG palette from a line-oriented reader.
///
/// Yields one `([name], rgb)` pair per line, lazily. Lines starting with
/// `!` are comments and are skipped; every other line must be exactly
/// `name r g b`. Malformed lines surface as errors carrying `origin` and
/// the 1-based line number rather than being dropped, since a silently
/// skipped color would corrupt the generated file undetected.
pub fn parse<R: BufRead>(reader: R, origin: &Path) -> impl Iterator<Item = Result<NamedColor>> {
    let origin = origin.to_path_buf();
    reader
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| match line {
            Err(e) => Some(Err(e.into())),
            Ok(line) if line.starts_with('!') => None,
            Ok(line) => Some(parse_line(&line, &origin, idx + 1)),
        })
}

fn parse_line(line: &str, origin: &Path, line_no: usize) -> Result<NamedColor> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(Error::FieldCount {
            path: origin.to_path_buf(),
            line: line_no,
            expected: 4,
            found: fields.len(),
        });
    }

    let rgb = super::parse_rgb(&fields[1..4], origin, line_no)?;
    Ok((vec![fields[0].to_string()], rgb))
}

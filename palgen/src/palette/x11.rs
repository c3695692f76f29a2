//! X11 `rgb.txt` parsing (`r g b name...` lines)

use std::io::BufRead;
use std::path::Path;

use super::NamedColor;
use crate::error::{Error, Result};

/// Parse an X11 `rgb.txt` palette from a line-oriented reader.
///
/// Yields one `(name words, rgb)` pair per eligible line, lazily. The
/// name consumes every token after the three numeric fields, so names may
/// span multiple words. Per line:
///
/// - lines starting with `!` are skipped;
/// - lines whose first name word starts with an uppercase letter are
///   skipped (drops the CamelCase duplicates of the spaced names);
/// - lines containing the substring `grey` anywhere are skipped, matching
///   the raw line rather than just the name field;
/// - fewer than 4 fields, or a non-numeric RGB field on a line that
///   passes the filters, is a fatal error.
pub fn parse<R: BufRead>(reader: R, origin: &Path) -> impl Iterator<Item = Result<NamedColor>> {
    let origin = origin.to_path_buf();
    reader
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| match line {
            Err(e) => Some(Err(e.into())),
            Ok(line) if line.starts_with('!') => None,
            Ok(line) => parse_line(&line, &origin, idx + 1).transpose(),
        })
}

/// `Ok(None)` means the line was filtered out, not malformed.
fn parse_line(line: &str, origin: &Path, line_no: usize) -> Result<Option<NamedColor>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(Error::FieldCount {
            path: origin.to_path_buf(),
            line: line_no,
            expected: 4,
            found: fields.len(),
        });
    }

    // Filters run before numeric parsing: a filtered line with bad
    // numeric fields is skipped, not rejected.
    let first_word = fields[3];
    if first_word.chars().next().is_some_and(char::is_uppercase) {
        return Ok(None);
    }
    if line.contains("grey") {
        return Ok(None);
    }

    let rgb = super::parse_rgb(&fields[..3], origin, line_no)?;
    let name = fields[3..].iter().map(|s| (*s).to_string()).collect();
    Ok(Some((name, rgb)))
}

//! Palette data model and input parsers.
//!
//! Both parsers yield lazy sequences of raw `(name words, rgb)` pairs;
//! the [`merge`] step normalizes them into [`ColorEntry`] values keyed by
//! identifier.

pub mod merge;
pub mod svg;
pub mod x11;

pub use merge::merge;

use std::path::Path;

use crate::error::{Error, Result};

/// An RGB triple as read from a palette file.
pub type Rgb = (u8, u8, u8);

/// A raw palette entry: the whitespace-separated words of a color name
/// plus its RGB triple.
pub type NamedColor = (Vec<String>, Rgb);

/// A merged, normalized color entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Separator-free concatenation of the name words; the dedup key.
    pub identifier: String,
    /// Upper-cased, underscore-joined form; the generated binding name.
    pub constant_name: String,
    /// Space-joined, human-readable form.
    pub display_name: String,
    /// Color value, passed through to the output unmodified.
    pub rgb: Rgb,
}

impl ColorEntry {
    /// Build an entry from whitespace-split name words and an RGB triple.
    pub fn from_parts(parts: &[String], rgb: Rgb) -> Self {
        Self {
            identifier: parts.concat(),
            constant_name: parts.join("_").to_uppercase(),
            display_name: parts.join(" "),
            rgb,
        }
    }
}

/// Parse three whitespace-split fields as an RGB triple, reporting the
/// failing channel with its source location.
pub(crate) fn parse_rgb(fields: &[&str], origin: &Path, line: usize) -> Result<Rgb> {
    let channel = |name: &'static str, value: &str| -> Result<u8> {
        value.parse().map_err(|_| Error::InvalidChannel {
            path: origin.to_path_buf(),
            line,
            channel: name,
            value: value.to_string(),
        })
    };

    Ok((
        channel("red", fields[0])?,
        channel("green", fields[1])?,
        channel("blue", fields[2])?,
    ))
}

//! Generated-source rendering and atomic output writing

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::palette::ColorEntry;

/// Splits a constant name into its letter/underscore prefix and an
/// optional digit suffix.
static CONSTANT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z_]+)([0-9]*)").expect("constant-name pattern is valid"));

/// Ordering key for constant names: the letter prefix, then the numeric
/// suffix. A missing suffix keys as `-1` so `BLUE` sorts before `BLUE2`,
/// and suffixes compare numerically so `BLUE2` sorts before `BLUE10`.
fn sort_key(constant_name: &str) -> (String, i64) {
    match CONSTANT_NAME.captures(constant_name) {
        Some(caps) => {
            let base = caps[1].to_string();
            let suffix = caps[2].parse().unwrap_or(-1);
            (base, suffix)
        }
        // Generated names always match; anything else sorts whole.
        None => (constant_name.to_string(), -1),
    }
}

/// Render the merged palette as a complete generated source file.
///
/// Emits the `Color32` import, one `pub const` per entry in sorted order,
/// and an `ALL` table of `(constant, display name)` pairs whose declared
/// length always equals the entry count, including zero.
pub fn render(merged: &HashMap<String, ColorEntry>) -> String {
    let mut colors: Vec<&ColorEntry> = merged.values().collect();
    colors.sort_by_cached_key(|c| sort_key(&c.constant_name));

    let mut out = String::new();
    out.push_str("use egui::Color32;\n\n");

    for color in &colors {
        let (r, g, b) = color.rgb;
        out.push_str(&format!(
            "pub const {}: Color32 = Color32::from_rgb({r}, {g}, {b});\n",
            color.constant_name
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "pub const ALL: [(Color32, &str); {}] = [\n",
        colors.len()
    ));
    for color in &colors {
        out.push_str(&format!(
            "({}, \"{}\"),\n",
            color.constant_name, color.display_name
        ));
    }
    out.push_str("];\n");

    out
}

/// Write the rendered source to `dest` atomically.
///
/// The text lands in a temporary file beside `dest` and is persisted over
/// the final path only after a complete write, so a failed run never
/// leaves a truncated file for downstream build steps to pick up.
pub fn write_atomic(dest: &Path, text: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::WriteOutput {
        path: dest.to_path_buf(),
        source,
    };

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.persist(dest).map_err(|e| write_err(e.error))?;
    Ok(())
}

//! # palgen
//!
//! Generates a Rust source file of named-color constants from two
//! plain-text palette databases: an SVG palette (`name r g b` per line)
//! and an X11 `rgb.txt` (`r g b name...` per line).
//!
//! Entries from both files are merged by a normalized identifier with
//! last-writer-wins semantics (X11 overrides SVG for shared names),
//! sorted so numbered variants follow their base color in numeric order,
//! and emitted as `pub const` definitions plus an `ALL` lookup table of
//! `(constant, display name)` pairs.
//!
//! ## Quick Start
//!
//! ```no_run
//! let count = palgen::generate("svg.txt", "rgb.txt", "../src/colors.rs")?;
//! println!("wrote {count} colors");
//! # Ok::<(), palgen::Error>(())
//! ```
//!
//! The output file is written atomically: a failed run never leaves a
//! truncated file behind for a downstream build step to pick up.

pub mod codegen;
pub mod error;
pub mod palette;

// Re-exports for convenience
pub use error::{Error, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use palette::{merge, svg, x11};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full generation pipeline: parse both palettes, merge, render,
/// and write the generated source file.
///
/// The SVG palette is consumed first, so X11 entries win identifier ties.
/// Returns the number of unique colors written.
///
/// # Errors
///
/// Returns [`Error::OpenPalette`] if an input file cannot be opened,
/// [`Error::FieldCount`] or [`Error::InvalidChannel`] for malformed input
/// lines, and [`Error::WriteOutput`] if the destination cannot be written.
/// On any error the destination file is not created or replaced.
pub fn generate<P: AsRef<Path>>(svg_path: P, x11_path: P, dest: P) -> Result<usize> {
    let svg_path = svg_path.as_ref();
    let x11_path = x11_path.as_ref();
    let dest = dest.as_ref();

    tracing::info!(
        "Generating {} from {} + {}",
        dest.display(),
        svg_path.display(),
        x11_path.display()
    );

    let svg_reader = BufReader::new(open_palette(svg_path)?);
    let x11_reader = BufReader::new(open_palette(x11_path)?);

    let entries = svg::parse(svg_reader, svg_path).chain(x11::parse(x11_reader, x11_path));
    let merged = merge(entries)?;
    tracing::debug!("Merged {} unique identifiers", merged.len());

    let text = codegen::render(&merged);
    codegen::write_atomic(dest, &text)?;
    tracing::info!("Wrote {} colors", merged.len());

    Ok(merged.len())
}

fn open_palette(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::OpenPalette {
        path: path.to_path_buf(),
        source,
    })
}

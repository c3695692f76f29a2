//! CLI interface for palette generation
use std::path::Path;

use anyhow::Context;

pub fn execute(svg: &Path, x11: &Path, output: &Path) -> anyhow::Result<()> {
    let count = palgen::generate(svg, x11, output).context("palette generation failed")?;
    println!("Wrote {count} colors to {output:?}");

    Ok(())
}

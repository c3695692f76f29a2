use std::path::PathBuf;

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "palgen")]
#[command(about = "Generate named-color constants from SVG and X11 palettes", long_about = None)]
#[command(version)]
struct Cli {
    /// SVG palette file (`name r g b` per line)
    #[arg(long, default_value = "svg.txt")]
    svg: PathBuf,

    /// X11 rgb.txt file (`r g b name...` per line)
    #[arg(long, default_value = "rgb.txt")]
    x11: PathBuf,

    /// Destination for the generated source file
    #[arg(short, long, default_value = "../src/colors.rs")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::generate::execute(&cli.svg, &cli.x11, &cli.output)?;

    Ok(())
}

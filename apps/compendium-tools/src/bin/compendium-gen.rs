//! Compendium site generator
//!
//! Converts a BibTeX export into the site's aggregate entries script and
//! one Markdown page per entry.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "compendium-gen",
    about = "Generate compendium pages and data from a BibTeX export"
)]
struct Cli {
    /// BibTeX file containing the site's compendium entries.
    bibfile: PathBuf,

    /// Site root under which assets/ and content/ live.
    #[arg(long, default_value = ".")]
    site_dir: PathBuf,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    compendium_tools::init_tracing(&cli.log_level);

    let summary = compendium_tools::generate(&cli.bibfile, &cli.site_dir)?;
    println!("Wrote entries to {}", summary.entries_script.display());
    println!(
        "Created {} pages in {}",
        summary.entry_count,
        summary.pages_dir.display()
    );
    Ok(())
}

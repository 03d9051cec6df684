//! Bibliography verifier
//!
//! Exits non-zero when the export contains duplicated cite keys.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "compendium-verify",
    about = "Check a BibTeX export for duplicate cite keys"
)]
struct Cli {
    /// BibTeX file containing the site's compendium entries.
    bibfile: PathBuf,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    compendium_tools::init_tracing(&cli.log_level);

    let duplicates = compendium_tools::verify_file(&cli.bibfile)?;
    if duplicates.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("duplicate cite keys: {}", duplicates.join(", "));
        Ok(ExitCode::FAILURE)
    }
}

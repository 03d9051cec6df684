//! Bibliography Unicode normalizer
//!
//! Rewrites the export in the preferred normal form, keeping the original
//! next to it as `<name>.unnormalized` when a rewrite happens.

use std::path::PathBuf;

use clap::Parser;

use compendium_core::normalize::NormalForm;

#[derive(Parser)]
#[command(
    name = "compendium-normalize",
    about = "Normalize a BibTeX export to a preferred Unicode normal form"
)]
struct Cli {
    /// BibTeX file containing the site's compendium entries.
    bibfile: PathBuf,

    /// Preferred Unicode normal form.
    #[arg(long, default_value = "NFKC")]
    form: NormalForm,

    /// Log level when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    compendium_tools::init_tracing(&cli.log_level);

    if compendium_tools::normalize_file(&cli.bibfile, cli.form)?.is_none() {
        tracing::debug!("{} is already {}-normalized", cli.bibfile.display(), cli.form);
    }
    Ok(())
}

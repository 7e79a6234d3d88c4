//! Terminal review command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use folio_client::{HttpBackend, ReviewClient};

use crate::output::ConsoleSurface;

#[derive(Args)]
pub struct ReviewArgs {
    /// Portfolio URL to review
    pub url: String,

    /// Portfolio type the reviewer should specialize in
    #[arg(long = "type", default_value = "General")]
    pub kind: String,

    /// Model alias (flash or pro)
    #[arg(long, default_value = "flash")]
    pub model: String,

    /// Review backend to talk to
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub backend: String,

    /// Where to write the rendered review
    #[arg(short, long, default_value = "folio-review.html")]
    pub output: PathBuf,

    /// Open the written review in a browser
    #[arg(long)]
    pub open: bool,
}

pub async fn execute(args: ReviewArgs) -> Result<()> {
    let client = ReviewClient::new(HttpBackend::new(&args.backend));
    let mut surface = ConsoleSurface::new(args.output, args.open);

    client
        .submit(&mut surface, &args.url, &args.kind, &args.model)
        .await;

    if surface.failed {
        // The surface already showed the reason; this only sets the
        // exit code.
        anyhow::bail!("the review did not complete");
    }

    Ok(())
}

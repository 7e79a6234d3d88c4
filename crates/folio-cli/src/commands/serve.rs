//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use folio_gemini::GeminiClient;
use folio_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let gemini = GeminiClient::from_env();
    if gemini.is_none() {
        warn!(
            "{} is not set; /analyze will answer 503 until it is configured",
            folio_gemini::API_KEY_ENV
        );
    }

    let state = AppState::new(gemini);

    println!();
    println!("  {} {}", "Folio".cyan().bold(), "Review Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Page".green(), args.host, args.port);
    println!("  {}   http://{}:{}/analyze", "API".green(), args.host, args.port);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    folio_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}

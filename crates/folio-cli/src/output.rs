//! Terminal presentation of a review run.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;
use tracing::error;

use folio_client::ReviewSurface;

/// Terminal implementation of the display surface.
///
/// Showing results on a terminal means writing the rendered HTML to a
/// file; hiding and clearing are no-ops because nothing persists on
/// screen between submissions.
pub struct ConsoleSurface {
    output_path: PathBuf,
    open_when_done: bool,
    spinner: Option<ProgressBar>,
    pub failed: bool,
}

impl ConsoleSurface {
    pub fn new(output_path: PathBuf, open_when_done: bool) -> Self {
        Self {
            output_path,
            open_when_done,
            spinner: None,
            failed: false,
        }
    }
}

impl ReviewSurface for ConsoleSurface {
    fn hide_results(&mut self) {}

    fn clear_output(&mut self) {}

    fn hide_error(&mut self) {
        self.failed = false;
    }

    fn show_loader(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner.set_message("Contacting the review service...");
        self.spinner = Some(spinner);
    }

    fn hide_loader(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_error(&mut self, message: &str) {
        self.failed = true;
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    fn show_results(&mut self, html: &str) {
        match fs::write(&self.output_path, standalone_page(html)) {
            Ok(()) => {
                println!(
                    "{} Review written to {}",
                    "✓".green().bold(),
                    self.output_path.display().to_string().cyan()
                );
                if self.open_when_done {
                    if let Err(e) = open::that(&self.output_path) {
                        error!("could not open the review in a browser: {e}");
                    }
                }
            }
            Err(e) => {
                self.failed = true;
                error!("could not write review output: {e}");
                eprintln!(
                    "{} Could not write {}",
                    "✗".red().bold(),
                    self.output_path.display()
                );
            }
        }
    }
}

/// Wrap the rendered fragment into a standalone page.
fn standalone_page(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>Folio Review</title>\n\
         <style>body{{font-family:sans-serif;max-width:720px;margin:3rem auto;\
         padding:0 1rem;line-height:1.6}}</style>\n\
         </head>\n<body>\n{fragment}\n</body>\n</html>\n"
    )
}

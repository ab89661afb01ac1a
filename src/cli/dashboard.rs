//! Dashboard command implementation

use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::DashboardView;
use crate::output::{self, html};

/// Run the dashboard command: fetch, aggregate and render dataset counts.
///
/// In HTML mode a failure still produces a page (the error view) before the
/// error is returned.
pub async fn run(opts: &GlobalOptions, output_path: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let service = ctx.dashboard_service()?;

    let spinner = (ctx.format == OutputFormat::Pretty
        && output_path.is_none()
        && std::io::stderr().is_terminal())
    .then(|| fetch_spinner(&ctx.config.api_url));

    let result = service.compute_department_counts().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(reports) => {
            let view = DashboardView::new(reports, ctx.config.api_url.clone());
            output::emit(&view, ctx.format, output_path)
        }
        Err(e) => {
            if ctx.format == OutputFormat::Html {
                output::emit_text(&html::render_error(&e.to_string()), output_path)?;
            }
            Err(e)
        }
    }
}

fn fetch_spinner(api_url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching organizations from {}", api_url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

use anyhow::{bail, Result};
use clap::ValueEnum;
use detection::presenter::present;
use common::{Month, UnknownMonth};
use detection::{DetectionView, FormField};
use tracing::{debug, info, warn};

use crate::client::HttpDetectionClient;
use crate::config::AppConfig;
use crate::render::{render_json, render_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result panel and chart table
    Text,
    /// Flags and chart series as JSON
    Json,
}

/// The service decides what to do with unknown codes, so this only reports.
fn check_month(raw: &str) -> std::result::Result<Month, UnknownMonth> {
    raw.parse()
}

/// Runs one submission with the given field edits applied on top of the
/// form defaults, then prints the result.
pub async fn detect(config: &AppConfig, edits: Vec<(FormField, String)>, format: OutputFormat) -> Result<()> {
    info!("Submitting to {}", config.endpoint);
    let client = HttpDetectionClient::new(&config.endpoint)?;

    let mut view = DetectionView::new(config.locale);
    for (field, raw) in edits {
        debug!("Setting {} = {:?}", field.wire_name(), raw);
        if field == FormField::Month {
            if let Err(e) = check_month(&raw) {
                warn!("{}, sending it as typed", e);
            }
        }
        view.update_field(field, raw);
    }

    let completion = view.submit(&client).await;
    debug!(?completion, "Submission finished");

    if let Some(message) = view.error() {
        bail!("{}", message);
    }

    let Some(response) = view.response() else {
        // single submission, so the outcome cannot be stale
        bail!("no response stored after {:?} submission", completion);
    };

    let presentation = present(response, view.locale());
    match format {
        OutputFormat::Text => print!("{}", render_text(&presentation, view.locale())),
        OutputFormat::Json => println!("{}", render_json(&presentation)?),
    }
    Ok(())
}

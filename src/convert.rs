use std::path::Path;

use tracing::{info, instrument};

use crate::build::build_document;
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::io::excel_read;
use crate::io::excel_write;
use crate::io::json;
use crate::model::CampaignDocument;

/// Converts the planning workbook into the campaign JSON document.
///
/// The whole document is built in memory before anything is written, so a
/// failed run leaves any previous output untouched.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %config.input.display(), output = %config.output.display())
)]
pub fn workbook_to_json(config: &ConvertConfig) -> Result<CampaignDocument> {
    let sheets = excel_read::load_workbook(&config.input)?;
    let document = build_document(&sheets);
    json::write_document(&config.output, &document)?;
    info!(states = document.metadata.state_count, "wrote campaign document");
    Ok(document)
}

/// Human-readable report of a finished conversion.
///
/// Budget totals keep their fraction even when whole, e.g. `$100.0M`.
pub fn summary(document: &CampaignDocument, output: &Path) -> String {
    let metadata = &document.metadata;
    format!(
        "Generated {}\n  States: {}\n  Total EV: {}\n  Total Budget: ${:?}M",
        output.display(),
        metadata.state_count,
        metadata.total_electoral_votes,
        metadata.total_budget_all_states_m
    )
}

/// Writes an empty planning workbook with every sheet and header in place.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub fn write_template(output: &Path) -> Result<()> {
    excel_write::write_workbook(output, &excel_write::template_workbook())
}

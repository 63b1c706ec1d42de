use std::fs;
use std::path::Path;

use tracing::instrument;

use crate::error::Result;
use crate::model::CampaignDocument;

/// Writes `document` as two-space indented JSON, replacing any existing file.
#[instrument(level = "debug", skip(document), fields(output = %path.display()))]
pub fn write_document(path: &Path, document: &CampaignDocument) -> Result<()> {
    let json_string = serde_json::to_string_pretty(document)?;
    fs::write(path, json_string)?;
    Ok(())
}

/// Parses a document previously produced by [`write_document`].
#[instrument(level = "debug", skip_all, fields(input = %path.display()))]
pub fn read_document(path: &Path) -> Result<CampaignDocument> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::db::models::SessionDocument;

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

/// Deserialize a stored document column, stamping the row id onto it so
/// callers always see where the document lives.
pub fn parse_document(raw: &str, row_id: &str) -> Result<SessionDocument> {
    let mut document: SessionDocument = serde_json::from_str(raw)
        .with_context(|| format!("malformed session document {row_id}"))?;
    document.id = Some(row_id.to_string());
    Ok(document)
}

mod session_doc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session_doc::{DocTimestamp, RawPitch, SessionDocument, MIXED_TYPE, VARIABLE_TARGET};

/// A session document together with its store metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: String,
    pub athlete_id: String,
    pub created_at: DateTime<Utc>,
    pub document: SessionDocument,
}

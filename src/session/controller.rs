use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::info;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::accuracy::{self, HitStats, SummaryRow};
use crate::db::{Database, SessionDocument, StoredSession};
use crate::models::PitchRecord;

use super::PitchSession;

/// Point-in-time view of the live session for rendering: the current
/// context slice with its stats, plus the full-session summary matrix.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session: PitchSession,
    pub stats: HitStats,
    pub zone_counts: std::collections::HashMap<u8, u32>,
    pub summary: Vec<SummaryRow>,
    pub review_mode: bool,
}

/// Owns the in-memory session and the store handle. Exactly one writer (the
/// UI) drives it, so every mutation is a short critical section; the store
/// is only touched on explicit save/load/delete.
#[derive(Clone)]
pub struct SessionController {
    state: Arc<Mutex<PitchSession>>,
    review_mode: Arc<Mutex<bool>>,
    db: Database,
}

impl SessionController {
    pub fn new(db: Database) -> Self {
        Self {
            state: Arc::new(Mutex::new(PitchSession::new())),
            review_mode: Arc::new(Mutex::new(false)),
            db,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.state.lock().await.clone();
        let filtered =
            accuracy::filter_by_context(&session.pitches, &session.pitch_type, &session.target);
        let stats = accuracy::hit_stats(&filtered, &session.target);
        let zone_counts = accuracy::zone_counts(&filtered);
        let summary = accuracy::summary_matrix(&session.pitches);
        let review_mode = *self.review_mode.lock().await;

        SessionSnapshot {
            session,
            stats,
            zone_counts,
            summary,
            review_mode,
        }
    }

    pub async fn set_context(&self, pitch_type: String, target: String) {
        self.state.lock().await.set_context(pitch_type, target);
    }

    pub async fn record_pitch(&self, location: u8, coords: Option<(f64, f64)>) -> PitchRecord {
        self.state.lock().await.record_pitch(location, coords)
    }

    pub async fn undo(&self) -> Option<PitchRecord> {
        self.state.lock().await.undo()
    }

    pub async fn reset_context(&self) -> usize {
        self.state.lock().await.reset_context()
    }

    pub async fn reset_session(&self) {
        self.state.lock().await.reset();
    }

    pub async fn delete_pitch(&self, pitch_id: &str) -> bool {
        self.state.lock().await.delete_pitch(pitch_id)
    }

    /// Persist the live session for `athlete_id` and clear the recorded
    /// pitches. An empty session is a validation error, not a write. The
    /// in-memory pitches are cleared only after the insert succeeds, so a
    /// rejected save loses nothing — the coach retries manually.
    pub async fn save_session(&self, athlete_id: &str) -> Result<String> {
        let document = {
            let state = self.state.lock().await;
            if state.is_empty() {
                return Err(anyhow!("no pitches recorded"));
            }
            SessionDocument::from_session(athlete_id, &state)
        };

        let id = self.db.insert_pitching_session(athlete_id, &document).await?;
        info!("Saved pitching session {id} for athlete {athlete_id}");

        self.state.lock().await.reset();
        Ok(id)
    }

    /// Stored history for an athlete, newest first.
    pub async fn load_history(&self, athlete_id: &str) -> Result<Vec<StoredSession>> {
        self.db.list_pitching_sessions(athlete_id).await
    }

    /// Open a stored session for review: hydrate whatever historical shape
    /// it is in and replace the in-memory state with it.
    pub async fn open_session(&self, session_id: &str) -> Result<PitchSession> {
        let stored = self
            .db
            .get_pitching_session(session_id)
            .await?
            .ok_or_else(|| anyhow!("session {session_id} not found"))?;

        let hydrated = stored.document.hydrate();
        info!(
            "Opened session {session_id} for review ({} pitches)",
            hydrated.len()
        );

        *self.state.lock().await = hydrated.clone();
        *self.review_mode.lock().await = true;
        Ok(hydrated)
    }

    /// Leave review mode and start a fresh session dated today.
    pub async fn close_review(&self) {
        *self.state.lock().await = PitchSession::new();
        *self.review_mode.lock().await = false;
    }

    /// Permanently delete a stored session. The in-memory state is left
    /// untouched either way.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        if !self.db.delete_pitching_session(session_id).await? {
            return Err(anyhow!("session {session_id} not found"));
        }
        info!("Deleted pitching session {session_id}");
        Ok(())
    }
}

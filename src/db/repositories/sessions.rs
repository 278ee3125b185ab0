use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use crate::db::{
    helpers::{parse_datetime, parse_document},
    models::{SessionDocument, StoredSession},
    Database,
};

fn row_to_stored_session(row: &Row) -> Result<StoredSession> {
    let id: String = row.get("id")?;
    let athlete_id: String = row.get("athlete_id")?;
    let created_at: String = row.get("created_at")?;
    let raw_document: String = row.get("document")?;

    Ok(StoredSession {
        document: parse_document(&raw_document, &id)?,
        created_at: parse_datetime(&created_at, "created_at")?,
        athlete_id,
        id,
    })
}

impl Database {
    /// Insert a session document for an athlete and return the new row id.
    /// Documents are written in the current shape only; the `date` column
    /// mirrors the document's date for list views.
    pub async fn insert_pitching_session(
        &self,
        athlete_id: &str,
        document: &SessionDocument,
    ) -> Result<String> {
        let athlete_id = athlete_id.to_string();
        let id = document
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut record = document.clone();
        record.id = Some(id.clone());

        let row_id = id.clone();
        self.execute(move |conn| {
            let serialized =
                serde_json::to_string(&record).context("failed to serialize session document")?;
            conn.execute(
                "INSERT INTO pitching_sessions (id, athlete_id, date, created_at, document)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    row_id,
                    athlete_id,
                    record.date.as_deref(),
                    Utc::now().to_rfc3339(),
                    serialized,
                ],
            )
            .context("failed to insert pitching session")?;
            Ok(())
        })
        .await?;

        Ok(id)
    }

    /// All stored sessions for an athlete, newest first.
    pub async fn list_pitching_sessions(&self, athlete_id: &str) -> Result<Vec<StoredSession>> {
        let athlete_id = athlete_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, athlete_id, created_at, document
                 FROM pitching_sessions
                 WHERE athlete_id = ?1
                 ORDER BY created_at DESC",
            )?;

            let mut rows = stmt.query(params![athlete_id])?;
            let mut sessions = Vec::new();
            while let Some(row) = rows.next()? {
                sessions.push(row_to_stored_session(row)?);
            }
            Ok(sessions)
        })
        .await
    }

    pub async fn get_pitching_session(&self, session_id: &str) -> Result<Option<StoredSession>> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            conn.query_row(
                "SELECT id, athlete_id, created_at, document
                 FROM pitching_sessions
                 WHERE id = ?1",
                params![session_id],
                |row| Ok(row_to_stored_session(row)),
            )
            .optional()?
            .transpose()
        })
        .await
    }

    /// Delete a stored session. Returns whether a row was removed.
    pub async fn delete_pitching_session(&self, session_id: &str) -> Result<bool> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            let deleted = conn
                .execute(
                    "DELETE FROM pitching_sessions WHERE id = ?1",
                    params![session_id],
                )
                .context("failed to delete pitching session")?;
            Ok(deleted > 0)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{Database, SessionDocument};
    use crate::session::PitchSession;

    fn temp_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("pitchtrack.sqlite3")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn insert_list_get_delete_round_trip() {
        let (_dir, db) = temp_db();

        let mut session = PitchSession::with_context("Fastball".into(), "Strike".into());
        session.record_pitch(1, Some((30.0, 40.0)));
        session.record_pitch(17, None);
        let document = SessionDocument::from_session("athlete-1", &session);

        let id = db
            .insert_pitching_session("athlete-1", &document)
            .await
            .unwrap();

        let listed = db.list_pitching_sessions("athlete-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].document.pitch_data.as_ref().unwrap().len(), 2);

        // Other athletes see nothing.
        assert!(db
            .list_pitching_sessions("athlete-2")
            .await
            .unwrap()
            .is_empty());

        let fetched = db.get_pitching_session(&id).await.unwrap().unwrap();
        let hydrated = fetched.document.hydrate();
        assert_eq!(hydrated.pitches.len(), 2);

        assert!(db.delete_pitching_session(&id).await.unwrap());
        assert!(!db.delete_pitching_session(&id).await.unwrap());
        assert!(db.get_pitching_session(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn legacy_documents_stored_verbatim_still_hydrate() {
        let (_dir, db) = temp_db();

        // Simulate a legacy row written before per-pitch capture existed.
        let legacy: SessionDocument = serde_json::from_str(
            r#"{"counts": {"3": 2}, "pitchType": "Curveball", "intendedTarget": "Left"}"#,
        )
        .unwrap();
        let id = db
            .insert_pitching_session("athlete-1", &legacy)
            .await
            .unwrap();

        let fetched = db.get_pitching_session(&id).await.unwrap().unwrap();
        let session = fetched.document.hydrate();
        assert_eq!(session.pitches.len(), 2);
        assert_eq!(session.pitches[0].pitch_type, "Curveball");
    }
}

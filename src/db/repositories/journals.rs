use rusqlite::{params, Row};

use crate::db::{
    helpers::{format_timestamp, parse_timestamp},
    models::JournalEntry,
    repositories::ensure_user_exists,
    Store,
};
use crate::error::CoreError;

/// How many entries the journal list shows by default. The reading view
/// requests up to 50.
pub const DEFAULT_JOURNAL_LIMIT: i64 = 20;

/// Stored title for entries saved with a blank one.
pub const UNTITLED_JOURNAL_TITLE: &str = "Untitled";

fn row_to_entry(row: &Row) -> Result<JournalEntry, CoreError> {
    let timestamp: String = row.get("timestamp")?;

    Ok(JournalEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        timestamp: parse_timestamp(&timestamp, "timestamp")?,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}

impl Store {
    /// Save a journal entry and return its id. Content that is blank after
    /// trimming is rejected before anything is persisted; a blank title is
    /// stored as [`UNTITLED_JOURNAL_TITLE`].
    pub async fn add_journal(
        &self,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<i64, CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::EmptyContent);
        }

        let title = match title.trim() {
            "" => UNTITLED_JOURNAL_TITLE.to_string(),
            trimmed => trimmed.to_string(),
        };
        let content = content.to_string();

        self.write(move |ctx| {
            ensure_user_exists(&ctx.conn, user_id)?;
            let timestamp = format_timestamp(ctx.next_timestamp());

            ctx.conn.execute(
                "INSERT INTO journal_entries (user_id, timestamp, title, content)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, timestamp, title, content],
            )?;

            Ok(ctx.conn.last_insert_rowid())
        })
        .await
    }

    /// The `limit` most recent entries for the user, newest first.
    pub async fn recent_journals(
        &self,
        user_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<JournalEntry>, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_JOURNAL_LIMIT);

        self.read(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, timestamp, title, content
                 FROM journal_entries
                 WHERE user_id = ?1
                 ORDER BY timestamp DESC, id DESC
                 LIMIT ?2",
            )?;

            let mut rows = stmt.query(params![user_id, limit])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_entry(row)?);
            }

            Ok(entries)
        })
        .await
    }
}

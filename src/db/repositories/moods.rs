use chrono::{Duration, Utc};
use rusqlite::params;

use crate::db::{
    helpers::{format_timestamp, parse_timestamp},
    models::MoodPoint,
    repositories::ensure_user_exists,
    Store,
};
use crate::error::CoreError;

/// Trailing window for mood history when the caller does not pick one.
/// The chart view asks for 60.
pub const DEFAULT_MOOD_WINDOW_DAYS: i64 = 30;

const MIN_MOOD_LEVEL: i64 = 1;
const MAX_MOOD_LEVEL: i64 = 5;

impl Store {
    /// Record a mood sample (1 = very sad .. 5 = happy) and return its id.
    /// The level is checked here at the boundary; the UI only offers valid
    /// levels, but a bad caller must not reach the table.
    pub async fn add_mood(
        &self,
        user_id: i64,
        level: i64,
        note: Option<String>,
    ) -> Result<i64, CoreError> {
        if !(MIN_MOOD_LEVEL..=MAX_MOOD_LEVEL).contains(&level) {
            return Err(CoreError::InvalidMoodLevel { level });
        }

        self.write(move |ctx| {
            ensure_user_exists(&ctx.conn, user_id)?;
            let timestamp = format_timestamp(ctx.next_timestamp());

            ctx.conn.execute(
                "INSERT INTO mood_entries (user_id, timestamp, mood, note)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, timestamp, level, note],
            )?;

            Ok(ctx.conn.last_insert_rowid())
        })
        .await
    }

    /// All samples for the user from the trailing `window_days`, oldest
    /// first. Ties within one clock tick fall back to insertion order.
    /// An empty history is an empty Vec, not an error.
    pub async fn mood_history(
        &self,
        user_id: i64,
        window_days: Option<i64>,
    ) -> Result<Vec<MoodPoint>, CoreError> {
        let days = window_days.unwrap_or(DEFAULT_MOOD_WINDOW_DAYS);
        let cutoff = format_timestamp(Utc::now() - Duration::days(days));

        self.read(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT timestamp, mood
                 FROM mood_entries
                 WHERE user_id = ?1 AND timestamp >= ?2
                 ORDER BY timestamp ASC, id ASC",
            )?;

            let mut rows = stmt.query(params![user_id, cutoff])?;
            let mut points = Vec::new();
            while let Some(row) = rows.next()? {
                let timestamp: String = row.get(0)?;
                points.push(MoodPoint {
                    timestamp: parse_timestamp(&timestamp, "timestamp")?,
                    level: row.get(1)?,
                });
            }

            Ok(points)
        })
        .await
    }
}

use rusqlite::{params, Row};

use crate::db::{helpers::format_timestamp, helpers::parse_timestamp, models::User, Store};
use crate::error::CoreError;

fn row_to_user(row: &Row) -> Result<User, CoreError> {
    let created_at: String = row.get("created_at")?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        name: row.get("name")?,
        created_at: parse_timestamp(&created_at, "created_at")?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Store {
    /// Create a user and return its id. Usernames are unique and
    /// case-sensitive; a taken username is a normal outcome, not a crash,
    /// and leaves no row behind.
    pub async fn create_user(&self, username: String, name: String) -> Result<i64, CoreError> {
        self.write(move |ctx| {
            let created_at = format_timestamp(ctx.next_timestamp());

            match ctx.conn.execute(
                "INSERT INTO users (username, name, created_at)
                 VALUES (?1, ?2, ?3)",
                params![username, name, created_at],
            ) {
                Ok(_) => Ok(ctx.conn.last_insert_rowid()),
                Err(err) if is_unique_violation(&err) => Err(CoreError::DuplicateUsername),
                Err(err) => Err(CoreError::Storage(
                    anyhow::Error::new(err).context("failed to insert user"),
                )),
            }
        })
        .await
    }

    /// Exact-match lookup by username.
    pub async fn get_user(&self, username: &str) -> Result<User, CoreError> {
        let username = username.to_string();
        self.read(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, name, created_at
                 FROM users
                 WHERE username = ?1",
            )?;

            let mut rows = stmt.query(params![username])?;
            match rows.next()? {
                Some(row) => row_to_user(row),
                None => Err(CoreError::UserNotFound),
            }
        })
        .await
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<User, CoreError> {
        self.read(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, name, created_at
                 FROM users
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![user_id])?;
            match rows.next()? {
                Some(row) => row_to_user(row),
                None => Err(CoreError::UserNotFound),
            }
        })
        .await
    }
}

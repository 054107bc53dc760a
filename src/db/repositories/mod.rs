pub mod journals;
pub mod moods;
pub mod users;

use rusqlite::{params, Connection};

use crate::error::CoreError;

/// Referential check shared by the entry repositories. Runs inside the same
/// task as the insert it guards, so the user cannot disappear in between
/// (users are never deleted anyway, but the check also turns a raw foreign
/// key failure into a nameable outcome).
pub(crate) fn ensure_user_exists(conn: &Connection, user_id: i64) -> Result<(), CoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)",
        params![user_id],
        |row| row.get(0),
    )?;

    if exists {
        Ok(())
    } else {
        Err(CoreError::UserNotFound)
    }
}

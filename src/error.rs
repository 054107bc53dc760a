use thiserror::Error;

/// Outcomes the UI layer is expected to handle, plus the one it cannot.
///
/// Everything except [`CoreError::Storage`] is a recoverable result of normal
/// use (taken username, bad input, logged-out session). `Storage` wraps an
/// underlying SQLite or I/O failure; the durability contract cannot be honored
/// past one of those, so callers should surface it and stop.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("username is already taken")]
    DuplicateUsername,

    #[error("no user with that username")]
    UserNotFound,

    #[error("mood level {level} is outside the 1-5 scale")]
    InvalidMoodLevel { level: i64 },

    #[error("journal content is empty")]
    EmptyContent,

    #[error("no active session; log in or sign up first")]
    NoActiveSession,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(anyhow::Error::new(err))
    }
}

mod db;
mod error;
mod responder;
mod session;

pub use db::{
    models::{JournalEntry, MoodPoint, User},
    Store, DEFAULT_JOURNAL_LIMIT, DEFAULT_MOOD_WINDOW_DAYS, UNTITLED_JOURNAL_TITLE,
};
pub use error::CoreError;
pub use responder::{
    Responder, BREATHING_REPLY, CRISIS_REPLY, DEFAULT_REPLY, JOURNALING_REPLY,
};
pub use session::{ActiveUser, Session};

/// Logging setup for embedding binaries; safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

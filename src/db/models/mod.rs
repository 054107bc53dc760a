pub mod journal;
pub mod mood;
pub mod user;

pub use journal::JournalEntry;
pub use mood::MoodPoint;
pub use user::User;

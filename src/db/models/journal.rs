use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: i64,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

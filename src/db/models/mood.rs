use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point on the mood trend: when it was recorded and the 1-5 level.
/// The optional note on a sample is display-only and never queried, so the
/// history query does not carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodPoint {
    pub timestamp: DateTime<Utc>,
    pub level: i64,
}

use chrono::{DateTime, Utc};

/// Current UTC timestamp, the single clock source for created_at/updated_at.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

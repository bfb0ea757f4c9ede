use chrono::SubsecRound;

/// All record identifiers are UUID v7 (time ordered, collision resistant).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time-of-day component.
pub type Date = chrono::NaiveDate;

/// Mint a fresh record identifier.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}

/// Current time truncated to microseconds, the precision PostgreSQL keeps
/// for `timestamptz`. Stores hand back exactly what they were given.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}

use chrono::{DateTime, Utc};

// First second of 2015, in milliseconds since the Unix epoch.
pub const EPOCH: u64 = 1_420_070_400_000;

pub fn timestamp_of(id: &str) -> Option<u64> {
    let num: u64 = id.parse().ok()?;
    Some((num >> 22) + EPOCH)
}

pub fn created_at(id: &str) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(timestamp_of(id)?).ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// Smallest id that could have been created at `timestamp_ms`. Useful as a
/// `before`/`after` bound when paging by time.
pub fn from_timestamp(timestamp_ms: u64) -> Option<String> {
    let offset = timestamp_ms.checked_sub(EPOCH)?;
    if offset >= 1 << 42 {
        return None;
    }
    Some((offset << 22).to_string())
}

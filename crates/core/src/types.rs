//! Primitive aliases matching the database column types.

/// Primary and foreign keys (`BIGSERIAL` / `BIGINT`).
pub type DbId = i64;

/// `TIMESTAMPTZ` columns, always read as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

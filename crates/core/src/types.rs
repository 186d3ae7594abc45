/// Store identifiers are opaque strings (UUIDv7 for generated records).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Field name -> message, in schema order.
pub type FieldErrors = indexmap::IndexMap<String, String>;

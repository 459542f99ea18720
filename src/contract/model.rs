use chrono::NaiveDate;

/// Pure user model handed to the request layer (no serde here; wire DTOs
/// belong to the external adapter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Immutable after creation.
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Proposed user data supplied to create and full-replace update, prior to
/// being accepted as a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCandidate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Ordered field-name/value pairs for a partial update, as decoded from the
/// request body. Names are the wire-level camelCase field names
/// (`email`, `firstName`, `lastName`, `birthDate`, `address`, `phoneNumber`).
pub type FieldMap = Vec<(String, serde_json::Value)>;

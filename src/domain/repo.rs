use async_trait::async_trait;
use chrono::NaiveDate;

use crate::contract::model::{User, UserCandidate};

/// Port for the domain layer: the record-store operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Store a candidate under the next sequential id (starting at 1, never
    /// reused even after deletion) and return the stored record.
    async fn insert(&self, candidate: UserCandidate) -> anyhow::Result<User>;

    /// Load a user by id.
    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<User>>;

    /// Replace an existing record (by primary key in `u.id`).
    ///
    /// The service looks the record up first; updating an absent id must not
    /// create a record.
    async fn update(&self, u: User) -> anyhow::Result<()>;

    /// Delete by id. Returns true if a record was removed.
    async fn delete(&self, id: u64) -> anyhow::Result<bool>;

    /// Records with `from < birth_date < to` (exclusive on both ends), in
    /// insertion order. Range validation is the service's responsibility.
    async fn find_in_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>>;
}

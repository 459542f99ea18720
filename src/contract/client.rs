use async_trait::async_trait;
use chrono::NaiveDate;

use crate::contract::model::{FieldMap, User, UserCandidate};

/// Public API trait for the users directory that the request layer consumes.
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    /// Create a user from a candidate, assigning a fresh id.
    async fn create_user(&self, candidate: UserCandidate) -> anyhow::Result<User>;

    /// Replace every mutable field of an existing user.
    async fn update_user(&self, id: u64, candidate: UserCandidate) -> anyhow::Result<User>;

    /// Apply an ordered field map to an existing user.
    async fn update_user_fields(&self, id: u64, fields: &FieldMap) -> anyhow::Result<User>;

    /// Delete a user by id.
    async fn delete_user(&self, id: u64) -> anyhow::Result<()>;

    /// Users born strictly after `from` and strictly before `to`.
    async fn find_users_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>>;
}

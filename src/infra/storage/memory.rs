//! In-memory repository implementation for the domain port.
//!
//! The whole collection lives behind one coarse `RwLock`, which is the only
//! synchronization the service relies on. Ids are assigned monotonically
//! starting at 1 and never reused, so `BTreeMap` iteration order equals
//! insertion order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::contract::model::{User, UserCandidate};
use crate::domain::repo::UsersRepository;

/// In-memory record store keyed by id.
pub struct InMemoryUsersRepository {
    inner: RwLock<Records>,
}

struct Records {
    by_id: BTreeMap<u64, User>,
    next_id: u64,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn insert(&self, candidate: UserCandidate) -> anyhow::Result<User> {
        let mut records = self.inner.write().await;
        let id = records.next_id;
        records.next_id += 1;

        let user = User {
            id,
            email: candidate.email,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            birth_date: candidate.birth_date,
            address: candidate.address,
            phone_number: candidate.phone_number,
        };
        records.by_id.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<User>> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }

    async fn update(&self, u: User) -> anyhow::Result<()> {
        let mut records = self.inner.write().await;
        if let Some(slot) = records.by_id.get_mut(&u.id) {
            *slot = u;
        }
        Ok(())
    }

    async fn delete(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.inner.write().await.by_id.remove(&id).is_some())
    }

    async fn find_in_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>> {
        let records = self.inner.read().await;
        Ok(records
            .by_id
            .values()
            .filter(|u| u.birth_date > from && u.birth_date < to)
            .cloned()
            .collect())
    }
}

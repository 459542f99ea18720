use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{FieldMap, User, UserCandidate},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the UsersDirectoryApi trait that delegates to the domain service
pub struct UsersDirectoryLocalClient {
    service: Arc<Service>,
}

impl UsersDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersDirectoryApi for UsersDirectoryLocalClient {
    async fn create_user(&self, candidate: UserCandidate) -> anyhow::Result<User> {
        self.service
            .create_user(candidate)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_user(&self, id: u64, candidate: UserCandidate) -> anyhow::Result<User> {
        self.service
            .update_user(id, candidate)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_user_fields(&self, id: u64, fields: &FieldMap) -> anyhow::Result<User> {
        self.service
            .update_user_fields(id, fields)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_user(&self, id: u64) -> anyhow::Result<()> {
        self.service
            .delete_user(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn find_users_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>> {
        self.service
            .find_users_by_birth_date_range(from, to)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match &domain_error {
        DomainError::UserNotFound { id } => UsersDirectoryError::not_found(*id),
        DomainError::UnderMinimumAge { .. } => {
            UsersDirectoryError::invalid_age(domain_error.to_string())
        }
        DomainError::BirthDateImmutable
        | DomainError::UnknownField { .. }
        | DomainError::InvalidDateRange { .. }
        | DomainError::Validation { .. } => {
            UsersDirectoryError::invalid_argument(domain_error.to_string())
        }
        DomainError::Storage { .. } => UsersDirectoryError::internal(),
    };

    anyhow::Error::new(contract_error)
}

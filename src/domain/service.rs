use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::contract::model::{FieldMap, User, UserCandidate};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;

/// Domain service with the business rules for user management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Whole-year age a candidate must have reached at creation time.
    pub minimum_age: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { minimum_age: 18 }
    }
}

/// A settable field in a partial update, carrying its typed value.
///
/// The optional `address`/`phoneNumber` fields may be cleared with an
/// explicit JSON null; the required string fields may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserField {
    Email(String),
    FirstName(String),
    LastName(String),
    Address(Option<String>),
    PhoneNumber(Option<String>),
}

impl UserField {
    /// Resolve one field-map entry into a typed value.
    ///
    /// `birthDate` is rejected regardless of its value, and unknown names are
    /// rejected whatever value they carry.
    pub fn resolve(name: &str, value: &Value) -> Result<Self, DomainError> {
        match name {
            "email" => Ok(Self::Email(required_string(name, value)?)),
            "firstName" => Ok(Self::FirstName(required_string(name, value)?)),
            "lastName" => Ok(Self::LastName(required_string(name, value)?)),
            "birthDate" => Err(DomainError::birth_date_immutable()),
            "address" => Ok(Self::Address(optional_string(name, value)?)),
            "phoneNumber" => Ok(Self::PhoneNumber(optional_string(name, value)?)),
            other => Err(DomainError::unknown_field(other)),
        }
    }

    fn apply(self, user: &mut User) {
        match self {
            Self::Email(v) => user.email = v,
            Self::FirstName(v) => user.first_name = v,
            Self::LastName(v) => user.last_name = v,
            Self::Address(v) => user.address = v,
            Self::PhoneNumber(v) => user.phone_number = v,
        }
    }
}

fn required_string(field: &str, value: &Value) -> Result<String, DomainError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DomainError::validation(field, "value must be a string"))
}

fn optional_string(field: &str, value: &Value) -> Result<Option<String>, DomainError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(DomainError::validation(field, "value must be a string or null")),
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(
        name = "users_directory.service.create_user",
        skip(self, candidate),
        fields(email = %candidate.email)
    )]
    pub async fn create_user(&self, candidate: UserCandidate) -> Result<User, DomainError> {
        info!("Creating new user");

        validate_candidate(&candidate)?;

        let age = age_in_years(candidate.birth_date, Utc::now().date_naive());
        if age < self.config.minimum_age {
            return Err(DomainError::under_minimum_age(age, self.config.minimum_age));
        }

        let user = self
            .repo
            .insert(candidate)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.update_user",
        skip(self, candidate),
        fields(user_id = %id)
    )]
    pub async fn update_user(
        &self,
        id: u64,
        candidate: UserCandidate,
    ) -> Result<User, DomainError> {
        info!("Updating user");

        validate_candidate(&candidate)?;

        let current = self.find_existing(id).await?;

        if candidate.birth_date != current.birth_date {
            return Err(DomainError::birth_date_immutable());
        }

        let updated = User {
            id: current.id,
            email: candidate.email,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            birth_date: current.birth_date,
            address: candidate.address,
            phone_number: candidate.phone_number,
        };

        self.repo
            .update(updated.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully updated user");
        Ok(updated)
    }

    /// Applies the entries in the order given, but atomically: every entry is
    /// resolved before anything is written, so a bad entry anywhere in the map
    /// leaves the stored record untouched.
    #[instrument(
        name = "users_directory.service.update_user_fields",
        skip(self, fields),
        fields(user_id = %id)
    )]
    pub async fn update_user_fields(
        &self,
        id: u64,
        fields: &FieldMap,
    ) -> Result<User, DomainError> {
        info!("Patching user fields");

        // Lookup comes first so an unknown id reports NotFound even when the
        // map itself is malformed.
        let mut user = self.find_existing(id).await?;

        let mut resolved = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            resolved.push(UserField::resolve(name, value)?);
        }
        for field in resolved {
            field.apply(&mut user);
        }

        self.repo
            .update(user.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        debug!("Patched {} fields", fields.len());
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: u64) -> Result<(), DomainError> {
        info!("Deleting user");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    #[instrument(name = "users_directory.service.find_users_by_birth_date_range", skip(self))]
    pub async fn find_users_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, DomainError> {
        debug!("Querying users by birth date range");

        if from >= to {
            return Err(DomainError::invalid_date_range(from, to));
        }

        let users = self
            .repo
            .find_in_birth_date_range(from, to)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        debug!("Range query matched {} users", users.len());
        Ok(users)
    }

    async fn find_existing(&self, id: u64) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}

// --- validation helpers ---

fn validate_candidate(candidate: &UserCandidate) -> Result<(), DomainError> {
    validate_email(&candidate.email)?;
    validate_non_blank("firstName", &candidate.first_name, "First name is required")?;
    validate_non_blank("lastName", &candidate.last_name, "Last name is required")?;
    validate_birth_date(candidate.birth_date)?;
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("email", "Email is required"));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(DomainError::validation("email", "Invalid email format"));
    }
    Ok(())
}

fn validate_non_blank(field: &str, value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, message));
    }
    Ok(())
}

fn validate_birth_date(birth_date: NaiveDate) -> Result<(), DomainError> {
    if birth_date >= Utc::now().date_naive() {
        return Err(DomainError::validation(
            "birthDate",
            "Birth date must be in the past",
        ));
    }
    Ok(())
}

/// Whole-year age at `today`; zero when the birth date is not in the past.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth_date).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_whole_years_only() {
        let birth = date(1997, 7, 13);
        assert_eq!(age_in_years(birth, date(2015, 7, 12)), 17);
        assert_eq!(age_in_years(birth, date(2015, 7, 13)), 18);
        assert_eq!(age_in_years(birth, date(2016, 1, 1)), 18);
    }

    #[test]
    fn age_is_zero_for_future_birth_date() {
        assert_eq!(age_in_years(date(2030, 1, 1), date(2020, 1, 1)), 0);
    }

    #[test]
    fn resolve_maps_known_fields() {
        let field = UserField::resolve("email", &json!("a@b.com")).unwrap();
        assert_eq!(field, UserField::Email("a@b.com".to_string()));

        let field = UserField::resolve("address", &json!(null)).unwrap();
        assert_eq!(field, UserField::Address(None));
    }

    #[test]
    fn resolve_rejects_birth_date_for_any_value() {
        let err = UserField::resolve("birthDate", &json!("1997-07-13")).unwrap_err();
        assert!(matches!(err, DomainError::BirthDateImmutable));

        let err = UserField::resolve("birthDate", &json!(42)).unwrap_err();
        assert!(matches!(err, DomainError::BirthDateImmutable));
    }

    #[test]
    fn resolve_rejects_unknown_names() {
        let err = UserField::resolve("nickname", &json!("zed")).unwrap_err();
        assert!(matches!(err, DomainError::UnknownField { field } if field == "nickname"));
    }

    #[test]
    fn resolve_rejects_non_string_values_for_required_fields() {
        let err = UserField::resolve("firstName", &json!(7)).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field, .. } if field == "firstName"));

        let err = UserField::resolve("lastName", &json!(null)).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}

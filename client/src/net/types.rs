//! Wire DTOs for the rating API.
//!
//! DESIGN
//! ======
//! Request payloads carry their client-side validation rules as `validator`
//! derives so forms validate the exact value they are about to send. Response
//! types are lenient where the backend is: counts and averages may arrive as
//! numbers, numeric strings, or null.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::borrow::Cow;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::state::session::Role;

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AccountSummary,
}

/// Account fields returned alongside a token. `role` stays a raw string; the
/// auth gate decides whether it is usable.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccountSummary {
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 20, max = 60, message = "Name must be 20-60 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(
        length(min = 8, max = 16, message = "Password must be 8-16 characters"),
        custom(function = "validate_password_policy")
    )]
    pub password: String,
    #[validate(length(max = 400, message = "Address too long"))]
    pub address: String,
    pub role: Role,
}

impl SignupRequest {
    /// Credentials for the login that follows a successful signup.
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Body of `PATCH /user/password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(
        length(min = 8, max = 16, message = "Password must be 8-16 characters"),
        custom(function = "validate_password_policy")
    )]
    pub new_password: String,
}

/// Error body returned by the API on 4xx/5xx.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// At least one uppercase letter and one non-alphanumeric character.
fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::new("uppercase")
            .with_message(Cow::Borrowed("Must contain at least one uppercase letter")));
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new("special")
            .with_message(Cow::Borrowed("Must contain at least one special character")));
    }
    Ok(())
}

// =============================================================================
// ADMIN
// =============================================================================

/// `GET /admin/dashboard` totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(deserialize_with = "deserialize_count")]
    pub total_users: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_stores: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_ratings: u64,
}

/// Row of `GET /admin/users`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_optional_rating")]
    pub average_rating: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

/// Row of `GET /admin/stores`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminStore {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_optional_rating")]
    pub avg_rating: Option<f64>,
}

/// Body of `POST /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 2, max = 60, message = "Name must be 2-60 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(
        length(min = 8, max = 16, message = "Password must be 8-16 characters"),
        custom(function = "validate_password_policy")
    )]
    pub password: String,
    #[validate(length(max = 400, message = "Address too long"))]
    pub address: String,
    pub role: Role,
}

/// Query filters for `GET /admin/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Option<Role>,
}

impl UserFilters {
    /// Non-empty filters only; blank inputs are not sent.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "name", &self.name);
        push_param(&mut params, "email", &self.email);
        push_param(&mut params, "address", &self.address);
        if let Some(role) = self.role {
            params.push(("role", role.as_str().to_owned()));
        }
        params
    }
}

// =============================================================================
// OWNER
// =============================================================================

/// Store entry of `GET /owner/dashboard`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OwnerStore {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_optional_rating")]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub ratings: Vec<StoreRater>,
}

/// One customer's rating of an owner's store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoreRater {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub rating_value: u8,
}

// =============================================================================
// USER
// =============================================================================

/// Row of `GET /stores` with the caller's own rating, if any.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserStore {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub user_rating: Option<u8>,
}

/// Query filters for `GET /stores`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreFilters {
    pub name: String,
    pub address: String,
}

impl StoreFilters {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "name", &self.name);
        push_param(&mut params, "address", &self.address);
        params
    }
}

/// Body of `POST /stores/:id/rate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct RateRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
}

/// `{ "stores": [...] }` envelope shared by the store listings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoresResponse<T> {
    #[serde(default = "Vec::new")]
    pub stores: Vec<T>,
}

// =============================================================================
// HELPERS
// =============================================================================

fn push_param(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        params.push((key, value.to_owned()));
    }
}

/// Accept a number, a numeric string, or null.
fn deserialize_optional_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => Ok(number.as_f64().filter(|f| f.is_finite())),
        serde_json::Value::String(raw) => Ok(raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())),
        _ => Err(D::Error::custom("expected number, numeric string, or null")),
    }
}

/// Accept a non-negative integer or its string form (SQL `COUNT` often
/// arrives as a string).
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            number.as_u64().ok_or_else(|| D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid count: {raw}"))),
        _ => Err(D::Error::custom("expected count")),
    }
}

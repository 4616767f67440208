use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::shared::validation::CREDENTIAL_REGEX;

/// Request body for creating a user.
///
/// The original French column names (`nom`, `prenom`, `pass`) are accepted as aliases.
///
/// These rules are wider than the login format (1-20 ASCII letters or digits,
/// see `LoginRequestDto`). An account whose login or password falls outside
/// that format is stored but can never log in; login rejects it with 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    /// Client-generated identifier
    #[validate(
        required(message = "id is required"),
        length(min = 1, max = 255, message = "id must be 1-255 characters")
    )]
    pub id: Option<String>,

    #[serde(alias = "nom")]
    #[validate(
        required(message = "surname is required"),
        length(min = 1, max = 255, message = "surname must be 1-255 characters")
    )]
    pub surname: Option<String>,

    #[serde(alias = "prenom")]
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    pub first_name: Option<String>,

    #[validate(
        required(message = "login is required"),
        length(min = 3, max = 255, message = "login must be 3-255 characters")
    )]
    pub login: Option<String>,

    #[serde(alias = "pass")]
    #[validate(length(min = 6, max = 255, message = "password must be 6-255 characters"))]
    pub password: Option<String>,
}

fn trim_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateUserDto {
    /// Trim identity fields and drop blank optionals. The password is kept verbatim.
    pub fn trimmed(self) -> Self {
        Self {
            id: trim_opt(self.id),
            surname: trim_opt(self.surname),
            first_name: trim_opt(self.first_name),
            login: trim_opt(self.login),
            password: self.password.filter(|p| !p.is_empty()),
        }
    }

    pub fn into_new_user(self) -> Result<NewUser> {
        let dto = self.trimmed();
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let missing = |field: &str| AppError::Validation(format!("{} is required", field));

        Ok(NewUser {
            id: dto.id.ok_or_else(|| missing("id"))?,
            surname: dto.surname.ok_or_else(|| missing("surname"))?,
            first_name: dto.first_name,
            login: dto.login.ok_or_else(|| missing("login"))?,
            password: dto.password,
        })
    }
}

/// Login request. Both values must be 1-20 ASCII letters or digits.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[serde(default)]
    #[validate(regex(path = *CREDENTIAL_REGEX))]
    pub login: String,

    #[serde(default, alias = "pass")]
    #[validate(regex(path = *CREDENTIAL_REGEX))]
    pub password: String,
}

/// User as returned by the API; the password is never included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub login: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            surname: u.surname,
            first_name: u.first_name,
            login: u.login,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: String,
    pub surname: String,
    pub first_name: Option<String>,
    pub login: String,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// An account without a stored password never matches
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }
}

/// Validated input for a new user; the id is chosen by the client
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: String,
    pub surname: String,
    pub first_name: Option<String>,
    pub login: String,
    pub password: Option<String>,
}

impl NewUser {
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id,
            surname: self.surname,
            first_name: self.first_name,
            login: self.login,
            password: self.password,
            created_at: now,
            updated_at: now,
        }
    }
}

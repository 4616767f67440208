use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;

/// Users keyed by id; iteration order is id order
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn create(&self, data: NewUser) -> Result<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&data.id) {
            return Err(AppError::Conflict(format!(
                "User with id '{}' already exists",
                data.id
            )));
        }
        if users.values().any(|u| u.login == data.login) {
            return Err(AppError::Conflict(format!(
                "Login '{}' is already taken",
                data.login
            )));
        }

        let user = data.into_user(Utc::now());
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.users.write().await.remove(id).is_some())
    }
}

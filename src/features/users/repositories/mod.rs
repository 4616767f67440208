mod memory;
mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::users::models::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id
    async fn list(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    async fn find_by_login(&self, login: &str) -> Result<Option<User>>;

    /// Fails with `Conflict` when the id or the login is already taken
    async fn create(&self, data: NewUser) -> Result<User>;

    async fn delete(&self, id: &str) -> Result<bool>;
}

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

//! Storage for pollution declarations.
//!
//! The service only sees the `PollutionRepository` trait; the binary picks
//! the Postgres or the in-memory implementation from configuration.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::pollutions::filters::PollutionFilters;
use crate::features::pollutions::models::{NewPollution, Pollution};

#[async_trait]
pub trait PollutionRepository: Send + Sync {
    /// Declarations matching every supplied filter, ordered by id
    async fn list(&self, filters: &PollutionFilters) -> Result<Vec<Pollution>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Pollution>>;

    /// Stores a new declaration; the id is assigned by the store
    async fn create(&self, data: NewPollution) -> Result<Pollution>;

    /// Replaces every field of an existing declaration. `None` if the id is unknown.
    async fn update(&self, id: i32, data: NewPollution) -> Result<Option<Pollution>>;

    /// Returns `false` if nothing was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}

pub use memory::InMemoryPollutionRepository;
pub use postgres::PgPollutionRepository;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::pollutions::filters::PollutionFilters;
use crate::features::pollutions::models::{NewPollution, Pollution};
use crate::features::pollutions::repositories::PollutionRepository;
use crate::features::pollutions::seed::demo_pollutions;

struct MemoryState {
    pollutions: Vec<Pollution>,
    next_id: i32,
}

/// In-process store standing in for the database during front-end development
pub struct InMemoryPollutionRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryPollutionRepository {
    pub fn new() -> Self {
        Self::with_pollutions(Vec::new())
    }

    /// Store pre-filled with the six demo declarations
    pub fn seeded() -> Self {
        Self::with_pollutions(demo_pollutions())
    }

    fn with_pollutions(pollutions: Vec<Pollution>) -> Self {
        let next_id = pollutions.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(MemoryState {
                pollutions,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryPollutionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PollutionRepository for InMemoryPollutionRepository {
    async fn list(&self, filters: &PollutionFilters) -> Result<Vec<Pollution>> {
        let state = self.state.read().await;
        let mut result = filters.apply(&state.pollutions);
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pollution>> {
        let state = self.state.read().await;
        Ok(state.pollutions.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: NewPollution) -> Result<Pollution> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let pollution = Pollution {
            id: state.next_id,
            title: data.title,
            pollution_type: data.pollution_type,
            description: data.description,
            observed_at: data.observed_at,
            location: data.location,
            latitude: data.latitude,
            longitude: data.longitude,
            photo_url: data.photo_url,
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.pollutions.push(pollution.clone());
        Ok(pollution)
    }

    async fn update(&self, id: i32, data: NewPollution) -> Result<Option<Pollution>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.pollutions.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        existing.title = data.title;
        existing.pollution_type = data.pollution_type;
        existing.description = data.description;
        existing.observed_at = data.observed_at;
        existing.location = data.location;
        existing.latitude = data.latitude;
        existing.longitude = data.longitude;
        existing.photo_url = data.photo_url;
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        let before = state.pollutions.len();
        state.pollutions.retain(|p| p.id != id);
        Ok(state.pollutions.len() < before)
    }
}

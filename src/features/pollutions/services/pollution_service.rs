use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::pollutions::dtos::{
    PollutionQueryParams, PollutionRequestDto, PollutionResponseDto,
};
use crate::features::pollutions::repositories::PollutionRepository;

/// Service for pollution declaration operations
pub struct PollutionService {
    repo: Arc<dyn PollutionRepository>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Pollution with id {} not found", id))
}

impl PollutionService {
    pub fn new(repo: Arc<dyn PollutionRepository>) -> Self {
        Self { repo }
    }

    /// List declarations, optionally filtered by type, location and date range
    pub async fn list(&self, query: PollutionQueryParams) -> Result<Vec<PollutionResponseDto>> {
        let filters = query.into_filters()?;
        if !filters.is_empty() {
            tracing::debug!("Listing pollutions with filters: {:?}", filters);
        }
        let pollutions = self.repo.list(&filters).await?;

        Ok(pollutions.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<PollutionResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: PollutionRequestDto) -> Result<PollutionResponseDto> {
        let data = dto.into_new_pollution(Utc::now())?;
        let pollution = self.repo.create(data).await?;

        tracing::info!(
            "Pollution declared: id={}, type={}",
            pollution.id,
            pollution.pollution_type
        );

        Ok(pollution.into())
    }

    /// Replace every field of an existing declaration
    pub async fn update(&self, id: i32, dto: PollutionRequestDto) -> Result<PollutionResponseDto> {
        let data = dto.into_new_pollution(Utc::now())?;
        let pollution = self.repo.update(id, data).await?.ok_or_else(|| not_found(id))?;

        tracing::info!("Pollution updated: id={}", id);

        Ok(pollution.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Pollution deleted: id={}", id);
        Ok(())
    }
}

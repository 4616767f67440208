use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::pollutions::filters::PollutionFilters;
use crate::features::pollutions::models::{NewPollution, Pollution};
use crate::features::pollutions::repositories::PollutionRepository;

const POLLUTION_COLUMNS: &str = "id, title, pollution_type, description, observed_at, location, \
     latitude, longitude, photo_url, created_at, updated_at";

/// Escape LIKE wildcards so user input is matched literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct PgPollutionRepository {
    pool: PgPool,
}

impl PgPollutionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PollutionRepository for PgPollutionRepository {
    async fn list(&self, filters: &PollutionFilters) -> Result<Vec<Pollution>> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM pollutions WHERE TRUE",
            POLLUTION_COLUMNS
        ));

        if let Some(pollution_type) = filters.pollution_type {
            query.push(" AND pollution_type = ").push_bind(pollution_type);
        }
        if let Some(location) = &filters.location {
            query
                .push(" AND location ILIKE ")
                .push_bind(format!("%{}%", escape_like(location)));
        }
        if let Some(date_from) = filters.date_from {
            query.push(" AND observed_at >= ").push_bind(date_from);
        }
        if let Some(date_to) = filters.date_to {
            query.push(" AND observed_at <= ").push_bind(date_to);
        }
        query.push(" ORDER BY id");

        query
            .build_query_as::<Pollution>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list pollutions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pollution>> {
        let sql = format!("SELECT {} FROM pollutions WHERE id = $1", POLLUTION_COLUMNS);

        sqlx::query_as::<_, Pollution>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get pollution {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn create(&self, data: NewPollution) -> Result<Pollution> {
        let sql = format!(
            r#"
            INSERT INTO pollutions (
                title, pollution_type, description, observed_at, location,
                latitude, longitude, photo_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            POLLUTION_COLUMNS
        );

        sqlx::query_as::<_, Pollution>(&sql)
            .bind(data.title)
            .bind(data.pollution_type)
            .bind(data.description)
            .bind(data.observed_at)
            .bind(data.location)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(data.photo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert pollution: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, data: NewPollution) -> Result<Option<Pollution>> {
        let sql = format!(
            r#"
            UPDATE pollutions
            SET title = $1,
                pollution_type = $2,
                description = $3,
                observed_at = $4,
                location = $5,
                latitude = $6,
                longitude = $7,
                photo_url = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING {}
            "#,
            POLLUTION_COLUMNS
        );

        sqlx::query_as::<_, Pollution>(&sql)
            .bind(data.title)
            .bind(data.pollution_type)
            .bind(data.description)
            .bind(data.observed_at)
            .bind(data.location)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(data.photo_url)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update pollution {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pollutions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete pollution {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("lille"), "lille");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}

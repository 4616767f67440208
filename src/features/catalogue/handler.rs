use axum::Json;

use crate::features::catalogue::dto::{sample_catalogue, CatalogueItemDto};

/// Sample product catalogue
///
/// Returns a bare JSON array, without the response envelope.
#[utoipa::path(
    get,
    path = "/api/catalogue",
    responses(
        (status = 200, description = "Catalogue items", body = Vec<CatalogueItemDto>),
    ),
    tag = "catalogue"
)]
pub async fn get_catalogue() -> Json<Vec<CatalogueItemDto>> {
    Json(sample_catalogue())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_catalogue_payload() {
        let server = test_server(crate::features::catalogue::routes::routes());

        let response = server.get("/api/catalogue").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!([
                { "ref": "X001", "titre": "Linux", "prix": 10 },
                { "ref": "X002", "titre": "Angular", "prix": 20 }
            ])
        );
    }
}

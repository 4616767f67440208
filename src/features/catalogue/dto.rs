use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogueItemDto {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "prix")]
    pub price: u32,
}

impl CatalogueItemDto {
    fn new(reference: &str, title: &str, price: u32) -> Self {
        Self {
            reference: reference.to_string(),
            title: title.to_string(),
            price,
        }
    }
}

pub fn sample_catalogue() -> Vec<CatalogueItemDto> {
    vec![
        CatalogueItemDto::new("X001", "Linux", 10),
        CatalogueItemDto::new("X002", "Angular", 20),
    ]
}

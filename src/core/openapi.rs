use utoipa::{Modify, OpenApi};

use crate::features::catalogue::{dto as catalogue_dto, handler as catalogue_handler};
use crate::features::pollutions::{
    dtos as pollutions_dtos, handlers as pollutions_handlers, models as pollutions_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Pollutions
        pollutions_handlers::list_pollutions,
        pollutions_handlers::get_pollution,
        pollutions_handlers::create_pollution,
        pollutions_handlers::update_pollution,
        pollutions_handlers::delete_pollution,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::create_user,
        users_handlers::delete_user,
        users_handlers::login,
        // Catalogue
        catalogue_handler::get_catalogue,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Pollutions
            pollutions_models::PollutionType,
            pollutions_dtos::PollutionRequestDto,
            pollutions_dtos::PollutionResponseDto,
            ApiResponse<pollutions_dtos::PollutionResponseDto>,
            ApiResponse<Vec<pollutions_dtos::PollutionResponseDto>>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::LoginRequestDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Catalogue
            catalogue_dto::CatalogueItemDto,
        )
    ),
    tags(
        (name = "pollutions", description = "Pollution declarations"),
        (name = "users", description = "User accounts and login"),
        (name = "catalogue", description = "Static sample catalogue"),
    ),
    info(
        title = "Pollution Declarations API",
        version = "0.1.0",
        description = "API documentation for the pollution declarations service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/pollutions",
            "/api/pollutions/{id}",
            "/api/users",
            "/api/users/{id}",
            "/api/users/login",
            "/api/catalogue",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}

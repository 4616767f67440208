use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use crate::features::pollutions::repositories::InMemoryPollutionRepository;
use crate::features::pollutions::{routes as pollutions_routes, PollutionService};
use crate::features::users::repositories::InMemoryUserRepository;
use crate::features::users::{routes as users_routes, UserService};

pub fn test_server(router: Router) -> TestServer {
    TestServer::new(router).expect("failed to start test server")
}

/// Pollution routes over a store holding the six demo declarations
pub fn pollution_server() -> TestServer {
    let service = Arc::new(PollutionService::new(Arc::new(
        InMemoryPollutionRepository::seeded(),
    )));
    test_server(pollutions_routes::routes(service))
}

/// User routes over an empty store
pub fn user_server() -> TestServer {
    let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    test_server(users_routes::routes(service))
}

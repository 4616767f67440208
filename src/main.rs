mod core;
mod features;
mod shared;

use crate::core::config::{Config, StorageBackend};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::catalogue::routes as catalogue_routes;
use crate::features::pollutions::repositories::{
    InMemoryPollutionRepository, PgPollutionRepository, PollutionRepository,
};
use crate::features::pollutions::{routes as pollutions_routes, PollutionService};
use crate::features::users::repositories::{
    InMemoryUserRepository, PgUserRepository, UserRepository,
};
use crate::features::users::{routes as users_routes, UserService};
use crate::shared::constants::WELCOME_MESSAGE;
use crate::shared::types::ApiResponse;
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Json, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Repositories for the configured storage backend
async fn build_repositories(
    config: &Config,
) -> anyhow::Result<(Arc<dyn PollutionRepository>, Arc<dyn UserRepository>)> {
    match (config.storage, &config.database) {
        (StorageBackend::Postgres, Some(db_config)) => {
            let pool = database::create_pool(db_config).await?;
            tracing::info!("Database connection pool created");

            tracing::info!("Running database migrations...");
            database::run_migrations(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            tracing::info!("Database migrations completed successfully");

            let pollutions: Arc<dyn PollutionRepository> =
                Arc::new(PgPollutionRepository::new(pool.clone()));
            let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
            Ok((pollutions, users))
        }
        (StorageBackend::Postgres, None) => Err(anyhow::anyhow!(
            "Postgres backend selected but no database configuration was loaded"
        )),
        (StorageBackend::Memory, _) => {
            let pollutions: Arc<dyn PollutionRepository> = if config.seed_demo_data {
                Arc::new(InMemoryPollutionRepository::seeded())
            } else {
                Arc::new(InMemoryPollutionRepository::new())
            };
            let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            tracing::warn!(
                "Using in-memory storage (seed_demo_data={}); data is lost on restart",
                config.seed_demo_data
            );

            Ok((pollutions, users))
        }
    }
}

async fn welcome() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success(
        None,
        Some(WELCOME_MESSAGE.to_string()),
        None,
    ))
}

// Simple health check endpoint
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

fn root_routes() -> Router {
    Router::new()
        .route("/", axum::routing::get(welcome))
        .route("/health", axum::routing::get(health_check))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!(
        "Configuration loaded successfully (storage backend: {})",
        config.storage
    );

    let (pollution_repo, user_repo) = build_repositories(&config).await?;

    let pollution_service = Arc::new(PollutionService::new(pollution_repo));
    tracing::info!("Pollution service initialized");

    let user_service = Arc::new(UserService::new(user_repo));
    tracing::info!("User service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let api_routes = Router::new()
        .merge(pollutions_routes::routes(pollution_service))
        .merge(users_routes::routes(user_service))
        .merge(catalogue_routes::routes());

    let app = Router::new()
        .merge(swagger)
        .merge(root_routes())
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_server;
    use serde_json::Value;

    #[tokio::test]
    async fn test_welcome_and_health() {
        let server = test_server(root_routes());

        let welcome = server.get("/").await;
        welcome.assert_status_ok();
        assert_eq!(welcome.json::<Value>()["message"], WELCOME_MESSAGE);

        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_memory_backend_respects_seed_flag() {
        let mut config = Config {
            app: crate::core::config::AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
                max_request_body_size: 1024,
            },
            storage: StorageBackend::Memory,
            seed_demo_data: true,
            database: None,
            swagger: crate::core::config::SwaggerConfig {
                username: None,
                password: None,
                title: "t".to_string(),
                version: "v".to_string(),
                description: "d".to_string(),
            },
        };

        let (seeded, _) = build_repositories(&config).await.unwrap();
        assert_eq!(seeded.list(&Default::default()).await.unwrap().len(), 6);

        config.seed_demo_data = false;
        let (empty, users) = build_repositories(&config).await.unwrap();
        assert!(empty.list(&Default::default()).await.unwrap().is_empty());
        assert!(users.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_postgres_backend_requires_database_config() {
        let config = Config {
            app: crate::core::config::AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec![],
                max_request_body_size: 1024,
            },
            storage: StorageBackend::Postgres,
            seed_demo_data: false,
            database: None,
            swagger: crate::core::config::SwaggerConfig {
                username: None,
                password: None,
                title: "t".to_string(),
                version: "v".to_string(),
                description: "d".to_string(),
            },
        };

        assert!(build_repositories(&config).await.is_err());
    }
}

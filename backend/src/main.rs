use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod db;
mod docs;
mod error;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod services;
mod state;
mod storage;
mod utils;
mod validation;

use config::Config;
use db::connection::create_pool;
use repositories::shift_session::PgShiftSessionStore;
use state::AppState;
use storage::FsBlobStore;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldops_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database_url,
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        refresh_token_expiration_days = config.refresh_token_expiration_days,
        time_zone = %config.time_zone,
        default_email_domain = %config.default_email_domain,
        media_root = %config.media_root,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    sqlx::migrate!("./migrations").run(pool.as_ref()).await?;

    let media = Arc::new(FsBlobStore::new(
        config.media_root.clone(),
        config.media_public_base.clone(),
    ));
    let shifts = Arc::new(PgShiftSessionStore::new(pool.clone()));
    let state = AppState::new(pool, config.clone(), media, shifts);

    // Login carries its own limiter; refresh rotates tokens and needs none.
    let login_routes = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit::login_rate_limit,
        ));

    let public_routes = Router::new()
        .merge(login_routes)
        .route("/api/auth/refresh", post(handlers::auth::refresh));

    // Routes for any authenticated user
    let user_routes = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/me", get(handlers::profile::me))
        .route("/api/shifts/status", get(handlers::shifts::status))
        .route("/api/shifts/start", post(handlers::shifts::start))
        .route("/api/shifts/close", post(handlers::shifts::close))
        .route("/api/shifts", get(handlers::shifts::history))
        .route(
            "/api/checklists",
            post(handlers::checklists::submit).get(handlers::checklists::list_mine),
        )
        .route(
            "/api/incidents",
            post(handlers::incidents::create).get(handlers::incidents::list_mine),
        )
        .route(
            "/api/evidence",
            post(handlers::evidence::create).get(handlers::evidence::list_mine),
        )
        .route("/api/settings/siren", get(handlers::settings::get_siren))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth,
        ));

    // Routes requiring the admin role
    let admin_routes = Router::new()
        .route("/api/admin/users", post(handlers::admin::create_user))
        .route("/api/admin/directory", get(handlers::directory::list))
        .route(
            "/api/admin/directory/{employee_code}",
            get(handlers::directory::get).put(handlers::directory::upsert),
        )
        .route(
            "/api/admin/settings/siren",
            put(handlers::settings::update_siren),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_admin,
        ));

    // Compose app with shared layers (CORS/Trace) and shared state
    let app = Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .nest_service("/media", ServeDir::new(&config.media_root))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

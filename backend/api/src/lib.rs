use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use services::AppState;

pub fn create_router(app_state: std::sync::Arc<services::AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    let static_dir = Path::new(&app_state.config.static_dir).to_path_buf();

    let api_routes = Router::new()
        .nest("/auth", auth_routes(app_state.clone()))
        .merge(content_routes(app_state.clone()));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes)
        // Unmatched non-/api routes serve the bundled SPA shell so
        // client-side routing survives a hard refresh.
        .fallback_service(
            ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html"))),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn auth_routes(
    app_state: std::sync::Arc<services::AppState>,
) -> Router<std::sync::Arc<services::AppState>> {
    // Public routes
    let public_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Protected routes (require a valid bearer token)
    let protected_routes = Router::new()
        .route("/me", get(handlers::auth::whoami))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::auth_middleware,
        ));

    public_routes.merge(protected_routes)
}

/// Content routes sit behind the bearer guard as a unit; the guard lives in
/// middleware so no individual handler can forget it.
fn content_routes(
    app_state: std::sync::Arc<services::AppState>,
) -> Router<std::sync::Arc<services::AppState>> {
    Router::new()
        .route("/problems", get(handlers::content::list_problems))
        .route(
            "/problems/{id}/submit",
            post(handlers::content::submit_solution),
        )
        .route("/mcqs", get(handlers::content::list_mcqs))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            middlewares::auth::auth_middleware,
        ))
}

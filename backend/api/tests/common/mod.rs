use axum::Router;
use mongodb::bson::doc;
use prepmaster_api::{
    config::Config,
    create_router,
    services::{judge::SimulatedJudge, AppState},
};
use std::sync::Arc;

/// Build the full app against the test database. Requires a running
/// MongoDB; tests using it are marked `#[ignore]`.
pub async fn create_test_app() -> (Router, mongodb::Database) {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    dotenvy::from_filename(".env.test").ok();

    let mut config = Config::load().expect("Failed to load test configuration");
    config.mongo_database = format!("{}_test", config.mongo_database);

    let mongo_client = mongodb::Client::with_uri_str(&config.mongo_uri)
        .await
        .expect("Failed to connect to test MongoDB");

    let app_state = Arc::new(
        AppState::new(config, mongo_client, Arc::new(SimulatedJudge))
            .await
            .expect("Failed to initialize test app state"),
    );

    let db = app_state.mongo.clone();
    (create_router(app_state), db)
}

/// Drop collections touched by a test so runs are repeatable.
pub async fn reset_collections(db: &mongodb::Database) {
    for name in ["users", "problems", "mcqs"] {
        db.collection::<mongodb::bson::Document>(name)
            .delete_many(doc! {})
            .await
            .expect("Failed to reset collection");
    }
}

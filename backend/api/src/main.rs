use prepmaster_api::{
    config::Config,
    create_router,
    services::{judge::SimulatedJudge, seed_service, AppState},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prepmaster_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PrepMaster API");

    let config = Config::load().expect("Failed to load configuration");
    let bind_addr = config.bind_addr.clone();

    let mongo_client = mongodb::Client::with_uri_str(&config.mongo_uri)
        .await
        .expect("Failed to connect to MongoDB");
    tracing::info!("MongoDB connected");

    let app_state = Arc::new(
        AppState::new(config, mongo_client, Arc::new(SimulatedJudge))
            .await
            .expect("Failed to initialize application state"),
    );

    // Seed before accepting connections. A failed seed is logged but does
    // not abort boot: content reads degrade to the bundled defaults anyway.
    match seed_service::run(&app_state.mongo).await {
        Ok(report) => tracing::info!(
            problems = report.problems_inserted,
            mcqs = report.mcqs_inserted,
            "Seeding complete"
        ),
        Err(e) => tracing::error!("Seeding error: {:#}", e),
    }

    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

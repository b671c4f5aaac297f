use crate::config::Config;
use mongodb::{Client as MongoClient, Database};
use std::sync::Arc;

use judge::SolutionJudge;

pub struct AppState {
    pub config: Config,
    pub mongo: Database,
    pub judge: Arc<dyn SolutionJudge>,
}

impl AppState {
    pub async fn new(
        config: Config,
        mongo_client: MongoClient,
        judge: Arc<dyn SolutionJudge>,
    ) -> anyhow::Result<Self> {
        let mongo = mongo_client.database(&config.mongo_database);

        tracing::info!("Testing MongoDB connection with ping...");

        tokio::time::timeout(
            std::time::Duration::from_secs(5),
            mongo.run_command(mongodb::bson::doc! { "ping": 1 }),
        )
        .await
        .map_err(|_| anyhow::anyhow!("MongoDB ping timeout after 5s"))??;

        tracing::info!("MongoDB connection established successfully");

        Ok(Self {
            config,
            mongo,
            judge,
        })
    }
}

pub mod auth_service;
pub mod content_service;
pub mod judge;
pub mod seed_service;

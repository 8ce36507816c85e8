use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{clients::VideoApiClient, config::AppConfig, error::AppResult};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub video: VideoApiClient,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: AppConfig) -> AppResult<Self> {
        let video = VideoApiClient::new(&config.video_api)?;
        Ok(Self {
            orm,
            config: Arc::new(config),
            video,
        })
    }
}

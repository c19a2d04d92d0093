use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::recommender::LearningPathRecommender;

#[derive(Clone)]
pub struct AppState {
    recommender: Arc<LearningPathRecommender>,
    config: Arc<Config>,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            recommender: Arc::new(LearningPathRecommender::new(config.dangling_chapter_policy)),
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
        }
    }

    pub fn recommender(&self) -> &LearningPathRecommender {
        &self.recommender
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

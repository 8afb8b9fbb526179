use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::store::Neighborhood;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub neighborhood: Arc<Neighborhood>,
}

impl AppState {
    /// Builds the state, seeding the collections when the config asks for it.
    pub fn new(config: Config) -> Self {
        let neighborhood = if config.neighborhood.seed {
            Neighborhood::seeded(config.location(), Utc::now())
        } else {
            Neighborhood::empty()
        };

        Self {
            config,
            neighborhood: Arc::new(neighborhood),
        }
    }
}

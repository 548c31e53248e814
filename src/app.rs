use std::sync::Arc;

use crate::config::WeatherCfg;
use crate::store::TimeSeriesStore;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<WeatherCfg>,
    pub store: Arc<dyn TimeSeriesStore>,
}

impl AppState {
    pub fn new(cfg: WeatherCfg, store: Arc<dyn TimeSeriesStore>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            store,
        }
    }
}

use crate::config::AppConfig;
use crate::roster::Roster;

use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Held for the whole check-then-act of every roster operation.
    pub roster: Arc<Mutex<Roster>>,
}

impl AppState {
    pub fn new(config: AppConfig, roster: Roster) -> Self {
        Self {
            config,
            roster: Arc::new(Mutex::new(roster)),
        }
    }
}

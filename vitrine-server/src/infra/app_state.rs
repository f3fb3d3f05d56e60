use std::fmt;
use std::sync::Arc;

use vitrine_config::Config;

use crate::mailer::Mailer;

/// Shared application state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: Arc<Config>, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

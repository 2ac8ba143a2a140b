use std::sync::Arc;

use tokio::sync::Mutex;

use crate::analysis::ContentGenerator;
use crate::config::Config;
use crate::wizard::{SharedWorkspace, Workspace};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single wizard workspace. All core operations take this lock and
    /// run to completion before the next request is served.
    pub workspace: SharedWorkspace,
    /// Generative backend. `None` when no API key is configured.
    pub generator: Option<Arc<dyn ContentGenerator>>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        workspace: Workspace,
        generator: Option<Arc<dyn ContentGenerator>>,
        config: Config,
    ) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            generator,
            config,
        }
    }
}

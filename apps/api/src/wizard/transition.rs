//! Delayed "Next" transitions.
//!
//! `schedule_advance` flags the workspace as transitioning right away and
//! applies the phase change only after a fixed delay. Each call owns its own
//! one-shot timer: nothing is debounced or cancelled, and a later timer
//! applies on top of whatever an earlier one left behind.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::wizard::workspace::Workspace;

pub type SharedWorkspace = Arc<Mutex<Workspace>>;

pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(1000);

pub async fn schedule_advance(
    workspace: &SharedWorkspace,
    next_id: impl Into<String>,
    delay: Duration,
) -> JoinHandle<()> {
    let next_id = next_id.into();
    let deadline = Instant::now() + delay;
    workspace.lock().await.begin_transition();
    debug!("Advance to {next_id} scheduled in {}ms", delay.as_millis());

    let workspace = Arc::clone(workspace);
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        workspace.lock().await.apply_advance(&next_id);
    })
}

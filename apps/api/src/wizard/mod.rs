// Wizard core: phase catalog, navigation engine, back-stack and presets.
// Only `Workspace` mutates phases and the active app; everything else here
// is pure and operates on plain values.

pub mod handlers;
pub mod history;
pub mod navigation;
pub mod phases;
pub mod presets;
pub mod transition;
pub mod workspace;

use serde::Serialize;
use thiserror::Error;

pub use transition::{schedule_advance, SharedWorkspace};
pub use workspace::{Workspace, WorkspaceSnapshot};

/// Whether an operation changed anything. Lookup misses are `Unchanged`,
/// never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Unchanged,
}

#[derive(Debug, Error)]
pub enum WizardError {
    /// Gating violation. `message` is shown to the user as-is.
    #[error("{message}")]
    PhaseLocked { phase_id: String, message: String },

    /// A collaborator handed back something the wizard cannot store.
    #[error("Malformed {kind} result")]
    MalformedResult { kind: &'static str },
}

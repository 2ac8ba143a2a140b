//! Every persisted slot the service owns. Bump a slot's version when its
//! shape changes; the previous key is simply left behind.

use uuid::Uuid;

use crate::assets::SavedAsset;
use crate::models::results::{AnalysisResult, ResumeData};
use crate::store::Slot;
use crate::wizard::history::History;
use crate::wizard::navigation::ActiveApp;
use crate::wizard::phases::{initial_phases, Phase};
use crate::wizard::presets::JobPreset;

pub const PHASES: Slot<Vec<Phase>> = Slot::new("phases", 1, initial_phases);
pub const ACTIVE_APP: Slot<ActiveApp> = Slot::new("active_app", 1, ActiveApp::default);
pub const HISTORY: Slot<History> = Slot::new("history", 1, History::new);
pub const JOB_DESCRIPTION: Slot<String> = Slot::new("job_description", 1, String::new);
pub const RESUME_TEXT: Slot<String> = Slot::new("resume_text", 1, String::new);
pub const ANALYSIS_RESULT: Slot<Option<AnalysisResult>> =
    Slot::new("analysis_result", 1, none::<AnalysisResult>);
pub const RESUME_DATA: Slot<Option<ResumeData>> = Slot::new("resume_data", 1, none::<ResumeData>);
pub const JOB_PRESETS: Slot<Vec<JobPreset>> = Slot::new("job_presets", 1, Vec::new);
pub const ACTIVE_PRESET_ID: Slot<Option<Uuid>> = Slot::new("active_preset_id", 1, none::<Uuid>);
pub const ASSET_HUB: Slot<Vec<SavedAsset>> = Slot::new("asset_hub", 1, Vec::new);

fn none<T>() -> Option<T> {
    None
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::results::AnalysisResult;

/// Maximum number of saved presets; older ones are evicted on save.
pub const MAX_PRESETS: usize = 10;

/// A named, reusable job description plus the analysis computed for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPreset {
    pub id: Uuid,
    pub name: String,
    pub job_description: String,
    pub initial_analysis_result: Option<AnalysisResult>,
    pub created_at: DateTime<Utc>,
}

impl JobPreset {
    pub fn new(
        name: impl Into<String>,
        job_description: impl Into<String>,
        initial_analysis_result: Option<AnalysisResult>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            job_description: job_description.into(),
            initial_analysis_result,
            created_at: Utc::now(),
        }
    }
}

/// Prepends `preset` and truncates to `MAX_PRESETS`. Returns the evicted presets.
pub fn insert_preset(presets: &mut Vec<JobPreset>, preset: JobPreset) -> Vec<JobPreset> {
    presets.insert(0, preset);
    if presets.len() > MAX_PRESETS {
        presets.split_off(MAX_PRESETS)
    } else {
        Vec::new()
    }
}

pub fn remove_preset(presets: &mut Vec<JobPreset>, id: Uuid) -> Option<JobPreset> {
    let position = presets.iter().position(|p| p.id == id)?;
    Some(presets.remove(position))
}

pub fn find_preset(presets: &[JobPreset], id: Uuid) -> Option<&JobPreset> {
    presets.iter().find(|p| p.id == id)
}

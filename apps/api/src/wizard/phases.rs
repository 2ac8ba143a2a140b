//! Phase Graph: the fixed, ordered catalog of wizard steps.
//!
//! Read-only: this module hands out fresh templates. Status changes belong to
//! the navigation engine.

use serde::{Deserialize, Serialize};

pub const RESUME_JD: &str = "resume_jd";
pub const RESUME_ENHANCEMENT: &str = "resume_enhancement";
pub const EXPERIENCE_CONFIRMATION: &str = "experience_confirmation";
pub const STORY_BUILDING: &str = "story_building";
pub const TAILORED_RESUME: &str = "tailored_resume";
pub const COVER_LETTER: &str = "cover_letter";
pub const LINKEDIN_OPTIMIZATION: &str = "linkedin_optimization";
pub const INTERVIEW_PREP: &str = "interview_prep";
pub const CONTINUOUS_IMPROVEMENT: &str = "continuous_improvement";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Locked,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Foundation,
    AssetGeneration,
    ContinuousImprovement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub status: PhaseStatus,
    pub section: Section,
    pub step: u32,
}

// (id, name, section, step) in journey order.
const CATALOG: [(&str, &str, Section, u32); 9] = [
    (RESUME_JD, "Resume & Job Description", Section::Foundation, 1),
    (RESUME_ENHANCEMENT, "Resume Enhancement", Section::Foundation, 2),
    (
        EXPERIENCE_CONFIRMATION,
        "Experience Confirmation",
        Section::Foundation,
        3,
    ),
    (STORY_BUILDING, "Career Stories", Section::AssetGeneration, 1),
    (TAILORED_RESUME, "Tailored Resume", Section::AssetGeneration, 2),
    (COVER_LETTER, "Cover Letter", Section::AssetGeneration, 3),
    (
        LINKEDIN_OPTIMIZATION,
        "LinkedIn Optimization",
        Section::AssetGeneration,
        4,
    ),
    (INTERVIEW_PREP, "Interview Practice", Section::AssetGeneration, 5),
    (
        CONTINUOUS_IMPROVEMENT,
        "Continuous Improvement",
        Section::ContinuousImprovement,
        1,
    ),
];

/// Fresh journey: `resume_jd` Active, everything else Locked.
pub fn initial_phases() -> Vec<Phase> {
    CATALOG
        .iter()
        .map(|&(id, name, section, step)| Phase {
            id: id.to_string(),
            name: name.to_string(),
            status: if id == RESUME_JD {
                PhaseStatus::Active
            } else {
                PhaseStatus::Locked
            },
            section,
            step,
        })
        .collect()
}

/// Template used when a saved preset is activated: the JD step is done and
/// the user lands on enhancement.
pub fn preset_phases() -> Vec<Phase> {
    let mut phases = initial_phases();
    set_status(&mut phases, RESUME_JD, PhaseStatus::Complete);
    set_status(&mut phases, RESUME_ENHANCEMENT, PhaseStatus::Active);
    phases
}

pub fn find_phase<'a>(phases: &'a [Phase], id: &str) -> Option<&'a Phase> {
    phases.iter().find(|p| p.id == id)
}

pub fn phase_position(phases: &[Phase], id: &str) -> Option<usize> {
    phases.iter().position(|p| p.id == id)
}

pub fn phase_status(phases: &[Phase], id: &str) -> Option<PhaseStatus> {
    find_phase(phases, id).map(|p| p.status)
}

/// First Active phase in journey order, if any.
pub fn active_phase(phases: &[Phase]) -> Option<&Phase> {
    phases.iter().find(|p| p.status == PhaseStatus::Active)
}

/// Sets one phase's status. Returns false when the id is unknown.
pub(crate) fn set_status(phases: &mut [Phase], id: &str, status: PhaseStatus) -> bool {
    match phases.iter_mut().find(|p| p.id == id) {
        Some(phase) => {
            phase.status = status;
            true
        }
        None => false,
    }
}

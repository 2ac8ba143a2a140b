//! Pure phase transitions. The `Workspace` controller wraps these with
//! history, persistence and gating.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::phases::{
    phase_position, set_status, Phase, PhaseStatus, CONTINUOUS_IMPROVEMENT,
    EXPERIENCE_CONFIRMATION, RESUME_ENHANCEMENT, RESUME_JD,
};

/// Which top-level surface the UI is showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActiveApp {
    #[default]
    Welcome,
    Dashboard,
    Catalyst,
    Linkedin,
    Headshot,
    LinkedinBanner,
    AssetHub,
    ElevatorPitch,
}

impl ActiveApp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveApp::Welcome => "welcome",
            ActiveApp::Dashboard => "dashboard",
            ActiveApp::Catalyst => "catalyst",
            ActiveApp::Linkedin => "linkedin",
            ActiveApp::Headshot => "headshot",
            ActiveApp::LinkedinBanner => "linkedin_banner",
            ActiveApp::AssetHub => "asset_hub",
            ActiveApp::ElevatorPitch => "elevator_pitch",
        }
    }

    /// Home surfaces have no back-history beneath them.
    pub fn is_root(&self) -> bool {
        matches!(self, ActiveApp::Welcome | ActiveApp::Dashboard)
    }
}

impl fmt::Display for ActiveApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(ActiveApp::Welcome),
            "dashboard" => Ok(ActiveApp::Dashboard),
            "catalyst" => Ok(ActiveApp::Catalyst),
            "linkedin" => Ok(ActiveApp::Linkedin),
            "headshot" => Ok(ActiveApp::Headshot),
            "linkedin_banner" => Ok(ActiveApp::LinkedinBanner),
            "asset_hub" => Ok(ActiveApp::AssetHub),
            "elevator_pitch" => Ok(ActiveApp::ElevatorPitch),
            other => Err(format!("unknown app '{other}'")),
        }
    }
}

/// Where the quick-start flow drops the user once the foundation is filled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickStartDestination {
    Journey,
    Dashboard,
}

/// Phases the quick-start completion unlocks in bulk.
pub const FOUNDATION_PRESET_IDS: [&str; 4] = [
    RESUME_JD,
    RESUME_ENHANCEMENT,
    EXPERIENCE_CONFIRMATION,
    CONTINUOUS_IMPROVEMENT,
];

/// Activates an already-unlocked phase. Other Active phases are left as they
/// are. Returns None on a miss or when the target is Locked.
pub fn navigate_phases(phases: &[Phase], target_id: &str) -> Option<Vec<Phase>> {
    let position = phase_position(phases, target_id)?;
    if phases[position].status == PhaseStatus::Locked {
        return None;
    }
    let mut next = phases.to_vec();
    next[position].status = PhaseStatus::Active;
    Some(next)
}

/// Linear "Next": everything before `next_id` Complete, `next_id` Active,
/// everything after Locked. An unknown id means the journey is over and every
/// phase is Complete.
pub fn advance_phases(phases: &[Phase], next_id: &str) -> Vec<Phase> {
    let target = phase_position(phases, next_id);
    phases
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            let status = match target {
                None => PhaseStatus::Complete,
                Some(t) if i < t => PhaseStatus::Complete,
                Some(t) if i == t => PhaseStatus::Active,
                Some(_) => PhaseStatus::Locked,
            };
            Phase {
                status,
                ..phase.clone()
            }
        })
        .collect()
}

/// Quick-start bulk unlock. Phases outside the foundation set are untouched.
pub fn complete_foundation_phases(
    phases: &[Phase],
    destination: QuickStartDestination,
) -> Vec<Phase> {
    let mut next = phases.to_vec();
    for id in FOUNDATION_PRESET_IDS {
        let status = if id == RESUME_ENHANCEMENT && destination == QuickStartDestination::Journey {
            PhaseStatus::Active
        } else {
            PhaseStatus::Complete
        };
        set_status(&mut next, id, status);
    }
    next
}

/// The phase a returning user should resume at: the Active phase, else the
/// furthest Complete phase, else the first phase.
pub fn resume_point(phases: &[Phase]) -> Option<&Phase> {
    phases
        .iter()
        .find(|p| p.status == PhaseStatus::Active)
        .or_else(|| phases.iter().rev().find(|p| p.status == PhaseStatus::Complete))
        .or_else(|| phases.first())
}

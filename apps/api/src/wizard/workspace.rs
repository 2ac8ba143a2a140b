//! Workspace: the root controller for wizard state.
//!
//! Owns the persistent store and is the only writer of the phase list and the
//! active app. Every operation runs to completion synchronously; the HTTP
//! layer serializes callers through one mutex.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assets::{filter_assets, insert_asset, remove_asset, AssetKind, SavedAsset};
use crate::models::results::{AnalysisResult, ResumeData};
use crate::store::{slots, PersistentStore};
use crate::wizard::history::{BackOutcome, History, HistoryEntry};
use crate::wizard::navigation::{
    advance_phases, complete_foundation_phases, navigate_phases, resume_point, ActiveApp,
    QuickStartDestination,
};
use crate::wizard::phases::{
    active_phase, find_phase, initial_phases, phase_status, preset_phases, Phase, PhaseStatus, CONTINUOUS_IMPROVEMENT,
};
use crate::wizard::presets::{find_preset, insert_preset, remove_preset, JobPreset};
use crate::wizard::{Outcome, WizardError};

const CONTINUOUS_IMPROVEMENT_LOCKED: &str =
    "Finish the Foundation phases to unlock Continuous Improvement.";

/// Everything the UI needs to render the current state in one read.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceSnapshot {
    pub active_app: ActiveApp,
    pub phases: Vec<Phase>,
    pub is_transitioning: bool,
    pub history_depth: usize,
    pub job_description: String,
    pub resume_text: String,
    pub analysis_result: Option<AnalysisResult>,
    pub resume_data: Option<ResumeData>,
    pub presets: Vec<JobPreset>,
    pub active_preset_id: Option<Uuid>,
}

pub struct Workspace {
    store: PersistentStore,
    pending_transitions: u32,
}

impl Workspace {
    pub fn new(store: PersistentStore) -> Self {
        Self {
            store,
            pending_transitions: 0,
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(PersistentStore::in_memory())
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn phases(&mut self) -> Vec<Phase> {
        self.store.get(&slots::PHASES)
    }

    pub fn active_app(&mut self) -> ActiveApp {
        self.store.get(&slots::ACTIVE_APP)
    }

    pub fn history(&mut self) -> History {
        self.store.get(&slots::HISTORY)
    }

    pub fn job_description(&mut self) -> String {
        self.store.get(&slots::JOB_DESCRIPTION)
    }

    pub fn resume_text(&mut self) -> String {
        self.store.get(&slots::RESUME_TEXT)
    }

    pub fn analysis_result(&mut self) -> Option<AnalysisResult> {
        self.store.get(&slots::ANALYSIS_RESULT)
    }

    pub fn resume_data(&mut self) -> Option<ResumeData> {
        self.store.get(&slots::RESUME_DATA)
    }

    pub fn presets(&mut self) -> Vec<JobPreset> {
        self.store.get(&slots::JOB_PRESETS)
    }

    pub fn active_preset_id(&mut self) -> Option<Uuid> {
        self.store.get(&slots::ACTIVE_PRESET_ID)
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending_transitions > 0
    }

    pub fn snapshot(&mut self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            active_app: self.active_app(),
            phases: self.phases(),
            is_transitioning: self.is_transitioning(),
            history_depth: self.history().len(),
            job_description: self.job_description(),
            resume_text: self.resume_text(),
            analysis_result: self.analysis_result(),
            resume_data: self.resume_data(),
            presets: self.presets(),
            active_preset_id: self.active_preset_id(),
        }
    }

    /// Simulated page reload: cached slots are dropped and re-read from the
    /// backend on next access. Timers already scheduled still fire.
    pub fn reload(&mut self) {
        self.store.reload();
        info!("Workspace reloaded from {} storage", self.store.backend_name());
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    /// Switches among already-unlocked phases. The pre-navigation snapshot is
    /// pushed only when the move is allowed.
    pub fn navigate_to_phase(&mut self, target_id: &str) -> Result<Outcome, WizardError> {
        let phases = self.phases();
        let Some(target) = find_phase(&phases, target_id) else {
            debug!("navigate_to_phase: unknown phase {target_id}");
            return Ok(Outcome::Unchanged);
        };
        if target.status == PhaseStatus::Locked {
            return Err(WizardError::PhaseLocked {
                phase_id: target_id.to_string(),
                message: format!("\"{}\" is locked. Complete the earlier steps first.", target.name),
            });
        }
        let Some(next) = navigate_phases(&phases, target_id) else {
            return Ok(Outcome::Unchanged);
        };

        self.push_history();
        self.store.set(&slots::PHASES, &next);
        info!("Navigated to phase {target_id}");
        Ok(Outcome::Applied)
    }

    /// Sets the visible app. Going home (`welcome`/`dashboard`) discards the
    /// back-stack; any other app is reversible.
    pub fn switch_app(&mut self, app: ActiveApp) {
        if app.is_root() {
            let mut history = self.history();
            if !history.is_empty() {
                debug!("Discarding {} back-stack entries", history.len());
                history.clear();
                self.store.set(&slots::HISTORY, &history);
            }
        } else if app == self.active_app() {
            debug!("{app} is already showing; nothing to push");
        } else {
            self.push_history();
        }
        self.store.set(&slots::ACTIVE_APP, &app);
        info!("Switched app to {app}");
    }

    pub fn back(&mut self) -> ActiveApp {
        let mut history = self.history();
        let outcome = history.back();
        self.store.set(&slots::HISTORY, &history);

        let destination = outcome.destination_app();
        if let BackOutcome::Restore(entry) = outcome {
            self.store.set(&slots::PHASES, &entry.phases);
        }
        self.store.set(&slots::ACTIVE_APP, &destination);
        info!("Back to {destination} ({} entries left)", history.len());
        destination
    }

    /// Marks a delayed advance as pending. Pair with `apply_advance`.
    pub fn begin_transition(&mut self) {
        self.pending_transitions += 1;
    }

    /// Applies a linear "Next" on top of the current phases and retires one
    /// pending transition.
    pub fn apply_advance(&mut self, next_id: &str) {
        let next = advance_phases(&self.phases(), next_id);
        self.store.set(&slots::PHASES, &next);
        self.pending_transitions = self.pending_transitions.saturating_sub(1);
        match active_phase(&next) {
            Some(active) => info!("Advanced to phase {}", active.id),
            None => info!("Journey complete; no active phase remains"),
        }
    }

    pub fn start_quick_start(&mut self) {
        self.push_history();
        self.store.set(&slots::PHASES, &initial_phases());
        self.store.set(&slots::ACTIVE_APP, &ActiveApp::Catalyst);
        info!("Quick start: phases reset to template");
    }

    /// Opens the journey at the step the user should resume from.
    pub fn start_project_wizard(&mut self) {
        let mut phases = self.phases();
        self.push_history();
        let resume_id = resume_point(&phases)
            .filter(|p| p.status != PhaseStatus::Locked)
            .map(|p| p.id.clone());
        if let Some(id) = resume_id {
            if let Some(next) = navigate_phases(&phases, &id) {
                phases = next;
            }
            debug!("Project wizard resumes at {id}");
        }
        self.store.set(&slots::PHASES, &phases);
        self.store.set(&slots::ACTIVE_APP, &ActiveApp::Catalyst);
    }

    pub fn go_to_continuous_improvement(&mut self) -> Result<Outcome, WizardError> {
        let phases = self.phases();
        match phase_status(&phases, CONTINUOUS_IMPROVEMENT) {
            None => return Ok(Outcome::Unchanged),
            Some(PhaseStatus::Locked) => {
                return Err(WizardError::PhaseLocked {
                    phase_id: CONTINUOUS_IMPROVEMENT.to_string(),
                    message: CONTINUOUS_IMPROVEMENT_LOCKED.to_string(),
                })
            }
            Some(_) => {}
        }
        let Some(next) = navigate_phases(&phases, CONTINUOUS_IMPROVEMENT) else {
            return Ok(Outcome::Unchanged);
        };

        self.push_history();
        self.store.set(&slots::PHASES, &next);
        self.store.set(&slots::ACTIVE_APP, &ActiveApp::Catalyst);
        Ok(Outcome::Applied)
    }

    /// Quick-start completion: store the resolved analysis and bulk-unlock
    /// the foundation. Nothing changes if the analysis is malformed.
    pub fn complete_foundation_preset(
        &mut self,
        analysis_result: AnalysisResult,
        job_description: String,
        destination: QuickStartDestination,
    ) -> Result<(), WizardError> {
        if !analysis_result.is_well_formed() {
            return Err(WizardError::MalformedResult { kind: "analysis" });
        }

        let phases = complete_foundation_phases(&self.phases(), destination);
        match destination {
            QuickStartDestination::Journey => {
                self.push_history();
                self.store.set(&slots::PHASES, &phases);
                self.store.set(&slots::ACTIVE_APP, &ActiveApp::Catalyst);
            }
            QuickStartDestination::Dashboard => {
                self.store.set(&slots::PHASES, &phases);
                self.switch_app(ActiveApp::Dashboard);
            }
        }
        self.store.set(&slots::ANALYSIS_RESULT, &Some(analysis_result));
        self.store.set(&slots::JOB_DESCRIPTION, &job_description);
        info!("Foundation completed via quick start ({destination:?})");
        Ok(())
    }

    // ── Collaborator results ─────────────────────────────────────────────────

    pub fn record_analysis(&mut self, result: AnalysisResult) -> Result<(), WizardError> {
        if !result.is_well_formed() {
            return Err(WizardError::MalformedResult { kind: "analysis" });
        }
        self.store.set(&slots::ANALYSIS_RESULT, &Some(result));
        Ok(())
    }

    pub fn record_resume_data(&mut self, data: ResumeData) -> Result<(), WizardError> {
        if !data.is_well_formed() {
            return Err(WizardError::MalformedResult { kind: "resume" });
        }
        self.store.set(&slots::RESUME_DATA, &Some(data));
        Ok(())
    }

    pub fn set_job_description(&mut self, job_description: String) {
        self.store.set(&slots::JOB_DESCRIPTION, &job_description);
    }

    pub fn set_resume_text(&mut self, resume_text: String) {
        self.store.set(&slots::RESUME_TEXT, &resume_text);
    }

    // ── Presets ──────────────────────────────────────────────────────────────

    pub fn save_preset(
        &mut self,
        name: String,
        job_description: String,
        analysis_result: Option<AnalysisResult>,
    ) -> JobPreset {
        let preset = JobPreset::new(name, job_description, analysis_result);
        let mut presets = self.presets();
        let evicted = insert_preset(&mut presets, preset.clone());
        self.store.set(&slots::JOB_PRESETS, &presets);
        self.store.set(&slots::ACTIVE_PRESET_ID, &Some(preset.id));
        if !evicted.is_empty() {
            debug!("Evicted {} old presets", evicted.len());
        }
        info!("Saved preset {} ({})", preset.name, preset.id);
        preset
    }

    pub fn activate_preset(&mut self, id: Uuid) -> Outcome {
        let presets = self.presets();
        let Some(preset) = find_preset(&presets, id) else {
            debug!("activate_preset: unknown preset {id}");
            return Outcome::Unchanged;
        };

        self.store.set(&slots::JOB_DESCRIPTION, &preset.job_description);
        self.store
            .set(&slots::ANALYSIS_RESULT, &preset.initial_analysis_result);
        self.store.set(&slots::PHASES, &preset_phases());
        self.store.set(&slots::ACTIVE_PRESET_ID, &Some(id));
        info!("Activated preset {}", preset.name);
        Outcome::Applied
    }

    /// Removes a preset. Deleting the active one also clears the current job
    /// description and analysis so no dangling reference survives.
    pub fn delete_preset(&mut self, id: Uuid) -> Outcome {
        let mut presets = self.presets();
        if remove_preset(&mut presets, id).is_none() {
            debug!("delete_preset: unknown preset {id}");
            return Outcome::Unchanged;
        }
        self.store.set(&slots::JOB_PRESETS, &presets);

        if self.active_preset_id() == Some(id) {
            self.store.set(&slots::ACTIVE_PRESET_ID, &None);
            self.store.set(&slots::JOB_DESCRIPTION, &String::new());
            self.store.set(&slots::ANALYSIS_RESULT, &None);
            info!("Deleted active preset {id}; cleared job description and analysis");
        }
        Outcome::Applied
    }

    // ── Asset hub ────────────────────────────────────────────────────────────

    pub fn assets(&mut self, kind: Option<AssetKind>) -> Vec<SavedAsset> {
        filter_assets(&self.store.get(&slots::ASSET_HUB), kind)
    }

    pub fn save_asset(&mut self, asset: SavedAsset) -> SavedAsset {
        let saved = asset.clone();
        self.store.modify(&slots::ASSET_HUB, |mut assets| {
            let evicted = insert_asset(&mut assets, asset);
            if evicted > 0 {
                debug!("Asset hub full; evicted {evicted} oldest assets");
            }
            assets
        });
        saved
    }

    pub fn delete_asset(&mut self, id: Uuid) -> Outcome {
        let mut assets = self.store.get(&slots::ASSET_HUB);
        if remove_asset(&mut assets, id).is_none() {
            return Outcome::Unchanged;
        }
        self.store.set(&slots::ASSET_HUB, &assets);
        Outcome::Applied
    }

    fn push_history(&mut self) {
        let entry = HistoryEntry {
            active_app: self.active_app(),
            phases: self.phases(),
        };
        self.store.modify(&slots::HISTORY, |mut history| {
            history.push(entry);
            history
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use crate::wizard::phases::{
        phase_status, EXPERIENCE_CONFIRMATION, RESUME_ENHANCEMENT, RESUME_JD, STORY_BUILDING,
    };
    use serde_json::json;
    use std::sync::Arc;

    fn analysis(tag: &str) -> AnalysisResult {
        AnalysisResult(json!({"summary": tag}))
    }

    #[test]
    fn test_fresh_workspace_starts_on_welcome_with_template() {
        let mut ws = Workspace::in_memory();
        assert_eq!(ws.active_app(), ActiveApp::Welcome);
        assert_eq!(ws.phases(), initial_phases());
        assert!(!ws.is_transitioning());
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_navigate_to_locked_phase_is_gated_without_history_push() {
        let mut ws = Workspace::in_memory();
        let before = ws.phases();

        let err = ws.navigate_to_phase(CONTINUOUS_IMPROVEMENT).unwrap_err();
        assert!(matches!(err, WizardError::PhaseLocked { .. }));
        assert_eq!(ws.phases(), before);
        assert!(ws.history().is_empty(), "no history push on a refused move");
    }

    #[test]
    fn test_navigate_to_unknown_phase_is_silent_noop() {
        let mut ws = Workspace::in_memory();
        assert_eq!(ws.navigate_to_phase("no_such_phase").unwrap(), Outcome::Unchanged);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_navigate_pushes_pre_navigation_snapshot() {
        let mut ws = Workspace::in_memory();
        ws.begin_transition();
        ws.apply_advance(EXPERIENCE_CONFIRMATION);
        let before = ws.phases();

        assert_eq!(ws.navigate_to_phase(RESUME_JD).unwrap(), Outcome::Applied);
        let history = ws.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.peek().unwrap().phases, before);
        assert_eq!(phase_status(&ws.phases(), RESUME_JD), Some(PhaseStatus::Active));
    }

    #[test]
    fn test_switch_app_pushes_then_home_clears() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Catalyst);
        ws.switch_app(ActiveApp::Headshot);
        assert_eq!(ws.history().len(), 2);
        assert_eq!(ws.history().peek().unwrap().active_app, ActiveApp::Catalyst);

        ws.switch_app(ActiveApp::Dashboard);
        assert_eq!(ws.active_app(), ActiveApp::Dashboard);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_back_restores_app_and_phases_lifo() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Linkedin);
        ws.begin_transition();
        ws.apply_advance(RESUME_ENHANCEMENT);
        let phases_linkedin = ws.phases();
        ws.switch_app(ActiveApp::Headshot);
        ws.begin_transition();
        ws.apply_advance(EXPERIENCE_CONFIRMATION);
        let phases_headshot = ws.phases();
        ws.switch_app(ActiveApp::AssetHub);

        assert_eq!(ws.back(), ActiveApp::Headshot);
        assert_eq!(ws.phases(), phases_headshot);
        assert_eq!(ws.back(), ActiveApp::Linkedin);
        assert_eq!(ws.phases(), phases_linkedin);
        assert_eq!(ws.back(), ActiveApp::Welcome);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_back_floor_goes_to_welcome() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Dashboard);
        assert_eq!(ws.back(), ActiveApp::Welcome);
        assert_eq!(ws.back(), ActiveApp::Welcome);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_back_through_dashboard_entry_collapses_to_welcome() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Dashboard);
        ws.switch_app(ActiveApp::Catalyst);
        assert_eq!(ws.history().len(), 1);

        assert_eq!(ws.back(), ActiveApp::Welcome);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_advance_tracks_pending_count() {
        let mut ws = Workspace::in_memory();
        ws.begin_transition();
        ws.begin_transition();
        ws.apply_advance(RESUME_ENHANCEMENT);
        assert!(ws.is_transitioning());
        ws.apply_advance(EXPERIENCE_CONFIRMATION);
        assert!(!ws.is_transitioning());
    }

    #[test]
    fn test_continuous_improvement_is_gated_until_unlocked() {
        let mut ws = Workspace::in_memory();
        let err = ws.go_to_continuous_improvement().unwrap_err();
        match err {
            WizardError::PhaseLocked { phase_id, message } => {
                assert_eq!(phase_id, CONTINUOUS_IMPROVEMENT);
                assert_eq!(message, CONTINUOUS_IMPROVEMENT_LOCKED);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(ws.active_app(), ActiveApp::Welcome);
        assert!(ws.history().is_empty());

        ws.complete_foundation_preset(analysis("ok"), "JD".into(), QuickStartDestination::Dashboard)
            .unwrap();
        assert_eq!(ws.go_to_continuous_improvement().unwrap(), Outcome::Applied);
        assert_eq!(ws.active_app(), ActiveApp::Catalyst);
        assert_eq!(
            phase_status(&ws.phases(), CONTINUOUS_IMPROVEMENT),
            Some(PhaseStatus::Active)
        );
        assert_eq!(ws.history().len(), 1);
    }

    #[test]
    fn test_quick_start_resets_template_and_opens_catalyst() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Catalyst);
        ws.begin_transition();
        ws.apply_advance(STORY_BUILDING);

        ws.start_quick_start();
        assert_eq!(ws.phases(), initial_phases());
        assert_eq!(ws.active_app(), ActiveApp::Catalyst);
        assert_eq!(ws.back(), ActiveApp::Catalyst);
        assert_eq!(phase_status(&ws.phases(), STORY_BUILDING), Some(PhaseStatus::Active));
    }

    #[test]
    fn test_complete_foundation_for_journey() {
        let mut ws = Workspace::in_memory();
        ws.complete_foundation_preset(
            analysis("journey"),
            "Senior Rust Engineer".into(),
            QuickStartDestination::Journey,
        )
        .unwrap();

        let phases = ws.phases();
        assert_eq!(phase_status(&phases, RESUME_JD), Some(PhaseStatus::Complete));
        assert_eq!(phase_status(&phases, RESUME_ENHANCEMENT), Some(PhaseStatus::Active));
        assert_eq!(
            phase_status(&phases, EXPERIENCE_CONFIRMATION),
            Some(PhaseStatus::Complete)
        );
        assert_eq!(ws.active_app(), ActiveApp::Catalyst);
        assert_eq!(ws.job_description(), "Senior Rust Engineer");
        assert_eq!(ws.analysis_result(), Some(analysis("journey")));
        assert_eq!(ws.history().len(), 1);
    }

    #[test]
    fn test_complete_foundation_for_dashboard_clears_history() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Catalyst);
        ws.complete_foundation_preset(analysis("dash"), "JD".into(), QuickStartDestination::Dashboard)
            .unwrap();
        assert_eq!(ws.active_app(), ActiveApp::Dashboard);
        assert!(ws.history().is_empty());
        assert_eq!(
            phase_status(&ws.phases(), RESUME_ENHANCEMENT),
            Some(PhaseStatus::Complete)
        );
    }

    #[test]
    fn test_malformed_analysis_leaves_state_untouched() {
        let mut ws = Workspace::in_memory();
        let before = ws.snapshot();
        let err = ws
            .complete_foundation_preset(
                AnalysisResult(serde_json::Value::Null),
                "JD".into(),
                QuickStartDestination::Journey,
            )
            .unwrap_err();
        assert!(matches!(err, WizardError::MalformedResult { .. }));
        assert_eq!(ws.phases(), before.phases);
        assert_eq!(ws.active_app(), before.active_app);
        assert!(ws.analysis_result().is_none());
        assert!(ws.record_analysis(AnalysisResult(json!("text"))).is_err());
        assert!(ws.analysis_result().is_none());
    }

    #[test]
    fn test_project_wizard_resumes_at_active_phase() {
        let mut ws = Workspace::in_memory();
        ws.begin_transition();
        ws.apply_advance(EXPERIENCE_CONFIRMATION);
        let before = ws.phases();

        ws.start_project_wizard();
        assert_eq!(ws.active_app(), ActiveApp::Catalyst);
        assert_eq!(ws.phases(), before);
        assert_eq!(ws.history().len(), 1);
    }

    #[test]
    fn test_save_preset_sets_active_and_caps() {
        let mut ws = Workspace::in_memory();
        let acme = ws.save_preset("Acme JD".into(), "Acme".into(), Some(analysis("acme")));
        assert_eq!(ws.active_preset_id(), Some(acme.id));

        let mut last = acme.clone();
        for i in 0..10 {
            last = ws.save_preset(format!("JD {i}"), format!("jd {i}"), None);
        }
        let presets = ws.presets();
        assert_eq!(presets.len(), 10);
        assert!(presets.iter().all(|p| p.id != acme.id), "oldest preset evicted");
        assert_eq!(presets[0].id, last.id);
        assert_eq!(ws.active_preset_id(), Some(last.id));
    }

    #[test]
    fn test_activate_preset_replaces_jd_analysis_and_phases() {
        let mut ws = Workspace::in_memory();
        let preset = ws.save_preset("Acme".into(), "Acme JD".into(), Some(analysis("acme")));
        ws.set_job_description("Something else".into());
        ws.begin_transition();
        ws.apply_advance(STORY_BUILDING);

        assert_eq!(ws.activate_preset(preset.id), Outcome::Applied);
        assert_eq!(ws.job_description(), "Acme JD");
        assert_eq!(ws.analysis_result(), Some(analysis("acme")));
        assert_eq!(ws.phases(), preset_phases());
    }

    #[test]
    fn test_activate_unknown_preset_is_noop() {
        let mut ws = Workspace::in_memory();
        ws.set_job_description("keep me".into());
        assert_eq!(ws.activate_preset(Uuid::new_v4()), Outcome::Unchanged);
        assert_eq!(ws.job_description(), "keep me");
    }

    #[test]
    fn test_deleting_active_preset_cascades() {
        let mut ws = Workspace::in_memory();
        let preset = ws.save_preset("Acme".into(), "Acme JD".into(), Some(analysis("acme")));
        ws.activate_preset(preset.id);

        assert_eq!(ws.delete_preset(preset.id), Outcome::Applied);
        assert!(ws.active_preset_id().is_none());
        assert_eq!(ws.job_description(), "");
        assert!(ws.analysis_result().is_none());
    }

    #[test]
    fn test_deleting_inactive_preset_leaves_session_alone() {
        let mut ws = Workspace::in_memory();
        let old = ws.save_preset("Old".into(), "Old JD".into(), None);
        let current = ws.save_preset("Current".into(), "Current JD".into(), Some(analysis("cur")));
        ws.activate_preset(current.id);

        assert_eq!(ws.delete_preset(old.id), Outcome::Applied);
        assert_eq!(ws.active_preset_id(), Some(current.id));
        assert_eq!(ws.job_description(), "Current JD");
        assert_eq!(ws.analysis_result(), Some(analysis("cur")));
        assert_eq!(ws.presets().len(), 1);
    }

    #[test]
    fn test_state_survives_reload_from_same_backend() {
        let backend = Arc::new(MemoryBackend::new());
        let mut ws = Workspace::new(PersistentStore::new(backend.clone()));
        ws.switch_app(ActiveApp::ElevatorPitch);
        ws.begin_transition();
        ws.apply_advance(RESUME_ENHANCEMENT);
        let snapshot = ws.snapshot();

        let mut reopened = Workspace::new(PersistentStore::new(backend));
        assert_eq!(reopened.active_app(), snapshot.active_app);
        assert_eq!(reopened.phases(), snapshot.phases);
        assert_eq!(reopened.history().len(), snapshot.history_depth);
    }

    #[test]
    fn test_reload_rereads_backend() {
        let backend = Arc::new(MemoryBackend::new());
        let mut ws = Workspace::new(PersistentStore::new(backend.clone()));
        ws.set_job_description("Platform lead".to_string());

        let mut other = Workspace::new(PersistentStore::new(backend));
        other.set_job_description("Data engineer".to_string());

        assert_eq!(ws.job_description(), "Platform lead", "cache still serves the old value");
        ws.reload();
        assert_eq!(ws.job_description(), "Data engineer");
    }

    #[test]
    fn test_switch_to_current_app_pushes_nothing() {
        let mut ws = Workspace::in_memory();
        ws.switch_app(ActiveApp::Headshot);
        ws.switch_app(ActiveApp::Headshot);
        assert_eq!(ws.history().len(), 1);

        assert_eq!(ws.back(), ActiveApp::Welcome);
        assert_eq!(ws.active_app(), ActiveApp::Welcome);
        assert!(ws.history().is_empty());
    }

    #[test]
    fn test_asset_hub_save_and_delete() {
        let mut ws = Workspace::in_memory();
        let asset = ws.save_asset(SavedAsset::new(
            AssetKind::ElevatorPitch,
            "30s pitch",
            json!({"script": "Hi, I'm..."}),
        ));
        assert_eq!(ws.assets(None).len(), 1);
        assert_eq!(ws.assets(Some(AssetKind::Headshot)).len(), 0);
        assert_eq!(ws.delete_asset(asset.id), Outcome::Applied);
        assert_eq!(ws.delete_asset(asset.id), Outcome::Unchanged);
        assert!(ws.assets(None).is_empty());
    }
}

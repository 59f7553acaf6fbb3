//! Habit scoring and future-path simulation.
//!
//! [`simulate_future`] is pure: the same [`HabitInput`] always yields the same
//! [`AnalysisResult`], and nothing is retained between calls.

mod catalog;
pub mod domain;
pub mod narrative;
pub mod paths;
pub mod router;
pub mod scores;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{HabitInput, Mood};
pub use narrative::{
    derive_narrative, micro_actions_for_key, MicroAction, Momentum, MomentumStrength, Narrative,
    Persona, WeakestArea,
};
pub use paths::{build_alternate_paths, AlternatePaths, PathKind, PathSimulation};
pub use router::{analysis_router, AnalysisError};
pub use scores::{compute_scores, Dimension, LifeScores};
pub use validation::{validate_input, InputError, SUPPORTED_AGES};

use serde::{Deserialize, Serialize};

/// Everything the results page renders for one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub current_path: PathSimulation,
    pub improvement_path: PathSimulation,
    pub optimal_path: PathSimulation,
    pub momentum: Momentum,
    pub explanation: String,
    pub weakest_area: WeakestArea,
    pub micro_actions: Vec<MicroAction>,
    #[serde(rename = "emotionallyIntelligentSummary")]
    pub summary: String,
    pub risks: Vec<String>,
    pub positives: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn paths(&self) -> [(PathKind, &PathSimulation); 3] {
        [
            (PathKind::Current, &self.current_path),
            (PathKind::Improved, &self.improvement_path),
            (PathKind::Optimal, &self.optimal_path),
        ]
    }
}

pub fn simulate_future(input: &HabitInput) -> AnalysisResult {
    let AlternatePaths {
        current,
        improved,
        optimal,
    } = build_alternate_paths(input);

    let Narrative {
        weakest_area,
        micro_actions,
        risks,
        positives,
        suggestions,
        momentum,
        summary,
        ..
    } = derive_narrative(input, &current.scores);

    AnalysisResult {
        current_path: current,
        improvement_path: improved,
        optimal_path: optimal,
        momentum,
        explanation: catalog::TRAJECTORY_EXPLANATION.to_string(),
        weakest_area,
        micro_actions,
        summary,
        risks,
        positives,
        suggestions,
    }
}

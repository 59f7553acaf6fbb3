use super::catalog;
use super::domain::HabitInput;
use super::scores::{Dimension, LifeScores};
use serde::{Deserialize, Serialize};

const MIN_SUGGESTIONS: usize = 3;
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumStrength {
    Weak,
    Stable,
    Growing,
    Accelerating,
}

impl MomentumStrength {
    pub fn from_overall(overall: f64) -> Self {
        if overall < 4.0 {
            Self::Weak
        } else if overall < 6.0 {
            Self::Stable
        } else if overall < 8.0 {
            Self::Growing
        } else {
            Self::Accelerating
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Needs Focus",
            Self::Stable => "Steady",
            Self::Growing => "Growing",
            Self::Accelerating => "Great!",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Weak => "Things could be clearer, but small changes can help a lot.",
            Self::Stable => "You are doing okay and keeping your path steady.",
            Self::Growing => "Your good habits are starting to make a real difference.",
            Self::Accelerating => "Your habits are building strong momentum for a great future.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Momentum {
    pub strength: MomentumStrength,
    pub label: String,
    pub description: String,
}

impl Momentum {
    pub fn from_overall(overall: f64) -> Self {
        let strength = MomentumStrength::from_overall(overall);
        Self {
            strength,
            label: strength.label().to_string(),
            description: strength.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroAction {
    pub task: String,
    pub duration: String,
    pub impact_area: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakestArea {
    pub name: String,
    pub explanation: String,
}

impl WeakestArea {
    pub fn for_dimension(dimension: Dimension) -> Self {
        Self {
            name: dimension.label().to_string(),
            explanation: catalog::weakest_area_explanation(dimension).to_string(),
        }
    }
}

/// Age-banded framing used to open the summary sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Explorer,
    RisingStar,
    StewardOfLife,
    Guide,
}

impl Persona {
    pub fn for_age(age: f64) -> Self {
        if age < 13.0 {
            Self::Explorer
        } else if age < 20.0 {
            Self::RisingStar
        } else if age < 60.0 {
            Self::StewardOfLife
        } else {
            Self::Guide
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::RisingStar => "Rising Star",
            Self::StewardOfLife => "Steward of Life",
            Self::Guide => "Guide",
        }
    }
}

/// Rule-derived guidance accompanying the current scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub weakest_dimension: Dimension,
    pub weakest_area: WeakestArea,
    pub micro_actions: Vec<MicroAction>,
    pub risks: Vec<String>,
    pub positives: Vec<String>,
    pub suggestions: Vec<String>,
    pub momentum: Momentum,
    pub summary: String,
}

pub fn derive_narrative(input: &HabitInput, scores: &LifeScores) -> Narrative {
    let weakest_dimension = scores.weakest();
    let signals = HabitSignals::detect(input);

    Narrative {
        weakest_dimension,
        weakest_area: WeakestArea::for_dimension(weakest_dimension),
        micro_actions: micro_actions(weakest_dimension),
        risks: signals.risks(),
        positives: signals.positives(),
        suggestions: signals.suggestions(),
        momentum: Momentum::from_overall(scores.overall),
        summary: summary_sentence(input.age, scores.overall),
    }
}

pub fn micro_actions(dimension: Dimension) -> Vec<MicroAction> {
    catalog::micro_actions(dimension)
        .iter()
        .map(|template| MicroAction {
            task: template.task.to_string(),
            duration: template.duration.to_string(),
            impact_area: dimension,
        })
        .collect()
}

/// Looks up actions by dimension key, defaulting to the focus set.
pub fn micro_actions_for_key(key: &str) -> Vec<MicroAction> {
    micro_actions(Dimension::from_key(key).unwrap_or(Dimension::Focus))
}

pub fn summary_sentence(age: f64, overall: f64) -> String {
    let persona = Persona::for_age(age).label();

    if overall > 7.5 {
        format!(
            "As a {persona}, your current habits are creating a bright, clear path. You are building a great life for the future."
        )
    } else if overall > 5.0 {
        format!(
            "As a {persona}, you are staying on a steady path. A few small changes could give you more energy and focus."
        )
    } else {
        format!(
            "As a {persona}, life might feel a bit hard right now. Remember, you can change your path—one small change today can help a lot."
        )
    }
}

/// Threshold checks shared by the risk, positive and suggestion lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HabitSignals {
    heavy_phone_use: bool,
    short_sleep: bool,
    low_activity: bool,
    high_stress: bool,
    restful_sleep: bool,
    regular_movement: bool,
    steady_output: bool,
}

impl HabitSignals {
    fn detect(input: &HabitInput) -> Self {
        Self {
            heavy_phone_use: input.phone_hours > 4.0,
            short_sleep: input.sleep_hours < 7.0,
            low_activity: input.activity_minutes < 20.0,
            high_stress: input.stress_level > 7.0,
            restful_sleep: input.sleep_hours >= 7.5,
            regular_movement: input.activity_minutes >= 30.0,
            steady_output: input.productive_hours >= 4.0,
        }
    }

    fn risk_pairs(&self) -> [(bool, &'static str, &'static str); 4] {
        [
            (
                self.heavy_phone_use,
                catalog::RISK_PHONE,
                catalog::SUGGEST_PHONE,
            ),
            (self.short_sleep, catalog::RISK_SLEEP, catalog::SUGGEST_SLEEP),
            (
                self.low_activity,
                catalog::RISK_ACTIVITY,
                catalog::SUGGEST_ACTIVITY,
            ),
            (
                self.high_stress,
                catalog::RISK_STRESS,
                catalog::SUGGEST_STRESS,
            ),
        ]
    }

    fn risks(&self) -> Vec<String> {
        self.risk_pairs()
            .into_iter()
            .filter(|(triggered, _, _)| *triggered)
            .map(|(_, risk, _)| risk.to_string())
            .collect()
    }

    fn positives(&self) -> Vec<String> {
        [
            (self.restful_sleep, catalog::POSITIVE_SLEEP),
            (self.regular_movement, catalog::POSITIVE_ACTIVITY),
            (self.steady_output, catalog::POSITIVE_PRODUCTIVE),
        ]
        .into_iter()
        .filter(|(holds, _)| *holds)
        .map(|(_, positive)| positive.to_string())
        .collect()
    }

    fn suggestions(&self) -> Vec<String> {
        let mut suggestions: Vec<String> = self
            .risk_pairs()
            .into_iter()
            .filter(|(triggered, _, _)| *triggered)
            .map(|(_, _, suggestion)| suggestion.to_string())
            .collect();

        for generic in catalog::GENERIC_SUGGESTIONS {
            if suggestions.len() >= MIN_SUGGESTIONS {
                break;
            }
            if !suggestions.iter().any(|existing| existing == generic) {
                suggestions.push(generic.to_string());
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

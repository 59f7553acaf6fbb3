use super::domain::HabitInput;
use serde::{Deserialize, Serialize};

const PHONE_PENALTY_PER_HOUR: f64 = 1.2;
const PRODUCTIVE_TARGET_HOURS: f64 = 6.0;
const HOURS_PER_DAY: f64 = 24.0;

/// One of the six composite areas a habit profile is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Focus,
    Energy,
    Health,
    Learning,
    Emotional,
    Growth,
}

impl Dimension {
    /// Iteration order used wherever dimensions are compared or listed.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Focus,
            Self::Energy,
            Self::Health,
            Self::Learning,
            Self::Emotional,
            Self::Growth,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Energy => "energy",
            Self::Health => "health",
            Self::Learning => "learning",
            Self::Emotional => "emotional",
            Self::Growth => "growth",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Energy => "Energy",
            Self::Health => "Health",
            Self::Learning => "Learning",
            Self::Emotional => "Emotional",
            Self::Growth => "Growth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// Composite scores on a 0–10 scale, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeScores {
    pub focus: f64,
    pub energy: f64,
    pub health: f64,
    pub learning: f64,
    pub emotional: f64,
    pub growth: f64,
    pub overall: f64,
}

impl LifeScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Focus => self.focus,
            Dimension::Energy => self.energy,
            Dimension::Health => self.health,
            Dimension::Learning => self.learning,
            Dimension::Emotional => self.emotional,
            Dimension::Growth => self.growth,
        }
    }

    /// Lowest dimension; on ties the earliest in [`Dimension::ordered`] wins.
    pub fn weakest(&self) -> Dimension {
        let mut weakest = Dimension::Focus;
        let mut min_score = self.get(weakest);

        for dimension in Dimension::ordered() {
            let score = self.get(dimension);
            if score < min_score {
                min_score = score;
                weakest = dimension;
            }
        }

        weakest
    }
}

/// Per-metric scores before they are blended into dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScores {
    pub sleep: f64,
    pub phone: f64,
    pub activity: f64,
    pub stress: f64,
    pub mood: f64,
    pub productive: f64,
}

impl MetricScores {
    pub fn from_input(input: &HabitInput) -> Self {
        let optimal_sleep = optimal_sleep_hours(input.age);
        let optimal_activity = optimal_activity_minutes(input.age);

        Self {
            sleep: distance_score(input.sleep_hours, optimal_sleep),
            phone: (10.0 - input.phone_hours * PHONE_PENALTY_PER_HOUR).max(0.0),
            activity: ((input.activity_minutes / optimal_activity) * 10.0).min(10.0),
            stress: (10.0 - input.stress_level).max(0.0),
            mood: input.mood.score(),
            productive: ((input.productive_hours / PRODUCTIVE_TARGET_HOURS) * 10.0).min(10.0),
        }
    }
}

pub fn optimal_sleep_hours(age: f64) -> f64 {
    if age < 18.0 {
        9.0
    } else if age < 30.0 {
        8.0
    } else if age < 60.0 {
        7.5
    } else {
        8.0
    }
}

pub fn optimal_activity_minutes(age: f64) -> f64 {
    if age < 18.0 {
        60.0
    } else {
        30.0
    }
}

/// Linear falloff from `optimal`, reaching zero at the farthest point of a day.
fn distance_score(value: f64, optimal: f64) -> f64 {
    let distance = (value - optimal).abs();
    let max_distance = optimal.max(HOURS_PER_DAY - optimal);
    (10.0 - (distance / max_distance) * 10.0).max(0.0)
}

/// Half-up rounding to one decimal, matching the published reference scores.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

pub fn compute_scores(input: &HabitInput) -> LifeScores {
    let m = MetricScores::from_input(input);

    // Later composites consume the already-rounded earlier ones.
    let focus = round_tenth(m.sleep * 0.3 + m.phone * 0.4 + m.productive * 0.3);
    let energy = round_tenth(m.sleep * 0.3 + m.activity * 0.4 + m.stress * 0.3);
    let health = round_tenth(m.sleep * 0.25 + m.activity * 0.5 + m.stress * 0.25);
    let learning = round_tenth(focus * 0.5 + m.productive * 0.3 + energy * 0.2);
    let emotional = round_tenth(m.mood * 0.4 + m.stress * 0.4 + m.activity * 0.2);
    let growth = round_tenth(learning * 0.3 + emotional * 0.3 + m.productive * 0.4);
    let overall = round_tenth((focus + energy + health + learning + emotional + growth) / 6.0);

    LifeScores {
        focus,
        energy,
        health,
        learning,
        emotional,
        growth,
        overall,
    }
}

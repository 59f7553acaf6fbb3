use super::domain::HabitInput;
use super::scores::{compute_scores, LifeScores};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Current,
    Improved,
    Optimal,
}

impl PathKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Current, Self::Improved, Self::Optimal]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Current => "Current Direction",
            Self::Improved => "Small Steps",
            Self::Optimal => "Best Self",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Current => "If nothing changes",
            Self::Improved => "With small improvements",
            Self::Optimal => "With healthy habits",
        }
    }

    /// Theme variable the results page paints this path with.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Current => "var(--color-warning)",
            Self::Improved => "var(--color-primary)",
            Self::Optimal => "var(--color-success)",
        }
    }

    /// Habit profile this scenario assumes, derived from what was reported.
    pub fn project(self, input: &HabitInput) -> HabitInput {
        match self {
            Self::Current => input.clone(),
            Self::Improved => improved_habits(input),
            Self::Optimal => optimal_habits(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSimulation {
    pub name: String,
    pub description: String,
    pub scores: LifeScores,
    pub color: String,
}

impl PathSimulation {
    fn simulate(kind: PathKind, input: &HabitInput) -> Self {
        Self {
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            scores: compute_scores(&kind.project(input)),
            color: kind.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlternatePaths {
    pub current: PathSimulation,
    pub improved: PathSimulation,
    pub optimal: PathSimulation,
}

pub fn build_alternate_paths(input: &HabitInput) -> AlternatePaths {
    AlternatePaths {
        current: PathSimulation::simulate(PathKind::Current, input),
        improved: PathSimulation::simulate(PathKind::Improved, input),
        optimal: PathSimulation::simulate(PathKind::Optimal, input),
    }
}

/// Modest, achievable adjustments with floors and ceilings so the
/// projection never overshoots.
pub fn improved_habits(input: &HabitInput) -> HabitInput {
    HabitInput {
        phone_hours: (input.phone_hours - 1.0).max(1.0),
        sleep_hours: (input.sleep_hours + 0.5).min(9.0),
        activity_minutes: (input.activity_minutes + 15.0).min(90.0),
        stress_level: (input.stress_level - 2.0).max(1.0),
        ..input.clone()
    }
}

/// Idealized routine. The sleep target here stops at 7.5h for every adult
/// aged 30 and over, unlike the scoring optimum.
pub fn optimal_habits(input: &HabitInput) -> HabitInput {
    let sleep_hours = if input.age < 18.0 {
        9.0
    } else if input.age < 30.0 {
        8.0
    } else {
        7.5
    };

    HabitInput {
        phone_hours: 2.0,
        sleep_hours,
        activity_minutes: 60.0,
        stress_level: 3.0,
        productive_hours: input.productive_hours.max(5.0),
        ..input.clone()
    }
}

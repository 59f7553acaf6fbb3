use super::domain::HabitInput;
use std::ops::RangeInclusive;

pub const SUPPORTED_AGES: RangeInclusive<f64> = 8.0..=70.0;

/// Rejections raised before a habit profile reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid age")]
    InvalidAge(f64),
    #[error("Invalid {0}")]
    NonFinite(&'static str),
    #[error("Invalid request body")]
    MalformedBody(String),
}

/// Gatekeeper for callers of [`super::simulate_future`]; the engine itself
/// accepts any numbers, but NaN slips through its `min`/`max` clamps.
pub fn validate_input(input: &HabitInput) -> Result<(), InputError> {
    if !input.age.is_finite() || !SUPPORTED_AGES.contains(&input.age) {
        return Err(InputError::InvalidAge(input.age));
    }

    let habits = [
        ("phoneHours", input.phone_hours),
        ("sleepHours", input.sleep_hours),
        ("productiveHours", input.productive_hours),
        ("activityMinutes", input.activity_minutes),
        ("stressLevel", input.stress_level),
    ];
    if let Some((field, _)) = habits.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(InputError::NonFinite(field));
    }

    Ok(())
}

use serde::{Deserialize, Deserializer, Serialize};

/// Self-reported habits captured by the questionnaire.
///
/// Values are taken as-is; range checks (see [`super::validate_input`]) are
/// the caller's job and scoring tolerates out-of-domain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitInput {
    pub age: f64,
    pub phone_hours: f64,
    pub sleep_hours: f64,
    pub productive_hours: f64,
    pub activity_minutes: f64,
    pub stress_level: f64,
    #[serde(default)]
    pub mood: Mood,
}

/// Mood vocabulary offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    #[default]
    Neutral,
    Worried,
    Sad,
    /// Anything outside the vocabulary; scored like `neutral`.
    Unrecognized,
}

/// Never fails: nulls, numbers and unknown words all become `Unrecognized`.
impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map_or(Self::Unrecognized, Self::from_wire))
    }
}

impl Mood {
    pub const fn score(self) -> f64 {
        match self {
            Self::Happy => 9.0,
            Self::Calm => 8.0,
            Self::Neutral | Self::Unrecognized => 5.0,
            Self::Worried => 3.0,
            Self::Sad => 2.0,
        }
    }

    /// Exact wire vocabulary, as sent by the questionnaire.
    fn from_wire(raw: &str) -> Self {
        match raw {
            "happy" => Self::Happy,
            "calm" => Self::Calm,
            "neutral" => Self::Neutral,
            "worried" => Self::Worried,
            "sad" => Self::Sad,
            _ => Self::Unrecognized,
        }
    }

    /// Lenient parse used by the CLI: unknown words become `Unrecognized`.
    pub fn parse(raw: &str) -> Self {
        Self::from_wire(raw.trim().to_ascii_lowercase().as_str())
    }
}

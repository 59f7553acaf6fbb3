use axum::response::Response;
use serde_json::Value;

use crate::simulation::domain::{HabitInput, Mood};

/// Sleep-deprived, stressed, sedentary adult.
pub(super) fn struggling_adult() -> HabitInput {
    HabitInput {
        age: 25.0,
        phone_hours: 6.0,
        sleep_hours: 5.0,
        productive_hours: 2.0,
        activity_minutes: 10.0,
        stress_level: 9.0,
        mood: Mood::Worried,
    }
}

/// Well-rested, active adult with low screen time.
pub(super) fn thriving_adult() -> HabitInput {
    HabitInput {
        age: 25.0,
        phone_hours: 1.0,
        sleep_hours: 8.0,
        productive_hours: 5.0,
        activity_minutes: 45.0,
        stress_level: 2.0,
        mood: Mood::Happy,
    }
}

pub(super) fn habits_at_age(age: f64) -> HabitInput {
    HabitInput {
        age,
        ..thriving_adult()
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

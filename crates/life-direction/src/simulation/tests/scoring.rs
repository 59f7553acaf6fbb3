use super::common::*;
use crate::simulation::domain::{HabitInput, Mood};
use crate::simulation::scores::{
    compute_scores, optimal_activity_minutes, optimal_sleep_hours, round_tenth, Dimension,
    LifeScores, MetricScores,
};
use proptest::prelude::*;

#[test]
fn struggling_profile_matches_reference_scores() {
    let scores = compute_scores(&struggling_adult());

    assert_close(scores.focus, 4.6);
    assert_close(scores.energy, 4.1);
    assert_close(scores.health, 3.9);
    assert_close(scores.learning, 4.1);
    assert_close(scores.emotional, 2.3);
    assert_close(scores.growth, 3.3);
    assert_close(scores.overall, 3.7);
}

#[test]
fn thriving_profile_matches_reference_scores() {
    let scores = compute_scores(&thriving_adult());

    assert_close(scores.focus, 9.0);
    assert_close(scores.energy, 9.4);
    assert_close(scores.health, 9.5);
    assert_close(scores.learning, 8.9);
    assert_close(scores.emotional, 8.8);
    assert_close(scores.growth, 8.6);
    assert_close(scores.overall, 9.0);
    assert!(scores.overall >= 8.0);
}

#[test]
fn metric_scores_follow_age_optimums() {
    let metrics = MetricScores::from_input(&struggling_adult());

    assert_close(metrics.sleep, 8.125);
    assert_close(metrics.stress, 1.0);
    assert_close(metrics.mood, 3.0);
    assert!((metrics.activity - 10.0 / 3.0).abs() < 1e-9);
    assert!((metrics.productive - 10.0 / 3.0).abs() < 1e-9);
    assert!((metrics.phone - 2.8).abs() < 1e-9);
}

#[test]
fn optimums_switch_at_age_boundaries() {
    assert_close(optimal_sleep_hours(8.0), 9.0);
    assert_close(optimal_sleep_hours(17.9), 9.0);
    assert_close(optimal_sleep_hours(18.0), 8.0);
    assert_close(optimal_sleep_hours(29.0), 8.0);
    assert_close(optimal_sleep_hours(30.0), 7.5);
    assert_close(optimal_sleep_hours(59.0), 7.5);
    assert_close(optimal_sleep_hours(60.0), 8.0);

    assert_close(optimal_activity_minutes(12.0), 60.0);
    assert_close(optimal_activity_minutes(17.0), 60.0);
    assert_close(optimal_activity_minutes(18.0), 30.0);
    assert_close(optimal_activity_minutes(70.0), 30.0);
}

#[test]
fn sleep_score_falls_off_linearly_across_the_day() {
    let at = |sleep_hours: f64| {
        MetricScores::from_input(&HabitInput {
            sleep_hours,
            ..thriving_adult()
        })
        .sleep
    };

    assert_close(at(8.0), 10.0);
    assert_close(at(0.0), 5.0);
    assert_close(at(24.0), 0.0);
    assert_close(at(30.0), 0.0);
    assert!(at(7.0) > at(6.0));
}

#[test]
fn unrecognized_mood_scores_like_neutral() {
    let neutral = compute_scores(&HabitInput {
        mood: Mood::Neutral,
        ..struggling_adult()
    });
    let unknown = compute_scores(&HabitInput {
        mood: Mood::Unrecognized,
        ..struggling_adult()
    });

    assert_eq!(neutral, unknown);
    assert_eq!(Mood::parse("Ecstatic"), Mood::Unrecognized);
    assert_eq!(Mood::parse(" CALM "), Mood::Calm);
}

#[test]
fn mood_vocabulary_deserializes_leniently() {
    let input: HabitInput = serde_json::from_str(
        r#"{"age":30,"phoneHours":2,"sleepHours":7,"productiveHours":3,"activityMinutes":20,"stressLevel":4,"mood":"ecstatic"}"#,
    )
    .expect("payload decodes");
    assert_eq!(input.mood, Mood::Unrecognized);

    let missing: HabitInput = serde_json::from_str(
        r#"{"age":30,"phoneHours":2,"sleepHours":7,"productiveHours":3,"activityMinutes":20,"stressLevel":4}"#,
    )
    .expect("payload decodes without mood");
    assert_eq!(missing.mood, Mood::Neutral);

    for raw in ["null", "3", "true", r#"["happy"]"#, r#""Happy""#] {
        let mood: Mood = serde_json::from_str(raw).expect("mood never fails to decode");
        assert_eq!(mood, Mood::Unrecognized, "raw {raw}");
        assert_eq!(mood.score(), Mood::Neutral.score());
    }
    let calm: Mood = serde_json::from_str(r#""calm""#).expect("known mood decodes");
    assert_eq!(calm, Mood::Calm);
}

#[test]
fn more_phone_time_never_raises_focus() {
    let mut previous_phone = f64::INFINITY;
    let mut previous_focus = f64::INFINITY;

    for step in 0..=30 {
        let input = HabitInput {
            phone_hours: f64::from(step) * 0.5,
            ..struggling_adult()
        };
        let phone = MetricScores::from_input(&input).phone;
        let focus = compute_scores(&input).focus;

        assert!(phone <= previous_phone);
        assert!(focus <= previous_focus);
        previous_phone = phone;
        previous_focus = focus;
    }
}

#[test]
fn activity_below_optimum_strictly_raises_activity_score() {
    let scores: Vec<f64> = (0..6)
        .map(|step| {
            MetricScores::from_input(&HabitInput {
                activity_minutes: f64::from(step) * 5.0,
                ..struggling_adult()
            })
            .activity
        })
        .collect();

    assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn rounding_is_half_up_to_one_decimal() {
    assert_close(round_tenth(4.5575), 4.6);
    assert_close(round_tenth(3.947_916), 3.9);
    assert_close(round_tenth(0.25), 0.3);
    assert_close(round_tenth(10.0), 10.0);
}

#[test]
fn weakest_prefers_first_dimension_on_ties() {
    let flat = LifeScores {
        focus: 5.0,
        energy: 5.0,
        health: 5.0,
        learning: 5.0,
        emotional: 5.0,
        growth: 5.0,
        overall: 5.0,
    };
    assert_eq!(flat.weakest(), Dimension::Focus);

    let tied_low = LifeScores {
        energy: 3.0,
        health: 3.0,
        ..flat
    };
    assert_eq!(tied_low.weakest(), Dimension::Energy);

    let growth_low = LifeScores {
        growth: 1.0,
        ..flat
    };
    assert_eq!(growth_low.weakest(), Dimension::Growth);
}

#[test]
fn struggling_profile_is_weakest_emotionally() {
    assert_eq!(
        compute_scores(&struggling_adult()).weakest(),
        Dimension::Emotional
    );
}

#[test]
fn scores_serialize_with_dimension_names() {
    let value = serde_json::to_value(compute_scores(&thriving_adult())).expect("serializes");
    for key in Dimension::ordered().map(Dimension::key) {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value.get("overall").is_some());
}

fn mood_strategy() -> impl Strategy<Value = Mood> {
    prop_oneof![
        Just(Mood::Happy),
        Just(Mood::Calm),
        Just(Mood::Neutral),
        Just(Mood::Worried),
        Just(Mood::Sad),
        Just(Mood::Unrecognized),
    ]
}

fn habit_strategy() -> impl Strategy<Value = HabitInput> {
    (
        8.0f64..=70.0,
        0.0f64..=24.0,
        0.0f64..=24.0,
        0.0f64..=24.0,
        0.0f64..=600.0,
        1.0f64..=10.0,
        mood_strategy(),
    )
        .prop_map(
            |(
                age,
                phone_hours,
                sleep_hours,
                productive_hours,
                activity_minutes,
                stress_level,
                mood,
            )| HabitInput {
                age,
                phone_hours,
                sleep_hours,
                productive_hours,
                activity_minutes,
                stress_level,
                mood,
            },
        )
}

proptest! {
    /// Property: every dimension stays on the 0-10 scale for in-domain input.
    #[test]
    fn scores_stay_on_scale(input in habit_strategy()) {
        let scores = compute_scores(&input);
        for value in [
            scores.focus,
            scores.energy,
            scores.health,
            scores.learning,
            scores.emotional,
            scores.growth,
            scores.overall,
        ] {
            prop_assert!((0.0..=10.0).contains(&value), "{value} out of range for {input:?}");
        }
    }

    /// Property: scoring is a pure function of its input.
    #[test]
    fn scoring_is_deterministic(input in habit_strategy()) {
        prop_assert_eq!(compute_scores(&input), compute_scores(&input.clone()));
    }
}

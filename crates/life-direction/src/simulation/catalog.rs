//! Fixed guidance copy. Every narrative string the simulator emits lives here.

use super::scores::Dimension;

pub(crate) struct ActionTemplate {
    pub task: &'static str,
    pub duration: &'static str,
}

const fn action(task: &'static str, duration: &'static str) -> ActionTemplate {
    ActionTemplate { task, duration }
}

pub(crate) fn micro_actions(dimension: Dimension) -> &'static [ActionTemplate; 3] {
    match dimension {
        Dimension::Focus => &FOCUS_ACTIONS,
        Dimension::Energy => &ENERGY_ACTIONS,
        Dimension::Health => &HEALTH_ACTIONS,
        Dimension::Learning => &LEARNING_ACTIONS,
        Dimension::Emotional => &EMOTIONAL_ACTIONS,
        Dimension::Growth => &GROWTH_ACTIONS,
    }
}

static FOCUS_ACTIONS: [ActionTemplate; 3] = [
    action("Set a 1-hour focus timer", "60 mins"),
    action("Phone-free meal", "20 mins"),
    action("Write down top 3 priorities", "5 mins"),
];

static ENERGY_ACTIONS: [ActionTemplate; 3] = [
    action("Quick sunlight walk", "10 mins"),
    action("Rest with a power nap", "15 mins"),
    action("Full glass of water now", "1 min"),
];

static HEALTH_ACTIONS: [ActionTemplate; 3] = [
    action("Gentle stretching", "10 mins"),
    action("Stand up and move every hour", "5 mins"),
    action("Eat a healthy snack", "5 mins"),
];

static LEARNING_ACTIONS: [ActionTemplate; 3] = [
    action("Read 2 pages of a book", "5 mins"),
    action("Watch one helpful video", "10 mins"),
    action("Think about one new thing learned", "3 mins"),
];

static EMOTIONAL_ACTIONS: [ActionTemplate; 3] = [
    action("Slow breathing (4 times)", "2 mins"),
    action("Text a friend or family", "2 mins"),
    action("Write one thing you are thankful for", "1 min"),
];

static GROWTH_ACTIONS: [ActionTemplate; 3] = [
    action("Check your progress", "5 mins"),
    action("Think about your future goals", "5 mins"),
    action("Try one small new thing today", "10 mins"),
];

pub(crate) const fn weakest_area_explanation(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Focus => {
            "It's hard to get things done when you can't focus. Focusing better will make your life easier."
        }
        Dimension::Energy => {
            "You are low on energy. Getting more rest will help you stay on track."
        }
        Dimension::Health => {
            "Moving your body is very important. It helps you stay healthy and feel better."
        }
        Dimension::Learning => {
            "Learning new things keeps your mind sharp. Life is more exciting when you keep growing."
        }
        Dimension::Emotional => {
            "Being calm is a great skill. It helps you handle hard times much easier."
        }
        Dimension::Growth => {
            "Small improvements add up over time. Consistency is the key to a better life."
        }
    }
}

pub(crate) const TRAJECTORY_EXPLANATION: &str =
    "Your trajectory is a reflection of today's choices, not a fixed point in the future.";

pub(crate) const RISK_PHONE: &str = "High screen time may reduce focus and sleep quality over time";
pub(crate) const RISK_SLEEP: &str = "Low sleep can decrease energy, memory, and emotional stability";
pub(crate) const RISK_ACTIVITY: &str =
    "Limited physical activity may impact mood and long-term health";
pub(crate) const RISK_STRESS: &str = "High stress can affect focus, sleep, and overall well-being";

pub(crate) const POSITIVE_SLEEP: &str = "Good sleep duration supports brain health and energy";
pub(crate) const POSITIVE_ACTIVITY: &str = "Regular movement boosts mood, energy, and health";
pub(crate) const POSITIVE_PRODUCTIVE: &str = "Consistent focus time builds skills and progress";

pub(crate) const SUGGEST_PHONE: &str =
    "Try reducing screen time by 1 hour, especially in the hour before bed";
pub(crate) const SUGGEST_SLEEP: &str = "Aim to go to sleep 30 minutes earlier tonight";
pub(crate) const SUGGEST_ACTIVITY: &str =
    "Start with 10-15 minutes of walking or stretching every day";
pub(crate) const SUGGEST_STRESS: &str =
    "Try a few minutes of slow breathing exercises when stress builds up";

/// Used to top up the suggestion list when few risks were detected.
pub(crate) const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Keep your current routine steady and celebrate small wins",
    "Pick one habit to improve this week and track it daily",
    "Spend a few minutes outside in daylight each morning",
];

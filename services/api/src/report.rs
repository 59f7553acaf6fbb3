use clap::Args;
use life_direction::error::AppError;
use life_direction::simulation::{
    simulate_future, validate_input, AnalysisResult, HabitInput, LifeScores, Mood,
};

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Age in years (8-70)
    #[arg(long)]
    pub(crate) age: f64,
    /// Daily phone use in hours
    #[arg(long)]
    pub(crate) phone_hours: f64,
    /// Nightly sleep in hours
    #[arg(long)]
    pub(crate) sleep_hours: f64,
    /// Daily focused, productive time in hours
    #[arg(long)]
    pub(crate) productive_hours: f64,
    /// Daily physical activity in minutes
    #[arg(long)]
    pub(crate) activity_minutes: f64,
    /// Stress level from 1 (calm) to 10 (overwhelmed)
    #[arg(long)]
    pub(crate) stress_level: f64,
    /// Current mood: happy, calm, neutral, worried or sad
    #[arg(long, default_value = "neutral")]
    pub(crate) mood: String,
    /// Print the raw JSON payload instead of the console report
    #[arg(long)]
    pub(crate) json: bool,
}

impl SimulateArgs {
    fn habit_input(&self) -> HabitInput {
        HabitInput {
            age: self.age,
            phone_hours: self.phone_hours,
            sleep_hours: self.sleep_hours,
            productive_hours: self.productive_hours,
            activity_minutes: self.activity_minutes,
            stress_level: self.stress_level,
            mood: Mood::parse(&self.mood),
        }
    }
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let input = args.habit_input();
    validate_input(&input)?;

    let result = simulate_future(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_analysis(&result));
    }

    Ok(())
}

fn score_line(scores: &LifeScores) -> String {
    format!(
        "overall {:.1} | focus {:.1} | energy {:.1} | health {:.1} | learning {:.1} | emotional {:.1} | growth {:.1}",
        scores.overall,
        scores.focus,
        scores.energy,
        scores.health,
        scores.learning,
        scores.emotional,
        scores.growth
    )
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        lines.push(format!("\n{title}: none"));
        return;
    }

    lines.push(format!("\n{title}"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

pub(crate) fn render_analysis(result: &AnalysisResult) -> String {
    let mut lines = vec![
        "Life direction analysis".to_string(),
        result.explanation.clone(),
        "\nPaths".to_string(),
    ];

    lines.extend(result.paths().into_iter().map(|(_, path)| {
        format!(
            "- {} ({}): {}",
            path.name,
            path.description,
            score_line(&path.scores)
        )
    }));

    lines.push(format!(
        "\nMomentum: {} - {}",
        result.momentum.label, result.momentum.description
    ));
    lines.push(format!(
        "Weakest area: {} - {}",
        result.weakest_area.name, result.weakest_area.explanation
    ));

    lines.push("\nMicro-actions".to_string());
    lines.extend(
        result
            .micro_actions
            .iter()
            .map(|action| format!("- {} ({})", action.task, action.duration)),
    );

    push_section(&mut lines, "Risks", &result.risks);
    push_section(&mut lines, "Positives", &result.positives);
    push_section(&mut lines, "Suggestions", &result.suggestions);

    lines.push(format!("\n{}", result.summary));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

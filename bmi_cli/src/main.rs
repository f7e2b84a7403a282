use bmi_core::*;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmi-planner")]
#[command(about = "BMI calculator and diet planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI and show the matching diet plan
    Calculate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a downloadable text report
    Report {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Directory to write the report into
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the report instead of writing a file
        #[arg(long, conflicts_with = "output_dir")]
        stdout: bool,
    },

    /// Show the diet plan and tips for a category
    Plan {
        /// Category name (e.g. "Normal Weight")
        #[arg(long)]
        category: String,

        /// Activity level (sedentary, light, moderate, active, very-active)
        #[arg(long)]
        activity: Option<String>,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// Height in centimetres
    #[arg(long)]
    height: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<Gender>,

    /// Activity level (sedentary, light, moderate, active, very-active)
    #[arg(long)]
    activity: Option<String>,
}

impl ProfileArgs {
    /// Validate the form fields and build a profile
    fn into_profile(self) -> Result<UserProfile> {
        for (field, value) in [("height", self.height), ("weight", self.weight)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        Ok(UserProfile {
            height_cm: self.height,
            weight_kg: self.weight,
            age: self.age,
            gender: self.gender,
            activity_level: self.activity.as_deref().and_then(ActivityLevel::parse_lenient),
        })
    }
}

fn main() -> Result<()> {
    // Initialize logging
    bmi_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let errors = get_default_reference().validate();
    if !errors.is_empty() {
        eprintln!("Reference data validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::ReferenceValidation("Invalid reference data".into()));
    }

    match cli.command {
        Commands::Calculate { profile, json } => {
            cmd_calculate(profile.into_profile()?, json, &config)
        }
        Commands::Report {
            profile,
            output_dir,
            stdout,
        } => cmd_report(profile.into_profile()?, output_dir, stdout, &config),
        Commands::Plan { category, activity } => {
            let activity = activity.as_deref().and_then(ActivityLevel::parse_lenient);
            cmd_plan(&category, activity)
        }
    }
}

fn cmd_calculate(profile: UserProfile, json: bool, config: &Config) -> Result<()> {
    let result = calculate(&profile, chrono::Local::now());
    let plan = diet_plan_for(&result.category, profile.activity_level);
    let tips = resolve_health_tips(&result.category.name);
    let exercises = resolve_exercise_recommendations(&result.category.name);

    if json {
        let output = serde_json::json!({
            "result": result,
            "scale": scale_position(result.bmi),
            "diet_plan": plan,
            "health_tips": tips,
            "exercise_recommendations": exercises,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    display_result(&result, config.display.scale_width);
    display_plan(&plan, &tips);

    if config.display.show_exercise {
        println!("  Exercise:");
        for exercise in &exercises {
            println!("    • {}", exercise);
        }
        println!();
    }

    Ok(())
}

fn cmd_report(
    profile: UserProfile,
    output_dir: Option<PathBuf>,
    stdout: bool,
    config: &Config,
) -> Result<()> {
    let result = calculate(&profile, chrono::Local::now());
    let report = render_report(&result);

    if stdout {
        print!("{}", report);
        return Ok(());
    }

    let filename = report_filename(result.computed_at.date_naive());
    let dir = output_dir.unwrap_or_else(|| config.report.output_dir.clone());
    tracing::debug!("Delivering {} into {:?}", filename, dir);
    let mut sink = FileSink::new(dir);
    let path = sink.deliver(&filename, &report)?;

    println!(
        "✓ BMI {} ({}) report saved",
        format_bmi(result.bmi),
        result.category.name
    );
    println!("  Report: {}", path.display());

    Ok(())
}

fn cmd_plan(category: &str, activity: Option<ActivityLevel>) -> Result<()> {
    let key = normalize_category_key(category);
    if !get_default_reference().diet_plans.contains_key(&key) {
        eprintln!(
            "Unknown category: {}. Showing the Normal Weight plan.",
            category
        );
    }

    let plan = resolve_diet_plan(category, activity);
    let tips = resolve_health_tips(category);

    println!();
    println!(
        "  Activity level: {}",
        activity.map_or("Not specified", |a| a.as_str())
    );
    println!();
    display_plan(&plan, &tips);

    Ok(())
}

fn display_result(result: &CalculationResult, scale_width: usize) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  YOUR BMI: {}", format_bmi(result.bmi));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Category: {} ({})", result.category.name, result.category.color);
    println!("  {}", result.category.description);
    println!();
    println!("  {}", render_scale(result.bmi, scale_width));
    println!();
}

/// Text version of the BMI scale bar
fn render_scale(bmi: f64, width: usize) -> String {
    let progress = display_progress(bmi);
    let filled = if progress.is_finite() {
        ((progress.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize
    } else {
        0
    };
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress
    )
}

fn display_plan(plan: &DietPlan, tips: &[String]) {
    println!("  Daily Calories: {}", plan.calories);
    println!("  Protein: {}g", plan.protein);
    println!("  Meals/Day: {}", plan.meals);
    println!();

    println!("  Recommended Foods:");
    for food in &plan.foods {
        println!("    → {}", food);
    }
    println!();

    println!("  Foods to Avoid:");
    for food in &plan.avoid {
        println!("    ✗ {}", food);
    }
    println!();

    println!("  Health Tips:");
    for (i, tip) in tips.iter().enumerate() {
        println!("    {}. {}", i + 1, tip);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scale_bounds() {
        assert_eq!(render_scale(0.0, 10), "[░░░░░░░░░░] 0%");
        assert_eq!(render_scale(45.0, 10), "[██████████] 100%");
        assert!(render_scale(25.0, 10).starts_with("[█████░░░░░]"));
    }

    #[test]
    fn test_non_positive_height_is_rejected() {
        let args = ProfileArgs {
            height: 0.0,
            weight: 70.0,
            age: 30,
            gender: None,
            activity: None,
        };
        assert!(matches!(args.into_profile(), Err(Error::InvalidInput(_))));
    }
}

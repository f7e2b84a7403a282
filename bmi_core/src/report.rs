//! Plain-text BMI report rendering.
//!
//! The layout (headings, field order, the leading blank line and the
//! closing note) is fixed so reports stay byte-compatible with earlier
//! downloads.

use crate::engine::format_bmi;
use crate::planner::diet_plan_for;
use crate::reference::get_default_reference;
use crate::CalculationResult;
use chrono::NaiveDate;

const NOT_SPECIFIED: &str = "Not specified";

// The first line keeps its trailing space
const DISCLAIMER: &str = "Note: This report is for informational purposes only. \n\
                          Please consult with a healthcare professional for personalized medical advice.";

/// File name for a report generated on `date`: `BMI_Report_YYYY-MM-DD.txt`
pub fn report_filename(date: NaiveDate) -> String {
    format!("BMI_Report_{}.txt", date.format("%Y-%m-%d"))
}

/// Render the full report for a calculation
///
/// The diet plan and tips are resolved from the result's category and
/// activity level. The generation date is the local date of `computed_at`.
pub fn render_report(result: &CalculationResult) -> String {
    let profile = &result.profile;
    let category = &result.category;
    let plan = diet_plan_for(category, profile.activity_level);
    let tips = get_default_reference().health_tips_for(&category.key);

    let gender = profile.gender.map_or(NOT_SPECIFIED, |g| g.as_str());
    let activity = profile.activity_level.map_or(NOT_SPECIFIED, |a| a.as_str());

    let out = format!(
        "
BMI HEALTH REPORT
================

Personal Information:
- Age: {age} years
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg
- Activity Level: {activity}

BMI Results:
- BMI Score: {bmi}
- Category: {name}
- Status: {description}

Diet Plan Recommendations:
- Daily Calories: {calories}
- Protein Intake: {protein}g
- Recommended Meals: {meals} per day

Recommended Foods:
{foods}

Foods to Avoid:
{avoid}

Health Tips:
{tips}

Generated on: {date}

{disclaimer}
",
        age = profile.age,
        height = profile.height_cm,
        weight = profile.weight_kg,
        bmi = format_bmi(result.bmi),
        name = category.name,
        description = category.description,
        calories = plan.calories,
        protein = plan.protein,
        meals = plan.meals,
        foods = bullet_list(&plan.foods),
        avoid = bullet_list(&plan.avoid),
        tips = numbered_list(&tips),
        date = result.computed_at.date_naive().format("%Y-%m-%d"),
        disclaimer = DISCLAIMER,
    );

    tracing::debug!("Rendered report ({} bytes)", out.len());
    out
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

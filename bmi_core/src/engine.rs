//! BMI engine: the formula, category lookup and the visual scale mapping.
//!
//! Nothing here validates input. A zero or negative height produces an
//! infinite or NaN BMI, which then falls through to the last category.

use crate::reference::{get_default_reference, ReferenceData};
use crate::{CalculationResult, CategoryDescriptor, ScalePosition, UserProfile};
use chrono::{DateTime, Local};

/// Compute BMI as `weight_kg / (height_cm / 100)^2`, unrounded
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Format a BMI to one decimal place, rounding ties away from zero
///
/// `{:.1}` alone rounds an exact tie such as 24.25 to even ("24.2"); reports
/// have always shown "24.3".
pub fn format_bmi(bmi: f64) -> String {
    format!("{:.1}", (bmi * 10.0).round() / 10.0)
}

/// Classify a BMI against the default category table
pub fn classify(bmi: f64) -> &'static CategoryDescriptor {
    get_default_reference().classify(bmi)
}

/// Map a BMI onto a 0-100 display scale
///
/// Each category occupies a 25-point band; the open-ended band fills up
/// over BMI 30-40. Used only for display, never for classification.
/// Only the upper end is clamped, so negative input gives negative output
/// and NaN stays NaN.
pub fn display_progress(bmi: f64) -> f64 {
    let progress = if bmi < 18.5 {
        (bmi / 18.5) * 25.0
    } else if bmi < 25.0 {
        25.0 + ((bmi - 18.5) / (25.0 - 18.5)) * 25.0
    } else if bmi < 30.0 {
        50.0 + ((bmi - 25.0) / (30.0 - 25.0)) * 25.0
    } else {
        let over = ((bmi - 30.0) / 10.0) * 25.0;
        // Plain comparisons rather than f64::min so a NaN is not swallowed
        75.0 + if over > 25.0 { 25.0 } else { over }
    };

    if progress > 100.0 {
        100.0
    } else {
        progress
    }
}

/// Colour and progress for showing a BMI on the scale
pub fn scale_position(bmi: f64) -> ScalePosition {
    ScalePosition {
        color: classify(bmi).color.clone(),
        progress: display_progress(bmi),
    }
}

/// Run one calculation for a profile
pub fn calculate(profile: &UserProfile, computed_at: DateTime<Local>) -> CalculationResult {
    let bmi = compute_bmi(profile.weight_kg, profile.height_cm);
    let category = classify(bmi);

    tracing::info!("Calculated BMI {} ({})", format_bmi(bmi), category.name);

    CalculationResult {
        bmi,
        category: category.clone(),
        profile: profile.clone(),
        computed_at,
    }
}

impl ReferenceData {
    /// Find the first category whose range contains `bmi`
    ///
    /// Falls back to the last category when nothing matches, which only
    /// happens for NaN or negative values.
    pub fn classify(&self, bmi: f64) -> &CategoryDescriptor {
        match self.categories.iter().find(|c| c.contains(bmi)) {
            Some(category) => category,
            None => {
                tracing::debug!("BMI {} matched no category range, using fallback", bmi);
                self.categories
                    .last()
                    .expect("reference data always has at least one category")
            }
        }
    }
}

//! Plan resolution: activity-adjusted diet plans, health tips and exercise
//! recommendations for a category.
//!
//! Only the calorie target depends on activity level:
//! - sedentary 0.9, light 1.0, moderate 1.1, active 1.2, very-active 1.3
//! - unset (or unrecognized, see `ActivityLevel::parse_lenient`) 1.0
//!
//! Unknown category names resolve to the normal-weight entries.

use crate::reference::{
    get_default_reference, normalize_category_key, ReferenceData, FALLBACK_KEY,
};
use crate::{
    ActivityLevel, CategoryDescriptor, DietPlan, ExerciseRecommendationSet, HealthTipSet,
};
use std::collections::HashMap;

impl ActivityLevel {
    /// Calorie multiplier for this activity level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.9,
            ActivityLevel::Light => 1.0,
            ActivityLevel::Moderate => 1.1,
            ActivityLevel::Active => 1.2,
            ActivityLevel::VeryActive => 1.3,
        }
    }
}

/// Calorie multiplier for an optional activity level (1.0 when unset)
pub fn activity_multiplier(activity: Option<ActivityLevel>) -> f64 {
    activity.map_or(1.0, |level| level.multiplier())
}

/// Resolve the diet plan for a category display name
pub fn resolve_diet_plan(category_name: &str, activity: Option<ActivityLevel>) -> DietPlan {
    get_default_reference().diet_plan(&normalize_category_key(category_name), activity)
}

/// Resolve the diet plan for a classified category
pub fn diet_plan_for(category: &CategoryDescriptor, activity: Option<ActivityLevel>) -> DietPlan {
    get_default_reference().diet_plan(&category.key, activity)
}

/// Resolve the health tips for a category display name
pub fn resolve_health_tips(category_name: &str) -> HealthTipSet {
    get_default_reference().health_tips_for(&normalize_category_key(category_name))
}

/// Resolve the exercise recommendations for a category display name
pub fn resolve_exercise_recommendations(category_name: &str) -> ExerciseRecommendationSet {
    get_default_reference().exercise_recommendations_for(&normalize_category_key(category_name))
}

/// Look up `key`, falling back to the normal-weight entry
fn lookup_or_fallback<'a, T>(
    table: &'a HashMap<String, T>,
    key: &str,
    what: &str,
) -> Option<&'a T> {
    table.get(key).or_else(|| {
        tracing::warn!("No {} for category key '{}', using {}", what, key, FALLBACK_KEY);
        table.get(FALLBACK_KEY)
    })
}

impl ReferenceData {
    /// Copy the plan for `key` with calories scaled by the activity multiplier
    ///
    /// The stored template is never modified. Rounding is to the nearest
    /// integer with ties away from zero.
    pub fn diet_plan(&self, key: &str, activity: Option<ActivityLevel>) -> DietPlan {
        let mut plan = lookup_or_fallback(&self.diet_plans, key, "diet plan")
            .cloned()
            .unwrap_or_default();

        let multiplier = activity_multiplier(activity);
        plan.calories = (f64::from(plan.calories) * multiplier).round() as u32;

        tracing::debug!(
            "Resolved diet plan for '{}' (multiplier {}): {} kcal",
            key,
            multiplier,
            plan.calories
        );
        plan
    }

    /// Health tips for `key`
    pub fn health_tips_for(&self, key: &str) -> HealthTipSet {
        lookup_or_fallback(&self.health_tips, key, "health tips")
            .cloned()
            .unwrap_or_default()
    }

    /// Exercise recommendations for `key`
    pub fn exercise_recommendations_for(&self, key: &str) -> ExerciseRecommendationSet {
        lookup_or_fallback(
            &self.exercise_recommendations,
            key,
            "exercise recommendations",
        )
        .cloned()
        .unwrap_or_default()
    }
}

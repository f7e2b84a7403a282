//! Built-in reference tables: BMI categories, diet plans, health tips and
//! exercise recommendations.
//!
//! The tables are built once and only ever handed out by shared reference,
//! so a derived plan can never write back into them.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Key used when a category name has no entry in a table
pub const FALLBACK_KEY: &str = "normal_weight";

/// Cached default tables, built on first use
static DEFAULT_REFERENCE: Lazy<ReferenceData> = Lazy::new(build_default_reference);

/// Get a reference to the cached default tables
pub fn get_default_reference() -> &'static ReferenceData {
    &DEFAULT_REFERENCE
}

/// Normalize a category display name into a table key
///
/// Lowercases the name and replaces every space with an underscore, so
/// "Normal Weight" becomes "normal_weight".
pub fn normalize_category_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// All reference tables used by the engine and planner
#[derive(Clone, Debug)]
pub struct ReferenceData {
    /// Ordered; lookup takes the first matching range
    pub categories: Vec<CategoryDescriptor>,
    pub diet_plans: HashMap<String, DietPlan>,
    pub health_tips: HashMap<String, HealthTipSet>,
    pub exercise_recommendations: HashMap<String, ExerciseRecommendationSet>,
}

fn category(
    name: &str,
    min: f64,
    max: Option<f64>,
    color: &str,
    description: &str,
) -> CategoryDescriptor {
    CategoryDescriptor {
        key: normalize_category_key(name),
        name: name.into(),
        min_inclusive: min,
        max_exclusive: max,
        color: color.into(),
        description: description.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the default tables
///
/// Prefer `get_default_reference()` in production code; this is kept for
/// tests that need an owned copy to tamper with.
pub fn build_default_reference() -> ReferenceData {
    let categories = vec![
        category(
            "Underweight",
            0.0,
            Some(18.5),
            "#3B82F6",
            "You may need to gain weight. Consider consulting a healthcare provider for a healthy weight gain plan.",
        ),
        category(
            "Normal Weight",
            18.5,
            Some(25.0),
            "#10B981",
            "You have a healthy weight! Maintain your current lifestyle with balanced diet and regular exercise.",
        ),
        category(
            "Overweight",
            25.0,
            Some(30.0),
            "#F59E0B",
            "You may benefit from weight loss. Consider a balanced diet and increased physical activity.",
        ),
        category(
            "Obese",
            30.0,
            None,
            "#EF4444",
            "Consider consulting a healthcare provider for a comprehensive weight management plan.",
        ),
    ];

    // ========================================================================
    // Diet Plans
    // ========================================================================

    let mut diet_plans = HashMap::new();

    diet_plans.insert(
        "underweight".into(),
        DietPlan {
            calories: 2800,
            protein: 120,
            meals: 6,
            foods: strings(&[
                "Nuts and nut butters",
                "Avocados",
                "Whole grain bread",
                "Lean meats",
                "Fish",
                "Quinoa",
                "Sweet potatoes",
                "Greek yogurt",
                "Protein smoothies",
                "Olive oil",
                "Cheese",
                "Eggs",
            ]),
            avoid: strings(&[
                "Processed junk foods",
                "Sugary drinks",
                "Trans fats",
                "Excessive caffeine",
                "Alcohol",
            ]),
        },
    );

    diet_plans.insert(
        "normal_weight".into(),
        DietPlan {
            calories: 2200,
            protein: 80,
            meals: 5,
            foods: strings(&[
                "Lean proteins",
                "Whole grains",
                "Fresh fruits",
                "Vegetables",
                "Fish",
                "Legumes",
                "Low-fat dairy",
                "Nuts in moderation",
                "Olive oil",
                "Quinoa",
                "Brown rice",
                "Berries",
            ]),
            avoid: strings(&[
                "Processed foods",
                "Sugary snacks",
                "Fried foods",
                "Excessive alcohol",
                "Refined sugars",
            ]),
        },
    );

    diet_plans.insert(
        "overweight".into(),
        DietPlan {
            calories: 1800,
            protein: 100,
            meals: 5,
            foods: strings(&[
                "Lean proteins",
                "Vegetables",
                "Fruits",
                "Whole grains",
                "Fish",
                "Chicken breast",
                "Greek yogurt",
                "Legumes",
                "Green tea",
                "Leafy greens",
                "Berries",
                "Quinoa",
            ]),
            avoid: strings(&[
                "High-calorie snacks",
                "Sugary drinks",
                "Fried foods",
                "Processed meats",
                "White bread",
                "Pastries",
                "Ice cream",
            ]),
        },
    );

    diet_plans.insert(
        "obese".into(),
        DietPlan {
            calories: 1500,
            protein: 120,
            meals: 6,
            foods: strings(&[
                "Lean proteins",
                "Non-starchy vegetables",
                "Berries",
                "Fish",
                "Chicken breast",
                "Egg whites",
                "Greek yogurt",
                "Quinoa",
                "Spinach",
                "Broccoli",
                "Cauliflower",
                "Green tea",
            ]),
            avoid: strings(&[
                "High-calorie foods",
                "Sugary beverages",
                "Fried foods",
                "Fast food",
                "Processed snacks",
                "White rice",
                "Pasta",
                "Bread",
                "Alcohol",
            ]),
        },
    );

    // ========================================================================
    // Health Tips
    // ========================================================================

    let mut health_tips = HashMap::new();

    health_tips.insert(
        "underweight".into(),
        strings(&[
            "Eat nutrient-dense, calorie-rich foods to gain weight healthily",
            "Include strength training exercises to build muscle mass",
            "Eat frequent, smaller meals throughout the day",
            "Stay hydrated but avoid drinking large amounts before meals",
            "Consider consulting a nutritionist for a personalized meal plan",
            "Get adequate sleep (7-9 hours) to support healthy weight gain",
            "Track your progress and adjust your plan as needed",
        ]),
    );

    health_tips.insert(
        "normal_weight".into(),
        strings(&[
            "Maintain your current healthy lifestyle with balanced nutrition",
            "Continue regular physical activity (150 minutes moderate exercise weekly)",
            "Stay hydrated with 8-10 glasses of water daily",
            "Practice portion control to maintain your weight",
            "Include a variety of colorful fruits and vegetables in your diet",
            "Get regular health check-ups to monitor your overall health",
            "Manage stress through relaxation techniques or hobbies",
        ]),
    );

    health_tips.insert(
        "overweight".into(),
        strings(&[
            "Create a moderate calorie deficit through diet and exercise",
            "Increase physical activity gradually to 300 minutes per week",
            "Focus on whole, unprocessed foods",
            "Practice mindful eating and portion control",
            "Stay hydrated and replace sugary drinks with water",
            "Set realistic weight loss goals (1-2 pounds per week)",
            "Consider keeping a food diary to track your intake",
        ]),
    );

    health_tips.insert(
        "obese".into(),
        strings(&[
            "Consult with healthcare professionals for a comprehensive weight loss plan",
            "Start with low-impact exercises like walking or swimming",
            "Focus on creating sustainable lifestyle changes",
            "Consider working with a registered dietitian",
            "Join a weight loss support group for motivation",
            "Monitor your blood pressure and blood sugar regularly",
            "Be patient and celebrate small victories along the way",
            "Consider medical interventions if recommended by your doctor",
        ]),
    );

    // ========================================================================
    // Exercise Recommendations
    // ========================================================================

    let mut exercise_recommendations = HashMap::new();

    exercise_recommendations.insert(
        "underweight".into(),
        strings(&[
            "Strength training 3-4 times per week",
            "Light cardio 2-3 times per week",
            "Focus on compound movements (squats, deadlifts, push-ups)",
            "Yoga or stretching for flexibility",
        ]),
    );

    exercise_recommendations.insert(
        "normal_weight".into(),
        strings(&[
            "Mix of cardio and strength training",
            "150 minutes moderate aerobic activity weekly",
            "Strength training 2-3 times per week",
            "Include flexibility and balance exercises",
        ]),
    );

    exercise_recommendations.insert(
        "overweight".into(),
        strings(&[
            "Start with 150 minutes moderate cardio weekly",
            "Gradually increase to 300 minutes weekly",
            "Add strength training 2-3 times per week",
            "Low-impact exercises like walking, swimming, cycling",
        ]),
    );

    exercise_recommendations.insert(
        "obese".into(),
        strings(&[
            "Begin with low-impact activities",
            "Walking, water aerobics, stationary cycling",
            "Gradually increase duration and intensity",
            "Consider working with a fitness professional",
        ]),
    );

    ReferenceData {
        categories,
        diet_plans,
        health_tips,
        exercise_recommendations,
    }
}

impl ReferenceData {
    /// Validate the tables for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.categories.is_empty() {
            errors.push("No categories defined".to_string());
            return errors;
        }

        let open_ended = self
            .categories
            .iter()
            .filter(|c| c.max_exclusive.is_none())
            .count();
        if open_ended != 1 {
            errors.push(format!(
                "Expected exactly one open-ended category, found {}",
                open_ended
            ));
        }

        if self.categories[0].min_inclusive != 0.0 {
            errors.push(format!(
                "First category '{}' starts at {} instead of 0",
                self.categories[0].name, self.categories[0].min_inclusive
            ));
        }

        // Each range must start exactly where the previous one ended
        for pair in self.categories.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            match prev.max_exclusive {
                Some(max) if max != next.min_inclusive => errors.push(format!(
                    "Gap or overlap between '{}' (ends {}) and '{}' (starts {})",
                    prev.name, max, next.name, next.min_inclusive
                )),
                None => errors.push(format!(
                    "Open-ended category '{}' is followed by '{}'",
                    prev.name, next.name
                )),
                _ => {}
            }
        }

        for cat in &self.categories {
            if let Some(max) = cat.max_exclusive {
                if max <= cat.min_inclusive {
                    errors.push(format!("Category '{}' has an empty range", cat.name));
                }
            }
            if cat.key != normalize_category_key(&cat.name) {
                errors.push(format!(
                    "Category key '{}' doesn't match name '{}'",
                    cat.key, cat.name
                ));
            }
            if !self.diet_plans.contains_key(&cat.key) {
                errors.push(format!("Category '{}' has no diet plan", cat.name));
            }
            if !self.health_tips.contains_key(&cat.key) {
                errors.push(format!("Category '{}' has no health tips", cat.name));
            }
            if !self.exercise_recommendations.contains_key(&cat.key) {
                errors.push(format!(
                    "Category '{}' has no exercise recommendations",
                    cat.name
                ));
            }
        }

        for (key, plan) in &self.diet_plans {
            if plan.foods.is_empty() {
                errors.push(format!("Diet plan '{}' has no recommended foods", key));
            }
            if plan.meals == 0 {
                errors.push(format!("Diet plan '{}' has zero meals", key));
            }
        }

        if !self.diet_plans.contains_key(FALLBACK_KEY)
            || !self.health_tips.contains_key(FALLBACK_KEY)
        {
            errors.push(format!("Fallback entry '{}' is missing", FALLBACK_KEY));
        }

        errors
    }
}

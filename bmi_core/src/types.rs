//! Core domain types for the BMI diet planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - BMI categories and their ranges
//! - Diet plans, health tips and exercise recommendations
//! - User profile input (gender, activity level)
//! - Calculation results

use crate::{Error, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Category Types
// ============================================================================

/// A BMI category and the half-open range `[min_inclusive, max_exclusive)`
/// it covers. `max_exclusive = None` marks the open-ended top category.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryDescriptor {
    /// Normalized lookup key into the diet plan and tip tables
    pub key: String,
    pub name: String,
    pub min_inclusive: f64,
    pub max_exclusive: Option<f64>,
    /// Display colour as a hex string (e.g. `#10B981`)
    pub color: String,
    pub description: String,
}

impl CategoryDescriptor {
    /// Check whether a BMI value falls inside this category's range
    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= self.min_inclusive && self.max_exclusive.map_or(true, |max| bmi < max)
    }
}

// ============================================================================
// Plan Types
// ============================================================================

/// Daily nutrition targets and food guidance for a category
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietPlan {
    /// Daily calorie target (kcal)
    pub calories: u32,
    /// Daily protein target (grams)
    pub protein: u32,
    /// Recommended number of meals per day
    pub meals: u32,
    pub foods: Vec<String>,
    pub avoid: Vec<String>,
}

/// Ordered health tips for a category
pub type HealthTipSet = Vec<String>;

/// Ordered exercise suggestions for a category
pub type ExerciseRecommendationSet = Vec<String>;

// ============================================================================
// Profile Types
// ============================================================================

/// Self-reported gender
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(Error::InvalidInput(format!(
                "unknown gender '{}' (expected male, female or other)",
                s
            ))),
        }
    }
}

/// Self-reported activity level, used to scale the calorie target
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    /// Parse an activity level, treating unrecognized text as unset
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.parse() {
            Ok(level) => Some(level),
            Err(_) => {
                tracing::warn!("Unrecognized activity level '{}', treating as unset", s);
                None
            }
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown activity level '{}'", s)))
    }
}

/// Form input for one calculation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of a single BMI calculation
///
/// Created fresh per request and never mutated; a new calculation replaces it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    pub bmi: f64,
    pub category: CategoryDescriptor,
    pub profile: UserProfile,
    /// Local time, so report dates match the user's calendar
    pub computed_at: DateTime<Local>,
}

/// Where a BMI sits on the visual scale
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScalePosition {
    pub color: String,
    /// Progress along the scale, 0 to 100
    pub progress: f64,
}

#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI diet planner.
//!
//! This crate provides:
//! - Domain types (categories, diet plans, profiles, results)
//! - Reference tables
//! - BMI engine (formula, classification, display scale)
//! - Plan resolution by category and activity level
//! - Text report rendering and delivery

pub mod types;
pub mod error;
pub mod reference;
pub mod config;
pub mod logging;
pub mod engine;
pub mod planner;
pub mod report;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use reference::{get_default_reference, normalize_category_key, ReferenceData};
pub use config::Config;
pub use engine::{
    calculate, classify, compute_bmi, display_progress, format_bmi, scale_position,
};
pub use planner::{
    diet_plan_for, resolve_diet_plan, resolve_exercise_recommendations, resolve_health_tips,
};
pub use report::{render_report, report_filename};
pub use export::{FileSink, MemorySink, ReportSink};

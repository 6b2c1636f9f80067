//! Nomadic Performance Shared Library
//!
//! This crate contains shared types, models, and validation utilities
//! used across the backend service.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{GoalStatus, Intensity, InsightKind, MealType, User};
pub use types::*;

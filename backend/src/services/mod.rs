//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod goals;
pub mod hydration;
pub mod insights;
pub mod metrics;
pub mod nutrition;
pub mod relay;
pub mod templates;
pub mod user;
pub mod workouts;

pub use goals::GoalService;
pub use hydration::{CaffeineService, HydrationService};
pub use insights::InsightsService;
pub use metrics::MetricsService;
pub use nutrition::NutritionService;
pub use relay::RelayClient;
pub use templates::TemplateService;
pub use user::UserService;
pub use workouts::WorkoutService;

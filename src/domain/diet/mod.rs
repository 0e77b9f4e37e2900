//! Diet module - meal logging, dosha guidance, and plan contracts.

mod guidance;
mod meal_log;
mod plan;
mod summary;

pub use guidance::{guidance_for, guidance_for_dosha, DoshaGuidance};
pub use meal_log::{EntryMethod, MealLogEntry, MealLogUpdate, MealSlot, NewMealLogEntry};
pub use plan::{
    ActivityLevel, HealthGoal, MealPreference, PlanDescriptor, PlanRequest, PlanTarget,
    PlannedMeal,
};
pub use summary::{DailySummary, SlotSummary};

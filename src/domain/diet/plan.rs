//! Diet plan contracts: the target configuration the user fills in,
//! the request forwarded to the plan generator, and the returned plan.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Classification, DoshaScores};
use crate::domain::foundation::ValidationError;

/// Dietary preference options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealPreference {
    Vegetarian,
    Vegan,
    NonVegetarian,
}

/// Primary health goal options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    WeightLoss,
    WeightGain,
    Maintenance,
    MuscleBuilding,
}

/// Activity level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

/// Target configuration for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTarget {
    pub target_calories: u32,
    pub meal_preference: MealPreference,
    pub health_goal: HealthGoal,
    pub activity_level: ActivityLevel,
    /// Free-text exclusions (allergies, disliked foods).
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl Default for PlanTarget {
    fn default() -> Self {
        Self {
            target_calories: 2000,
            meal_preference: MealPreference::Vegetarian,
            health_goal: HealthGoal::Maintenance,
            activity_level: ActivityLevel::Moderate,
            exclusions: Vec::new(),
        }
    }
}

impl PlanTarget {
    /// Sanity bounds on the daily energy target.
    pub const MIN_CALORIES: u32 = 800;
    pub const MAX_CALORIES: u32 = 6000;

    /// Validates the target configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(Self::MIN_CALORIES..=Self::MAX_CALORIES).contains(&self.target_calories) {
            return Err(ValidationError::out_of_range(
                "target_calories",
                Self::MIN_CALORIES as i32,
                Self::MAX_CALORIES as i32,
                self.target_calories as i32,
            ));
        }
        Ok(())
    }
}

/// The payload forwarded to the plan-generation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub classification: Classification,
    pub scores: DoshaScores,
    pub target: PlanTarget,
}

/// One meal of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub name: String,
    pub time: String,
    pub items: Vec<String>,
    pub calories: u32,
}

/// A generated diet plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    pub meals: Vec<PlannedMeal>,
}

impl PlanDescriptor {
    /// Sum of the planned meals' calories.
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

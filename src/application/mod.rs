//! Application layer - the stores and the personalization façade.
//!
//! All mutation of engine state is routed through the operations here;
//! there are no ambient globals. Stores are owned state objects injected
//! where they are needed.

mod assessment_store;
mod meal_log_store;
mod personalization;

pub use assessment_store::{AssessmentError, AssessmentStore};
pub use meal_log_store::MealLogStore;
pub use personalization::Personalization;

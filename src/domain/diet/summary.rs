//! Daily intake summary derived from the meal log.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::meal_log::{MealLogEntry, MealSlot};

/// Calorie and entry counts for one meal slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    pub entries: usize,
    pub calories: u32,
}

/// Aggregated intake for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: u32,
    pub slots: BTreeMap<MealSlot, SlotSummary>,
}

impl DailySummary {
    /// Builds a summary over entries already filtered to one day.
    pub fn from_entries<'a>(
        date: NaiveDate,
        entries: impl IntoIterator<Item = &'a MealLogEntry>,
    ) -> Self {
        let mut slots: BTreeMap<MealSlot, SlotSummary> = MealSlot::all()
            .iter()
            .map(|slot| (*slot, SlotSummary::default()))
            .collect();
        let mut total_calories = 0;

        for entry in entries {
            let slot = slots.entry(entry.meal_slot).or_default();
            slot.entries += 1;
            slot.calories += entry.calories;
            total_calories += entry.calories;
        }

        Self {
            date,
            total_calories,
            slots,
        }
    }

    /// The summary for one slot; zeroed if nothing was logged there.
    pub fn slot(&self, slot: MealSlot) -> SlotSummary {
        self.slots.get(&slot).copied().unwrap_or_default()
    }
}

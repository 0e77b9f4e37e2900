//! Meal log entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Dosha, EntryId, ImageRef, Timestamp};

/// The meal a logged food item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// Returns all meal slots in day order.
    pub fn all() -> &'static [MealSlot] {
        &[
            MealSlot::Breakfast,
            MealSlot::Lunch,
            MealSlot::Dinner,
            MealSlot::Snacks,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a log entry came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMethod {
    Manual,
    Camera,
}

/// One recorded food-intake event.
///
/// Immutable once created, except through the log store's explicit
/// update operation which merges fields by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogEntry {
    pub id: EntryId,
    pub name: String,
    pub quantity: String,
    pub calories: u32,
    pub meal_slot: MealSlot,
    pub dosha: Option<Dosha>,
    pub captured_at: Timestamp,
    pub source_image: Option<ImageRef>,
    pub method: EntryMethod,
}

/// A meal log entry before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMealLogEntry {
    pub name: String,
    pub quantity: String,
    pub calories: u32,
    pub meal_slot: MealSlot,
    pub dosha: Option<Dosha>,
    pub source_image: Option<ImageRef>,
    pub method: EntryMethod,
}

impl NewMealLogEntry {
    /// A manually entered item.
    pub fn manual(
        name: impl Into<String>,
        quantity: impl Into<String>,
        calories: u32,
        meal_slot: MealSlot,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            calories,
            meal_slot,
            dosha: None,
            source_image: None,
            method: EntryMethod::Manual,
        }
    }

    /// Tags the entry with a dosha affinity.
    pub fn with_dosha(mut self, dosha: Dosha) -> Self {
        self.dosha = Some(dosha);
        self
    }

    /// Assigns the id and capture time, producing the stored entry.
    pub(crate) fn into_entry(self, id: EntryId, captured_at: Timestamp) -> MealLogEntry {
        MealLogEntry {
            id,
            name: self.name,
            quantity: self.quantity,
            calories: self.calories,
            meal_slot: self.meal_slot,
            dosha: self.dosha,
            captured_at,
            source_image: self.source_image,
            method: self.method,
        }
    }
}

/// Partial update for a meal log entry; present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MealLogUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub calories: Option<u32>,
    pub meal_slot: Option<MealSlot>,
    pub dosha: Option<Dosha>,
}

impl MealLogUpdate {
    /// Applies the present fields onto an entry, leaving id, capture
    /// time, image, and method untouched.
    pub(crate) fn apply(self, entry: &mut MealLogEntry) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(quantity) = self.quantity {
            entry.quantity = quantity;
        }
        if let Some(calories) = self.calories {
            entry.calories = calories;
        }
        if let Some(meal_slot) = self.meal_slot {
            entry.meal_slot = meal_slot;
        }
        if let Some(dosha) = self.dosha {
            entry.dosha = Some(dosha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_slots_cover_the_day_in_order() {
        assert_eq!(
            MealSlot::all(),
            &[
                MealSlot::Breakfast,
                MealSlot::Lunch,
                MealSlot::Dinner,
                MealSlot::Snacks
            ]
        );
    }

    #[test]
    fn meal_slot_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MealSlot::Breakfast).unwrap(),
            "\"breakfast\""
        );
        let slot: MealSlot = serde_json::from_str("\"snacks\"").unwrap();
        assert_eq!(slot, MealSlot::Snacks);
    }

    #[test]
    fn manual_entry_defaults() {
        let new = NewMealLogEntry::manual("Oatmeal", "1 bowl", 220, MealSlot::Breakfast);
        assert_eq!(new.method, EntryMethod::Manual);
        assert!(new.dosha.is_none());
        assert!(new.source_image.is_none());

        let new = new.with_dosha(Dosha::Kapha);
        assert_eq!(new.dosha, Some(Dosha::Kapha));
    }

    #[test]
    fn into_entry_carries_all_fields() {
        let captured_at = Timestamp::now();
        let entry = NewMealLogEntry::manual("Dal", "1 cup", 180, MealSlot::Lunch)
            .into_entry(EntryId::new(3), captured_at);

        assert_eq!(entry.id, EntryId::new(3));
        assert_eq!(entry.name, "Dal");
        assert_eq!(entry.captured_at, captured_at);
        assert_eq!(entry.method, EntryMethod::Manual);
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut entry = NewMealLogEntry::manual("Rice", "1 cup", 200, MealSlot::Lunch)
            .into_entry(EntryId::new(1), Timestamp::now());

        MealLogUpdate {
            calories: Some(250),
            meal_slot: Some(MealSlot::Dinner),
            ..Default::default()
        }
        .apply(&mut entry);

        assert_eq!(entry.name, "Rice");
        assert_eq!(entry.quantity, "1 cup");
        assert_eq!(entry.calories, 250);
        assert_eq!(entry.meal_slot, MealSlot::Dinner);
        assert_eq!(entry.id, EntryId::new(1));
    }
}

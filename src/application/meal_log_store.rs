//! Meal log store - the append-only, user-editable meal collection.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::diet::{MealLogEntry, MealLogUpdate, MealSlot, NewMealLogEntry};
use crate::domain::foundation::{EntryId, Timestamp};

/// In-memory collection of meal log entries.
///
/// Deliberately volatile: state resets on process restart, in contrast
/// to the assessment store. Ids come from a monotonic counter so they
/// are collision-free across rapid successive inserts and are never
/// reused, not even after `clear`. Entries keep insertion order;
/// deletion leaves survivor order untouched.
#[derive(Debug)]
pub struct MealLogStore {
    entries: Vec<MealLogEntry>,
    next_id: u64,
}

impl Default for MealLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MealLogStore {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Assigns a fresh id and appends the entry; returns the created
    /// entry.
    pub fn add(&mut self, new_entry: NewMealLogEntry) -> &MealLogEntry {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;

        let entry = new_entry.into_entry(id, Timestamp::now());
        debug!(id = %entry.id, meal_slot = %entry.meal_slot, "meal log entry added");
        self.entries.push(entry);
        self.entries.last().expect("entry was just pushed")
    }

    /// Merges the present fields into the entry with the given id,
    /// preserving id and position. Returns `false` when the id is not
    /// found; the miss is signalled, never silent success.
    pub fn update(&mut self, id: EntryId, update: MealLogUpdate) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                update.apply(entry);
                debug!(id = %id, "meal log entry updated");
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id. Returns `false` when the
    /// id is absent, which is a no-op rather than an error.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() < before;
        if removed {
            debug!(id = %id, "meal log entry removed");
        }
        removed
    }

    /// Empties the collection. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        debug!(discarded = self.entries.len(), "meal log cleared");
        self.entries.clear();
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[MealLogEntry] {
        &self.entries
    }

    /// The entry with the given id, if present.
    pub fn get(&self, id: EntryId) -> Option<&MealLogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries captured on the given local calendar day, in insertion
    /// order. A pure view; never mutates.
    pub fn entries_for_day(&self, date: NaiveDate) -> Vec<&MealLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.captured_at.local_date() == date)
            .collect()
    }

    /// Entries for one meal slot, in insertion order. A pure view.
    pub fn entries_for_meal(&self, slot: MealSlot) -> Vec<&MealLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.meal_slot == slot)
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(name: &str, slot: MealSlot) -> NewMealLogEntry {
        NewMealLogEntry::manual(name, "1 serving", 200, slot)
    }

    #[test]
    fn add_assigns_monotonic_ids() {
        let mut log = MealLogStore::new();
        let first = log.add(new_entry("Oatmeal", MealSlot::Breakfast)).id;
        let second = log.add(new_entry("Dal", MealSlot::Lunch)).id;
        let third = log.add(new_entry("Soup", MealSlot::Dinner)).id;

        assert!(first < second && second < third);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn rapid_successive_adds_never_collide() {
        let mut log = MealLogStore::new();
        let ids: Vec<EntryId> = (0..100)
            .map(|_| log.add(new_entry("item", MealSlot::Snacks)).id)
            .collect();

        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), 100);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn add_then_remove_restores_the_count() {
        let mut log = MealLogStore::new();
        log.add(new_entry("Oatmeal", MealSlot::Breakfast));
        log.add(new_entry("Dal", MealSlot::Lunch));
        let before = log.len();

        let id = log.add(new_entry("Soup", MealSlot::Dinner)).id;
        assert!(log.remove(id));

        assert_eq!(log.len(), before);
        // Survivor order preserved.
        assert_eq!(log.entries()[0].name, "Oatmeal");
        assert_eq!(log.entries()[1].name, "Dal");
    }

    #[test]
    fn remove_of_absent_id_is_a_signalled_no_op() {
        let mut log = MealLogStore::new();
        log.add(new_entry("Oatmeal", MealSlot::Breakfast));

        assert!(!log.remove(EntryId::new(999)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn removing_from_the_middle_preserves_order() {
        let mut log = MealLogStore::new();
        let _first = log.add(new_entry("Oatmeal", MealSlot::Breakfast)).id;
        let middle = log.add(new_entry("Dal", MealSlot::Lunch)).id;
        let _last = log.add(new_entry("Soup", MealSlot::Dinner)).id;

        log.remove(middle);

        let names: Vec<_> = log.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Oatmeal", "Soup"]);
    }

    #[test]
    fn update_merges_fields_in_place() {
        let mut log = MealLogStore::new();
        let id = log.add(new_entry("Rice", MealSlot::Lunch)).id;
        log.add(new_entry("Soup", MealSlot::Dinner));

        let updated = log.update(
            id,
            MealLogUpdate {
                calories: Some(320),
                ..Default::default()
            },
        );

        assert!(updated);
        let entry = log.get(id).unwrap();
        assert_eq!(entry.calories, 320);
        assert_eq!(entry.name, "Rice");
        // Position preserved.
        assert_eq!(log.entries()[0].id, id);
    }

    #[test]
    fn update_of_absent_id_signals_miss_without_mutation() {
        let mut log = MealLogStore::new();
        log.add(new_entry("Rice", MealSlot::Lunch));
        let snapshot: Vec<MealLogEntry> = log.entries().to_vec();

        let updated = log.update(
            EntryId::new(42),
            MealLogUpdate {
                name: Some("Biryani".to_string()),
                ..Default::default()
            },
        );

        assert!(!updated);
        assert_eq!(log.entries(), snapshot.as_slice());
    }

    #[test]
    fn clear_empties_but_does_not_reuse_ids() {
        let mut log = MealLogStore::new();
        let last_id = {
            log.add(new_entry("Oatmeal", MealSlot::Breakfast));
            log.add(new_entry("Dal", MealSlot::Lunch)).id
        };

        log.clear();
        assert!(log.is_empty());

        let fresh = log.add(new_entry("Soup", MealSlot::Dinner)).id;
        assert!(fresh > last_id);
    }

    #[test]
    fn entries_for_meal_filters_in_insertion_order() {
        let mut log = MealLogStore::new();
        log.add(new_entry("Oatmeal", MealSlot::Breakfast));
        log.add(new_entry("Fruit", MealSlot::Breakfast));
        log.add(new_entry("Tea", MealSlot::Breakfast));
        log.add(new_entry("Dal", MealSlot::Lunch));

        let breakfast = log.entries_for_meal(MealSlot::Breakfast);
        let names: Vec<_> = breakfast.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, ["Oatmeal", "Fruit", "Tea"]);
    }

    #[test]
    fn entries_for_day_matches_todays_captures() {
        let mut log = MealLogStore::new();
        log.add(new_entry("Oatmeal", MealSlot::Breakfast));
        log.add(new_entry("Dal", MealSlot::Lunch));

        let today = log.entries_for_day(Timestamp::today());
        assert_eq!(today.len(), 2);

        let yesterday = Timestamp::today().pred_opt().unwrap();
        assert!(log.entries_for_day(yesterday).is_empty());
    }
}

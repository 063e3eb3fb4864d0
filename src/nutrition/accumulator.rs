use crate::models::{LoggedFoodEntry, NutrientSet, ResolvedFood};

/// Field-wise sum of a batch of nutrient sets.
pub fn batch_total<'a>(sets: impl IntoIterator<Item = &'a NutrientSet>) -> NutrientSet {
    sets.into_iter().sum()
}

/// Result of adding a batch of resolved foods to the log.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub entries: Vec<LoggedFoodEntry>,
    pub total: NutrientSet,
}

/// Today's food log.
///
/// The entries are the only stored state; the daily total is summed from
/// them on read so it cannot drift out of step with the log.
#[derive(Debug, Clone, Default)]
pub struct DailyLog {
    entries: Vec<LoggedFoodEntry>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LoggedFoodEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LoggedFoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Daily total: the sum of every logged entry.
    pub fn total(&self) -> NutrientSet {
        batch_total(self.entries.iter().map(|e| &e.nutrients))
    }

    /// Append one entry per resolved food.
    ///
    /// Returns `None` without touching the log when `foods` is empty.
    pub fn add_batch(&mut self, foods: Vec<ResolvedFood>) -> Option<BatchSummary> {
        if foods.is_empty() {
            return None;
        }

        let entries: Vec<LoggedFoodEntry> = foods.into_iter().map(LoggedFoodEntry::from).collect();
        let total = batch_total(entries.iter().map(|e| &e.nutrients));
        self.entries.extend(entries.iter().cloned());

        Some(BatchSummary { entries, total })
    }

    /// Append a single pre-built entry.
    pub fn push(&mut self, entry: LoggedFoodEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<LoggedFoodEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&LoggedFoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

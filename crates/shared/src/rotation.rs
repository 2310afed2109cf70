use chrono::NaiveDate;

use crate::models::DayContext;

/// Default rotation: one algorithm category per day, wrapping after the last
/// entry. The ordering is configuration, not derived.
const DEFAULT_ROTATION: [&str; 20] = [
    "bfs",
    "dp",
    "graph",
    "tree",
    "greedy",
    "two-pointers",
    "array",
    "string",
    "simulation",
    "binary-search",
    "hash-table",
    "heap",
    "backtracking",
    "design",
    "sorting",
    "math",
    "stack",
    "queue",
    "linked-list",
    "binary-tree",
];

/// Number of days the easier warm-up policy applies after the epoch.
const EARLY_PHASE_DAYS: i64 = 10;

/// The rotation calendar: a fixed epoch date and an ordered tag cycle.
/// Injectable so runs can be computed for arbitrary dates in tests.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub epoch: NaiveDate,
    pub rotation: Vec<String>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2025, 11, 19).unwrap(),
            rotation: DEFAULT_ROTATION.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

impl Schedule {
    /// Whole days between `date` and the epoch. Negative when the run date
    /// precedes the epoch.
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    /// Tag for a day offset. Offsets before the epoch resolve by absolute
    /// value, so every offset maps to a valid tag.
    pub fn tag_for_offset(&self, offset: i64) -> &str {
        let index = offset.unsigned_abs() as usize % self.rotation.len();
        &self.rotation[index]
    }

    pub fn day_context(&self, date: NaiveDate) -> DayContext {
        let day_offset = self.day_offset(date);

        DayContext {
            day_offset,
            is_early_phase: day_offset < EARLY_PHASE_DAYS,
            rotation_tag: self.tag_for_offset(day_offset).to_string(),
        }
    }
}

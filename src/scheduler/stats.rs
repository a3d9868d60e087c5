//! Timetable summary metrics.
//!
//! Pure aggregation over a finished entry set and the static
//! configuration. All percentages are rounded to one decimal place and
//! zero denominators yield 0.0, never NaN.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total classes | Committed entry count |
//! | Faculty utilization | entries / workable faculty slots per week |
//! | Classroom utilization | entries / (rooms x days x daily slots) |
//! | Preference score | min(100, entries / requested hours) |
//! | Conflict count | Entries currently flagged with a conflict |

use crate::models::{ScheduleEntry, TimetableConfig};

/// Summary metrics for a committed entry set.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableStats {
    /// Committed entry count.
    pub total_classes: usize,
    /// Percent of workable faculty slots in use.
    pub faculty_utilization: f64,
    /// Percent of room-slots in use.
    pub classroom_utilization: f64,
    /// Percent of requested hours placed, capped at 100.
    pub preference_score: f64,
    /// Entries currently flagged `has_conflict`.
    pub conflict_count: usize,
}

impl TimetableStats {
    /// Computes stats from an entry set and its configuration.
    ///
    /// A faculty member's workable slots are counted per working day that
    /// has an availability entry, capped by their daily limit and by the
    /// template length.
    pub fn calculate(entries: &[ScheduleEntry], config: &TimetableConfig) -> Self {
        let total_classes = entries.len();
        let slots_per_day = config.daily_slots.len();

        let workable_faculty_slots: usize = config
            .faculty
            .iter()
            .map(|f| {
                config
                    .working_days
                    .iter()
                    .filter(|day| f.availability.has_entry_for(**day))
                    .count()
                    * (f.max_hours_per_day as usize).min(slots_per_day)
            })
            .sum();

        let room_slots = config.classrooms.len() * config.working_days.len() * slots_per_day;

        let requested = config.total_requested_hours() as usize;
        let preference_score = percentage(total_classes, requested).min(100.0);

        let conflict_count = entries.iter().filter(|e| e.slot_state.has_conflict).count();

        Self {
            total_classes,
            faculty_utilization: percentage(total_classes, workable_faculty_slots),
            classroom_utilization: percentage(total_classes, room_slots),
            preference_score,
            conflict_count,
        }
    }
}

/// `used / capacity` as a percentage, rounded to one decimal.
///
/// Zero capacity yields 0.0.
fn percentage(used: usize, capacity: usize) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    round1(used as f64 / capacity as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

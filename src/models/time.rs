//! Weekly time grid: weekdays and daily time slots.
//!
//! # Time Model
//!
//! Slot boundaries are `HH:MM` wall-clock strings. All comparisons go
//! through the `HHMM` integer code (`"08:30"` → `830`), a totally ordered
//! encoding that is the single source of truth for "do these two time
//! ranges collide".
//!
//! # Interval Semantics
//!
//! Slots are half-open: a slot ending at 09:00 does not overlap a slot
//! starting at 09:00.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the scheduling week.
///
/// The week runs Monday through Saturday; the subset actually used for
/// scheduling is configuration (`working_days`), not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All schedulable days in calendar order.
    pub const ALL: [WeekDay; 6] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A time slot within the daily template.
///
/// Boundaries are `HH:MM` strings (e.g. `"08:00"`). The daily template is
/// a fixed ordered sequence of non-overlapping slots shared by every
/// working day.
///
/// # Examples
///
/// ```
/// use timegrid::models::TimeSlot;
///
/// let a = TimeSlot::new("08:00", "09:00");
/// let b = TimeSlot::new("09:00", "10:00");
/// assert!(!a.overlaps(&b)); // touching boundaries do not overlap
/// assert_eq!(a.start_code(), 800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start, `HH:MM`.
    pub start: String,
    /// Slot end, `HH:MM`.
    pub end: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Start boundary as an `HHMM` integer code (`"08:30"` → `830`).
    ///
    /// Malformed times order as `0` (midnight).
    #[inline]
    pub fn start_code(&self) -> i32 {
        hhmm_code(&self.start)
    }

    /// End boundary as an `HHMM` integer code.
    #[inline]
    pub fn end_code(&self) -> i32 {
        hhmm_code(&self.end)
    }

    /// Hour component of the start boundary (`"08:30"` → `8`).
    #[inline]
    pub fn start_hour(&self) -> i32 {
        self.start_code() / 100
    }

    /// Whether two slots overlap.
    ///
    /// Half-open semantics: slots that touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end_code() <= other.start_code() || other.end_code() <= self.start_code())
    }

    /// Whether `other` is fully contained in this slot.
    ///
    /// Containment is inclusive at both boundaries; partial overlap is not
    /// containment.
    pub fn contains(&self, other: &Self) -> bool {
        other.start_code() >= self.start_code() && other.end_code() <= self.end_code()
    }

    /// Canonical key for occupancy maps (`"08:00-09:00"`).
    pub fn key(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    /// Whether both boundaries parse as valid `HH:MM` times and the slot
    /// has positive duration.
    pub fn is_well_formed(&self) -> bool {
        parse_hhmm(&self.start).is_some()
            && parse_hhmm(&self.end).is_some()
            && self.start_code() < self.end_code()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses `HH:MM` into an `HHMM` code, tolerating malformed input.
///
/// Malformed strings map to `0` so that comparison logic stays total.
fn hhmm_code(time: &str) -> i32 {
    time.replace(':', "").parse().unwrap_or(0)
}

/// Strict `HH:MM` parse: returns `(hour, minute)` only for valid wall-clock
/// times.
fn parse_hhmm(time: &str) -> Option<(u32, u32)> {
    let (h, m) = time.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if hour < 24 && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hhmm_codes() {
        let slot = TimeSlot::new("08:30", "09:15");
        assert_eq!(slot.start_code(), 830);
        assert_eq!(slot.end_code(), 915);
        assert_eq!(slot.start_hour(), 8);
    }

    #[test]
    fn test_malformed_time_orders_as_midnight() {
        let slot = TimeSlot::new("garbage", "09:00");
        assert_eq!(slot.start_code(), 0);
        assert!(!slot.is_well_formed());
    }

    #[test]
    fn test_overlap_half_open() {
        let a = TimeSlot::new("08:00", "09:00");
        let b = TimeSlot::new("08:30", "09:30");
        let c = TimeSlot::new("09:00", "10:00");

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // touching boundary
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = TimeSlot::new("08:00", "09:00");
        let b = TimeSlot::new("10:00", "11:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment() {
        let window = TimeSlot::new("08:00", "12:00");
        let inside = TimeSlot::new("09:00", "10:00");
        let straddling = TimeSlot::new("11:00", "13:00");
        let exact = TimeSlot::new("08:00", "12:00");

        assert!(window.contains(&inside));
        assert!(window.contains(&exact));
        assert!(!window.contains(&straddling)); // partial overlap is not containment
    }

    #[test]
    fn test_slot_key() {
        let slot = TimeSlot::new("08:00", "09:00");
        assert_eq!(slot.key(), "08:00-09:00");
    }

    #[test]
    fn test_well_formed() {
        assert!(TimeSlot::new("08:00", "09:00").is_well_formed());
        assert!(!TimeSlot::new("09:00", "08:00").is_well_formed()); // inverted
        assert!(!TimeSlot::new("25:00", "26:00").is_well_formed());
        assert!(!TimeSlot::new("08:61", "09:00").is_well_formed());
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(WeekDay::Monday.label(), "Monday");
        assert_eq!(WeekDay::Saturday.to_string(), "Saturday");
        assert_eq!(WeekDay::ALL.len(), 6);
    }
}

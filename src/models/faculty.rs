//! Faculty model and weekly availability.
//!
//! A faculty member teaches a set of subjects, has per-weekday open
//! intervals, and a daily workload cap counted in scheduled slots
//! (independent of interval length).
//!
//! # Availability Semantics
//!
//! A slot is teachable only when some open interval on that day fully
//! contains it. Partial overlap with an interval is insufficient, and a
//! day with no availability entry is unavailable for every slot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TimeSlot, WeekDay};

/// Weekly availability: weekday to an ordered list of open intervals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Availability {
    windows: HashMap<WeekDay, Vec<TimeSlot>>,
}

impl Availability {
    /// Creates an empty availability (unavailable every day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an open interval on a day.
    pub fn with_window(mut self, day: WeekDay, window: TimeSlot) -> Self {
        self.add_window(day, window);
        self
    }

    /// Adds an open interval on a day.
    pub fn add_window(&mut self, day: WeekDay, window: TimeSlot) {
        self.windows.entry(day).or_default().push(window);
    }

    /// Open intervals for a day (empty when the day has no entry).
    pub fn windows_for(&self, day: WeekDay) -> &[TimeSlot] {
        self.windows.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the day has an availability entry at all.
    ///
    /// An entry with an empty interval list still counts as present; it
    /// marks a day the member nominally works even if no interval is open.
    pub fn has_entry_for(&self, day: WeekDay) -> bool {
        self.windows.contains_key(&day)
    }

    /// Whether `slot` is fully contained in some open interval on `day`.
    pub fn allows(&self, day: WeekDay, slot: &TimeSlot) -> bool {
        self.windows_for(day).iter().any(|w| w.contains(slot))
    }

    /// Days that have at least one entry.
    pub fn days(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.windows.keys().copied()
    }
}

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Contact label.
    pub email: String,
    /// Subject IDs this member may teach.
    pub subjects: Vec<String>,
    /// Weekly availability.
    pub availability: Availability,
    /// Cap on scheduled slots per day.
    pub max_hours_per_day: u32,
}

impl Faculty {
    /// Creates a new faculty member with the given ID.
    ///
    /// Defaults to an 8-slot daily cap and no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            subjects: Vec::new(),
            availability: Availability::new(),
            max_hours_per_day: 8,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact label.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Adds an open interval on a day.
    pub fn with_window(
        mut self,
        day: WeekDay,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.availability.add_window(day, TimeSlot::new(start, end));
        self
    }

    /// Sets the daily slot cap.
    pub fn with_max_hours_per_day(mut self, max: u32) -> Self {
        self.max_hours_per_day = max;
        self
    }

    /// Whether this member may teach the given subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }

    /// Whether this member can teach `slot` on `day`.
    ///
    /// True iff some open interval that day fully contains the slot.
    pub fn is_available(&self, day: WeekDay, slot: &TimeSlot) -> bool {
        self.availability.allows(day, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faculty() -> Faculty {
        Faculty::new("f1")
            .with_name("Dr. Sarah Johnson")
            .with_email("sarah.j@college.edu")
            .with_subject("s1")
            .with_window(WeekDay::Monday, "08:00", "16:00")
            .with_window(WeekDay::Tuesday, "08:00", "14:00")
            .with_max_hours_per_day(6)
    }

    #[test]
    fn test_faculty_builder() {
        let f = sample_faculty();
        assert_eq!(f.id, "f1");
        assert_eq!(f.max_hours_per_day, 6);
        assert!(f.teaches("s1"));
        assert!(!f.teaches("s2"));
    }

    #[test]
    fn test_availability_full_containment() {
        let f = sample_faculty();
        let slot = TimeSlot::new("09:00", "10:00");
        assert!(f.is_available(WeekDay::Monday, &slot));
    }

    #[test]
    fn test_partial_overlap_is_unavailable() {
        let f = sample_faculty();
        // Tuesday window ends at 14:00; a 13:30-14:30 slot straddles it
        let slot = TimeSlot::new("13:30", "14:30");
        assert!(!f.is_available(WeekDay::Tuesday, &slot));
    }

    #[test]
    fn test_missing_day_is_unavailable() {
        let f = sample_faculty();
        let slot = TimeSlot::new("09:00", "10:00");
        assert!(!f.is_available(WeekDay::Friday, &slot));
    }

    #[test]
    fn test_multiple_windows_same_day() {
        let f = Faculty::new("f2")
            .with_window(WeekDay::Monday, "08:00", "10:00")
            .with_window(WeekDay::Monday, "14:00", "16:00");

        assert!(f.is_available(WeekDay::Monday, &TimeSlot::new("08:00", "09:00")));
        assert!(f.is_available(WeekDay::Monday, &TimeSlot::new("14:00", "15:00")));
        // Between the two windows
        assert!(!f.is_available(WeekDay::Monday, &TimeSlot::new("11:00", "12:00")));
    }

    #[test]
    fn test_exact_window_boundaries() {
        let f = sample_faculty();
        // Containment is inclusive at both boundaries
        assert!(f.is_available(WeekDay::Tuesday, &TimeSlot::new("08:00", "14:00")));
    }

    #[test]
    fn test_has_entry_for() {
        let f = sample_faculty();
        assert!(f.availability.has_entry_for(WeekDay::Monday));
        assert!(!f.availability.has_entry_for(WeekDay::Saturday));
    }
}

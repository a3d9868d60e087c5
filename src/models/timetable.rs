//! Generated timetable (result) model.
//!
//! A generation run returns the complete entry set together with any
//! conflicts, a fill score, and human-readable insights. A non-empty
//! conflict list means "partially scheduled", not failure.

use serde::{Deserialize, Serialize};

use super::{Conflict, ScheduleEntry, Severity, WeekDay};

/// The result of a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedTimetable {
    /// Committed placements.
    pub entries: Vec<ScheduleEntry>,
    /// Detected conflicts, including unsatisfiable requirements.
    pub conflicts: Vec<Conflict>,
    /// Fill score: placed hours / requested hours × 100.
    pub score: f64,
    /// Explanations for the earliest placements of the run.
    pub insights: Vec<String>,
}

impl GeneratedTimetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed placements.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the run produced no conflicts at all.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Whether any error-severity conflict is present.
    pub fn has_errors(&self) -> bool {
        self.conflicts.iter().any(|c| c.severity == Severity::Error)
    }

    /// Finds an entry by ID.
    pub fn entry(&self, entry_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// All entries on a given day.
    pub fn entries_for_day(&self, day: WeekDay) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// All entries for a given subject.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn sample_timetable() -> GeneratedTimetable {
        let mut t = GeneratedTimetable::new();
        t.entries.push(ScheduleEntry::new(
            "e1",
            "s1",
            "f1",
            "c1",
            WeekDay::Monday,
            TimeSlot::new("08:00", "09:00"),
        ));
        t.entries.push(ScheduleEntry::new(
            "e2",
            "s1",
            "f1",
            "c1",
            WeekDay::Tuesday,
            TimeSlot::new("09:00", "10:00"),
        ));
        t.entries.push(ScheduleEntry::new(
            "e3",
            "s2",
            "f2",
            "c2",
            WeekDay::Monday,
            TimeSlot::new("09:00", "10:00"),
        ));
        t.score = 100.0;
        t
    }

    #[test]
    fn test_queries() {
        let t = sample_timetable();
        assert_eq!(t.entry_count(), 3);
        assert_eq!(t.entry("e2").unwrap().day, WeekDay::Tuesday);
        assert!(t.entry("e99").is_none());
        assert_eq!(t.entries_for_day(WeekDay::Monday).len(), 2);
        assert_eq!(t.entries_for_subject("s1").len(), 2);
    }

    #[test]
    fn test_conflict_queries() {
        let mut t = sample_timetable();
        assert!(t.is_conflict_free());
        assert!(!t.has_errors());

        t.conflicts.push(Conflict::unassigned_subject("Latin"));
        assert!(!t.is_conflict_free());
        assert!(!t.has_errors()); // warning only

        t.conflicts.push(Conflict::unscheduled_hours("Math"));
        assert!(t.has_errors());
    }
}

//! Schedule entry model.
//!
//! An entry is one committed placement: subject, faculty, classroom, day,
//! slot. Entries are created by the generator, mutated by manual edit
//! operations, and discarded wholesale by a fresh generation run.

use serde::{Deserialize, Serialize};

use super::{TimeSlot, WeekDay};

/// Per-entry UI and validation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    /// Protected from automated regeneration.
    pub is_locked: bool,
    /// User-marked preferred placement.
    pub is_preferred: bool,
    /// User-marked undesirable placement.
    pub is_avoided: bool,
    /// Stamped by the conflict validator.
    pub has_conflict: bool,
    /// Description of the stamped conflict, if any.
    pub conflict_reason: Option<String>,
}

/// One committed placement on the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Placed subject.
    pub subject_id: String,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// Hosting classroom.
    pub classroom_id: String,
    /// Day of the week.
    pub day: WeekDay,
    /// Slot within the daily template.
    pub time_slot: TimeSlot,
    /// Lock/preference/conflict flags.
    pub slot_state: SlotState,
    /// Human-readable explanation of why this slot was chosen.
    pub ai_reason: Option<String>,
}

impl ScheduleEntry {
    /// Creates a new entry with default slot state.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        faculty_id: impl Into<String>,
        classroom_id: impl Into<String>,
        day: WeekDay,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            faculty_id: faculty_id.into(),
            classroom_id: classroom_id.into(),
            day,
            time_slot,
            slot_state: SlotState::default(),
            ai_reason: None,
        }
    }

    /// Sets the placement explanation.
    pub fn with_ai_reason(mut self, reason: impl Into<String>) -> Self {
        self.ai_reason = Some(reason.into());
        self
    }

    /// Marks the entry as locked.
    pub fn locked(mut self) -> Self {
        self.slot_state.is_locked = true;
        self
    }

    /// Whether the entry is protected from regeneration.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.slot_state.is_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults() {
        let e = ScheduleEntry::new(
            "e1",
            "s1",
            "f1",
            "c1",
            WeekDay::Monday,
            TimeSlot::new("08:00", "09:00"),
        );

        assert!(!e.is_locked());
        assert!(!e.slot_state.has_conflict);
        assert!(e.ai_reason.is_none());
    }

    #[test]
    fn test_entry_lock_and_reason() {
        let e = ScheduleEntry::new(
            "e1",
            "s1",
            "f1",
            "c1",
            WeekDay::Monday,
            TimeSlot::new("08:00", "09:00"),
        )
        .with_ai_reason("Best available slot")
        .locked();

        assert!(e.is_locked());
        assert_eq!(e.ai_reason.as_deref(), Some("Best available slot"));
    }
}

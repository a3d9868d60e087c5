//! Manual edit operations over a committed entry set.
//!
//! Edits never mutate in place: each operation takes the current entry
//! set, returns a new one, and re-validates synchronously so the
//! per-entry conflict flags always match what the caller displays.
//! Callers serialize edits per timetable and replace the set atomically;
//! undo/redo reduces to keeping old sets around.
//!
//! A move is committed only when its pre-flight check comes back clean.
//! Blocked moves leave the set untouched and return the blocking
//! conflicts for the caller to surface.

use log::debug;

use crate::models::{Conflict, Faculty, ScheduleEntry, TimeSlot, WeekDay};
use crate::scheduler::{check_move_conflicts, stamp_conflicts, validate_entries};

/// Explanation stamped on manually relocated entries.
const MANUAL_MOVE_REASON: &str = "Manually moved by user";

/// Result of applying (or refusing) a manual edit.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// Whether the edit was committed.
    pub applied: bool,
    /// The entry set after the edit; unchanged when the edit was refused.
    pub entries: Vec<ScheduleEntry>,
    /// Blocking pre-check conflicts when refused, the fresh validation
    /// list when applied.
    pub conflicts: Vec<Conflict>,
}

/// User-togglable slot-state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStateField {
    Locked,
    Preferred,
    Avoided,
}

/// Relocates one entry to a new day/slot (and optionally a new room).
///
/// Runs the pre-flight check first; the move is committed only when the
/// check is clean. `new_classroom_id` of `None` keeps the current room.
pub fn apply_move(
    entries: &[ScheduleEntry],
    entry_id: &str,
    new_day: WeekDay,
    new_slot: &TimeSlot,
    new_classroom_id: Option<&str>,
    faculty: &[Faculty],
) -> EditOutcome {
    let Some(entry) = entries.iter().find(|e| e.id == entry_id) else {
        return EditOutcome {
            applied: false,
            entries: entries.to_vec(),
            conflicts: Vec::new(),
        };
    };

    let target_room = new_classroom_id.unwrap_or(&entry.classroom_id);
    let blocking = check_move_conflicts(entry, new_day, new_slot, target_room, entries, faculty);
    if !blocking.is_empty() {
        debug!(
            "move of {entry_id} to {new_day} at {new_slot} blocked by {} conflicts",
            blocking.len()
        );
        return EditOutcome {
            applied: false,
            entries: entries.to_vec(),
            conflicts: blocking,
        };
    }

    let mut updated: Vec<ScheduleEntry> = entries.to_vec();
    for e in updated.iter_mut() {
        if e.id == entry_id {
            e.day = new_day;
            e.time_slot = new_slot.clone();
            e.classroom_id = target_room.to_string();
            e.ai_reason = Some(MANUAL_MOVE_REASON.to_string());
        }
    }

    let conflicts = validate_entries(&updated);
    stamp_conflicts(&mut updated, &conflicts);

    EditOutcome {
        applied: true,
        entries: updated,
        conflicts,
    }
}

/// Toggles a lock/preferred/avoided flag on one entry.
///
/// Flags do not affect set consistency, so no re-validation runs.
pub fn toggle_slot_state(
    entries: &[ScheduleEntry],
    entry_id: &str,
    field: SlotStateField,
) -> Vec<ScheduleEntry> {
    let mut updated = entries.to_vec();
    for e in updated.iter_mut() {
        if e.id == entry_id {
            match field {
                SlotStateField::Locked => e.slot_state.is_locked = !e.slot_state.is_locked,
                SlotStateField::Preferred => e.slot_state.is_preferred = !e.slot_state.is_preferred,
                SlotStateField::Avoided => e.slot_state.is_avoided = !e.slot_state.is_avoided,
            }
        }
    }
    updated
}

/// Removes one entry and re-validates the remainder.
pub fn delete_entry(entries: &[ScheduleEntry], entry_id: &str) -> EditOutcome {
    let mut updated: Vec<ScheduleEntry> = entries.iter().filter(|e| e.id != entry_id).cloned().collect();
    let applied = updated.len() != entries.len();

    let conflicts = validate_entries(&updated);
    stamp_conflicts(&mut updated, &conflicts);

    EditOutcome {
        applied,
        entries: updated,
        conflicts,
    }
}

/// Re-validates an entry set and re-stamps the per-entry flags.
///
/// Use after any edit made outside this module (e.g. replacing the set
/// with a history snapshot).
pub fn revalidate(entries: &[ScheduleEntry]) -> (Vec<ScheduleEntry>, Vec<Conflict>) {
    let mut updated = entries.to_vec();
    let conflicts = validate_entries(&updated);
    stamp_conflicts(&mut updated, &conflicts);
    (updated, conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConflictType;

    fn entry(
        id: &str,
        faculty_id: &str,
        classroom_id: &str,
        day: WeekDay,
        start: &str,
        end: &str,
    ) -> ScheduleEntry {
        ScheduleEntry::new(
            id,
            "s1",
            faculty_id,
            classroom_id,
            day,
            TimeSlot::new(start, end),
        )
    }

    fn sample_faculty() -> Vec<Faculty> {
        vec![
            Faculty::new("f1")
                .with_window(WeekDay::Monday, "08:00", "17:00")
                .with_window(WeekDay::Tuesday, "08:00", "17:00"),
            Faculty::new("f2")
                .with_window(WeekDay::Monday, "08:00", "17:00")
                .with_window(WeekDay::Tuesday, "08:00", "17:00"),
        ]
    }

    fn sample_entries() -> Vec<ScheduleEntry> {
        vec![
            entry("e1", "f1", "c1", WeekDay::Monday, "08:00", "09:00"),
            entry("e2", "f1", "c2", WeekDay::Monday, "10:00", "11:00"),
            entry("e3", "f2", "c1", WeekDay::Tuesday, "08:00", "09:00"),
        ]
    }

    #[test]
    fn test_safe_move_commits() {
        let entries = sample_entries();
        let outcome = apply_move(
            &entries,
            "e2",
            WeekDay::Tuesday,
            &TimeSlot::new("14:00", "15:00"),
            None,
            &sample_faculty(),
        );

        assert!(outcome.applied);
        assert!(outcome.conflicts.is_empty());
        let moved = outcome.entries.iter().find(|e| e.id == "e2").unwrap();
        assert_eq!(moved.day, WeekDay::Tuesday);
        assert_eq!(moved.time_slot, TimeSlot::new("14:00", "15:00"));
        assert_eq!(moved.classroom_id, "c2"); // room kept
        assert_eq!(moved.ai_reason.as_deref(), Some("Manually moved by user"));
    }

    #[test]
    fn test_safe_move_introduces_no_new_conflicts() {
        let entries = sample_entries();
        let before = validate_entries(&entries).len();

        let outcome = apply_move(
            &entries,
            "e2",
            WeekDay::Tuesday,
            &TimeSlot::new("14:00", "15:00"),
            None,
            &sample_faculty(),
        );
        assert!(outcome.applied);
        assert_eq!(validate_entries(&outcome.entries).len(), before);
    }

    #[test]
    fn test_blocked_move_leaves_set_unchanged() {
        let entries = sample_entries();
        // e2 onto e1's slot: same faculty
        let outcome = apply_move(
            &entries,
            "e2",
            WeekDay::Monday,
            &TimeSlot::new("08:00", "09:00"),
            None,
            &sample_faculty(),
        );

        assert!(!outcome.applied);
        assert_eq!(outcome.conflicts.len(), 1);
        assert_eq!(outcome.conflicts[0].conflict_type, ConflictType::FacultyOverlap);
        assert_eq!(outcome.entries, entries);
    }

    #[test]
    fn test_move_with_room_change() {
        let entries = sample_entries();
        let outcome = apply_move(
            &entries,
            "e2",
            WeekDay::Tuesday,
            &TimeSlot::new("14:00", "15:00"),
            Some("c3"),
            &sample_faculty(),
        );

        assert!(outcome.applied);
        let moved = outcome.entries.iter().find(|e| e.id == "e2").unwrap();
        assert_eq!(moved.classroom_id, "c3");
    }

    #[test]
    fn test_move_of_unknown_entry() {
        let entries = sample_entries();
        let outcome = apply_move(
            &entries,
            "e99",
            WeekDay::Tuesday,
            &TimeSlot::new("14:00", "15:00"),
            None,
            &sample_faculty(),
        );
        assert!(!outcome.applied);
        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.entries, entries);
    }

    #[test]
    fn test_toggle_lock_round_trip() {
        let entries = sample_entries();
        let once = toggle_slot_state(&entries, "e1", SlotStateField::Locked);
        assert!(once[0].slot_state.is_locked);
        let twice = toggle_slot_state(&once, "e1", SlotStateField::Locked);
        assert!(!twice[0].slot_state.is_locked);
        // Other entries untouched
        assert_eq!(twice[1], entries[1]);
    }

    #[test]
    fn test_delete_entry_revalidates() {
        // e1/e2 clash on faculty; deleting e1 clears e2's flag
        let mut entries = vec![
            entry("e1", "f1", "c1", WeekDay::Monday, "08:00", "09:00"),
            entry("e2", "f1", "c2", WeekDay::Monday, "08:00", "09:00"),
        ];
        let (stamped, conflicts) = revalidate(&entries);
        assert_eq!(conflicts.len(), 1);
        entries = stamped;
        assert!(entries[1].slot_state.has_conflict);

        let outcome = delete_entry(&entries, "e1");
        assert!(outcome.applied);
        assert_eq!(outcome.entries.len(), 1);
        assert!(outcome.conflicts.is_empty());
        assert!(!outcome.entries[0].slot_state.has_conflict);
    }

    #[test]
    fn test_delete_unknown_entry() {
        let entries = sample_entries();
        let outcome = delete_entry(&entries, "e99");
        assert!(!outcome.applied);
        assert_eq!(outcome.entries.len(), 3);
    }
}

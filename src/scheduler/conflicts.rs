//! Conflict detection over committed entry sets.
//!
//! Two entry points:
//!
//! - [`validate_entries`]: the post-hoc pairwise scan, the single source
//!   of truth for "is this entry set internally consistent". Pure and
//!   stateless; call it after every entry mutation and re-stamp the
//!   per-entry flags with [`stamp_conflicts`].
//! - [`check_move_conflicts`]: the pre-flight check for one proposed
//!   relocation. Read-only; the caller commits the move only when the
//!   returned list is empty.
//!
//! # Complexity
//! `validate_entries` is O(n^2) over the entry set. Weekly grids are
//! small (tens of entries), so the quadratic scan stays cheap.

use itertools::Itertools;

use crate::models::{Conflict, Faculty, ScheduleEntry, TimeSlot, WeekDay};

/// Scans all entry pairs for faculty and classroom double-bookings.
///
/// For every pair sharing a day with overlapping slots, emits a
/// faculty-overlap conflict when the faculty matches and, independently,
/// a classroom-overlap conflict when the classroom matches. A single
/// pair can produce both.
pub fn validate_entries(entries: &[ScheduleEntry]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (a, b) in entries.iter().tuple_combinations() {
        if a.day != b.day || !a.time_slot.overlaps(&b.time_slot) {
            continue;
        }
        if a.faculty_id == b.faculty_id {
            conflicts.push(Conflict::faculty_overlap(&a.id, &b.id));
        }
        if a.classroom_id == b.classroom_id {
            conflicts.push(Conflict::classroom_overlap(&a.id, &b.id));
        }
    }

    conflicts
}

/// Re-stamps `has_conflict`/`conflict_reason` on every entry from a
/// freshly computed conflict list.
///
/// Entries no longer implicated get their flags cleared, so stamping
/// after each mutation keeps the flags consistent with the set.
pub fn stamp_conflicts(entries: &mut [ScheduleEntry], conflicts: &[Conflict]) {
    for entry in entries.iter_mut() {
        let hit = conflicts.iter().find(|c| c.involves(&entry.id));
        entry.slot_state.has_conflict = hit.is_some();
        entry.slot_state.conflict_reason = hit.map(|c| c.description.clone());
    }
}

/// Pre-flight check for relocating one entry to `(new_day, new_slot)` in
/// `new_classroom_id`.
///
/// Checks the entry's faculty availability at the target, then faculty
/// and classroom overlaps against every other entry on the target day.
/// Returns an empty list iff the move is safe. Mutates nothing; the
/// caller decides whether to commit.
pub fn check_move_conflicts(
    entry: &ScheduleEntry,
    new_day: WeekDay,
    new_slot: &TimeSlot,
    new_classroom_id: &str,
    entries: &[ScheduleEntry],
    faculty: &[Faculty],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if let Some(member) = faculty.iter().find(|f| f.id == entry.faculty_id) {
        if !member.is_available(new_day, new_slot) {
            conflicts.push(Conflict::faculty_unavailable(&entry.id));
        }
    }

    for other in entries.iter().filter(|o| o.id != entry.id) {
        if other.day != new_day || !other.time_slot.overlaps(new_slot) {
            continue;
        }
        if other.faculty_id == entry.faculty_id {
            conflicts.push(Conflict::faculty_overlap(&entry.id, &other.id));
        }
        if other.classroom_id == new_classroom_id {
            conflicts.push(Conflict::classroom_overlap(&entry.id, &other.id));
        }
    }

    conflicts
}

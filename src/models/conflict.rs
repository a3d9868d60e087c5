//! Conflict model.
//!
//! Conflicts are the engine's whole error taxonomy: infeasibility,
//! double-booking, and availability breaches all surface here rather than
//! as panics or `Err` returns. They are derived data, recomputed from the
//! current entry set and never persisted independently of it.

use serde::{Deserialize, Serialize};

/// Classification of schedule conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictType {
    /// A faculty member is booked twice at overlapping times.
    FacultyOverlap,
    /// A classroom is booked twice at overlapping times.
    ClassroomOverlap,
    /// No feasible slot exists, or a faculty member is unavailable.
    Availability,
    /// A structural shortfall, e.g. a subject with no assigned teacher.
    Capacity,
    /// A soft preference was breached.
    PreferenceViolation,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// A detected constraint violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Human-readable description.
    pub description: String,
    /// IDs of the implicated entries (may be empty for generation-time
    /// infeasibility).
    pub entries: Vec<String>,
    /// Severity grade.
    pub severity: Severity,
}

impl Conflict {
    /// Creates a faculty double-booking conflict between two entries.
    pub fn faculty_overlap(entry_a: impl Into<String>, entry_b: impl Into<String>) -> Self {
        Self {
            conflict_type: ConflictType::FacultyOverlap,
            description: "Faculty assigned to multiple classes at the same time".into(),
            entries: vec![entry_a.into(), entry_b.into()],
            severity: Severity::Error,
        }
    }

    /// Creates a classroom double-booking conflict between two entries.
    pub fn classroom_overlap(entry_a: impl Into<String>, entry_b: impl Into<String>) -> Self {
        Self {
            conflict_type: ConflictType::ClassroomOverlap,
            description: "Classroom double-booked".into(),
            entries: vec![entry_a.into(), entry_b.into()],
            severity: Severity::Error,
        }
    }

    /// Creates an unsatisfiable-requirement conflict for a subject whose
    /// remaining hours could not be placed.
    pub fn unscheduled_hours(subject_name: &str) -> Self {
        Self {
            conflict_type: ConflictType::Availability,
            description: format!("Could not schedule {subject_name} - no available slots"),
            entries: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates a conflict for a subject with no eligible faculty member.
    pub fn unassigned_subject(subject_name: &str) -> Self {
        Self {
            conflict_type: ConflictType::Capacity,
            description: format!("No faculty member is assigned to teach {subject_name}"),
            entries: Vec::new(),
            severity: Severity::Warning,
        }
    }

    /// Creates an availability conflict for a proposed entry placement.
    pub fn faculty_unavailable(entry_id: impl Into<String>) -> Self {
        Self {
            conflict_type: ConflictType::Availability,
            description: "Faculty is not available at this time".into(),
            entries: vec![entry_id.into()],
            severity: Severity::Error,
        }
    }

    /// Whether this conflict implicates the given entry.
    pub fn involves(&self, entry_id: &str) -> bool {
        self.entries.iter().any(|e| e == entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_factories() {
        let c = Conflict::faculty_overlap("e1", "e2");
        assert_eq!(c.conflict_type, ConflictType::FacultyOverlap);
        assert_eq!(c.severity, Severity::Error);
        assert!(c.involves("e1"));
        assert!(c.involves("e2"));
        assert!(!c.involves("e3"));

        let c = Conflict::classroom_overlap("e1", "e2");
        assert_eq!(c.conflict_type, ConflictType::ClassroomOverlap);
    }

    #[test]
    fn test_unscheduled_hours() {
        let c = Conflict::unscheduled_hours("Mathematics");
        assert_eq!(c.conflict_type, ConflictType::Availability);
        assert!(c.entries.is_empty());
        assert!(c.description.contains("Mathematics"));
    }

    #[test]
    fn test_unassigned_subject_is_warning() {
        let c = Conflict::unassigned_subject("Latin");
        assert_eq!(c.conflict_type, ConflictType::Capacity);
        assert_eq!(c.severity, Severity::Warning);
    }
}

//! Input validation for timetable configurations.
//!
//! Checks structural integrity of a configuration before generation.
//! Detects:
//! - Duplicate IDs (subjects, faculty, classrooms)
//! - Faculty referencing unknown subject IDs
//! - Empty working-day list or daily slot template
//! - Malformed or inverted `HH:MM` boundaries
//! - Overlapping slots within the daily template
//!
//! The scheduling core itself never fails on these; validation is the
//! optional precondition layer a host may enforce before calling in.

use std::collections::HashSet;

use itertools::Itertools;

use crate::models::TimetableConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A faculty member lists a subject that doesn't exist.
    UnknownSubjectReference,
    /// The working-day list is empty.
    NoWorkingDays,
    /// The daily slot template is empty.
    EmptyDailyTemplate,
    /// Two template slots overlap.
    OverlappingTemplateSlots,
    /// A time boundary is not a valid `HH:MM` pair, or a slot is inverted.
    MalformedTimeSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetable configuration.
///
/// Checks:
/// 1. No duplicate subject, faculty, or classroom IDs
/// 2. All subject references in faculty point to existing subjects
/// 3. At least one working day and one template slot
/// 4. Template slots are well-formed and mutually non-overlapping
/// 5. Availability windows are well-formed
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &TimetableConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in &config.subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in &config.faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.id),
            ));
        }
        for subject_id in &f.subjects {
            if !subject_ids.contains(subject_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!("Faculty '{}' references unknown subject '{subject_id}'", f.id),
                ));
            }
        }
    }

    let mut classroom_ids = HashSet::new();
    for c in &config.classrooms {
        if !classroom_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", c.id),
            ));
        }
    }

    if config.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkingDays,
            "Working-day list is empty",
        ));
    }

    if config.daily_slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDailyTemplate,
            "Daily slot template is empty",
        ));
    }

    for slot in &config.daily_slots {
        if !slot.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTimeSlot,
                format!("Malformed template slot: {slot}"),
            ));
        }
    }

    for (a, b) in config.daily_slots.iter().tuple_combinations() {
        if a.overlaps(b) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverlappingTemplateSlots,
                format!("Template slots overlap: {a} and {b}"),
            ));
        }
    }

    for f in &config.faculty {
        for day in f.availability.days() {
            for window in f.availability.windows_for(day) {
                if !window.is_well_formed() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedTimeSlot,
                        format!("Malformed availability window for '{}' on {day}: {window}", f.id),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Faculty, Subject, TimeSlot, WeekDay};

    fn sample_config() -> TimetableConfig {
        let subjects = vec![
            Subject::new("s1").with_name("Math").with_hours_per_week(3),
            Subject::new("s2").with_name("Physics").with_hours_per_week(2),
        ];
        let faculty = vec![
            Faculty::new("f1")
                .with_subject("s1")
                .with_window(WeekDay::Monday, "08:00", "16:00"),
            Faculty::new("f2")
                .with_subject("s2")
                .with_window(WeekDay::Tuesday, "08:00", "16:00"),
        ];
        let classrooms = vec![Classroom::lecture("c1"), Classroom::lab("c2")];
        TimetableConfig::new(subjects, faculty, classrooms)
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&sample_config()).is_ok());
    }

    #[test]
    fn test_duplicate_subject_id() {
        let mut config = sample_config();
        config.subjects.push(Subject::new("s1"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("subject")));
    }

    #[test]
    fn test_duplicate_classroom_id() {
        let mut config = sample_config();
        config.classrooms.push(Classroom::lecture("c1"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("classroom")));
    }

    #[test]
    fn test_unknown_subject_reference() {
        let mut config = sample_config();
        config.faculty.push(Faculty::new("f3").with_subject("s99"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSubjectReference));
    }

    #[test]
    fn test_empty_working_days() {
        let config = sample_config().with_working_days(vec![]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoWorkingDays));
    }

    #[test]
    fn test_empty_template() {
        let config = sample_config().with_daily_slots(vec![]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyDailyTemplate));
    }

    #[test]
    fn test_overlapping_template_slots() {
        let config = sample_config().with_daily_slots(vec![
            TimeSlot::new("08:00", "09:30"),
            TimeSlot::new("09:00", "10:00"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverlappingTemplateSlots));
    }

    #[test]
    fn test_malformed_template_slot() {
        let config = sample_config().with_daily_slots(vec![TimeSlot::new("8 am", "9 am")]);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedTimeSlot));
    }

    #[test]
    fn test_malformed_availability_window() {
        let mut config = sample_config();
        config.faculty[0]
            .availability
            .add_window(WeekDay::Friday, TimeSlot::new("16:00", "08:00"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedTimeSlot));
    }

    #[test]
    fn test_multiple_errors_reported() {
        let mut config = sample_config().with_working_days(vec![]);
        config.subjects.push(Subject::new("s1"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
    }
}

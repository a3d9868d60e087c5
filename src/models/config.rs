//! Scheduling configuration: input container, soft preferences, and the
//! standard weekly template.

use serde::{Deserialize, Serialize};

use super::{Classroom, Faculty, Subject, TimeSlot, WeekDay};

/// Soft placement preferences.
///
/// Preferences bias the slot score; they never override hard constraints
/// (availability, double-booking, daily caps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreferences {
    /// Place hard subjects in morning slots when possible.
    pub prefer_morning: bool,
    /// Spread each subject's hours evenly across the week.
    pub prefer_even_distribution: bool,
    /// Keep hard subjects apart within a day.
    pub avoid_difficult_consecutive: bool,
}

impl SchedulePreferences {
    /// All preferences disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// All preferences enabled.
    pub fn all_enabled() -> Self {
        Self {
            prefer_morning: true,
            prefer_even_distribution: true,
            avoid_difficult_consecutive: true,
        }
    }
}

/// Input container for a generation run.
///
/// # Examples
///
/// ```
/// use timegrid::models::{Classroom, Faculty, Subject, TimetableConfig, WeekDay};
///
/// let subjects = vec![Subject::new("s1").with_name("Math").with_hours_per_week(2)];
/// let faculty = vec![Faculty::new("f1")
///     .with_subject("s1")
///     .with_window(WeekDay::Monday, "08:00", "12:00")];
/// let classrooms = vec![Classroom::lecture("c1")];
///
/// let config = TimetableConfig::new(subjects, faculty, classrooms);
/// assert_eq!(config.total_requested_hours(), 2);
/// assert!(config.faculty_for_subject("s1").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableConfig {
    /// Subjects to place.
    pub subjects: Vec<Subject>,
    /// Teaching staff.
    pub faculty: Vec<Faculty>,
    /// Available rooms.
    pub classrooms: Vec<Classroom>,
    /// Soft placement preferences.
    pub preferences: SchedulePreferences,
    /// Days designated as schedulable.
    pub working_days: Vec<WeekDay>,
    /// The fixed daily slot template, shared by every working day.
    pub daily_slots: Vec<TimeSlot>,
}

impl TimetableConfig {
    /// Creates a configuration with the standard week (Monday-Friday,
    /// eight one-hour slots) and no preferences enabled.
    pub fn new(subjects: Vec<Subject>, faculty: Vec<Faculty>, classrooms: Vec<Classroom>) -> Self {
        Self {
            subjects,
            faculty,
            classrooms,
            preferences: SchedulePreferences::default(),
            working_days: default_working_days(),
            daily_slots: default_daily_slots(),
        }
    }

    /// Sets the soft preferences.
    pub fn with_preferences(mut self, preferences: SchedulePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the working-day subset.
    pub fn with_working_days(mut self, days: Vec<WeekDay>) -> Self {
        self.working_days = days;
        self
    }

    /// Sets the daily slot template.
    pub fn with_daily_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.daily_slots = slots;
        self
    }

    /// Sum of all subjects' weekly hour budgets.
    pub fn total_requested_hours(&self) -> u32 {
        self.subjects.iter().map(|s| s.hours_per_week).sum()
    }

    /// Looks up a subject by ID.
    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    /// The eligible faculty member for a subject.
    ///
    /// Returns the first member, in faculty list order, whose subject set
    /// includes `subject_id`. When several members teach the same subject,
    /// only this first one is ever scheduled for it.
    pub fn faculty_for_subject(&self, subject_id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.teaches(subject_id))
    }
}

/// The standard one-hour daily template: 08:00-13:00 and 14:00-17:00.
pub fn default_daily_slots() -> Vec<TimeSlot> {
    [
        ("08:00", "09:00"),
        ("09:00", "10:00"),
        ("10:00", "11:00"),
        ("11:00", "12:00"),
        ("12:00", "13:00"),
        ("14:00", "15:00"),
        ("15:00", "16:00"),
        ("16:00", "17:00"),
    ]
    .into_iter()
    .map(|(s, e)| TimeSlot::new(s, e))
    .collect()
}

/// The standard working week: Monday through Friday.
pub fn default_working_days() -> Vec<WeekDay> {
    vec![
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ]
}

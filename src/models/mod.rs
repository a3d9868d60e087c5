//! Timetabling domain models.
//!
//! Core data types for weekly class scheduling: what to place (subjects),
//! who teaches (faculty with availability), where (classrooms), the time
//! grid itself, and the committed result (entries, conflicts).
//!
//! All models are plain serializable data; host applications persist the
//! configuration and entry set in whatever store they like.

mod classroom;
mod config;
mod conflict;
mod entry;
mod faculty;
mod subject;
mod time;
mod timetable;

pub use classroom::{Classroom, RoomType};
pub use config::{
    default_daily_slots, default_working_days, SchedulePreferences, TimetableConfig,
};
pub use conflict::{Conflict, ConflictType, Severity};
pub use entry::{ScheduleEntry, SlotState};
pub use faculty::{Availability, Faculty};
pub use subject::{Difficulty, Subject, SubjectColor};
pub use time::{TimeSlot, WeekDay};
pub use timetable::GeneratedTimetable;

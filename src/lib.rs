//! Weekly timetable scheduling engine.
//!
//! Assigns recurring classes (subject x faculty x classroom x weekly hour
//! budget) to a fixed weekly grid of day/time slots. Hard constraints
//! (faculty availability, no double-booking, daily workload caps) are
//! always honored; soft preferences (morning placement for hard subjects,
//! even weekly distribution, spacing of difficult subjects) bias the slot
//! score.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Faculty`, `Classroom`,
//!   `TimeSlot`, `ScheduleEntry`, `Conflict`, `TimetableConfig`,
//!   `GeneratedTimetable`
//! - **`scheduler`**: The constructive generator, conflict validation,
//!   move pre-checks, and summary metrics
//! - **`editing`**: Manual move/toggle/delete operations with synchronous
//!   re-validation
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, malformed templates)
//!
//! # Design
//!
//! The engine is a set of pure functions of their explicit inputs: a
//! generation run is one synchronous call whose trackers live and die on
//! its stack, edits transform an entry set value instead of mutating
//! shared state, and every diagnostic travels in the returned conflict
//! list rather than an error path. The only non-determinism is the
//! scoring jitter, drawn from an injected RNG so tests can pin seeds.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod editing;
pub mod models;
pub mod scheduler;
pub mod validation;

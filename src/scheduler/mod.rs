//! Timetable generation, conflict detection, and summary metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` is a constructive heuristic: class requirements are
//! sorted by difficulty and each remaining hour is committed to the
//! best-scoring free day x slot x classroom combination. It is not
//! optimal and never backtracks; requirements that run out of feasible
//! slots surface as availability conflicts on the result.
//!
//! # Validation
//!
//! `validate_entries` is the pairwise double-booking scan invoked after
//! every mutation; `check_move_conflicts` is the read-only pre-check for
//! a proposed manual relocation.
//!
//! # Metrics
//!
//! `TimetableStats` aggregates utilization and coverage percentages for
//! display.

mod conflicts;
mod greedy;
mod score;
mod stats;

pub use conflicts::{check_move_conflicts, stamp_conflicts, validate_entries};
pub use greedy::GreedyScheduler;
pub use score::{distribution_bonus, SlotScorer, BASE_SCORE, MORNING_LAST_HOUR};
pub use stats::TimetableStats;

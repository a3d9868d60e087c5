//! Preference-weighted slot scoring.
//!
//! # Scoring
//!
//! Every candidate slot starts at 100 and is adjusted by the enabled
//! preferences:
//!
//! | Adjustment | Condition | Amount |
//! |------------|-----------|--------|
//! | Morning bonus | `prefer_morning`, hard subject, start hour <= 11 | +20 |
//! | Morning penalty | `prefer_morning`, hard subject, later start | -10 |
//! | Hard-neighbor penalty | `avoid_difficult_consecutive`, hard subject, per near hard class that day | -30 each |
//! | Tie-break jitter | always | +[0, 10) |
//!
//! The even-distribution bonus is applied by the generator on top of this
//! score; it depends on running per-day counts the scorer does not see.
//!
//! # Adjacency Heuristic
//!
//! "Near" means the candidate's HHMM start code lies within +-100 of an
//! existing hard class's start or end code. The band is deliberately
//! coarse; it approximates back-to-back placement without consulting the
//! slot template.

use std::collections::HashMap;

use rand::Rng;

use crate::models::{Difficulty, SchedulePreferences, ScheduleEntry, Subject, TimeSlot};

/// Base score for every candidate.
pub const BASE_SCORE: f64 = 100.0;
/// Latest start hour still counted as morning.
pub const MORNING_LAST_HOUR: i32 = 11;

const MORNING_BONUS: f64 = 20.0;
const MORNING_PENALTY: f64 = 10.0;
const HARD_NEIGHBOR_PENALTY: f64 = 30.0;
const HARD_NEIGHBOR_BAND: i32 = 100;
const JITTER_MAX: f64 = 10.0;

/// Scores candidate slots for one generation run.
///
/// Holds the preferences and a subject-difficulty index so per-candidate
/// scoring stays cheap inside the engine's nested search.
#[derive(Debug)]
pub struct SlotScorer<'a> {
    preferences: &'a SchedulePreferences,
    difficulty_by_subject: HashMap<&'a str, Difficulty>,
}

impl<'a> SlotScorer<'a> {
    /// Creates a scorer over the given subject set.
    pub fn new(preferences: &'a SchedulePreferences, subjects: &'a [Subject]) -> Self {
        let difficulty_by_subject = subjects
            .iter()
            .map(|s| (s.id.as_str(), s.difficulty))
            .collect();
        Self {
            preferences,
            difficulty_by_subject,
        }
    }

    /// Scores placing `subject` at `slot`, given the entries already
    /// committed on the same day (any subject, any faculty).
    ///
    /// The jitter term makes scores non-deterministic across calls; pin
    /// the RNG seed for reproducible output.
    pub fn score<R: Rng>(
        &self,
        slot: &TimeSlot,
        subject: &Subject,
        same_day_entries: &[&ScheduleEntry],
        rng: &mut R,
    ) -> f64 {
        let mut score = BASE_SCORE;

        if self.preferences.prefer_morning && subject.difficulty == Difficulty::Hard {
            if slot.start_hour() <= MORNING_LAST_HOUR {
                score += MORNING_BONUS;
            } else {
                score -= MORNING_PENALTY;
            }
        }

        if self.preferences.avoid_difficult_consecutive && subject.difficulty == Difficulty::Hard {
            let candidate_start = slot.start_code();
            for entry in same_day_entries {
                if self.difficulty_of(&entry.subject_id) != Some(Difficulty::Hard) {
                    continue;
                }
                let near_end = (candidate_start - entry.time_slot.end_code()).abs();
                let near_start = (candidate_start - entry.time_slot.start_code()).abs();
                if near_end <= HARD_NEIGHBOR_BAND || near_start <= HARD_NEIGHBOR_BAND {
                    // Penalties accumulate per neighbor, uncapped
                    score -= HARD_NEIGHBOR_PENALTY;
                }
            }
        }

        score + rng.random_range(0.0..JITTER_MAX)
    }

    fn difficulty_of(&self, subject_id: &str) -> Option<Difficulty> {
        self.difficulty_by_subject.get(subject_id).copied()
    }
}

/// Even-distribution bonus for a day already holding `same_subject_count`
/// instances of the subject being placed.
///
/// Applied by the generator when `prefer_even_distribution` is set.
#[inline]
pub fn distribution_bonus(same_subject_count: usize) -> f64 {
    (20.0 - 10.0 * same_subject_count as f64).max(0.0)
}

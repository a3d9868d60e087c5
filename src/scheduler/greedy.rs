//! Constructive greedy timetable generation.
//!
//! # Algorithm
//!
//! 1. Pair every subject with its eligible faculty member (first found in
//!    faculty list order); subjects nobody teaches surface as capacity
//!    conflicts.
//! 2. Sort the resulting class requirements hard -> medium -> easy, once,
//!    before any placement. Harder subjects get first pick of slots.
//! 3. For each remaining hour of a requirement, search day x slot x
//!    classroom for the best-scoring free combination and commit it.
//! 4. When no feasible combination remains, report an availability
//!    conflict and abandon the requirement's remaining hours. There is no
//!    backtracking and no deferred retry.
//!
//! Days are visited ascending by how many instances of the subject the
//! day already holds (stable on the configured day order), so hours
//! naturally spread across the week even when the distribution preference
//! is off; the preference only adds a score bonus on top.
//!
//! # Failure Semantics
//!
//! Generation never fails: infeasible input produces a partially filled
//! timetable whose conflict list carries the diagnostics.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    Conflict, Difficulty, Faculty, GeneratedTimetable, SchedulePreferences, ScheduleEntry,
    Subject, TimeSlot, TimetableConfig, WeekDay,
};

use super::score::{distribution_bonus, SlotScorer, MORNING_LAST_HOUR};

/// Placements explained in the run's insight list.
const INSIGHT_LIMIT: usize = 5;

/// Greedy constructive timetable generator.
///
/// A generation run is a single synchronous call; all trackers live on
/// that call's stack and are discarded on return. The scoring jitter
/// comes from the injected RNG, so a pinned seed pins the output.
///
/// # Examples
///
/// ```
/// use timegrid::models::{Classroom, Faculty, Subject, TimeSlot, TimetableConfig, WeekDay};
/// use timegrid::scheduler::GreedyScheduler;
///
/// let subjects = vec![Subject::new("s1").with_name("Math").with_hours_per_week(2)];
/// let faculty = vec![Faculty::new("f1")
///     .with_subject("s1")
///     .with_window(WeekDay::Monday, "08:00", "10:00")
///     .with_window(WeekDay::Tuesday, "08:00", "10:00")];
/// let classrooms = vec![Classroom::lecture("c1")];
/// let config = TimetableConfig::new(subjects, faculty, classrooms)
///     .with_working_days(vec![WeekDay::Monday, WeekDay::Tuesday])
///     .with_daily_slots(vec![
///         TimeSlot::new("08:00", "09:00"),
///         TimeSlot::new("09:00", "10:00"),
///     ]);
///
/// let timetable = GreedyScheduler::new().generate_seeded(&config, 42);
/// assert_eq!(timetable.entry_count(), 2);
/// assert!(timetable.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    cancel: Option<Arc<AtomicBool>>,
}

/// A class requirement being worked through.
struct Requirement<'a> {
    subject: &'a Subject,
    faculty: &'a Faculty,
    remaining: u32,
}

/// Best placement found by one search pass.
struct Candidate {
    day: WeekDay,
    slot: TimeSlot,
    classroom_id: String,
    score: f64,
    reason: String,
}

impl GreedyScheduler {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a cooperative cancellation flag.
    ///
    /// The flag is checked between class-requirement iterations; a
    /// cancelled run returns the partial timetable built so far.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Generates a timetable from scratch.
    pub fn generate<R: Rng>(&self, config: &TimetableConfig, rng: &mut R) -> GeneratedTimetable {
        self.run(config, Vec::new(), rng)
    }

    /// Generates with a seeded RNG for reproducible output.
    pub fn generate_seeded(&self, config: &TimetableConfig, seed: u64) -> GeneratedTimetable {
        self.generate(config, &mut SmallRng::seed_from_u64(seed))
    }

    /// Regenerates a timetable, preserving locked entries.
    ///
    /// Locked entries from `previous` are kept verbatim: they pre-occupy
    /// their slots, count against the faculty's daily cap, and are
    /// deducted from their subject's weekly budget. Unlocked entries are
    /// discarded; a generation run never merges with unlocked state.
    pub fn regenerate<R: Rng>(
        &self,
        config: &TimetableConfig,
        previous: &[ScheduleEntry],
        rng: &mut R,
    ) -> GeneratedTimetable {
        let kept: Vec<ScheduleEntry> = previous.iter().filter(|e| e.is_locked()).cloned().collect();
        if !kept.is_empty() {
            debug!("regenerating around {} locked entries", kept.len());
        }
        self.run(config, kept, rng)
    }

    fn run<R: Rng>(
        &self,
        config: &TimetableConfig,
        kept: Vec<ScheduleEntry>,
        rng: &mut R,
    ) -> GeneratedTimetable {
        let mut entries = kept;
        let mut conflicts: Vec<Conflict> = Vec::new();
        let mut insights: Vec<String> = Vec::new();

        let mut occupancy = Occupancy::default();
        for entry in &entries {
            occupancy.book(entry);
        }

        let scorer = SlotScorer::new(&config.preferences, &config.subjects);

        let mut requirements: Vec<Requirement> = Vec::new();
        for subject in &config.subjects {
            let Some(faculty) = config.faculty_for_subject(&subject.id) else {
                if subject.hours_per_week > 0 {
                    debug!("subject {} has no eligible faculty", subject.id);
                    conflicts.push(Conflict::unassigned_subject(&subject.name));
                }
                continue;
            };
            let already = entries.iter().filter(|e| e.subject_id == subject.id).count() as u32;
            requirements.push(Requirement {
                subject,
                faculty,
                remaining: subject.hours_per_week.saturating_sub(already),
            });
        }

        // Harder subjects pick first; stable sort keeps config order within
        // a difficulty grade
        requirements.sort_by_key(|r| r.subject.difficulty.rank());

        info!(
            "scheduling {} class requirements across {} working days",
            requirements.len(),
            config.working_days.len()
        );

        let mut placed_this_run = 0usize;
        for req in &mut requirements {
            if self.is_cancelled() {
                info!("generation cancelled; returning partial timetable");
                break;
            }

            while req.remaining > 0 {
                match find_best_candidate(config, &scorer, &entries, &occupancy, req, rng) {
                    Some(candidate) => {
                        let entry = ScheduleEntry::new(
                            random_id(rng),
                            &req.subject.id,
                            &req.faculty.id,
                            &candidate.classroom_id,
                            candidate.day,
                            candidate.slot.clone(),
                        )
                        .with_ai_reason(candidate.reason.clone());

                        trace!(
                            "placed {} on {} at {} in {} (score {:.1})",
                            req.subject.id,
                            candidate.day,
                            candidate.slot,
                            candidate.classroom_id,
                            candidate.score
                        );

                        occupancy.book(&entry);
                        placed_this_run += 1;
                        if placed_this_run <= INSIGHT_LIMIT {
                            insights.push(format!(
                                "{} scheduled on {} at {}: {}",
                                req.subject.name, candidate.day, candidate.slot, candidate.reason
                            ));
                        }
                        entries.push(entry);
                        req.remaining -= 1;
                    }
                    None => {
                        debug!(
                            "no feasible slot left for {}; abandoning {} remaining hours",
                            req.subject.id, req.remaining
                        );
                        conflicts.push(Conflict::unscheduled_hours(&req.subject.name));
                        break;
                    }
                }
            }
        }

        let requested = config.total_requested_hours();
        let score = if requested == 0 {
            100.0
        } else {
            entries.len() as f64 / f64::from(requested) * 100.0
        };

        info!(
            "generation finished: {} entries, {} conflicts, fill score {:.1}",
            entries.len(),
            conflicts.len(),
            score
        );

        GeneratedTimetable {
            entries,
            conflicts,
            score,
            insights,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Searches the whole day x slot x classroom space for the global
/// best-scoring free combination for one hour of `req`.
fn find_best_candidate<R: Rng>(
    config: &TimetableConfig,
    scorer: &SlotScorer<'_>,
    entries: &[ScheduleEntry],
    occupancy: &Occupancy,
    req: &Requirement<'_>,
    rng: &mut R,
) -> Option<Candidate> {
    // Current per-day count of this subject drives both the day visiting
    // order and the distribution bonus
    let mut day_counts: HashMap<WeekDay, usize> = HashMap::new();
    for day in &config.working_days {
        let count = entries
            .iter()
            .filter(|e| e.subject_id == req.subject.id && e.day == *day)
            .count();
        day_counts.insert(*day, count);
    }

    let mut days = config.working_days.clone();
    days.sort_by_key(|d| day_counts.get(d).copied().unwrap_or(0));

    let mut best: Option<Candidate> = None;
    for day in days {
        if occupancy.faculty_hours(&req.faculty.id, day) >= req.faculty.max_hours_per_day {
            continue;
        }

        let same_day: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day == day).collect();
        let day_count = day_counts.get(&day).copied().unwrap_or(0);

        for slot in &config.daily_slots {
            if !req.faculty.is_available(day, slot) {
                continue;
            }
            let slot_key = slot.key();
            if occupancy.faculty_booked(&req.faculty.id, day, &slot_key) {
                continue;
            }

            for room in &config.classrooms {
                if occupancy.room_booked(&room.id, day, &slot_key) {
                    continue;
                }

                let mut score = scorer.score(slot, req.subject, &same_day, rng);
                let mut bonus = 0.0;
                if config.preferences.prefer_even_distribution {
                    bonus = distribution_bonus(day_count);
                    score += bonus;
                }

                if best.as_ref().is_none_or(|b| score > b.score) {
                    let reason = placement_reason(&config.preferences, req.subject, slot, bonus);
                    best = Some(Candidate {
                        day,
                        slot: slot.clone(),
                        classroom_id: room.id.clone(),
                        score,
                        reason,
                    });
                }
            }
        }
    }
    best
}

/// Templated explanation keyed to the preference that drove the choice.
fn placement_reason(
    preferences: &SchedulePreferences,
    subject: &Subject,
    slot: &TimeSlot,
    bonus: f64,
) -> String {
    if preferences.prefer_morning
        && subject.difficulty == Difficulty::Hard
        && slot.start_hour() <= MORNING_LAST_HOUR
    {
        "Morning slot picked for a demanding subject".into()
    } else if preferences.prefer_even_distribution && bonus > 0.0 {
        "Placed to keep the week evenly balanced".into()
    } else if preferences.avoid_difficult_consecutive && subject.difficulty == Difficulty::Hard {
        "Kept clear of other demanding classes".into()
    } else {
        "Best scoring free slot".into()
    }
}

/// 7-character lowercase base-36 entry ID from the injected RNG.
fn random_id<R: Rng>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..7)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Occupancy trackers local to one generation run.
///
/// Nested lookups keyed by id, then day, then slot key; owned by the
/// `run` call and discarded on return.
#[derive(Debug, Default)]
struct Occupancy {
    hours: HashMap<String, HashMap<WeekDay, u32>>,
    faculty_slots: HashMap<String, HashMap<WeekDay, HashSet<String>>>,
    room_slots: HashMap<String, HashMap<WeekDay, HashSet<String>>>,
}

impl Occupancy {
    fn book(&mut self, entry: &ScheduleEntry) {
        let slot_key = entry.time_slot.key();
        self.faculty_slots
            .entry(entry.faculty_id.clone())
            .or_default()
            .entry(entry.day)
            .or_default()
            .insert(slot_key.clone());
        self.room_slots
            .entry(entry.classroom_id.clone())
            .or_default()
            .entry(entry.day)
            .or_default()
            .insert(slot_key);
        *self
            .hours
            .entry(entry.faculty_id.clone())
            .or_default()
            .entry(entry.day)
            .or_insert(0) += 1;
    }

    fn faculty_hours(&self, faculty_id: &str, day: WeekDay) -> u32 {
        self.hours
            .get(faculty_id)
            .and_then(|by_day| by_day.get(&day))
            .copied()
            .unwrap_or(0)
    }

    fn faculty_booked(&self, faculty_id: &str, day: WeekDay, slot_key: &str) -> bool {
        self.faculty_slots
            .get(faculty_id)
            .and_then(|by_day| by_day.get(&day))
            .is_some_and(|slots| slots.contains(slot_key))
    }

    fn room_booked(&self, classroom_id: &str, day: WeekDay, slot_key: &str) -> bool {
        self.room_slots
            .get(classroom_id)
            .and_then(|by_day| by_day.get(&day))
            .is_some_and(|slots| slots.contains(slot_key))
    }
}

//! Subject model.
//!
//! A subject is a recurring class with a weekly hour budget and a
//! difficulty grade. Difficulty drives scheduling order (harder subjects
//! get first pick of slots) and the soft placement preferences.

use serde::{Deserialize, Serialize};

/// A subject to be placed on the weekly grid.
///
/// Immutable once a generation run begins; edited only between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short display code (e.g. "MATH101").
    pub code: String,
    /// Cosmetic color tag. Not consulted by the scheduler.
    pub color: SubjectColor,
    /// Weekly instance count to place.
    pub hours_per_week: u32,
    /// Difficulty grade.
    pub difficulty: Difficulty,
}

/// Subject difficulty grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Scheduling rank: harder subjects sort first.
    #[inline]
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Hard => 0,
            Difficulty::Medium => 1,
            Difficulty::Easy => 2,
        }
    }
}

/// Cosmetic color tag for display layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectColor {
    #[default]
    Math,
    Physics,
    Chemistry,
    Biology,
    English,
    History,
    Geography,
    Computer,
}

impl Subject {
    /// Creates a new subject with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            color: SubjectColor::default(),
            hours_per_week: 0,
            difficulty: Difficulty::default(),
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the color tag.
    pub fn with_color(mut self, color: SubjectColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the weekly hour budget.
    pub fn with_hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Sets the difficulty grade.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

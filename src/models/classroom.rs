//! Classroom model.
//!
//! Capacity and room type are carried on the model but not consulted by
//! the current matching logic: any classroom may host any subject. They
//! exist for room-fit checks layered on later.

use serde::{Deserialize, Serialize};

/// A classroom that can host scheduled classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seat capacity. Informational only.
    pub capacity: u32,
    /// Room classification. Informational only.
    pub room_type: RoomType,
}

/// Room classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[default]
    Lecture,
    Lab,
    Seminar,
}

impl Classroom {
    /// Creates a new classroom with the given ID and type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type,
        }
    }

    /// Creates a lecture room.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Lecture)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Lab)
    }

    /// Creates a seminar room.
    pub fn seminar(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Seminar)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

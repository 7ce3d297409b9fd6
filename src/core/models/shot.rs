//! Shot record model

use super::options::{
    Club, GreenSpeed, Inclination, LateralDirection, Lie, Mode, PinPosition, PracticeType,
    ShotShape, Wind,
};
use serde::{Deserialize, Serialize};

/// Fields that only apply to shots hit on a golf course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseDetails {
    /// Hole being played (1-18)
    pub hole_number: u8,
    /// Par of the hole
    pub par: u8,
    /// Strokes taken on the hole
    pub score: u8,
    /// Pin placement
    pub pin_position: PinPosition,
    /// Green speed
    pub green_speed: GreenSpeed,
}

/// Fields that only apply to shots hit at the driving range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeDetails {
    /// Kind of practice
    pub practice_type: PracticeType,
    /// Distance the player was aiming for, in yards (0 when unset)
    pub target_distance: f64,
}

/// Mode-specific part of a shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ShotContext {
    /// Range practice
    DrivingRange(RangeDetails),
    /// On-course play
    GolfCourse(CourseDetails),
}

impl Default for ShotContext {
    fn default() -> Self {
        Self::DrivingRange(RangeDetails::default())
    }
}

impl ShotContext {
    /// Mode this context belongs to
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::DrivingRange(_) => Mode::DrivingRange,
            Self::GolfCourse(_) => Mode::GolfCourse,
        }
    }

    /// Course details, if the shot was hit on a course
    #[must_use]
    pub const fn course(&self) -> Option<&CourseDetails> {
        match self {
            Self::GolfCourse(details) => Some(details),
            Self::DrivingRange(_) => None,
        }
    }

    /// Range details, if the shot was hit at the range
    #[must_use]
    pub const fn range(&self) -> Option<&RangeDetails> {
        match self {
            Self::DrivingRange(details) => Some(details),
            Self::GolfCourse(_) => None,
        }
    }
}

/// A shot ready to be stored
///
/// All distances are in yards. `timestamp` is `None` for freshly recorded
/// shots; the store fills it in with the current time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewShot {
    /// Club used
    pub club: Club,
    /// Horizontal direction
    pub lateral_direction: LateralDirection,
    /// Vertical direction
    pub inclination: Inclination,
    /// Intended shot shape
    pub expectation: ShotShape,
    /// Observed shot shape
    pub actual: ShotShape,
    /// Total distance in yards
    pub distance: f64,
    /// Carry distance in yards
    pub carry: f64,
    /// Lie
    pub lie: Lie,
    /// Wind
    pub wind: Wind,
    /// Free-text notes
    pub notes: String,
    /// Epoch milliseconds; `None` lets the store assign it
    pub timestamp: Option<i64>,
    /// Mode-specific fields
    #[serde(flatten)]
    pub context: ShotContext,
}

impl NewShot {
    /// Legacy combined direction, e.g. `"Left-High"`
    #[must_use]
    pub fn legacy_direction(&self) -> String {
        legacy_direction(self.lateral_direction, self.inclination)
    }
}

/// A stored shot. Records are never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Store-assigned identifier
    pub id: i64,
    /// Club used
    pub club: Club,
    /// Horizontal direction
    pub lateral_direction: LateralDirection,
    /// Vertical direction
    pub inclination: Inclination,
    /// Intended shot shape
    pub expectation: ShotShape,
    /// Observed shot shape
    pub actual: ShotShape,
    /// Total distance in yards
    pub distance: f64,
    /// Carry distance in yards
    pub carry: f64,
    /// Lie
    pub lie: Lie,
    /// Wind
    pub wind: Wind,
    /// Free-text notes
    pub notes: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    /// Mode-specific fields
    #[serde(flatten)]
    pub context: ShotContext,
}

impl ShotRecord {
    /// Build the stored form of `shot` with its assigned id and timestamp.
    #[must_use]
    pub fn from_new(id: i64, timestamp: i64, shot: NewShot) -> Self {
        Self {
            id,
            club: shot.club,
            lateral_direction: shot.lateral_direction,
            inclination: shot.inclination,
            expectation: shot.expectation,
            actual: shot.actual,
            distance: shot.distance,
            carry: shot.carry,
            lie: shot.lie,
            wind: shot.wind,
            notes: shot.notes,
            timestamp,
            context: shot.context,
        }
    }

    /// Mode the shot was recorded in
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.context.mode()
    }

    /// Whether the observed shape matched the intended one
    #[must_use]
    pub fn is_accurate(&self) -> bool {
        self.expectation == self.actual
    }

    /// Legacy combined direction, e.g. `"Left-High"`
    #[must_use]
    pub fn legacy_direction(&self) -> String {
        legacy_direction(self.lateral_direction, self.inclination)
    }

    /// Back to the storable form, keeping the original timestamp.
    #[must_use]
    pub fn to_new_shot(&self) -> NewShot {
        NewShot {
            club: self.club,
            lateral_direction: self.lateral_direction,
            inclination: self.inclination,
            expectation: self.expectation,
            actual: self.actual,
            distance: self.distance,
            carry: self.carry,
            lie: self.lie,
            wind: self.wind,
            notes: self.notes.clone(),
            timestamp: Some(self.timestamp),
            context: self.context,
        }
    }
}

/// Combine the two direction fields the way the first schema stored them.
#[must_use]
pub fn legacy_direction(lateral: LateralDirection, inclination: Inclination) -> String {
    format!("{lateral}-{inclination}")
}

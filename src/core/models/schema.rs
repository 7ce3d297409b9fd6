//! Versioned shot schemas and the migrations between them
//!
//! The shots table only ever grew by appending columns:
//!
//! * **v1** - club, direction, expectation, actual, distance, timestamp
//! * **v3** - adds lateral direction, inclination, carry, total, lie, wind, notes
//! * **v4** - adds the mode and the course/range specific columns
//!
//! Each version is modelled as a plain struct holding exactly what that schema
//! persisted (option fields as raw strings). [`migrate_v1_to_v3`] and
//! [`migrate_v3_to_v4`] perform one bump each; [`ShotV4::into_new_shot`] turns
//! the latest raw form into a typed [`NewShot`].

use super::options::{
    Club, GreenSpeed, Inclination, LateralDirection, Lie, Mode, PinPosition, PracticeType,
    ShotShape, UnknownOption, Wind,
};
use super::shot::{legacy_direction, CourseDetails, NewShot, RangeDetails, ShotContext, ShotRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latest schema version.
pub const SCHEMA_VERSION: u32 = 4;

/// Errors raised while converting persisted shots into typed records
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A stored string is not a known option
    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),

    /// A stored number does not fit the field
    #[error("{field} value {value} is out of range")]
    OutOfRange {
        /// Column name
        field: &'static str,
        /// Stored value
        value: i64,
    },

    /// Malformed JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A shot as the first schema stored it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotV1 {
    /// Free-text club name
    pub club: String,
    /// Free-text direction (`left`, `right`, `high`, `low`)
    pub direction: String,
    /// Free-text expected shape
    pub expectation: String,
    /// Free-text actual shape
    pub actual: String,
    /// Distance
    pub distance: f64,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// A shot as schema v3 stored it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotV3 {
    /// Club name
    pub club: String,
    /// Legacy combined direction
    pub direction: String,
    /// Horizontal direction
    pub lateral_direction: String,
    /// Vertical direction
    pub inclination: String,
    /// Expected shape
    pub expectation: String,
    /// Actual shape
    pub actual: String,
    /// Total distance in yards
    pub distance: f64,
    /// Carry distance in yards
    pub carry: f64,
    /// Same value as `distance`
    pub total: f64,
    /// Lie
    pub lie: String,
    /// Wind
    pub wind: String,
    /// Notes
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// A shot as schema v4 stores it
///
/// Course columns are zero/empty for range shots and the range columns hold
/// their defaults for course shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotV4 {
    /// Club name
    pub club: String,
    /// Legacy combined direction
    pub direction: String,
    /// Horizontal direction
    pub lateral_direction: String,
    /// Vertical direction
    pub inclination: String,
    /// Expected shape
    pub expectation: String,
    /// Actual shape
    pub actual: String,
    /// Total distance in yards
    pub distance: f64,
    /// Carry distance in yards
    pub carry: f64,
    /// Same value as `distance`
    pub total: f64,
    /// Lie
    pub lie: String,
    /// Wind
    pub wind: String,
    /// Notes
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    /// `driving_range` or `golf_course`
    pub mode: String,
    /// Hole number, 0 on the range
    #[serde(default)]
    pub hole_number: i64,
    /// Par, 0 on the range
    #[serde(default)]
    pub par: i64,
    /// Score, 0 on the range
    #[serde(default)]
    pub score: i64,
    /// Pin position, empty on the range
    #[serde(default)]
    pub pin_position: String,
    /// Green speed, empty on the range
    #[serde(default)]
    pub green_speed: String,
    /// Practice type
    #[serde(default)]
    pub practice_type: String,
    /// Target distance in yards
    #[serde(default)]
    pub target_distance: f64,
}

/// A shot in any of the persisted schema versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema_version")]
pub enum VersionedShot {
    /// First schema
    #[serde(rename = "1")]
    V1(ShotV1),
    /// Schema with split direction and context fields
    #[serde(rename = "3")]
    V3(ShotV3),
    /// Schema with mode-specific fields
    #[serde(rename = "4")]
    V4(ShotV4),
}

impl VersionedShot {
    /// Schema version of this entry
    #[must_use]
    pub const fn version(&self) -> u32 {
        match self {
            Self::V1(_) => 1,
            Self::V3(_) => 3,
            Self::V4(_) => SCHEMA_VERSION,
        }
    }

    /// Apply every pending migration.
    #[must_use]
    pub fn into_latest(self) -> ShotV4 {
        match self {
            Self::V1(v1) => migrate_v3_to_v4(migrate_v1_to_v3(v1)),
            Self::V3(v3) => migrate_v3_to_v4(v3),
            Self::V4(v4) => v4,
        }
    }
}

/// Split a legacy direction into `(lateral, inclination)` labels.
///
/// Accepts the combined `"Left-High"` form written since v3, the single words
/// the first schema collected, and free-text pairs in either order such as
/// `"low-left"`. Each axis that no part names falls back to `Center`.
#[must_use]
pub fn split_legacy_direction(direction: &str) -> (String, String) {
    let mut lateral = None;
    let mut inclination = None;

    // `Center` parses on both axes and is the fallback anyway
    for part in direction.split(|c: char| c == '-' || c.is_whitespace()) {
        match (part.parse::<LateralDirection>(), part.parse::<Inclination>()) {
            (Ok(value), Err(_)) if lateral.is_none() => lateral = Some(value),
            (Err(_), Ok(value)) if inclination.is_none() => inclination = Some(value),
            _ => {}
        }
    }

    (
        lateral.unwrap_or_default().to_string(),
        inclination.unwrap_or_default().to_string(),
    )
}

/// v1 → v3: split the direction and fill the new context columns.
#[must_use]
pub fn migrate_v1_to_v3(shot: ShotV1) -> ShotV3 {
    let (lateral_direction, inclination) = split_legacy_direction(&shot.direction);
    ShotV3 {
        club: shot.club,
        direction: shot.direction,
        lateral_direction,
        inclination,
        expectation: shot.expectation,
        actual: shot.actual,
        distance: shot.distance,
        carry: 0.0,
        total: shot.distance,
        lie: Lie::default().to_string(),
        wind: Wind::default().to_string(),
        notes: String::new(),
        timestamp: shot.timestamp,
    }
}

/// v3 → v4: every earlier shot was hit at the range.
#[must_use]
pub fn migrate_v3_to_v4(shot: ShotV3) -> ShotV4 {
    ShotV4 {
        club: shot.club,
        direction: shot.direction,
        lateral_direction: shot.lateral_direction,
        inclination: shot.inclination,
        expectation: shot.expectation,
        actual: shot.actual,
        distance: shot.distance,
        carry: shot.carry,
        total: shot.total,
        lie: shot.lie,
        wind: shot.wind,
        notes: shot.notes,
        timestamp: shot.timestamp,
        mode: Mode::DrivingRange.to_string(),
        hole_number: 0,
        par: 0,
        score: 0,
        pin_position: String::new(),
        green_speed: String::new(),
        practice_type: PracticeType::default().to_string(),
        target_distance: 0.0,
    }
}

fn small_int(field: &'static str, value: i64) -> Result<u8, SchemaError> {
    u8::try_from(value).map_err(|_| SchemaError::OutOfRange { field, value })
}

/// Parse a column that may be empty, falling back to the option's default.
fn option_or_default<T>(value: &str) -> Result<T, UnknownOption>
where
    T: std::str::FromStr<Err = UnknownOption> + Default,
{
    if value.trim().is_empty() {
        Ok(T::default())
    } else {
        value.parse()
    }
}

impl ShotV4 {
    /// Flatten a typed record into the persisted layout.
    #[must_use]
    pub fn from_record(record: &ShotRecord) -> Self {
        let mut row = Self::from_new_shot(&record.to_new_shot());
        row.timestamp = record.timestamp;
        row
    }

    /// Flatten a new shot into the persisted layout. A missing timestamp is written as 0.
    #[must_use]
    pub fn from_new_shot(shot: &NewShot) -> Self {
        let course = shot.context.course().copied();
        let range = shot.context.range().copied().unwrap_or_default();
        Self {
            club: shot.club.to_string(),
            direction: legacy_direction(shot.lateral_direction, shot.inclination),
            lateral_direction: shot.lateral_direction.to_string(),
            inclination: shot.inclination.to_string(),
            expectation: shot.expectation.to_string(),
            actual: shot.actual.to_string(),
            distance: shot.distance,
            carry: shot.carry,
            total: shot.distance,
            lie: shot.lie.to_string(),
            wind: shot.wind.to_string(),
            notes: shot.notes.clone(),
            timestamp: shot.timestamp.unwrap_or_default(),
            mode: shot.context.mode().to_string(),
            hole_number: course.map_or(0, |c| i64::from(c.hole_number)),
            par: course.map_or(0, |c| i64::from(c.par)),
            score: course.map_or(0, |c| i64::from(c.score)),
            pin_position: course.map_or_else(String::new, |c| c.pin_position.to_string()),
            green_speed: course.map_or_else(String::new, |c| c.green_speed.to_string()),
            practice_type: range.practice_type.to_string(),
            target_distance: range.target_distance,
        }
    }

    /// Validate the raw strings into a typed shot that keeps this row's timestamp.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownOption`] for strings that are not options
    /// of their field and [`SchemaError::OutOfRange`] for course numbers that
    /// do not fit.
    pub fn into_new_shot(self) -> Result<NewShot, SchemaError> {
        let mode: Mode = self.mode.parse()?;
        let context = match mode {
            Mode::DrivingRange => ShotContext::DrivingRange(RangeDetails {
                practice_type: option_or_default(&self.practice_type)?,
                target_distance: self.target_distance,
            }),
            Mode::GolfCourse => ShotContext::GolfCourse(CourseDetails {
                hole_number: small_int("hole_number", self.hole_number)?,
                par: small_int("par", self.par)?,
                score: small_int("score", self.score)?,
                pin_position: option_or_default::<PinPosition>(&self.pin_position)?,
                green_speed: option_or_default::<GreenSpeed>(&self.green_speed)?,
            }),
        };

        Ok(NewShot {
            club: self.club.parse::<Club>()?,
            lateral_direction: option_or_default(&self.lateral_direction)?,
            inclination: option_or_default(&self.inclination)?,
            expectation: self.expectation.parse::<ShotShape>()?,
            actual: self.actual.parse::<ShotShape>()?,
            distance: self.distance,
            carry: self.carry,
            lie: option_or_default(&self.lie)?,
            wind: option_or_default(&self.wind)?,
            notes: self.notes,
            timestamp: Some(self.timestamp),
            context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::options::Field;

    fn v1(direction: &str) -> ShotV1 {
        ShotV1 {
            club: "driver".to_string(),
            direction: direction.to_string(),
            expectation: "straight".to_string(),
            actual: "slice".to_string(),
            distance: 230.0,
            timestamp: 1_650_000_000_000,
        }
    }

    #[test]
    fn splits_legacy_directions() {
        assert_eq!(
            split_legacy_direction("Left-High"),
            ("Left".to_string(), "High".to_string())
        );
        assert_eq!(
            split_legacy_direction("left"),
            ("Left".to_string(), "Center".to_string())
        );
        assert_eq!(
            split_legacy_direction("LOW"),
            ("Center".to_string(), "Low".to_string())
        );
        assert_eq!(
            split_legacy_direction("sideways"),
            ("Center".to_string(), "Center".to_string())
        );
        assert_eq!(
            split_legacy_direction("low-left"),
            ("Left".to_string(), "Low".to_string())
        );
        assert_eq!(
            split_legacy_direction("High-Center"),
            ("Center".to_string(), "High".to_string())
        );
        assert_eq!(
            split_legacy_direction("Center-Left"),
            ("Left".to_string(), "Center".to_string())
        );
        assert_eq!(
            split_legacy_direction("right-sideways"),
            ("Right".to_string(), "Center".to_string())
        );
    }

    #[test]
    fn migrates_v1_to_latest() {
        let latest = VersionedShot::V1(v1("right")).into_latest();
        assert_eq!(latest.lateral_direction, "Right");
        assert_eq!(latest.inclination, "Center");
        assert_eq!(latest.direction, "right");
        assert!((latest.total - 230.0).abs() < f64::EPSILON);
        assert_eq!(latest.mode, "driving_range");
        assert_eq!(latest.hole_number, 0);

        let shot = latest.into_new_shot().expect("valid after migration");
        assert_eq!(shot.club, Club::Driver);
        assert_eq!(shot.actual, ShotShape::Slice);
        assert_eq!(shot.lateral_direction, LateralDirection::Right);
        assert_eq!(shot.timestamp, Some(1_650_000_000_000));
        assert_eq!(shot.context.mode(), Mode::DrivingRange);
    }

    #[test]
    fn rejects_unknown_club_text() {
        let mut legacy = v1("left");
        legacy.club = "hybrid".to_string();
        let err = VersionedShot::V1(legacy)
            .into_latest()
            .into_new_shot()
            .unwrap_err();
        match err {
            SchemaError::UnknownOption(option) => {
                assert_eq!(option.field, Field::Club);
                assert_eq!(option.value, "hybrid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn flattens_course_shot() {
        let shot = NewShot {
            context: ShotContext::GolfCourse(CourseDetails {
                hole_number: 12,
                par: 3,
                score: 2,
                pin_position: PinPosition::Front,
                green_speed: GreenSpeed::Slow,
            }),
            timestamp: Some(5),
            ..NewShot::default()
        };
        let row = ShotV4::from_new_shot(&shot);
        assert_eq!(row.mode, "golf_course");
        assert_eq!(row.hole_number, 12);
        assert_eq!(row.pin_position, "Front");
        assert_eq!(row.direction, "Center-Center");
        assert_eq!(row.into_new_shot().expect("valid"), shot);
    }

    #[test]
    fn rejects_out_of_range_hole() {
        let mut row = ShotV4::from_new_shot(&NewShot::default());
        row.mode = "golf_course".to_string();
        row.hole_number = 300;
        assert!(matches!(
            row.into_new_shot(),
            Err(SchemaError::OutOfRange {
                field: "hole_number",
                value: 300
            })
        ));
    }

    #[test]
    fn reads_tagged_json() {
        let json = r#"{"schema_version":"1","club":"7 iron","direction":"high","expectation":"Draw","actual":"Draw","distance":150.0,"timestamp":10}"#;
        let entry: VersionedShot = serde_json::from_str(json).expect("parse");
        assert_eq!(entry.version(), 1);
        let shot = entry.into_latest().into_new_shot().expect("valid");
        assert_eq!(shot.club, Club::SevenIron);
        assert_eq!(shot.inclination, Inclination::High);
    }
}

//! Shot entry form
//!
//! [`ShotForm`] holds what the user typed or picked, numbers still as text.
//! [`handle_save`] validates it into a [`NewShot`] without touching the form,
//! so a rejected or failed save can be retried from the same input.

use crate::core::models::{
    Club, CourseDetails, DistanceUnit, GreenSpeed, Inclination, LateralDirection, Lie, Mode,
    NewShot, PinPosition, PracticeType, RangeDetails, ShotContext, ShotRecord, ShotShape, Wind,
};
use crate::core::store::{ShotStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Valid hole numbers
pub const HOLE_RANGE: RangeInclusive<i64> = 1..=18;
/// Valid par values
pub const PAR_RANGE: RangeInclusive<i64> = 3..=5;
/// Valid hole scores
pub const SCORE_RANGE: RangeInclusive<i64> = 1..=20;

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Text that is not a finite, non-negative number
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber {
        /// Form field
        field: &'static str,
        /// Text entered
        value: String,
    },

    /// A whole number outside the allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Form field
        field: &'static str,
        /// Parsed value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
}

/// Failure of [`save_shot`]
#[derive(Debug, Error)]
pub enum SaveError {
    /// The form did not validate; nothing was written
    #[error(transparent)]
    Form(#[from] FormError),
    /// The store rejected the write
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State of the record form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotForm {
    /// Club
    pub club: Club,
    /// Horizontal direction
    pub lateral_direction: LateralDirection,
    /// Vertical direction
    pub inclination: Inclination,
    /// Intended shape
    pub expectation: ShotShape,
    /// Observed shape
    pub actual: ShotShape,
    /// Total distance as typed
    pub distance: String,
    /// Unit of `distance`
    pub distance_unit: DistanceUnit,
    /// Carry distance as typed
    pub carry: String,
    /// Unit of `carry`
    pub carry_unit: DistanceUnit,
    /// Lie
    pub lie: Lie,
    /// Wind
    pub wind: Wind,
    /// Notes
    pub notes: String,
    /// Range or course
    pub mode: Mode,
    /// Hole number as typed
    pub hole_number: String,
    /// Par as typed
    pub par: String,
    /// Score as typed
    pub score: String,
    /// Pin placement
    pub pin_position: PinPosition,
    /// Green speed
    pub green_speed: GreenSpeed,
    /// Kind of range practice
    pub practice_type: PracticeType,
    /// Target distance as typed
    pub target_distance: String,
    /// Unit of `target_distance`
    pub target_unit: DistanceUnit,
}

impl Default for ShotForm {
    fn default() -> Self {
        Self {
            club: Club::Driver,
            lateral_direction: LateralDirection::Center,
            inclination: Inclination::Center,
            expectation: ShotShape::Straight,
            actual: ShotShape::Straight,
            distance: String::new(),
            distance_unit: DistanceUnit::Yards,
            carry: String::new(),
            carry_unit: DistanceUnit::Yards,
            lie: Lie::Fairway,
            wind: Wind::None,
            notes: String::new(),
            mode: Mode::DrivingRange,
            hole_number: "1".to_string(),
            par: "4".to_string(),
            score: "4".to_string(),
            pin_position: PinPosition::Middle,
            green_speed: GreenSpeed::Medium,
            practice_type: PracticeType::FreePractice,
            target_distance: String::new(),
            target_unit: DistanceUnit::Yards,
        }
    }
}

impl ShotForm {
    /// Empty form in the given mode and unit
    #[must_use]
    pub fn with_preferences(mode: Mode, unit: DistanceUnit) -> Self {
        Self {
            mode,
            distance_unit: unit,
            carry_unit: unit,
            target_unit: unit,
            ..Self::default()
        }
    }

    /// Back to the initial values after a successful save.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Keep the form on disk as JSON so a failed save can be retried later.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written
    pub fn save_draft(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Read a draft written by [`save_draft`](Self::save_draft).
    ///
    /// # Errors
    /// Returns an error if the file is missing or not a valid draft
    pub fn load_draft(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Parse a distance field. Empty text counts as 0.
fn parse_distance(field: &'static str, text: &str) -> Result<f64, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FormError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}

/// Parse a whole-number course field and check its range.
fn parse_course_number(
    field: &'static str,
    text: &str,
    range: &RangeInclusive<i64>,
) -> Result<u8, FormError> {
    let trimmed = text.trim();
    let value = if trimmed.is_empty() {
        0
    } else {
        trimmed
            .parse::<i64>()
            .map_err(|_| FormError::InvalidNumber {
                field,
                value: text.to_string(),
            })?
    };

    let out_of_range = || FormError::OutOfRange {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    };
    if !range.contains(&value) {
        return Err(out_of_range());
    }
    u8::try_from(value).map_err(|_| out_of_range())
}

/// Validate the form into a shot ready for the store.
///
/// Distances are converted to yards once, here. The returned shot has no
/// timestamp; the store assigns it on create.
///
/// # Errors
/// Returns [`FormError::InvalidNumber`] for unparseable, negative or
/// non-finite numbers and [`FormError::OutOfRange`] for course numbers
/// outside their range.
pub fn handle_save(form: &ShotForm) -> Result<NewShot, FormError> {
    let distance = form
        .distance_unit
        .to_yards(parse_distance("distance", &form.distance)?);
    let carry = form
        .carry_unit
        .to_yards(parse_distance("carry", &form.carry)?);

    let context = match form.mode {
        Mode::DrivingRange => ShotContext::DrivingRange(RangeDetails {
            practice_type: form.practice_type,
            target_distance: form
                .target_unit
                .to_yards(parse_distance("target distance", &form.target_distance)?),
        }),
        Mode::GolfCourse => ShotContext::GolfCourse(CourseDetails {
            hole_number: parse_course_number("hole number", &form.hole_number, &HOLE_RANGE)?,
            par: parse_course_number("par", &form.par, &PAR_RANGE)?,
            score: parse_course_number("score", &form.score, &SCORE_RANGE)?,
            pin_position: form.pin_position,
            green_speed: form.green_speed,
        }),
    };

    Ok(NewShot {
        club: form.club,
        lateral_direction: form.lateral_direction,
        inclination: form.inclination,
        expectation: form.expectation,
        actual: form.actual,
        distance,
        carry,
        lie: form.lie,
        wind: form.wind,
        notes: form.notes.trim().to_string(),
        timestamp: None,
        context,
    })
}

/// Validate `form` and write the shot to `store`.
///
/// # Errors
/// Returns [`SaveError::Form`] when validation fails (nothing is written) and
/// [`SaveError::Store`] when the write fails.
pub fn save_shot<S: ShotStore + ?Sized>(
    store: &mut S,
    form: &ShotForm,
) -> Result<ShotRecord, SaveError> {
    let shot = handle_save(form)?;
    Ok(store.create(shot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::METERS_TO_YARDS;
    use crate::core::store::{FixedClock, MemoryStore};

    #[test]
    fn test_defaults_match_record_screen() {
        let form = ShotForm::default();
        assert_eq!(form.club, Club::Driver);
        assert_eq!(form.lateral_direction, LateralDirection::Center);
        assert_eq!(form.distance_unit, DistanceUnit::Yards);
        assert_eq!(form.lie, Lie::Fairway);
        assert_eq!(form.wind, Wind::None);
        assert_eq!(form.mode, Mode::DrivingRange);
        assert!(form.distance.is_empty());
    }

    #[test]
    fn test_empty_numbers_are_zero() {
        let shot = handle_save(&ShotForm::default()).expect("valid");
        assert!(shot.distance.abs() < f64::EPSILON);
        assert!(shot.carry.abs() < f64::EPSILON);
        assert!(shot.timestamp.is_none());
    }

    #[test]
    fn test_converts_meters_once() {
        let form = ShotForm {
            distance: "150".to_string(),
            distance_unit: DistanceUnit::Meters,
            carry: "140".to_string(),
            ..ShotForm::default()
        };
        let shot = handle_save(&form).expect("valid");
        assert!((shot.distance - 150.0 * METERS_TO_YARDS).abs() < 1e-9);
        assert!((shot.carry - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        for text in ["abc", "-5", "inf", "NaN", "12yards"] {
            let form = ShotForm {
                distance: text.to_string(),
                ..ShotForm::default()
            };
            assert_eq!(
                handle_save(&form),
                Err(FormError::InvalidNumber {
                    field: "distance",
                    value: text.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_course_ranges() {
        let mut form = ShotForm {
            mode: Mode::GolfCourse,
            ..ShotForm::default()
        };
        assert!(handle_save(&form).is_ok());

        form.hole_number = "19".to_string();
        assert!(matches!(
            handle_save(&form),
            Err(FormError::OutOfRange {
                field: "hole number",
                value: 19,
                ..
            })
        ));

        form.hole_number = "18".to_string();
        form.par = "6".to_string();
        assert!(matches!(
            handle_save(&form),
            Err(FormError::OutOfRange { field: "par", .. })
        ));

        form.par = "3".to_string();
        form.score = String::new();
        assert!(matches!(
            handle_save(&form),
            Err(FormError::OutOfRange {
                field: "score",
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_range_fields_ignored_on_course() {
        let form = ShotForm {
            mode: Mode::GolfCourse,
            target_distance: "not a number".to_string(),
            ..ShotForm::default()
        };
        let shot = handle_save(&form).expect("range text is not read on course");
        assert_eq!(shot.context.mode(), Mode::GolfCourse);
    }

    #[test]
    fn test_save_and_reset() {
        let mut store = MemoryStore::new().with_clock(FixedClock(500));
        let mut form = ShotForm {
            club: Club::NineIron,
            distance: "130".to_string(),
            ..ShotForm::default()
        };
        let record = save_shot(&mut store, &form).expect("save");
        assert_eq!(record.timestamp, 500);
        assert_eq!(record.club, Club::NineIron);

        form.reset();
        assert_eq!(form, ShotForm::default());
    }

    #[test]
    fn test_draft_keeps_every_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("drafts").join("draft.json");
        let form = ShotForm {
            club: Club::SandWedge,
            distance: "abc".to_string(),
            mode: Mode::GolfCourse,
            hole_number: "17".to_string(),
            ..ShotForm::default()
        };
        form.save_draft(&path).expect("save draft");
        assert_eq!(ShotForm::load_draft(&path).expect("load draft"), form);
    }

    #[test]
    fn test_failed_write_leaves_form_intact() {
        let mut store = MemoryStore::new().read_only();
        let form = ShotForm {
            distance: "210".to_string(),
            notes: "into the wind".to_string(),
            ..ShotForm::default()
        };
        let before = form.clone();
        assert!(matches!(
            save_shot(&mut store, &form),
            Err(SaveError::Store(_))
        ));
        assert_eq!(form, before);
    }
}

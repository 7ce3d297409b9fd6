//! Data models for `shotlog`

pub mod options;
pub mod schema;
pub mod shot;

pub use options::{
    Club, DistanceUnit, Field, GreenSpeed, Inclination, LateralDirection, Lie, Mode, PinPosition,
    PracticeType, ShotShape, UnknownOption, Wind, METERS_TO_YARDS,
};
pub use schema::{SchemaError, ShotV1, ShotV3, ShotV4, VersionedShot, SCHEMA_VERSION};
pub use shot::{CourseDetails, NewShot, RangeDetails, ShotContext, ShotRecord};

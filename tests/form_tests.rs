//! Integration tests for recording shots through the entry form

use shotlog::core::form::{save_shot, FormError, SaveError, ShotForm};
use shotlog::core::models::{Club, DistanceUnit, Mode, PinPosition, ShotShape};
use shotlog::core::store::{MemoryStore, ShotQuery, ShotStore, SqliteStore};
use tempfile::TempDir;

#[test]
fn test_course_shot_is_recorded() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = SqliteStore::open(&dir.path().join("shots.db")).expect("open");

    let mut form = ShotForm::with_preferences(Mode::GolfCourse, DistanceUnit::Yards);
    form.club = Club::EightIron;
    form.distance = " 145.5 ".to_string();
    form.carry = "140".to_string();
    form.expectation = ShotShape::Fade;
    form.actual = ShotShape::Fade;
    form.hole_number = "12".to_string();
    form.par = "3".to_string();
    form.score = "2".to_string();
    form.pin_position = PinPosition::Back;
    form.notes = "  pure  ".to_string();

    let record = save_shot(&mut store, &form).expect("save");
    assert_eq!(record.id, 1);
    assert!(record.is_accurate());
    assert_eq!(record.notes, "pure");

    let course = record.context.course().expect("course details");
    assert_eq!((course.hole_number, course.par, course.score), (12, 3, 2));
    assert_eq!(course.pin_position, PinPosition::Back);

    let stored = store.fetch_all(&ShotQuery::all()).expect("fetch");
    assert_eq!(stored, vec![record]);
}

#[test]
fn test_invalid_input_writes_nothing() {
    let mut store = MemoryStore::new();
    let form = ShotForm {
        carry: "-3".to_string(),
        ..ShotForm::default()
    };

    let err = save_shot(&mut store, &form).unwrap_err();
    assert!(matches!(
        err,
        SaveError::Form(FormError::InvalidNumber { field: "carry", .. })
    ));
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn test_failed_write_keeps_input_for_retry() {
    let dir = TempDir::new().expect("temp dir");
    let draft = dir.path().join("shots.draft.json");
    let form = ShotForm {
        club: Club::ThreeWood,
        distance: "210".to_string(),
        distance_unit: DistanceUnit::Meters,
        ..ShotForm::with_preferences(Mode::DrivingRange, DistanceUnit::Meters)
    };

    let mut broken = MemoryStore::new().read_only();
    let err = save_shot(&mut broken, &form).unwrap_err();
    assert!(matches!(err, SaveError::Store(_)));
    form.save_draft(&draft).expect("keep draft");

    let resumed = ShotForm::load_draft(&draft).expect("load draft");
    assert_eq!(resumed, form);

    let mut store = MemoryStore::new();
    let record = save_shot(&mut store, &resumed).expect("retry");
    assert_eq!(record.club, Club::ThreeWood);
    assert!(record.distance > 210.0);
}

#[test]
fn test_missing_draft_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    assert!(ShotForm::load_draft(&dir.path().join("none.json")).is_err());
}

//! Integration tests for export and import

use shotlog::core::export::{import_json_file, ExportError, ExportFormat, CSV_COLUMNS};
use shotlog::core::models::{Club, Inclination, LateralDirection, Mode, NewShot, ShotShape};
use shotlog::core::store::{MemoryStore, ShotQuery, ShotStore, SortOrder, SqliteStore};
use std::fs;
use tempfile::TempDir;

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for (club, distance, timestamp) in [
        (Club::Driver, 245.0, 3_000),
        (Club::SevenIron, 152.25, 1_000),
    ] {
        store
            .create(NewShot {
                club,
                distance,
                timestamp: Some(timestamp),
                ..NewShot::default()
            })
            .expect("create");
    }
    store
}

#[test]
fn test_csv_export_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("exports").join("shots.csv");
    let records = seeded_store()
        .fetch_all(&ShotQuery::all().sorted(SortOrder::Ascending))
        .expect("fetch");

    ExportFormat::Csv
        .exporter()
        .export(&records, &path)
        .expect("export");

    let text = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), CSV_COLUMNS.len());
    assert!(lines[1].starts_with("2,7 Iron,"));
    assert!(lines[1].contains(",152.25,"));
    assert!(lines[2].starts_with("1,Driver,"));
    assert!(lines[2].contains(",driving_range,"));
}

#[test]
fn test_json_backup_restores_into_sqlite() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("backup.json");
    let source = seeded_store();
    let records = source.fetch_all(&ShotQuery::all()).expect("fetch");

    ExportFormat::Json
        .exporter()
        .export(&records, &path)
        .expect("export");

    let mut target = SqliteStore::open_in_memory().expect("open");
    let summary = import_json_file(&mut target, &path).expect("import");
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.migrated, 0);

    let restored = target.fetch_all(&ShotQuery::all()).expect("fetch");
    let clubs: Vec<Club> = restored.iter().map(|r| r.club).collect();
    assert_eq!(clubs, vec![Club::Driver, Club::SevenIron]);
    assert_eq!(restored[0].timestamp, 3_000);
    assert!((restored[1].distance - 152.25).abs() < f64::EPSILON);
}

#[test]
fn test_import_mixed_schema_versions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[
  {"schema_version": "1", "club": "driver", "direction": "right",
   "expectation": "Fade", "actual": "Slice", "distance": 231.0, "timestamp": 100},
  {"schema_version": "3", "club": "5 Iron", "direction": "Left-Low",
   "lateral_direction": "Left", "inclination": "Low", "expectation": "Draw",
   "actual": "Draw", "distance": 170.0, "carry": 160.0, "total": 170.0,
   "lie": "Rough", "wind": "Light Head", "notes": "into the wind", "timestamp": 200},
  {"schema_version": "4", "club": "PW", "direction": "Center-Center",
   "lateral_direction": "Center", "inclination": "Center", "expectation": "Straight",
   "actual": "Straight", "distance": 105.0, "carry": 100.0, "total": 105.0,
   "lie": "Fairway", "wind": "None", "notes": "", "timestamp": 300,
   "mode": "golf_course", "hole_number": 4, "par": 4, "score": 3,
   "pin_position": "Front", "green_speed": "Fast"}
]"#,
    )
    .expect("write backup");

    let mut store = SqliteStore::open_in_memory().expect("open");
    let summary = import_json_file(&mut store, &path).expect("import");
    assert_eq!(summary.imported, 3);
    assert_eq!(summary.migrated, 2);

    let records = store.fetch_all(&ShotQuery::all()).expect("fetch");
    assert_eq!(records[0].club, Club::Driver);
    assert_eq!(records[0].lateral_direction, LateralDirection::Right);
    assert_eq!(records[0].actual, ShotShape::Slice);
    assert_eq!(records[0].mode(), Mode::DrivingRange);

    assert_eq!(records[1].inclination, Inclination::Low);
    assert_eq!(records[1].notes, "into the wind");

    assert_eq!(records[2].mode(), Mode::GolfCourse);
    let course = records[2].context.course().expect("course");
    assert_eq!(course.score, 3);
}

#[test]
fn test_import_rejects_bad_file_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write");

    let mut store = MemoryStore::new();
    let err = import_json_file(&mut store, &path).unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
    assert_eq!(store.count().expect("count"), 0);

    let missing = import_json_file(&mut store, &dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, ExportError::Io(_)));
}

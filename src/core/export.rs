//! Export shots to CSV or JSON and import JSON backups

use crate::core::models::{SchemaError, ShotRecord, ShotV4, VersionedShot, SCHEMA_VERSION};
use crate::core::store::{ShotStore, StoreError};
use crate::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while exporting or importing shots
#[derive(Debug, Error)]
pub enum ExportError {
    /// Reading or writing the file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backup is not valid JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry of the backup does not describe a valid shot
    #[error("entry {index}: {source}")]
    Entry {
        /// Position of the entry in the backup, starting at 0
        index: usize,
        /// Why it was rejected
        source: SchemaError,
    },

    /// The store rejected an imported shot
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Output formats for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma separated values, one row per shot
    #[default]
    Csv,
    /// JSON list of versioned shots, readable by `import`
    Json,
}

impl ExportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Exporter writing this format
    #[must_use]
    pub fn exporter(self) -> Box<dyn ShotExporter> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter { pretty: true }),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Writes a set of shots in one format
pub trait ShotExporter {
    /// Write `records` to `out`
    ///
    /// # Errors
    /// Returns an error if writing fails
    fn write(&self, records: &[ShotRecord], out: &mut dyn Write) -> Result<(), ExportError>;

    /// Write `records` to a new file at `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written
    fn export(&self, records: &[ShotRecord], path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut out = BufWriter::new(File::create(path)?);
        self.write(records, &mut out)?;
        out.flush()?;
        info!("Exported {} shots to {}", records.len(), path.display());
        Ok(())
    }
}

/// CSV columns, in the order of the persisted schema
pub const CSV_COLUMNS: &[&str] = &[
    "id",
    "club",
    "direction",
    "lateral_direction",
    "inclination",
    "expectation",
    "actual",
    "distance",
    "carry",
    "total",
    "lie",
    "wind",
    "notes",
    "timestamp",
    "mode",
    "hole_number",
    "par",
    "score",
    "pin_position",
    "green_speed",
    "practice_type",
    "target_distance",
];

/// CSV exporter
pub struct CsvExporter;

/// Quote a CSV field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl ShotExporter for CsvExporter {
    fn write(&self, records: &[ShotRecord], out: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(out, "{}", CSV_COLUMNS.join(","))?;

        for record in records {
            let row = ShotV4::from_record(record);
            writeln!(
                out,
                "{},{},{},{},{},{},{},{:.2},{:.2},{:.2},{},{},{},{},{},{},{},{},{},{},{},{:.2}",
                record.id,
                csv_field(&row.club),
                csv_field(&row.direction),
                row.lateral_direction,
                row.inclination,
                row.expectation,
                row.actual,
                row.distance,
                row.carry,
                row.total,
                csv_field(&row.lie),
                csv_field(&row.wind),
                csv_field(&row.notes),
                row.timestamp,
                row.mode,
                row.hole_number,
                row.par,
                row.score,
                row.pin_position,
                row.green_speed,
                csv_field(&row.practice_type),
                row.target_distance,
            )?;
        }
        Ok(())
    }
}

/// JSON exporter writing the latest versioned schema
pub struct JsonExporter {
    /// Indent the output
    pub pretty: bool,
}

impl ShotExporter for JsonExporter {
    fn write(&self, records: &[ShotRecord], out: &mut dyn Write) -> Result<(), ExportError> {
        let entries: Vec<VersionedShot> = records
            .iter()
            .map(|record| VersionedShot::V4(ShotV4::from_record(record)))
            .collect();
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
        } else {
            serde_json::to_writer(&mut *out, &entries)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Shots written to the store
    pub imported: usize,
    /// Of those, how many came from an older schema version
    pub migrated: usize,
}

/// Import a JSON backup holding any mix of schema versions.
///
/// Every entry is migrated and validated before anything is written, so a
/// bad entry aborts the import without a partial write. Imported shots keep
/// their original timestamps.
///
/// # Errors
/// Returns an error if the JSON is malformed, an entry is invalid, or the
/// store rejects a write
pub fn import_json<S: ShotStore + ?Sized>(
    store: &mut S,
    reader: impl Read,
) -> Result<ImportSummary, ExportError> {
    let entries: Vec<VersionedShot> = serde_json::from_reader(reader)?;

    let mut summary = ImportSummary::default();
    let mut shots = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if entry.version() < SCHEMA_VERSION {
            summary.migrated += 1;
        }
        let shot = entry
            .into_latest()
            .into_new_shot()
            .map_err(|source| ExportError::Entry { index, source })?;
        shots.push(shot);
    }

    summary.imported = store.create_all(shots)?.len();
    debug!(
        "Imported {} shots ({} migrated)",
        summary.imported, summary.migrated
    );
    Ok(summary)
}

/// [`import_json`] from a file.
///
/// # Errors
/// Returns an error if the file cannot be opened or the import fails
pub fn import_json_file<S: ShotStore + ?Sized>(
    store: &mut S,
    path: &Path,
) -> Result<ImportSummary, ExportError> {
    let file = File::open(path)?;
    import_json(store, BufReader::new(file))
}

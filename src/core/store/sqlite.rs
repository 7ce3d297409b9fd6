//! `SQLite` shot store

use super::{Clock, ShotQuery, ShotStore, SortOrder, StoreError, SystemClock};
use crate::core::models::schema::{split_legacy_direction, ShotV4, SCHEMA_VERSION};
use crate::core::models::{NewShot, ShotRecord};
use crate::{debug, info};
use rusqlite::{params, params_from_iter, Connection, Row};
use std::path::Path;

const CREATE_V1: &str = "
CREATE TABLE IF NOT EXISTS shots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    club TEXT NOT NULL,
    direction TEXT NOT NULL,
    expectation TEXT NOT NULL,
    actual TEXT NOT NULL,
    distance REAL NOT NULL,
    timestamp INTEGER NOT NULL
);";

const ADD_V3_COLUMNS: &str = "
ALTER TABLE shots ADD COLUMN lateral_direction TEXT NOT NULL DEFAULT 'Center';
ALTER TABLE shots ADD COLUMN inclination TEXT NOT NULL DEFAULT 'Center';
ALTER TABLE shots ADD COLUMN carry REAL NOT NULL DEFAULT 0;
ALTER TABLE shots ADD COLUMN total REAL NOT NULL DEFAULT 0;
ALTER TABLE shots ADD COLUMN lie TEXT NOT NULL DEFAULT 'Fairway';
ALTER TABLE shots ADD COLUMN wind TEXT NOT NULL DEFAULT 'None';
ALTER TABLE shots ADD COLUMN notes TEXT NOT NULL DEFAULT '';
UPDATE shots SET total = distance;";

const ADD_V4_COLUMNS: &str = "
ALTER TABLE shots ADD COLUMN mode TEXT NOT NULL DEFAULT 'driving_range';
ALTER TABLE shots ADD COLUMN hole_number INTEGER NOT NULL DEFAULT 0;
ALTER TABLE shots ADD COLUMN par INTEGER NOT NULL DEFAULT 0;
ALTER TABLE shots ADD COLUMN score INTEGER NOT NULL DEFAULT 0;
ALTER TABLE shots ADD COLUMN pin_position TEXT NOT NULL DEFAULT '';
ALTER TABLE shots ADD COLUMN green_speed TEXT NOT NULL DEFAULT '';
ALTER TABLE shots ADD COLUMN practice_type TEXT NOT NULL DEFAULT 'Free Practice';
ALTER TABLE shots ADD COLUMN target_distance REAL NOT NULL DEFAULT 0;
CREATE INDEX IF NOT EXISTS shots_timestamp ON shots (timestamp);";

const SELECT_COLUMNS: &str = "id, club, direction, lateral_direction, inclination, expectation, \
     actual, distance, carry, total, lie, wind, notes, timestamp, mode, hole_number, par, score, \
     pin_position, green_speed, practice_type, target_distance";

/// Shot store backed by a `SQLite` database
pub struct SqliteStore {
    conn: Connection,
    clock: Box<dyn Clock>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and bring its schema up to date.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be opened, or a migration fails
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        debug!("Opened shot database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Open a fresh in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, migrating its schema.
    ///
    /// # Errors
    /// Returns an error if a migration fails
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        migrate(&conn)?;
        Ok(Self {
            conn,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used to timestamp new shots.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Schema version recorded in the database
    ///
    /// # Errors
    /// Returns an error if the pragma cannot be read
    pub fn schema_version(&self) -> Result<u32, StoreError> {
        Ok(user_version(&self.conn)?)
    }

    /// Access the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn user_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'shots'",
        [],
        |row| row.get::<_, i64>(0),
    )
    .map(|count| count > 0)
}

/// Bring the database up to [`SCHEMA_VERSION`], one additive step per bump.
fn migrate(conn: &Connection) -> Result<(), StoreError> {
    let mut version = user_version(conn)?;
    if version == 0 && table_exists(conn)? {
        // Tables written before versions were tracked are v1.
        version = 1;
    }

    if version < 1 {
        conn.execute_batch(CREATE_V1)?;
        version = 1;
    }
    if version < 3 {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(ADD_V3_COLUMNS)?;
        backfill_split_directions(&tx)?;
        tx.pragma_update(None, "user_version", 3)?;
        tx.commit()?;
        info!("Migrated shot database to schema v3");
        version = 3;
    }
    if version < SCHEMA_VERSION {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(ADD_V4_COLUMNS)?;
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        tx.commit()?;
        info!("Migrated shot database to schema v{SCHEMA_VERSION}");
    }
    Ok(())
}

/// Fill the v3 direction columns from the legacy combined column.
fn backfill_split_directions(conn: &Connection) -> rusqlite::Result<()> {
    let legacy: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, direction FROM shots")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    let mut update =
        conn.prepare("UPDATE shots SET lateral_direction = ?1, inclination = ?2 WHERE id = ?3")?;
    for (id, direction) in legacy {
        let (lateral, inclination) = split_legacy_direction(&direction);
        update.execute(params![lateral, inclination, id])?;
    }
    Ok(())
}

fn row_to_v4(row: &Row<'_>) -> rusqlite::Result<(i64, ShotV4)> {
    Ok((
        row.get("id")?,
        ShotV4 {
            club: row.get("club")?,
            direction: row.get("direction")?,
            lateral_direction: row.get("lateral_direction")?,
            inclination: row.get("inclination")?,
            expectation: row.get("expectation")?,
            actual: row.get("actual")?,
            distance: row.get("distance")?,
            carry: row.get("carry")?,
            total: row.get("total")?,
            lie: row.get("lie")?,
            wind: row.get("wind")?,
            notes: row.get("notes")?,
            timestamp: row.get("timestamp")?,
            mode: row.get("mode")?,
            hole_number: row.get("hole_number")?,
            par: row.get("par")?,
            score: row.get("score")?,
            pin_position: row.get("pin_position")?,
            green_speed: row.get("green_speed")?,
            practice_type: row.get("practice_type")?,
            target_distance: row.get("target_distance")?,
        },
    ))
}

fn build_select(query: &ShotQuery) -> (String, Vec<String>) {
    let mut sql = format!("SELECT {SELECT_COLUMNS} FROM shots");
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(mode) = query.mode {
        values.push(mode.to_string());
        clauses.push(format!("mode = ?{}", values.len()));
    }
    if let Some(club) = query.club {
        values.push(club.to_string());
        clauses.push(format!("club = ?{}", values.len()));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(match query.sort {
        None => " ORDER BY id",
        Some(SortOrder::Ascending) => " ORDER BY timestamp ASC, id ASC",
        Some(SortOrder::Descending) => " ORDER BY timestamp DESC, id DESC",
    });

    if let Some(limit) = query.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    (sql, values)
}

/// Insert one shot whose timestamp is already set and return its id.
fn insert_shot(conn: &Connection, shot: &NewShot) -> rusqlite::Result<i64> {
    let row = ShotV4::from_new_shot(shot);
    conn.execute(
        "INSERT INTO shots (club, direction, lateral_direction, inclination, expectation, \
         actual, distance, carry, total, lie, wind, notes, timestamp, mode, hole_number, par, \
         score, pin_position, green_speed, practice_type, target_distance) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, \
         ?18, ?19, ?20, ?21)",
        params![
            row.club,
            row.direction,
            row.lateral_direction,
            row.inclination,
            row.expectation,
            row.actual,
            row.distance,
            row.carry,
            row.total,
            row.lie,
            row.wind,
            row.notes,
            row.timestamp,
            row.mode,
            row.hole_number,
            row.par,
            row.score,
            row.pin_position,
            row.green_speed,
            row.practice_type,
            row.target_distance,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

impl ShotStore for SqliteStore {
    fn fetch_all(&self, query: &ShotQuery) -> Result<Vec<ShotRecord>, StoreError> {
        let (sql, values) = build_select(query);
        debug!("Shot query: {sql}");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), row_to_v4)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, row)| {
                let timestamp = row.timestamp;
                let shot = row.into_new_shot()?;
                Ok(ShotRecord::from_new(id, timestamp, shot))
            })
            .collect()
    }

    fn create(&mut self, mut shot: NewShot) -> Result<ShotRecord, StoreError> {
        let timestamp = *shot.timestamp.get_or_insert_with(|| self.clock.now_millis());
        let id = insert_shot(&self.conn, &shot)?;
        debug!("Stored shot {id} ({}, {:.1} yd)", shot.club, shot.distance);
        Ok(ShotRecord::from_new(id, timestamp, shot))
    }

    fn create_all(&mut self, shots: Vec<NewShot>) -> Result<Vec<ShotRecord>, StoreError> {
        let tx = self.conn.transaction()?;
        let mut records = Vec::with_capacity(shots.len());
        for mut shot in shots {
            let timestamp = *shot.timestamp.get_or_insert_with(|| self.clock.now_millis());
            let id = insert_shot(&tx, &shot)?;
            records.push(ShotRecord::from_new(id, timestamp, shot));
        }
        tx.commit()?;
        debug!("Stored {} shots in one transaction", records.len());
        Ok(records)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM shots", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

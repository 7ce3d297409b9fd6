//! Record store for shots
//!
//! [`ShotStore`] is the only interface the rest of the crate uses to read and
//! write shots. Two implementations are provided: [`SqliteStore`] for the
//! on-disk database and [`MemoryStore`] for tests and throwaway sessions.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::core::models::{Club, Field, Mode, NewShot, SchemaError, ShotRecord};
use thiserror::Error;

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying `SQLite` failure
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored value is not a valid option for its column
    #[error("invalid {field} value in store: '{value}'")]
    InvalidColumn {
        /// Field the value belongs to
        field: Field,
        /// Stored value
        value: String,
    },

    /// Filesystem failure (creating the database directory)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored row could not be converted into a record
    #[error("schema error: {0}")]
    Schema(SchemaError),

    /// The store refuses the operation
    #[error("{0}")]
    Unavailable(String),
}

impl From<SchemaError> for StoreError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnknownOption(option) => Self::InvalidColumn {
                field: option.field,
                value: option.value,
            },
            other => Self::Schema(other),
        }
    }
}

/// Timestamp ordering for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Newest first
    Descending,
}

/// Filter, sort and limit options for [`ShotStore::fetch_all`]
///
/// The default query returns every shot in insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotQuery {
    /// Only shots recorded in this mode
    pub mode: Option<Mode>,
    /// Only shots hit with this club
    pub club: Option<Club>,
    /// Order by timestamp
    pub sort: Option<SortOrder>,
    /// Maximum number of shots returned
    pub limit: Option<usize>,
}

impl ShotQuery {
    /// Every shot, insertion order
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Newest `limit` shots
    #[must_use]
    pub const fn latest(limit: usize) -> Self {
        Self {
            mode: None,
            club: None,
            sort: Some(SortOrder::Descending),
            limit: Some(limit),
        }
    }

    /// Restrict to one mode
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Restrict to one club
    #[must_use]
    pub const fn with_club(mut self, club: Club) -> Self {
        self.club = Some(club);
        self
    }

    /// Sort by timestamp
    #[must_use]
    pub const fn sorted(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Cap the number of results
    #[must_use]
    pub const fn limited(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `record` passes the mode and club filters
    #[must_use]
    pub fn matches(&self, record: &ShotRecord) -> bool {
        self.mode.is_none_or(|mode| record.mode() == mode)
            && self.club.is_none_or(|club| record.club == club)
    }
}

/// Persistent collection of shot records
///
/// Records are append-only: there is no update or delete.
pub trait ShotStore {
    /// Fetch shots matching `query`
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or holds invalid rows
    fn fetch_all(&self, query: &ShotQuery) -> Result<Vec<ShotRecord>, StoreError>;

    /// Persist a new shot and return the stored record
    ///
    /// When `shot.timestamp` is `None` the store assigns the current time.
    ///
    /// # Errors
    /// Returns an error if the shot cannot be written
    fn create(&mut self, shot: NewShot) -> Result<ShotRecord, StoreError>;

    /// Persist a batch of shots, all or nothing.
    ///
    /// The default creates them one by one; stores that can roll back
    /// override it so a failure part way leaves nothing written.
    ///
    /// # Errors
    /// Returns the first write error
    fn create_all(&mut self, shots: Vec<NewShot>) -> Result<Vec<ShotRecord>, StoreError> {
        shots.into_iter().map(|shot| self.create(shot)).collect()
    }

    /// Number of stored shots
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn count(&self) -> Result<usize, StoreError>;
}

/// Source of the current time for stores
pub trait Clock {
    /// Current time in epoch milliseconds
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::UnknownOption;

    #[test]
    fn test_query_builders() {
        let query = ShotQuery::latest(10)
            .with_mode(Mode::GolfCourse)
            .with_club(Club::Putter);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.sort, Some(SortOrder::Descending));
        assert_eq!(query.mode, Some(Mode::GolfCourse));
        assert_eq!(query.club, Some(Club::Putter));
        assert_eq!(ShotQuery::all(), ShotQuery::default());
    }

    #[test]
    fn test_query_matches_filters() {
        let record = ShotRecord::from_new(1, 0, NewShot::default());
        assert!(ShotQuery::all().matches(&record));
        assert!(ShotQuery::all().with_club(Club::Driver).matches(&record));
        assert!(!ShotQuery::all().with_club(Club::Putter).matches(&record));
        assert!(!ShotQuery::all().with_mode(Mode::GolfCourse).matches(&record));
    }

    #[test]
    fn test_unknown_option_maps_to_invalid_column() {
        let err = StoreError::from(SchemaError::UnknownOption(UnknownOption {
            field: Field::Wind,
            value: "Gale".to_string(),
        }));
        assert_eq!(err.to_string(), "invalid Wind value in store: 'Gale'");
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(99).now_millis(), 99);
        assert!(SystemClock.now_millis() > 1_600_000_000_000);
    }
}

//! In-memory shot store

use super::{Clock, ShotQuery, ShotStore, SortOrder, StoreError, SystemClock};
use crate::core::models::{NewShot, ShotRecord};

/// Shot store that keeps records in a `Vec`
///
/// Ids start at 1 and increase with every insert, matching the database store.
pub struct MemoryStore {
    records: Vec<ShotRecord>,
    next_id: i64,
    clock: Box<dyn Clock>,
    read_only: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store using the wall clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            clock: Box::new(SystemClock),
            read_only: false,
        }
    }

    /// Replace the clock used to timestamp new shots.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Make every subsequent `create` fail with [`StoreError::Unavailable`].
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Seed the store with records built elsewhere. Ids continue after the
    /// highest one given.
    #[must_use]
    pub fn with_records(mut self, records: Vec<ShotRecord>) -> Self {
        self.next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.records = records;
        self
    }
}

impl ShotStore for MemoryStore {
    fn fetch_all(&self, query: &ShotQuery) -> Result<Vec<ShotRecord>, StoreError> {
        let mut found: Vec<ShotRecord> = self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();

        match query.sort {
            None => {}
            Some(SortOrder::Ascending) => found.sort_by_key(|r| (r.timestamp, r.id)),
            Some(SortOrder::Descending) => {
                found.sort_by_key(|r| std::cmp::Reverse((r.timestamp, r.id)));
            }
        }

        if let Some(limit) = query.limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    fn create(&mut self, shot: NewShot) -> Result<ShotRecord, StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable(
                "shot store is read-only".to_string(),
            ));
        }

        let timestamp = shot.timestamp.unwrap_or_else(|| self.clock.now_millis());
        let record = ShotRecord::from_new(self.next_id, timestamp, shot);
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Club;
    use crate::core::store::FixedClock;

    fn at(timestamp: i64, club: Club) -> NewShot {
        NewShot {
            club,
            timestamp: Some(timestamp),
            ..NewShot::default()
        }
    }

    #[test]
    fn test_ids_increase_from_one() {
        let mut store = MemoryStore::new().with_clock(FixedClock(7));
        let first = store.create(NewShot::default()).expect("create");
        let second = store.create(NewShot::default()).expect("create");
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.timestamp, 7);
        assert_eq!(store.count().expect("count"), 2);
    }

    #[test]
    fn test_latest_orders_newest_first() {
        let mut store = MemoryStore::new();
        store.create(at(30, Club::Driver)).expect("create");
        store.create(at(10, Club::Putter)).expect("create");
        store.create(at(20, Club::SevenIron)).expect("create");

        let latest = store.fetch_all(&ShotQuery::latest(2)).expect("fetch");
        let stamps: Vec<i64> = latest.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![30, 20]);

        let oldest = store
            .fetch_all(&ShotQuery::all().sorted(SortOrder::Ascending))
            .expect("fetch");
        assert_eq!(oldest[0].club, Club::Putter);
    }

    #[test]
    fn test_read_only_rejects_create() {
        let mut store = MemoryStore::new().read_only();
        assert!(matches!(
            store.create(NewShot::default()),
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(store.count().expect("count"), 0);
    }

    #[test]
    fn test_seeded_ids_continue() {
        let seeded = vec![ShotRecord::from_new(41, 0, NewShot::default())];
        let mut store = MemoryStore::new().with_records(seeded);
        let record = store.create(NewShot::default()).expect("create");
        assert_eq!(record.id, 42);
    }
}

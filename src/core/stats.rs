//! Shot statistics
//!
//! [`compute_statistics`] is a pure fold over the full record set. It never
//! fails: an empty slice yields zero averages and empty lists.

use crate::core::models::{Club, ShotRecord};
use crate::core::store::{ShotQuery, ShotStore, StoreError};
use crate::{debug, error};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

/// Number of sessions kept in [`Statistics::recent_sessions`]
pub const MAX_SESSIONS: usize = 5;

/// Number of clubs kept in [`Statistics::club_stats`]
pub const MAX_CLUBS: usize = 6;

/// Shots hit on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Local calendar day
    pub date: NaiveDate,
    /// Shots recorded that day
    pub shot_count: usize,
    /// Rounded mean distance in yards
    pub avg_distance: i64,
}

/// Figures for one club
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubStats {
    /// Club
    pub club: Club,
    /// Shots hit with the club
    pub shot_count: usize,
    /// Rounded mean distance in yards
    pub avg_distance: i64,
    /// Percentage of shots whose actual shape matched the expected one
    pub accuracy: u32,
}

/// Aggregate view over every recorded shot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of shots
    pub total_shots: usize,
    /// Rounded mean distance in yards
    pub avg_distance: i64,
    /// Percentage of accurate shots
    pub accuracy: u32,
    /// Latest days first
    pub recent_sessions: Vec<SessionStats>,
    /// Most used clubs first
    pub club_stats: Vec<ClubStats>,
}

impl Statistics {
    /// Whether there is nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_shots == 0
    }
}

/// Round half up, the way the statistics screen always displayed figures.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[allow(clippy::cast_precision_loss)]
fn average_distance(records: &[&ShotRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let sum: f64 = records.iter().map(|r| r.distance).sum();
    round_half_up(sum / records.len() as f64)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn accuracy_percent(records: &[&ShotRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let accurate = records.iter().filter(|r| r.is_accurate()).count();
    let percent = round_half_up(accurate as f64 * 100.0 / records.len() as f64) as u32;
    // 100% only when every shot matched
    if accurate < records.len() {
        percent.min(99)
    } else {
        percent
    }
}

/// Calendar day of an epoch-millisecond timestamp in `tz`.
///
/// Timestamps chrono cannot represent fall on 1970-01-01.
#[must_use]
pub fn local_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> NaiveDate {
    DateTime::from_timestamp_millis(timestamp)
        .map_or_else(NaiveDate::default, |utc| utc.with_timezone(tz).date_naive())
}

/// Group items by key, keeping groups in order of first appearance.
fn group_by<'a, K, F>(records: &[&'a ShotRecord], key: F) -> Vec<(K, Vec<&'a ShotRecord>)>
where
    K: Eq + std::hash::Hash + Clone,
    F: Fn(&ShotRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&ShotRecord>)> = Vec::new();

    for record in records {
        let k = key(record);
        if let Some(&slot) = index.get(&k) {
            groups[slot].1.push(*record);
        } else {
            index.insert(k.clone(), groups.len());
            groups.push((k, vec![*record]));
        }
    }
    groups
}

/// Compute statistics with sessions split on local calendar days.
#[must_use]
pub fn compute_statistics(records: &[ShotRecord]) -> Statistics {
    compute_statistics_in(records, &Local)
}

/// Compute statistics with sessions split on calendar days in `tz`.
#[must_use]
pub fn compute_statistics_in<Tz: TimeZone>(records: &[ShotRecord], tz: &Tz) -> Statistics {
    let all: Vec<&ShotRecord> = records.iter().collect();

    let mut recent_sessions: Vec<SessionStats> =
        group_by(&all, |r| local_date(r.timestamp, tz))
            .into_iter()
            .map(|(date, shots)| SessionStats {
                date,
                shot_count: shots.len(),
                avg_distance: average_distance(&shots),
            })
            .collect();
    recent_sessions.sort_by(|a, b| b.date.cmp(&a.date));
    recent_sessions.truncate(MAX_SESSIONS);

    let mut club_stats: Vec<ClubStats> = group_by(&all, |r| r.club)
        .into_iter()
        .map(|(club, shots)| ClubStats {
            club,
            shot_count: shots.len(),
            avg_distance: average_distance(&shots),
            accuracy: accuracy_percent(&shots),
        })
        .collect();
    club_stats.sort_by(|a, b| b.shot_count.cmp(&a.shot_count));
    club_stats.truncate(MAX_CLUBS);

    Statistics {
        total_shots: all.len(),
        avg_distance: average_distance(&all),
        accuracy: accuracy_percent(&all),
        recent_sessions,
        club_stats,
    }
}

/// Last successfully computed statistics
///
/// A failed refresh leaves the previous figures in place so callers always
/// have something valid to show.
#[derive(Debug, Clone, Default)]
pub struct StatsView {
    stats: Statistics,
    loaded: bool,
}

impl StatsView {
    /// Zeroed view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current statistics
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Whether any refresh has succeeded yet
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reload every record from `store` and recompute.
    ///
    /// # Errors
    /// Returns the store error after logging it; the previous statistics are kept.
    pub fn refresh<S: ShotStore + ?Sized>(&mut self, store: &S) -> Result<&Statistics, StoreError> {
        match store.fetch_all(&ShotQuery::all()) {
            Ok(records) => {
                debug!("Computing statistics over {} shots", records.len());
                self.stats = compute_statistics(&records);
                self.loaded = true;
                Ok(&self.stats)
            }
            Err(e) => {
                error!("Error loading statistics: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{NewShot, ShotShape};
    use crate::core::store::MemoryStore;
    use chrono::Utc;

    const DAY: i64 = 86_400_000;

    fn shot(id: i64, club: Club, distance: f64, accurate: bool, timestamp: i64) -> ShotRecord {
        ShotRecord::from_new(
            id,
            timestamp,
            NewShot {
                club,
                distance,
                expectation: ShotShape::Straight,
                actual: if accurate {
                    ShotShape::Straight
                } else {
                    ShotShape::Slice
                },
                ..NewShot::default()
            },
        )
    }

    struct BrokenStore;

    impl ShotStore for BrokenStore {
        fn fetch_all(&self, _query: &ShotQuery) -> Result<Vec<ShotRecord>, StoreError> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn create(&mut self, _shot: NewShot) -> Result<ShotRecord, StoreError> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn count(&self) -> Result<usize, StoreError> {
            Ok(0)
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        let stats = compute_statistics_in(&[], &Utc);
        assert_eq!(stats, Statistics::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_half_up(172.5), 173);
        assert_eq!(round_half_up(172.49), 172);
        assert_eq!(round_half_up(66.666), 67);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_three_shot_scenario() {
        let records = vec![
            shot(1, Club::Driver, 200.0, true, 0),
            shot(2, Club::Driver, 180.0, false, 1),
            shot(3, Club::SevenIron, 140.0, true, 2),
        ];
        let stats = compute_statistics_in(&records, &Utc);
        assert_eq!(stats.total_shots, 3);
        assert_eq!(stats.avg_distance, 173);
        assert_eq!(stats.accuracy, 67);

        assert_eq!(stats.club_stats.len(), 2);
        assert_eq!(stats.club_stats[0].club, Club::Driver);
        assert_eq!(stats.club_stats[0].shot_count, 2);
        assert_eq!(stats.club_stats[0].avg_distance, 190);
        assert_eq!(stats.club_stats[0].accuracy, 50);
        assert_eq!(stats.club_stats[1].club, Club::SevenIron);
        assert_eq!(stats.club_stats[1].accuracy, 100);
    }

    #[test]
    fn test_single_miss_never_reads_perfect() {
        let mut records: Vec<ShotRecord> = (1..=200)
            .map(|id| shot(id, Club::Driver, 230.0, true, 0))
            .collect();
        records.push(shot(201, Club::Putter, 4.0, true, 0));
        records[0] = shot(1, Club::Driver, 230.0, false, 0);

        let stats = compute_statistics_in(&records, &Utc);
        assert_eq!(stats.accuracy, 99);
        assert_eq!(stats.club_stats[0].club, Club::Driver);
        assert_eq!(stats.club_stats[0].accuracy, 99);
        assert_eq!(stats.club_stats[1].accuracy, 100);

        assert_eq!(accuracy_percent(&[]), 0);
    }

    #[test]
    fn test_sessions_newest_first_and_capped() {
        let records: Vec<ShotRecord> = (0..7)
            .map(|day| shot(day + 1, Club::Driver, 100.0, true, day * DAY))
            .collect();
        let stats = compute_statistics_in(&records, &Utc);
        assert_eq!(stats.recent_sessions.len(), MAX_SESSIONS);
        assert_eq!(
            stats.recent_sessions[0].date,
            NaiveDate::from_ymd_opt(1970, 1, 7).expect("date")
        );
        assert!(stats
            .recent_sessions
            .windows(2)
            .all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn test_club_ties_keep_first_appearance() {
        let records = vec![
            shot(1, Club::Putter, 5.0, true, 0),
            shot(2, Club::Driver, 250.0, true, 0),
        ];
        let stats = compute_statistics_in(&records, &Utc);
        let clubs: Vec<Club> = stats.club_stats.iter().map(|c| c.club).collect();
        assert_eq!(clubs, vec![Club::Putter, Club::Driver]);
    }

    #[test]
    fn test_unrepresentable_timestamp_falls_on_epoch() {
        assert_eq!(local_date(i64::MAX, &Utc), NaiveDate::default());
        let stats = compute_statistics_in(&[shot(1, Club::Driver, 1.0, true, i64::MIN)], &Utc);
        assert_eq!(stats.recent_sessions[0].date, NaiveDate::default());
    }

    #[test]
    fn test_refresh_keeps_last_known_on_error() {
        let mut store = MemoryStore::new();
        store
            .create(NewShot {
                distance: 120.0,
                timestamp: Some(0),
                ..NewShot::default()
            })
            .expect("create");

        let mut view = StatsView::new();
        assert!(!view.is_loaded());
        view.refresh(&store).expect("refresh");
        assert_eq!(view.statistics().total_shots, 1);

        assert!(view.refresh(&BrokenStore).is_err());
        assert!(view.is_loaded());
        assert_eq!(view.statistics().total_shots, 1);
        assert_eq!(view.statistics().avg_distance, 120);
    }
}

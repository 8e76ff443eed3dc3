// ABOUTME: In-memory workout store with composite-key deduplication and file persistence
// ABOUTME: Owns filtering, sorting, and summary aggregation over ingested workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Workout Store
//!
//! The canonical set of workout records, keyed by the (type, start) pair.
//! Re-ingesting an existing pair overwrites the stored record
//! (last-write-wins). Every mutation synchronously rewrites the backing
//! file; a failed write degrades to memory-only operation and is reported
//! through [`WorkoutStore::persistence_status`] rather than to the caller.
//!
//! All reads sort and filter on the parsed start instant when the client
//! sent a well-formed RFC 3339 timestamp, falling back to the raw string
//! for anything that does not parse. "Today" and date windows are computed
//! in the configured civil timezone, never in server-local time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{DailyEntry, WorkoutRecord, WorkoutSummary};

/// Composite identity for a stored workout.
///
/// Keying on the (type, start) pair directly, rather than on a joined
/// string, so `("A_2024", "01-01")` and `("A", "2024_01-01")` stay
/// distinct. Matching is exact and case-sensitive on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutKey {
    workout_type: String,
    start: String,
}

impl WorkoutKey {
    fn for_record(record: &WorkoutRecord) -> Self {
        Self {
            workout_type: record.workout_type.clone(),
            start: record.start.clone(),
        }
    }
}

/// Health of the best-effort persistence layer
#[derive(Debug, Clone, Serialize)]
pub struct PersistenceStatus {
    /// Backing file location
    pub path: PathBuf,
    /// Most recent swallowed load/save error; `None` after a clean write
    pub last_error: Option<String>,
}

struct StoreState {
    workouts: HashMap<WorkoutKey, WorkoutRecord>,
    last_persist_error: Option<String>,
}

/// In-memory workout store with file persistence.
///
/// Constructed once by the composition root and shared behind an `Arc`;
/// interior locking makes `add`/`clear` a single mutate-then-persist
/// critical section, so concurrent requests cannot tear the backing file
/// or lose updates. Reads run against a consistent snapshot.
pub struct WorkoutStore {
    inner: RwLock<StoreState>,
    path: PathBuf,
    timezone: Tz,
}

fn parse_start(start: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(start).ok()
}

// Descending/ascending sorts share one total order: parsed instants first
// (normalized to UTC), unparsable starts ordered among themselves by the
// raw string.
fn sort_key(record: &WorkoutRecord) -> (Option<DateTime<Utc>>, &str) {
    (
        record.start_parsed.map(|instant| instant.with_timezone(&Utc)),
        record.start.as_str(),
    )
}

fn read_records(path: &Path) -> AppResult<Vec<WorkoutRecord>> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::storage(format!("read {}: {e}", path.display())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::storage(format!("parse {}: {e}", path.display())))
}

impl WorkoutStore {
    /// Create a store backed by `path`, hydrating from the file when it
    /// exists. A missing, unreadable, or corrupt file starts the store
    /// empty; the failure is logged and recorded, never raised.
    pub fn new(path: impl Into<PathBuf>, timezone: Tz) -> Self {
        let store = Self {
            inner: RwLock::new(StoreState {
                workouts: HashMap::new(),
                last_persist_error: None,
            }),
            path: path.into(),
            timezone,
        };
        store.load_from_file();
        store
    }

    // A poisoned lock means a holder panicked mid-operation; the map itself
    // is still structurally sound, so recover the guard and keep serving.
    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Insert or overwrite a workout, returning whether its key was new.
    ///
    /// The store stamps `ingested_at` in the configured timezone and
    /// derives the parsed start instant before keying. The full record set
    /// is rewritten to the backing file inside the same critical section;
    /// a failed write is logged and recorded in the persistence status.
    pub fn add(&self, mut record: WorkoutRecord) -> bool {
        record.ingested_at = Utc::now().with_timezone(&self.timezone).to_rfc3339();
        record.start_parsed = parse_start(&record.start);

        let mut state = self.write_state();
        let key = WorkoutKey::for_record(&record);
        let is_new = !state.workouts.contains_key(&key);
        state.workouts.insert(key, record);
        self.save_locked(&mut state);
        is_new
    }

    /// All workouts, most recent start first
    #[must_use]
    pub fn get_all(&self) -> Vec<WorkoutRecord> {
        let mut records: Vec<WorkoutRecord> =
            self.read_state().workouts.values().cloned().collect();
        records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        records
    }

    /// Workouts on the civil date `date` (`YYYY-MM-DD`), ascending by start.
    ///
    /// Records with a parsed start match on their local civil date;
    /// unparsable records (and non-date query strings) fall back to a
    /// literal prefix match against the raw start.
    #[must_use]
    pub fn get_by_date(&self, date: &str) -> Vec<WorkoutRecord> {
        let wanted = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
        let mut records: Vec<WorkoutRecord> = self
            .read_state()
            .workouts
            .values()
            .filter(|workout| match (workout.start_date(), wanted) {
                (Some(have), Some(want)) => have == want,
                _ => workout.start.starts_with(date),
            })
            .cloned()
            .collect();
        records.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        records
    }

    /// Workouts of a type, matched case-insensitively, most recent first
    #[must_use]
    pub fn get_by_type(&self, workout_type: &str) -> Vec<WorkoutRecord> {
        let wanted = workout_type.to_lowercase();
        let mut records: Vec<WorkoutRecord> = self
            .read_state()
            .workouts
            .values()
            .filter(|workout| workout.workout_type.to_lowercase() == wanted)
            .cloned()
            .collect();
        records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        records
    }

    /// Workouts whose civil date is within the last `days` days, most
    /// recent first.
    ///
    /// The window is "date ≥ today − days" in the configured timezone, so
    /// `days = 0` means today or later and `days = N` spans N+1 calendar
    /// days including today.
    #[must_use]
    pub fn get_recent(&self, days: u32) -> Vec<WorkoutRecord> {
        self.recent_as_of(self.today(), days)
    }

    fn recent_as_of(&self, today: NaiveDate, days: u32) -> Vec<WorkoutRecord> {
        let cutoff = today - Duration::days(i64::from(days));
        let cutoff_label = cutoff.format("%Y-%m-%d").to_string();
        let mut records: Vec<WorkoutRecord> = self
            .read_state()
            .workouts
            .values()
            .filter(|workout| match workout.start_date() {
                Some(date) => date >= cutoff,
                None => workout
                    .start
                    .get(..10)
                    .is_some_and(|prefix| prefix >= cutoff_label.as_str()),
            })
            .cloned()
            .collect();
        records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        records
    }

    /// Today's workouts in the configured timezone, ascending by start
    #[must_use]
    pub fn get_today(&self) -> Vec<WorkoutRecord> {
        self.get_by_date(&self.today().format("%Y-%m-%d").to_string())
    }

    /// Aggregate summary over the last `days` days.
    ///
    /// A pure function of current store contents and `days`; recomputed on
    /// every call. Missing durations and calories count as zero.
    #[must_use]
    pub fn get_summary(&self, days: u32) -> WorkoutSummary {
        self.summary_as_of(self.today(), days)
    }

    fn summary_as_of(&self, today: NaiveDate, days: u32) -> WorkoutSummary {
        let recent = self.recent_as_of(today, days);
        let mut summary = WorkoutSummary::empty(days);
        summary.total_workouts = recent.len();

        for workout in &recent {
            let duration = workout.duration_minutes.unwrap_or(0.0);
            let calories = workout.calories.unwrap_or(0.0);

            summary.total_duration_minutes += duration;
            summary.total_calories += calories;

            let totals = summary
                .by_type
                .entry(workout.workout_type.clone())
                .or_default();
            totals.count += 1;
            totals.total_duration += duration;
            totals.total_calories += calories;

            summary.workouts_by_date.push(
                workout.date_label(),
                DailyEntry {
                    workout_type: workout.workout_type.clone(),
                    duration,
                    calories,
                },
            );
        }

        summary
    }

    /// Number of stored workouts
    #[must_use]
    pub fn count(&self) -> usize {
        self.read_state().workouts.len()
    }

    /// Remove every stored workout, persist the empty set, and return the
    /// prior count. Irreversible.
    pub fn clear(&self) -> usize {
        let mut state = self.write_state();
        let cleared = state.workouts.len();
        state.workouts.clear();
        self.save_locked(&mut state);
        cleared
    }

    /// Current persistence health (backing path and the most recent
    /// swallowed error, if any)
    #[must_use]
    pub fn persistence_status(&self) -> PersistenceStatus {
        PersistenceStatus {
            path: self.path.clone(),
            last_error: self.read_state().last_persist_error.clone(),
        }
    }

    fn save_locked(&self, state: &mut RwLockWriteGuard<'_, StoreState>) {
        let records: Vec<&WorkoutRecord> = state.workouts.values().collect();
        let result = serde_json::to_vec_pretty(&records)
            .map_err(|e| AppError::storage(format!("serialize workouts: {e}")))
            .and_then(|bytes| {
                fs::write(&self.path, bytes)
                    .map_err(|e| AppError::storage(format!("write {}: {e}", self.path.display())))
            });

        match result {
            Ok(()) => state.last_persist_error = None,
            Err(err) => {
                warn!(error = %err, "could not save workouts; continuing from memory");
                state.last_persist_error = Some(err.to_string());
            }
        }
    }

    fn load_from_file(&self) {
        if !self.path.exists() {
            return;
        }
        let mut state = self.write_state();
        match read_records(&self.path) {
            Ok(records) => {
                // Duplicate keys in a hand-edited or corrupted file collapse
                // last-one-wins by file order, same as repeated add calls.
                for mut record in records {
                    record.start_parsed = parse_start(&record.start);
                    state.workouts.insert(WorkoutKey::for_record(&record), record);
                }
                info!(
                    count = state.workouts.len(),
                    path = %self.path.display(),
                    "loaded workouts from storage"
                );
            }
            Err(err) => {
                warn!(error = %err, "could not load workouts; starting empty");
                state.last_persist_error = Some(err.to_string());
            }
        }
    }
}

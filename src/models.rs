// ABOUTME: Core data models for the workout MCP server
// ABOUTME: Defines WorkoutRecord, WorkoutSummary, and the summary aggregation structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Core data structures for workout storage and summaries.
//!
//! ## Design Principles
//!
//! - **Client Agnostic**: records keep whatever timestamp notation the
//!   client sent; a parsed instant is derived alongside the original string
//! - **Extensible**: optional fields accommodate clients that report only a
//!   subset of metrics
//! - **Serializable**: all models serialize to JSON for the HTTP API and
//!   the persistence file

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use crate::constants::defaults;

fn default_source() -> String {
    defaults::SOURCE.to_owned()
}

/// A single ingested workout.
///
/// Identity is the (`type`, `start`) pair: re-ingesting a workout with the
/// same pair overwrites the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout category label, e.g. "Running" or "Yoga". Free-form; the
    /// recognized vocabulary is advertised via MCP discovery but not
    /// enforced here.
    #[serde(rename = "type")]
    pub workout_type: String,
    /// ISO-8601 start timestamp as sent by the client. Defines identity and
    /// sort order.
    pub start: String,
    /// ISO-8601 end timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Active calories burned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Distance covered (client units, typically miles)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Average heart rate in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_avg: Option<u32>,
    /// Maximum heart rate in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_max: Option<u32>,
    /// Data source device
    #[serde(default = "default_source")]
    pub source: String,
    /// Stamped by the store at insertion time, in the configured timezone
    #[serde(default)]
    pub ingested_at: String,
    /// Parsed start instant, derived at insertion and on load. Never
    /// persisted; recomputed so the file stays a flat array of client
    /// fields.
    #[serde(skip)]
    pub start_parsed: Option<DateTime<FixedOffset>>,
}

impl WorkoutRecord {
    /// Local civil date of the start timestamp, when it parses
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_parsed.map(|instant| instant.date_naive())
    }

    /// Date bucket label used by summaries: the civil date when the start
    /// parses, the first ten characters otherwise, or "unknown" for strings
    /// too short to carry a date
    #[must_use]
    pub fn date_label(&self) -> String {
        if let Some(date) = self.start_date() {
            return date.format("%Y-%m-%d").to_string();
        }
        self.start
            .get(..10)
            .map_or_else(|| "unknown".to_owned(), str::to_owned)
    }
}

/// Per-type accumulation within a summary window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeTotals {
    /// Number of workouts of this type
    pub count: usize,
    /// Summed duration in minutes (missing durations count as 0)
    pub total_duration: f64,
    /// Summed calories (missing calories count as 0)
    pub total_calories: f64,
}

/// One workout's contribution to a daily bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Workout category label
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes, 0 when unreported
    pub duration: f64,
    /// Calories, 0 when unreported
    pub calories: f64,
}

/// Insertion-ordered date → entries mapping.
///
/// Serialized as a JSON object whose keys appear in first-seen order, which
/// follows the descending-start iteration of the summarized window. A plain
/// `HashMap` would shuffle the dates on every serialization.
#[derive(Debug, Clone, Default)]
pub struct DateBuckets(Vec<(String, Vec<DailyEntry>)>);

impl DateBuckets {
    /// Append an entry to the bucket for `date`, creating the bucket at the
    /// end of the order on first sight
    pub fn push(&mut self, date: String, entry: DailyEntry) {
        if let Some((_, entries)) = self.0.iter_mut().find(|(label, _)| *label == date) {
            entries.push(entry);
        } else {
            self.0.push((date, vec![entry]));
        }
    }

    /// Number of distinct dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no dates have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries recorded for `date`, if any
    #[must_use]
    pub fn get(&self, date: &str) -> Option<&[DailyEntry]> {
        self.0
            .iter()
            .find(|(label, _)| label == date)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Iterate buckets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DailyEntry])> {
        self.0
            .iter()
            .map(|(label, entries)| (label.as_str(), entries.as_slice()))
    }
}

impl Serialize for DateBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, entries) in &self.0 {
            map.serialize_entry(date, entries)?;
        }
        map.end()
    }
}

/// Aggregate report over the recent workout window.
///
/// A pure function of the store contents and the `days` window; recomputed
/// on every request.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSummary {
    /// Requested window size in days
    pub period_days: u32,
    /// Number of workouts in the window
    pub total_workouts: usize,
    /// Summed duration in minutes across the window
    pub total_duration_minutes: f64,
    /// Summed calories across the window
    pub total_calories: f64,
    /// Per-type accumulations
    pub by_type: HashMap<String, TypeTotals>,
    /// Workouts grouped by civil date, in window iteration order
    pub workouts_by_date: DateBuckets,
}

impl WorkoutSummary {
    /// An empty summary for the given window
    #[must_use]
    pub fn empty(period_days: u32) -> Self {
        Self {
            period_days,
            total_workouts: 0,
            total_duration_minutes: 0.0,
            total_calories: 0.0,
            by_type: HashMap::new(),
            workouts_by_date: DateBuckets::default(),
        }
    }
}

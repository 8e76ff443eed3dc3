// ABOUTME: Integration tests for workout store persistence across process restarts
// ABOUTME: Covers save/load round trips through the public API and the backing file format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used)]

//! Store persistence tests for `workout_mcp_server`

use chrono_tz::America::Los_Angeles;
use serde_json::json;
use tempfile::TempDir;
use workout_mcp_server::models::WorkoutRecord;
use workout_mcp_server::storage::WorkoutStore;

fn record(workout_type: &str, start: &str) -> WorkoutRecord {
    serde_json::from_value(json!({"type": workout_type, "start": start})).unwrap()
}

#[test]
fn records_survive_a_simulated_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.json");

    {
        let store = WorkoutStore::new(&path, Los_Angeles);
        store.add(record("Running", "2024-01-01T08:00:00-08:00"));
        store.add(record("Yoga", "2024-01-02T08:00:00-08:00"));
        store.add(record("Golf", "2024-01-03T08:00:00-08:00"));
    }

    let reloaded = WorkoutStore::new(&path, Los_Angeles);
    assert_eq!(reloaded.count(), 3);

    let all = reloaded.get_all();
    assert_eq!(all[0].workout_type, "Golf");
    assert_eq!(all[2].workout_type, "Running");
    // The ingestion stamp is persisted, not reassigned on load
    assert!(all.iter().all(|w| !w.ingested_at.is_empty()));
}

#[test]
fn backing_file_is_a_flat_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.json");

    let store = WorkoutStore::new(&path, Los_Angeles);
    store.add(record("Running", "2024-01-01T08:00:00-08:00"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "Running");
    assert_eq!(records[0]["start"], "2024-01-01T08:00:00-08:00");
    // Derived fields stay out of the file
    assert!(records[0].get("start_parsed").is_none());
}

#[test]
fn overwrites_are_persisted_immediately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.json");

    let store = WorkoutStore::new(&path, Los_Angeles);
    let mut first: WorkoutRecord = serde_json::from_value(json!({
        "type": "Running",
        "start": "2024-01-01T08:00:00-08:00",
        "calories": 100.0
    }))
    .unwrap();
    store.add(first.clone());
    first.calories = Some(250.0);
    store.add(first);

    let reloaded = WorkoutStore::new(&path, Los_Angeles);
    assert_eq!(reloaded.count(), 1);
    assert_eq!(reloaded.get_all()[0].calories, Some(250.0));
}

#[test]
fn missing_file_starts_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = WorkoutStore::new(dir.path().join("nothing-here.json"), Los_Angeles);
    assert_eq!(store.count(), 0);
    assert!(store.persistence_status().last_error.is_none());
}

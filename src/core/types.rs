//! Core data types for the beacon tracker

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 2D position in the local tracking plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Fixed beacon with a surveyed position and calibrated reference power
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconRecord {
    /// Advertised identifier, unique within the registry
    pub id: String,
    /// Surveyed position in the tracking plane
    pub position: Point,
    /// Signal strength expected at 1 unit distance (dBm)
    pub reference_power: f64,
}

impl BeaconRecord {
    pub fn new(id: impl Into<String>, position: Point, reference_power: f64) -> Self {
        Self {
            id: id.into(),
            position,
            reference_power,
        }
    }
}

/// Immutable registry of the fixed beacons the tracker knows about.
///
/// Built once at startup and shared read-only across cycles. Keyed by
/// identifier; iteration order is sorted by identifier so every
/// enumeration over registry-derived data is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeaconRegistry {
    records: BTreeMap<String, BeaconRecord>,
}

impl BeaconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = BeaconRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        registry
    }

    /// Insert a record, replacing any previous record with the same identifier
    pub fn insert(&mut self, record: BeaconRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<&BeaconRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &BeaconRecord> {
        self.records.values()
    }
}

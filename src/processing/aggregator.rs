//! Per-cycle observation collection
//!
//! An [`ObservationSet`] is the working state of a single tracking cycle:
//! the subset of registered beacons actually heard during the cycle's
//! discovery pass, each annotated with its ranged distance. Sets are
//! created fresh every cycle and discarded at cycle end.

use crate::algorithms::ranging::PathLossModel;
use crate::core::BeaconRegistry;
use serde::Serialize;
use std::collections::BTreeMap;

/// One beacon's reading within a single tracking cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Identifier of the registered beacon
    pub id: String,
    /// Measured signal strength (dBm)
    pub rssi: f64,
    /// Distance derived through the path-loss model, in registry units
    pub distance: f64,
}

/// Mapping from beacon identifier to its observation for one cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObservationSet {
    observations: BTreeMap<String, Observation>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading for `id`, ranging it through the path-loss model.
    ///
    /// Identifiers without a registry record are ignored; the registry is
    /// a filter, not a validator. When the same identifier is heard more
    /// than once in a cycle the strongest reading wins, which makes the
    /// set independent of ingestion order.
    ///
    /// Returns whether the identifier was registered.
    pub fn ingest(
        &mut self,
        registry: &BeaconRegistry,
        model: &PathLossModel,
        id: &str,
        rssi: f64,
    ) -> bool {
        let Some(record) = registry.get(id) else {
            return false;
        };

        if let Some(existing) = self.observations.get(id) {
            if existing.rssi >= rssi {
                return true;
            }
        }

        let distance = model.estimate_distance(rssi, record.reference_power);
        self.observations.insert(
            id.to_string(),
            Observation {
                id: id.to_string(),
                rssi,
                distance,
            },
        );
        true
    }

    pub fn get(&self, id: &str) -> Option<&Observation> {
        self.observations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.observations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.values()
    }
}

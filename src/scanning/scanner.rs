//! Scanner abstraction for discovering nearby beacon advertisements

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Result type for discovery operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Failures of the external scanning collaborator
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ScanError {
    /// The scanning backend could not be reached or refused the request
    #[error("scanner unavailable: {reason}")]
    Unavailable { reason: String },
    /// The discovery pass did not complete in time
    #[error("scan timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}

/// One advertisement heard during a discovery pass.
///
/// A device may advertise several identifiers at once; every one of them
/// is a candidate observation and shares the sighting's signal strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    /// Every identifier the device advertised
    pub identifiers: Vec<String>,
    /// Measured signal strength (dBm)
    pub rssi: f64,
    /// Advertised device name, when present
    pub name: Option<String>,
}

impl Sighting {
    pub fn new(identifier: impl Into<String>, rssi: f64) -> Self {
        Self {
            identifiers: vec![identifier.into()],
            rssi,
            name: None,
        }
    }

    pub fn with_identifiers(identifiers: Vec<String>, rssi: f64) -> Self {
        Self {
            identifiers,
            rssi,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Interface to the device-discovery mechanism.
///
/// One discovery pass per tracking cycle; the tracker never retries a
/// failed pass within a cycle since the next cycle scans again anyway.
#[async_trait]
pub trait BeaconScanner: Send {
    /// Discover nearby devices and report every advertisement heard
    async fn discover(&mut self) -> ScanResult<Vec<Sighting>>;
}

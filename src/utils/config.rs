//! Configuration for the tracker and the beacon registry

use crate::algorithms::PathLossModel;
use crate::core::{
    BeaconRecord, BeaconRegistry, Point, DEFAULT_CYCLE_INTERVAL_MS, FREE_SPACE_PATH_LOSS_EXPONENT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("beacon registry is empty")]
    EmptyRegistry,
    #[error("invalid {parameter}: {value}")]
    InvalidParameter { parameter: String, value: String },
}

/// Tracker runtime parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Pause between tracking cycles (milliseconds)
    pub cycle_interval_ms: u64,
    /// Path-loss exponent used when inverting RSSI into distance
    pub path_loss_exponent: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cycle_interval_ms: DEFAULT_CYCLE_INTERVAL_MS,
            path_loss_exponent: FREE_SPACE_PATH_LOSS_EXPONENT,
        }
    }
}

impl TrackerConfig {
    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(self.cycle_interval_ms)
    }

    pub fn path_loss_model(&self) -> PathLossModel {
        PathLossModel::new(self.path_loss_exponent)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.cycle_interval_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "cycle_interval_ms".to_string(),
                value: self.cycle_interval_ms.to_string(),
            });
        }
        if !self.path_loss_exponent.is_finite() || self.path_loss_exponent <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "path_loss_exponent".to_string(),
                value: self.path_loss_exponent.to_string(),
            });
        }
        Ok(())
    }
}

/// One beacon as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconEntry {
    /// Surveyed [x, y] position in the tracking plane
    pub position: [f64; 2],
    /// Signal strength expected at 1 unit distance (dBm)
    pub reference_power: f64,
}

/// On-disk registry layout: a JSON object mapping identifier to beacon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryConfig {
    pub beacons: BTreeMap<String, BeaconEntry>,
}

impl RegistryConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn into_registry(self) -> ConfigResult<BeaconRegistry> {
        if self.beacons.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(BeaconRegistry::from_records(self.beacons.into_iter().map(
            |(id, entry)| {
                BeaconRecord::new(
                    id,
                    Point::new(entry.position[0], entry.position[1]),
                    entry.reference_power,
                )
            },
        )))
    }
}

/// Load and convert a registry file in one step
pub fn load_registry(path: &Path) -> ConfigResult<BeaconRegistry> {
    RegistryConfig::load(path)?.into_registry()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracker_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.cycle_interval(), Duration::from_millis(2000));
        assert_eq!(config.path_loss_model(), PathLossModel::new(2.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let zero_interval = TrackerConfig {
            cycle_interval_ms: 0,
            ..TrackerConfig::default()
        };
        assert!(zero_interval.validate().is_err());

        let bad_exponent = TrackerConfig {
            path_loss_exponent: 0.0,
            ..TrackerConfig::default()
        };
        assert!(bad_exponent.validate().is_err());
    }

    #[test]
    fn test_registry_json_round_trip() {
        let json = r#"{
            "beacon-a": { "position": [0.0, 0.0], "reference_power": -59.0 },
            "beacon-b": { "position": [5.0, 0.0], "reference_power": -62.0 }
        }"#;

        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        let registry = config.into_registry().unwrap();

        assert_eq!(registry.len(), 2);
        let b = registry.get("beacon-b").unwrap();
        assert_eq!(b.position, Point::new(5.0, 0.0));
        assert_eq!(b.reference_power, -62.0);
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            config.into_registry(),
            Err(ConfigError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_load_registry_from_file() {
        let path = std::env::temp_dir().join("beacon-tracker-registry-test.json");
        fs::write(
            &path,
            r#"{ "a": { "position": [1.0, 2.0], "reference_power": -59.0 } }"#,
        )
        .unwrap();

        let registry = load_registry(&path).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().position, Point::new(1.0, 2.0));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("beacon-tracker-no-such-file.json");
        assert!(matches!(
            load_registry(&path),
            Err(ConfigError::Io { .. })
        ));
    }
}

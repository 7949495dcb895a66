//! RSSI-to-distance conversion under a log-distance path-loss model

use crate::core::FREE_SPACE_PATH_LOSS_EXPONENT;
use serde::{Deserialize, Serialize};

/// Path-loss model parameters for inverting RSSI into distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathLossModel {
    /// Decay exponent; 2.0 approximates free-space propagation
    pub exponent: f64,
}

impl Default for PathLossModel {
    fn default() -> Self {
        Self {
            exponent: FREE_SPACE_PATH_LOSS_EXPONENT,
        }
    }
}

impl PathLossModel {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    /// Estimate the distance at which `rssi` would be measured, given the
    /// power measured at 1 unit distance.
    ///
    /// `distance = 10 ^ ((reference_power - rssi) / (10 * exponent))`
    ///
    /// The exponential form is always positive for finite inputs; extreme
    /// readings yield extreme distances and are passed through unclamped.
    pub fn estimate_distance(&self, rssi: f64, reference_power: f64) -> f64 {
        10f64.powf((reference_power - rssi) / (10.0 * self.exponent))
    }
}

/// Free-space ranging with the default exponent
pub fn estimate_distance(rssi: f64, reference_power: f64) -> f64 {
    PathLossModel::default().estimate_distance(rssi, reference_power)
}

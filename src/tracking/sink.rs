//! Per-cycle output reporting

use crate::algorithms::SolveError;
use crate::core::Point;
use crate::processing::Observation;
use crate::scanning::ScanError;
use serde::Serialize;

/// How a tracking cycle ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    /// The solver produced a position
    Estimate(Point),
    /// The solver declined, with the reason
    Unavailable(SolveError),
    /// The discovery pass itself failed; no observations this cycle
    ScanFailed(ScanError),
}

/// One cycle's output record: the outcome plus the per-beacon distance
/// estimates gathered before the solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    /// Monotonic cycle counter, starting at zero
    pub cycle: u64,
    pub outcome: CycleOutcome,
    pub distances: Vec<Observation>,
}

impl CycleReport {
    /// The estimated position, when the cycle produced one
    pub fn estimate(&self) -> Option<Point> {
        match &self.outcome {
            CycleOutcome::Estimate(position) => Some(*position),
            _ => None,
        }
    }
}

/// Consumer of cycle reports
pub trait ReportSink: Send {
    fn report(&mut self, report: &CycleReport);
}

/// Sink that writes one structured log line per cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn report(&mut self, report: &CycleReport) {
        for obs in &report.distances {
            tracing::debug!(
                cycle = report.cycle,
                beacon = %obs.id,
                rssi = obs.rssi,
                distance = obs.distance,
                "beacon ranged"
            );
        }
        match &report.outcome {
            CycleOutcome::Estimate(position) => {
                tracing::info!(
                    cycle = report.cycle,
                    x = position.x,
                    y = position.y,
                    beacons = report.distances.len(),
                    "position estimate"
                );
            }
            CycleOutcome::Unavailable(reason) => {
                tracing::info!(
                    cycle = report.cycle,
                    beacons = report.distances.len(),
                    %reason,
                    "no estimate"
                );
            }
            CycleOutcome::ScanFailed(error) => {
                tracing::warn!(cycle = report.cycle, %error, "scan failed");
            }
        }
    }
}

/// Sink that retains every report, for tests and diagnostics
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub reports: Vec<CycleReport>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, report: &CycleReport) {
        self.reports.push(report.clone());
    }
}

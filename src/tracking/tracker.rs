//! Tracking cycle orchestrator
//!
//! Drives the scan → range → solve → report sequence on a fixed cadence.
//! Cycles run strictly sequentially; the only suspension points are the
//! discovery pass and the inter-cycle wait. No cycle failure stops the
//! loop: a failed scan or an unavailable solve is reported and the next
//! cycle starts on schedule.

use crate::algorithms::{LeastSquaresSolver, PathLossModel};
use crate::core::BeaconRegistry;
use crate::processing::ObservationSet;
use crate::scanning::BeaconScanner;
use crate::tracking::clock::CycleClock;
use crate::tracking::sink::{CycleOutcome, CycleReport, ReportSink};
use crate::utils::config::TrackerConfig;
use std::time::Duration;

/// Periodic position tracker over a fixed beacon registry
pub struct Tracker<S, C> {
    registry: BeaconRegistry,
    model: PathLossModel,
    solver: LeastSquaresSolver,
    interval: Duration,
    scanner: S,
    clock: C,
    cycle: u64,
}

impl<S: BeaconScanner, C: CycleClock> Tracker<S, C> {
    pub fn new(registry: BeaconRegistry, config: &TrackerConfig, scanner: S, clock: C) -> Self {
        Self {
            registry,
            model: config.path_loss_model(),
            solver: LeastSquaresSolver::new(),
            interval: config.cycle_interval(),
            scanner,
            clock,
            cycle: 0,
        }
    }

    pub fn registry(&self) -> &BeaconRegistry {
        &self.registry
    }

    /// Run one full cycle: discover, range every advertised identifier,
    /// solve, and return the report.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let cycle = self.cycle;
        self.cycle += 1;

        let sightings = match self.scanner.discover().await {
            Ok(sightings) => sightings,
            Err(error) => {
                tracing::warn!(cycle, %error, "discovery pass failed, skipping cycle");
                return CycleReport {
                    cycle,
                    outcome: CycleOutcome::ScanFailed(error),
                    distances: Vec::new(),
                };
            }
        };

        let mut observations = ObservationSet::new();
        let mut unregistered = 0usize;
        for sighting in &sightings {
            for id in &sighting.identifiers {
                if !observations.ingest(&self.registry, &self.model, id, sighting.rssi) {
                    unregistered += 1;
                }
            }
        }
        if unregistered > 0 {
            tracing::debug!(cycle, unregistered, "unregistered advertisements filtered");
        }

        let outcome = match self.solver.solve(&self.registry, &observations) {
            Ok(position) => CycleOutcome::Estimate(position),
            Err(reason) => CycleOutcome::Unavailable(reason),
        };

        CycleReport {
            cycle,
            outcome,
            distances: observations.iter().cloned().collect(),
        }
    }

    /// Run `cycles` full cycles, reporting each and waiting the configured
    /// interval after every one.
    pub async fn run_cycles(&mut self, cycles: u64, sink: &mut dyn ReportSink) {
        for _ in 0..cycles {
            let report = self.run_cycle().await;
            sink.report(&report);
            self.clock.wait(self.interval).await;
        }
    }

    /// Run until the surrounding task is cancelled or the process exits
    pub async fn run(&mut self, sink: &mut dyn ReportSink) {
        loop {
            let report = self.run_cycle().await;
            sink.report(&report);
            self.clock.wait(self.interval).await;
        }
    }
}

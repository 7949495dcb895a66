//! Demo binary: tracks a simulated observer walking around the registry.
//!
//! Real radio backends are out of scope, so discovery is simulated: the
//! observer follows a circular path and each beacon's RSSI is derived by
//! running the path-loss model forward from the true distance.

use async_trait::async_trait;
use beacon_tracker::scanning::ScanResult;
use beacon_tracker::{
    load_registry, BeaconRecord, BeaconRegistry, BeaconScanner, LogSink, PathLossModel, Point,
    Sighting, TokioClock, Tracker, TrackerConfig,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "beacon-tracker",
    about = "Periodic RSSI multilateration tracker (simulated scanner)"
)]
struct Args {
    /// Path to a JSON beacon registry (identifier -> position / reference power)
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Pause between tracking cycles, in milliseconds
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,
    /// Number of cycles to run (0 = run until interrupted)
    #[arg(long, default_value_t = 0)]
    cycles: u64,
    /// Path-loss exponent for the RSSI distance model
    #[arg(long, default_value_t = 2.0)]
    path_loss_exponent: f64,
}

/// Scanner that synthesizes sightings for an observer circling the
/// beacon field
struct SimulatedScanner {
    beacons: Vec<BeaconRecord>,
    model: PathLossModel,
    center: Point,
    radius: f64,
    step: u64,
}

impl SimulatedScanner {
    fn new(registry: &BeaconRegistry, model: PathLossModel) -> Self {
        let n = registry.len() as f64;
        let center = registry.iter().fold(Point::new(0.0, 0.0), |acc, r| {
            Point::new(acc.x + r.position.x / n, acc.y + r.position.y / n)
        });
        Self {
            beacons: registry.iter().cloned().collect(),
            model,
            center,
            radius: 1.5,
            step: 0,
        }
    }

    fn observer_position(&self) -> Point {
        let angle = self.step as f64 * std::f64::consts::TAU / 16.0;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

#[async_trait]
impl BeaconScanner for SimulatedScanner {
    async fn discover(&mut self) -> ScanResult<Vec<Sighting>> {
        let observer = self.observer_position();
        self.step += 1;

        let sightings = self
            .beacons
            .iter()
            .map(|beacon| {
                let distance = beacon.position.distance_to(&observer);
                let rssi = beacon.reference_power
                    - 10.0 * self.model.exponent * distance.log10();
                // Slow deterministic wobble stands in for measurement noise
                let wobble = 0.5 * (self.step as f64 * 0.7).sin();
                Sighting::new(beacon.id.clone(), rssi + wobble).with_name("sim-beacon")
            })
            .collect();

        Ok(sightings)
    }
}

/// The three-beacon layout the tracker was originally calibrated with
fn default_registry() -> BeaconRegistry {
    BeaconRegistry::from_records(vec![
        BeaconRecord::new(
            "12345678-1234-5678-1234-567812345678",
            Point::new(0.0, 0.0),
            -59.0,
        ),
        BeaconRecord::new(
            "87654321-4321-8765-4321-876543218765",
            Point::new(5.0, 0.0),
            -59.0,
        ),
        BeaconRecord::new(
            "11223344-5566-7788-99AA-BBCCDDEEFF00",
            Point::new(2.5, 5.0),
            -59.0,
        ),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = TrackerConfig {
        cycle_interval_ms: args.interval_ms,
        path_loss_exponent: args.path_loss_exponent,
    };
    config.validate()?;

    let registry = match &args.registry {
        Some(path) => load_registry(path)?,
        None => default_registry(),
    };
    tracing::info!(beacons = registry.len(), "registry loaded");

    let scanner = SimulatedScanner::new(&registry, config.path_loss_model());
    let mut tracker = Tracker::new(registry, &config, scanner, TokioClock);
    let mut sink = LogSink;

    if args.cycles == 0 {
        tracker.run(&mut sink).await;
    } else {
        tracker.run_cycles(args.cycles, &mut sink).await;
    }
    Ok(())
}

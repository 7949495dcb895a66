//! End-to-end tracking loop test: scripted discovery passes through the
//! full scan → range → solve → report sequence, with no wall-clock delay.

use approx::assert_relative_eq;
use beacon_tracker::{
    BeaconRecord, BeaconRegistry, CycleOutcome, ManualClock, MemorySink, MockScanner, Point,
    ScanError, Sighting, SolveError, Tracker, TrackerConfig,
};
use std::time::Duration;

fn registry() -> BeaconRegistry {
    BeaconRegistry::from_records(vec![
        BeaconRecord::new("anchor-a", Point::new(0.0, 0.0), -59.0),
        BeaconRecord::new("anchor-b", Point::new(5.0, 0.0), -59.0),
        BeaconRecord::new("anchor-c", Point::new(2.5, 5.0), -59.0),
    ])
}

/// RSSI that ranges to exactly `distance` from a beacon with the given
/// reference power, under the default free-space model
fn rssi_at(reference_power: f64, distance: f64) -> f64 {
    reference_power - 20.0 * distance.log10()
}

/// Sightings for an observer at `target`, with exact model-consistent RSSI
fn sightings_at(registry: &BeaconRegistry, target: Point) -> Vec<Sighting> {
    registry
        .iter()
        .map(|beacon| {
            let distance = beacon.position.distance_to(&target);
            Sighting::new(beacon.id.clone(), rssi_at(beacon.reference_power, distance))
        })
        .collect()
}

#[tokio::test]
async fn tracking_loop_survives_every_cycle_failure_mode() {
    let registry = registry();
    let truth = Point::new(1.6, 2.1);

    let mut scanner = MockScanner::new();
    // Cycle 0: healthy scan of all three beacons
    scanner.push_batch(sightings_at(&registry, truth));
    // Cycle 1: scanner goes away entirely
    scanner.push_failure(ScanError::Unavailable {
        reason: "adapter reset".to_string(),
    });
    // Cycle 2: only two beacons heard
    scanner.push_batch(vec![
        Sighting::new("anchor-a", rssi_at(-59.0, 2.0)),
        Sighting::new("anchor-b", rssi_at(-59.0, 3.0)),
    ]);
    // Cycle 3: duplicates and an unregistered straggler mixed in
    let mut noisy = sightings_at(&registry, truth);
    noisy.push(Sighting::new("anchor-a", -95.0)); // weaker duplicate, must lose
    noisy.push(Sighting::new("intruder", -30.0)); // not in the registry
    scanner.push_batch(noisy);

    let config = TrackerConfig {
        cycle_interval_ms: 2000,
        ..TrackerConfig::default()
    };
    let clock = ManualClock::new();
    let mut tracker = Tracker::new(registry, &config, scanner, clock.clone());
    let mut sink = MemorySink::new();

    tracker.run_cycles(4, &mut sink).await;

    assert_eq!(sink.reports.len(), 4);

    // Cycle 0 recovers the true position from exact readings
    let first = sink.reports[0].estimate().expect("healthy cycle solves");
    assert_relative_eq!(first.x, truth.x, epsilon = 1e-6);
    assert_relative_eq!(first.y, truth.y, epsilon = 1e-6);

    // Cycle 1 reports the scan failure and nothing else
    assert!(matches!(
        sink.reports[1].outcome,
        CycleOutcome::ScanFailed(ScanError::Unavailable { .. })
    ));
    assert!(sink.reports[1].distances.is_empty());

    // Cycle 2 is an expected "no estimate" outcome, not a fault
    assert_eq!(
        sink.reports[2].outcome,
        CycleOutcome::Unavailable(SolveError::InsufficientBeacons {
            available: 2,
            required: 3,
        })
    );

    // Cycle 3: the weak duplicate and the intruder change nothing
    let last = sink.reports[3].estimate().expect("noisy cycle still solves");
    assert_relative_eq!(last.x, truth.x, epsilon = 1e-6);
    assert_relative_eq!(last.y, truth.y, epsilon = 1e-6);
    assert_eq!(sink.reports[3].distances.len(), 3);
    assert!(sink.reports[3]
        .distances
        .iter()
        .all(|obs| obs.id != "intruder"));

    // Every cycle, including the failed one, waited the configured interval
    assert_eq!(clock.waits(), vec![Duration::from_secs(2); 4]);
}

#[tokio::test]
async fn collinear_layout_reports_degenerate_geometry() {
    let registry = BeaconRegistry::from_records(vec![
        BeaconRecord::new("line-a", Point::new(0.0, 0.0), -59.0),
        BeaconRecord::new("line-b", Point::new(1.0, 0.0), -59.0),
        BeaconRecord::new("line-c", Point::new(2.0, 0.0), -59.0),
    ]);

    let mut scanner = MockScanner::new();
    scanner.push_batch(vec![
        Sighting::new("line-a", -65.0),
        Sighting::new("line-b", -67.0),
        Sighting::new("line-c", -70.0),
    ]);

    let mut tracker = Tracker::new(
        registry,
        &TrackerConfig::default(),
        scanner,
        ManualClock::new(),
    );
    let report = tracker.run_cycle().await;

    assert_eq!(
        report.outcome,
        CycleOutcome::Unavailable(SolveError::DegenerateGeometry)
    );
}

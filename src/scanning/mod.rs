//! Device-discovery boundary: scanner trait, sighting type and a mock

pub mod mock;
pub mod scanner;

pub use mock::MockScanner;
pub use scanner::{BeaconScanner, ScanError, ScanResult, Sighting};

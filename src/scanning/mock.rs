//! Mock scanner implementation for testing and development

use crate::scanning::{BeaconScanner, ScanError, ScanResult, Sighting};
use async_trait::async_trait;
use std::collections::VecDeque;

/// Scanner fed from a scripted queue of discovery outcomes.
///
/// Each call to [`BeaconScanner::discover`] pops the next scripted batch
/// or failure; once the script runs out every pass reports an empty
/// batch.
#[derive(Debug, Default)]
pub struct MockScanner {
    script: VecDeque<ScanResult<Vec<Sighting>>>,
    passes: u64,
}

impl MockScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful discovery pass returning `sightings`
    pub fn push_batch(&mut self, sightings: Vec<Sighting>) {
        self.script.push_back(Ok(sightings));
    }

    /// Queue a failing discovery pass
    pub fn push_failure(&mut self, error: ScanError) {
        self.script.push_back(Err(error));
    }

    /// Number of discovery passes performed so far
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

#[async_trait]
impl BeaconScanner for MockScanner {
    async fn discover(&mut self) -> ScanResult<Vec<Sighting>> {
        self.passes += 1;
        self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

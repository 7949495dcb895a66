//! Linear least-squares multilateration from ranged beacon observations
//!
//! Subtracting the circle equations `(x - xi)^2 + (y - yi)^2 = di^2` of
//! consecutive beacon pairs cancels the quadratic terms and leaves a linear
//! system in (x, y). With N ranged beacons this gives N-1 equations in two
//! unknowns; the solution is the least-squares minimizer, which tolerates
//! both overdetermination and noisy distance estimates.

use crate::core::{BeaconRegistry, Point, MIN_SOLVER_BEACONS};
use crate::processing::ObservationSet;
use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use thiserror::Error;

/// Result type for position solves
pub type SolveResult = Result<Point, SolveError>;

/// Reasons a cycle produces no position estimate.
///
/// Both variants are expected outcomes of normal operation, not faults:
/// beacon visibility varies cycle to cycle, and a sparse cycle can leave
/// a geometry that does not pin down a 2D position.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum SolveError {
    /// Fewer ranged beacons than the solver needs
    #[error("insufficient beacons: {available} observed, {required} required")]
    InsufficientBeacons { available: usize, required: usize },
    /// Collinear or coincident beacon positions; the system is rank-deficient
    #[error("degenerate geometry: beacon layout does not determine a position")]
    DegenerateGeometry,
}

/// Least-squares multilateration solver
#[derive(Debug, Clone)]
pub struct LeastSquaresSolver {
    /// Singular values at or below this threshold are treated as zero
    /// when deciding whether the system has full rank
    pub rank_epsilon: f64,
    /// Minimum number of ranged beacons accepted
    pub min_beacons: usize,
}

impl Default for LeastSquaresSolver {
    fn default() -> Self {
        Self {
            rank_epsilon: 1e-9,
            min_beacons: MIN_SOLVER_BEACONS,
        }
    }
}

impl LeastSquaresSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve for the observer position from one cycle's observation set.
    ///
    /// Observations without a registry record are skipped; the set is
    /// enumerated in identifier order, so the solve is deterministic for
    /// a given set of readings.
    pub fn solve(&self, registry: &BeaconRegistry, observations: &ObservationSet) -> SolveResult {
        let ranged: Vec<(Point, f64)> = observations
            .iter()
            .filter_map(|obs| registry.get(&obs.id).map(|rec| (rec.position, obs.distance)))
            .collect();
        self.solve_ranged(&ranged)
    }

    /// Solve from (position, distance) pairs in the given enumeration order.
    ///
    /// The order decides which consecutive pairs form equations, but the
    /// least-squares minimizer is the same for any order up to numerical
    /// precision.
    pub fn solve_ranged(&self, ranged: &[(Point, f64)]) -> SolveResult {
        if ranged.len() < self.min_beacons {
            return Err(SolveError::InsufficientBeacons {
                available: ranged.len(),
                required: self.min_beacons,
            });
        }

        let rows = ranged.len() - 1;
        let mut a = DMatrix::<f64>::zeros(rows, 2);
        let mut b = DVector::<f64>::zeros(rows);

        for i in 0..rows {
            let (p1, d1) = ranged[i];
            let (p2, d2) = ranged[i + 1];
            a[(i, 0)] = 2.0 * (p2.x - p1.x);
            a[(i, 1)] = 2.0 * (p2.y - p1.y);
            b[i] = d1 * d1 - d2 * d2 - p1.x * p1.x + p2.x * p2.x - p1.y * p1.y + p2.y * p2.y;
        }

        let svd = a.svd(true, true);
        if svd.rank(self.rank_epsilon) < 2 {
            return Err(SolveError::DegenerateGeometry);
        }

        let solution = svd
            .solve(&b, self.rank_epsilon)
            .map_err(|_| SolveError::DegenerateGeometry)?;

        let position = Point::new(solution[0], solution[1]);
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(SolveError::DegenerateGeometry);
        }
        Ok(position)
    }
}

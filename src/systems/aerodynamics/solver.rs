use nalgebra::{linalg::LU, DMatrix, DVector, Dynamic};
use tracing::{debug, info};

use crate::resources::errors::{Result, VlmError};

/// Smallest accepted ratio between the smallest and the largest LU pivot.
pub const PIVOT_RATIO_TOLERANCE: f64 = 1e-13;

/// LU factorisation of the influence matrix, reusable for any number of
/// right-hand sides.
#[derive(Debug, Clone)]
pub struct FactorizedSystem {
    lu: LU<f64, Dynamic, Dynamic>,
    size: usize,
}

impl FactorizedSystem {
    /// Factorises `matrix`, rejecting singular and ill-conditioned systems.
    pub fn new(matrix: DMatrix<f64>) -> Result<Self> {
        if !matrix.is_square() || matrix.is_empty() {
            return Err(VlmError::Dimension(format!(
                "influence matrix must be square and non-empty, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }

        let size = matrix.nrows();
        let lu = matrix.lu();
        let pivots = lu.u().diagonal().map(f64::abs);

        let largest = pivots.iter().copied().fold(0.0, f64::max);
        let (pivot_index, smallest) = pivots
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::INFINITY), |min, (i, p)| if p < min.1 { (i, p) } else { min });
        let pivot_ratio = if largest > 0.0 { smallest / largest } else { 0.0 };

        if !(pivot_ratio >= PIVOT_RATIO_TOLERANCE) {
            return Err(VlmError::SingularSystem {
                pivot_index,
                pivot_ratio,
            });
        }

        info!(
            "Factorised {}x{} system, pivot ratio {:.3e}",
            size, size, pivot_ratio
        );
        Ok(Self { lu, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Solves `A Γ = rhs` for the circulation `Γ`.
    pub fn solve(&self, rhs: &DVector<f64>) -> Result<DVector<f64>> {
        if rhs.len() != self.size {
            return Err(VlmError::Dimension(format!(
                "right-hand side has {} entries, system has {}",
                rhs.len(),
                self.size
            )));
        }

        let solution = self.lu.solve(rhs).ok_or(VlmError::SingularSystem {
            pivot_index: 0,
            pivot_ratio: 0.0,
        })?;

        if let Some(index) = solution.iter().position(|g| !g.is_finite()) {
            return Err(VlmError::NonFiniteSolution { index });
        }
        debug!("Solved for {} circulation values", solution.len());
        Ok(solution)
    }
}

//! Horseshoe-vortex aerodynamics: influence assembly, circulation solve and loads.

pub mod biot_savart;
pub mod coefficients;
pub mod influence;
pub mod loads;
pub mod solver;

pub use coefficients::{aero_coefficients, aero_rotation, global_forces, validate_refs};
pub use influence::{assemble_influence, boundary_conditions, onset_velocity, wake_direction};
pub use loads::{induced_velocity, panel_loads};
pub use solver::{FactorizedSystem, PIVOT_RATIO_TOLERANCE};

/// How the per-panel loops of one evaluation are scheduled.
///
/// A single evaluation runs its loops on the rayon pool. Sweeps parallelise over
/// flight states and run every state serially, so only one axis is parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Parallel,
    Serial,
}

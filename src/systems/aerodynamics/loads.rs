use nalgebra::{DVector, Vector3};
use rayon::prelude::*;

use crate::components::{FlightState, Lattice, PanelResult};
use crate::resources::errors::{Result, VlmError};

use super::biot_savart::horseshoe;
use super::influence::onset_velocity;
use super::Execution;

/// Velocity induced at `point` by all horseshoe vortices weighted by `circulation`.
pub fn induced_velocity(
    lattice: &Lattice,
    circulation: &DVector<f64>,
    point: &Vector3<f64>,
    wake: &Vector3<f64>,
) -> Vector3<f64> {
    lattice
        .iter()
        .zip(circulation.iter())
        .fold(Vector3::zeros(), |sum, (vortex, gamma)| {
            sum + horseshoe(point, &vortex.bound_leg, wake) * *gamma
        })
}

fn panel_result(
    lattice: &Lattice,
    circulation: &DVector<f64>,
    state: &FlightState,
    rcenter: &Vector3<f64>,
    wake: &Vector3<f64>,
    index: usize,
) -> PanelResult {
    let panel = &lattice.panels[index];
    let gamma = circulation[index];
    let position = panel.bound_midpoint;

    let induced = induced_velocity(lattice, circulation, &position, wake);
    let total = onset_velocity(state, rcenter, &position) + induced;

    // Kutta–Joukowski
    let force = total.cross(&panel.bound_vector()) * (state.density * gamma);
    let local_pressure = 0.5 * state.density * total.norm_squared();
    let cp = force.norm() / (local_pressure * panel.area);

    PanelResult {
        position,
        circulation: gamma,
        induced_velocity: induced,
        total_velocity: total,
        force,
        cp,
        wing: panel.wing,
        mirrored: panel.mirrored,
    }
}

/// Loads of every panel from the solved circulation.
///
/// # Arguments
/// * `circulation` - One circulation value per panel, in lattice order.
/// * `rcenter` - Centre of rotation for the rate-induced velocity.
/// * `wake` - Unit direction of the trailing legs.
pub fn panel_loads(
    lattice: &Lattice,
    circulation: &DVector<f64>,
    state: &FlightState,
    rcenter: &Vector3<f64>,
    wake: &Vector3<f64>,
    execution: Execution,
) -> Result<Vec<PanelResult>> {
    if circulation.len() != lattice.len() {
        return Err(VlmError::Dimension(format!(
            "{} circulation values for {} panels",
            circulation.len(),
            lattice.len()
        )));
    }

    let result = |index| panel_result(lattice, circulation, state, rcenter, wake, index);
    Ok(match execution {
        Execution::Parallel => (0..lattice.len()).into_par_iter().map(result).collect(),
        Execution::Serial => (0..lattice.len()).map(result).collect(),
    })
}

use nalgebra::{DMatrix, DVector, Vector3};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::components::{FlightState, Lattice, Panel};
use crate::resources::config::WakeAlignment;
use crate::resources::errors::{Result, VlmError};

use super::biot_savart::horseshoe;
use super::Execution;

/// Unit direction of the trailing legs for a flight state.
pub fn wake_direction(alignment: WakeAlignment, state: &FlightState) -> Vector3<f64> {
    match alignment {
        WakeAlignment::BodyAxis => Vector3::x(),
        WakeAlignment::Freestream => state.freestream_direction(),
    }
}

/// Normal velocity induced at the control points of `panels` by the unit horseshoe
/// vortex of `vortex`.
fn fill_column(column: &mut [f64], panels: &[Panel], vortex: &Panel, wake: &Vector3<f64>) {
    for (cell, panel) in column.iter_mut().zip(panels) {
        *cell = horseshoe(&panel.control_point, &vortex.bound_leg, wake).dot(&panel.normal);
    }
}

/// Assembles the influence matrix `A`, where `A[(i, j)]` is the normal velocity at
/// the control point of panel `i` induced by the unit horseshoe vortex of panel `j`.
///
/// Columns are independent and filled in place in the column-major storage.
pub fn assemble_influence(
    lattice: &Lattice,
    wake: &Vector3<f64>,
    execution: Execution,
) -> Result<DMatrix<f64>> {
    let n = lattice.len();
    if n == 0 {
        return Err(VlmError::Dimension(
            "cannot assemble an influence matrix for an empty lattice".to_string(),
        ));
    }

    let panels = &lattice.panels;
    let mut data = vec![0.0; n * n];
    match execution {
        Execution::Parallel => data
            .par_chunks_mut(n)
            .zip(panels.par_iter())
            .for_each(|(column, vortex)| fill_column(column, panels, vortex, wake)),
        Execution::Serial => data
            .chunks_mut(n)
            .zip(panels.iter())
            .for_each(|(column, vortex)| fill_column(column, panels, vortex, wake)),
    }

    if let Some(position) = data.iter().position(|v| !v.is_finite()) {
        return Err(VlmError::NonFiniteInfluence {
            row: position % n,
            column: position / n,
        });
    }

    info!("Assembled {}x{} influence matrix", n, n);
    Ok(DMatrix::from_vec(n, n, data))
}

/// Onset velocity at a body point: freestream plus `Ω × r`, with `r` the position
/// relative to `rcenter`.
pub fn onset_velocity(
    state: &FlightState,
    rcenter: &Vector3<f64>,
    position: &Vector3<f64>,
) -> Vector3<f64> {
    state.freestream_velocity() + state.rotation_rates().cross(&(position - rcenter))
}

/// Right-hand side `b_i = -(V∞ + Ω × r_i) · n_i` of the flow-tangency system.
pub fn boundary_conditions(
    lattice: &Lattice,
    state: &FlightState,
    rcenter: &Vector3<f64>,
) -> Result<DVector<f64>> {
    let rhs = DVector::from_iterator(
        lattice.len(),
        lattice
            .iter()
            .map(|p| -onset_velocity(state, rcenter, &p.control_point).dot(&p.normal)),
    );

    if let Some(index) = rhs.iter().position(|v| !v.is_finite()) {
        return Err(VlmError::NonFiniteBoundary { index });
    }
    debug!("Boundary conditions for {} panels", rhs.len());
    Ok(rhs)
}

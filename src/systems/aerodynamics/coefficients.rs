use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;

use crate::components::{AeroCoefficients, FlightState, GlobalForces, PanelResult, ReferenceValues};
use crate::resources::errors::{Result, VlmError};

use super::Execution;

/// Checks that the reference values can normalise forces and moments.
pub fn validate_refs(refs: &ReferenceValues) -> Result<()> {
    for (name, value) in [
        ("area", refs.area),
        ("span", refs.span),
        ("chord", refs.chord),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(VlmError::InvalidReference { name, value });
        }
    }
    for (name, point) in [("gcenter", refs.gcenter), ("rcenter", refs.rcenter)] {
        if let Some(value) = point.iter().copied().find(|v| !v.is_finite()) {
            return Err(VlmError::InvalidReference { name, value });
        }
    }
    Ok(())
}

/// Rotation from body axes into aerodynamic axes `[drag, side, lift]`.
pub fn aero_rotation(alpha: f64, beta: f64) -> Matrix3<f64> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    Matrix3::new(
        cb * ca, -sb, cb * sa, //
        sb * ca, cb, sb * sa, //
        -sa, 0.0, ca,
    )
}

/// Sums panel forces and their moments about `rcenter`, then projects the force
/// into aerodynamic axes.
pub fn global_forces(
    panels: &[PanelResult],
    state: &FlightState,
    rcenter: &Vector3<f64>,
    execution: Execution,
) -> GlobalForces {
    let load = |p: &PanelResult| (p.force, (p.position - rcenter).cross(&p.force));
    let add = |a: (Vector3<f64>, Vector3<f64>), b: (Vector3<f64>, Vector3<f64>)| {
        (a.0 + b.0, a.1 + b.1)
    };
    let zero = (Vector3::zeros(), Vector3::zeros());

    let (force, moment) = match execution {
        Execution::Parallel => panels.par_iter().map(load).reduce(|| zero, add),
        Execution::Serial => panels.iter().map(load).fold(zero, add),
    };
    let aero = aero_rotation(state.alpha_rad(), state.beta_rad()) * force;

    GlobalForces {
        force,
        moment,
        drag: aero.x,
        side: aero.y,
        lift: aero.z,
    }
}

/// Normalises global forces with `q S` and moments with `q S b` (roll, yaw) or
/// `q S c` (pitch).
pub fn aero_coefficients(
    forces: &GlobalForces,
    state: &FlightState,
    refs: &ReferenceValues,
) -> Result<AeroCoefficients> {
    validate_refs(refs)?;
    let q = state.dynamic_pressure();
    if !q.is_finite() || q <= 0.0 {
        return Err(VlmError::InvalidState(format!(
            "dynamic pressure must be positive, got {}",
            q
        )));
    }

    let qs = q * refs.area;
    Ok(AeroCoefficients {
        c_x: forces.force.x / qs,
        c_y: forces.force.y / qs,
        c_z: forces.force.z / qs,
        c_drag: forces.drag / qs,
        c_side: forces.side / qs,
        c_lift: forces.lift / qs,
        c_roll: forces.moment.x / (qs * refs.span),
        c_pitch: forces.moment.y / (qs * refs.chord),
        c_yaw: forces.moment.z / (qs * refs.span),
    })
}

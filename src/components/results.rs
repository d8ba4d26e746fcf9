use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::flight_state::FlightState;

/// Loads of one panel in body axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelResult {
    /// Bound-leg midpoint where the force acts.
    pub position: Vector3<f64>,
    pub circulation: f64,
    /// Velocity induced by all horseshoe vortices.
    pub induced_velocity: Vector3<f64>,
    /// Freestream, rotation and induced velocity.
    pub total_velocity: Vector3<f64>,
    pub force: Vector3<f64>,
    /// Pressure coefficient `|F| / (½ρ|V|² A)` with the local velocity.
    pub cp: f64,
    /// Index of the wing in the resolved aircraft.
    pub wing: usize,
    /// Whether the panel lies on the mirrored half of a symmetric wing.
    pub mirrored: bool,
}

/// Summed loads about the rotation centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalForces {
    /// Body-axis force `[F_x, F_y, F_z]` (N).
    pub force: Vector3<f64>,
    /// Body-axis moment `[M_x, M_y, M_z]` about `rcenter` (N·m).
    pub moment: Vector3<f64>,
    pub drag: f64,
    pub side: f64,
    pub lift: f64,
}

/// Non-dimensional force and moment coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub c_x: f64,
    pub c_y: f64,
    pub c_z: f64,
    pub c_drag: f64,
    pub c_side: f64,
    pub c_lift: f64,
    /// Rolling moment, normalised with the reference span.
    pub c_roll: f64,
    /// Pitching moment, normalised with the reference chord.
    pub c_pitch: f64,
    /// Yawing moment, normalised with the reference span.
    pub c_yaw: f64,
}

/// Outcome of one flight-state evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroResults {
    pub state: FlightState,
    pub panels: Vec<PanelResult>,
    pub forces: GlobalForces,
    pub coefficients: AeroCoefficients,
}

impl AeroResults {
    pub fn circulation(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.circulation).collect()
    }

    /// Panels of one side of one wing, in lattice order.
    pub fn wing_panels(&self, wing: usize, mirrored: bool) -> impl Iterator<Item = &PanelResult> {
        self.panels
            .iter()
            .filter(move |p| p.wing == wing && p.mirrored == mirrored)
    }

    /// Summed body-axis force of one side of one wing.
    pub fn wing_force(&self, wing: usize, mirrored: bool) -> Vector3<f64> {
        self.wing_panels(wing, mirrored).map(|p| p.force).sum()
    }
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One quadrilateral panel carrying a horseshoe vortex.
///
/// Vertices follow the segment convention: A inner leading edge, B outer leading
/// edge, C outer trailing edge, D inner trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub vertices: [Vector3<f64>; 4],
    /// Bound vortex from the inner (P1) to the outer (P2) quarter-chord point.
    pub bound_leg: [Vector3<f64>; 2],
    /// Three-quarter-chord midpoint where flow tangency is enforced.
    pub control_point: Vector3<f64>,
    /// Midpoint of the bound leg where the panel force acts.
    pub bound_midpoint: Vector3<f64>,
    /// Unit normal, rotated for camber and control deflection.
    pub normal: Vector3<f64>,
    pub area: f64,
    /// Index of the wing in the resolved aircraft.
    pub wing: usize,
    /// Index of the segment within its wing.
    pub segment: usize,
    /// Index of the strip within its segment.
    pub strip: usize,
    /// Index of the control (within its wing) this panel belongs to.
    pub control: Option<usize>,
    pub mirrored: bool,
}

impl Panel {
    /// Bound-leg vector `P2 - P1`.
    pub fn bound_vector(&self) -> Vector3<f64> {
        self.bound_leg[1] - self.bound_leg[0]
    }
}

/// Flat, ordered collection of panels. Panel indices are the row and column
/// indices of the influence matrix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lattice {
    pub panels: Vec<Panel>,
}

impl Lattice {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// Total planform area of all panels.
    pub fn area(&self) -> f64 {
        self.panels.iter().map(|p| p.area).sum()
    }
}

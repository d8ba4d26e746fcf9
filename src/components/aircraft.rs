use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{control::WingControl, segment::WingSegment};

/// Reference values used to normalise forces and moments into coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceValues {
    /// Reference area S (m²).
    pub area: f64,
    /// Reference span b (m), used for roll and yaw moments.
    pub span: f64,
    /// Reference chord c (m), used for the pitch moment.
    pub chord: f64,
    /// Centre of gravity (m).
    pub gcenter: Vector3<f64>,
    /// Centre of rotation for rates and moments (m).
    pub rcenter: Vector3<f64>,
}

impl ReferenceValues {
    pub fn new(area: f64, span: f64, chord: f64) -> Self {
        Self {
            area,
            span,
            chord,
            gcenter: Vector3::zeros(),
            rcenter: Vector3::zeros(),
        }
    }
}

/// Mirror plane of a symmetric wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symmetry {
    None,
    /// Mirror about the X-Y plane (z → -z).
    XY,
    /// Mirror about the X-Z plane (y → -y), the usual left/right wing pair.
    XZ,
    /// Mirror about the Y-Z plane (x → -x).
    YZ,
}

impl Symmetry {
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Symmetry::None),
            1 => Some(Symmetry::XY),
            2 => Some(Symmetry::XZ),
            3 => Some(Symmetry::YZ),
            _ => None,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        *self != Symmetry::None
    }

    /// Reflects a point about the mirror plane.
    pub fn mirror_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Symmetry::None => *point,
            Symmetry::XY => Vector3::new(point.x, point.y, -point.z),
            Symmetry::XZ => Vector3::new(point.x, -point.y, point.z),
            Symmetry::YZ => Vector3::new(-point.x, point.y, point.z),
        }
    }

    /// Reflects a quadrilateral `[a, b, c, d]` and restores the vertex order so that
    /// the leading edge still runs a → b and the chord a → d.
    pub fn mirror_quad(&self, quad: &[Vector3<f64>; 4]) -> [Vector3<f64>; 4] {
        let [a, b, c, d] = quad.map(|p| self.mirror_point(&p));
        match self {
            Symmetry::None | Symmetry::XY => [a, b, c, d],
            Symmetry::XZ => [b, a, d, c],
            Symmetry::YZ => [d, c, b, a],
        }
    }
}

/// A lifting surface made of spanwise-ordered segments and optional control surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wing {
    pub uid: String,
    /// Symmetry flag: 0 none, 1 X-Y plane, 2 X-Z plane, 3 Y-Z plane.
    pub symmetry: i64,
    pub segments: Vec<WingSegment>,
    #[serde(default)]
    pub controls: Vec<WingControl>,
}

impl Wing {
    pub fn new(uid: impl Into<String>, symmetry: i64) -> Self {
        Self {
            uid: uid.into(),
            symmetry,
            segments: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn with_segment(mut self, segment: WingSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_control(mut self, control: WingControl) -> Self {
        self.controls.push(control);
        self
    }
}

/// Root of the geometry model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub uid: String,
    pub wings: Vec<Wing>,
    pub refs: ReferenceValues,
}

impl Aircraft {
    pub fn new(uid: impl Into<String>, refs: ReferenceValues) -> Self {
        Self {
            uid: uid.into(),
            wings: Vec::new(),
            refs,
        }
    }

    pub fn with_wing(mut self, wing: Wing) -> Self {
        self.wings.push(wing);
        self
    }
}

use nalgebra::Vector3;
use tracing::debug;

use crate::components::{Camber, PanelDensity, SegmentGeometry, WingSegment};
use crate::resources::errors::{Result, VlmError};

const DEFAULT_AXIS: f64 = 0.25;
const VALID_VERTEX_SETS: [&str; 7] = ["a", "b", "c", "d", "ad", "bc", "abcd"];

/// Segment with concrete corner coordinates and evaluable camber lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSegment {
    pub uid: String,
    /// Corners `[A, B, C, D]`.
    pub vertices: [Vector3<f64>; 4],
    pub inner_chord: f64,
    pub outer_chord: f64,
    /// Leading-edge span projected onto the y-z plane.
    pub span: f64,
    pub area: f64,
    pub inner_camber: Camber,
    pub outer_camber: Camber,
    pub panels: PanelDensity,
}

impl ResolvedSegment {
    pub fn mean_chord(&self) -> f64 {
        0.5 * (self.inner_chord + self.outer_chord)
    }

    /// Point at spanwise fraction `eta` and chordwise fraction `xsi`.
    pub fn point(&self, eta: f64, xsi: f64) -> Vector3<f64> {
        let [a, b, c, d] = self.vertices;
        let leading = a + (b - a) * eta;
        let trailing = d + (c - d) * eta;
        leading + (trailing - leading) * xsi
    }

    /// Camber slope at `(eta, xsi)`, interpolated linearly between the inner and
    /// outer airfoil.
    pub fn camber_slope(&self, eta: f64, xsi: f64) -> f64 {
        let inner = self.inner_camber.slope(xsi);
        let outer = self.outer_camber.slope(xsi);
        inner + (outer - inner) * eta
    }
}

/// Chord edge (A→D or B→C) built from chord length, incidence and yaw.
struct ChordEdge {
    /// Edge vector from the leading to the trailing point.
    vector: Vector3<f64>,
    /// Chord length projected onto the x-y plane.
    planar: f64,
    cos_beta: f64,
    sin_beta: f64,
    tan_alpha: f64,
}

impl ChordEdge {
    fn from_geometry(chord: f64, alpha_deg: f64, beta_deg: f64) -> Self {
        let tan_alpha = alpha_deg.to_radians().tan();
        let (sin_beta, cos_beta) = beta_deg.to_radians().sin_cos();
        let planar = chord / (1.0 + tan_alpha * tan_alpha * cos_beta * cos_beta).sqrt();

        Self {
            vector: Vector3::new(
                planar * cos_beta,
                planar * sin_beta,
                -planar * cos_beta * tan_alpha,
            ),
            planar,
            cos_beta,
            sin_beta,
            tan_alpha,
        }
    }

    fn from_points(uid: &str, leading: Vector3<f64>, trailing: Vector3<f64>) -> Result<Self> {
        let vector = trailing - leading;
        let planar = vector.x.hypot(vector.y);
        if planar <= f64::EPSILON {
            return Err(VlmError::config(
                uid,
                "chord edge has no extent in the x-y plane",
            ));
        }

        let cos_beta = vector.x / planar;
        let sin_beta = vector.y / planar;
        let alpha = -(vector.z).atan2(planar * cos_beta);

        Ok(Self {
            vector,
            planar,
            cos_beta,
            sin_beta,
            tan_alpha: alpha.tan(),
        })
    }

    /// y-z offset of the leading point relative to the axis point at `axis` chord fraction.
    fn axis_offset(&self, axis: f64) -> (f64, f64) {
        (
            self.planar * axis * self.sin_beta,
            self.planar * axis * self.cos_beta * self.tan_alpha,
        )
    }
}

fn check_range(
    uid: &str,
    name: &str,
    value: Option<f64>,
    valid: impl Fn(f64) -> bool,
    range: &str,
) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || !valid(v) => Err(VlmError::config(
            uid,
            format!("'{}' = {} must be within {}", name, v, range),
        )),
        _ => Ok(()),
    }
}

fn check_geometry(uid: &str, geometry: &SegmentGeometry) -> Result<()> {
    let angle = |v: f64| (-90.0..=90.0).contains(&v);
    let fraction = |v: f64| (0.0..=1.0).contains(&v);
    let finite = |_: f64| true;

    check_range(uid, "inner_chord", geometry.inner_chord, finite, "the finite numbers")?;
    check_range(uid, "outer_chord", geometry.outer_chord, finite, "the finite numbers")?;
    check_range(uid, "span", geometry.span, finite, "the finite numbers")?;
    check_range(uid, "inner_alpha", geometry.inner_alpha, angle, "[-90, 90] deg")?;
    check_range(uid, "outer_alpha", geometry.outer_alpha, angle, "[-90, 90] deg")?;
    check_range(uid, "inner_beta", geometry.inner_beta, angle, "[-90, 90] deg")?;
    check_range(uid, "outer_beta", geometry.outer_beta, angle, "[-90, 90] deg")?;
    check_range(uid, "inner_axis", geometry.inner_axis, fraction, "[0, 1]")?;
    check_range(uid, "outer_axis", geometry.outer_axis, fraction, "[0, 1]")?;
    check_range(uid, "sweep", geometry.sweep, |v| v > -90.0 && v < 90.0, "(-90, 90) deg")?;
    check_range(
        uid,
        "dihedral",
        geometry.dihedral,
        |v| v > -180.0 && v <= 180.0,
        "(-180, 180] deg",
    )
}

fn required(uid: &str, name: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| VlmError::config(uid, format!("'{}' is not defined", name)))
}

/// Builds the four corners from the provided vertices and attributes.
fn build_vertices(segment: &WingSegment, provided: &str) -> Result<[Vector3<f64>; 4]> {
    let uid = segment.uid.as_str();
    let geometry = &segment.geometry;
    let v = &segment.vertices;

    let inner = match (provided, v.a, v.d) {
        ("ad", Some(a), Some(d)) => ChordEdge::from_points(uid, a, d)?,
        _ => ChordEdge::from_geometry(
            required(uid, "inner_chord", geometry.inner_chord)?,
            required(uid, "inner_alpha", geometry.inner_alpha)?,
            required(uid, "inner_beta", geometry.inner_beta)?,
        ),
    };
    let outer = match (provided, v.b, v.c) {
        ("bc", Some(b), Some(c)) => ChordEdge::from_points(uid, b, c)?,
        _ => ChordEdge::from_geometry(
            required(uid, "outer_chord", geometry.outer_chord)?,
            required(uid, "outer_alpha", geometry.outer_alpha)?,
            required(uid, "outer_beta", geometry.outer_beta)?,
        ),
    };

    let span = required(uid, "span", geometry.span)?;
    let sweep = required(uid, "sweep", geometry.sweep)?;
    let dihedral = required(uid, "dihedral", geometry.dihedral)?;
    if span == 0.0 {
        return Err(VlmError::config(uid, "'span' must be non-zero"));
    }

    let (axi_y, axi_z) = inner.axis_offset(geometry.inner_axis.unwrap_or(DEFAULT_AXIS));
    let (axo_y, axo_z) = outer.axis_offset(geometry.outer_axis.unwrap_or(DEFAULT_AXIS));
    let (axs_y, axs_z) = (axo_y - axi_y, axo_z - axi_z);

    let (sin_d, cos_d) = dihedral.to_radians().sin_cos();
    let axis_ratio = (axs_z * cos_d - axs_y * sin_d) / span;
    if axis_ratio.abs() > 1.0 {
        return Err(VlmError::config(
            uid,
            "twist-axis offset between inner and outer chord exceeds the span",
        ));
    }
    let dihedral_le = dihedral.to_radians() - axis_ratio.asin();

    // Relative to A.
    let a = Vector3::zeros();
    let d = inner.vector;
    let b = Vector3::new(
        span * sweep.to_radians().tan(),
        span * dihedral_le.cos(),
        span * dihedral_le.sin(),
    );
    let c = b + outer.vector;
    let relative = [a, b, c, d];

    // The first provided vertex anchors the segment.
    let (anchor_index, anchor) = [v.a, v.b, v.c, v.d]
        .iter()
        .enumerate()
        .find_map(|(i, p)| p.map(|p| (i, p)))
        .ok_or_else(|| VlmError::config(uid, "no reference point provided"))?;
    let shift = anchor - relative[anchor_index];
    let [mut a, mut b, mut c, mut d] = relative.map(|p| p + shift);

    let inner_chord = geometry.inner_chord.unwrap_or(1.0);
    let outer_chord = geometry.outer_chord.unwrap_or(1.0);

    // Restore the spanwise and chordwise orientation.
    if span < 0.0 {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut c, &mut d);
    }
    if dihedral.abs() > 90.0 {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut c, &mut d);
    }
    if inner_chord < 0.0 {
        std::mem::swap(&mut a, &mut d);
    }
    if outer_chord < 0.0 {
        std::mem::swap(&mut b, &mut c);
    }

    Ok([a, b, c, d])
}

/// Converts a user segment into its resolved form.
///
/// Accepted inputs are all four vertices, A and D with the outer and spanwise
/// attributes, B and C with the inner and spanwise attributes, or a single vertex
/// with all attributes.
pub fn resolve_segment(segment: &WingSegment) -> Result<ResolvedSegment> {
    let uid = segment.uid.as_str();
    check_geometry(uid, &segment.geometry)?;

    for (name, vertex) in [
        ("a", segment.vertices.a),
        ("b", segment.vertices.b),
        ("c", segment.vertices.c),
        ("d", segment.vertices.d),
    ] {
        if let Some(p) = vertex {
            if p.iter().any(|v| !v.is_finite()) {
                return Err(VlmError::config(
                    uid,
                    format!("vertex '{}' has non-finite coordinates", name),
                ));
            }
        }
    }

    let provided = segment.vertices.provided();
    if provided.is_empty() {
        return Err(VlmError::config(uid, "no reference point provided"));
    }
    if !VALID_VERTEX_SETS.contains(&provided.as_str()) {
        return Err(VlmError::config(
            uid,
            format!("unsupported vertex combination '{}'", provided),
        ));
    }
    if !segment
        .geometry
        .supported_vertex_sets()
        .contains(&provided.as_str())
    {
        return Err(VlmError::config(
            uid,
            format!(
                "geometric attributes are insufficient for vertex combination '{}'",
                provided
            ),
        ));
    }

    for (name, count) in [
        ("num_spanwise", segment.panels.num_spanwise),
        ("num_chordwise", segment.panels.num_chordwise),
    ] {
        if count == Some(0) {
            return Err(VlmError::config(uid, format!("'{}' must be positive", name)));
        }
    }

    let vertices = match (
        segment.vertices.a,
        segment.vertices.b,
        segment.vertices.c,
        segment.vertices.d,
    ) {
        (Some(a), Some(b), Some(c), Some(d)) => [a, b, c, d],
        _ => build_vertices(segment, &provided)?,
    };
    let [a, b, c, d] = vertices;

    let inner_chord = (d - a).norm();
    let outer_chord = (c - b).norm();
    let le = b - a;
    let span = le.y.hypot(le.z);
    let area = 0.5 * (c - a).cross(&(b - d)).norm();

    if inner_chord <= 0.0 || outer_chord <= 0.0 || span <= 0.0 || area <= 0.0 || !area.is_finite()
    {
        return Err(VlmError::config(uid, "segment quadrilateral is degenerate"));
    }

    let inner_camber = segment
        .airfoils
        .inner
        .camber()
        .map_err(|message| VlmError::config(uid, format!("inner airfoil: {}", message)))?;
    let outer_camber = segment
        .airfoils
        .outer
        .camber()
        .map_err(|message| VlmError::config(uid, format!("outer airfoil: {}", message)))?;

    debug!(
        "Segment '{}' ({}): A={:?} B={:?} C={:?} D={:?}",
        uid,
        provided,
        a.as_slice(),
        b.as_slice(),
        c.as_slice(),
        d.as_slice()
    );

    Ok(ResolvedSegment {
        uid: segment.uid.clone(),
        vertices,
        inner_chord,
        outer_chord,
        span,
        area,
        inner_camber,
        outer_camber,
        panels: segment.panels,
    })
}

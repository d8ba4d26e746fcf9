use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::airfoil::Airfoil;

/// Corner vertices of a segment as provided by the user.
///
/// A is the inner leading edge, B the outer leading edge, C the outer trailing
/// edge and D the inner trailing edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentVertices {
    pub a: Option<Vector3<f64>>,
    pub b: Option<Vector3<f64>>,
    pub c: Option<Vector3<f64>>,
    pub d: Option<Vector3<f64>>,
}

impl SegmentVertices {
    /// Letters of the provided vertices in alphabetical order, e.g. `"ad"`.
    pub fn provided(&self) -> String {
        [('a', &self.a), ('b', &self.b), ('c', &self.c), ('d', &self.d)]
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Geometric attributes of a segment. Angles in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentGeometry {
    pub inner_chord: Option<f64>,
    /// Incidence of the inner chord, positive nose up.
    pub inner_alpha: Option<f64>,
    /// Yaw of the inner chord.
    pub inner_beta: Option<f64>,
    /// Chord fraction of the dihedral axis at the inner edge (default 0.25).
    pub inner_axis: Option<f64>,
    pub outer_chord: Option<f64>,
    pub outer_alpha: Option<f64>,
    pub outer_beta: Option<f64>,
    pub outer_axis: Option<f64>,
    /// Span measured at the leading edge, normal to the x-axis.
    pub span: Option<f64>,
    /// Leading-edge sweep.
    pub sweep: Option<f64>,
    /// Dihedral about the twist axis.
    pub dihedral: Option<f64>,
}

impl SegmentGeometry {
    fn inner_complete(&self) -> bool {
        self.inner_chord.is_some() && self.inner_alpha.is_some() && self.inner_beta.is_some()
    }

    fn outer_complete(&self) -> bool {
        self.outer_chord.is_some() && self.outer_alpha.is_some() && self.outer_beta.is_some()
    }

    fn spanwise_complete(&self) -> bool {
        self.span.is_some() && self.sweep.is_some() && self.dihedral.is_some()
    }

    /// Vertex combinations that these attributes are sufficient for.
    pub fn supported_vertex_sets(&self) -> &'static [&'static str] {
        let inner = self.inner_complete();
        let outer = self.outer_complete();
        let spanwise = self.spanwise_complete();

        match (inner, outer, spanwise) {
            (true, true, true) => &["a", "b", "c", "d", "ad", "bc", "abcd"],
            (false, true, true) => &["ad", "abcd"],
            (true, false, true) => &["bc", "abcd"],
            _ => &["abcd"],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentAirfoils {
    pub inner: Airfoil,
    pub outer: Airfoil,
}

/// Explicit panel counts. Missing counts are chosen automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDensity {
    pub num_spanwise: Option<usize>,
    pub num_chordwise: Option<usize>,
}

/// Quadrilateral piece of a wing, described by vertices and/or geometric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingSegment {
    pub uid: String,
    #[serde(default)]
    pub vertices: SegmentVertices,
    #[serde(default)]
    pub geometry: SegmentGeometry,
    #[serde(default)]
    pub airfoils: SegmentAirfoils,
    #[serde(default)]
    pub panels: PanelDensity,
}

impl WingSegment {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            vertices: SegmentVertices::default(),
            geometry: SegmentGeometry::default(),
            airfoils: SegmentAirfoils::default(),
            panels: PanelDensity::default(),
        }
    }

    /// Segment given by all four corners.
    pub fn from_vertices(
        uid: impl Into<String>,
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
        d: Vector3<f64>,
    ) -> Self {
        let mut segment = Self::new(uid);
        segment.vertices = SegmentVertices {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            d: Some(d),
        };
        segment
    }

    /// Flat rectangular panel with its inner leading edge at `root`, extending
    /// along +y.
    pub fn rectangle(uid: impl Into<String>, root: Vector3<f64>, span: f64, chord: f64) -> Self {
        Self::from_vertices(
            uid,
            root,
            root + Vector3::new(0.0, span, 0.0),
            root + Vector3::new(chord, span, 0.0),
            root + Vector3::new(chord, 0.0, 0.0),
        )
    }

    pub fn with_panels(mut self, num_spanwise: usize, num_chordwise: usize) -> Self {
        self.panels = PanelDensity {
            num_spanwise: Some(num_spanwise),
            num_chordwise: Some(num_chordwise),
        };
        self
    }

    pub fn with_airfoils(mut self, inner: Airfoil, outer: Airfoil) -> Self {
        self.airfoils = SegmentAirfoils { inner, outer };
        self
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Trailing-edge device spanning `[xsi, 1]` of the chord.
    Flap,
    /// Leading-edge device spanning `[0, xsi]` of the chord.
    Slat,
}

/// Control surface bound to a contiguous run of segments of one wing.
///
/// Positions are relative: `eta` is the spanwise fraction within the referenced
/// segment, `xsi` the chordwise fraction. For a flap `xsi` marks its leading edge,
/// for a slat its trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingControl {
    pub uid: String,
    pub device: DeviceType,
    pub segment_inner: String,
    pub segment_outer: String,
    pub eta_inner: f64,
    pub eta_outer: f64,
    pub xsi_inner: f64,
    pub xsi_outer: f64,
    #[serde(default)]
    pub hinge_xsi_inner: Option<f64>,
    #[serde(default)]
    pub hinge_xsi_outer: Option<f64>,
    /// Deflection (deg), trailing edge down positive.
    pub deflection: f64,
    /// Deflection of the mirrored device on a symmetric wing (deg).
    #[serde(default)]
    pub deflection_mirror: Option<f64>,
    #[serde(default)]
    pub num_chordwise: Option<usize>,
}

impl WingControl {
    /// Flap over `[eta_inner, eta_outer]` of a single segment with a constant
    /// chord fraction.
    pub fn flap(
        uid: impl Into<String>,
        segment: impl Into<String>,
        eta: (f64, f64),
        xsi: f64,
        deflection: f64,
    ) -> Self {
        let segment = segment.into();
        Self {
            uid: uid.into(),
            device: DeviceType::Flap,
            segment_inner: segment.clone(),
            segment_outer: segment,
            eta_inner: eta.0,
            eta_outer: eta.1,
            xsi_inner: xsi,
            xsi_outer: xsi,
            hinge_xsi_inner: None,
            hinge_xsi_outer: None,
            deflection,
            deflection_mirror: None,
            num_chordwise: None,
        }
    }

    pub fn slat(
        uid: impl Into<String>,
        segment: impl Into<String>,
        eta: (f64, f64),
        xsi: f64,
        deflection: f64,
    ) -> Self {
        Self {
            device: DeviceType::Slat,
            ..Self::flap(uid, segment, eta, xsi, deflection)
        }
    }

    pub fn with_segments(mut self, inner: impl Into<String>, outer: impl Into<String>) -> Self {
        self.segment_inner = inner.into();
        self.segment_outer = outer.into();
        self
    }

    pub fn with_mirror_deflection(mut self, deflection: f64) -> Self {
        self.deflection_mirror = Some(deflection);
        self
    }

    pub fn with_hinge(mut self, inner: f64, outer: f64) -> Self {
        self.hinge_xsi_inner = Some(inner);
        self.hinge_xsi_outer = Some(outer);
        self
    }

    pub fn with_chordwise_panels(mut self, panels: usize) -> Self {
        self.num_chordwise = Some(panels);
        self
    }
}

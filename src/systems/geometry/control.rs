use tracing::warn;

use crate::components::{DeviceType, Symmetry, WingControl};
use crate::resources::errors::{Result, VlmError};

use super::segment::ResolvedSegment;

/// Smallest chordwise gap between a slat and a flap on the same strip.
pub const MIN_XSI_SPACING: f64 = 0.01;
const MAX_DEFLECTION_DEG: f64 = 90.0;

/// Control surface with segment references resolved to indices.
///
/// Chord and hinge fractions vary linearly with the wing station between the
/// inner and outer end of the device. Deflections are in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedControl {
    pub uid: String,
    pub device: DeviceType,
    pub segment_inner: usize,
    pub segment_outer: usize,
    pub eta_inner: f64,
    pub eta_outer: f64,
    pub xsi_inner: f64,
    pub xsi_outer: f64,
    pub hinge_inner: f64,
    pub hinge_outer: f64,
    pub deflection: f64,
    pub deflection_mirror: f64,
    pub num_chordwise: Option<usize>,
    /// Wing stations of the inner and outer device edge.
    pub station_inner: f64,
    pub station_outer: f64,
}

impl ResolvedControl {
    /// Spanwise range `[eta0, eta1]` covered on `segment`, if any.
    pub fn eta_range(&self, segment: usize) -> Option<(f64, f64)> {
        if segment < self.segment_inner || segment > self.segment_outer {
            return None;
        }
        let eta0 = if segment == self.segment_inner { self.eta_inner } else { 0.0 };
        let eta1 = if segment == self.segment_outer { self.eta_outer } else { 1.0 };
        (eta1 > eta0).then(|| (eta0, eta1))
    }

    fn fraction(&self, station: f64) -> f64 {
        ((station - self.station_inner) / (self.station_outer - self.station_inner)).clamp(0.0, 1.0)
    }

    /// Chord fraction of the device edge at a wing station.
    pub fn xsi_at(&self, station: f64) -> f64 {
        let t = self.fraction(station);
        self.xsi_inner + (self.xsi_outer - self.xsi_inner) * t
    }

    /// Chord fraction of the hinge line at a wing station.
    pub fn hinge_at(&self, station: f64) -> f64 {
        let t = self.fraction(station);
        self.hinge_inner + (self.hinge_outer - self.hinge_inner) * t
    }

    pub fn deflection_for(&self, mirrored: bool) -> f64 {
        if mirrored {
            self.deflection_mirror
        } else {
            self.deflection
        }
    }
}

fn segment_index(
    wing: &str,
    control: &str,
    segments: &[ResolvedSegment],
    uid: &str,
) -> Result<usize> {
    segments.iter().position(|s| s.uid == uid).ok_or_else(|| {
        VlmError::config(
            control,
            format!("segment '{}' not found on wing '{}'", uid, wing),
        )
    })
}

fn check_deflection(uid: &str, name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value.abs() > MAX_DEFLECTION_DEG {
        return Err(VlmError::config(
            uid,
            format!("'{}' = {} must be within [-90, 90] deg", name, value),
        ));
    }
    Ok(())
}

/// Validates a control of a wing and binds it to the wing's segments.
///
/// `stations` holds the wing station of the inner edge of each segment.
pub fn resolve_control(
    wing: &str,
    symmetry: Symmetry,
    segments: &[ResolvedSegment],
    stations: &[f64],
    control: &WingControl,
) -> Result<ResolvedControl> {
    let uid = control.uid.as_str();
    let segment_inner = segment_index(wing, uid, segments, &control.segment_inner)?;
    let segment_outer = segment_index(wing, uid, segments, &control.segment_outer)?;

    if segment_inner > segment_outer {
        return Err(VlmError::config(
            uid,
            format!(
                "inner segment '{}' lies outboard of outer segment '{}'",
                control.segment_inner, control.segment_outer
            ),
        ));
    }

    for (name, eta) in [("eta_inner", control.eta_inner), ("eta_outer", control.eta_outer)] {
        if !(0.0..=1.0).contains(&eta) {
            return Err(VlmError::config(
                uid,
                format!("'{}' = {} must be within [0, 1]", name, eta),
            ));
        }
    }
    for (name, xsi) in [("xsi_inner", control.xsi_inner), ("xsi_outer", control.xsi_outer)] {
        if !(xsi > 0.0 && xsi < 1.0) {
            return Err(VlmError::config(
                uid,
                format!("'{}' = {} must be within (0, 1)", name, xsi),
            ));
        }
    }

    let station = |segment: usize, eta: f64| stations[segment] + eta * segments[segment].span;
    let station_inner = station(segment_inner, control.eta_inner);
    let station_outer = station(segment_outer, control.eta_outer);
    if station_outer <= station_inner {
        return Err(VlmError::config(
            uid,
            "outer edge must lie outboard of the inner edge",
        ));
    }

    let hinge_inner = control.hinge_xsi_inner.unwrap_or_else(|| {
        warn!("Control '{}': inner hinge position not set, using 'xsi_inner'", uid);
        control.xsi_inner
    });
    let hinge_outer = control.hinge_xsi_outer.unwrap_or_else(|| {
        warn!("Control '{}': outer hinge position not set, using 'xsi_outer'", uid);
        control.xsi_outer
    });
    for (name, xsi) in [("hinge_xsi_inner", hinge_inner), ("hinge_xsi_outer", hinge_outer)] {
        if !(0.0..=1.0).contains(&xsi) {
            return Err(VlmError::config(
                uid,
                format!("'{}' = {} must be within [0, 1]", name, xsi),
            ));
        }
    }

    check_deflection(uid, "deflection", control.deflection)?;
    let deflection_mirror = match (control.deflection_mirror, symmetry.is_mirrored()) {
        (Some(mirror), true) => {
            check_deflection(uid, "deflection_mirror", mirror)?;
            mirror
        }
        (None, true) => {
            warn!(
                "Control '{}': 'deflection_mirror' not set on a symmetric wing, using 'deflection'",
                uid
            );
            control.deflection
        }
        (Some(_), false) => {
            warn!(
                "Control '{}': 'deflection_mirror' set on a wing without symmetry, value ignored",
                uid
            );
            control.deflection
        }
        (None, false) => control.deflection,
    };

    if control.num_chordwise == Some(0) {
        return Err(VlmError::config(uid, "'num_chordwise' must be positive"));
    }

    Ok(ResolvedControl {
        uid: control.uid.clone(),
        device: control.device,
        segment_inner,
        segment_outer,
        eta_inner: control.eta_inner,
        eta_outer: control.eta_outer,
        xsi_inner: control.xsi_inner,
        xsi_outer: control.xsi_outer,
        hinge_inner,
        hinge_outer,
        deflection: control.deflection.to_radians(),
        deflection_mirror: deflection_mirror.to_radians(),
        num_chordwise: control.num_chordwise,
        station_inner,
        station_outer,
    })
}

/// Rejects devices of the same kind sharing span and slats reaching behind flaps.
pub fn check_overlaps(controls: &[ResolvedControl]) -> Result<()> {
    for (i, first) in controls.iter().enumerate() {
        for second in &controls[i + 1..] {
            let start = first.station_inner.max(second.station_inner);
            let end = first.station_outer.min(second.station_outer);
            if end <= start {
                continue;
            }

            if first.device == second.device {
                return Err(VlmError::config(
                    second.uid.as_str(),
                    format!("overlaps {:?} '{}' along the span", first.device, first.uid),
                ));
            }

            let (slat, flap) = match first.device {
                DeviceType::Slat => (first, second),
                DeviceType::Flap => (second, first),
            };
            for station in [start, end] {
                if slat.xsi_at(station) + MIN_XSI_SPACING > flap.xsi_at(station) {
                    return Err(VlmError::config(
                        slat.uid.as_str(),
                        format!("slat reaches behind flap '{}'", flap.uid),
                    ));
                }
            }
        }
    }
    Ok(())
}

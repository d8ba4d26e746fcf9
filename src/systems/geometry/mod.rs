//! Resolution of the user geometry into a flat, validated, index-addressed form.

mod control;
mod segment;

pub use control::{check_overlaps, resolve_control, ResolvedControl, MIN_XSI_SPACING};
pub use segment::{resolve_segment, ResolvedSegment};

use std::collections::HashSet;

use nalgebra::Vector3;
use tracing::{debug, info};

use crate::components::{Aircraft, ReferenceValues, Symmetry, Wing};
use crate::resources::errors::{Result, VlmError};

/// Maximum gap between the shared edges of neighbouring segments, relative to the
/// local chord.
pub const EDGE_TOLERANCE: f64 = 1e-2;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWing {
    pub uid: String,
    pub symmetry: Symmetry,
    pub segments: Vec<ResolvedSegment>,
    pub controls: Vec<ResolvedControl>,
    /// Wing station of the inner edge of every segment.
    pub stations: Vec<f64>,
    /// Span of one side of the wing.
    pub span: f64,
    /// Area of one side of the wing.
    pub area: f64,
}

impl ResolvedWing {
    /// Wing station of the point at spanwise fraction `eta` of `segment`.
    pub fn station(&self, segment: usize, eta: f64) -> f64 {
        self.stations[segment] + eta * self.segments[segment].span
    }

    /// Span-weighted mean chord.
    pub fn mean_chord(&self) -> f64 {
        let weighted: f64 = self
            .segments
            .iter()
            .map(|s| s.mean_chord() * s.span)
            .sum();
        weighted / self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAircraft {
    pub uid: String,
    pub wings: Vec<ResolvedWing>,
    pub refs: ReferenceValues,
    /// Diagonal of the bounding box of all wings, mirrored sides included.
    pub size: f64,
}

impl ResolvedAircraft {
    pub fn segment_count(&self) -> usize {
        self.wings.iter().map(|w| w.segments.len()).sum()
    }
}

fn check_unique<'a>(
    owner: &str,
    kind: &str,
    uids: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for uid in uids {
        if !seen.insert(uid) {
            return Err(VlmError::config(
                owner,
                format!("duplicate {} uid '{}'", kind, uid),
            ));
        }
    }
    Ok(())
}

/// Verifies that every segment starts on the outer edge of its predecessor.
fn check_segment_order(wing: &str, segments: &[ResolvedSegment]) -> Result<()> {
    for pair in segments.windows(2) {
        let [_, b1, c1, _] = pair[0].vertices;
        let [a2, _, _, d2] = pair[1].vertices;
        let tolerance = EDGE_TOLERANCE * pair[0].outer_chord.max(pair[1].inner_chord);

        if (a2 - b1).norm() > tolerance || (d2 - c1).norm() > tolerance {
            return Err(VlmError::SegmentOrder {
                wing: wing.to_string(),
                segment: pair[1].uid.clone(),
            });
        }
    }
    Ok(())
}

fn resolve_wing(wing: &Wing) -> Result<ResolvedWing> {
    let uid = wing.uid.as_str();
    let symmetry = Symmetry::from_flag(wing.symmetry).ok_or_else(|| VlmError::InvalidSymmetry {
        wing: wing.uid.clone(),
        flag: wing.symmetry,
    })?;

    if wing.segments.is_empty() {
        return Err(VlmError::config(uid, "wing has no segments"));
    }
    check_unique(uid, "segment", wing.segments.iter().map(|s| s.uid.as_str()))?;
    check_unique(uid, "control", wing.controls.iter().map(|c| c.uid.as_str()))?;

    let segments = wing
        .segments
        .iter()
        .map(resolve_segment)
        .collect::<Result<Vec<_>>>()?;
    check_segment_order(uid, &segments)?;

    let stations: Vec<f64> = segments
        .iter()
        .scan(0.0, |station, segment| {
            let inner = *station;
            *station += segment.span;
            Some(inner)
        })
        .collect();

    let controls = wing
        .controls
        .iter()
        .map(|c| resolve_control(uid, symmetry, &segments, &stations, c))
        .collect::<Result<Vec<_>>>()?;
    check_overlaps(&controls)?;

    let span = segments.iter().map(|s| s.span).sum();
    let area = segments.iter().map(|s| s.area).sum();
    debug!(
        "Wing '{}': {} segments, {} controls, span {:.4}, area {:.4}",
        uid,
        segments.len(),
        controls.len(),
        span,
        area
    );

    Ok(ResolvedWing {
        uid: wing.uid.clone(),
        symmetry,
        segments,
        controls,
        stations,
        span,
        area,
    })
}

fn bounding_size(wings: &[ResolvedWing]) -> f64 {
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);

    for wing in wings {
        for segment in &wing.segments {
            for vertex in &segment.vertices {
                for point in [*vertex, wing.symmetry.mirror_point(vertex)] {
                    min = min.inf(&point);
                    max = max.sup(&point);
                }
            }
        }
    }
    (max - min).norm()
}

/// Resolves and validates the full aircraft geometry.
pub fn resolve_aircraft(aircraft: &Aircraft) -> Result<ResolvedAircraft> {
    if aircraft.wings.is_empty() {
        return Err(VlmError::config(&aircraft.uid, "aircraft has no wings"));
    }
    check_unique(
        &aircraft.uid,
        "wing",
        aircraft.wings.iter().map(|w| w.uid.as_str()),
    )?;

    let wings = aircraft
        .wings
        .iter()
        .map(resolve_wing)
        .collect::<Result<Vec<_>>>()?;
    let size = bounding_size(&wings);

    info!(
        "Resolved aircraft '{}': {} wings, {} segments, size {:.4}",
        aircraft.uid,
        wings.len(),
        wings.iter().map(|w| w.segments.len()).sum::<usize>(),
        size
    );

    Ok(ResolvedAircraft {
        uid: aircraft.uid.clone(),
        wings,
        refs: aircraft.refs,
        size,
    })
}

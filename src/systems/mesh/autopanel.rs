//! Panel counts for segments and controls without explicit settings.

use tracing::debug;

use crate::resources::config::MeshConfig;
use crate::systems::geometry::{ResolvedAircraft, ResolvedControl, ResolvedSegment};

/// Chordwise density of a control area relative to the clean part of the wing.
pub const CONTROL_DENSITY_FACTOR: f64 = 2.0;
const MIN_CONTROL_PANELS: usize = 2;

/// Panel counts applied to one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDensity {
    pub num_spanwise: usize,
    pub num_chordwise: usize,
}

/// Target panel length: the largest wing mean chord split into
/// `auto_chordwise` panels.
pub fn panel_length(aircraft: &ResolvedAircraft, mesh: &MeshConfig) -> f64 {
    let largest_chord = aircraft
        .wings
        .iter()
        .map(|w| w.mean_chord())
        .fold(0.0, f64::max);
    let length = largest_chord / mesh.auto_chordwise.max(1) as f64;
    debug!(
        "Auto-paneling: largest mean chord {:.4}, panel length {:.4}",
        largest_chord, length
    );
    length
}

pub fn segment_density(
    segment: &ResolvedSegment,
    mesh: &MeshConfig,
    panel_length: f64,
) -> SegmentDensity {
    let auto = |extent: f64| ((extent / panel_length).round() as usize).max(1);

    SegmentDensity {
        num_spanwise: segment
            .panels
            .num_spanwise
            .or(mesh.auto_spanwise)
            .unwrap_or_else(|| auto(segment.span)),
        num_chordwise: segment
            .panels
            .num_chordwise
            .unwrap_or_else(|| auto(segment.mean_chord())),
    }
}

/// Chordwise panels of the clean area of a strip with relative chord `rel_length`.
pub fn main_chordwise(num_chordwise: usize, rel_length: f64) -> usize {
    ((num_chordwise as f64 * rel_length - 1e-9).ceil() as usize).max(1)
}

/// Chordwise panels of a control area with relative chord `rel_length`.
pub fn control_chordwise(control: &ResolvedControl, num_chordwise: usize, rel_length: f64) -> usize {
    control.num_chordwise.unwrap_or_else(|| {
        ((num_chordwise as f64 * rel_length * CONTROL_DENSITY_FACTOR).ceil() as usize)
            .max(MIN_CONTROL_PANELS)
    })
}

/// Spanwise panels of a strip covering `delta_eta` of its segment.
pub fn strip_spanwise(num_spanwise: usize, delta_eta: f64) -> usize {
    ((num_spanwise as f64 * delta_eta - 1e-9).ceil() as usize).max(1)
}

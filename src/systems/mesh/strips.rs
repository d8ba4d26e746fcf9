//! Spanwise strips and chordwise areas of a segment.

use tracing::warn;

use crate::components::DeviceType;
use crate::systems::geometry::ResolvedWing;

use super::autopanel::{control_chordwise, main_chordwise, strip_spanwise, SegmentDensity};

/// Smallest spanwise width of a strip (fraction of the segment span).
pub const MIN_ETA_SPACING: f64 = 0.01;

/// Chordwise band of a strip, bounded by chord fractions at the inner and outer
/// strip edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordArea {
    /// `(inner, outer)` chord fraction of the front edge.
    pub front: (f64, f64),
    /// `(inner, outer)` chord fraction of the rear edge.
    pub rear: (f64, f64),
    pub num_chordwise: usize,
    /// Control index and `(inner, outer)` hinge chord fractions.
    pub control: Option<(usize, (f64, f64))>,
}

impl ChordArea {
    /// Mean chordwise extent relative to the local chord.
    pub fn rel_length(&self) -> f64 {
        0.5 * ((self.rear.0 + self.rear.1) - (self.front.0 + self.front.1))
    }

    /// Front and rear chord fractions `((inner, outer), (inner, outer))` of panel `k`.
    pub fn panel_bounds(&self, k: usize) -> ((f64, f64), (f64, f64)) {
        let n = self.num_chordwise as f64;
        let at = |t: f64| {
            (
                self.front.0 + (self.rear.0 - self.front.0) * t,
                self.front.1 + (self.rear.1 - self.front.1) * t,
            )
        };
        (at(k as f64 / n), at((k + 1) as f64 / n))
    }
}

/// Spanwise strip of a segment between `eta.0` and `eta.1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub eta: (f64, f64),
    /// Areas ordered from the leading to the trailing edge.
    pub areas: Vec<ChordArea>,
}

/// Spanwise boundaries of a segment: its edges and every control edge on it.
pub fn strip_boundaries(wing: &ResolvedWing, segment: usize) -> Vec<f64> {
    let mut candidates: Vec<f64> = wing
        .controls
        .iter()
        .filter_map(|c| c.eta_range(segment))
        .flat_map(|(eta0, eta1)| [eta0, eta1])
        .filter(|eta| *eta > 0.0 && *eta < 1.0)
        .collect();
    candidates.sort_by(f64::total_cmp);

    let mut boundaries = vec![0.0];
    for eta in candidates {
        let last = boundaries[boundaries.len() - 1];
        if eta - last < MIN_ETA_SPACING || 1.0 - eta < MIN_ETA_SPACING {
            if eta - last > 0.0 && 1.0 - eta > 0.0 {
                warn!(
                    "Segment '{}': strip boundary at eta = {:.4} snapped to a neighbour",
                    wing.segments[segment].uid, eta
                );
            }
            continue;
        }
        boundaries.push(eta);
    }
    boundaries.push(1.0);
    boundaries
}

/// Splits one segment into strips and chordwise areas.
pub fn segment_strips(wing: &ResolvedWing, segment: usize, density: SegmentDensity) -> Vec<Strip> {
    let boundaries = strip_boundaries(wing, segment);
    let mut strips = Vec::new();

    for pair in boundaries.windows(2) {
        let (eta0, eta1) = (pair[0], pair[1]);
        let mid = 0.5 * (eta0 + eta1);

        let device = |kind: DeviceType| {
            wing.controls.iter().enumerate().find(|(_, c)| {
                c.device == kind
                    && c.eta_range(segment)
                        .map_or(false, |(start, end)| start <= mid && mid <= end)
            })
        };
        let slat = device(DeviceType::Slat);
        let flap = device(DeviceType::Flap);

        let count = strip_spanwise(density.num_spanwise, eta1 - eta0);
        for j in 0..count {
            let e0 = eta0 + (eta1 - eta0) * j as f64 / count as f64;
            let e1 = eta0 + (eta1 - eta0) * (j + 1) as f64 / count as f64;
            let s0 = wing.station(segment, e0);
            let s1 = wing.station(segment, e1);

            let mut areas = Vec::with_capacity(3);
            let mut main_front = (0.0, 0.0);
            let mut main_rear = (1.0, 1.0);

            if let Some((index, control)) = slat {
                let rear = (control.xsi_at(s0), control.xsi_at(s1));
                let mut area = ChordArea {
                    front: (0.0, 0.0),
                    rear,
                    num_chordwise: 1,
                    control: Some((index, (control.hinge_at(s0), control.hinge_at(s1)))),
                };
                area.num_chordwise =
                    control_chordwise(control, density.num_chordwise, area.rel_length());
                areas.push(area);
                main_front = rear;
            }

            if let Some((_, control)) = flap {
                main_rear = (control.xsi_at(s0), control.xsi_at(s1));
            }

            let mut main = ChordArea {
                front: main_front,
                rear: main_rear,
                num_chordwise: 1,
                control: None,
            };
            main.num_chordwise = main_chordwise(density.num_chordwise, main.rel_length());
            areas.push(main);

            if let Some((index, control)) = flap {
                let mut area = ChordArea {
                    front: main_rear,
                    rear: (1.0, 1.0),
                    num_chordwise: 1,
                    control: Some((index, (control.hinge_at(s0), control.hinge_at(s1)))),
                };
                area.num_chordwise =
                    control_chordwise(control, density.num_chordwise, area.rel_length());
                areas.push(area);
            }

            strips.push(Strip {
                eta: (e0, e1),
                areas,
            });
        }
    }

    strips
}

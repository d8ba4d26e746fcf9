//! Discretisation of the resolved geometry into a lattice of horseshoe-vortex panels.

pub mod autopanel;
pub mod normals;
pub mod strips;

use nalgebra::Vector3;
use tracing::{debug, info};

use crate::components::{DeviceType, Lattice, Panel, Symmetry};
use crate::resources::config::MeshConfig;
use crate::resources::errors::{Result, VlmError};
use crate::systems::geometry::{ResolvedAircraft, ResolvedSegment, ResolvedWing};

use autopanel::{panel_length, segment_density};
use normals::{apply_camber, apply_deflection, quad_normal_area, spanwise_axis};
use strips::{segment_strips, ChordArea};

/// Panels smaller than this fraction of the squared aircraft size are degenerate.
const DEGENERATE_RATIO: f64 = 1e-12;

/// Panel before camber and deflection are applied.
struct PanelShape {
    vertices: [Vector3<f64>; 4],
    /// Chord fraction of the control point.
    xsi_control: f64,
    /// Spanwise fraction of the strip centre.
    eta_mid: f64,
    /// Hinge end points of a control panel.
    hinge: Option<(usize, [Vector3<f64>; 2])>,
    strip: usize,
}

fn panel_shape(
    segment: &ResolvedSegment,
    eta: (f64, f64),
    area: &ChordArea,
    k: usize,
    strip: usize,
) -> PanelShape {
    let ((front_in, front_out), (rear_in, rear_out)) = area.panel_bounds(k);
    let (eta0, eta1) = eta;

    let vertices = [
        segment.point(eta0, front_in),
        segment.point(eta1, front_out),
        segment.point(eta1, rear_out),
        segment.point(eta0, rear_in),
    ];
    let xsi_control =
        0.5 * ((front_in + 0.75 * (rear_in - front_in)) + (front_out + 0.75 * (rear_out - front_out)));
    let hinge = area.control.map(|(index, (hinge_in, hinge_out))| {
        (
            index,
            [segment.point(eta0, hinge_in), segment.point(eta1, hinge_out)],
        )
    });

    PanelShape {
        vertices,
        xsi_control,
        eta_mid: 0.5 * (eta0 + eta1),
        hinge,
        strip,
    }
}

/// Builds one panel: quarter-chord bound leg, three-quarter-chord control point and
/// the normal rotated for camber and deflection.
fn build_panel(
    wing: &ResolvedWing,
    wing_index: usize,
    segment_index: usize,
    shape: &PanelShape,
    mirrored: bool,
) -> Panel {
    let segment = &wing.segments[segment_index];
    let symmetry = if mirrored { wing.symmetry } else { Symmetry::None };

    let vertices = symmetry.mirror_quad(&shape.vertices);
    let [a, b, c, d] = vertices;
    let p1 = a + (d - a) * 0.25;
    let p2 = b + (c - b) * 0.25;
    let control_point = 0.5 * ((a + (d - a) * 0.75) + (b + (c - b) * 0.75));

    let (geometric, area) = quad_normal_area(&vertices);
    let chord = 0.5 * ((d - a) + (c - b));
    let spanwise = spanwise_axis(&geometric, &chord);

    let slope = segment.camber_slope(shape.eta_mid, shape.xsi_control);
    let mut normal = apply_camber(&geometric, &spanwise, slope);

    let control = shape.hinge.map(|(index, [inner, outer])| {
        let hinge = symmetry.mirror_point(&outer) - symmetry.mirror_point(&inner);
        let device = &wing.controls[index];
        // Flaps deflect trailing edge down, slats leading edge down.
        let deflection = match device.device {
            DeviceType::Flap => device.deflection_for(mirrored),
            DeviceType::Slat => -device.deflection_for(mirrored),
        };
        normal = apply_deflection(&normal, &hinge, &spanwise, deflection);
        index
    });

    Panel {
        vertices,
        bound_leg: [p1, p2],
        control_point,
        bound_midpoint: 0.5 * (p1 + p2),
        normal,
        area,
        wing: wing_index,
        segment: segment_index,
        strip: shape.strip,
        control,
        mirrored,
    }
}

fn check_panel(
    aircraft: &ResolvedAircraft,
    index: usize,
    panel: &Panel,
) -> Result<()> {
    let size = aircraft.size;
    let bound = panel.bound_vector().norm();
    let reason = if !panel.area.is_finite() || panel.area < DEGENERATE_RATIO * size * size {
        Some(format!("area {:e} is too small", panel.area))
    } else if !bound.is_finite() || bound < DEGENERATE_RATIO * size {
        Some(format!("bound leg length {:e} is too small", bound))
    } else if panel.normal.iter().any(|v| !v.is_finite()) {
        Some("normal vector is not finite".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => {
            let wing = &aircraft.wings[panel.wing];
            Err(VlmError::DegeneratePanel {
                index,
                wing: wing.uid.clone(),
                segment: wing.segments[panel.segment].uid.clone(),
                reason,
            })
        }
        None => Ok(()),
    }
}

/// Generates the lattice of the aircraft.
///
/// Panels are ordered by wing, segment, spanwise strip and chordwise position.
/// The mirrored panels of a symmetric wing follow the wing's primary panels in the
/// same order.
pub fn generate_lattice(aircraft: &ResolvedAircraft, mesh: &MeshConfig) -> Result<Lattice> {
    let length = panel_length(aircraft, mesh);
    let mut panels = Vec::new();

    for (wing_index, wing) in aircraft.wings.iter().enumerate() {
        let mut shapes = Vec::new();

        for (segment_index, segment) in wing.segments.iter().enumerate() {
            let density = segment_density(segment, mesh, length);
            let strips = segment_strips(wing, segment_index, density);
            debug!(
                "Segment '{}': {} strips, density {:?}",
                segment.uid,
                strips.len(),
                density
            );

            for (strip_index, strip) in strips.iter().enumerate() {
                for area in &strip.areas {
                    for k in 0..area.num_chordwise {
                        shapes.push((
                            segment_index,
                            panel_shape(segment, strip.eta, area, k, strip_index),
                        ));
                    }
                }
            }
        }

        let sides: &[bool] = if wing.symmetry.is_mirrored() {
            &[false, true]
        } else {
            &[false]
        };
        for &mirrored in sides {
            for (segment_index, shape) in &shapes {
                let panel = build_panel(wing, wing_index, *segment_index, shape, mirrored);
                check_panel(aircraft, panels.len(), &panel)?;
                panels.push(panel);
            }
        }
    }

    info!(
        "Generated lattice with {} panels for aircraft '{}'",
        panels.len(),
        aircraft.uid
    );
    Ok(Lattice::new(panels))
}

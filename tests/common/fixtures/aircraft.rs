use flyer_vlm::{
    Aircraft, Airfoil, ReferenceValues, Wing, WingControl, WingSegment,
};
use nalgebra::Vector3;

/// Half span of the rectangular test wing (m).
pub const HALF_SPAN: f64 = 4.0;
/// Chord of the rectangular test wing (m).
pub const CHORD: f64 = 1.0;

pub fn rectangular_refs() -> ReferenceValues {
    ReferenceValues::new(2.0 * HALF_SPAN * CHORD, 2.0 * HALF_SPAN, CHORD)
}

/// Flat rectangular wing of one segment, root at the origin, span along +y.
pub fn rectangular_wing(symmetry: i64, num_spanwise: usize, num_chordwise: usize) -> Wing {
    Wing::new("main", symmetry).with_segment(
        WingSegment::rectangle("main_seg", Vector3::zeros(), HALF_SPAN, CHORD)
            .with_panels(num_spanwise, num_chordwise),
    )
}

/// Mirrored rectangular wing with an aspect ratio of 8.
pub fn rectangular_aircraft() -> Aircraft {
    Aircraft::new("rectangle", rectangular_refs()).with_wing(rectangular_wing(2, 8, 4))
}

/// Two-segment wing with taper, leading-edge sweep and dihedral on the outer
/// segment, mirrored about the x-z plane.
pub fn swept_wing() -> Wing {
    let root_le = Vector3::new(0.0, 0.0, 0.0);
    let kink_le = Vector3::new(0.3, 2.0, 0.0);
    let tip_le = Vector3::new(1.0, 5.0, 0.4);

    Wing::new("swept", 2)
        .with_segment(
            WingSegment::from_vertices(
                "inboard",
                root_le,
                kink_le,
                kink_le + Vector3::new(1.6, 0.0, 0.0),
                root_le + Vector3::new(2.0, 0.0, 0.0),
            )
            .with_panels(4, 4),
        )
        .with_segment(
            WingSegment::from_vertices(
                "outboard",
                kink_le,
                tip_le,
                tip_le + Vector3::new(0.8, 0.0, 0.0),
                kink_le + Vector3::new(1.6, 0.0, 0.0),
            )
            .with_panels(6, 4),
        )
}

pub fn swept_aircraft() -> Aircraft {
    let mut refs = ReferenceValues::new(14.0, 10.0, 1.5);
    refs.rcenter = Vector3::new(0.8, 0.0, 0.0);
    refs.gcenter = refs.rcenter;
    Aircraft::new("swept", refs).with_wing(swept_wing())
}

/// Rectangular wing with a cambered airfoil.
pub fn cambered_aircraft() -> Aircraft {
    let wing = Wing::new("main", 2).with_segment(
        WingSegment::rectangle("main_seg", Vector3::zeros(), HALF_SPAN, CHORD)
            .with_panels(8, 6)
            .with_airfoils(Airfoil::naca("2412"), Airfoil::naca("2412")),
    );
    Aircraft::new("cambered", rectangular_refs()).with_wing(wing)
}

/// Rectangular wing with a flap on the inner half and an aileron on the outer
/// quarter of the span.
pub fn controlled_aircraft(flap: f64, aileron: f64) -> Aircraft {
    let wing = rectangular_wing(2, 8, 4)
        .with_control(
            WingControl::flap("flap", "main_seg", (0.0, 0.5), 0.7, flap)
                .with_mirror_deflection(flap),
        )
        .with_control(
            WingControl::flap("aileron", "main_seg", (0.75, 1.0), 0.75, aileron)
                .with_mirror_deflection(-aileron),
        );
    Aircraft::new("controlled", rectangular_refs()).with_wing(wing)
}

/// Rectangular main wing and a horizontal tail behind it.
pub fn wing_and_tail() -> Aircraft {
    let tail = Wing::new("tail", 2).with_segment(
        WingSegment::rectangle("tail_seg", Vector3::new(4.0, 0.0, 0.3), 1.5, 0.6)
            .with_panels(3, 2),
    );
    Aircraft::new("wing_tail", rectangular_refs())
        .with_wing(rectangular_wing(2, 8, 4))
        .with_wing(tail)
}

/// Rectangular wing with its root at `root`, mirrored about the plane selected
/// by `symmetry`.
pub fn offset_aircraft(symmetry: i64, root: Vector3<f64>) -> Aircraft {
    let wing = Wing::new("main", symmetry).with_segment(
        WingSegment::rectangle("main_seg", root, HALF_SPAN, CHORD).with_panels(8, 4),
    );
    Aircraft::new("offset", rectangular_refs()).with_wing(wing)
}

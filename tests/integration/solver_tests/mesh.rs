use flyer_vlm::{
    systems::{geometry::resolve_aircraft, mesh::generate_lattice},
    Aircraft, MeshConfig,
};

use crate::common::{
    controlled_aircraft, rectangular_refs, rectangular_wing, swept_aircraft, CHORD, HALF_SPAN,
};

#[test]
fn test_explicit_density_gives_twelve_panels() {
    let aircraft = Aircraft::new("plane", rectangular_refs()).with_wing(rectangular_wing(0, 4, 3));
    let resolved = resolve_aircraft(&aircraft).unwrap();
    let lattice = generate_lattice(&resolved, &MeshConfig::default()).unwrap();

    assert_eq!(lattice.len(), 12);
    assert!(lattice.iter().all(|p| p.wing == 0 && p.segment == 0));
}

#[test]
fn test_mirrored_side_doubles_panels_and_area() {
    let aircraft = Aircraft::new("plane", rectangular_refs()).with_wing(rectangular_wing(2, 4, 3));
    let resolved = resolve_aircraft(&aircraft).unwrap();
    let lattice = generate_lattice(&resolved, &MeshConfig::default()).unwrap();

    assert_eq!(lattice.len(), 24);
    assert!((lattice.area() - 2.0 * HALF_SPAN * CHORD).abs() < 1e-12);
    for (primary, mirror) in lattice.panels[..12].iter().zip(&lattice.panels[12..]) {
        assert!(mirror.mirrored && !primary.mirrored);
        assert!((mirror.control_point.y + primary.control_point.y).abs() < 1e-12);
        assert!((mirror.area - primary.area).abs() < 1e-12);
    }
}

#[test]
fn test_lattice_is_deterministic() {
    let aircraft = swept_aircraft();
    let resolved = resolve_aircraft(&aircraft).unwrap();
    let first = generate_lattice(&resolved, &MeshConfig::default()).unwrap();
    let second = generate_lattice(&resolved, &MeshConfig::default()).unwrap();

    assert_eq!(first.panels, second.panels);
    // 4 x 4 inboard, 6 x 4 outboard, both sides.
    assert_eq!(first.len(), 2 * (16 + 24));
    assert!(first.panels.windows(2).all(|w| w[0].segment <= w[1].segment || w[1].mirrored));
}

#[test]
fn test_swept_lattice_area_matches_planform() {
    let resolved = resolve_aircraft(&swept_aircraft()).unwrap();
    let lattice = generate_lattice(&resolved, &MeshConfig::default()).unwrap();
    let wing_area = resolved.wings[0].area;
    assert!((lattice.area() - 2.0 * wing_area).abs() < 1e-9 * wing_area);
    assert!(lattice.iter().all(|p| p.normal.z > 0.0));
}

#[test]
fn test_control_panels_stay_within_their_span() {
    let resolved = resolve_aircraft(&controlled_aircraft(10.0, 5.0)).unwrap();
    let lattice = generate_lattice(&resolved, &MeshConfig::default()).unwrap();

    let flap_span = 0.5 * HALF_SPAN;
    let aileron_start = 0.75 * HALF_SPAN;
    for panel in lattice.iter().filter(|p| !p.mirrored) {
        let y_max = panel.vertices.iter().map(|v| v.y).fold(f64::MIN, f64::max);
        let y_min = panel.vertices.iter().map(|v| v.y).fold(f64::MAX, f64::min);
        match panel.control {
            Some(0) => assert!(y_max <= flap_span + 1e-12),
            Some(1) => assert!(y_min >= aileron_start - 1e-12),
            _ => {}
        }
    }

    // Auto density on the devices: twice the clean chordwise density.
    let flap_strip: Vec<_> = lattice
        .iter()
        .filter(|p| !p.mirrored && p.strip == 0)
        .collect();
    assert_eq!(flap_strip.iter().filter(|p| p.control == Some(0)).count(), 3);
    assert_eq!(flap_strip.iter().filter(|p| p.control.is_none()).count(), 3);
}

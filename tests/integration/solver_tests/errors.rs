use flyer_vlm::{
    Aircraft, Analysis, AnalysisConfig, FlightState, ReferenceValues, VlmError, Wing,
    WingControl, WingSegment,
};
use nalgebra::Vector3;

use crate::common::{rectangular_aircraft, rectangular_refs, rectangular_wing, CHORD, HALF_SPAN};

fn build(aircraft: &Aircraft) -> Result<Analysis, VlmError> {
    Analysis::new(aircraft, AnalysisConfig::default())
}

#[test]
fn test_unknown_symmetry_flag() {
    let aircraft = Aircraft::new("plane", rectangular_refs()).with_wing(rectangular_wing(5, 2, 2));
    match build(&aircraft) {
        Err(VlmError::InvalidSymmetry { wing, flag }) => {
            assert_eq!(wing, "main");
            assert_eq!(flag, 5);
        }
        other => panic!("expected symmetry error, got {:?}", other),
    }
}

#[test]
fn test_invalid_reference_values() {
    let mut aircraft = rectangular_aircraft();
    aircraft.refs.area = 0.0;
    assert!(matches!(
        build(&aircraft),
        Err(VlmError::InvalidReference { name: "area", .. })
    ));

    let mut aircraft = rectangular_aircraft();
    aircraft.refs.span = f64::NAN;
    assert!(matches!(
        build(&aircraft),
        Err(VlmError::InvalidReference { name: "span", .. })
    ));
}

#[test]
fn test_control_on_missing_segment() {
    let wing = rectangular_wing(2, 4, 2).with_control(WingControl::flap(
        "flap",
        "no_such_segment",
        (0.0, 0.5),
        0.7,
        10.0,
    ));
    let aircraft = Aircraft::new("plane", rectangular_refs()).with_wing(wing);

    let err = build(&aircraft).unwrap_err();
    assert!(matches!(err, VlmError::Config { .. }));
    assert!(err.to_string().contains("flap"));
}

#[test]
fn test_misordered_segments() {
    let wing = Wing::new("main", 2)
        .with_segment(WingSegment::rectangle(
            "outer",
            Vector3::new(0.0, HALF_SPAN, 0.0),
            HALF_SPAN,
            CHORD,
        ))
        .with_segment(WingSegment::rectangle("inner", Vector3::zeros(), HALF_SPAN, CHORD));
    let aircraft = Aircraft::new("plane", rectangular_refs()).with_wing(wing);

    assert!(matches!(
        build(&aircraft),
        Err(VlmError::SegmentOrder { .. })
    ));
}

#[test]
fn test_coincident_wings_are_singular() {
    let twin = |uid: &str| {
        Wing::new(uid, 0).with_segment(
            WingSegment::rectangle(format!("{}_seg", uid), Vector3::zeros(), 2.0, 1.0)
                .with_panels(2, 2),
        )
    };
    let aircraft = Aircraft::new("twins", ReferenceValues::new(2.0, 2.0, 1.0))
        .with_wing(twin("left"))
        .with_wing(twin("right"));

    match build(&aircraft) {
        Err(VlmError::SingularSystem { pivot_ratio, .. }) => assert!(pivot_ratio < 1e-13),
        other => panic!("expected singular system, got {:?}", other),
    }
}

#[test]
fn test_invalid_flight_states() {
    let analysis = build(&rectangular_aircraft()).unwrap();

    for state in [
        FlightState::new(f64::NAN, 1.225, 0.0, 0.0),
        FlightState::new(50.0, 0.0, 0.0, 0.0),
        FlightState::new(50.0, 1.225, f64::INFINITY, 0.0),
        FlightState::new(50.0, 1.225, 2.0, 0.0).with_rates(f64::NAN, 0.0, 0.0),
    ] {
        assert!(
            matches!(analysis.evaluate(&state), Err(VlmError::InvalidState(_))),
            "accepted {:?}",
            state
        );
    }
}

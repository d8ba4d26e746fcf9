use approx::assert_relative_eq;
use flyer_vlm::{Analysis, AnalysisConfig};

use crate::common::{cruise_state, rectangular_aircraft};

#[test]
fn test_roll_rate_loads_the_positive_side() {
    let analysis = Analysis::new(&rectangular_aircraft(), AnalysisConfig::default()).unwrap();

    let rolling = analysis
        .evaluate(&cruise_state(0.0, 0.0).with_rates(0.5, 0.0, 0.0))
        .unwrap();
    // Ω × r raises the onset velocity along +z on the +y side.
    assert!(rolling.coefficients.c_roll > 0.0);
    // Antisymmetric loading adds no net lift.
    assert!(rolling.coefficients.c_lift.abs() < 1e-10);

    let faster = analysis
        .evaluate(&cruise_state(0.0, 0.0).with_rates(1.0, 0.0, 0.0))
        .unwrap();
    assert_relative_eq!(
        faster.coefficients.c_roll,
        2.0 * rolling.coefficients.c_roll,
        max_relative = 1e-9
    );
}

#[test]
fn test_pitch_rate_about_the_leading_edge() {
    // The reference point of the rectangular aircraft sits on the root leading edge.
    let aircraft = rectangular_aircraft();
    assert_eq!(aircraft.refs.rcenter.x, 0.0);
    let analysis = Analysis::new(&aircraft, AnalysisConfig::default()).unwrap();

    let pitching = analysis
        .evaluate(&cruise_state(0.0, 0.0).with_rates(0.0, 0.5, 0.0))
        .unwrap();
    // Aft of the reference point Ω × r points along -z.
    assert!(pitching.coefficients.c_lift < 0.0);
    assert!(pitching.coefficients.c_pitch > 0.0);
}

#[test]
fn test_yaw_rate_keeps_the_wing_level() {
    let analysis = Analysis::new(&rectangular_aircraft(), AnalysisConfig::default()).unwrap();

    let steady = analysis.evaluate(&cruise_state(4.0, 0.0)).unwrap();
    let yawing = analysis
        .evaluate(&cruise_state(4.0, 0.0).with_rates(0.0, 0.0, 0.3))
        .unwrap();

    // Ω × r slows the +y side, which then carries less lift.
    assert!(yawing.coefficients.c_roll < -1e-6);
    assert_relative_eq!(
        yawing.coefficients.c_lift,
        steady.coefficients.c_lift,
        max_relative = 1e-3
    );
}

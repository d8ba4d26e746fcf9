use flyer_vlm::{Analysis, AnalysisConfig};

use crate::common::{
    assert_coefficients_finite, assert_no_lateral_loads, controlled_aircraft, cruise_state,
};

fn evaluate(flap: f64, aileron: f64, alpha: f64) -> flyer_vlm::AeroCoefficients {
    let analysis = Analysis::new(&controlled_aircraft(flap, aileron), AnalysisConfig::default())
        .unwrap();
    let results = analysis.evaluate(&cruise_state(alpha, 0.0)).unwrap();
    assert_coefficients_finite(&results.coefficients);
    results.coefficients
}

#[test]
fn test_flap_increases_lift() {
    let clean = evaluate(0.0, 0.0, 3.0);
    let flapped = evaluate(15.0, 0.0, 3.0);

    assert!(flapped.c_lift > clean.c_lift + 0.05);
    // Lift added near the trailing edge pitches the nose down.
    assert!(flapped.c_pitch < clean.c_pitch);
}

#[test]
fn test_symmetric_flap_has_no_lateral_loads() {
    let flapped = evaluate(20.0, 0.0, 4.0);
    assert_no_lateral_loads(&flapped, 1e-10);
}

#[test]
fn test_aileron_rolls_towards_the_raised_side() {
    let rolled = evaluate(0.0, 10.0, 2.0);
    assert!(rolled.c_roll > 1e-4, "c_roll = {}", rolled.c_roll);

    let reversed = evaluate(0.0, -10.0, 2.0);
    assert!(reversed.c_roll < -1e-4);

    // Antisymmetric deflection leaves the lift nearly untouched.
    let clean = evaluate(0.0, 0.0, 2.0);
    assert!((rolled.c_lift - clean.c_lift).abs() < 0.05 * clean.c_lift);
}

#[test]
fn test_control_panels_are_counted() {
    let analysis =
        Analysis::new(&controlled_aircraft(5.0, 5.0), AnalysisConfig::default()).unwrap();
    let lattice = analysis.lattice();

    let flap = lattice.iter().filter(|p| p.control == Some(0)).count();
    let aileron = lattice.iter().filter(|p| p.control == Some(1)).count();
    assert!(flap > 0);
    assert!(aileron > 0);
    assert_eq!(flap % 2, 0);
    assert_eq!(aileron % 2, 0);
}

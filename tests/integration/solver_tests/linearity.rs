use approx::assert_relative_eq;
use flyer_vlm::{Analysis, AnalysisConfig, FlightState, ReferenceValues, WakeAlignment};

use crate::common::{
    assert_coefficients_eq, assert_panel_sums_match, cruise_state, random_states,
    rectangular_aircraft, swept_aircraft,
};

#[test]
fn test_doubling_airspeed_keeps_coefficients() {
    let analysis = Analysis::new(&swept_aircraft(), AnalysisConfig::default()).unwrap();

    for state in random_states(7, 5) {
        let mut fast = state;
        fast.airspeed *= 2.0;

        let slow_results = analysis.evaluate(&state).unwrap();
        let fast_results = analysis.evaluate(&fast).unwrap();
        assert_coefficients_eq(&slow_results.coefficients, &fast_results.coefficients, 1e-9);

        for (slow, fast) in slow_results.panels.iter().zip(&fast_results.panels) {
            assert_relative_eq!(fast.force, slow.force * 4.0, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_influence_matrix_is_state_independent() {
    let aircraft = swept_aircraft();
    let analysis = Analysis::new(&aircraft, AnalysisConfig::default()).unwrap();

    let a = analysis.influence_matrix_for(&cruise_state(0.0, 0.0)).unwrap();
    let b = analysis
        .influence_matrix_for(&FlightState::new(90.0, 0.5, 10.0, -4.0))
        .unwrap();
    assert_eq!(a, b);

    // A fresh assembly of the same geometry is bit-for-bit identical.
    let again = Analysis::new(&aircraft, AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.influence_matrix(), again.influence_matrix());
}

#[test]
fn test_freestream_wake_matrix_follows_the_state() {
    let config = AnalysisConfig {
        wake: WakeAlignment::Freestream,
        ..AnalysisConfig::default()
    };
    let analysis = Analysis::new(&rectangular_aircraft(), config).unwrap();

    let level = analysis.influence_matrix_for(&cruise_state(0.0, 0.0)).unwrap();
    let pitched = analysis.influence_matrix_for(&cruise_state(10.0, 0.0)).unwrap();
    assert_ne!(level, pitched);

    // Airspeed and density do not change the wake direction.
    let slow = analysis
        .influence_matrix_for(&FlightState::new(10.0, 0.9, 10.0, 0.0))
        .unwrap();
    assert_eq!(pitched, slow);
}

#[test]
fn test_reference_area_scaling() {
    let aircraft = rectangular_aircraft();
    let mut halved = aircraft.clone();
    halved.refs = ReferenceValues {
        area: 0.5 * aircraft.refs.area,
        ..aircraft.refs
    };

    let state = cruise_state(5.0, 2.0);
    let full = Analysis::new(&aircraft, AnalysisConfig::default())
        .unwrap()
        .evaluate(&state)
        .unwrap();
    let half = Analysis::new(&halved, AnalysisConfig::default())
        .unwrap()
        .evaluate(&state)
        .unwrap();

    assert_relative_eq!(half.forces.force, full.forces.force, max_relative = 1e-12);
    let (f, h) = (&full.coefficients, &half.coefficients);
    for (full_value, half_value) in [
        (f.c_x, h.c_x),
        (f.c_y, h.c_y),
        (f.c_z, h.c_z),
        (f.c_lift, h.c_lift),
        (f.c_drag, h.c_drag),
        (f.c_side, h.c_side),
        (f.c_roll, h.c_roll),
        (f.c_pitch, h.c_pitch),
        (f.c_yaw, h.c_yaw),
    ] {
        assert_relative_eq!(half_value, 2.0 * full_value, epsilon = 1e-14, max_relative = 1e-9);
    }
}

#[test]
fn test_panel_loads_sum_to_global_loads() {
    let aircraft = swept_aircraft();
    let analysis = Analysis::new(&aircraft, AnalysisConfig::default()).unwrap();

    for state in random_states(11, 3) {
        let state = state.with_rates(0.2, -0.1, 0.05);
        let results = analysis.evaluate(&state).unwrap();
        assert_panel_sums_match(&results, &aircraft.refs.rcenter, 1e-9);
    }
}

#[test]
fn test_sweep_matches_individual_evaluations() {
    let analysis = Analysis::new(&swept_aircraft(), AnalysisConfig::default()).unwrap();
    let states = random_states(3, 6);
    let sweep = analysis.sweep(&states).unwrap();

    assert_eq!(sweep.len(), states.len());
    for (state, swept) in states.iter().zip(&sweep) {
        assert_eq!(&swept.state, state);
        let single = analysis.evaluate(state).unwrap();
        assert_coefficients_eq(&single.coefficients, &swept.coefficients, 1e-10);
    }
}

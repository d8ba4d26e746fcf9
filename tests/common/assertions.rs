use approx::assert_relative_eq;
use flyer_vlm::{AeroCoefficients, AeroResults};
use nalgebra::Vector3;

/// Assert that every coefficient is finite
#[track_caller]
pub fn assert_coefficients_finite(c: &AeroCoefficients) {
    let values = [
        c.c_x, c.c_y, c.c_z, c.c_drag, c.c_side, c.c_lift, c.c_roll, c.c_pitch, c.c_yaw,
    ];
    assert!(
        values.iter().all(|v| v.is_finite()),
        "Non-finite coefficient in {:?}",
        c
    );
}

/// Assert that two coefficient sets agree within a relative tolerance
#[track_caller]
pub fn assert_coefficients_eq(a: &AeroCoefficients, b: &AeroCoefficients, tolerance: f64) {
    let pairs = [
        (a.c_x, b.c_x),
        (a.c_y, b.c_y),
        (a.c_z, b.c_z),
        (a.c_drag, b.c_drag),
        (a.c_side, b.c_side),
        (a.c_lift, b.c_lift),
        (a.c_roll, b.c_roll),
        (a.c_pitch, b.c_pitch),
        (a.c_yaw, b.c_yaw),
    ];
    for (x, y) in pairs {
        assert_relative_eq!(x, y, epsilon = tolerance, max_relative = tolerance);
    }
}

/// Assert that side force, rolling and yawing moment vanish
#[track_caller]
pub fn assert_no_lateral_loads(c: &AeroCoefficients, tolerance: f64) {
    assert!(c.c_side.abs() < tolerance, "Side force coefficient {}", c.c_side);
    assert!(c.c_roll.abs() < tolerance, "Roll coefficient {}", c.c_roll);
    assert!(c.c_yaw.abs() < tolerance, "Yaw coefficient {}", c.c_yaw);
}

/// Assert that the summed panel loads match the reported global loads
#[track_caller]
pub fn assert_panel_sums_match(results: &AeroResults, rcenter: &Vector3<f64>, tolerance: f64) {
    let force: Vector3<f64> = results.panels.iter().map(|p| p.force).sum();
    let moment: Vector3<f64> = results
        .panels
        .iter()
        .map(|p| (p.position - rcenter).cross(&p.force))
        .sum();

    let scale = force.norm().max(1.0);
    assert_relative_eq!(force, results.forces.force, epsilon = tolerance * scale);
    assert_relative_eq!(moment, results.forces.moment, epsilon = tolerance * scale);
}

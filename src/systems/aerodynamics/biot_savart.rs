//! Velocity induced by unit-strength vortex filaments (Biot–Savart law).
//!
//! A point lying on the line of a filament receives no velocity from it. This is
//! the only self-induction convention used by the solver: it covers the bound leg
//! of a panel evaluated at its own midpoint and collinear legs of neighbouring
//! panels. Coincident points or zero-length filaments are not special-cased and
//! yield non-finite values.

use std::f64::consts::PI;

use nalgebra::Vector3;

/// Squared sine of the angle below which a point counts as lying on the filament.
const COLLINEAR_SIN2: f64 = 1e-20;

/// Velocity induced at `point` by a unit vortex running from `start` to `end`.
pub fn segment(point: &Vector3<f64>, start: &Vector3<f64>, end: &Vector3<f64>) -> Vector3<f64> {
    let r0 = end - start;
    let r1 = point - start;
    let r2 = point - end;

    let cross = r1.cross(&r2);
    let cross_sq = cross.norm_squared();
    if cross_sq < COLLINEAR_SIN2 * r0.norm_squared() * r1.norm_squared() {
        return Vector3::zeros();
    }

    let scale = r0.dot(&(r1 / r1.norm() - r2 / r2.norm())) / (4.0 * PI * cross_sq);
    cross * scale
}

/// Velocity induced at `point` by a unit vortex starting at `origin` and running to
/// infinity along the unit vector `direction`.
pub fn semi_infinite(
    point: &Vector3<f64>,
    origin: &Vector3<f64>,
    direction: &Vector3<f64>,
) -> Vector3<f64> {
    let r = point - origin;
    let cross = direction.cross(&r);
    let cross_sq = cross.norm_squared();
    let r_norm = r.norm();
    if cross_sq < COLLINEAR_SIN2 * r_norm * r_norm {
        return Vector3::zeros();
    }

    cross * ((1.0 + direction.dot(&r) / r_norm) / (4.0 * PI * cross_sq))
}

/// Velocity induced at `point` by a unit horseshoe vortex with bound leg
/// `[p1, p2]` and trailing legs along `wake`: from infinity into `p1`, across the
/// bound leg, and from `p2` back to infinity.
pub fn horseshoe(
    point: &Vector3<f64>,
    bound_leg: &[Vector3<f64>; 2],
    wake: &Vector3<f64>,
) -> Vector3<f64> {
    let [p1, p2] = bound_leg;
    semi_infinite(point, p2, wake) + segment(point, p1, p2) - semi_infinite(point, p1, wake)
}

use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Geometric unit normal and area of the quadrilateral `[A, B, C, D]`, from the
/// cross product of its diagonals.
pub fn quad_normal_area(vertices: &[Vector3<f64>; 4]) -> (Vector3<f64>, f64) {
    let [a, b, c, d] = vertices;
    let cross = (c - a).cross(&(b - d));
    let norm = cross.norm();
    (cross / norm, 0.5 * norm)
}

/// Spanwise axis of a panel, `normalize(n × chord)`.
pub fn spanwise_axis(normal: &Vector3<f64>, chord: &Vector3<f64>) -> Vector3<f64> {
    normal.cross(chord).normalize()
}

/// Exact rotation of `vector` about `axis` by `angle` (rad), right-handed.
pub fn rotate(vector: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    if angle == 0.0 {
        return *vector;
    }
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle) * *vector
}

/// Tilts the normal by the camber-line angle: a positive slope dz/dx tilts the
/// normal towards the leading edge.
pub fn apply_camber(normal: &Vector3<f64>, spanwise: &Vector3<f64>, slope: f64) -> Vector3<f64> {
    rotate(normal, spanwise, -slope.atan())
}

/// Rotates the normal about the hinge line. The hinge axis is oriented along the
/// spanwise axis so that a positive angle moves the trailing edge down and tilts
/// the normal aft.
pub fn apply_deflection(
    normal: &Vector3<f64>,
    hinge: &Vector3<f64>,
    spanwise: &Vector3<f64>,
    deflection: f64,
) -> Vector3<f64> {
    let axis = if hinge.dot(spanwise) < 0.0 {
        -hinge
    } else {
        *hinge
    };
    rotate(normal, &axis, deflection)
}

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_coefficients_eq, assert_coefficients_finite, assert_no_lateral_loads,
    assert_panel_sums_match,
};

pub use fixtures::*;

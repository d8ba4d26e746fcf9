pub mod aerodynamics;
pub mod geometry;
pub mod mesh;

pub use aerodynamics::{
    aero_coefficients, assemble_influence, boundary_conditions, global_forces, panel_loads,
    Execution, FactorizedSystem,
};
pub use geometry::{resolve_aircraft, ResolvedAircraft, ResolvedControl, ResolvedSegment, ResolvedWing};
pub use mesh::generate_lattice;

pub mod analysis;
pub mod components;
pub mod resources;
pub mod systems;

pub use analysis::Analysis;
pub use components::{
    AeroCoefficients, AeroResults, Aircraft, Airfoil, DeviceType, FlightCondition, FlightState,
    GlobalForces, Lattice, Panel, PanelResult, ReferenceValues, Symmetry, Wing, WingControl,
    WingSegment,
};
pub use resources::{
    load_project, save_results, AnalysisConfig, AnalysisConfigBuilder, Atmosphere, MeshConfig,
    Project, ProjectResults, Result, VlmError, WakeAlignment,
};

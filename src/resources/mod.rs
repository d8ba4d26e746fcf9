pub mod config;
pub mod environment;
pub mod errors;
pub mod loader;

pub use config::{AnalysisConfig, AnalysisConfigBuilder, MeshConfig, WakeAlignment};
pub use environment::{Atmosphere, AtmosphereConfig, AtmosphereProperties, AtmosphereType};
pub use errors::{Result, VlmError};
pub use loader::{load_project, save_results, AeroMap, Format, Project, ProjectResults};

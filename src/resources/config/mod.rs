pub mod analysis;
pub mod builder;

pub use analysis::{AnalysisConfig, MeshConfig, WakeAlignment, DEFAULT_AUTO_CHORDWISE};
pub use builder::AnalysisConfigBuilder;

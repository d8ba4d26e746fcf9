use serde::{Deserialize, Serialize};

/// Default chordwise panel count applied to the wing with the largest mean chord.
pub const DEFAULT_AUTO_CHORDWISE: usize = 4;

/// Panel-density settings used when a segment or control carries no explicit counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Target number of chordwise panels on the wing with the largest mean chord.
    pub auto_chordwise: usize,
    /// Fixed spanwise panel count per segment. When `None` the spanwise count is
    /// chosen to keep panels close to unit aspect ratio.
    pub auto_spanwise: Option<usize>,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            auto_chordwise: DEFAULT_AUTO_CHORDWISE,
            auto_spanwise: None,
        }
    }
}

/// Direction of the semi-infinite trailing legs of every horseshoe vortex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeAlignment {
    /// Legs follow the body x-axis. The influence matrix is then independent of the
    /// flight state and is assembled and factorised once per lattice.
    #[default]
    BodyAxis,
    /// Legs follow the freestream direction of each flight state. The matrix is
    /// re-assembled for every state.
    Freestream,
}

/// Settings of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub mesh: MeshConfig,
    pub wake: WakeAlignment,
}

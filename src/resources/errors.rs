use thiserror::Error;

/// Errors raised while building or evaluating a vortex-lattice analysis.
///
/// Every variant names the entity (wing, segment, control, panel or matrix index)
/// that triggered it. There is no retryable variant; all of them abort the run.
#[derive(Error, Debug)]
pub enum VlmError {
    // --- Configuration ---
    #[error("Invalid configuration of '{entity}': {message}")]
    Config { entity: String, message: String },

    #[error("Wing '{wing}': unsupported symmetry flag {flag} (expected 0, 1, 2 or 3)")]
    InvalidSymmetry { wing: String, flag: i64 },

    #[error("Wing '{wing}': segment '{segment}' does not continue the preceding segment along the span")]
    SegmentOrder { wing: String, segment: String },

    #[error("Invalid reference value '{name}' = {value} (must be positive and finite)")]
    InvalidReference { name: &'static str, value: f64 },

    #[error("Invalid flight state: {0}")]
    InvalidState(String),

    // --- Geometric degeneracy ---
    #[error("Degenerate panel {index} (wing '{wing}', segment '{segment}'): {reason}")]
    DegeneratePanel {
        index: usize,
        wing: String,
        segment: String,
        reason: String,
    },

    #[error("Non-finite influence coefficient at row {row}, column {column}")]
    NonFiniteInfluence { row: usize, column: usize },

    #[error("Non-finite boundary condition at panel {index}")]
    NonFiniteBoundary { index: usize },

    // --- Numerical ---
    #[error("Singular influence matrix: pivot {pivot_index} has ratio {pivot_ratio:e} to the largest pivot")]
    SingularSystem { pivot_index: usize, pivot_ratio: f64 },

    #[error("Non-finite circulation at panel {index}")]
    NonFiniteSolution { index: usize },

    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    // --- Boundary I/O ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl VlmError {
    pub fn config(entity: impl Into<String>, message: impl Into<String>) -> Self {
        VlmError::Config {
            entity: entity.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VlmError>;

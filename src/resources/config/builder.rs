use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resources::{
    config::analysis::{AnalysisConfig, MeshConfig, WakeAlignment},
    errors::VlmError,
};

#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct AnalysisConfigBuilder {
    pub auto_chordwise: Option<usize>,
    pub auto_spanwise: Option<usize>,
    pub wake: Option<WakeAlignment>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_chordwise(mut self, panels: usize) -> Self {
        self.auto_chordwise = Some(panels);
        self
    }

    pub fn auto_spanwise(mut self, panels: usize) -> Self {
        self.auto_spanwise = Some(panels);
        self
    }

    pub fn wake(mut self, wake: WakeAlignment) -> Self {
        self.wake = Some(wake);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, VlmError> {
        let mut builder = Self::new();

        if let Some(panels) = value.get("auto_chordwise") {
            builder = builder.auto_chordwise(Self::panel_count("auto_chordwise", panels)?);
        }

        if let Some(panels) = value.get("auto_spanwise") {
            if !panels.is_null() {
                builder = builder.auto_spanwise(Self::panel_count("auto_spanwise", panels)?);
            }
        }

        if let Some(wake) = value.get("wake") {
            builder = builder.wake(serde_json::from_value(wake.clone())?);
        }

        Ok(builder)
    }

    fn panel_count(name: &str, value: &Value) -> Result<usize, VlmError> {
        value
            .as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| VlmError::config(name, format!("expected a positive integer, got {}", value)))
    }

    pub fn build(self) -> Result<AnalysisConfig, VlmError> {
        let mut config = AnalysisConfig::default();

        if let Some(panels) = self.auto_chordwise {
            if panels == 0 {
                return Err(VlmError::config("auto_chordwise", "must be positive"));
            }
            config.mesh.auto_chordwise = panels;
        }
        if let Some(panels) = self.auto_spanwise {
            if panels == 0 {
                return Err(VlmError::config("auto_spanwise", "must be positive"));
            }
            config.mesh = MeshConfig {
                auto_spanwise: Some(panels),
                ..config.mesh
            };
        }
        if let Some(wake) = self.wake {
            config.wake = wake;
        }

        Ok(config)
    }
}

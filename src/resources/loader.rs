//! Project files: aircraft, flight conditions and settings in, results out.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::components::{AeroResults, Aircraft, FlightCondition, FlightState};
use crate::resources::config::{AnalysisConfig, AnalysisConfigBuilder};
use crate::resources::environment::{Atmosphere, AtmosphereConfig};
use crate::resources::errors::{Result, VlmError};

/// Serialisation format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(VlmError::config(
                path.display().to_string(),
                "expected a .json, .yaml or .yml file",
            )),
        }
    }

    fn parse(self, text: &str) -> Result<Value> {
        Ok(match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
        })
    }
}

/// Column-wise flight conditions.
///
/// All non-empty columns must have the same length, except for single values,
/// which apply to every row. Empty angle and rate columns default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroMap {
    pub airspeed: Vec<f64>,
    pub density: Vec<f64>,
    pub mach: Vec<f64>,
    pub altitude: Vec<f64>,
    pub alpha: Vec<f64>,
    pub beta: Vec<f64>,
    pub rate_p: Vec<f64>,
    pub rate_q: Vec<f64>,
    pub rate_r: Vec<f64>,
}

impl AeroMap {
    fn columns(&self) -> [(&'static str, &[f64]); 9] {
        [
            ("airspeed", self.airspeed.as_slice()),
            ("density", self.density.as_slice()),
            ("mach", self.mach.as_slice()),
            ("altitude", self.altitude.as_slice()),
            ("alpha", self.alpha.as_slice()),
            ("beta", self.beta.as_slice()),
            ("rate_p", self.rate_p.as_slice()),
            ("rate_q", self.rate_q.as_slice()),
            ("rate_r", self.rate_r.as_slice()),
        ]
    }

    /// Number of rows, or an error if two columns disagree.
    pub fn rows(&self) -> Result<usize> {
        let mut rows = 1;
        for (name, column) in self.columns() {
            match column.len() {
                0 | 1 => {}
                n if rows == 1 => rows = n,
                n if n != rows => {
                    return Err(VlmError::config(
                        "aero_map",
                        format!("column '{}' has {} values, expected {}", name, n, rows),
                    ))
                }
                _ => {}
            }
        }
        Ok(rows)
    }

    /// One flight condition per row.
    pub fn conditions(&self) -> Result<Vec<FlightCondition>> {
        let rows = self.rows()?;
        let at = |column: &[f64], row: usize| match column.len() {
            0 => None,
            1 => Some(column[0]),
            _ => Some(column[row]),
        };

        Ok((0..rows)
            .map(|row| FlightCondition {
                airspeed: at(&self.airspeed, row),
                density: at(&self.density, row),
                mach: at(&self.mach, row),
                altitude: at(&self.altitude, row),
                alpha: at(&self.alpha, row).unwrap_or(0.0),
                beta: at(&self.beta, row).unwrap_or(0.0),
                rate_p: at(&self.rate_p, row).unwrap_or(0.0),
                rate_q: at(&self.rate_q, row).unwrap_or(0.0),
                rate_r: at(&self.rate_r, row).unwrap_or(0.0),
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct RawProject {
    aircraft: Aircraft,
    #[serde(default)]
    analysis: Value,
    #[serde(default)]
    atmosphere: AtmosphereConfig,
    #[serde(default)]
    conditions: Vec<FlightCondition>,
    #[serde(default)]
    aero_map: Option<AeroMap>,
}

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct Project {
    pub aircraft: Aircraft,
    pub analysis: AnalysisConfig,
    pub atmosphere: AtmosphereConfig,
    pub conditions: Vec<FlightCondition>,
}

impl Project {
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawProject = serde_json::from_value(value)?;
        let analysis = AnalysisConfigBuilder::from_json(&raw.analysis)?.build()?;

        let mut conditions = raw.conditions;
        if let Some(map) = raw.aero_map {
            conditions.extend(map.conditions()?);
        }
        if conditions.is_empty() {
            return Err(VlmError::config(
                &raw.aircraft.uid,
                "project defines no flight conditions",
            ));
        }

        Ok(Self {
            aircraft: raw.aircraft,
            analysis,
            atmosphere: raw.atmosphere,
            conditions,
        })
    }

    pub fn parse(text: &str, format: Format) -> Result<Self> {
        Self::from_value(format.parse(text)?)
    }

    /// Flight states of every condition, resolved against the project atmosphere.
    pub fn flight_states(&self) -> Result<Vec<FlightState>> {
        let atmosphere = Atmosphere::new(self.atmosphere.clone());
        self.conditions
            .iter()
            .map(|c| c.resolve(&atmosphere))
            .collect()
    }
}

pub fn load_project(path: impl AsRef<Path>) -> Result<Project> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let project = Project::parse(&text, format)?;

    info!(
        "Loaded project '{}' with {} flight conditions",
        path.display(),
        project.conditions.len()
    );
    Ok(project)
}

/// Results of a run as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResults {
    pub aircraft: String,
    pub panel_count: usize,
    pub results: Vec<AeroResults>,
}

pub fn save_results(path: impl AsRef<Path>, results: &ProjectResults) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serde_json::to_string_pretty(results)?)?;
    info!("Wrote {} results to '{}'", results.results.len(), path.display());
    Ok(())
}

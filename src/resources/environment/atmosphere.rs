use serde::{Deserialize, Serialize};

use crate::resources::errors::{Result, VlmError};

/// Specific gas constant of dry air (J/(kg·K)).
pub const GAS_CONSTANT: f64 = 287.052_87;
/// Ratio of specific heats of air.
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;
/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.806_65;
/// Earth radius used for the geopotential altitude (m).
pub const EARTH_RADIUS: f64 = 6_356_766.0;

const LAPSE_RATE: f64 = 0.0065;
const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;
const MIN_ALTITUDE: f64 = -2_000.0;
const MAX_ALTITUDE: f64 = 20_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: 1.225,
            sea_level_temperature: 288.15,
        }
    }
}

/// Air properties at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereProperties {
    /// Static temperature (K).
    pub temperature: f64,
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Density (kg/m³).
    pub density: f64,
    /// Speed of sound (m/s).
    pub speed_of_sound: f64,
}

/// Maps altitude to air properties.
///
/// The standard model is the ISA troposphere with a linear lapse rate up to the
/// tropopause and an isothermal layer above it, valid between -2 km and 20 km.
/// Altitudes are geometric and converted to geopotential altitude internally.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    config: AtmosphereConfig,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::new(AtmosphereConfig::default())
    }
}

impl Atmosphere {
    pub fn new(config: AtmosphereConfig) -> Self {
        Self { config }
    }

    /// Geopotential altitude of a geometric altitude.
    pub fn geopotential_altitude(altitude: f64) -> f64 {
        EARTH_RADIUS * altitude / (EARTH_RADIUS + altitude)
    }

    /// Air properties at a geometric altitude (m).
    pub fn properties(&self, altitude: f64) -> Result<AtmosphereProperties> {
        if !altitude.is_finite() || !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&altitude) {
            return Err(VlmError::InvalidState(format!(
                "altitude {} m is outside the atmosphere model range [{}, {}] m",
                altitude, MIN_ALTITUDE, MAX_ALTITUDE
            )));
        }

        let t0 = self.config.sea_level_temperature;
        let rho0 = self.config.sea_level_density;
        let p0 = rho0 * GAS_CONSTANT * t0;

        let (temperature, pressure) = match self.config.model_type {
            AtmosphereType::Constant => (t0, p0),
            AtmosphereType::Standard => {
                let altitude = Self::geopotential_altitude(altitude);
                let exponent = STANDARD_GRAVITY / (GAS_CONSTANT * LAPSE_RATE);
                if altitude <= TROPOPAUSE_ALTITUDE {
                    let t = t0 - LAPSE_RATE * altitude;
                    (t, p0 * (t / t0).powf(exponent))
                } else {
                    let t11 = t0 - LAPSE_RATE * TROPOPAUSE_ALTITUDE;
                    let p11 = p0 * (t11 / t0).powf(exponent);
                    let decay = -STANDARD_GRAVITY * (altitude - TROPOPAUSE_ALTITUDE)
                        / (GAS_CONSTANT * t11);
                    (t11, p11 * decay.exp())
                }
            }
        };

        Ok(AtmosphereProperties {
            temperature,
            pressure,
            density: pressure / (GAS_CONSTANT * temperature),
            speed_of_sound: (HEAT_CAPACITY_RATIO * GAS_CONSTANT * temperature).sqrt(),
        })
    }
}

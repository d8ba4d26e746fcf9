use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::{
    environment::Atmosphere,
    errors::{Result, VlmError},
};

const MAX_AERO_ANGLE_DEG: f64 = 90.0;

/// Resolved operating point of one analysis.
///
/// `alpha` and `beta` are in degrees, rates in rad/s about the body axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub airspeed: f64,
    pub density: f64,
    pub alpha: f64,
    pub beta: f64,
    #[serde(default)]
    pub rate_p: f64,
    #[serde(default)]
    pub rate_q: f64,
    #[serde(default)]
    pub rate_r: f64,
}

impl FlightState {
    pub fn new(airspeed: f64, density: f64, alpha: f64, beta: f64) -> Self {
        Self {
            airspeed,
            density,
            alpha,
            beta,
            rate_p: 0.0,
            rate_q: 0.0,
            rate_r: 0.0,
        }
    }

    pub fn with_rates(mut self, p: f64, q: f64, r: f64) -> Self {
        self.rate_p = p;
        self.rate_q = q;
        self.rate_r = r;
        self
    }

    pub fn alpha_rad(&self) -> f64 {
        self.alpha.to_radians()
    }

    pub fn beta_rad(&self) -> f64 {
        self.beta.to_radians()
    }

    /// Unit freestream direction in body axes, `(cos α cos β, -sin β, sin α cos β)`.
    /// Depends on the angles only.
    pub fn freestream_direction(&self) -> Vector3<f64> {
        let (sa, ca) = self.alpha_rad().sin_cos();
        let (sb, cb) = self.beta_rad().sin_cos();
        Vector3::new(ca * cb, -sb, sa * cb)
    }

    /// Freestream velocity in body axes, `V · freestream_direction()`.
    pub fn freestream_velocity(&self) -> Vector3<f64> {
        self.airspeed * self.freestream_direction()
    }

    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.airspeed * self.airspeed
    }

    pub fn rotation_rates(&self) -> Vector3<f64> {
        Vector3::new(self.rate_p, self.rate_q, self.rate_r)
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("airspeed", self.airspeed),
            ("density", self.density),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("rate_p", self.rate_p),
            ("rate_q", self.rate_q),
            ("rate_r", self.rate_r),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(VlmError::InvalidState(format!("'{}' is not finite ({})", name, value)));
        }
        if self.airspeed <= 0.0 {
            return Err(VlmError::InvalidState(format!(
                "airspeed must be positive, got {}",
                self.airspeed
            )));
        }
        if self.density <= 0.0 {
            return Err(VlmError::InvalidState(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        for (name, angle) in [("alpha", self.alpha), ("beta", self.beta)] {
            if angle.abs() > MAX_AERO_ANGLE_DEG {
                return Err(VlmError::InvalidState(format!(
                    "'{}' = {} deg is outside [-90, 90] deg",
                    name, angle
                )));
            }
        }
        Ok(())
    }
}

/// User-facing flight condition.
///
/// Exactly one of the pairs airspeed + density, airspeed + altitude or
/// mach + altitude must be given; the remaining values are filled in from the
/// atmosphere model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightCondition {
    pub airspeed: Option<f64>,
    pub density: Option<f64>,
    pub mach: Option<f64>,
    pub altitude: Option<f64>,
    pub alpha: f64,
    pub beta: f64,
    pub rate_p: f64,
    pub rate_q: f64,
    pub rate_r: f64,
}

impl FlightCondition {
    pub fn airspeed_density(airspeed: f64, density: f64, alpha: f64, beta: f64) -> Self {
        Self {
            airspeed: Some(airspeed),
            density: Some(density),
            alpha,
            beta,
            ..Default::default()
        }
    }

    pub fn airspeed_altitude(airspeed: f64, altitude: f64, alpha: f64, beta: f64) -> Self {
        Self {
            airspeed: Some(airspeed),
            altitude: Some(altitude),
            alpha,
            beta,
            ..Default::default()
        }
    }

    pub fn mach_altitude(mach: f64, altitude: f64, alpha: f64, beta: f64) -> Self {
        Self {
            mach: Some(mach),
            altitude: Some(altitude),
            alpha,
            beta,
            ..Default::default()
        }
    }

    pub fn resolve(&self, atmosphere: &Atmosphere) -> Result<FlightState> {
        let (airspeed, density) = match (self.airspeed, self.density, self.mach, self.altitude) {
            (Some(airspeed), Some(density), None, None) => (airspeed, density),
            (Some(airspeed), None, None, Some(altitude)) => {
                (airspeed, atmosphere.properties(altitude)?.density)
            }
            (None, None, Some(mach), Some(altitude)) => {
                let props = atmosphere.properties(altitude)?;
                (mach * props.speed_of_sound, props.density)
            }
            _ => {
                return Err(VlmError::InvalidState(
                    "set exactly one of: airspeed and density, airspeed and altitude, mach and altitude"
                        .to_string(),
                ))
            }
        };

        let state = FlightState {
            airspeed,
            density,
            alpha: self.alpha,
            beta: self.beta,
            rate_p: self.rate_p,
            rate_q: self.rate_q,
            rate_r: self.rate_r,
        };
        state.validate()?;
        Ok(state)
    }
}

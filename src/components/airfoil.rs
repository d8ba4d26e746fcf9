use serde::{Deserialize, Serialize};

/// Camber-line descriptor of a wing section.
///
/// Only the camber line matters to the lattice: it tilts panel normals. Thickness
/// is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Airfoil {
    /// Flat plate, no camber.
    #[default]
    Flat,
    /// [4-digit NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil), e.g. `"2412"`
    /// or `"NACA2412"`.
    Naca4 { digits: String },
    /// Tabulated camber line `[x, z]` normalised by the chord, x increasing from 0 to 1.
    CamberLine { points: Vec<[f64; 2]> },
}

/// Camber line ready for evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Camber {
    Flat,
    Naca {
        /// Maximum camber (fraction of chord).
        m: f64,
        /// Location of maximum camber (fraction of chord).
        p: f64,
    },
    Table(Vec<[f64; 2]>),
}

impl Airfoil {
    pub fn naca(digits: &str) -> Self {
        Airfoil::Naca4 {
            digits: digits.to_string(),
        }
    }

    /// Checks the descriptor and converts it into an evaluable camber line.
    pub fn camber(&self) -> Result<Camber, String> {
        match self {
            Airfoil::Flat => Ok(Camber::Flat),
            Airfoil::Naca4 { digits } => {
                let trimmed = digits.trim();
                let code = trimmed
                    .strip_prefix("NACA")
                    .or_else(|| trimmed.strip_prefix("naca"))
                    .unwrap_or(trimmed)
                    .trim();
                let values: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
                if code.len() != 4 || values.len() != 4 {
                    return Err(format!("'{}' is not a 4-digit NACA designation", digits));
                }

                let m = values[0] as f64 / 100.0;
                let p = values[1] as f64 / 10.0;
                if m == 0.0 {
                    Ok(Camber::Flat)
                } else if p == 0.0 {
                    Err(format!("'{}' has camber but no camber position", digits))
                } else {
                    Ok(Camber::Naca { m, p })
                }
            }
            Airfoil::CamberLine { points } => {
                if points.len() < 2 {
                    return Err("camber line needs at least two points".to_string());
                }
                if points.iter().flatten().any(|v| !v.is_finite()) {
                    return Err("camber line contains non-finite values".to_string());
                }
                if points.windows(2).any(|w| w[1][0] <= w[0][0]) {
                    return Err("camber line x-coordinates must increase strictly".to_string());
                }
                Ok(Camber::Table(points.clone()))
            }
        }
    }
}

impl Camber {
    /// Slope dz/dx of the camber line at chord fraction `x`.
    pub fn slope(&self, x: f64) -> f64 {
        match self {
            Camber::Flat => 0.0,
            Camber::Naca { m, p } => {
                let x = x.clamp(0.0, 1.0);
                if x < *p {
                    2.0 * m / (p * p) * (p - x)
                } else {
                    2.0 * m / ((1.0 - p) * (1.0 - p)) * (p - x)
                }
            }
            Camber::Table(points) if points.len() < 2 => 0.0,
            Camber::Table(points) => {
                let idx = points
                    .windows(2)
                    .position(|w| x < w[1][0])
                    .unwrap_or(points.len() - 2);
                let [x0, z0] = points[idx];
                let [x1, z1] = points[idx + 1];
                (z1 - z0) / (x1 - x0)
            }
        }
    }
}

use std::f64::consts::PI;

use crate::constants::{ATOMIC_MASS_UNIT, BOLTZMANN_CONSTANT, GRAVITATIONAL_CONSTANT};
use crate::errors::{require_positive, WindError};

/// Isothermal sound speed `sqrt(kB·T / (μ·u))` in m/s for a gas at
/// `temperature` (K) with mean molecular weight `mean_molecular_weight` (in
/// atomic mass units).
pub fn isothermal_sound_speed(
    temperature: f64,
    mean_molecular_weight: f64,
) -> Result<f64, WindError> {
    let temperature = require_positive("temperature", temperature)?;
    let mu = require_positive("mean molecular weight", mean_molecular_weight)?;

    Ok((BOLTZMANN_CONSTANT * temperature / (mu * ATOMIC_MASS_UNIT)).sqrt())
}

/// Sonic radius `G·M / (2·vs²)` in m of a body of `mass` (kg).
pub fn sonic_radius(mass: f64, sound_speed: f64) -> Result<f64, WindError> {
    let mass = require_positive("mass", mass)?;
    let vs = require_positive("sound speed", sound_speed)?;

    Ok(GRAVITATIONAL_CONSTANT * mass / (2.0 * vs.powi(2)))
}

/// Mass-loss rate `4π·r²·ρ·v` in kg/s through a sphere of `radius`.
/// Constant with radius in a steady wind.
pub fn mass_loss_rate(density: f64, radius: f64, velocity: f64) -> Result<f64, WindError> {
    let density = require_positive("density", density)?;
    let radius = require_positive("radius", radius)?;
    if !velocity.is_finite() || velocity < 0.0 {
        return Err(WindError::InvalidInput(format!(
            "velocity must be non-negative and finite, got {}",
            velocity
        )));
    }

    Ok(4.0 * PI * radius.powi(2) * density * velocity)
}

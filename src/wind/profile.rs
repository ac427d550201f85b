use crate::errors::{require_positive, WindError};
use crate::wind::parker::{evaluate_all, validate_parameters, Solution, WindPoint};

/// A wind solved on a grid of radii.
#[derive(Debug, Clone)]
pub struct WindProfile {
    pub sound_speed: f64,
    pub sonic_radius: f64,
    pub solution: Solution,
    pub points: Vec<WindPoint>,
}

impl WindProfile {
    /// Validates the parameters and radii, then solves every radius. Points
    /// outside the real domain are kept with their imaginary part recorded;
    /// see [`WindProfile::domain_violations`].
    pub fn solve(
        radii: &[f64],
        sound_speed: f64,
        sonic_radius: f64,
        solution: Solution,
    ) -> Result<Self, WindError> {
        validate_parameters(sound_speed, sonic_radius, solution)?;
        for &radius in radii {
            require_positive("radius", radius)?;
        }

        Ok(WindProfile {
            sound_speed,
            sonic_radius,
            solution,
            points: evaluate_all(radii, sound_speed, sonic_radius, solution),
        })
    }

    pub fn radii(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.radius).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.velocity).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_velocity(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| point.velocity)
            .filter(|v| v.is_finite())
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Index of the first point beyond the sonic radius.
    pub fn sonic_crossing(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.radius > self.sonic_radius)
    }

    pub fn domain_violations(&self, tolerance: f64) -> Vec<&WindPoint> {
        self.points
            .iter()
            .filter(|point| !point.is_physical(tolerance))
            .collect()
    }

    pub fn mach_numbers(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| point.velocity / self.sound_speed)
            .collect()
    }
}

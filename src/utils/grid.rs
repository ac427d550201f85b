use crate::errors::{require_positive, WindError};

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` logarithmically spaced radii from `start` to `end` inclusive.
pub fn logspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, WindError> {
    let start = require_positive("grid start", start)?;
    let end = require_positive("grid end", end)?;

    Ok(linspace(start.ln(), end.ln(), n)
        .into_iter()
        .enumerate()
        .map(|(i, exponent)| match i {
            0 => start,
            _ if i == n - 1 => end,
            _ => exponent.exp(),
        })
        .collect())
}

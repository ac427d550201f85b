pub mod constants;
pub mod errors;
pub mod reporting;
pub mod special;
pub mod utils;
pub mod wind;

pub use constants::*;
pub use errors::WindError;
pub use special::lambert_w::{lambert_w, Branch};
pub use wind::isothermal::{isothermal_sound_speed, mass_loss_rate, sonic_radius};
pub use wind::parker::{
    evaluate, evaluate_all, solve, solve_into, solve_single, solve_single_with_offset,
    solve_with_offset, try_solve, try_solve_single, Solution, WindPoint,
};
pub use wind::profile::WindProfile;

// Re-export commonly used items from reporting
pub use reporting::wind_report::WindReport;

// Re-export commonly used utilities
pub use utils::grid::{linspace, logspace};

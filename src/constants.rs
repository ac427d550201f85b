// Physical Constants (SI, CODATA 2018)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8; // m/s
pub const PLANCK_CONSTANT: f64 = 6.62607015e-34; // J⋅s
pub const ATOMIC_MASS_UNIT: f64 = 1.66053906660e-27; // kg
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23; // J/K
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // m³/(kg⋅s²)

// Astronomical Lengths (IAU 2012/2015)
pub const ASTRONOMICAL_UNIT: f64 = 1.495978707e11; // m
pub const PARSEC: f64 = 3.085677581491367e16; // m
pub const JUPITER_RADIUS: f64 = 7.1492e7; // m (equatorial)
pub const EARTH_RADIUS: f64 = 6.3781e6; // m (equatorial)
pub const SOLAR_RADIUS: f64 = 6.957e8; // m

// Astronomical Masses (IAU nominal GM / G)
pub const SOLAR_MASS: f64 = 1.988409870698051e30; // kg
pub const JUPITER_MASS: f64 = 1.8981245973360505e27; // kg
pub const EARTH_MASS: f64 = 5.972167867791379e24; // kg

// Lambert-W Solver Parameters
pub const LAMBERT_W_TOLERANCE: f64 = 1e-15; // relative Halley step
pub const LAMBERT_W_MAX_ITERATIONS: usize = 64;
pub const BRANCH_POINT_TOLERANCE: f64 = 1e-14; // |e⋅z + 1| snapped to the branch point

// Wind Solver Parameters
pub const CRITICAL_CONSTANT: f64 = -3.0; // offset constant of the transonic solution
pub const DOMAIN_TOLERANCE: f64 = 1e-10; // largest |Im W| accepted as real

pub mod isothermal;
pub mod parker;
pub mod profile;

use parker_wind::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Photoionized hydrogen outflow from a Jupiter-mass planet
    let temperature = 1.0e4;
    let mean_molecular_weight = 0.6;

    let vs = isothermal_sound_speed(temperature, mean_molecular_weight)?;
    let rs = sonic_radius(JUPITER_MASS, vs)?;

    let radii = logspace(JUPITER_RADIUS, 20.0 * JUPITER_RADIUS, 24)?;
    let profile = WindProfile::solve(&radii, vs, rs, Solution::Critical)?;

    let report = WindReport::new(&profile);
    report.display_data();

    if let Some(index) = profile.sonic_crossing() {
        println!(
            "\nFlow turns supersonic between {:.2} RJ and {:.2} RJ",
            radii[index.saturating_sub(1)] / JUPITER_RADIUS,
            radii[index] / JUPITER_RADIUS
        );
    }

    Ok(())
}

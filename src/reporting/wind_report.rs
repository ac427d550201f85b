use crate::constants::DOMAIN_TOLERANCE;
use crate::wind::parker::{Solution, WindPoint};
use crate::wind::profile::WindProfile;

pub struct WindReport {
    pub log: Vec<String>,
    max_velocity: f64,
    max_mach: f64,
    domain_violations: usize,
    sonic_radius: f64,
    sound_speed: f64,
    solution: Solution,
}

impl WindReport {
    pub fn new(profile: &WindProfile) -> Self {
        let mut report = WindReport {
            log: Vec::new(),
            max_velocity: 0.0,
            max_mach: 0.0,
            domain_violations: 0,
            sonic_radius: profile.sonic_radius,
            sound_speed: profile.sound_speed,
            solution: profile.solution,
        };
        for point in &profile.points {
            report.collect_data(point);
        }
        report
    }

    fn format_distance(distance: f64) -> String {
        if distance >= 1e9 {
            format!("{:.3} Gm", distance / 1e9)
        } else if distance >= 1e6 {
            format!("{:.3} Mm", distance / 1e6)
        } else if distance >= 1e3 {
            format!("{:.3} km", distance / 1e3)
        } else {
            format!("{:.3} m", distance)
        }
    }

    fn format_speed(speed: f64) -> String {
        if speed >= 1e3 {
            format!("{:.3} km/s", speed / 1e3)
        } else {
            format!("{:.3} m/s", speed)
        }
    }

    fn collect_data(&mut self, point: &WindPoint) {
        let mach = point.velocity / self.sound_speed;

        if point.velocity > self.max_velocity {
            self.max_velocity = point.velocity;
        }
        if mach > self.max_mach {
            self.max_mach = mach;
        }

        let mut data = format!(
            "r = {:>12} ({:>8.3} rs) | v = {:>12} | Mach {:.4}",
            Self::format_distance(point.radius),
            point.radius / self.sonic_radius,
            Self::format_speed(point.velocity),
            mach
        );
        if !point.is_physical(DOMAIN_TOLERANCE) {
            self.domain_violations += 1;
            data.push_str(&format!(" | WARNING: Im W = {:.3e}", point.imaginary));
        }
        self.log.push(data);
    }

    pub fn domain_violations(&self) -> usize {
        self.domain_violations
    }

    pub fn display_data(&self) {
        println!("--- Parker Wind Profile ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Profile ---");

        println!("\n--- Wind Summary ---");
        match self.solution {
            Solution::Critical => println!("Solution: critical (transonic)"),
            Solution::Offset(constant) => println!("Solution: offset, C = {}", constant),
        }
        println!("Sound Speed: {}", Self::format_speed(self.sound_speed));
        println!("Sonic Radius: {}", Self::format_distance(self.sonic_radius));
        println!("Max Velocity: {}", Self::format_speed(self.max_velocity));
        println!("Max Mach Number: {:.3}", self.max_mach);
        if self.domain_violations > 0 {
            println!(
                "WARNING: {} point(s) have no real solution; real part of W kept",
                self.domain_violations
            );
        }
    }
}

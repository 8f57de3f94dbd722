/// Physical and comparative data for one catalog planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetRecord {
    pub name: &'static str,   // canonical, e.g. "Earth"
    pub gravity_ratio: f64,   // surface gravity relative to Earth
    pub mass_kg: f64,
    pub radius_m: f64,
    pub day_hours: f64,       // length of one rotation
    pub year_days: f64,       // orbital period in Earth days
}

/// The whole catalog, in listing order.
/// Names must already be in `normalize_name` form or lookups will miss them.
pub static PLANETS: [PlanetRecord; 3] = [
    PlanetRecord {
        name: "Mercury",
        gravity_ratio: 0.38, mass_kg: 3.3011e23, radius_m: 2439.7e3,
        day_hours: 1407.5, year_days: 87.97,
    },
    PlanetRecord {
        name: "Earth",
        gravity_ratio: 1.00, mass_kg: 5.972e24, radius_m: 6371.0e3,
        day_hours: 24.0, year_days: 365.25,
    },
    PlanetRecord {
        name: "Jupiter",
        gravity_ratio: 2.34, mass_kg: 1.898e27, radius_m: 69911e3,
        day_hours: 9.9, year_days: 4332.59,
    },
];

use crate::celestial::lookup;
use crate::constants::G;
use crate::error::ValidationError;

/// Strictly positive; false for NaN.
fn is_positive(x: f64) -> bool {
    x > 0.0
}

/// Body mass index on Earth (kg/m²).
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, ValidationError> {
    if !is_positive(weight_kg) || !is_positive(height_m) {
        return Err(ValidationError::NonPositiveBodyMetrics);
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Effective weight on `planet`, scaled by its gravity ratio.
pub fn weight_on_planet(weight_kg: f64, planet: &str) -> Result<f64, ValidationError> {
    if !is_positive(weight_kg) {
        return Err(ValidationError::NonPositiveWeight);
    }
    let record = lookup(planet)?;
    Ok(weight_kg * record.gravity_ratio)
}

/// Surface escape velocity in m/s: sqrt(2GM/R).
pub fn escape_velocity_ms(planet: &str) -> Result<f64, ValidationError> {
    let record = lookup(planet)?;
    Ok((2.0 * G * record.mass_kg / record.radius_m).sqrt())
}

/// (day length in hours, year length in Earth days).
pub fn planet_facts(planet: &str) -> Result<(f64, f64), ValidationError> {
    let record = lookup(planet)?;
    Ok((record.day_hours, record.year_days))
}

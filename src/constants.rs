// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.674_30e-11;

// Unit conversions
pub const MPS_TO_KMPS: f64 = 1.0e-3;

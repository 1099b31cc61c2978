//! The static main-sequence lookup table.
//!
//! Values are derived from Mamajek's dwarf-star compilation
//! (<http://www.pas.rochester.edu/~emamajek/EEM_dwarf_UBVIJHK_colors_Teff.txt>),
//! one row per subtype from O0V through M9V. No data exists upstream for
//! O0V-O2V, so those rows clone O3V to keep indexing uniform.

use crate::spectral::SpectralClass;

/// The highest tabulated stellar mass usable by the generator, in solar
/// masses (an A0V).
pub const MAXIMUM_STELLAR_MASS: f64 = 2.18;

/// The lowest tabulated stellar mass usable by the generator, in solar
/// masses (an M0V).
pub const MINIMUM_STELLAR_MASS: f64 = 0.57;

/// One row of the main-sequence table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarInfo {
    /// log10 of the effective temperature, in Kelvin.
    pub log_temperature: f64,
    /// log10 of the luminosity, Sol = 0.0.
    pub log_luminosity: f64,
    /// Stellar radius, in solar radii.
    pub radius: f64,
    /// Stellar mass, in solar masses.
    pub mass: f64,
}

const fn row(log_temperature: f64, log_luminosity: f64, radius: f64, mass: f64) -> StellarInfo {
    StellarInfo {
        log_temperature,
        log_luminosity,
        radius,
        mass,
    }
}

/// Main-sequence data, hottest to coolest, ten subtypes per class.
static STELLAR_INFO: [StellarInfo; 70] = [
    row(4.652, 5.82, 13.430, 59.000), // O0V (cloned from O3V)
    row(4.652, 5.82, 13.430, 59.000), // O1V (cloned from O3V)
    row(4.652, 5.82, 13.430, 59.000), // O2V (cloned from O3V)
    row(4.652, 5.82, 13.430, 59.000), // O3V
    row(4.632, 5.65, 12.130, 48.000), // O4V
    row(4.617, 5.54, 11.450, 43.000), // O5V
    row(4.597, 5.36, 10.270, 35.000), // O6V
    row(4.569, 5.18, 9.420, 28.000),  // O7V
    row(4.545, 4.99, 8.470, 23.600),  // O8V
    row(4.522, 4.82, 7.720, 20.200),  // O9V
    row(4.497, 4.65, 7.160, 17.700),  // B0V
    row(4.415, 4.13, 5.710, 11.800),  // B1V
    row(4.314, 3.43, 4.060, 7.300),   // B2V
    row(4.230, 2.99, 3.610, 5.400),   // B3V
    row(4.215, 2.89, 3.460, 5.100),   // B4V
    row(4.196, 2.77, 3.360, 4.700),   // B5V
    row(4.161, 2.57, 3.270, 4.300),   // B6V
    row(4.146, 2.48, 2.940, 3.920),   // B7V
    row(4.090, 2.19, 2.860, 3.380),   // B8V
    row(4.029, 1.86, 2.490, 2.750),   // B9V
    row(3.987, 1.58, 2.193, 2.180),   // A0V
    row(3.968, 1.49, 2.136, 2.050),   // A1V
    row(3.944, 1.38, 2.117, 1.980),   // A2V
    row(3.934, 1.23, 1.861, 1.860),   // A3V
    row(3.917, 1.13, 1.794, 1.930),   // A4V
    row(3.908, 1.09, 1.785, 1.880),   // A5V
    row(3.898, 1.05, 1.775, 1.830),   // A6V
    row(3.890, 1.00, 1.750, 1.770),   // A7V
    row(3.880, 0.96, 1.747, 1.810),   // A8V
    row(3.869, 0.92, 1.747, 1.750),   // A9V
    row(3.859, 0.86, 1.728, 1.610),   // F0V
    row(3.846, 0.79, 1.679, 1.500),   // F1V
    row(3.834, 0.71, 1.622, 1.460),   // F2V
    row(3.829, 0.67, 1.578, 1.440),   // F3V
    row(3.824, 0.62, 1.533, 1.380),   // F4V
    row(3.816, 0.56, 1.473, 1.330),   // F5V
    row(3.803, 0.43, 1.359, 1.250),   // F6V
    row(3.798, 0.39, 1.324, 1.210),   // F7V
    row(3.791, 0.29, 1.221, 1.180),   // F8V
    row(3.782, 0.22, 1.167, 1.130),   // F9V
    row(3.773, 0.13, 1.100, 1.060),   // G0V
    row(3.768, 0.08, 1.060, 1.030),   // G1V
    row(3.761, 0.01, 1.012, 1.000),   // G2V
    row(3.757, -0.01, 1.002, 0.990),  // G3V
    row(3.754, -0.04, 0.991, 0.985),  // G4V
    row(3.753, -0.05, 0.977, 0.980),  // G5V
    row(3.748, -0.10, 0.949, 0.970),  // G6V
    row(3.744, -0.13, 0.927, 0.950),  // G7V
    row(3.739, -0.17, 0.914, 0.940),  // G8V
    row(3.731, -0.26, 0.853, 0.900),  // G9V
    row(3.723, -0.34, 0.813, 0.880),  // K0V
    row(3.713, -0.39, 0.797, 0.860),  // K1V
    row(3.708, -0.43, 0.783, 0.820),  // K2V
    row(3.684, -0.55, 0.755, 0.780),  // K3V
    row(3.663, -0.69, 0.713, 0.730),  // K4V
    row(3.647, -0.76, 0.701, 0.700),  // K5V
    row(3.633, -0.86, 0.669, 0.690),  // K6V
    row(3.613, -1.00, 0.630, 0.640),  // K7V
    row(3.601, -1.06, 0.615, 0.620),  // K8V
    row(3.594, -1.10, 0.608, 0.590),  // K9V
    row(3.585, -1.16, 0.588, 0.570),  // M0V
    row(3.563, -1.39, 0.501, 0.500),  // M1V
    row(3.551, -1.54, 0.446, 0.440),  // M2V
    row(3.535, -1.79, 0.361, 0.370),  // M3V
    row(3.507, -2.14, 0.274, 0.230),  // M4V
    row(3.486, -2.52, 0.196, 0.162),  // M5V
    row(3.449, -2.98, 0.137, 0.102),  // M6V
    row(3.428, -3.19, 0.120, 0.090),  // M7V
    row(3.410, -3.28, 0.114, 0.085),  // M8V
    row(3.377, -3.52, 0.102, 0.079),  // M9V
];

/// Looks up the table row for a classification and subtype.
///
/// Subtypes outside [0, 9] are clamped.
pub fn lookup(class: SpectralClass, subtype: u8) -> &'static StellarInfo {
    let index = class.table_offset() + (subtype.min(9) as usize);

    &STELLAR_INFO[index]
}

/// Returns the star type whose tabulated mass most closely matches `mass`
/// (in solar masses).
///
/// Masses outside the tabulated range clamp to the hottest or coolest entry.
pub fn star_type_for_mass(mass: f64) -> (SpectralClass, u8) {
    let mut best_index = 0;
    let mut best_error = f64::INFINITY;

    for (index, info) in STELLAR_INFO.iter().enumerate() {
        let error = (info.mass - mass).abs();
        if error < best_error {
            best_error = error;
            best_index = index;
        }
    }

    let class = SpectralClass::ALL[best_index / 10];
    (class, (best_index % 10) as u8)
}

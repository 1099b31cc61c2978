//! Thermal helpers: boiling point, greenhouse opacity, and the temperature
//! range shaping used by the surface-condition iteration.

use equations::constants::{ATM_PER_MB, BAR_PER_MILLIBAR, EARTH_SURFACE_PRESSURE_MB};

/// Convection factor from Hart's eq. 20, fit to Earth.
const EARTH_CONVECTION_FACTOR: f64 = 0.43;

/// Given surface pressure in millibars, returns the boiling point of water
/// in Kelvin (Fogg's eq. 21). Zero if there is no atmosphere.
pub fn boiling_point(surface_pressure_mb: f64) -> f64 {
    if surface_pressure_mb <= 0.0 {
        return 0.0;
    }
    let surface_pressure_bars = surface_pressure_mb * BAR_PER_MILLIBAR;

    1.0 / ((surface_pressure_bars.ln() / -5050.5) + (1.0 / 373.0))
}

/// Unitless optical depth used for the greenhouse effect.
///
/// A step table over the minimum retained molecular weight, scaled up for
/// very thick atmospheres.
pub fn opacity(min_molecular_weight: f64, surface_pressure_mb: f64) -> f64 {
    let mut optical_depth = 0.0;

    if (0.0..10.0).contains(&min_molecular_weight) {
        optical_depth += 3.0;
    }
    if (10.0..20.0).contains(&min_molecular_weight) {
        optical_depth += 2.34;
    }
    if (20.0..30.0).contains(&min_molecular_weight) {
        optical_depth += 1.0;
    }
    if (30.0..45.0).contains(&min_molecular_weight) {
        optical_depth += 0.15;
    }
    if (45.0..100.0).contains(&min_molecular_weight) {
        optical_depth += 0.05;
    }

    if surface_pressure_mb >= 70.0 * EARTH_SURFACE_PRESSURE_MB {
        optical_depth *= 8.333;
    } else if surface_pressure_mb >= 50.0 * EARTH_SURFACE_PRESSURE_MB {
        optical_depth *= 6.666;
    } else if surface_pressure_mb >= 30.0 * EARTH_SURFACE_PRESSURE_MB {
        optical_depth *= 3.333;
    } else if surface_pressure_mb >= 10.0 * EARTH_SURFACE_PRESSURE_MB {
        optical_depth *= 2.0;
    } else if surface_pressure_mb >= 5.0 * EARTH_SURFACE_PRESSURE_MB {
        optical_depth *= 1.5;
    }

    optical_depth
}

/// Temperature rise from greenhouse gases, in Kelvin.
///
/// Fogg's eq. 20 (Hart's eq. 20 from "Evolution of Earth's Atmosphere"),
/// with the pressure exponent tuned to 0.4 to match Venus.
pub fn greenhouse_rise(
    effective_temperature: f64,
    min_molecular_weight: f64,
    surface_pressure_mb: f64,
) -> f64 {
    let optical_depth = opacity(min_molecular_weight, surface_pressure_mb);
    let convection_factor =
        EARTH_CONVECTION_FACTOR * (surface_pressure_mb * ATM_PER_MB).powf(0.4);

    (((1.0 + 0.75 * optical_depth).powf(0.25) - 1.0) * effective_temperature * convection_factor)
        .max(0.0)
}

/// Soft limiter mapping any value into (-1, 1), linear near zero.
fn lim(x: f64) -> f64 {
    x / (1.0 + x * x * x * x).sqrt().sqrt()
}

/// Compresses `v` into the `[min, max]` envelope, smoothly saturating at
/// the bounds.
pub fn soft(v: f64, max: f64, min: f64) -> f64 {
    let dv = v - min;
    let dm = max - min;
    (lim(2.0 * dv / dm - 1.0) + 1.0) * 0.5 * dm + min
}

//! Gas retention: RMS velocities, escape lifetimes, and the minimum
//! molecular weight a body holds onto over its star's lifetime.

use crate::constants::{
    CM_PER_KM, CM_PER_M, GAS_RETENTION_THRESHOLD, MOLAR_GAS_CONSTANT, YEARS_PER_SECOND,
};

/// Returns the root-mean-squared velocity of a molecule, in m/s.
///
/// # Arguments
/// * `molecular_weight` - Molecular weight of the species.
/// * `exosphere_temperature` - Exosphere temperature, in Kelvin.
pub fn rms_velocity(molecular_weight: f64, exosphere_temperature: f64) -> f64 {
    (3.0 * MOLAR_GAS_CONSTANT * exosphere_temperature / molecular_weight).sqrt()
}

/// Returns the heaviest molecular weight whose RMS velocity reaches the
/// retention fraction of the body's escape velocity.
///
/// This is the Jeans-escape starting point for the retained-weight search:
/// anything lighter escapes on short timescales.
///
/// # Arguments
/// * `escape_velocity` - Escape velocity of the body, in m/s.
/// * `exosphere_temperature` - Exosphere temperature, in Kelvin.
pub fn molecular_limit(escape_velocity: f64, exosphere_temperature: f64) -> f64 {
    let retained_velocity = escape_velocity / GAS_RETENTION_THRESHOLD;

    (3.0 * MOLAR_GAS_CONSTANT * exosphere_temperature) / (retained_velocity * retained_velocity)
}

/// Returns the number of years for 1/e of a gas species to escape a body.
///
/// # Arguments
/// * `molecular_mass` - Molecular weight of the species.
/// * `exosphere_temperature` - Exosphere temperature, in Kelvin.
/// * `surface_acceleration` - Surface gravitational acceleration, in m/s^2.
/// * `radius` - Radius of the body, in km.
pub fn gas_life(
    molecular_mass: f64,
    exosphere_temperature: f64,
    surface_acceleration: f64,
    radius: f64,
) -> f64 {
    let v = rms_velocity(molecular_mass, exosphere_temperature) * CM_PER_M;
    let g = surface_acceleration * CM_PER_M;
    let r = radius * CM_PER_KM;

    let t = (v.powf(3.0) / (2.0 * g.powf(2.0) * r)) * ((3.0 * g * r) / v.powf(2.0)).exp();

    t * YEARS_PER_SECOND
}

/// Converges on the minimum molecular weight retained by a body over the age
/// of its star.
///
/// The search brackets the weight whose escape lifetime equals the stellar
/// age by repeated doubling or halving from the Jeans limit, then bisects to
/// a 0.1-weight tolerance.
///
/// # Arguments
/// * `escape_velocity` - Escape velocity of the body, in m/s.
/// * `exosphere_temperature` - Exosphere temperature, in Kelvin.
/// * `surface_acceleration` - Surface gravitational acceleration, in m/s^2.
/// * `radius` - Radius of the body, in km.
/// * `stellar_age` - Age of the star, in years.
pub fn minimum_molecular_weight(
    escape_velocity: f64,
    exosphere_temperature: f64,
    surface_acceleration: f64,
    radius: f64,
    stellar_age: f64,
) -> f64 {
    let goal_age = stellar_age;

    let mut molecular_mass = molecular_limit(escape_velocity, exosphere_temperature);
    let mut previous_mass = molecular_mass;

    let mut life = gas_life(
        molecular_mass,
        exosphere_temperature,
        surface_acceleration,
        radius,
    );

    if life > goal_age {
        // Retention is high at the starting weight; halve downward to find
        // the bracket.
        while life > goal_age {
            previous_mass = molecular_mass;
            molecular_mass *= 0.5;

            life = gas_life(
                molecular_mass,
                exosphere_temperature,
                surface_acceleration,
                radius,
            );
        }
    } else {
        // Retention is low; double upward until a retained weight is found.
        while life < goal_age {
            previous_mass = molecular_mass;
            molecular_mass *= 2.0;

            life = gas_life(
                molecular_mass,
                exosphere_temperature,
                surface_acceleration,
                radius,
            );
        }
        // molecular_mass must be the lower end of the bisection bracket.
        std::mem::swap(&mut previous_mass, &mut molecular_mass);
    }

    while previous_mass - molecular_mass > 0.1 {
        let mid_mass = (previous_mass + molecular_mass) * 0.5;
        life = gas_life(
            mid_mass,
            exosphere_temperature,
            surface_acceleration,
            radius,
        );

        if life < goal_age {
            molecular_mass = mid_mass;
        } else {
            previous_mass = mid_mass;
        }
    }

    (previous_mass + molecular_mass) * 0.5
}

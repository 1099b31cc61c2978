//! One-shot physical evaluation of an accreted body.
//!
//! The pipeline classifies the body as gaseous or rocky from its accreted
//! gas fraction and the critical mass at its orbit, derives the bulk
//! properties through the Kothari radius equation, simulates H2/He escape
//! for marginal gas dwarfs, iterates the coupled surface conditions
//! (albedo, hydrosphere, clouds, ice, greenhouse) to convergence, optionally
//! synthesizes an atmosphere, and settles the final classification.

use log::{debug, warn};
use rand::Rng;

use equations::constants::{
    ASTEROID_MASS_LIMIT, BAR_PER_MILLIBAR, BROWN_DWARF_TRANSITION,
    CM_PER_KM, EARTH_AVERAGE_TEMPERATURE, EARTH_DENSITY, EARTH_ESCAPE_VELOCITY,
    EARTH_EFFECTIVE_TEMPERATURE, EARTH_EXOSPHERE_TEMPERATURE, EARTH_HYDROSPHERE,
    EARTH_MASS_IN_GRAMS, EARTH_PARTIAL_PRESSURE_OXYGEN, EARTH_RADIUS_KM,
    EARTH_SURFACE_PRESSURE_MB, EARTH_WATER_MASS_PER_KM2, FREEZING_POINT_WATER,
    GAS_RETENTION_THRESHOLD, GRAVITY_CONSTANT, HOURS_PER_DAY, ICE_GIANT_TRANSITION, M_PER_CM,
    RADIANS_PER_CIRCLE, ROCKY_TRANSITION, SECONDS_PER_HOUR, SOLAR_MASS_IN_GRAMS,
    SOLAR_MASS_TO_EARTH_MASS, SOLAR_MASS_TO_JOVIAN_MASS, WEIGHT_HELIUM,
    WEIGHT_MOLECULAR_HYDROGEN, WEIGHT_MOLECULAR_NITROGEN, WEIGHT_WATER_VAPOR,
};
use equations::{
    critical_limit, escape_velocity, gas_life, kothari_radius, lerp, minimum_molecular_weight,
    orbital_dominance, period_days, rms_velocity, volume_density,
};
use stellar::Star;
use units::{Length, Mass};

use crate::atmosphere::{AtmosphereComponent, Gas};
use crate::planet::Planet;
use crate::planet_type::PlanetType;
use crate::temperature::{boiling_point, greenhouse_rise, soft};
use crate::variation::{random_about, random_near, random_tilt, EARTH_AXIAL_TILT};

/// Minimum gas fraction of the total mass for a gaseous classification.
const GASEOUS_PLANET_THRESHOLD: f64 = 0.05;

/// Minimum gas fraction that still matters for volatile bookkeeping.
const ICE_PLANET_THRESHOLD: f64 = 0.000_001;

/// Albedo used for the runaway-greenhouse trigger test.
const GREENHOUSE_TRIGGER_ALBEDO: f64 = 0.20;

/// Albedo of liquid water.
const ALBEDO_WATER: f64 = 0.04;
/// Albedo of ice under an atmosphere.
const ALBEDO_ICE: f64 = 0.7;
/// Albedo of airless ice.
const ALBEDO_ICE_AIRLESS: f64 = 0.4;
/// Albedo of rock under an atmosphere.
const ALBEDO_ROCK: f64 = 0.15;
/// Albedo of airless rock.
const ALBEDO_ROCK_AIRLESS: f64 = 0.07;
/// Albedo of cloud.
const ALBEDO_CLOUD: f64 = 0.52;
/// Albedo of the Earth.
const ALBEDO_EARTH: f64 = 0.3;
/// Mean albedo of our system's four gaseous worlds.
const ALBEDO_GAS_GIANT: f64 = 0.492;
/// Three standard deviations of the gaseous worlds' albedo.
const THREE_SIGMA_ALBEDO_GAS_GIANT: f64 = 0.1185;

/// Rotational energy coefficient for day-length derivation, cm^2/s^2 * g.
const DAY_LENGTH_J: f64 = 1.46e-19;

/// Change in Earth's angular velocity, radians/sec per year (Goldreich &
/// Soter's Q).
const CHANGE_IN_EARTH_ANGULAR_VELOCITY: f64 = -1.3e-15;

/// Surface area covered by one kg of cloud, km^2/kg.
const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;

/// Exponential coefficient in cloud mass vs. temperature, 1/Kelvin.
const Q2_36: f64 = 0.0698;

/// Surface-condition iterations before giving up on convergence.
const MAX_CONVERGENCE_ITERATIONS: u32 = 25;

/// Convergence tolerance on the mean surface temperature, in Kelvin.
const CONVERGENCE_TOLERANCE: f64 = 0.25;

/// Minimum Earth Similarity pre-score before atmosphere synthesis runs.
const ATMOSPHERE_ESI_CUTOFF: f64 = 0.50;

/// Volatile-inventory proportion constants by material zone.
const PROPORTION_CONSTANT_BY_ZONE: [f64; 3] = [100_000.0, 75_000.0, 250.0];

/// Volatile-inventory divisor for bodies without a runaway greenhouse or a
/// meaningful gas fraction.
const VOLATILE_STANDARD_DIVISOR: f64 = 100.0;

/// Caller-tunable switches for planet evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationOptions {
    /// Synthesize an atmospheric composition for qualifying rocky bodies.
    pub compute_gases: bool,
    /// Randomize axial tilt; when false every body gets zero tilt.
    pub random_axial_tilt: bool,
    /// Random variation applied to the derived radius, as a ratio.
    pub density_variation: f64,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        EvaluationOptions {
            compute_gases: false,
            random_axial_tilt: false,
            density_variation: 0.025,
        }
    }
}

/// Star-derived scalars threaded through the evaluation steps.
struct EvalState {
    ecosphere: f64,
    stellar_mass: f64,
    stellar_age: f64,
    material_zone: f64,
}

impl Planet {
    /// Derives every physical property of the body and classifies it.
    ///
    /// Must run after the star has been evaluated. Idempotent: once a
    /// planet is evaluated, further calls do nothing.
    pub fn evaluate(&mut self, star: &Star, options: &EvaluationOptions, rng: &mut impl Rng) {
        if self.evaluated {
            return;
        }
        debug_assert!(star.is_evaluated(), "planet evaluated against an unevaluated star");

        let sma = self.semi_major_axis.to_au();
        let eccentricity = self.eccentricity;
        let mut total_mass = self.mass.to_solar_masses();
        let dust_mass = self.dust_mass.to_solar_masses();
        let mut gas_mass = self.gas_mass.to_solar_masses();

        let state = EvalState {
            ecosphere: star.ecosphere(),
            stellar_mass: star.mass(),
            stellar_age: star.age(),
            material_zone: star.material_zone(sma),
        };

        self.orbital_period_days = period_days(sma, total_mass, state.stellar_mass);
        self.periapsis = Length::from_au(sma * (1.0 - eccentricity));
        self.apoapsis = Length::from_au(sma * (1.0 + eccentricity));
        self.orbital_dominance = orbital_dominance(total_mass, sma);
        self.orbital_zone = star.orbital_zone(sma);
        self.axial_tilt = if options.random_axial_tilt {
            random_tilt(rng, sma, EARTH_AXIAL_TILT)
        } else {
            0.0
        };

        let ecosphere_ratio = sma / state.ecosphere;
        self.exosphere_temperature =
            EARTH_EXOSPHERE_TEMPERATURE / (ecosphere_ratio * ecosphere_ratio);
        self.rms_velocity = rms_velocity(WEIGHT_MOLECULAR_NITROGEN, self.exosphere_temperature);

        // One radius-variation draw, applied to every radius derivation so
        // identical masses don't produce identical worlds.
        let radius_variation = random_about(rng, 1.0, options.density_variation);

        let gas_critical = dust_mass > critical_limit(sma, eccentricity, star.luminosity());
        self.planet_type = PlanetType::Rocky;

        let mut radius_km = if gas_critical && (gas_mass / total_mass) > GASEOUS_PLANET_THRESHOLD
        {
            // Provisionally a gas world.
            let gas_radius =
                kothari_radius(total_mass, true, state.material_zone) * radius_variation;
            self.escape_velocity = escape_velocity(total_mass, gas_radius);
            self.surface_acceleration = surface_acceleration(total_mass, gas_radius);
            self.min_molecular_weight = minimum_molecular_weight(
                self.escape_velocity,
                self.exosphere_temperature,
                self.surface_acceleration,
                gas_radius,
                state.stellar_age,
            );

            let sufficient_retention = self.min_molecular_weight <= 4.0;
            let sufficient_mass = total_mass > ROCKY_TRANSITION;
            if sufficient_retention && sufficient_mass {
                self.planet_type = PlanetType::Gaseous;
            } else {
                debug!(
                    "gaseous planet at {:.3} AU demoted to rocky: {} retention, {} mass",
                    sma,
                    if sufficient_retention { "sufficient" } else { "inadequate" },
                    if sufficient_mass { "sufficient" } else { "inadequate" }
                );
            }

            gas_radius
        } else {
            0.0
        };

        if self.planet_type == PlanetType::Rocky {
            radius_km = kothari_radius(total_mass, false, state.material_zone) * radius_variation;
            self.escape_velocity = escape_velocity(total_mass, radius_km);
            self.surface_acceleration = surface_acceleration(total_mass, radius_km);
            self.min_molecular_weight = minimum_molecular_weight(
                self.escape_velocity,
                self.exosphere_temperature,
                self.surface_acceleration,
                radius_km,
                state.stellar_age,
            );

            // A failed gaseous body: simulate hydrogen and helium bleeding
            // away over the star's lifetime.
            if (gas_mass / total_mass) > ICE_PLANET_THRESHOLD && total_mass > ROCKY_TRANSITION {
                debug!(
                    "re-evaluating rocky planet at {:.3} AU as gas dwarf (gas ratio {:.3})",
                    sma,
                    gas_mass / total_mass
                );

                let h2_mass = gas_mass * 0.85;
                let h2_life = gas_life(
                    WEIGHT_MOLECULAR_HYDROGEN,
                    self.exosphere_temperature,
                    self.surface_acceleration,
                    radius_km,
                );
                let mut lost_mass = false;

                if h2_life < state.stellar_age {
                    let h2_loss = (1.0 - (-state.stellar_age / h2_life).exp()) * h2_mass;
                    gas_mass -= h2_loss;
                    total_mass -= h2_loss;
                    debug_assert!(gas_mass >= 0.0);
                    gas_mass = gas_mass.max(0.0);
                    lost_mass = true;
                }

                let he_mass = ((gas_mass - h2_mass) * 0.999).max(0.0);
                let he_life = gas_life(
                    WEIGHT_HELIUM,
                    self.exosphere_temperature,
                    self.surface_acceleration,
                    radius_km,
                );
                if he_life < state.stellar_age {
                    let he_loss = (1.0 - (-state.stellar_age / he_life).exp()) * he_mass;
                    gas_mass -= he_loss;
                    total_mass -= he_loss;
                    debug_assert!(gas_mass >= 0.0);
                    gas_mass = gas_mass.max(0.0);
                    lost_mass = true;
                }

                if lost_mass {
                    radius_km =
                        kothari_radius(total_mass, false, state.material_zone) * radius_variation;
                    self.escape_velocity = escape_velocity(total_mass, radius_km);
                    self.surface_acceleration = surface_acceleration(total_mass, radius_km);
                    self.min_molecular_weight = minimum_molecular_weight(
                        self.escape_velocity,
                        self.exosphere_temperature,
                        self.surface_acceleration,
                        radius_km,
                        state.stellar_age,
                    );
                }

                // What survived may still be a gaseous world after all.
                let trigger_temp = self.effective_temperature(GREENHOUSE_TRIGGER_ALBEDO, &state);
                self.runaway_greenhouse = trigger_temp > FREEZING_POINT_WATER;

                self.radius = Length::from_km(radius_km);
                self.calculate_surface_pressure(&state, total_mass, gas_mass, rng);
                if self.surface_pressure > 6000.0 && self.min_molecular_weight <= 2.0 {
                    debug!("gas dwarf at {:.3} AU re-promoted to gaseous", sma);
                    self.planet_type = PlanetType::Gaseous;
                    self.runaway_greenhouse = false;
                }
            }
        }

        self.radius = Length::from_km(radius_km);
        self.mass = Mass::from_solar_masses(total_mass);
        self.gas_mass = Mass::from_solar_masses(gas_mass);
        self.density = volume_density(total_mass, radius_km);

        self.calculate_day_length(&state, total_mass, radius_km);

        if self.planet_type == PlanetType::Gaseous {
            // Sub-classify by mass; cutoffs from Chen et al. 2017.
            let jovian_mass = total_mass * SOLAR_MASS_TO_JOVIAN_MASS;
            if jovian_mass > BROWN_DWARF_TRANSITION {
                self.planet_type = PlanetType::BrownDwarf;
            } else {
                self.planet_type = if jovian_mass > ICE_GIANT_TRANSITION {
                    PlanetType::GasGiant
                } else {
                    PlanetType::IceGiant
                };

                if total_mass < ROCKY_TRANSITION {
                    warn!(
                        "ice giant at {:.3} AU with only {:.2} Earth masses",
                        sma,
                        total_mass * SOLAR_MASS_TO_EARTH_MASS
                    );
                }
            }

            self.albedo = random_near(rng, ALBEDO_GAS_GIANT, THREE_SIGMA_ALBEDO_GAS_GIANT);
        } else {
            // If the orbit keeps surface water from ever condensing, the
            // volatiles stay airborne as a runaway greenhouse. The trigger
            // albedo is chosen so the boundary matches the older
            // inside-the-greenhouse-radius test.
            let trigger_temp = self.effective_temperature(GREENHOUSE_TRIGGER_ALBEDO, &state);
            self.runaway_greenhouse = trigger_temp > FREEZING_POINT_WATER;

            self.calculate_surface_pressure(&state, total_mass, gas_mass, rng);

            self.iterate_surface_conditions(&state, total_mass, gas_mass, rng);

            self.earth_similarity_index = self.earth_similarity();

            if options.compute_gases
                && self.earth_similarity_index > ATMOSPHERE_ESI_CUTOFF
                && self.max_temperature >= FREEZING_POINT_WATER
            {
                self.calculate_gases(&state, total_mass, gas_mass);
                self.earth_similarity_index = self.earth_similarity();
            }

            let earth_masses = total_mass * SOLAR_MASS_TO_EARTH_MASS;
            self.planet_type = if earth_masses < ASTEROID_MASS_LIMIT {
                PlanetType::AsteroidBelt
            } else if self.orbital_dominance < 1.0 {
                PlanetType::DwarfPlanet
            } else if self.surface_pressure < 1.0 {
                PlanetType::Rocky
            } else if self.hydrosphere > 0.95 {
                PlanetType::Ocean
            } else if self.ice_coverage > 0.95 || self.surface_temperature < FREEZING_POINT_WATER
            {
                PlanetType::IcePlanet
            } else if self.hydrosphere > 0.05 {
                PlanetType::Terrestrial
            } else {
                PlanetType::Rocky
            };

            if self.planet_type == PlanetType::AsteroidBelt {
                // Too dissimilar to score.
                self.earth_similarity_index = 0.0;
            }
        }

        self.evaluated = true;
    }

    /// Effective (black-body) temperature at this orbit for a given albedo,
    /// in Kelvin. Scaled from Earth's.
    fn effective_temperature(&self, albedo: f64, state: &EvalState) -> f64 {
        (state.ecosphere / self.semi_major_axis.to_au()).sqrt()
            * ((1.0 - albedo) / (1.0 - ALBEDO_EARTH)).powf(0.25)
            * EARTH_EFFECTIVE_TEMPERATURE
    }

    /// Fogg's eq. 17: a unitless volatile inventory from the mass, material
    /// zone, and gas retention of the body.
    fn volatile_inventory(
        &self,
        state: &EvalState,
        total_mass: f64,
        gas_mass: f64,
        rng: &mut impl Rng,
    ) -> f64 {
        let velocity_ratio = self.escape_velocity / self.rms_velocity;
        if velocity_ratio < GAS_RETENTION_THRESHOLD {
            return 0.0;
        }

        let zone = state.material_zone;
        let proportion_constant = if zone < 2.0 {
            lerp(
                zone - 1.0,
                PROPORTION_CONSTANT_BY_ZONE[0],
                PROPORTION_CONSTANT_BY_ZONE[1],
            )
        } else {
            lerp(
                zone - 2.0,
                PROPORTION_CONSTANT_BY_ZONE[1],
                PROPORTION_CONSTANT_BY_ZONE[2],
            )
        };

        let mass_in_earths = total_mass * SOLAR_MASS_TO_EARTH_MASS;
        let center = proportion_constant * mass_in_earths / state.stellar_mass;

        if self.runaway_greenhouse || (gas_mass / total_mass) > ICE_PLANET_THRESHOLD {
            random_about(rng, center, 0.2)
        } else {
            random_about(rng, center / VOLATILE_STANDARD_DIVISOR, 0.2)
        }
    }

    /// Updates the volatile inventory, surface pressure, and boiling point.
    fn calculate_surface_pressure(
        &mut self,
        state: &EvalState,
        total_mass: f64,
        gas_mass: f64,
        rng: &mut impl Rng,
    ) {
        self.volatile_gas_inventory = self.volatile_inventory(state, total_mass, gas_mass, rng);
        if self.volatile_gas_inventory > 0.0 {
            let radius_ratio = EARTH_RADIUS_KM / self.radius.to_km();

            self.surface_pressure = self.volatile_gas_inventory
                * self.surface_gravity()
                * EARTH_SURFACE_PRESSURE_MB
                * BAR_PER_MILLIBAR
                / (radius_ratio * radius_ratio);

            self.boiling_point = boiling_point(self.surface_pressure);
        } else {
            self.surface_pressure = 0.0;
            self.boiling_point = 0.0;
        }
    }

    /// Solves for the length of the local day, in hours, and detects
    /// spin-orbit resonance.
    ///
    /// Dole's base angular velocity (his eq. 12, via Fogg) plus the tidal
    /// braking term from Goldreich & Soter scaled by the star's age. A body
    /// whose day would exceed its year is tidally locked; a sufficiently
    /// eccentric orbit locks into a fractional resonance instead of 1:1.
    fn calculate_day_length(&mut self, state: &EvalState, total_mass: f64, radius_km: f64) {
        let mass_grams = total_mass * SOLAR_MASS_IN_GRAMS;
        let year_hours = self.orbital_period_days * HOURS_PER_DAY;
        let gaseous = self.planet_type.is_gaseous();

        let k2 = if gaseous { 0.24 } else { 0.33 };
        let base_angular_velocity =
            (2.0 * DAY_LENGTH_J * mass_grams / (k2 * (radius_km * CM_PER_KM).powf(2.0))).sqrt();

        let delta_angular_velocity = CHANGE_IN_EARTH_ANGULAR_VELOCITY
            * (self.density / EARTH_DENSITY)
            * (radius_km / EARTH_RADIUS_KM)
            * (EARTH_MASS_IN_GRAMS / mass_grams)
            * state.stellar_mass.powf(2.0)
            * (1.0 / self.semi_major_axis.to_au().powf(6.0));
        let angular_velocity = base_angular_velocity + delta_angular_velocity * state.stellar_age;

        self.day_length_hours = if angular_velocity <= 0.0 {
            year_hours
        } else {
            RADIANS_PER_CIRCLE / (SECONDS_PER_HOUR * angular_velocity)
        };

        self.spin_resonance_factor = 0.0;
        if self.day_length_hours >= year_hours {
            self.resonant = true;
            self.spin_resonance_factor = if self.eccentricity > 0.1 {
                (1.0 - self.eccentricity) / (1.0 + self.eccentricity)
            } else {
                1.0
            };

            self.day_length_hours = self.spin_resonance_factor * year_hours;
        }
    }

    /// Runs the surface-condition relaxation until the mean temperature
    /// settles (or the iteration budget runs out, which is reported but not
    /// fatal; the last state stands).
    fn iterate_surface_conditions(
        &mut self,
        state: &EvalState,
        total_mass: f64,
        gas_mass: f64,
        rng: &mut impl Rng,
    ) {
        self.calculate_surface_conditions(state, total_mass, gas_mass, true, rng);

        let mut converged = false;
        let mut delta = 0.0;
        for _ in 0..MAX_CONVERGENCE_ITERATIONS {
            let previous = self.surface_temperature;
            self.calculate_surface_conditions(state, total_mass, gas_mass, false, rng);

            delta = (previous - self.surface_temperature).abs();
            if delta < CONVERGENCE_TOLERANCE {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!(
                "surface conditions at {:.3} AU did not converge in {} iterations; last delta {:.3} K",
                self.semi_major_axis.to_au(),
                MAX_CONVERGENCE_ITERATIONS,
                delta
            );
        }
    }

    /// One relaxation step of the coupled surface conditions.
    ///
    /// The first step (`initialize`) takes the newly computed values
    /// outright from an Earth-albedo starting point; subsequent steps blend
    /// one part new state into two parts old to damp oscillation.
    fn calculate_surface_conditions(
        &mut self,
        state: &EvalState,
        total_mass: f64,
        gas_mass: f64,
        initialize: bool,
        rng: &mut impl Rng,
    ) {
        if initialize {
            self.albedo = ALBEDO_EARTH;

            let effective = self.effective_temperature(self.albedo, state);
            let rise = greenhouse_rise(
                effective,
                self.min_molecular_weight,
                self.surface_pressure,
            );
            self.surface_temperature = effective + rise;

            self.set_temperature_range();
        }

        if self.runaway_greenhouse && self.max_temperature < self.boiling_point {
            // Too cool to sustain the runaway greenhouse after all.
            self.runaway_greenhouse = false;
            self.calculate_surface_pressure(state, total_mass, gas_mass, rng);
        }

        // Fogg's eq. 22: water coverage from the volatile inventory.
        let radius_km = self.radius.to_km();
        let mut new_hydrosphere = ((EARTH_HYDROSPHERE * self.volatile_gas_inventory / 1000.0)
            * (EARTH_RADIUS_KM / radius_km).powf(2.0))
        .min(1.0);

        // Fogg's eq. 23 (Hart's eq. 3): cloud fraction from the water vapor
        // the surface temperature keeps aloft.
        let new_cloud_coverage = if self.min_molecular_weight > WEIGHT_WATER_VAPOR {
            0.0
        } else {
            let surface_area = 4.0 * std::f64::consts::PI * radius_km * radius_km;
            let hydro_mass = new_hydrosphere * surface_area * EARTH_WATER_MASS_PER_KM2;
            let water_vapor = (0.000_000_01 * hydro_mass)
                * (Q2_36 * (self.surface_temperature - EARTH_AVERAGE_TEMPERATURE)).exp();

            (CLOUD_COVERAGE_FACTOR * water_vapor / surface_area).min(1.0)
        };

        // Fogg's eq. 24, with the constant moved from 70 to 90 to match
        // Earth's actual ice fraction.
        let mut new_ice_coverage = (1.5 * new_hydrosphere)
            .min(((328.0 - self.surface_temperature) / 90.0).powi(5));
        new_ice_coverage = new_ice_coverage.clamp(0.0, 1.0);

        if new_hydrosphere + new_ice_coverage > 1.0 {
            new_hydrosphere = 1.0 - new_ice_coverage;
        }

        if self.runaway_greenhouse && self.surface_pressure > 0.0 {
            self.cloud_coverage = 1.0;
        }

        let locked_day = (self.day_length_hours as i64)
            == ((self.orbital_period_days * HOURS_PER_DAY) as i64);
        if self.high_temperature >= self.boiling_point
            && !initialize
            && !(locked_day || self.resonant)
        {
            // Boil-off.
            self.hydrosphere = 0.0;
            new_hydrosphere = 0.0;
            self.cloud_coverage = if self.min_molecular_weight > WEIGHT_WATER_VAPOR {
                0.0
            } else {
                1.0
            };
        }

        if self.surface_temperature < FREEZING_POINT_WATER - 3.0 {
            // Frozen solid.
            self.hydrosphere = 0.0;
            new_hydrosphere = 0.0;
        }

        if initialize {
            self.hydrosphere = new_hydrosphere;
            self.cloud_coverage = new_cloud_coverage;
            self.ice_coverage = new_ice_coverage;
        } else {
            self.hydrosphere = (2.0 * self.hydrosphere + new_hydrosphere) / 3.0;
            self.cloud_coverage = (2.0 * self.cloud_coverage + new_cloud_coverage) / 3.0;
            self.ice_coverage = (2.0 * self.ice_coverage + new_ice_coverage) / 3.0;

            if self.hydrosphere + self.ice_coverage > 1.0 {
                self.hydrosphere = 1.0 - self.ice_coverage;
            }
        }

        let new_albedo = self.calculate_albedo(rng);
        if initialize {
            self.albedo = new_albedo;
        } else {
            self.albedo = (2.0 * self.albedo + new_albedo) / 3.0;
        }

        let effective = self.effective_temperature(self.albedo, state);
        let rise = greenhouse_rise(effective, self.min_molecular_weight, self.surface_pressure);
        let new_surface_temperature = effective + rise;

        if initialize {
            self.surface_temperature = new_surface_temperature;
        } else {
            self.surface_temperature =
                (2.0 * self.surface_temperature + new_surface_temperature) / 3.0;
        }

        self.set_temperature_range();
    }

    /// Mixes the water/ice/rock/cloud albedos, each randomized near its
    /// published mean, weighted by surface coverage.
    fn calculate_albedo(&self, rng: &mut impl Rng) -> f64 {
        let mut water_fraction = self.hydrosphere;
        let mut ice_fraction = self.ice_coverage;
        // The remainder can dip slightly negative from round-off.
        let mut rock_fraction = (1.0 - water_fraction - ice_fraction).max(0.0);

        let components = [water_fraction, ice_fraction, rock_fraction]
            .iter()
            .filter(|&&f| f > 0.0)
            .count() as f64;
        debug_assert!(components > 0.0);

        let cloud_adjustment = self.cloud_coverage / components;

        water_fraction = (water_fraction - cloud_adjustment).max(0.0);
        ice_fraction = (ice_fraction - cloud_adjustment).max(0.0);
        rock_fraction = (rock_fraction - cloud_adjustment).max(0.0);

        let airless = self.surface_pressure == 0.0;
        let water_albedo = water_fraction
            * if airless {
                0.0
            } else {
                random_near(rng, ALBEDO_WATER, ALBEDO_WATER * 0.2)
            };
        let ice_albedo = ice_fraction
            * if airless {
                random_near(rng, ALBEDO_ICE_AIRLESS, ALBEDO_ICE_AIRLESS * 0.4)
            } else {
                random_near(rng, ALBEDO_ICE, ALBEDO_ICE * 0.1)
            };
        let rock_albedo = rock_fraction
            * if airless {
                random_near(rng, ALBEDO_ROCK_AIRLESS, ALBEDO_ROCK_AIRLESS * 0.3)
            } else {
                random_near(rng, ALBEDO_ROCK, ALBEDO_ROCK * 0.1)
            };
        let cloud_albedo = self.cloud_coverage
            * if airless {
                0.0
            } else {
                random_near(rng, ALBEDO_CLOUD, ALBEDO_CLOUD * 0.2)
            };

        water_albedo + ice_albedo + rock_albedo + cloud_albedo
    }

    /// Derives the day/night and seasonal temperature extremes from the
    /// mean, shaped by day length, pressure, tilt, and eccentricity.
    fn set_temperature_range(&mut self) {
        let mean = self.surface_temperature;
        let day = self.day_length_hours;

        let max_t = mean + mean.sqrt() * 10.0;
        let min_t = mean / (day + HOURS_PER_DAY).sqrt();

        let pressure_bars = self.surface_pressure * BAR_PER_MILLIBAR;
        let pressmod = 1.0 / (1.0 + 20.0 * pressure_bars).sqrt();
        let ppmod = 1.0 / (10.0 + 5.0 * pressure_bars).sqrt();
        let tiltmod = (self.axial_tilt.to_radians().cos()
            * (1.0 + self.eccentricity).powf(2.0))
        .abs();
        let daymod = 1.0 / (200.0 / day + 1.0);

        let mh = (1.0 + daymod).powf(pressmod);
        let ml = (1.0 - daymod).powf(pressmod);

        let hi = mh * mean;
        let lo = (ml * mean).max(min_t);
        let sh = hi + ((100.0 + hi) * tiltmod).powf(ppmod.sqrt());
        let wl = (lo - ((150.0 + lo) * tiltmod).powf(ppmod.sqrt())).max(0.0);

        self.high_temperature = soft(hi, max_t, min_t);
        self.low_temperature = soft(lo, max_t, min_t);
        self.max_temperature = soft(sh, max_t, min_t);
        self.min_temperature = soft(wl, max_t, min_t);
    }

    /// Synthesizes the atmospheric composition for a rocky body.
    ///
    /// Each species is screened by condensation against the nighttime
    /// temperature and by weight against the retention floor, then weighted
    /// by abundance, by Jeans-escape survival over the star's age, and by a
    /// reactivity term (with special cases for argon, helium, oxygen, and
    /// carbon dioxide). Surviving fractions are normalized and sorted
    /// descending.
    fn calculate_gases(&mut self, state: &EvalState, total_mass: f64, gas_mass: f64) {
        if self.surface_pressure <= 0.0 {
            return;
        }

        let pressure = self.surface_pressure * BAR_PER_MILLIBAR;
        let age_over_2b = state.stellar_age / 2.0e9;

        let mut total_amount = 0.0;

        for gas in Gas::ALL {
            let props = gas.properties();

            let yp = props.boiling_point
                / (373.0 * ((pressure + 0.001).ln() / -5050.5 + (1.0 / 373.0)));

            if !(yp >= 0.0 && yp < self.low_temperature)
                || props.weight < self.min_molecular_weight
            {
                continue;
            }

            let vrms = rms_velocity(props.weight, self.exosphere_temperature);
            let pvrms = (1.0 / (1.0 + vrms / self.escape_velocity))
                .powf(state.stellar_age / 1.0e9);

            let mut abundance = props.abundance_solar;
            let temperate_surface = self.surface_temperature > 270.0
                && self.surface_temperature < 400.0;

            let reactivity_factor = match gas {
                Gas::Argon => 0.15 * (state.stellar_age / 4.0e9),
                Gas::Helium => {
                    abundance *= 0.001 + (gas_mass / total_mass);
                    let pres2 = 0.75 + pressure;
                    (1.0 / (1.0 + props.reactivity)).powf(age_over_2b * pres2)
                }
                Gas::Oxygen if state.stellar_age > 2.0e9 && temperate_surface => {
                    let pres2 = 0.89 + pressure / 4.0;
                    (1.0 / (1.0 + props.reactivity)).powf(age_over_2b.powf(0.25) * pres2)
                }
                Gas::CarbonDioxide if state.stellar_age > 2.0e9 && temperate_surface => {
                    let pres2 = 0.75 + pressure;
                    1.5 * (1.0 / (1.0 + props.reactivity)).powf(age_over_2b.powf(0.5) * pres2)
                }
                _ => {
                    let pres2 = 0.75 + pressure;
                    (1.0 / (1.0 + props.reactivity)).powf(age_over_2b * pres2)
                }
            };

            let fraction = abundance * pvrms * reactivity_factor;
            if fraction > 0.0 {
                self.atmosphere.push(AtmosphereComponent { gas, fraction });
                total_amount += fraction;
            }
        }

        for component in &mut self.atmosphere {
            component.fraction /= total_amount;
        }
        self.atmosphere
            .sort_by(|a, b| b.fraction.partial_cmp(&a.fraction).unwrap());
    }

    /// The Earth Similarity Index: a weighted product of how close the
    /// radius, density, escape velocity, surface temperature, and (when an
    /// atmosphere exists) oxygen partial pressure sit to Earth's values.
    fn earth_similarity(&self) -> f64 {
        if self.planet_type.is_gaseous() || self.planet_type == PlanetType::AsteroidBelt {
            return 0.0;
        }

        let weight_count = if self.atmosphere.is_empty() { 4.0 } else { 5.0 };

        let radius_km = self.radius.to_km();
        const RADIUS_WEIGHT: f64 = 0.57;
        let radius_rating = (1.0
            - (radius_km - EARTH_RADIUS_KM).abs() / (radius_km + EARTH_RADIUS_KM))
            .powf(RADIUS_WEIGHT / weight_count);

        const DENSITY_WEIGHT: f64 = 1.07;
        let density_rating = (1.0
            - (self.density - EARTH_DENSITY).abs() / (self.density + EARTH_DENSITY))
            .powf(DENSITY_WEIGHT / weight_count);

        const ESCAPE_VELOCITY_WEIGHT: f64 = 0.70;
        let escape_rating = (1.0
            - (self.escape_velocity - EARTH_ESCAPE_VELOCITY).abs()
                / (self.escape_velocity + EARTH_ESCAPE_VELOCITY))
            .powf(ESCAPE_VELOCITY_WEIGHT / weight_count);

        const TEMPERATURE_WEIGHT: f64 = 5.58;
        let temperature_rating = (1.0
            - (self.surface_temperature - EARTH_AVERAGE_TEMPERATURE).abs()
                / (self.surface_temperature + EARTH_AVERAGE_TEMPERATURE))
            .powf(TEMPERATURE_WEIGHT / weight_count);

        let oxygen_rating = if self.atmosphere.is_empty() {
            1.0
        } else {
            let o2_fraction = self
                .atmosphere
                .iter()
                .find(|c| c.gas == Gas::Oxygen)
                .map_or(0.0, |c| c.fraction);
            let ppo = self.surface_pressure * o2_fraction;
            const PPO_WEIGHT: f64 = 2.5;
            (1.0 - (ppo - EARTH_PARTIAL_PRESSURE_OXYGEN).abs()
                / (ppo + EARTH_PARTIAL_PRESSURE_OXYGEN))
                .powf(PPO_WEIGHT / weight_count)
        };

        radius_rating * density_rating * escape_rating * temperature_rating * oxygen_rating
    }
}

/// Surface gravitational acceleration, in m/s^2, from mass in solar masses
/// and radius in km.
fn surface_acceleration(mass: f64, radius_km: f64) -> f64 {
    GRAVITY_CONSTANT * (mass * SOLAR_MASS_IN_GRAMS) / (radius_km * CM_PER_KM).powf(2.0) * M_PER_CM
}

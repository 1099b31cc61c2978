//! Protoplanet growth, dust-lane bookkeeping, and coalescence.

use log::{debug, warn};

use equations::critical_limit;

use crate::band::{debug_check_partition, merge_adjacent, DustBand};
use crate::planetesimal::Planetesimal;
use crate::protoplanet::Protoplanet;

/// Where the densest dust sits. Isaacman & Sagan 1977: 5.0 places the peak
/// near Jupiter's orbit for a G2V. The density equation is extremely
/// sensitive to this value, and degenerate systems are common if it moves
/// far.
const ALPHA: f64 = 5.0;

/// Denominator of the exponent in Dole 1969's dust density equation.
const N: f64 = 3.0;

/// Gas-to-dust ratio of the nebula.
const K: f64 = 50.0;

/// Growth stops when an iteration adds less than this fraction of the mass.
const MASS_GAIN_CUTOFF: f64 = 0.0001;

/// Immutable snapshot of everything the engine needs from the star and the
/// configuration. Passing it by value keeps the accretion engine free of
/// any dependency on the star model itself.
#[derive(Debug, Clone, Copy)]
pub struct AccretionParams {
    /// Mass of the central star, Sol = 1.0.
    pub stellar_mass: f64,
    /// Luminosity of the central star, Sol = 1.0.
    pub stellar_luminosity: f64,
    /// Range where nebular dust exists, in AU.
    pub dust_zone: (f64, f64),
    /// Range where protoplanets may form, in AU.
    pub protoplanet_zone: (f64, f64),
    /// Mean eccentricity of the nebular dust. Dole 1969 used 0.25; later
    /// implementations settled on 0.2.
    pub cloud_eccentricity: f64,
    /// Base dust density of the nebula (A in Dole's paper).
    pub dust_density: f64,
    /// Initial mass of a protoplanet seed, in solar masses.
    pub seed_mass: f64,
    /// Emit per-step accretion narration at debug level.
    pub verbose: bool,
}

/// The dust-accretion engine.
///
/// Owns the disk's band partition and the in-progress planetesimal list for
/// a single generation run. Drop protoplanet seeds in with
/// [`AccretionEngine::accrete`] (or step them with
/// [`AccretionEngine::accrete_step`] and finish with
/// [`AccretionEngine::submit`]); collect the results with
/// [`AccretionEngine::into_planetesimals`].
#[derive(Debug)]
pub struct AccretionEngine {
    params: AccretionParams,
    bands: Vec<DustBand>,
    dust_remains: bool,
    planetesimals: Vec<Planetesimal>,
    protoplanet_count: u32,
}

impl AccretionEngine {
    /// Creates an engine over a fresh disk: one band spanning the dust zone
    /// with both dust and gas present.
    ///
    /// A nebula configured with no dust density has nothing to accrete, so
    /// the disk reports no remaining dust from the start.
    pub fn new(params: AccretionParams) -> Self {
        let bands = vec![DustBand::new(
            params.dust_zone.0,
            params.dust_zone.1,
            true,
            true,
        )];

        AccretionEngine {
            params,
            bands,
            dust_remains: params.dust_density > 0.0,
            planetesimals: Vec::new(),
            protoplanet_count: 0,
        }
    }

    /// Whether any dust-bearing band still overlaps the protoplanet zone.
    pub fn dust_remains(&self) -> bool {
        self.dust_remains
    }

    /// The current band partition.
    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    /// The planetesimals coalesced so far, ordered by semi-major axis.
    pub fn planetesimals(&self) -> &[Planetesimal] {
        &self.planetesimals
    }

    /// Number of protoplanets that grew past seed mass, including merge
    /// resubmissions.
    pub fn protoplanet_count(&self) -> u32 {
        self.protoplanet_count
    }

    /// Consumes the engine, yielding the ordered planetesimal list.
    pub fn into_planetesimals(self) -> Vec<Planetesimal> {
        self.planetesimals
    }

    /// Whether any dust is reachable within the effect limits of a seed at
    /// this orbit and mass.
    pub fn dust_available_for(&self, sma: f64, eccentricity: f64, mass: f64) -> bool {
        if sma <= 0.0 {
            return false;
        }

        let (inner, outer) = self.effect_limits(sma, eccentricity, mass);
        self.bands
            .iter()
            .any(|band| band.dust_present && band.outer_edge > inner && band.inner_edge < outer)
    }

    /// Grows a protoplanet until its neighborhood is swept, then resolves it
    /// against the existing planetesimals.
    ///
    /// The growth loop recomputes the effect limits from the accumulated
    /// mass, sweeps every reachable band, and repeats until an iteration
    /// adds less than 0.01% mass. Density falls off steeply with distance
    /// and the reachable band width shrinks as lanes clear, so the loop
    /// terminates for physically reasonable disks.
    pub fn accrete(&mut self, protoplanet: &mut Protoplanet) {
        protoplanet.critical_mass = critical_limit(
            protoplanet.sma,
            protoplanet.eccentricity,
            self.params.stellar_luminosity,
        );

        if self.params.verbose {
            debug!("accreting protoplanet at {:.3} AU", protoplanet.sma);
        }

        let mut added_mass = 0.0;
        let mut added_dust = 0.0;
        let mut added_gas = 0.0;

        loop {
            let limits = self.effect_limits(
                protoplanet.sma,
                protoplanet.eccentricity,
                protoplanet.mass + added_mass,
            );
            protoplanet.r_inner = limits.0;
            protoplanet.r_outer = limits.1;

            let old_mass = added_mass;
            let swept = self.collect_dust(protoplanet.mass + added_mass, protoplanet);
            added_mass = swept.0;
            added_dust = swept.1;
            added_gas = swept.2;

            if !(added_mass > 0.0 && (added_mass - old_mass) >= MASS_GAIN_CUTOFF * old_mass) {
                break;
            }
        }

        if added_mass > 0.0 {
            protoplanet.mass += added_mass;
            protoplanet.dust_mass += added_dust;
            protoplanet.gas_mass += added_gas;

            let limits = self.effect_limits(
                protoplanet.sma,
                protoplanet.eccentricity,
                protoplanet.mass,
            );
            protoplanet.r_inner = limits.0;
            protoplanet.r_outer = limits.1;

            self.update_dust_lanes(protoplanet);
        }

        if protoplanet.mass > self.params.seed_mass {
            self.protoplanet_count += 1;
            self.coalesce(*protoplanet);
        } else if self.params.verbose {
            debug!("no dust collected at {:.3} AU; discarding seed", protoplanet.sma);
        }
    }

    /// Takes a single sweep for a protoplanet and updates the dust lanes.
    ///
    /// Used by the batch accretion driver, which rotates one step at a time
    /// through many seeds. Returns false, and deactivates the protoplanet,
    /// when nothing was collected.
    pub fn accrete_step(&mut self, protoplanet: &mut Protoplanet) -> bool {
        protoplanet.critical_mass = critical_limit(
            protoplanet.sma,
            protoplanet.eccentricity,
            self.params.stellar_luminosity,
        );

        let limits = self.effect_limits(
            protoplanet.sma,
            protoplanet.eccentricity,
            protoplanet.mass,
        );
        protoplanet.r_inner = limits.0;
        protoplanet.r_outer = limits.1;

        let (added_mass, added_dust, added_gas) =
            self.collect_dust(protoplanet.mass, protoplanet);

        if added_mass > 0.0 {
            protoplanet.mass += added_mass;
            protoplanet.dust_mass += added_dust;
            protoplanet.gas_mass += added_gas;

            let limits = self.effect_limits(
                protoplanet.sma,
                protoplanet.eccentricity,
                protoplanet.mass,
            );
            protoplanet.r_inner = limits.0;
            protoplanet.r_outer = limits.1;

            self.update_dust_lanes(protoplanet);
            true
        } else {
            protoplanet.active = false;
            false
        }
    }

    /// Resolves a grown protoplanet against the planetesimal list: counts it
    /// and merges or inserts it.
    pub fn submit(&mut self, protoplanet: Protoplanet) {
        self.protoplanet_count += 1;
        self.coalesce(protoplanet);
    }

    /// Inner/outer gravitational effect limits for an orbit and mass.
    fn effect_limits(&self, sma: f64, eccentricity: f64, mass: f64) -> (f64, f64) {
        let scalar = Protoplanet::effect_limit_scalar(mass);

        (
            sma * (1.0 - eccentricity) * (1.0 - scalar) / (1.0 + self.params.cloud_eccentricity),
            sma * (1.0 + eccentricity) * (1.0 + scalar) / (1.0 - self.params.cloud_eccentricity),
        )
    }

    /// Sweeps every band intersecting the protoplanet's effect limits.
    ///
    /// Returns (total mass, dust mass, gas mass) collected, in solar masses.
    /// The band partition is not modified here; `update_dust_lanes` removes
    /// the material once growth has stabilized.
    fn collect_dust(&self, last_mass: f64, protoplanet: &Protoplanet) -> (f64, f64, f64) {
        let mut total_mass = 0.0;
        let mut total_dust = 0.0;
        let mut total_gas = 0.0;

        let dust_density = self.params.dust_density
            * self.params.stellar_mass.sqrt()
            * (-ALPHA * protoplanet.sma.powf(1.0 / N)).exp();

        for band in &self.bands {
            if band.outer_edge <= protoplanet.r_inner || band.inner_edge >= protoplanet.r_outer {
                continue;
            }

            let band_density = if band.dust_present { dust_density } else { 0.0 };

            let (mass_density, gas_density) =
                if last_mass < protoplanet.critical_mass || !band.gas_present {
                    (band_density, 0.0)
                } else {
                    let mass_density = K * band_density
                        / (1.0 + (protoplanet.critical_mass / last_mass).sqrt() * (K - 1.0));
                    let gas_density = mass_density - band_density;
                    debug_assert!(gas_density >= 0.0, "negative gas density");
                    (mass_density, gas_density.max(0.0))
                };

            let band_width = protoplanet.r_outer - protoplanet.r_inner;

            let outer_clip = (protoplanet.r_outer - band.outer_edge).max(0.0);
            let inner_clip = (band.inner_edge - protoplanet.r_inner).max(0.0);
            let width = band_width - outer_clip - inner_clip;

            let scalar = Protoplanet::effect_limit_scalar(last_mass);
            let area = 4.0
                * std::f64::consts::PI
                * protoplanet.sma.powf(2.0)
                * scalar
                * (1.0 - protoplanet.eccentricity * (outer_clip - inner_clip) / band_width);
            let volume = area * width;

            let swept_mass = volume * mass_density;
            let swept_gas = volume * gas_density;
            let swept_dust = swept_mass - swept_gas;
            debug_assert!(swept_dust >= 0.0, "negative dust mass");

            total_mass += swept_mass;
            total_dust += swept_dust.max(0.0);
            total_gas += swept_gas;
        }

        (total_mass, total_dust, total_gas)
    }

    /// Reclassifies the partition after a protoplanet has swept
    /// `[r_inner, r_outer]`.
    ///
    /// Bands wholly inside the swept range lose their dust (and their gas,
    /// unless the body stayed below critical mass); straddling bands are
    /// split at the sweep boundaries. The rebuild covers exactly the same
    /// range as the input partition: material is reclassified, never
    /// created or destroyed.
    fn update_dust_lanes(&mut self, protoplanet: &Protoplanet) {
        let r_inner = protoplanet.r_inner;
        let r_outer = protoplanet.r_outer;
        let gas_remains = protoplanet.mass < protoplanet.critical_mass;

        let mut updated: Vec<DustBand> = Vec::with_capacity(self.bands.len() + 2);
        let mut push = |band: DustBand| {
            if band.outer_edge > band.inner_edge {
                updated.push(band);
            }
        };

        for band in self.bands.drain(..) {
            if band.outer_edge <= r_inner || band.inner_edge >= r_outer {
                // Untouched by the sweep.
                push(band);
            } else {
                let swept_gas = band.gas_present && gas_remains;

                if band.inner_edge < r_inner {
                    push(DustBand::new(
                        band.inner_edge,
                        r_inner,
                        band.dust_present,
                        band.gas_present,
                    ));
                }

                push(DustBand::new(
                    band.inner_edge.max(r_inner),
                    band.outer_edge.min(r_outer),
                    false,
                    swept_gas,
                ));

                if band.outer_edge > r_outer {
                    push(DustBand::new(
                        r_outer,
                        band.outer_edge,
                        band.dust_present,
                        band.gas_present,
                    ));
                }
            }
        }

        self.bands = updated;
        merge_adjacent(&mut self.bands);
        debug_check_partition(&self.bands);

        let zone = self.params.protoplanet_zone;
        self.dust_remains = self.bands.iter().any(|band| {
            band.dust_present && band.outer_edge >= zone.0 && band.inner_edge <= zone.1
        });
    }

    /// Merges the protoplanet into an orbit-crossing planetesimal, or
    /// inserts it in semi-major-axis order.
    ///
    /// A merge produces a combined protoplanet that re-sweeps the disk at
    /// its new orbit and mass, which may cascade into further merges.
    fn coalesce(&mut self, protoplanet: Protoplanet) {
        for index in 0..self.planetesimals.len() {
            let planetesimal = self.planetesimals[index];

            let diff = planetesimal.sma - protoplanet.sma;

            let protoplanet_scalar = Protoplanet::effect_limit_scalar(protoplanet.mass);
            let planetesimal_scalar = Protoplanet::effect_limit_scalar(planetesimal.mass());

            let (dist1, dist2) = if diff > 0.0 {
                // The planetesimal is farther out: protoplanet aphelion reach
                // against planetesimal perihelion reach.
                (
                    (protoplanet.sma
                        * (1.0 + protoplanet.eccentricity)
                        * (1.0 + protoplanet_scalar))
                        - protoplanet.sma,
                    planetesimal.sma
                        - (planetesimal.sma
                            * (1.0 - planetesimal.eccentricity)
                            * (1.0 - planetesimal_scalar)),
                )
            } else {
                (
                    protoplanet.sma
                        - (protoplanet.sma
                            * (1.0 - protoplanet.eccentricity)
                            * (1.0 - protoplanet_scalar)),
                    (planetesimal.sma
                        * (1.0 + planetesimal.eccentricity)
                        * (1.0 + planetesimal_scalar))
                        - planetesimal.sma,
                )
            };

            if diff.abs() <= dist1.abs() || diff.abs() <= dist2.abs() {
                let combined_mass = planetesimal.mass() + protoplanet.mass;
                let new_sma = combined_mass
                    / ((planetesimal.mass() / planetesimal.sma)
                        + (protoplanet.mass / protoplanet.sma));

                let mut e2 = planetesimal.mass()
                    * planetesimal.sma.sqrt()
                    * (1.0 - planetesimal.eccentricity.powf(2.0)).sqrt();
                e2 += protoplanet.mass
                    * protoplanet.sma.sqrt()
                    * (1.0 - protoplanet.eccentricity.powf(2.0)).sqrt().sqrt();
                e2 /= combined_mass * new_sma.sqrt();
                e2 = (1.0 - e2.powf(2.0)).max(0.0);
                if e2 >= 1.0 {
                    warn!(
                        "collision at {:.3} AU implies escape eccentricity; circularizing",
                        new_sma
                    );
                    e2 = 0.0;
                }
                let new_eccentricity = e2.sqrt();

                let mut merged = Protoplanet {
                    sma: new_sma,
                    eccentricity: new_eccentricity,
                    mass: combined_mass,
                    dust_mass: planetesimal.dust_mass + protoplanet.dust_mass,
                    gas_mass: planetesimal.gas_mass + protoplanet.gas_mass,
                    critical_mass: 0.0,
                    r_inner: 0.0,
                    r_outer: 0.0,
                    active: true,
                };

                if self.params.verbose {
                    debug!(
                        "protoplanet at {:.3} AU merged with planetesimal at {:.3} AU; re-sweeping at {:.3} AU",
                        protoplanet.sma, planetesimal.sma, new_sma
                    );
                }

                // The merged body replaces the planetesimal and re-sweeps
                // the disk at its new orbit.
                self.planetesimals.remove(index);
                self.accrete(&mut merged);
                return;
            }
        }

        if self.params.verbose {
            debug!("adding planetesimal at {:.3} AU", protoplanet.sma);
        }

        let new_planetesimal = Planetesimal {
            sma: protoplanet.sma,
            eccentricity: protoplanet.eccentricity,
            dust_mass: protoplanet.dust_mass,
            gas_mass: protoplanet.gas_mass,
        };

        let position = self
            .planetesimals
            .iter()
            .position(|p| p.sma >= new_planetesimal.sma)
            .unwrap_or(self.planetesimals.len());
        self.planetesimals.insert(position, new_planetesimal);
    }
}

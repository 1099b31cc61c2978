//! Generate one solar system and print it as a table.
//!
//! Usage: cargo run -p system-generator --example generate_system [seed]
//!
//! Pass `--json` after the seed to dump the full system as JSON instead.

use planetary::PlanetType;
use system_generator::{generate, GeneratorConfig};

fn type_glyph(planet_type: PlanetType) -> char {
    match planet_type {
        PlanetType::GasGiant | PlanetType::BrownDwarf => 'O',
        PlanetType::IceGiant => 'o',
        PlanetType::AsteroidBelt => ':',
        PlanetType::DwarfPlanet => ',',
        _ => '.',
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let as_json = args.next().as_deref() == Some("--json");

    let config = GeneratorConfig {
        seed,
        compute_gases: true,
        random_axial_tilt: true,
        generate_bode_seeds: true,
        ..GeneratorConfig::default()
    };

    let system = generate(&config);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&system).unwrap());
        return;
    }

    println!(
        "{} star, {:.2} solar masses, age {:.2} Gyr (seed {})",
        system.star.stellar_class(),
        system.star.mass(),
        system.star.age() / 1.0e9,
        system.seed
    );
    println!(
        "habitable zone {:.2}-{:.2} AU, snow line {:.2} AU, {} protoplanets consumed",
        system.star.habitable_zone().0,
        system.star.habitable_zone().1,
        system.star.snow_line(),
        system.protoplanet_count
    );
    println!();
    println!("  #      sma        mass       radius    temp    esi   type");

    for (index, planet) in system.planets.iter().enumerate() {
        println!(
            "{} {:>3} {:>8.3} AU {:>8.2} Me {:>8.0} km {:>6.0} K {:>5.2}  {}",
            type_glyph(planet.planet_type),
            index + 1,
            planet.semi_major_axis.to_au(),
            planet.mass.to_earth_masses(),
            planet.radius.to_km(),
            planet.surface_temperature,
            planet.earth_similarity_index,
            planet.planet_type,
        );
    }

    for planet in system.habitable_zone_planets() {
        if let Some(component) = planet.atmosphere.first() {
            println!();
            println!(
                "habitable-zone world at {:.3} AU: {:.0} mb atmosphere, mostly {}",
                planet.semi_major_axis.to_au(),
                planet.surface_pressure,
                component.gas
            );
        }
    }
}

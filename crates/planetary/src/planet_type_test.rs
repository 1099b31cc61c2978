use crate::planet_type::PlanetType;

#[test]
fn test_gaseous_classification() {
    assert!(PlanetType::Gaseous.is_gaseous());
    assert!(PlanetType::IceGiant.is_gaseous());
    assert!(PlanetType::GasGiant.is_gaseous());
    assert!(PlanetType::BrownDwarf.is_gaseous());

    assert!(!PlanetType::Rocky.is_gaseous());
    assert!(!PlanetType::Terrestrial.is_gaseous());
    assert!(!PlanetType::Ocean.is_gaseous());
    assert!(!PlanetType::DwarfPlanet.is_gaseous());
    assert!(!PlanetType::AsteroidBelt.is_gaseous());
}

#[test]
fn test_names() {
    assert_eq!(PlanetType::Terrestrial.to_string(), "Terrestrial Planet");
    assert_eq!(PlanetType::DwarfPlanet.to_string(), "Dwarf Planet");
    assert_eq!(PlanetType::BrownDwarf.to_string(), "Brown Dwarf");
}

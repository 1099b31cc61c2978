use approx::assert_relative_eq;

use crate::atmosphere::Gas;

#[test]
fn test_table_covers_every_species() {
    assert_eq!(Gas::ALL.len(), 13);
    for gas in Gas::ALL {
        let props = gas.properties();
        assert!(props.weight > 0.0);
        assert!(props.boiling_point > props.melting_point || gas == Gas::CarbonDioxide);
        assert!(props.abundance_solar > 0.0);
    }
}

#[test]
fn test_weights_match_species() {
    assert_relative_eq!(Gas::Hydrogen.properties().weight, 1.0079);
    assert_relative_eq!(Gas::Helium.properties().weight, 4.0026);
    assert_relative_eq!(Gas::Nitrogen.properties().weight, 14.0067);
    assert_relative_eq!(Gas::Water.properties().weight, 18.0);
    assert_relative_eq!(Gas::CarbonDioxide.properties().weight, 44.0);
}

#[test]
fn test_hydrogen_dominates_solar_abundance() {
    let h2 = Gas::Hydrogen.properties().abundance_solar;
    for gas in Gas::ALL {
        if gas != Gas::Hydrogen {
            assert!(h2 > gas.properties().abundance_solar);
        }
    }
}

#[test]
fn test_names() {
    assert_eq!(Gas::Water.to_string(), "Water Vapor");
    assert_eq!(Gas::CarbonDioxide.to_string(), "Carbon Dioxide");
}

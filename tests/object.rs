#[cfg(feature = "catalog")]
mod object_tests {
    use cse_rs::mathfuncs::ieee754::{is_no_data, NO_DATA_UINT};
    use cse_rs::object::*;
    use cse_rs::scstream::parse_catalog;

    const SAMPLE: &str = r#"
Planet "Aurelia"
{
    Class           "Terra"
    ParentBody      "Sol"
    Mass            5.9722e24
    Dimensions      (1.2756e7, 1.2756e7, 1.2713e7)
    Temperature     288
    AlbedoBond      0.306
    RotationPeriod  86164.1
    Obliquity       23.44
    Orbit
    {
        RefPlane        "Ecliptic"
        Period          3.15581e7
        Eccentricity    0.0167
        Inclination     0.0
    }
    Atmosphere
    {
        Pressure        101325
        Composition
        {
            N2          78.08
            O2          20.95
        }
    }
    Clouds
    {
        Coverage        0.67
        Layer
        {
            Height          8000
            Opacity         0.9
        }
    }
}
"#;

    #[test]
    fn defaults_are_all_sentinel() {
        let o = Object::default();
        assert!(is_no_data(o.mass));
        assert!(is_no_data(o.dimensions.x()));
        assert!(o.name.is_empty());
        assert!(!o.no_rings);
        assert_eq!(o.clouds.main_octaves, NO_DATA_UINT);
    }

    #[test]
    fn maps_a_full_record() {
        let table = parse_catalog(SAMPLE).unwrap();
        let obj = get_object(&table, "Aurelia").unwrap();
        assert_eq!(obj.object_type, "Planet");
        assert_eq!(obj.class, "Terra");
        assert_eq!(obj.mass, 5.9722e24);
        assert_eq!(obj.dimensions.z(), 1.2713e7);
        assert_eq!(obj.rotation.obliquity, 23.44);
        assert_eq!(obj.orbit.ref_plane, "Ecliptic");
        assert_eq!(obj.orbit.eccentricity, 0.0167);
        assert_eq!(obj.atmosphere.pressure, 101325.0);
        assert_eq!(obj.atmosphere.composition["O2"], 20.95);
        assert_eq!(obj.clouds.layers.len(), 1);
        assert_eq!(obj.clouds.layers[0].height, 8000.0);
    }

    #[test]
    fn unit_suffixes_convert() {
        let table = parse_catalog(
            "Moon \"Thyone\" { MassEarthMass 0.0123 Orbit { Periodyr 2.5 } }",
        )
        .unwrap();
        let obj = get_object(&table, "Thyone").unwrap();
        assert_eq!(obj.mass, 0.0123 * 5.9722e24);
        assert_eq!(obj.orbit.period, 2.5 * 3.15576e7);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let table = parse_catalog("Star \"X\" { NotAField 12 Temperature 5000 }").unwrap();
        let obj = get_object(&table, "X").unwrap();
        assert_eq!(obj.temperature, 5000.0);
    }

    #[test]
    fn round_trip_preserves_populated_fields() {
        let table = parse_catalog(SAMPLE).unwrap();
        let obj = get_object(&table, "Aurelia").unwrap();
        let written = make_table(&obj).to_source();
        let reparsed = parse_catalog(&written).unwrap();
        let again = get_object(&reparsed, "Aurelia").unwrap();
        assert_eq!(obj.mass.to_bits(), again.mass.to_bits());
        assert_eq!(obj.temperature.to_bits(), again.temperature.to_bits());
        assert_eq!(
            obj.orbit.eccentricity.to_bits(),
            again.orbit.eccentricity.to_bits()
        );
        assert_eq!(obj.dimensions.x().to_bits(), again.dimensions.x().to_bits());
        assert_eq!(obj.class, again.class);
        assert_eq!(obj.orbit.ref_plane, again.orbit.ref_plane);
        assert_eq!(obj.clouds.layers[0].opacity, again.clouds.layers[0].opacity);
        assert_eq!(obj.atmosphere.composition, again.atmosphere.composition);
    }
}

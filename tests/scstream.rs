#[cfg(feature = "catalog")]
mod scstream_tests {
    use cse_rs::object::{get_object, make_table};
    use cse_rs::scstream::*;

    #[test]
    fn scenario_a_key_string_child_table() {
        let table = parse_catalog("Star \"Sun\" { Mass 1.0 Radius 696000 }").unwrap();
        assert_eq!(table.entries().len(), 1);
        let star = &table.entries()[0];
        assert_eq!(star.key, "Star");
        assert_eq!(star.values[0].as_string().unwrap(), "Sun");
        let sub = star.sub_table.as_ref().unwrap();
        assert_eq!(sub.entries().len(), 2);
        assert_eq!(sub.entries()[0].key, "Mass");
        assert_eq!(sub.entries()[1].key, "Radius");
        assert!(matches!(
            sub.entries()[0].values[0].tag(),
            Some(ValueTag::Scalar(ElementKind::Number))
        ));
    }

    #[test]
    fn scenario_b_array_of_number() {
        let table = parse_catalog("Foo (1, 2, 3)").unwrap();
        let foo = table.find("Foo").unwrap();
        assert_eq!(foo.values.len(), 1);
        let v = &foo.values[0];
        assert_eq!(v.tag(), Some(ValueTag::Array(ElementKind::Number)));
        assert_eq!(v.as_number_array(3).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn scenario_c_matrix_top_level_entries() {
        let table = parse_catalog("M { 1 2, 3 4 }").unwrap();
        let v = &table.find("M").unwrap().values[0];
        assert_eq!(v.tag(), Some(ValueTag::Matrix(ElementKind::Number)));
        assert_eq!(v.items, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn scenario_d_log_level_directive() {
        let table = parse_catalog_with_variables("LogLevel == 2", ["LogLevel"]).unwrap();
        assert!(table.entries().is_empty());
        // The clamp is observable through the log facade.
        assert!(log::max_level() <= log::LevelFilter::Info);
    }

    #[test]
    fn scenario_e_array_kind_disagreement() {
        let err = parse_catalog("X (1, \"two\")").unwrap_err();
        match err {
            ParseError::Syntax { line, column, reason, .. } => {
                assert_eq!((line, column), (1, 7));
                assert!(reason.contains("array element type"), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn scenario_f_invalid_hex_digit() {
        let err = parse_catalog("K 0xG").unwrap_err();
        match err {
            ParseError::Lex { line, column, reason } => {
                assert_eq!((line, column), (1, 3));
                assert!(reason.contains("Invalid digit in integer constant"), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn comments_are_stripped() {
        let table = parse_catalog("// header\nKey 1 // trailing\nOther 2\n").unwrap();
        assert_eq!(table.entries().len(), 2);
        assert_eq!(table.get_f64("Key"), Some(1.0));
    }

    #[test]
    fn round_trip_of_a_populated_object() {
        let source = r#"
Star "Vega/alf Lyr"
{
    Class           "A0Va"
    ParentBody      "Vega system"
    Mass            4.246e30
    Dimensions      (3.9094e9, 3.9094e9, 3.1222e9)
    Temperature     9602
    Luminosity      1.54e28
    Age             4.55e8
    Obliquity       6.2
    RotationPeriod  45000
    Orbit
    {
        RefPlane        "Ecliptic"
        Period          1.1e10
        Eccentricity    0.21
        Inclination     5.4
        AscendingNode   128.5
    }
    Corona
    {
        Radius          5.2e9
        Brightness      0.75
    }
}
"#;
        let table = parse_catalog(source).unwrap();
        let obj = get_object(&table, "Vega").unwrap();
        assert_eq!(obj.name, vec!["Vega", "alf Lyr"]);

        let written = make_table(&obj).to_source();
        let reparsed = parse_catalog(&written).unwrap();
        let again = get_object(&reparsed, "Vega").unwrap();

        // Bit-identical numbers, byte-identical strings.
        assert_eq!(obj.mass.to_bits(), again.mass.to_bits());
        assert_eq!(obj.temperature.to_bits(), again.temperature.to_bits());
        assert_eq!(obj.luminosity.to_bits(), again.luminosity.to_bits());
        assert_eq!(obj.age.to_bits(), again.age.to_bits());
        assert_eq!(
            obj.dimensions.y().to_bits(),
            again.dimensions.y().to_bits()
        );
        assert_eq!(
            obj.orbit.eccentricity.to_bits(),
            again.orbit.eccentricity.to_bits()
        );
        assert_eq!(
            obj.orbit.ascending_node.to_bits(),
            again.orbit.ascending_node.to_bits()
        );
        assert_eq!(obj.corona.radius.to_bits(), again.corona.radius.to_bits());
        assert_eq!(obj.class, again.class);
        assert_eq!(obj.parent_body, again.parent_body);
        assert_eq!(obj.orbit.ref_plane, again.orbit.ref_plane);
        assert_eq!(obj.name, again.name);

        // Sentinel fields stayed omitted: no surface block ever appeared.
        assert!(!written.contains("Surface"));
        assert!(!written.contains("NaN"));
    }

    #[test]
    fn nested_tables_share_ownership() {
        let table = parse_catalog("A { B { C 1 } }").unwrap();
        let inner = table.get_sub_table("A").unwrap();
        let deeper = inner.get_sub_table("B").unwrap();
        // Both handles stay valid independently of the root borrow.
        drop(table);
        assert_eq!(deeper.get_f64("C"), Some(1.0));
        assert_eq!(inner.entries().len(), 1);
    }

    #[test]
    fn lexer_positions_are_one_based() {
        let toks = Lexer::new().run("A 1\n  B 2").unwrap();
        assert_eq!(toks[0].position, (1, 1));
        assert_eq!(toks[1].position, (1, 3));
        assert_eq!(toks[2].position, (2, 3));
        assert_eq!(toks[3].position, (2, 5));
    }

    #[test]
    fn lexer_number_bases() {
        let toks = Lexer::new().run("K 0x1F 0b101 017 42 -1.5e3 0xA.8p1").unwrap();
        let bases: Vec<u32> = toks[1..].iter().map(|t| t.base).collect();
        assert_eq!(bases, vec![16, 2, 8, 10, 10, 16]);
    }

    #[test]
    fn lexer_hex_float_without_exponent_is_diagnosed() {
        let err = Lexer::new().run("K 0x1.8").unwrap_err();
        match err {
            ParseError::Lex { reason, .. } => {
                assert!(reason.contains("requires an exponent"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn lexer_variables_and_booleans() {
        let toks = Lexer::new()
            .add_variables(["LogLevel"])
            .run("LogLevel == 2 Flag true")
            .unwrap();
        assert_eq!(toks[0].kind, TokenKind::Variable);
        assert_eq!(toks[1].kind, TokenKind::Operator);
        assert_eq!(toks[4].kind, TokenKind::Boolean);
    }

    #[test]
    fn lexer_strings_may_span_lines() {
        let toks = Lexer::new().run("N \"two\nlines\"").unwrap();
        assert_eq!(toks[1].kind, TokenKind::String);
        assert_eq!(toks[1].value, "\"two\nlines\"");
    }

    #[test]
    fn nested_matrix_rows_land_in_the_sparse_map() {
        let table = parse_catalog("M { { 1 2 } { 3 4 } }").unwrap();
        let m = &table.find("M").unwrap().values[0];
        assert_eq!(m.tag(), Some(ValueTag::Matrix(ElementKind::Number)));
        let nested: usize = m.sub_matrices.values().map(Vec::len).sum();
        assert_eq!(nested, 2);
    }

    #[test]
    fn sibling_and_nested_order_is_preserved() {
        let src = "A 1 B { C 2 D 3 } E 4";
        let table = parse_catalog(src).unwrap();
        let keys: Vec<&str> = table.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "E"]);
        let sub = table.get_sub_table("B").unwrap();
        let sub_keys: Vec<&str> = sub.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(sub_keys, vec!["C", "D"]);
    }

    #[test]
    fn multiple_values_stay_in_source_order() {
        let table = parse_catalog("K 1 2 3").unwrap();
        let k = table.find("K").unwrap();
        let nums: Vec<f64> = k.values.iter().map(|v| v.get_number(0).unwrap()).collect();
        assert_eq!(nums, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn syntax_error_carries_state_and_position() {
        let err = parse_catalog("Key ( 1").unwrap_err();
        match err {
            ParseError::Syntax { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column >= 7);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn value_accessors() {
        let v = Value::number("42");
        assert_eq!(v.get_number(0).unwrap(), 42.0);
        assert!(v.get_string(0).is_err());
        let s = Value::string("Sun");
        assert_eq!(s.as_string().unwrap(), "Sun");
        let b = Value::boolean(true);
        assert!(b.get_boolean(0).unwrap());
    }

    #[test]
    fn array_padding_uses_the_sentinel() {
        use cse_rs::mathfuncs::ieee754::is_no_data;
        let v = Value::array(["1", "2"]);
        let a = v.as_number_array(4).unwrap();
        assert_eq!(a[0], 1.0);
        assert_eq!(a[1], 2.0);
        assert!(is_no_data(a[2]) && is_no_data(a[3]));
    }

    #[test]
    fn writers_skip_sentinels() {
        use cse_rs::mathfuncs::ieee754::{NO_DATA, NO_DATA_UINT};
        let mut t = SCSTable::default();
        t.add_f64("Mass", NO_DATA);
        t.add_string("Name", "");
        t.add_bool("Flag", false);
        t.add_u64("Count", NO_DATA_UINT);
        t.add_array("Color", &[1.0, NO_DATA, 0.0]);
        assert!(t.entries().is_empty());
        t.add_f64("Mass", 2.5);
        t.add_bool("Flag", true);
        assert_eq!(t.entries().len(), 2);
    }

    #[test]
    fn unit_suffix_lookup() {
        let mut t = SCSTable::default();
        t.add_f64("RadiusKm", 700000.0);
        let r = t
            .get_f64_with_unit("Radius", 1.0, &[("Km", 1000.0)])
            .unwrap();
        assert_eq!(r, 7.0e8);
    }
}

mod mathfuncs_tests {
    use cse_rs::mathfuncs::ieee754::ulp_distance;
    use cse_rs::mathfuncs::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Asserts closeness in ulps against the platform libm as the reference.
    /// The platform functions are faithfully rounded rather than correctly
    /// rounded, so every bound below carries one extra ulp of slack.
    fn assert_ulp(ours: f64, reference: f64, bound: u64, what: &str, x: f64) {
        match ulp_distance(ours, reference) {
            Some(d) => assert!(d <= bound, "{what}({x}): {ours} vs {reference} ({d} ulp)"),
            None => panic!("{what}({x}): {ours} vs {reference} (sign/NaN mismatch)"),
        }
    }

    #[test]
    fn ulp_bound_exp_ln_log() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20_000 {
            let x = rng.gen_range(-700.0..700.0);
            assert_ulp(exp(x), x.exp(), 2, "exp", x);
            let p = rng.gen_range(1e-300_f64..1e300).abs();
            assert_ulp(ln(p), p.ln(), 2, "ln", p);
            assert_ulp(log(p), p.log10(), 2, "log10", p);
            assert_ulp(log2(p), p.log2(), 2, "log2", p);
        }
    }

    #[test]
    fn sqrt_is_correctly_rounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50_000 {
            let x: f64 = rng.gen_range(0.0..1e300);
            // Hardware square root is exact, so ours must match bit for bit.
            assert_eq!(sqrt(x).to_bits(), x.sqrt().to_bits(), "sqrt({x})");
        }
        let tiny = f64::from_bits(rng.gen_range(1..1 << 52));
        assert_eq!(sqrt(tiny).to_bits(), tiny.sqrt().to_bits());
    }

    #[test]
    fn ulp_bound_trig_radians() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20_000 {
            let r = rng.r#gen::<f64>();
            let x = if r < 0.4 {
                rng.gen_range(-10.0..10.0)
            } else if r < 0.7 {
                rng.gen_range(-1e6..1e6)
            } else {
                rng.gen_range(-1e18..1e18)
            };
            assert_ulp(sin_radians(x), x.sin(), 2, "sin", x);
            assert_ulp(cos_radians(x), x.cos(), 2, "cos", x);
        }
        for _ in 0..10_000 {
            let x = rng.gen_range(-1e3..1e3);
            assert_ulp(tan_radians(x), x.tan(), 4, "tan", x);
        }
    }

    #[test]
    fn ulp_bound_inverse_trig() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..20_000 {
            let x = rng.gen_range(-1.0..1.0);
            assert_ulp(asin_radians(x), x.asin(), 2, "asin", x);
            assert_ulp(acos_radians(x), x.acos(), 2, "acos", x);
            let t = rng.gen_range(-1e6_f64..1e6);
            assert_ulp(atan_radians(t), t.atan(), 2, "atan", t);
        }
    }

    #[test]
    fn ulp_bound_cbrt() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20_000 {
            let x = rng.gen_range(-1e200..1e200);
            assert_ulp(cbrt(x), x.cbrt(), 3, "cbrt", x);
        }
    }

    #[test]
    fn identities() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..10_000 {
            let x: f64 = rng.gen_range(0.0..1e100);
            let s = sqrt(x);
            assert_ulp(s * s, x, 1, "sqrt^2", x);
            // exp amplifies the logarithm's rounding by |ln p|, so the tight
            // bound only holds near 1.
            let p: f64 = rng.gen_range(0.1..10.0);
            assert_ulp(exp(ln(p)), p, 3, "exp(ln)", p);
            let a = rng.gen_range(-1e3..1e3);
            let (sn, cs) = (sin_radians(a), cos_radians(a));
            assert_ulp(sn * sn + cs * cs, 1.0, 3, "sin^2+cos^2", a);
            // Cubing triples the root's error before two more roundings.
            let w: f64 = rng.gen_range(1e-10..1e10);
            let c = cbrt(w);
            assert_ulp(c * c * c, w, 12, "cbrt^3", w);
        }
    }

    #[test]
    fn special_values() {
        assert_eq!(sqrt(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(sqrt(-1.0).is_nan());
        assert_eq!(ln(0.0), f64::NEG_INFINITY);
        assert!(ln(-1.0).is_nan());
        assert_eq!(pow(1.0, f64::NAN), 1.0);
        assert_eq!(pow(1.0, 2.5), 1.0);
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(7.25, 0.0), 1.0);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(pow(0.0, 5.0), 0.0);
        assert_eq!(pow(2.0, 1e308), f64::INFINITY);
        assert_eq!(pow(2.0, -1e308), 0.0);
    }

    #[test]
    fn pow_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20_000 {
            let x = rng.gen_range(1e-3_f64..1e3);
            let y = rng.gen_range(-60.0..60.0);
            let ours = pow(x, y);
            let reference = x.powf(y);
            if reference.is_finite() && reference != 0.0 {
                assert_ulp(ours, reference, 2, "pow", x);
            }
        }
        // Negative bases demand integer exponents.
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(pow(-2.0, 4.0), 16.0);
        assert!(pow(-2.0, 2.5).is_nan());
    }

    #[test]
    fn degree_path_cardinal_points() {
        assert_eq!(sin_degrees(0.0), 0.0);
        assert_eq!(sin_degrees(90.0), 1.0);
        assert_eq!(sin_degrees(180.0), 0.0);
        assert_eq!(sin_degrees(270.0), -1.0);
        assert_eq!(cos_degrees(0.0), 1.0);
        assert_eq!(cos_degrees(90.0), 0.0);
        assert_eq!(cos_degrees(180.0), -1.0);
        assert_eq!(tan_degrees(45.0), 1.0);
        assert_eq!(arcsin(1.0).degrees(), 90.0);
        assert_eq!(arccos(0.0).degrees(), 90.0);
        // The fast table path holds ~1e-13 absolute accuracy elsewhere.
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..5_000 {
            let d = rng.gen_range(-720.0..720.0);
            assert!(
                (sin_degrees(d) - radians(d).sin()).abs() < 1e-12,
                "sin_degrees({d})"
            );
        }
    }

    #[test]
    fn complex_square_roots() {
        use num_complex::Complex64;

        let roots = sqrtc(Complex64::new(3.0, 4.0));
        assert!((roots[0] - Complex64::new(2.0, 1.0)).norm() < 1e-15);
        assert_eq!(roots[1], -roots[0]);
        // Magnitudes near the overflow boundary survive the internal scaling.
        let big = sqrtc(Complex64::new(1e308, 1e308));
        assert!(big[0].re.is_finite() && big[0].im.is_finite());
        assert!((big[0].re / 1.09868411346781e154 - 1.0).abs() < 1e-12);
        let tiny = sqrtc(Complex64::new(1e-310, 1e-310));
        assert!(tiny[0].re.is_finite() && tiny[0].re > 0.0);
    }

    #[test]
    fn sentinel_is_a_nan_with_full_payload() {
        use cse_rs::mathfuncs::ieee754::{is_no_data, BIG_NAN, NO_DATA};
        assert!(NO_DATA.is_nan());
        assert!(is_no_data(NO_DATA));
        assert!(!is_no_data(BIG_NAN));
        assert!(!is_no_data(1.0));
    }

    #[test]
    fn cbrt_exact_cubes_and_subnormals() {
        for v in [2.0f64, 4.0, 10.0, 0.5] {
            assert_eq!(cbrt(v * v * v), v, "{v}");
        }
        assert_eq!(cbrt(1e300), 1e100);
        let tiny = f64::from_bits(1); // smallest subnormal
        assert_eq!(cbrt(tiny), 1.7031839360032603e-108);
    }

    #[test]
    fn pow_signed_zero_bases() {
        assert_eq!(pow(0.0, 3.0), 0.0);
        assert_eq!(pow(-0.0, 3.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(pow(-0.0, 4.0), 0.0);
        assert_eq!(pow(0.0, -2.0), f64::INFINITY);
        assert_eq!(pow(-0.0, -3.0), f64::NEG_INFINITY);
    }

    #[test]
    fn pow_infinity_exponents() {
        assert_eq!(pow(0.5, f64::INFINITY), 0.0);
        assert_eq!(pow(0.5, f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(pow(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(pow(2.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn angle_dispatch_agrees_between_units() {
        let d = sin(Angle::from_degrees(30.0));
        let r = sin(Angle::from_radians(radians(30.0)));
        assert!((d - r).abs() < 1e-13);
    }

    #[test]
    fn reciprocal_identities() {
        let a = Angle::from_degrees(37.0);
        assert!((sec(a) * cos(a) - 1.0).abs() < 1e-15);
        assert!((csc(a) * sin(a) - 1.0).abs() < 1e-15);
        assert!((ctg(a) * tan(a) - 1.0).abs() < 1e-13);
    }

    #[test]
    fn inverse_functions_return_degrees() {
        assert_eq!(arcsin(1.0).degrees(), 90.0);
        assert_eq!(arccos(0.0).degrees(), 90.0);
        assert_eq!(arctan(1.0).degrees(), 45.0);
        assert!((arcctg(1.0).degrees() - 45.0).abs() < 1e-13);
    }

    #[test]
    fn quadrant_classification() {
        assert_eq!(quadrant(0.0), 0);
        assert_eq!(quadrant(45.0), 1);
        assert_eq!(quadrant(90.0), 2);
        assert_eq!(quadrant(300.0), 7);
    }

    #[test]
    fn yroot_handles_odd_negative_roots() {
        assert_eq!(yroot(32.0, 5.0), 2.0);
        assert_eq!(yroot(-32.0, 5.0), -2.0);
        assert!(yroot(-32.0, 4.0).is_nan());
    }
}

mod calculus_tests {
    use cse_rs::calculus::*;
    use cse_rs::mathfuncs::{exp, ln, sin_radians};

    const E: f64 = std::f64::consts::E;
    const PI: f64 = std::f64::consts::PI;

    #[test]
    fn trapezoidal_reference_integrals() {
        let tr = TrapezoidalEngine::default(); // 1e4 steps
        assert!((tr.integrate(|x| x * x, 0.0, 1.0) - 1.0 / 3.0).abs() < 1e-4);
        assert!((tr.integrate(sin_radians, 0.0, PI) - 2.0).abs() < 1e-4);
        assert!((tr.integrate(exp, 0.0, 1.0) - (E - 1.0)).abs() < 1e-4);
        assert!((tr.integrate(|x| 1.0 / (1.0 + x * x), -1.0, 1.0) - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn simpson_reference_integrals() {
        let sim = SimpsonEngine::default();
        assert!((sim.integrate(|x| x * x, 0.0, 1.0) - 1.0 / 3.0).abs() < 1e-8);
        assert!((sim.integrate(sin_radians, 0.0, PI) - 2.0).abs() < 1e-8);
        assert!((sim.integrate(exp, 0.0, 1.0) - (E - 1.0)).abs() < 1e-8);
        assert!((sim.integrate(|x| 1.0 / (1.0 + x * x), -1.0, 1.0) - PI / 2.0).abs() < 1e-8);
    }

    #[test]
    fn romberg_reference_integrals() {
        let rom = RombergEngine::default();
        assert!((rom.integrate(|x| x * x, 0.0, 1.0) - 1.0 / 3.0).abs() < 1e-10);
        assert!((rom.integrate(sin_radians, 0.0, PI) - 2.0).abs() < 1e-10);
        assert!((rom.integrate(exp, 0.0, 1.0) - (E - 1.0)).abs() < 1e-10);
        assert!((rom.integrate(|x| 1.0 / (1.0 + x * x), -1.0, 1.0) - PI / 2.0).abs() < 1e-10);
    }

    #[test]
    fn gauss_kronrod_reference_integrals() {
        let quad = GaussKronrodQuadrature::default();
        assert!((quad.integrate(|x| x * x, 0.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
        assert!((quad.integrate(sin_radians, 0.0, PI) - 2.0).abs() < 1e-12);
        assert!((quad.integrate(exp, 0.0, 1.0) - (E - 1.0)).abs() < 1e-12);
        assert!((quad.integrate(|x| 1.0 / (1.0 + x * x), -1.0, 1.0) - PI / 2.0).abs() < 1e-12);
        // The larger fixed pairs agree with the adaptive default.
        for rule in [GaussKronrodRule::G15K31, GaussKronrodRule::G30K61] {
            let fixed = GaussKronrodQuadrature::fixed(rule);
            assert!((fixed.integrate(exp, 0.0, 1.0) - (E - 1.0)).abs() < 1e-13, "{rule:?}");
        }
    }

    #[test]
    fn gaussian_integral_over_the_whole_line() {
        let norm = InfiniteIntegralNormalizer::normalize(
            |x: f64| exp(-x * x),
            InfiniteKind::WholeLine,
            0.0,
            true,
        );
        let quad = GaussKronrodQuadrature {
            tolerance: 1e-13,
            max_subdivisions: 400,
            ..Default::default()
        };
        let v = quad.integrate(|t| norm.eval(t), norm.low_limit(), norm.up_limit());
        assert!((v - PI.sqrt()).abs() < 1e-12, "got {v}");
        let rom = RombergEngine::default();
        let v = rom.integrate(|t| norm.eval(t), norm.low_limit(), norm.up_limit());
        assert!((v - PI.sqrt()).abs() < 1e-10, "romberg got {v}");
    }

    #[test]
    fn derivative_reference_points() {
        for &x in &[0.1, 1.0, 10.0] {
            let sq = FiniteDifferenceDerivative::new(|v: f64| v * v);
            assert!((sq.evaluate(x) - 2.0 * x).abs() < 1e-7);
            let sn = FiniteDifferenceDerivative::new(sin_radians);
            assert!((sn.evaluate(x) - cse_rs::mathfuncs::cos_radians(x)).abs() < 1e-7);
            let ex = FiniteDifferenceDerivative::new(exp);
            assert!((ex.evaluate(x) - exp(x)).abs() < 1e-7 * exp(x).max(1.0));
            let lg = FiniteDifferenceDerivative::new(ln);
            assert!((lg.evaluate(x) - 1.0 / x).abs() < 1e-7);
        }
    }

    #[test]
    fn trapezoidal_sample_flavours() {
        let tr = TrapezoidalEngine::default();
        let samples: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let v = tr.integrate_samples(|x| x, &samples, false).unwrap();
        assert!((v - 0.5).abs() < 1e-12);
        // Interval form: start at 0, a hundred 0.01-wide steps.
        let mut intervals = vec![0.0];
        intervals.extend(std::iter::repeat(0.01).take(100));
        let v = tr.integrate_samples(|x| x, &intervals, true).unwrap();
        assert!((v - 0.5).abs() < 1e-12);
        assert!(tr.integrate_samples(|x| x, &[0.0], false).is_err());
    }

    #[test]
    fn simpson_variants_on_a_cubic() {
        for method in [
            SimpsonMethod::CompositeQuadratic,
            SimpsonMethod::CompositeCubic,
            SimpsonMethod::Extended,
            SimpsonMethod::NarrowPeaks1,
            SimpsonMethod::NarrowPeaks2,
            SimpsonMethod::Irregularly,
        ] {
            let sim = SimpsonEngine {
                method,
                log_steps: Some(3.0),
            };
            let v = sim.integrate(|x| x * x * x, 0.0, 2.0);
            assert!((v - 4.0).abs() < 0.05, "{method:?}: {v}");
        }
    }

    #[test]
    fn simpson_rejects_short_inputs() {
        let sim = SimpsonEngine::default();
        assert!(sim.integrate_samples(|x| x, &[0.0, 1.0], false).is_err());
        let ext = SimpsonEngine {
            method: SimpsonMethod::Extended,
            log_steps: None,
        };
        let eight: Vec<f64> = (0..8).map(|i| i as f64).collect();
        assert!(ext.integrate_samples(|x| x, &eight, false).is_err());
    }

    #[test]
    fn romberg_analysis_block() {
        let t = RombergEngine::analysis(|x: f64| x * x, 0.0, 1.0);
        // Row 0 is the halving step sequence.
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 0.5);
        // The Simpson column onwards is already exact for x^2.
        assert!((t[(0, 2)] - 1.0 / 3.0).abs() < 1e-14);
        assert!((t[(0, 4)] - 1.0 / 3.0).abs() < 1e-14);
    }

    #[test]
    fn normalizer_semi_infinite_directions() {
        // Integral over [0, inf) of exp(-x) = 1.
        let rom = RombergEngine::default();
        let norm = InfiniteIntegralNormalizer::normalize(
            |x: f64| (-x).exp(),
            InfiniteKind::HasMinValue,
            0.0,
            true,
        );
        let v = rom.integrate(|t| norm.eval(t), norm.low_limit(), norm.up_limit());
        assert!((v - 1.0).abs() < 1e-8);
        // Integral over (-inf, 0] of exp(x) = 1.
        let norm = InfiniteIntegralNormalizer::normalize(
            |x: f64| x.exp(),
            InfiniteKind::HasMaxValue,
            0.0,
            true,
        );
        let v = rom.integrate(|t| norm.eval(t), norm.low_limit(), norm.up_limit());
        assert!((v - 1.0).abs() < 1e-8);
    }

    #[test]
    fn fixed_rule_is_exact_for_low_polynomials() {
        // K15 integrates degree <= 22 exactly; x^8 over [0, 1] = 1/9.
        let quad = GaussKronrodQuadrature::fixed(GaussKronrodRule::G7K15);
        let v = quad.integrate(|x| x.powi(8), 0.0, 1.0);
        assert!((v - 1.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn all_rules_weights_sum_to_two() {
        for rule in [
            GaussKronrodRule::G7K15,
            GaussKronrodRule::G10K21,
            GaussKronrodRule::G15K31,
            GaussKronrodRule::G20K41,
            GaussKronrodRule::G25K51,
            GaussKronrodRule::G30K61,
        ] {
            let (xgk, wgk, wg) = rule.nodes_and_weights();
            let kr_sum: f64 = wgk[..xgk.len() - 1].iter().map(|w| 2.0 * w).sum::<f64>()
                + wgk[xgk.len() - 1];
            assert!((kr_sum - 2.0).abs() < 1e-14, "{rule:?}");
            let g_sum: f64 = if xgk.len() % 2 == 0 {
                wg[..wg.len() - 1].iter().map(|w| 2.0 * w).sum::<f64>() + wg[wg.len() - 1]
            } else {
                wg.iter().map(|w| 2.0 * w).sum()
            };
            assert!((g_sum - 2.0).abs() < 1e-14, "{rule:?}");
        }
        assert!(gauss_kronrod_nodes_and_weights(7).is_ok());
        assert!(gauss_kronrod_nodes_and_weights(11).is_err());
    }

    #[test]
    fn adaptive_handles_a_peaked_integrand() {
        // Integral of 1/sqrt(x) over (0, 1] = 2; endpoint-singular, needs
        // subdivision to converge.
        let quad = GaussKronrodQuadrature {
            tolerance: 1e-10,
            max_subdivisions: 400,
            ..Default::default()
        };
        let v = quad.integrate(|x| if x > 0.0 { 1.0 / x.sqrt() } else { 0.0 }, 0.0, 1.0);
        assert!((v - 2.0).abs() < 1e-6);
    }

    #[test]
    fn one_sided_derivative_directions() {
        // ln is undefined left of zero; forward sampling keeps the domain.
        let mut df = FiniteDifferenceDerivative::new(ln);
        df.direction = Direction::Forward;
        df.initial_step = 0.125;
        assert!((df.evaluate(0.5) - 2.0).abs() < 1e-6);
        let mut db = FiniteDifferenceDerivative::new(|v: f64| (1.0 - v) * (1.0 - v));
        db.direction = Direction::Backward;
        assert!((db.evaluate(1.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn inverse_vandermonde_matches_direct_inverse() {
        let nodes = [2.0, 3.0, 4.0, 5.0];
        let v = vandermonde(&nodes);
        let inv = inverse_vandermonde(&nodes);
        let prod = v.checked_mul(&inv).unwrap();
        for c in 0..4 {
            for r in 0..4 {
                let expect = if c == r { 1.0 } else { 0.0 };
                assert!((prod.at(c, r) - expect).abs() < 1e-10, "{c} {r}");
            }
        }
        // Spot values of the known inverse of the (2, 3, 4, 5) matrix.
        assert!((inv.at(0, 0) - 10.0).abs() < 1e-10);
        assert!((inv.at(1, 1) - 19.0).abs() < 1e-9);
    }

    #[test]
    fn elementary_symmetric_and_legendre_values() {
        assert_eq!(
            elementary_symmetric_polynomial(&[2.0, 3.0, 4.0]),
            vec![1.0, 9.0, 26.0, 24.0]
        );
        assert_eq!(legendre_polynomial_coefficients(0), vec![1.0]);
        assert_eq!(legendre_polynomial_coefficients(1), vec![1.0, 0.0]);
        let p3 = legendre_polynomial_coefficients(3);
        assert!((p3[0] - 2.5).abs() < 1e-15);
        assert!((p3[2] + 1.5).abs() < 1e-15);
    }

    #[test]
    fn stieltjes_matches_published_expansions() {
        // E_2 = P_2 - 2/5 P_0 = 1.5x^2 - 0.5 - 0.4
        let e2 = stieltjes_polynomial_coefficients(1).unwrap();
        assert!((e2[0] - 1.5).abs() < 1e-12);
        assert!((e2[1] - 0.0).abs() < 1e-12);
        assert!((e2[2] + 0.9).abs() < 1e-12);
        // E_3 = P_3 - 9/14 P_1
        let e3 = stieltjes_polynomial_coefficients(2).unwrap();
        assert!((e3[0] - 2.5).abs() < 1e-12);
        assert!((e3[2] + (1.5 + 9.0 / 14.0)).abs() < 1e-12);
    }

    #[test]
    fn polar_round_trip() {
        use cse_rs::linalg::vec3;
        let p = xyz_to_polar(vec3(1.0, 2.0, 2.0));
        assert!((p.z() - 3.0).abs() < 1e-12);
        let back = polar_to_xyz(p);
        for i in 0..3 {
            assert!((back[i] - [1.0, 2.0, 2.0][i]).abs() < 1e-10);
        }
    }
}

mod equation_tests {
    use cse_rs::equations::*;

    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// |p(r)| < tol * (1 + |r|)^n * |a_n| residual gauge.
    fn residual_ok(coeffs: &[f64], root: Complex64, tol: f64) -> bool {
        let n = coeffs.len() - 1;
        let mut value = Complex64::new(0.0, 0.0);
        for &c in coeffs {
            value = value * root + c;
        }
        let scale = (1.0 + root.norm()).powi(n as i32) * coeffs[0].abs();
        value.norm() < tol * scale
    }

    #[test]
    fn random_cubics_and_quartics_satisfy_the_residual_bound() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut roots = [Complex64::default(); 4];
        for _ in 0..2_000 {
            // A leading coefficient much smaller than the others makes the
            // residual bound arbitrarily strict; keep the polynomials scaled.
            let cubic: Vec<f64> = (0..4).map(|_| rng.gen_range(-10.0..10.0)).collect();
            if cubic[0].abs() < 0.5 {
                continue;
            }
            solve_cubic(&cubic, &mut roots, 10).unwrap();
            for r in &roots[..3] {
                assert!(residual_ok(&cubic, *r, 1e-8), "{cubic:?} at {r}");
            }
            let quartic: Vec<f64> = (0..5).map(|_| rng.gen_range(-10.0..10.0)).collect();
            if quartic[0].abs() < 0.5 {
                continue;
            }
            solve_quartic(&quartic, &mut roots, 10).unwrap();
            for r in &roots {
                assert!(residual_ok(&quartic, *r, 1e-8), "{quartic:?} at {r}");
            }
        }
    }

    #[test]
    fn quadratic_root_order_is_part_of_the_contract() {
        let mut roots = [Complex64::default(); 2];
        // (x-3)(x+5): plus branch first.
        solve_quadratic(&[1.0, 2.0, -15.0], &mut roots).unwrap();
        assert!((roots[0].re - 3.0).abs() < 1e-12);
        assert!((roots[1].re + 5.0).abs() < 1e-12);
    }

    #[test]
    fn durand_kerner_recovers_unit_disk_roots() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..40 {
            let degree = rng.gen_range(5..=12);
            // Draw roots uniformly from the unit disk, then expand the
            // monic polynomial with real pairing to keep coefficients real.
            let mut truth: Vec<Complex64> = Vec::new();
            let separated = |truth: &[Complex64], z: Complex64| {
                truth.iter().all(|t| (t - z).norm() > 0.2)
            };
            while truth.len() + 2 <= degree {
                let r = rng.gen_range(0.2f64..1.0).sqrt();
                let th = rng.gen_range(0.2..std::f64::consts::PI - 0.2);
                let z = Complex64::from_polar(r, th);
                if separated(&truth, z) {
                    truth.push(z);
                    truth.push(z.conj());
                }
            }
            while truth.len() < degree {
                let z = Complex64::new(rng.gen_range(-1.0..1.0), 0.0);
                if separated(&truth, z) {
                    truth.push(z);
                }
            }
            let mut coeffs = vec![Complex64::new(1.0, 0.0)];
            for z in &truth {
                let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
                for (i, &c) in coeffs.iter().enumerate() {
                    next[i] += c;
                    next[i + 1] -= c * z;
                }
                coeffs = next;
            }
            let real_coeffs: Vec<f64> = coeffs.iter().map(|c| c.re).collect();

            let mut found = vec![Complex64::default(); degree];
            let conf = SolvePolyConfig {
                p_error: 15.0,
                ..Default::default()
            };
            let iters = solve_poly(&real_coeffs, &mut found, conf).unwrap();
            assert!(iters < 1000, "no convergence in {iters} iterations");

            // Match each true root to its nearest approximation.
            for t in &truth {
                let best = found
                    .iter()
                    .map(|f| (f - t).norm())
                    .fold(f64::INFINITY, f64::min);
                assert!(best < 1e-12, "degree {degree}: root {t} missed by {best}");
            }
        }
    }

    #[test]
    fn solvers_reject_invalid_input() {
        let mut roots = [Complex64::default(); 4];
        assert!(solve_linear(&[0.0, 1.0], &mut roots).is_err());
        assert!(solve_quadratic(&[1.0, 2.0], &mut roots).is_err());
        assert!(solve_quartic(&[1.0; 5], &mut roots[..3], 10).is_err());
        assert!(solve_poly(&[], &mut roots, SolvePolyConfig::default()).is_err());
    }

    #[test]
    fn quadratic_complex_pair() {
        // x^2 + 1 = 0
        let mut roots = [Complex64::default(); 2];
        solve_quadratic(&[1.0, 0.0, 1.0], &mut roots).unwrap();
        assert_eq!(roots[0], Complex64::new(0.0, 1.0));
        assert_eq!(roots[1], Complex64::new(0.0, -1.0));
    }

    #[test]
    fn cubic_branch_numbers() {
        let mut roots = [Complex64::default(); 3];
        // Triple root: (x-2)^3
        let n = solve_cubic(&[1.0, -6.0, 12.0, -8.0], &mut roots, 10).unwrap();
        assert_eq!(n, 1);
        assert!((roots[0].re - 2.0).abs() < 1e-9);
        // Three distinct real roots: (x-1)(x-2)(x-3)
        let n = solve_cubic(&[1.0, -6.0, 11.0, -6.0], &mut roots, 10).unwrap();
        assert_eq!(n, 4);
        for r in &roots {
            assert!(residual_ok(&[1.0, -6.0, 11.0, -6.0], *r, 1e-8));
        }
        // One real root plus a conjugate pair: x^3 + x + 1.
        let n = solve_cubic(&[1.0, 0.0, 1.0, 1.0], &mut roots, 10).unwrap();
        assert_eq!(n, 2);
        for r in &roots {
            assert!(residual_ok(&[1.0, 0.0, 1.0, 1.0], *r, 1e-8));
        }
    }

    #[test]
    fn quartic_named_forms() {
        let polys: [[f64; 5]; 4] = [
            [1.0, 0.0, -5.0, 0.0, 4.0],  // (x^2-1)(x^2-4)
            [1.0, -4.0, 6.0, -4.0, 1.0], // (x-1)^4
            [1.0, 0.0, 0.0, 0.0, -1.0],  // x^4 - 1
            [1.0, 2.0, 3.0, 4.0, 5.0],   // generic
        ];
        let mut roots = [Complex64::default(); 4];
        for p in &polys {
            solve_quartic(p, &mut roots, 10).unwrap();
            for r in &roots {
                assert!(residual_ok(p, *r, 1e-6), "{p:?} at {r}");
            }
        }
    }
}

#[cfg(feature = "random")]
mod random_tests {
    use cse_rs::random::{
        self, CustomDistribution, FastCustomDistribution, RandomEngine, SafeCustomDistribution,
    };

    #[test]
    fn reseeding_replays_the_sequence() {
        let mut e = RandomEngine::new(42);
        let first: Vec<f64> = (0..4).map(|_| e.random()).collect();
        e.reset();
        let replay: Vec<f64> = (0..4).map(|_| e.random()).collect();
        assert_eq!(first, replay);
        let old = e.reseed(43);
        assert_eq!(old, 42);
        assert_eq!(e.seed(), 43);
    }

    #[test]
    fn uniform_and_integer_ranges() {
        let mut e = RandomEngine::new(1);
        for _ in 0..100 {
            let v = e.uniform(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
            let i = e.randint(-5, 5);
            assert!((-5..=5).contains(&i));
            let r = e.randrange(0, 10, 3);
            assert!([0, 3, 6, 9].contains(&r));
        }
    }

    #[test]
    fn shuffle_keeps_contents() {
        let mut e = RandomEngine::new(9);
        let mut items: Vec<i64> = (0..20).collect();
        e.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn normal_sample_mean_is_plausible() {
        let mut e = RandomEngine::new(4);
        let n = 4000;
        let mean: f64 = (0..n).map(|_| e.normal(5.0, 2.0)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.2);
    }

    #[test]
    fn custom_distributions_invert_the_cdf() {
        // Exponential CDF 1 - exp(-x) on [0, 40].
        let safe = SafeCustomDistribution::new(|x: f64| 1.0 - (-x).exp(), 0.0, 40.0);
        let fast =
            FastCustomDistribution::new(|x: f64| (-x).exp(), |x: f64| 1.0 - (-x).exp(), 1.0);
        for u in [0.1, 0.5, 0.9] {
            let expect = -(1.0f64 - u).ln();
            assert!((safe.inverse(u) - expect).abs() < 1e-6);
            assert!((fast.inverse(u) - expect).abs() < 1e-6);
        }
        // Sampling stays inside the support.
        let mut e = RandomEngine::new(7);
        for _ in 0..50 {
            let v = e.custom(&safe);
            assert!((0.0..=40.0).contains(&v));
        }
    }

    #[test]
    fn default_engine_is_shared() {
        let x = random::with_default_engine(|e| e.random());
        assert!((0.0..=1.0).contains(&x));
    }
}

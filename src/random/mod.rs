//! A random-number façade in the shape of Python's `random` module, over an
//! opaque engine plus built-in and inverse-CDF custom distributions.
//!
//! The engine is deterministic for a given seed; a process-wide default
//! engine, lazily seeded from OS entropy, sits behind a mutex for callers
//! that do not want to own one.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{
    Beta, Distribution, Exp, Gamma, LogNormal, Normal, Pareto, Triangular, Weibull,
};

use crate::mathfuncs::pow;

static DEFAULT_ENGINE: Lazy<Mutex<RandomEngine>> =
    Lazy::new(|| Mutex::new(RandomEngine::from_entropy()));

/// Runs a closure against the process-wide default engine.
///
/// ```
/// use cse_rs::random;
///
/// let x = random::with_default_engine(|e| e.random());
/// assert!((0.0..=1.0).contains(&x));
/// ```
pub fn with_default_engine<T>(f: impl FnOnce(&mut RandomEngine) -> T) -> T {
    let mut engine = DEFAULT_ENGINE.lock().expect("default engine poisoned");
    f(&mut engine)
}

/// A seedable random engine with convenience distributions.
///
/// ```
/// use cse_rs::random::RandomEngine;
///
/// let mut a = RandomEngine::new(0x1571);
/// let mut b = RandomEngine::new(0x1571);
/// assert_eq!(a.random(), b.random());
/// ```
pub struct RandomEngine {
    rng: StdRng,
    seed: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0x1571)
    }
}

impl RandomEngine {
    /// A deterministic engine from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// An engine seeded from the operating system entropy source.
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.next_u64();
        Self::new(seed)
    }

    /// The current seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the seed and restarts the sequence; returns the old seed.
    pub fn reseed(&mut self, seed: u64) -> u64 {
        let old = self.seed;
        self.seed = seed;
        self.reset();
        old
    }

    /// Restarts the sequence from the current seed.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// A float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// A float in `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }

    /// An integer in `[min, max]`.
    pub fn randint(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// A randomly selected element of `range(start, stop, step)`.
    pub fn randrange(&mut self, start: i64, stop: i64, step: i64) -> i64 {
        let count = (stop - start + step - 1) / step;
        start + step * self.rng.gen_range(0..count.max(1))
    }

    /// A random element of a non-empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Shuffles a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }

    /// A normal deviate with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, sigma: f64) -> f64 {
        Normal::new(mean, sigma)
            .expect("sigma must be finite and non-negative")
            .sample(&mut self.rng)
    }

    /// Alias of [`RandomEngine::normal`].
    pub fn gauss(&mut self, mean: f64, sigma: f64) -> f64 {
        self.normal(mean, sigma)
    }

    /// An exponential deviate with rate `lambda`.
    pub fn expovariate(&mut self, lambda: f64) -> f64 {
        Exp::new(lambda)
            .expect("lambda must be positive")
            .sample(&mut self.rng)
    }

    /// A log-normal deviate.
    pub fn lognormvariate(&mut self, mu: f64, sigma: f64) -> f64 {
        LogNormal::new(mu, sigma)
            .expect("sigma must be finite and non-negative")
            .sample(&mut self.rng)
    }

    /// A triangular deviate on `[min, max]` peaking at `mode`.
    pub fn triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        Triangular::new(min, max, mode)
            .expect("min <= mode <= max")
            .sample(&mut self.rng)
    }

    /// A beta deviate with shape parameters `alpha` and `beta`.
    pub fn betavariate(&mut self, alpha: f64, beta: f64) -> f64 {
        Beta::new(alpha, beta)
            .expect("shape parameters must be positive")
            .sample(&mut self.rng)
    }

    /// A gamma deviate with shape `alpha` and scale `beta`.
    pub fn gammavariate(&mut self, alpha: f64, beta: f64) -> f64 {
        Gamma::new(alpha, beta)
            .expect("shape parameters must be positive")
            .sample(&mut self.rng)
    }

    /// A Pareto deviate with the given scale and shape.
    pub fn paretovariate(&mut self, alpha: f64) -> f64 {
        Pareto::new(1.0, alpha)
            .expect("alpha must be positive")
            .sample(&mut self.rng)
    }

    /// A Weibull deviate with the given scale and shape.
    pub fn weibullvariate(&mut self, scale: f64, shape: f64) -> f64 {
        Weibull::new(scale, shape)
            .expect("parameters must be positive")
            .sample(&mut self.rng)
    }

    /// Samples a custom distribution by inverting its CDF.
    pub fn custom<D: CustomDistribution>(&mut self, dist: &D) -> f64 {
        dist.inverse(self.random())
    }
}

/// A distribution defined by a cumulative distribution function the sampler
/// inverts.
pub trait CustomDistribution {
    /// Maps a uniform deviate `u` in `[0, 1)` to a sample.
    fn inverse(&self, u: f64) -> f64;
}

/// Inverse-CDF sampling by bisection: slower than the Newton variant but
/// needs only the CDF and a bracketing interval.
///
/// ```
/// use cse_rs::random::{RandomEngine, SafeCustomDistribution};
///
/// // Uniform on [0, 2] has CDF x/2.
/// let dist = SafeCustomDistribution::new(|x: f64| x / 2.0, 0.0, 2.0);
/// let mut engine = RandomEngine::new(7);
/// let v = engine.custom(&dist);
/// assert!((0.0..=2.0).contains(&v));
/// ```
pub struct SafeCustomDistribution<C> {
    cdf: C,
    min: f64,
    max: f64,
    /// Log10 of the iteration cap.
    pub max_iter_log: f64,
    /// Negative log10 of the accepted bracket width.
    pub tol_log: f64,
}

impl<C: Fn(f64) -> f64> SafeCustomDistribution<C> {
    /// Wraps a CDF over the support `[min, max]`.
    pub fn new(cdf: C, min: f64, max: f64) -> Self {
        SafeCustomDistribution {
            cdf,
            min,
            max,
            max_iter_log: 3.0,
            tol_log: 8.0,
        }
    }
}

impl<C: Fn(f64) -> f64> CustomDistribution for SafeCustomDistribution<C> {
    fn inverse(&self, u: f64) -> f64 {
        let tol = pow(10.0, -self.tol_log);
        let max_iter = pow(10.0, self.max_iter_log) as u64;
        let (mut lo, mut hi) = (self.min, self.max);
        for _ in 0..max_iter {
            let mid = 0.5 * (lo + hi);
            if (self.cdf)(mid) < u {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo < tol {
                break;
            }
        }
        0.5 * (lo + hi)
    }
}

/// Inverse-CDF sampling by Newton iteration on `CDF(x) - u` with the PDF as
/// the derivative; faster than bisection but needs both functions and a
/// starting point inside the support.
pub struct FastCustomDistribution<P, C> {
    pdf: P,
    cdf: C,
    initial: f64,
    /// Log10 of the iteration cap.
    pub max_iter_log: f64,
    /// Negative log10 of the accepted step size.
    pub tol_log: f64,
}

impl<P: Fn(f64) -> f64, C: Fn(f64) -> f64> FastCustomDistribution<P, C> {
    /// Wraps a PDF/CDF pair with a Newton starting point.
    pub fn new(pdf: P, cdf: C, initial: f64) -> Self {
        FastCustomDistribution {
            pdf,
            cdf,
            initial,
            max_iter_log: 3.0,
            tol_log: 8.0,
        }
    }
}

impl<P: Fn(f64) -> f64, C: Fn(f64) -> f64> CustomDistribution for FastCustomDistribution<P, C> {
    fn inverse(&self, u: f64) -> f64 {
        let tol = pow(10.0, -self.tol_log);
        let max_iter = pow(10.0, self.max_iter_log) as u64;
        let mut x = self.initial;
        for _ in 0..max_iter {
            let d = (self.pdf)(x);
            if d == 0.0 {
                break;
            }
            let step = ((self.cdf)(x) - u) / d;
            x -= step;
            if step.abs() < tol {
                break;
            }
        }
        x
    }
}

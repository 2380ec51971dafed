//! Sample-based integration: trapezoidal, the Simpson family and Romberg's
//! method, plus the change-of-variable normaliser for infinite intervals.

use crate::linalg::Matrix;
use crate::mathfuncs::pow;

use super::CalculusError;

/// Low precision preset: 10,000 sample points.
pub const LO_PREC: f64 = 4.0;
/// Mid precision preset: 36,000 sample points.
pub const MD_PREC: f64 = 4.5563025007672873;
/// High precision preset: 78,000 sample points.
pub const HI_PREC: f64 = 4.8920946026904804;
/// Ultra precision preset: 136,000 sample points.
pub const UT_PREC: f64 = 5.133538908370218;
/// Extreme precision preset: 178,000 sample points.
pub const EX_PREC: f64 = 5.250420002308894;

fn too_few(need: usize, got: usize) -> CalculusError {
    CalculusError::InvalidInput {
        reason: format!("at least {need} sampler points are required but received {got}"),
    }
}

/// Turns an interval list (start point followed by sub-interval widths) into
/// sample points, or sorts an explicit sample list.
fn sample_points(samples: &[f64], is_interval: bool) -> (Vec<f64>, Vec<f64>) {
    if is_interval {
        let mut points = Vec::with_capacity(samples.len());
        let mut sum = samples[0];
        points.push(sum);
        for w in &samples[1..] {
            sum += w;
            points.push(sum);
        }
        let intervals = samples[1..].to_vec();
        (points, intervals)
    } else {
        let mut points = samples.to_vec();
        points.sort_by(f64::total_cmp);
        let intervals = points.windows(2).map(|w| w[1] - w[0]).collect();
        (points, intervals)
    }
}

/// Uniformly spaced samples over `[a, b]`, `10^log_steps` of them, forced to
/// an odd count so the paired Simpson weights close properly.
fn uniform_samples(a: f64, b: f64, log_steps: f64) -> Vec<f64> {
    let mut count = pow(10.0, log_steps).round() as usize;
    if count % 2 == 0 {
        count += 1;
    }
    let step = (b - a) / (count - 1) as f64;
    (0..count).map(|i| a + i as f64 * step).collect()
}

/// The trapezoidal rule.
///
/// ```
/// use cse_rs::calculus::TrapezoidalEngine;
///
/// let tr = TrapezoidalEngine::default();
/// let v = tr.integrate(|x| x * x, 0.0, 1.0);
/// assert!((v - 1.0 / 3.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct TrapezoidalEngine {
    /// Log10 of the uniform sample count.
    pub log_steps: f64,
}

impl Default for TrapezoidalEngine {
    fn default() -> Self {
        TrapezoidalEngine { log_steps: 4.0 }
    }
}

impl TrapezoidalEngine {
    /// Uniform-step integration of `f` over `[a, b]`.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F, a: f64, b: f64) -> f64 {
        let steps = pow(10.0, self.log_steps).round() as usize - 1;
        let dx = (b - a) / steps as f64;
        let tail = (f(a) + f(b)) / 2.0;
        let mut sum = 0.0;
        for k in 1..steps {
            sum += f(a + k as f64 * dx);
        }
        dx * (sum + tail)
    }

    /// Non-uniform integration over explicit abscissae, or over an interval
    /// list (start point plus widths) when `is_interval` is set.
    pub fn integrate_samples<F: Fn(f64) -> f64>(
        &self,
        f: F,
        samples: &[f64],
        is_interval: bool,
    ) -> Result<f64, CalculusError> {
        if samples.len() < 2 {
            return Err(too_few(2, samples.len()));
        }
        let (points, intervals) = sample_points(samples, is_interval);
        let mut sum = 0.0;
        for (k, w) in intervals.iter().enumerate() {
            sum += (f(points[k]) + f(points[k + 1])) * w / 2.0;
        }
        Ok(sum)
    }
}

/// The Simpson family variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SimpsonMethod {
    /// The composite 1/3 rule (quadratic interpolation), 3 points minimum.
    #[default]
    CompositeQuadratic,
    /// The composite 3/8 rule (cubic interpolation), 4 points minimum.
    CompositeCubic,
    /// Gregory-style endpoint-corrected rule, 9 points minimum.
    Extended,
    /// Narrow-peak variant that exploits two points outside the region
    /// (first and last sample), 7 points minimum.
    NarrowPeaks1,
    /// Narrow-peak variant using interior points only, 7 points minimum.
    NarrowPeaks2,
    /// The composite rule for irregularly spaced samples, with the odd-tail
    /// patch when the interval count is odd.
    Irregularly,
}

/// Simpson-family integration.
///
/// ```
/// use cse_rs::calculus::{SimpsonEngine, SimpsonMethod};
///
/// let sim = SimpsonEngine::default();
/// let v = sim.integrate(|x| x * x * x, 0.0, 2.0);
/// assert!((v - 4.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpsonEngine {
    /// Which family member to run.
    pub method: SimpsonMethod,
    /// Log10 of the uniform sample count used by [`SimpsonEngine::integrate`].
    pub log_steps: Option<f64>,
}

impl SimpsonEngine {
    /// Uniform-sample integration of `f` over `[a, b]`.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F, a: f64, b: f64) -> f64 {
        let log_steps = self.log_steps.unwrap_or(4.0);
        let mut samples = uniform_samples(a, b, log_steps);
        if self.method == SimpsonMethod::NarrowPeaks1 {
            let step = samples[1] - samples[0];
            samples.insert(0, a - step);
            samples.push(b + step);
        }
        self.integrate_samples(f, &samples, false)
            .unwrap_or(f64::NAN)
    }

    /// Integration over explicit abscissae, or an interval list when
    /// `is_interval` is set (interval lists always run the irregular rule).
    pub fn integrate_samples<F: Fn(f64) -> f64>(
        &self,
        f: F,
        samples: &[f64],
        is_interval: bool,
    ) -> Result<f64, CalculusError> {
        if is_interval {
            return self.irregular(&f, samples, true);
        }
        match self.method {
            SimpsonMethod::CompositeQuadratic => self.weighted(&f, samples, 3, |i, n| {
                if i == 0 || i == n - 1 {
                    1.0
                } else if i % 2 == 0 {
                    2.0
                } else {
                    4.0
                }
            }, 3.0),
            SimpsonMethod::CompositeCubic => self.weighted(&f, samples, 4, |i, n| {
                if i == 0 || i == n - 1 {
                    1.0
                } else if i % 3 == 0 {
                    2.0
                } else {
                    3.0
                }
            }, 8.0 / 3.0),
            SimpsonMethod::Extended => self.weighted(&f, samples, 9, |i, n| {
                const EDGE: [f64; 4] = [17.0, 59.0, 43.0, 49.0];
                if i < 4 {
                    EDGE[i]
                } else if i >= n - 4 {
                    EDGE[n - 1 - i]
                } else {
                    48.0
                }
            }, 48.0),
            SimpsonMethod::NarrowPeaks1 => self.narrow_peaks(&f, samples, true),
            SimpsonMethod::NarrowPeaks2 => self.narrow_peaks(&f, samples, false),
            SimpsonMethod::Irregularly => self.irregular(&f, samples, false),
        }
    }

    /// Shared uniform weighted form: `h · Σ w_i f(x_i) / divisor`.
    fn weighted<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        samples: &[f64],
        min: usize,
        weight: impl Fn(usize, usize) -> f64,
        divisor: f64,
    ) -> Result<f64, CalculusError> {
        if samples.len() < min {
            return Err(too_few(min, samples.len()));
        }
        let mut points = samples.to_vec();
        points.sort_by(f64::total_cmp);
        let n = points.len();
        let h = (points[n - 1] - points[0]) / (n - 1) as f64;
        let mut sum = 0.0;
        for (i, &x) in points.iter().enumerate() {
            sum += weight(i, n) * f(x);
        }
        Ok(h * sum / divisor)
    }

    fn narrow_peaks<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        samples: &[f64],
        outside: bool,
    ) -> Result<f64, CalculusError> {
        if samples.len() < 7 {
            return Err(too_few(7, samples.len()));
        }
        let mut points = samples.to_vec();
        points.sort_by(f64::total_cmp);
        let n = points.len();
        let (edge, h): ([f64; 3], f64) = if outside {
            // First and last samples sit outside the integrated region.
            ([-1.0, 12.0, 25.0], (points[n - 2] - points[1]) / n as f64)
        } else {
            ([9.0, 28.0, 23.0], (points[n - 1] - points[0]) / n as f64)
        };
        let mut sum = 0.0;
        for (i, &x) in points.iter().enumerate() {
            let w = if i < 3 {
                edge[i]
            } else if i >= n - 3 {
                edge[n - 1 - i]
            } else {
                24.0
            };
            sum += w * f(x);
        }
        Ok(h * sum / 24.0)
    }

    /// The canonical composite rule over an irregular grid; an odd interval
    /// count patches the last interval with the asymmetric three-point end
    /// formula.
    fn irregular<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        samples: &[f64],
        is_interval: bool,
    ) -> Result<f64, CalculusError> {
        if samples.len() < 3 {
            return Err(too_few(3, samples.len()));
        }
        let (points, widths) = sample_points(samples, is_interval);
        let n = widths.len();
        let even = n - n % 2;
        let mut sum = 0.0;
        for i in 0..even / 2 {
            let h0 = widths[2 * i];
            let h1 = widths[2 * i + 1];
            sum += (h0 + h1) / 6.0
                * ((2.0 - h1 / h0) * f(points[2 * i])
                    + (h0 + h1) * (h0 + h1) / (h0 * h1) * f(points[2 * i + 1])
                    + (2.0 - h0 / h1) * f(points[2 * i + 2]));
        }
        if n % 2 != 0 {
            let hl = widths[n - 1];
            let hp = widths[n - 2];
            let alpha = (2.0 * hl * hl + 3.0 * hl * hp) / (6.0 * (hp + hl));
            let beta = (hl * hl + 3.0 * hl * hp) / (6.0 * hp);
            let gamma = hl * hl * hl / (6.0 * hp * (hp + hl));
            sum += alpha * f(points[n]) + beta * f(points[n - 1]) - gamma * f(points[n - 2]);
        }
        Ok(sum)
    }
}

/// Romberg's method: a rolling two-row T-table driven by successive
/// trapezoidal refinements.
///
/// ```
/// use cse_rs::calculus::RombergEngine;
///
/// let rom = RombergEngine::default();
/// let v = rom.integrate(|x: f64| x.exp(), 0.0, 1.0);
/// assert!((v - (std::f64::consts::E - 1.0)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RombergEngine {
    /// Maximum number of rows.
    pub max_steps: usize,
    /// Negative log10 of the desired accuracy.
    pub p_acc: f64,
}

impl Default for RombergEngine {
    fn default() -> Self {
        RombergEngine {
            max_steps: 300,
            p_acc: 10.0,
        }
    }
}

impl RombergEngine {
    /// Integrates `f` over `[a, b]`.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F, a: f64, b: f64) -> f64 {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        let acc = pow(10.0, -self.p_acc);
        let mut prev = vec![0.0f64; self.max_steps];
        let mut cur = vec![0.0f64; self.max_steps];
        let mut h = b - a;
        prev[0] = (f(a) + f(b)) * h * 0.5;
        for i in 1..self.max_steps {
            h /= 2.0;
            let mut c = 0.0;
            let ep = 1usize << (i - 1);
            for j in 1..=ep {
                c += f(a + (2 * j - 1) as f64 * h);
            }
            cur[0] = h * c + 0.5 * prev[0];
            for j in 1..=i {
                let nk = pow(4.0, j as f64);
                cur[j] = (nk * cur[j - 1] - prev[j - 1]) / (nk - 1.0);
            }
            if i > 1 && (prev[i - 1] - cur[i]).abs() < acc {
                return cur[i];
            }
            std::mem::swap(&mut prev, &mut cur);
        }
        prev[self.max_steps - 1]
    }

    /// The first 5x5 block of the T-table, rows `(h, T, S, C, R)`, as a
    /// debugging aid.
    pub fn analysis<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> Matrix<5, 5> {
        const H: usize = 0;
        const T: usize = 1;
        const S: usize = 2;
        const C: usize = 3;
        const R: usize = 4;
        let mut seq = Matrix::<5, 5>::zeros();
        for i in 0..5 {
            seq[(i, H)] = (b - a) / pow(2.0, i as f64);
        }
        seq[(0, T)] = 0.5 * (b - a) * (f(a) + f(b));
        for i in 1..5 {
            let h = seq[(i, H)];
            let mut sum = 0.0;
            let mut each = 1usize;
            while (each as f64) < pow(2.0, i as f64) {
                sum += h * f(a + each as f64 * h);
                each += 2;
            }
            seq[(i, T)] = 0.5 * seq[(i - 1, T)] + sum;
        }
        for i in 0..4 {
            seq[(i, S)] = (4.0 * seq[(i + 1, T)] - seq[(i, T)]) / 3.0;
        }
        for i in 0..3 {
            seq[(i, C)] = (16.0 * seq[(i + 1, S)] - seq[(i, S)]) / 15.0;
        }
        for i in 0..2 {
            seq[(i, R)] = (64.0 * seq[(i + 1, C)] - seq[(i, C)]) / 63.0;
        }
        seq
    }
}

/// Shape of an infinite integration domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InfiniteKind {
    /// The whole real line.
    #[default]
    WholeLine,
    /// `(-∞, breakpoint]`.
    HasMaxValue,
    /// `[breakpoint, ∞)`.
    HasMinValue,
}

/// Rewrites an integral over an infinite interval onto `[-1, 1]` or `[0, 1]`
/// by the standard substitutions, multiplying by the Jacobian.
///
/// The transformed integrand divides by zero at the new endpoints; the
/// special-case table substitutes the analytic limits there (the defaults
/// map the endpoints to 0 for integrands that decay).
///
/// ```
/// use cse_rs::calculus::{InfiniteIntegralNormalizer, InfiniteKind, RombergEngine};
///
/// // Integral of exp(-x^2) over the whole line = sqrt(pi).
/// let norm = InfiniteIntegralNormalizer::normalize(
///     |x: f64| (-x * x).exp(),
///     InfiniteKind::WholeLine,
///     0.0,
///     true,
/// );
/// let rom = RombergEngine::default();
/// let v = rom.integrate(|t| norm.eval(t), norm.low_limit(), norm.up_limit());
/// assert!((v - std::f64::consts::PI.sqrt()).abs() < 1e-8);
/// ```
pub struct InfiniteIntegralNormalizer {
    function: Box<dyn Fn(f64) -> f64>,
    kind: InfiniteKind,
    breakpoint: f64,
    special_cases: Vec<(f64, f64)>,
}

impl InfiniteIntegralNormalizer {
    /// Wraps `f` for the given domain shape; `add_defaults` seeds the
    /// endpoint special cases with zero limits.
    pub fn normalize<F: Fn(f64) -> f64 + 'static>(
        f: F,
        kind: InfiniteKind,
        breakpoint: f64,
        add_defaults: bool,
    ) -> Self {
        let mut n = InfiniteIntegralNormalizer {
            function: Box::new(f),
            kind,
            breakpoint,
            special_cases: Vec::new(),
        };
        if add_defaults {
            n.create_default_special_cases();
        }
        n
    }

    /// Lower limit of the transformed integral.
    pub fn low_limit(&self) -> f64 {
        match self.kind {
            InfiniteKind::WholeLine => -1.0,
            _ => 0.0,
        }
    }

    /// Upper limit of the transformed integral.
    pub fn up_limit(&self) -> f64 {
        1.0
    }

    /// Registers (or, with `cover`, overwrites) the analytic limit at a
    /// problematic abscissa.
    pub fn set_special_case(&mut self, x: f64, fx: f64, cover: bool) {
        if let Some(slot) = self.special_cases.iter_mut().find(|(k, _)| *k == x) {
            if cover {
                slot.1 = fx;
            }
        } else {
            self.special_cases.push((x, fx));
        }
    }

    /// Removes a special case.
    pub fn del_special_case(&mut self, x: f64) {
        self.special_cases.retain(|(k, _)| *k != x);
    }

    /// Seeds the endpoint special cases for the current domain shape.
    pub fn create_default_special_cases(&mut self) {
        match self.kind {
            InfiniteKind::WholeLine => {
                self.set_special_case(self.low_limit(), 0.0, false);
                self.set_special_case(self.up_limit(), 0.0, false);
            }
            InfiniteKind::HasMaxValue => self.set_special_case(self.low_limit(), 0.0, false),
            InfiniteKind::HasMinValue => self.set_special_case(self.up_limit(), 0.0, false),
        }
    }

    /// The transformed integrand at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        if let Some((_, fx)) = self.special_cases.iter().find(|(k, _)| *k == t) {
            return *fx;
        }
        let f = &self.function;
        match self.kind {
            InfiniteKind::WholeLine => {
                let d = 1.0 - t * t;
                f(t / d) * ((1.0 + t * t) / (d * d))
            }
            InfiniteKind::HasMinValue => {
                let d = 1.0 - t;
                f(self.breakpoint + t / d) / (d * d)
            }
            InfiniteKind::HasMaxValue => f(self.breakpoint - (1.0 - t) / t) / (t * t),
        }
    }
}

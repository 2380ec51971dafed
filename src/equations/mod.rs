//! Polynomial equation solvers.
//!
//! Closed radical forms cover degrees one through four; the cubic follows Fan
//! Shengjin's discriminant formulation and the quartic Shen Tianheng's ten
//! branch scheme. Degree five and above run the Durand–Kerner simultaneous
//! iteration. Every solver takes descending-order coefficients and writes
//! into a caller-supplied root buffer; the closed forms return the branch
//! number they used and Durand–Kerner returns the iteration count.

use num_complex::Complex64;
use thiserror::Error;

use crate::mathfuncs::{arccos, cbrt, cos, pow, sgn, sin, sqrt, sqrtc, Angle};

const SQRT3: f64 = 1.7320508075688772;

/// Errors raised when a solver's preconditions are violated.
#[derive(Debug, Error)]
pub enum EquationError {
    /// The input did not satisfy a solver precondition.
    #[error("{reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}

fn invalid(reason: &str) -> EquationError {
    EquationError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Configuration of the Durand–Kerner iteration.
#[derive(Debug, Copy, Clone)]
pub struct SolvePolyConfig {
    /// Negative log10 of the accepted per-step displacement.
    pub p_error: f64,
    /// Log10 of the iteration cap.
    pub max_iter_log: f64,
    /// Seed base: initial roots are `base^k`.
    pub base: Complex64,
}

impl Default for SolvePolyConfig {
    fn default() -> Self {
        SolvePolyConfig {
            p_error: 15.0,
            max_iter_log: 3.0,
            base: Complex64::new(0.4, 0.9),
        }
    }
}

/// A value counts as zero when its magnitude is below `10^-p`.
fn is_zero(v: f64, err: f64) -> bool {
    -err < v && v < err
}

/// The `-B ± √Δ` pair loses all digits on one side when `4AC ≪ B²`; the lost
/// partner is recovered from the exact pair product over the dominant one.
fn stable_pair(direct1: f64, direct2: f64, product: f64) -> (f64, f64) {
    if direct1.abs() > direct2.abs() && direct1 != 0.0 {
        (direct1, product / direct1)
    } else if direct2 != 0.0 {
        (product / direct2, direct2)
    } else {
        (direct1, direct2)
    }
}

fn check_sizes(
    coeffs: &[f64],
    roots: &[Complex64],
    expect: usize,
    need: usize,
) -> Result<(), EquationError> {
    if coeffs.len() != expect {
        return Err(invalid(&format!(
            "number of coefficients does not match (correct size = {expect})"
        )));
    }
    if roots.len() < need {
        return Err(invalid(&format!(
            "root container is too small (must hold at least {need})"
        )));
    }
    if coeffs[0] == 0.0 {
        return Err(invalid("highest power of polynomial can't be zero"));
    }
    Ok(())
}

/// Solves `ax + b = 0`.
///
/// ```
/// use cse_rs::equations::solve_linear;
/// use num_complex::Complex64;
///
/// let mut roots = [Complex64::default(); 1];
/// solve_linear(&[2.0, -4.0], &mut roots).unwrap();
/// assert_eq!(roots[0], Complex64::new(2.0, 0.0));
/// assert!(solve_linear(&[0.0, 1.0], &mut roots).is_err());
/// ```
pub fn solve_linear(coeffs: &[f64], roots: &mut [Complex64]) -> Result<i32, EquationError> {
    check_sizes(coeffs, roots, 2, 1)?;
    roots[0] = Complex64::new(-coeffs[1] / coeffs[0], 0.0);
    Ok(0)
}

/// Solves `ax² + bx + c = 0`; negative discriminants lift into the complex
/// plane.
///
/// Roots come out in the order `(-b + √Δ)/2a`, `(-b - √Δ)/2a`.
pub fn solve_quadratic(coeffs: &[f64], roots: &mut [Complex64]) -> Result<i32, EquationError> {
    check_sizes(coeffs, roots, 3, 2)?;
    let (a, b, c) = (coeffs[0], coeffs[1], coeffs[2]);
    let del = b * b - 4.0 * a * c;
    let sq = sqrtc(Complex64::new(del, 0.0))[0];
    roots[0] = (-b + sq) / (2.0 * a);
    roots[1] = (-b - sq) / (2.0 * a);
    Ok(0)
}

/// Solves `ax³ + bx² + cx + d = 0` by Fan Shengjin's discriminant branches.
///
/// Branch numbers: 1 triple root, 3 one simple plus one double root, 2 one
/// real root and a conjugate pair, 4 three distinct real roots. `p_error`
/// is the negative log10 of the zero tolerance (10 by default).
pub fn solve_cubic(
    coeffs: &[f64],
    roots: &mut [Complex64],
    p_error: i64,
) -> Result<i32, EquationError> {
    check_sizes(coeffs, roots, 4, 3)?;
    let (a, b, c, d) = (coeffs[0], coeffs[1], coeffs[2], coeffs[3]);
    let err = pow(10.0, -(p_error as f64));

    let big_a = b * b - 3.0 * a * c;
    let big_b = b * c - 9.0 * a * d;
    let big_c = c * c - 3.0 * b * d;
    let del = big_b * big_b - 4.0 * big_a * big_c;

    if is_zero(big_a, err) && is_zero(big_b, err) {
        let r = Complex64::new(-b / (3.0 * a), 0.0);
        roots[0] = r;
        roots[1] = r; // equivalently -c/b
        roots[2] = r; // equivalently -3d/c
        return Ok(1);
    }

    if is_zero(del, err) {
        let k = big_b / big_a;
        roots[0] = Complex64::new(-b / a + k, 0.0);
        roots[1] = Complex64::new(-k / 2.0, 0.0);
        roots[2] = roots[1];
        return Ok(3);
    }

    if del > 0.0 {
        let sq = sqrt(del);
        let y1 = big_a * b + 3.0 * a * (-big_b - sq) / 2.0;
        let y2 = big_a * b + 3.0 * a * (-big_b + sq) / 2.0;
        let pair_product = big_a * (big_a * b * b - 3.0 * a * b * big_b + 9.0 * a * a * big_c);
        let (y1, y2) = stable_pair(y1, y2, pair_product);
        let cb_sum = cbrt(y1) + cbrt(y2);
        let cb_dif = cbrt(y1) - cbrt(y2);
        roots[0] = Complex64::new((-b - cb_sum) / (3.0 * a), 0.0);
        roots[1] = Complex64::new(
            (-2.0 * b + cb_sum) / (6.0 * a),
            SQRT3 * cb_dif / (6.0 * a),
        );
        roots[2] = roots[1].conj();
        return Ok(2);
    }

    // del < 0: three real roots via the trigonometric form.
    let tet = arccos((2.0 * big_a * b - 3.0 * a * big_b) / (2.0 * sqrt(big_a * big_a * big_a)));
    let third = tet.degrees() / 3.0;
    let (sin_t, cos_t) = (
        sin(Angle::from_degrees(third)),
        cos(Angle::from_degrees(third)),
    );
    let sq_a = sqrt(big_a);
    roots[0] = Complex64::new((-b - 2.0 * sq_a * cos_t) / (3.0 * a), 0.0);
    roots[1] = Complex64::new((-b + sq_a * (cos_t + SQRT3 * sin_t)) / (3.0 * a), 0.0);
    roots[2] = Complex64::new((-b + sq_a * (cos_t - SQRT3 * sin_t)) / (3.0 * a), 0.0);
    Ok(4)
}

/// Solves `ax⁴ + bx³ + cx² + dx + e = 0` by Shen Tianheng's discriminant
/// branches, numbered 1 through 10 in the order they are tried.
pub fn solve_quartic(
    coeffs: &[f64],
    roots: &mut [Complex64],
    p_error: i64,
) -> Result<i32, EquationError> {
    check_sizes(coeffs, roots, 5, 4)?;
    let (a, b, c, d, e) = (coeffs[0], coeffs[1], coeffs[2], coeffs[3], coeffs[4]);
    let err = pow(10.0, -(p_error as f64));

    let dd = 3.0 * b * b - 8.0 * a * c;
    let ee = -b * b * b + 4.0 * a * b * c - 8.0 * a * a * d;
    let ff = 3.0 * b * b * b * b + 16.0 * a * a * c * c - 16.0 * a * b * b * c
        + 16.0 * a * a * b * d
        - 64.0 * a * a * a * e;
    let big_a = dd * dd - 3.0 * ff;
    let big_b = dd * ff - 9.0 * ee * ee;
    let big_c = ff * ff - 3.0 * dd * ee * ee;
    let del = big_b * big_b - 4.0 * big_a * big_c;

    let cplx = |re: f64| Complex64::new(re, 0.0);

    if is_zero(dd, err) && is_zero(ee, err) && is_zero(ff, err) {
        let r = cplx(-b / (4.0 * a));
        roots[..4].fill(r);
        return Ok(1);
    }

    if !is_zero(dd * ee * ff, err) && is_zero(big_a, err) && is_zero(big_b, err) && is_zero(big_c, err)
    {
        roots[0] = cplx((-b * dd + 9.0 * ee) / (4.0 * a * dd));
        let r = cplx((-b * dd - 3.0 * ee) / (4.0 * a * dd));
        roots[1] = r;
        roots[2] = r;
        roots[3] = r;
        return Ok(2);
    }

    if is_zero(ee, err) && is_zero(ff, err) && !is_zero(dd, err) {
        let sq = sqrtc(cplx(dd))[0];
        roots[0] = (-b + sq) / (4.0 * a);
        roots[1] = roots[0];
        roots[2] = (-b - sq) / (4.0 * a);
        roots[3] = roots[2];
        return Ok(3);
    }

    if !is_zero(big_a * big_b * big_c, err) && is_zero(del, err) {
        let sq = sqrtc(cplx(2.0 * big_b / big_a))[0];
        roots[0] = (cplx(-b + 2.0 * big_a * ee / big_b) + sq) / (4.0 * a);
        roots[1] = (cplx(-b + 2.0 * big_a * ee / big_b) - sq) / (4.0 * a);
        roots[2] = cplx((-b - 2.0 * big_a * ee / big_b) / (4.0 * a));
        roots[3] = roots[2];
        return Ok(4);
    }

    if del > 0.0 {
        let sq = sqrt(del);
        let z1 = big_a * dd + 3.0 * (-big_b + sq) / 2.0;
        let z2 = big_a * dd + 3.0 * (-big_b - sq) / 2.0;
        let pair_product = big_a * (big_a * dd * dd - 3.0 * dd * big_b + 9.0 * big_c);
        let (z1, z2) = stable_pair(z1, z2, pair_product);
        let cb_sum = cbrt(z1) + cbrt(z2);
        let z = cplx(dd * dd - dd * cb_sum + cb_sum * cb_sum - 3.0 * big_a);
        let sgn_e = sgn(ee);
        // The resolvent value is non-negative up to rounding noise.
        let real_part = sgn_e * sqrt(((dd + cb_sum) / 3.0).max(0.0));
        let inner = sqrtc(z)[0];
        let plus = sqrtc((cplx(2.0 * dd - cb_sum) + 2.0 * inner) / 3.0)[0];
        let minus = sqrtc((cplx(-2.0 * dd + cb_sum) + 2.0 * inner) / 3.0)[0];
        roots[0] = (cplx(-b + real_part) + plus) / (4.0 * a);
        roots[1] = (cplx(-b + real_part) - plus) / (4.0 * a);
        roots[2] = cplx((-b - real_part) / (4.0 * a)) + minus / (4.0 * a) * Complex64::i();
        roots[3] = cplx((-b - real_part) / (4.0 * a)) - minus / (4.0 * a) * Complex64::i();
        return Ok(5);
    }

    // del < 0 from here on.
    let tet = arccos((3.0 * big_b - 2.0 * big_a * dd) / (2.0 * big_a * sqrt(big_a)));
    let third = tet.degrees() / 3.0;
    let cos_t = cos(Angle::from_degrees(third));
    let sin_t = sin(Angle::from_degrees(third));
    let sq_a = sqrt(big_a);
    let y1 = (dd - 2.0 * sq_a * cos_t) / 3.0;
    let y2 = (dd + sq_a * (cos_t + SQRT3 * sin_t)) / 3.0;
    let y3 = (dd + sq_a * (cos_t - SQRT3 * sin_t)) / 3.0;

    if is_zero(ee, err) && dd > 0.0 && ff > 0.0 {
        let outer = sqrt(dd + 2.0 * sqrt(ff));
        let inner = sqrt(dd - 2.0 * sqrt(ff));
        roots[0] = cplx((-b + outer) / (4.0 * a));
        roots[1] = cplx((-b - outer) / (4.0 * a));
        roots[2] = cplx((-b + inner) / (4.0 * a));
        roots[3] = cplx((-b - inner) / (4.0 * a));
        return Ok(6);
    }

    if is_zero(ee, err) && dd < 0.0 && ff > 0.0 {
        let re = -b / (4.0 * a);
        let outer = sqrt(-dd + 2.0 * sqrt(ff)) / (4.0 * a);
        let inner = sqrt(-dd - 2.0 * sqrt(ff)) / (4.0 * a);
        roots[0] = Complex64::new(re, outer);
        roots[1] = Complex64::new(re, -outer);
        roots[2] = Complex64::new(re, inner);
        roots[3] = Complex64::new(re, -inner);
        return Ok(7);
    }

    if is_zero(ee, err) && ff < 0.0 {
        let re_off = sqrt(2.0 * dd + 2.0 * sqrt(big_a - ff)) / (8.0 * a);
        let im_off = sqrt(-2.0 * dd + 2.0 * sqrt(big_a - ff)) / (8.0 * a);
        let re = -2.0 * b / (8.0 * a);
        roots[0] = Complex64::new(re + re_off, im_off);
        roots[1] = Complex64::new(re + re_off, -im_off);
        roots[2] = Complex64::new(re - re_off, im_off);
        roots[3] = Complex64::new(re - re_off, -im_off);
        return Ok(8);
    }

    // E != 0: y2 is the largest of the three resolvent values; the clamps
    // absorb rounding noise on values that are zero in exact arithmetic.
    if dd > 0.0 && ff > 0.0 {
        let sgn_e = sgn(ee);
        let (s1, s2, s3) = (sqrt(y1.max(0.0)), sqrt(y2.max(0.0)), sqrt(y3.max(0.0)));
        roots[0] = cplx((-b + sgn_e * s1 + (s2 + s3)) / (4.0 * a));
        roots[1] = cplx((-b + sgn_e * s1 - (s2 + s3)) / (4.0 * a));
        roots[2] = cplx((-b - sgn_e * s1 + (s2 - s3)) / (4.0 * a));
        roots[3] = cplx((-b - sgn_e * s1 - (s2 - s3)) / (4.0 * a));
        Ok(9)
    } else {
        let sgn_e = sgn(ee);
        let re_neg = (-b - sqrt(y2.max(0.0))) / (4.0 * a);
        let re_pos = (-b + sqrt(y2.max(0.0))) / (4.0 * a);
        let im_sum = (sgn_e * sqrt((-y1).max(0.0)) + sqrt((-y3).max(0.0))) / (4.0 * a);
        let im_dif = (sgn_e * sqrt((-y1).max(0.0)) - sqrt((-y3).max(0.0))) / (4.0 * a);
        roots[0] = Complex64::new(re_neg, im_sum);
        roots[1] = Complex64::new(re_neg, -im_sum);
        roots[2] = Complex64::new(re_pos, im_dif);
        roots[3] = Complex64::new(re_pos, -im_dif);
        Ok(10)
    }
}

/// Evaluates the normalized polynomial at `x` by direct power summation.
fn poly_eval(coeffs: &[f64], x: Complex64) -> Complex64 {
    let mut sum = Complex64::new(0.0, 0.0);
    let n = coeffs.len();
    for (i, &c) in coeffs.iter().enumerate() {
        sum += c * cpow(x, n - i - 1);
    }
    sum
}

/// Integer complex power by binary exponentiation.
fn cpow(base: Complex64, mut exp: usize) -> Complex64 {
    let mut result = Complex64::new(1.0, 0.0);
    let mut base = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// Finds all complex roots of an arbitrary-degree polynomial by the
/// Durand–Kerner simultaneous iteration.
///
/// The leading coefficient is normalized away, the roots are seeded as
/// `base^k`, and the iteration stops when the largest per-step displacement
/// drops below `10^-p_error` or the iteration cap is reached. Returns the
/// number of iterations actually performed.
///
/// ```
/// use cse_rs::equations::{solve_poly, SolvePolyConfig};
/// use num_complex::Complex64;
///
/// // (x-1)(x-2)(x-3)(x-4)(x-5)
/// let coeffs = [1.0, -15.0, 85.0, -225.0, 274.0, -120.0];
/// let mut roots = [Complex64::default(); 5];
/// solve_poly(&coeffs, &mut roots, SolvePolyConfig::default()).unwrap();
/// let mut reals: Vec<f64> = roots.iter().map(|r| r.re).collect();
/// reals.sort_by(f64::total_cmp);
/// for (got, expect) in reals.iter().zip([1.0, 2.0, 3.0, 4.0, 5.0]) {
///     assert!((got - expect).abs() < 1e-10);
/// }
/// ```
pub fn solve_poly(
    coeffs: &[f64],
    roots: &mut [Complex64],
    conf: SolvePolyConfig,
) -> Result<u64, EquationError> {
    if coeffs.is_empty() || coeffs[0] == 0.0 {
        return Err(invalid("highest power of polynomial can't be zero"));
    }
    let degree = coeffs.len() - 1;
    if roots.len() < degree {
        return Err(invalid("root container is too small"));
    }
    let lead = coeffs[0];
    let normalized: Vec<f64> = coeffs.iter().map(|c| c / lead).collect();

    // Seed with powers of the base so no two starting points coincide.
    for (k, root) in roots.iter_mut().take(degree).enumerate() {
        *root = cpow(conf.base, k);
    }

    let tolerance = pow(10.0, -conf.p_error);
    let max_iter = pow(10.0, conf.max_iter_log) as u64;
    let mut it = 0;
    while it < max_iter {
        let mut max_diff = 0.0f64;
        for i in 0..degree {
            let mut denom = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if j != i {
                    denom *= roots[i] - roots[j];
                }
            }
            let diff = poly_eval(&normalized, roots[i]) / denom;
            max_diff = max_diff.max(diff.norm());
            roots[i] -= diff;
        }
        if max_diff < tolerance {
            break;
        }
        it += 1;
    }
    Ok(it)
}

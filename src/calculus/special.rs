//! Polynomial helpers backing the derivative and quadrature engines:
//! elementary symmetric polynomials, Vandermonde matrices and their fast
//! explicit inverse, and the Legendre/Stieltjes coefficient generators.

use crate::linalg::DynamicMatrix;

use super::CalculusError;

/// A real polynomial held as descending-order coefficients.
///
/// ```
/// use cse_rs::calculus::Polynomial;
///
/// let p = Polynomial::new(vec![1.0, -3.0, 2.0]); // x^2 - 3x + 2
/// assert_eq!(p.eval(3.0), 2.0);
/// assert_eq!(p.derivative().coefficients(), &[2.0, -3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Wraps descending-order coefficients.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    /// The descending-order coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The highest power carried.
    pub fn max_power(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for &c in &self.coefficients {
            acc = acc * x + c;
        }
        acc
    }

    /// The derivative polynomial.
    pub fn derivative(&self) -> Polynomial {
        let n = self.max_power();
        let coefficients = self
            .coefficients
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, &c)| c * (n - i) as f64)
            .collect();
        Polynomial { coefficients }
    }
}

/// All elementary symmetric polynomial values of the node set, `e0..=en`
/// (`e0 = 1` by definition).
///
/// ```
/// use cse_rs::calculus::elementary_symmetric_polynomial;
///
/// assert_eq!(
///     elementary_symmetric_polynomial(&[2.0, 3.0, 4.0]),
///     vec![1.0, 9.0, 26.0, 24.0]
/// );
/// ```
pub fn elementary_symmetric_polynomial(v: &[f64]) -> Vec<f64> {
    let mut e = vec![0.0; v.len() + 1];
    e[0] = 1.0;
    for (k, &x) in v.iter().enumerate() {
        for j in (1..=k + 1).rev() {
            e[j] += x * e[j - 1];
        }
    }
    e
}

/// The Vandermonde matrix of the node set: row `i` holds the `i`-th powers of
/// every node.
///
/// ```
/// use cse_rs::calculus::vandermonde;
///
/// let v = vandermonde(&[2.0, 3.0]);
/// assert_eq!(v.get_row(0), vec![1.0, 1.0]);
/// assert_eq!(v.get_row(1), vec![2.0, 3.0]);
/// ```
pub fn vandermonde(v: &[f64]) -> DynamicMatrix {
    let n = v.len();
    let mut m = DynamicMatrix::new(n, n);
    for (col, &x) in v.iter().enumerate() {
        let mut p = 1.0;
        for row in 0..n {
            *m.at_mut(col, row) = p;
            p *= x;
        }
    }
    m
}

/// The explicit inverse of the Vandermonde matrix, in O(n²) via the nodal
/// polynomial: row `j` of the inverse is the coefficient list of the `j`-th
/// Lagrange basis polynomial, obtained by synthetic division of the
/// elementary-symmetric expansion of `Π (x - v_m)`.
pub fn inverse_vandermonde(v: &[f64]) -> DynamicMatrix {
    let n = v.len();
    // Nodal polynomial N(x) = prod (x - v_m), ascending coefficients from the
    // signed elementary symmetric values.
    let e = elementary_symmetric_polynomial(v);
    let mut nodal = vec![0.0; n + 1];
    for (k, &ek) in e.iter().enumerate() {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        nodal[n - k] = sign * ek;
    }
    let mut inv = DynamicMatrix::new(n, n);
    for (j, &xj) in v.iter().enumerate() {
        // q = N(x) / (x - xj) by synthetic division, ascending.
        let mut q = vec![0.0; n];
        let mut carry = 0.0;
        for i in (1..=n).rev() {
            carry = nodal[i] + carry * xj;
            q[i - 1] = carry;
        }
        // Scale by 1 / N'(xj) = 1 / q(xj).
        let mut denom = 0.0;
        let mut p = 1.0;
        for &qi in &q {
            denom += qi * p;
            p *= xj;
        }
        for (i, &qi) in q.iter().enumerate() {
            // Row j, column i: coefficient of x^i in the Lagrange basis l_j.
            *inv.at_mut(i, j) = qi / denom;
        }
    }
    inv
}

/// Coefficients of the degree-`n` Legendre polynomial of the first kind,
/// descending order with absent powers as zero.
///
/// ```
/// use cse_rs::calculus::legendre_polynomial_coefficients;
///
/// // P_2 = (3x^2 - 1) / 2
/// assert_eq!(legendre_polynomial_coefficients(2), vec![1.5, 0.0, -0.5]);
/// ```
pub fn legendre_polynomial_coefficients(n: usize) -> Vec<f64> {
    // Ascending workspace; (k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}.
    let mut p0 = vec![1.0];
    if n == 0 {
        return p0;
    }
    let mut p1 = vec![0.0, 1.0];
    for k in 1..n {
        let mut next = vec![0.0; k + 2];
        for (i, &c) in p1.iter().enumerate() {
            next[i + 1] += (2 * k + 1) as f64 * c;
        }
        for (i, &c) in p0.iter().enumerate() {
            next[i] -= k as f64 * c;
        }
        for c in next.iter_mut() {
            *c /= (k + 1) as f64;
        }
        p0 = p1;
        p1 = next;
    }
    p1.reverse();
    p1
}

/// Integral of `x^m` over `[-1, 1]`.
fn power_moment(m: usize) -> f64 {
    if m % 2 == 0 { 2.0 / (m + 1) as f64 } else { 0.0 }
}

/// Integral of `x^m · P_n(x)` over `[-1, 1]`.
fn legendre_moment(legendre: &[f64], m: usize) -> f64 {
    let deg = legendre.len() - 1;
    let mut sum = 0.0;
    for (i, &c) in legendre.iter().enumerate() {
        sum += c * power_moment(deg - i + m);
    }
    sum
}

/// Coefficients of the degree-`n+1` Stieltjes polynomial `E_{n+1}` attached
/// to `P_n`, descending order, normalized so the Legendre expansion starts
/// with `P_{n+1}`.
///
/// `E_{n+1}` is defined by `∫ E_{n+1}(x) P_n(x) x^k dx = 0` for `k = 0..=n`;
/// its roots interlace the Gauss nodes and extend them to the Kronrod set.
/// Only modest degrees are supported; the condition of the moment system
/// degrades quickly.
pub fn stieltjes_polynomial_coefficients(n: usize) -> Result<Vec<f64>, CalculusError> {
    if n == 0 || n > 15 {
        return Err(CalculusError::InvalidInput {
            reason: "stieltjes coefficients are supported for degrees 1..=15".to_string(),
        });
    }
    let pn = legendre_polynomial_coefficients(n);
    let deg = n + 1;
    // Unknowns: coefficients of x^0..x^n, with the x^(n+1) coefficient pinned
    // to that of P_{n+1} so the expansion starts with P_{n+1} itself.
    let lead = legendre_polynomial_coefficients(deg)[0];
    let mut system = DynamicMatrix::new(deg + 1, deg);
    for k in 0..=n {
        for j in 0..deg {
            *system.at_mut(j, k) = legendre_moment(&pn, j + k);
        }
        *system.at_mut(deg, k) = -lead * legendre_moment(&pn, deg + k);
    }
    // Gauss elimination with partial pivoting over the augmented system.
    let rows = deg;
    for col in 0..rows {
        let mut pivot = col;
        for r in col + 1..rows {
            if system.at(col, r).abs() > system.at(col, pivot).abs() {
                pivot = r;
            }
        }
        if system.at(col, pivot) == 0.0 {
            return Err(CalculusError::InvalidInput {
                reason: "stieltjes moment system is singular".to_string(),
            });
        }
        if pivot != col {
            let a = system.get_row(pivot);
            let b = system.get_row(col);
            system.set_row(pivot, &b);
            system.set_row(col, &a);
        }
        let d = system.at(col, col);
        for c in 0..=deg {
            *system.at_mut(c, col) /= d;
        }
        for r in 0..rows {
            if r != col {
                let factor = system.at(col, r);
                for c in 0..=deg {
                    let v = system.at(c, r) - factor * system.at(c, col);
                    *system.at_mut(c, r) = v;
                }
            }
        }
    }
    let mut out = vec![lead];
    for i in (0..deg).rev() {
        out.push(system.at(deg, i));
    }
    Ok(out)
}

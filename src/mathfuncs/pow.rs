//! The power function, `x^y`, as a high-precision `exp(y · ln x)`. The
//! kernel is ported from the GNU C Library; it carries a separate
//! license, included at the end of this file.
//!
//! The logarithm is taken in hi/lo form, `y` is split at 27 bits, and the
//! four cross terms are summed so the argument handed to the exponential
//! keeps roughly 70 bits. A negative base demands an integer power; parity of
//! the exponent is decided on its bit pattern and carried into the
//! exponential as a sign bias.

use super::exp::exp_inline;
use super::ieee754::BIG_NAN;
use super::log::ln_inline;

/// Integer classification of a bit pattern: 0 if not an integer, 1 if an odd
/// integer, 2 if an even integer. The argument is the representation of a
/// non-zero finite value.
pub(crate) fn check_int(iy: u64) -> i32 {
    let e = (iy >> 52 & 0x7ff) as i32;
    if e < 0x3ff {
        return 0;
    }
    if e > 0x3ff + 52 {
        return 2;
    }
    if iy & ((1u64 << (0x3ff + 52 - e)) - 1) != 0 {
        return 0;
    }
    if iy & (1u64 << (0x3ff + 52 - e)) != 0 {
        return 1;
    }
    2
}

#[inline]
fn zeroinfnan(i: u64) -> bool {
    i.wrapping_mul(2).wrapping_sub(1) >= 2 * f64::INFINITY.to_bits() - 1
}

#[inline]
fn issignaling(i: u64) -> bool {
    2 * (i ^ 0x0008000000000000) > 2 * 0x7ff8000000000000u64
}

/// `x` raised to the power `y`.
///
/// Follows the IEEE-754-2008 §9.2 special-case table: `pow(1, y)` and
/// `pow(x, ±0)` are 1 even for NaN, a finite negative base requires an
/// integer exponent whose parity sets the sign, and overflow/underflow
/// produce correctly signed infinities and zeros.
///
/// ```
/// use cse_rs::mathfuncs::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(1.0, f64::NAN), 1.0);
/// assert_eq!(pow(f64::NAN, 0.0), 1.0);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert!(pow(-2.0, 0.5).is_nan());
/// ```
pub fn pow(x: f64, y: f64) -> f64 {
    let mut sign_bias: u64 = 0;
    let mut ix = x.to_bits();
    let iy = y.to_bits();
    let mut topx = (ix >> 52) as u32;
    let topy = (iy >> 52) as u32;

    if topx.wrapping_sub(1) >= 0x7ff - 1 || (topy & 0x7ff).wrapping_sub(0x3be) >= 0x43e - 0x3be {
        // If |y| > 1075·ln2·2^53 the result is inf/0 and if |y| < 2^-54/1075
        // the result is +-1; either way the slow paths below decide.
        if zeroinfnan(iy) {
            if 2 * iy == 0 {
                return if issignaling(ix) { x + y } else { 1.0 };
            }
            if ix == 1.0f64.to_bits() {
                return if issignaling(iy) { x + y } else { 1.0 };
            }
            if 2 * ix > 2 * f64::INFINITY.to_bits() || 2 * iy > 2 * f64::INFINITY.to_bits() {
                return x + y;
            }
            if 2 * ix == 2 * 1.0f64.to_bits() {
                return 1.0;
            }
            if (2 * ix < 2 * 1.0f64.to_bits()) == (iy >> 63 == 0) {
                // |x|<1 and y==inf, or |x|>1 and y==-inf.
                return 0.0;
            }
            return y * y;
        }
        if zeroinfnan(ix) {
            let mut x2 = x * x;
            if ix >> 63 != 0 && check_int(iy) == 1 {
                x2 = -x2;
                sign_bias = 1;
            }
            if 2 * ix == 0 && iy >> 63 != 0 {
                return if sign_bias != 0 {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
            }
            return if iy >> 63 != 0 { 1.0 / x2 } else { x2 };
        }
        // Here x and y are non-zero finite.
        if ix >> 63 != 0 {
            // Finite x < 0.
            match check_int(iy) {
                0 => return BIG_NAN,
                1 => sign_bias = 0x800 << 7,
                _ => {}
            }
            ix &= 0x7FFFFFFFFFFFFFFF;
            topx &= 0x7ff;
        }
        if (topy & 0x7ff).wrapping_sub(0x3be) >= 0x43e - 0x3be {
            // Note: sign_bias == 0 here because y is not odd.
            if ix == 1.0f64.to_bits() {
                return 1.0;
            }
            if (topy & 0x7ff) < 0x3be {
                // |y| < 2^-65; x^y ~= 1 + y*ln(x).
                return if ix > 1.0f64.to_bits() { 1.0 + y } else { 1.0 - y };
            }
            let overflow = (ix > 1.0f64.to_bits()) == (topy < 0x800);
            return if overflow {
                let huge = f64::from_bits(0x7000000000000000); // 0x1p769
                huge * huge
            } else {
                let tiny = f64::from_bits(0x1000000000000000); // 0x1p-767
                tiny * tiny
            };
        }
        if topx == 0 {
            // Normalize subnormal x so the exponent becomes negative.
            ix = (x * f64::from_bits(0x4330000000000000)).to_bits();
            ix &= 0x7fffffffffffffff;
            ix = ix.wrapping_sub(52 << 52);
        }
    }

    let (hi, lo) = ln_inline(ix);
    let yhi = f64::from_bits(iy & (u64::MAX << 27));
    let ylo = y - yhi;
    let lhi = f64::from_bits(hi.to_bits() & (u64::MAX << 27));
    let llo = hi - lhi + lo;
    let ehi = yhi * lhi;
    let elo = ylo * lhi + y * llo; // |elo| < |ehi| * 2^-25.
    exp_inline(ehi, elo, sign_bias)
}
/*----------------------------------------------------------------------
**
**  Double-precision x^y function.
**  Copyright (C) 2018-2023 Free Software Foundation, Inc.
**  This file is part of the GNU C Library.
**
**  The GNU C Library is free software; you can redistribute it and/or
**  modify it under the terms of the GNU Lesser General Public
**  License as published by the Free Software Foundation; either
**  version 2.1 of the License, or (at your option) any later version.
**
**  The GNU C Library is distributed in the hope that it will be useful,
**  but WITHOUT ANY WARRANTY; without even the implied warranty of
**  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
**  GNU Lesser General Public License for more details.
**
**  You should have received a copy of the GNU Lesser General Public
**  License along with the GNU C Library; if not, see
**  <https://www.gnu.org/licenses/>.
**
**--------------------------------------------------------------------*/

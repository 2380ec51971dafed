//! Numerical calculus: differentiation, quadrature and the supporting
//! polynomial machinery, plus the polar coordinate conversions shared by the
//! astronomy helpers.

use thiserror::Error;

mod derivative;
mod gausskronrod;
mod integral;
mod special;

pub use derivative::{Direction, FiniteDifferenceDerivative};
pub use gausskronrod::{gauss_kronrod_nodes_and_weights, GaussKronrodQuadrature, GaussKronrodRule};
pub use integral::{
    InfiniteIntegralNormalizer, InfiniteKind, RombergEngine, SimpsonEngine, SimpsonMethod,
    TrapezoidalEngine, EX_PREC, HI_PREC, LO_PREC, MD_PREC, UT_PREC,
};
pub use special::{
    elementary_symmetric_polynomial, inverse_vandermonde, legendre_polynomial_coefficients,
    stieltjes_polynomial_coefficients, vandermonde, Polynomial,
};

use crate::linalg::{vec2, vec3, Vec2, Vec3};
use crate::mathfuncs::{atan_degrees, cos_degrees, sin_degrees, sqrt};

/// Errors raised by the calculus engines.
#[derive(Debug, Error)]
pub enum CalculusError {
    /// The input did not satisfy an engine precondition.
    #[error("{reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
}

/// Converts an XY coordinate to polar form `(r, θ)` with θ in degrees.
///
/// ```
/// use cse_rs::calculus::{polar_to_xy, xy_to_polar};
/// use cse_rs::linalg::vec2;
///
/// let polar = xy_to_polar(vec2(0.0, 2.0));
/// assert_eq!(polar.x(), 2.0);
/// assert_eq!(polar.y(), 90.0);
/// let xy = polar_to_xy(polar);
/// assert!(xy.x().abs() < 1e-12 && (xy.y() - 2.0).abs() < 1e-12);
/// ```
pub fn xy_to_polar(xy: Vec2) -> Vec2 {
    let r = sqrt(xy.x() * xy.x() + xy.y() * xy.y());
    let theta = degrees_atan2(xy.y(), xy.x());
    vec2(r, theta)
}

/// Converts polar `(r, θ)` (degrees) to XY.
pub fn polar_to_xy(polar: Vec2) -> Vec2 {
    vec2(
        polar.x() * cos_degrees(polar.y()),
        polar.x() * sin_degrees(polar.y()),
    )
}

/// Converts an XYZ coordinate (X-Z base plane) to `(lon, lat, dist)` with
/// angles in degrees.
pub fn xyz_to_polar(xyz: Vec3) -> Vec3 {
    let dist = sqrt(xyz.x() * xyz.x() + xyz.y() * xyz.y() + xyz.z() * xyz.z());
    let lon = degrees_atan2(xyz.x(), xyz.z());
    let lat = if dist == 0.0 {
        0.0
    } else {
        crate::mathfuncs::asin_degrees(xyz.y() / dist)
    };
    vec3(lon, lat, dist)
}

/// Converts `(lon, lat, dist)` (degrees) to XYZ on the X-Z base plane.
pub fn polar_to_xyz(polar: Vec3) -> Vec3 {
    let (lon, lat, dist) = (polar.x(), polar.y(), polar.z());
    vec3(
        dist * cos_degrees(lat) * sin_degrees(lon),
        dist * sin_degrees(lat),
        dist * cos_degrees(lat) * cos_degrees(lon),
    )
}

/// Quadrant-aware arc tangent in degrees, range `(-180, 180]`.
fn degrees_atan2(y: f64, x: f64) -> f64 {
    if x > 0.0 {
        atan_degrees(y / x)
    } else if x < 0.0 {
        if y >= 0.0 {
            atan_degrees(y / x) + 180.0
        } else {
            atan_degrees(y / x) - 180.0
        }
    } else if y > 0.0 {
        90.0
    } else if y < 0.0 {
        -90.0
    } else {
        0.0
    }
}

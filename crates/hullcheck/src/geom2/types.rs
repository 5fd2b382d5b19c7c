//! Tolerance configuration and the three-valued sign used by every predicate.
//!
//! - `GeomCfg`: carries the sign tolerance; passed by value into the kernel.
//! - `Sign`: result of an epsilon-aware sign test (orientation of a triple).
//!
//! Code cross-refs: `kernel::signed_area`, `hull::{convexity, locate}`

use nalgebra::Vector2;

use super::kernel::signed_area;
use crate::hull::UsageError;

/// Default tolerance for `GeomCfg::sign`.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Geometry configuration (tolerances).
///
/// `eps_sign` absorbs floating-point error in all orientation tests: any value
/// with `|x| <= eps_sign` is treated as zero. Pick it relative to the magnitude
/// of the coordinates; the default suits O(1)..O(1e3) inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_sign: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_sign: DEFAULT_EPS,
        }
    }
}

impl GeomCfg {
    /// Config with a custom tolerance. Rejects negative and non-finite values.
    pub fn with_eps(eps: f64) -> Result<Self, UsageError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(UsageError::InvalidTolerance { eps });
        }
        Ok(Self { eps_sign: eps })
    }

    /// Three-valued sign of `x` with tolerance `eps_sign`.
    #[inline]
    pub fn sign(&self, x: f64) -> Sign {
        if x.abs() <= self.eps_sign {
            Sign::Zero
        } else if x < 0.0 {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// `a == b` up to `eps_sign`.
    #[inline]
    pub fn equals(&self, a: f64, b: f64) -> bool {
        self.sign(a - b) == Sign::Zero
    }

    /// Orientation of the turn a→b→c: `Plus` = counterclockwise, `Minus` =
    /// clockwise, `Zero` = collinear within tolerance.
    #[inline]
    pub fn orientation(&self, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Sign {
        self.sign(signed_area(a, b, c))
    }
}

/// Epsilon-aware sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    Zero,
    Plus,
}

impl Sign {
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Minus => -1,
            Sign::Zero => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// True when the product of the two signs is negative.
    #[inline]
    pub fn opposes(self, other: Sign) -> bool {
        self.as_i8() * other.as_i8() < 0
    }
}

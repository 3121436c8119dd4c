//! Physical pixel offsets along a slider track.
//!
//! [`Px`] is the unit all stop geometry is computed in. Offsets are measured
//! from the track start and may be negative: the end-anchored (upper) marker
//! expresses its position as a distance back from the track end.
//!
//! Configured sizes come in as [`Dp`] and are converted with [`Px::from_dp`].
//!
//! # Example
//!
//! ```
//! use detent_ui::px::Px;
//!
//! let width = Px(300);
//! let stop = Px(120);
//!
//! // The same stop measured from the track end.
//! assert_eq!(stop - width, Px(-180));
//! ```

use crate::dp::Dp;

/// A physical pixel offset. Negative values are allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts density-independent pixels using the current scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px::round_from_f64(dp.to_pixels_f64())
    }

    /// The offset as `f64`.
    ///
    /// Step geometry is computed in `f64` so rounding happens once, when a
    /// stop's offset is fixed.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Rounds half away from zero, saturating at the `i32` bounds. `NaN`
    /// maps to zero.
    ///
    /// ```
    /// use detent_ui::px::Px;
    ///
    /// assert_eq!(Px::round_from_f64(10.5), Px(11));
    /// assert_eq!(Px::round_from_f64(f64::INFINITY), Px(i32::MAX));
    /// ```
    pub fn round_from_f64(value: f64) -> Self {
        // `as` saturates and sends NaN to 0.
        Px(value.round() as i32)
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

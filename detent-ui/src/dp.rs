//! Configured sizes in density-independent pixels.
//!
//! Measured geometry arrives in [`Px`]; sizes chosen by the app, such as the
//! marker thumb, are given in [`Dp`] and scaled by the display density the
//! host installed with [`set_scale_factor`]. Without one, 1dp is 1px.
//!
//! ```
//! use detent_ui::{Dp, Px};
//!
//! let inset = Dp(24.0).half();
//! assert_eq!(inset, Dp(12.0));
//! assert!(inset.to_px() > Px::ZERO);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Physical pixels per dp, shared by every component in the process.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Records the display density. Non-finite or non-positive factors are
/// logged and ignored.
pub fn set_scale_factor(scale_factor: f64) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        tracing::warn!(scale_factor, "Ignoring invalid scale factor");
        return;
    }
    *SCALE_FACTOR
        .get_or_init(|| RwLock::new(scale_factor))
        .write() = scale_factor;
}

/// The installed scale factor, or `1.0`.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map_or(1.0, |lock| *lock.read())
}

/// A length in density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// The length in physical pixels, unrounded.
    pub fn to_pixels_f64(self) -> f64 {
        self.0 * scale_factor()
    }

    /// Half the length.
    pub fn half(self) -> Self {
        Dp(self.0 / 2.0)
    }

    /// The length in whole physical pixels.
    pub fn to_px(self) -> Px {
        Px::from_dp(self)
    }
}

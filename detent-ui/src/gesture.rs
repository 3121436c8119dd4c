//! Input events consumed by detent components.
//!
//! The host owns pointer capture and layout; it forwards what it observed as
//! plain events. A pan gesture is reported as `Start`, any number of `Move`
//! events carrying the cumulative horizontal delta since `Start`, and a
//! closing `End`. There is no cancel: an interrupted gesture still ends with
//! `End`.

use crate::Px;

/// A single step of a pan gesture on one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "phase", rename_all = "snake_case"))]
pub enum GestureEvent {
    /// The pointer went down on the marker.
    Start,
    /// The pointer moved.
    Move {
        /// Horizontal distance travelled since `Start`, in physical pixels.
        cumulative_dx: f32,
    },
    /// The pointer was released or the gesture was taken away.
    End,
}

impl GestureEvent {
    /// Convenience constructor for a move event.
    pub fn moved(cumulative_dx: f32) -> Self {
        GestureEvent::Move { cumulative_dx }
    }
}

/// Emitted by the host whenever the track is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEvent {
    /// Measured track width.
    pub width: Px,
}

impl LayoutEvent {
    /// Creates a layout event for the given width.
    pub fn new(width: impl Into<Px>) -> Self {
        Self {
            width: width.into(),
        }
    }
}

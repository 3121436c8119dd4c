use detent_ui::{Dp, Px};

use super::{MarkerType, index_state::IndexState, stops::StopTable};

/// Insets of the track inside the slider so that marker centers sit on the
/// track ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPlacement {
    /// Distance from the slider's bottom edge.
    pub bottom: Px,
    /// Distance from the slider's left edge.
    pub left: Px,
    /// Distance from the slider's right edge.
    pub right: Px,
}

impl TrackPlacement {
    /// Placement for markers of `marker_size`.
    pub fn for_marker_size(marker_size: Dp) -> Self {
        let margin = marker_size.half().to_px();
        Self {
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// The highlighted part of the track, as insets from the track ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTrack {
    /// Inset from the track start.
    pub left: Px,
    /// Inset from the track end.
    pub right: Px,
}

impl SelectedTrack {
    /// Highlight between the markers of `state`, or from the track start to
    /// the marker of a single slider.
    pub fn between(stops: &StopTable, state: Option<IndexState>) -> Option<Self> {
        let state = state?;
        let lower = stops.get(state.lower)?;
        let width = stops.width();
        match state.upper {
            Some(upper) => {
                let upper = stops.get(upper)?;
                Some(Self {
                    left: lower.px,
                    right: width - upper.px,
                })
            }
            None => Some(Self {
                left: Px::ZERO,
                right: width - lower.px,
            }),
        }
    }
}

/// Stacking layer of a marker.
///
/// A marker on the last stop sits beneath a resting one so that overlapping
/// markers can still be separated by dragging the other marker. `AtMax` is
/// therefore the lowest layer, not raised above resting markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerLayer {
    /// Resting on the last stop.
    AtMax,
    /// Resting anywhere else.
    Resting,
    /// Being dragged.
    Dragging,
}

impl MarkerLayer {
    /// Layer for a marker in the given condition. Dragging wins.
    pub fn resolve(dragging: bool, at_max: bool) -> Self {
        if dragging {
            Self::Dragging
        } else if at_max {
            Self::AtMax
        } else {
            Self::Resting
        }
    }

    /// Stacking order for hosts that use numeric z-indices.
    pub fn z_index(self) -> i32 {
        match self {
            Self::AtMax => 1,
            Self::Resting => 2,
            Self::Dragging => 3,
        }
    }
}

/// Marker widths as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MarkerWidths {
    lower: Px,
    upper: Px,
}

impl MarkerWidths {
    pub fn new(marker_size: Dp) -> Self {
        let width = marker_size.to_px();
        Self {
            lower: width,
            upper: width,
        }
    }

    pub fn get(&self, marker: MarkerType) -> Px {
        match marker {
            MarkerType::Lower => self.lower,
            MarkerType::Upper => self.upper,
        }
    }

    /// Records a measured width. Zero or negative widths are ignored.
    pub fn update(&mut self, marker: MarkerType, width: Px) -> bool {
        if width <= Px::ZERO {
            return false;
        }
        let slot = match marker {
            MarkerType::Lower => &mut self.lower,
            MarkerType::Upper => &mut self.upper,
        };
        let changed = *slot != width;
        *slot = width;
        changed
    }
}

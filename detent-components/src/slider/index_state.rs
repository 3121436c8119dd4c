use std::sync::Arc;

use detent_ui::{CallbackWith, Px};
use smallvec::SmallVec;
use thiserror::Error;

use super::{
    MarkerType,
    stops::{SliderValue, Stop, StopTable},
};

/// Values reported by change notifications: one for a single slider, lower
/// then upper for a range slider.
pub type SliderValues = SmallVec<[SliderValue; 2]>;

/// Current stop indices of the markers.
///
/// When `upper` is present, `lower < upper` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexState {
    /// Index of the lower (or only) marker.
    pub lower: usize,
    /// Index of the upper marker, present for range sliders.
    pub upper: Option<usize>,
}

impl IndexState {
    /// Index of `marker`, if that marker exists.
    pub fn get(&self, marker: MarkerType) -> Option<usize> {
        match marker {
            MarkerType::Lower => Some(self.lower),
            MarkerType::Upper => self.upper,
        }
    }
}

/// Pixel range a marker may be dragged within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanBoundaries {
    /// Smallest permitted offset.
    pub min: Px,
    /// Largest permitted offset.
    pub max: Px,
}

impl PanBoundaries {
    /// Clamps a candidate offset into the boundaries.
    pub fn clamp(&self, px: f64) -> f64 {
        if px > self.max.to_f64() {
            self.max.to_f64()
        } else if px < self.min.to_f64() {
            self.min.to_f64()
        } else {
            px
        }
    }
}

/// Why an index update was not applied.
///
/// Rejections never change state or notify; they exist for callers that need
/// to know a move did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexRejection {
    /// No stop table, or the markers could not be placed on it.
    #[error("the slider has no stops to move between")]
    NoStops,
    /// An upper index was requested on a single-value slider.
    #[error("the slider has no upper marker")]
    NoUpperMarker,
    /// The upper marker would have to be pushed past the last stop.
    #[error("the upper marker is already at the last stop and cannot be pushed")]
    UpperAtEnd,
    /// The lower marker would have to be pushed below the first stop.
    #[error("the lower marker is already at the first stop and cannot be pushed")]
    LowerAtStart,
    /// The lower marker would reach or pass the upper marker.
    #[error("lower index {requested} would reach the upper marker at {upper}")]
    LowerReachesUpper {
        /// Requested lower index.
        requested: isize,
        /// Upper index it collided with.
        upper: usize,
    },
    /// The upper marker would reach or pass the lower marker.
    #[error("upper index {requested} would reach the lower marker at {lower}")]
    UpperReachesLower {
        /// Requested upper index.
        requested: isize,
        /// Lower index it collided with.
        lower: usize,
    },
}

/// Owns the marker indices for one stop table and is the only place they
/// change.
///
/// Every accepted update fires the change callback with the resolved values,
/// even when the index did not move. Rejected updates are silent.
pub struct MarkerIndices {
    stops: Arc<StopTable>,
    state: Option<IndexState>,
    on_change: CallbackWith<SliderValues>,
}

impl MarkerIndices {
    /// Creates indices with no stops yet.
    pub fn new(on_change: CallbackWith<SliderValues>) -> Self {
        Self {
            stops: Arc::new(StopTable::empty()),
            state: None,
            on_change,
        }
    }

    /// The stop table the indices refer to.
    pub fn stops(&self) -> &Arc<StopTable> {
        &self.stops
    }

    /// Current indices, `None` until values have been located on a non-empty
    /// table.
    pub fn state(&self) -> Option<IndexState> {
        self.state
    }

    /// Index of `marker`.
    pub fn index_of(&self, marker: MarkerType) -> Option<usize> {
        self.state.and_then(|state| state.get(marker))
    }

    /// The stop `marker` currently rests on.
    pub fn stop_of(&self, marker: MarkerType) -> Option<&Stop> {
        self.index_of(marker).and_then(|index| self.stops.get(index))
    }

    /// Replaces the change callback.
    pub fn set_on_change(&mut self, on_change: CallbackWith<SliderValues>) {
        self.on_change = on_change;
    }

    /// Resolved values for the current indices.
    pub fn values(&self) -> Option<SliderValues> {
        let state = self.state?;
        let mut values = SliderValues::new();
        values.push(self.stops.get(state.lower)?.value.clone());
        if let Some(upper) = state.upper {
            values.push(self.stops.get(upper)?.value.clone());
        }
        Some(values)
    }

    /// Swaps in a rebuilt table.
    ///
    /// Indices survive when the stop count is unchanged (a pure relayout);
    /// otherwise they are located again from `values`. Never notifies.
    pub fn rebind(&mut self, stops: Arc<StopTable>, values: &[SliderValue]) {
        let same_shape = self.stops.len() == stops.len();
        self.stops = stops;
        if same_shape && self.state.is_some() {
            tracing::trace!(stops = self.stops.len(), "Kept marker indices across relayout");
            return;
        }
        self.locate(values);
    }

    /// Swaps in a table built from a different configuration and locates
    /// `values` on it. Never notifies.
    pub fn reset(&mut self, stops: Arc<StopTable>, values: &[SliderValue]) {
        self.stops = stops;
        self.locate(values);
    }

    /// Places the markers on the stops matching `values`.
    ///
    /// The first value sets the lower marker and the second, searched only
    /// after the lower one, sets the upper marker. Unmatched values fall back
    /// to the first and last stop. Never notifies.
    pub fn locate(&mut self, values: &[SliderValue]) {
        self.state = locate_state(&self.stops, values);
        tracing::trace!(state = ?self.state, "Located marker indices");
    }

    /// Moves the lower marker to `idx`.
    ///
    /// With `push_upper`, an upper marker at or below `idx` is advanced by one
    /// stop first; if it is already on the last stop nothing moves at all.
    /// `idx` is clamped into the table.
    pub fn set_lower(
        &mut self,
        idx: isize,
        push_upper: bool,
    ) -> Result<SliderValues, IndexRejection> {
        let state = self.state.ok_or(IndexRejection::NoStops)?;
        let last = self.stops.last_index().ok_or(IndexRejection::NoStops)?;

        let mut upper = state.upper;
        if push_upper
            && let Some(current) = upper
            && idx >= current as isize
        {
            if current >= last {
                return Err(IndexRejection::UpperAtEnd);
            }
            upper = Some(current + 1);
        }

        if let Some(upper) = upper
            && idx >= upper as isize
        {
            return Err(IndexRejection::LowerReachesUpper {
                requested: idx,
                upper,
            });
        }

        let lower = idx.clamp(0, last as isize) as usize;
        self.commit(IndexState { lower, upper })
    }

    /// Moves the upper marker to `idx`.
    ///
    /// With `push_lower`, a lower marker at or above `idx` is pulled back by
    /// one stop first; if it is already on the first stop nothing moves at
    /// all. `idx` is clamped into `1..=last`.
    pub fn set_upper(
        &mut self,
        idx: isize,
        push_lower: bool,
    ) -> Result<SliderValues, IndexRejection> {
        let state = self.state.ok_or(IndexRejection::NoStops)?;
        if state.upper.is_none() {
            return Err(IndexRejection::NoUpperMarker);
        }
        let last = self.stops.last_index().ok_or(IndexRejection::NoStops)?;

        let mut lower = state.lower;
        if push_lower && idx >= 0 && idx <= lower as isize {
            if lower == 0 {
                return Err(IndexRejection::LowerAtStart);
            }
            lower -= 1;
        }

        if idx <= lower as isize {
            return Err(IndexRejection::UpperReachesLower {
                requested: idx,
                lower,
            });
        }

        let upper = idx.min(last as isize).max(1) as usize;
        self.commit(IndexState {
            lower,
            upper: Some(upper),
        })
    }

    /// Moves `marker` to `idx`, see [`set_lower`](Self::set_lower) and
    /// [`set_upper`](Self::set_upper).
    pub fn set_index(
        &mut self,
        marker: MarkerType,
        idx: isize,
        push_other: bool,
    ) -> Result<SliderValues, IndexRejection> {
        match marker {
            MarkerType::Lower => self.set_lower(idx, push_other),
            MarkerType::Upper => self.set_upper(idx, push_other),
        }
    }

    /// Drag boundaries for `marker` given where the other marker rests.
    ///
    /// The lower marker may travel up to the stop before the upper marker;
    /// the upper marker down to the stop after the lower marker. The upper
    /// marker's boundaries are end-anchored offsets.
    pub fn pan_boundaries(&self, marker: MarkerType) -> Option<PanBoundaries> {
        let state = self.state?;
        let last = self.stops.last_index()?;
        match marker {
            MarkerType::Lower => {
                let max_index = match state.upper {
                    Some(upper) => upper.checked_sub(1)?,
                    None => last,
                };
                Some(PanBoundaries {
                    min: self.stops.first()?.px,
                    max: self.stops.get(max_index)?.px,
                })
            }
            MarkerType::Upper => {
                state.upper?;
                Some(PanBoundaries {
                    min: self.stops.get(state.lower + 1)?.px_inverse,
                    max: self.stops.get(last)?.px_inverse,
                })
            }
        }
    }

    fn commit(&mut self, next: IndexState) -> Result<SliderValues, IndexRejection> {
        self.state = Some(next);
        let values = self.values().ok_or(IndexRejection::NoStops)?;
        tracing::trace!(lower = next.lower, upper = ?next.upper, "Marker indices changed");
        self.on_change.call(values.clone());
        Ok(values)
    }
}

impl std::fmt::Debug for MarkerIndices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerIndices")
            .field("stops", &self.stops.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn locate_state(stops: &StopTable, values: &[SliderValue]) -> Option<IndexState> {
    let first = values.first()?;
    let last = stops.last_index()?;

    let lower_match = stops.position_of(first, 0);
    let mut lower = lower_match.unwrap_or(0);

    let Some(second) = values.get(1) else {
        return Some(IndexState { lower, upper: None });
    };

    if last == 0 {
        tracing::warn!("A range slider needs at least two stops");
        return None;
    }

    // The upper value is only looked for once the lower one was found.
    let mut upper = lower_match
        .and_then(|found| stops.position_of(second, found + 1))
        .unwrap_or(last);

    if upper <= lower {
        if lower < last {
            upper = lower + 1;
        } else {
            lower = last - 1;
            upper = last;
        }
    }

    Some(IndexState {
        lower,
        upper: Some(upper),
    })
}

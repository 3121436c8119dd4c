//! An accessible slider that snaps to discrete stops, with one marker or a
//! lower and upper marker selecting a range.
//!
//! ## Usage
//!
//! [`Slider`] is a controller, not a view. The host measures the track and
//! forwards layout, gesture and accessibility events; it draws whatever
//! [`Slider::snapshot`] describes.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use detent_components::slider::{MarkerType, Slider, SliderArgs, SliderValue};
//! use detent_ui::{GestureEvent, LayoutEvent, Px};
//!
//! let latest = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&latest);
//! let mut slider = Slider::new(
//!     SliderArgs::default()
//!         .min(0.0)
//!         .max(10.0)
//!         .values([2.0, 6.0])
//!         .on_change(move |values| {
//!             if let Ok(mut latest) = sink.lock() {
//!                 *latest = values.to_vec();
//!             }
//!         }),
//! );
//!
//! slider.on_layout(LayoutEvent::new(Px(100)));
//! slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
//! slider.on_gesture(MarkerType::Lower, GestureEvent::moved(21.0));
//! slider.on_gesture(MarkerType::Lower, GestureEvent::End);
//!
//! let latest = latest.lock().map(|v| v.clone()).unwrap_or_default();
//! assert_eq!(latest, vec![SliderValue::Number(4.0), SliderValue::Number(6.0)]);
//! ```
use std::sync::Arc;

use derive_setters::Setters;
use detent_ui::{CallbackWith, Dp, GestureEvent, LayoutEvent, Px, accessibility::Action};
use thiserror::Error;

use layout::MarkerWidths;
use render::{MarkerFrame, render_marker, render_slider};

pub use index_state::{
    IndexRejection, IndexState, MarkerIndices, PanBoundaries, SliderValues,
};
pub use interaction::{
    DragController, MarkerDescription, MarkerDescriptionArgs, describe_marker, step_marker,
    step_marker_named,
};
pub use layout::{MarkerLayer, SelectedTrack, TrackPlacement};
pub use render::{LabelSnapshot, MarkerSnapshot, SliderSnapshot};
pub use stops::{SliderValue, Stop, StopAnchor, StopSource, StopTable};

mod index_state;
mod interaction;
mod layout;
mod render;
mod stops;

const DEFAULT_MARKER_SIZE: Dp = Dp(24.0);

/// Identifies one of the slider's markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MarkerType {
    /// The only marker of a single slider, or the lower end of a range.
    Lower,
    /// The upper end of a range.
    Upper,
}

impl MarkerType {
    /// The track edge this marker's offsets are measured from.
    pub fn anchor(self) -> StopAnchor {
        match self {
            MarkerType::Lower => StopAnchor::Start,
            MarkerType::Upper => StopAnchor::End,
        }
    }
}

/// Whether the slider selects one value or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderType {
    /// One marker.
    Single,
    /// A lower and an upper marker.
    Range,
}

/// A configuration that cannot produce a usable slider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderConfigError {
    /// No initial values were given.
    #[error("at least one initial value is required")]
    NoValues,
    /// More than two initial values were given.
    #[error("a slider takes one or two values, got {0}")]
    TooManyValues(usize),
    /// Neither explicit stop values nor both `min` and `max` were given.
    #[error("either slider_values or both min and max must be set")]
    MissingBounds,
    /// `min` or `max` is NaN or infinite.
    #[error("min and max must be finite")]
    NonFiniteBounds,
    /// `min` lies above `max`.
    #[error("min {min} is greater than max {max}")]
    InvertedRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The increment is zero, negative or not finite.
    #[error("increment must be a positive finite number, got {0}")]
    InvalidIncrement(f64),
    /// The range would produce an unreasonable number of stops.
    #[error("the range produces too many stops")]
    TooManyStops,
    /// A range slider needs at least two stops.
    #[error("a range slider needs at least two stops")]
    TooFewStops,
    /// An initial value is not one of the stops.
    #[error("value {0} is not a stop of this slider")]
    ValueNotOnScale(SliderValue),
}

/// Configuration for [`Slider`].
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct SliderArgs {
    /// Initial values: one for a single slider, lower and upper for a range.
    ///
    /// Values that are not stops fall back to the first (lower) and last
    /// (upper) stop.
    #[setters(skip)]
    pub values: Vec<SliderValue>,
    /// Value of the first stop when stops are computed.
    #[setters(strip_option)]
    pub min: Option<f64>,
    /// Value of the last stop when stops are computed.
    #[setters(strip_option)]
    pub max: Option<f64>,
    /// Distance between computed stops.
    pub increment: f64,
    /// Explicit stop values. When non-empty, `min`, `max` and `increment` do
    /// not define the stops.
    #[setters(skip)]
    pub slider_values: Vec<SliderValue>,
    /// Whether value labels are drawn above the markers.
    pub show_label: bool,
    /// Size of the marker thumbs. The track is inset by half of it.
    pub marker_size: Dp,
    /// Optional accessibility label applied to every marker.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Optional accessibility description applied to every marker.
    #[setters(strip_option, into)]
    pub accessibility_description: Option<String>,
    /// Fired with the resolved values whenever a marker move is accepted.
    #[setters(skip)]
    pub on_change: CallbackWith<SliderValues>,
    /// Fired when a marker starts being dragged.
    #[setters(skip)]
    pub on_sliding_start: CallbackWith<MarkerType>,
    /// Fired when a marker stops being dragged.
    #[setters(skip)]
    pub on_sliding_complete: CallbackWith<MarkerType>,
    /// Optional override for the accessibility description of each marker.
    #[setters(skip)]
    pub describe_marker: Option<CallbackWith<MarkerDescriptionArgs, MarkerDescription>>,
}

impl SliderArgs {
    /// Sets the initial values.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SliderValue>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets explicit stop values.
    pub fn slider_values<I, V>(mut self, slider_values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SliderValue>,
    {
        self.slider_values = slider_values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(SliderValues) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<SliderValues>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets the handler fired when a drag starts.
    pub fn on_sliding_start<F>(mut self, on_sliding_start: F) -> Self
    where
        F: Fn(MarkerType) + Send + Sync + 'static,
    {
        self.on_sliding_start = CallbackWith::new(on_sliding_start);
        self
    }

    /// Sets the handler fired when a drag ends.
    pub fn on_sliding_complete<F>(mut self, on_sliding_complete: F) -> Self
    where
        F: Fn(MarkerType) + Send + Sync + 'static,
    {
        self.on_sliding_complete = CallbackWith::new(on_sliding_complete);
        self
    }

    /// Sets the accessibility description override.
    pub fn describe_marker<F>(mut self, describe_marker: F) -> Self
    where
        F: Fn(MarkerDescriptionArgs) -> MarkerDescription + Send + Sync + 'static,
    {
        self.describe_marker = Some(CallbackWith::new(describe_marker));
        self
    }

    /// Single with one value, range with two or more.
    pub fn slider_type(&self) -> SliderType {
        if self.values.len() > 1 {
            SliderType::Range
        } else {
            SliderType::Single
        }
    }

    /// Where the stops come from, or `None` when nothing defines them.
    pub fn stop_source(&self) -> Option<StopSource> {
        if !self.slider_values.is_empty() {
            return Some(StopSource::Values(self.slider_values.clone()));
        }
        Some(StopSource::Range {
            min: self.min?,
            max: self.max?,
            increment: self.increment,
        })
    }

    /// Checks the configuration.
    ///
    /// [`Slider`] never needs this; a bad configuration just renders no
    /// markers. Use it to surface mistakes early.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        match self.values.len() {
            0 => return Err(SliderConfigError::NoValues),
            1 | 2 => {}
            n => return Err(SliderConfigError::TooManyValues(n)),
        }

        let source = self.stop_source().ok_or(SliderConfigError::MissingBounds)?;
        if let StopSource::Range {
            min,
            max,
            increment,
        } = source
        {
            if !(min.is_finite() && max.is_finite()) {
                return Err(SliderConfigError::NonFiniteBounds);
            }
            if min > max {
                return Err(SliderConfigError::InvertedRange { min, max });
            }
            if !increment.is_finite() || increment <= 0.0 {
                return Err(SliderConfigError::InvalidIncrement(increment));
            }
        }

        let count = source
            .stop_count()
            .ok_or(SliderConfigError::TooManyStops)?;
        if self.slider_type() == SliderType::Range && count < 2 {
            return Err(SliderConfigError::TooFewStops);
        }

        // Width only affects pixels, any positive one yields the values.
        let table = StopTable::build(&source, Px(1));
        let mut start = 0;
        for value in &self.values {
            let found = table
                .position_of(value, start)
                .ok_or_else(|| SliderConfigError::ValueNotOnScale(value.clone()))?;
            start = found + 1;
        }
        Ok(())
    }

    fn defines_same_stops(&self, other: &SliderArgs) -> bool {
        self.slider_values == other.slider_values
            && self.min == other.min
            && self.max == other.max
            && self.increment == other.increment
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            min: None,
            max: None,
            increment: 1.0,
            slider_values: Vec::new(),
            show_label: true,
            marker_size: DEFAULT_MARKER_SIZE,
            accessibility_label: None,
            accessibility_description: None,
            on_change: CallbackWith::noop(),
            on_sliding_start: CallbackWith::noop(),
            on_sliding_complete: CallbackWith::noop(),
            describe_marker: None,
        }
    }
}

/// Controller for one slider instance.
///
/// Owns the stop table, the marker indices and both drag controllers. All
/// host events go through it, and it is the only thing that fires the
/// callbacks in [`SliderArgs`].
#[derive(Debug)]
pub struct Slider {
    args: SliderArgs,
    slider_type: SliderType,
    indices: MarkerIndices,
    lower_drag: DragController,
    upper_drag: DragController,
    width: Px,
    marker_widths: MarkerWidths,
}

impl Slider {
    /// Creates a slider. Markers appear after the first [`on_layout`].
    ///
    /// [`on_layout`]: Self::on_layout
    pub fn new(args: SliderArgs) -> Self {
        warn_if_invalid(&args);
        Self {
            slider_type: args.slider_type(),
            indices: MarkerIndices::new(args.on_change.clone()),
            lower_drag: DragController::new(MarkerType::Lower),
            upper_drag: DragController::new(MarkerType::Upper),
            width: Px::ZERO,
            marker_widths: MarkerWidths::new(args.marker_size),
            args,
        }
    }

    /// Applies a new configuration.
    ///
    /// Stops are rebuilt when the values defining them changed, and markers
    /// are located again when either the stops or the initial values changed.
    /// Never notifies.
    pub fn sync_args(&mut self, args: SliderArgs) {
        let stops_changed = !args.defines_same_stops(&self.args);
        let values_changed = args.values != self.args.values;
        if args.marker_size != self.args.marker_size {
            self.marker_widths = MarkerWidths::new(args.marker_size);
        }

        if stops_changed || values_changed {
            warn_if_invalid(&args);
        }
        self.indices.set_on_change(args.on_change.clone());
        self.slider_type = args.slider_type();
        self.args = args;

        if stops_changed {
            let stops = self.build_stops();
            self.indices.reset(stops, &self.args.values);
        } else if values_changed {
            self.indices.locate(&self.args.values);
        }
        self.sync_positions();
    }

    /// Rebuilds the stops for a newly measured track width.
    ///
    /// A relayout that keeps the stop count keeps the markers on their
    /// stops, even mid-drag. Never notifies.
    pub fn on_layout(&mut self, event: LayoutEvent) {
        self.width = event.width;
        let stops = self.build_stops();
        self.indices.rebind(stops, &self.args.values);
        self.sync_positions();
    }

    /// Records the measured width of a marker thumb. Zero widths are
    /// ignored.
    pub fn on_marker_layout(&mut self, marker: MarkerType, width: Px) -> bool {
        self.marker_widths.update(marker, width)
    }

    /// Feeds a drag gesture on `marker`.
    /// `End` always completes a drag in progress, even when the marker lost
    /// its stop meanwhile (a relayout to zero width, or a range slider
    /// turned single). `Start` and `Move` on such a marker are ignored.
    pub fn on_gesture(&mut self, marker: MarkerType, event: GestureEvent) {
        if event != GestureEvent::End && self.indices.index_of(marker).is_none() {
            tracing::trace!(?marker, ?event, "Ignored gesture on a marker that is not shown");
            return;
        }

        let drag = match marker {
            MarkerType::Lower => &mut self.lower_drag,
            MarkerType::Upper => &mut self.upper_drag,
        };
        match event {
            GestureEvent::Start => {
                if drag.start() {
                    self.args.on_sliding_start.call(marker);
                }
            }
            GestureEvent::Move { cumulative_dx } => {
                if drag.update(f64::from(cumulative_dx), &mut self.indices).is_some() {
                    self.sync_positions();
                }
            }
            GestureEvent::End => {
                if drag.end() {
                    self.sync_positions();
                    self.args.on_sliding_complete.call(marker);
                }
            }
        }
    }

    /// Steps `marker` in response to an accessibility action.
    pub fn on_accessibility_action(
        &mut self,
        marker: MarkerType,
        action: Action,
    ) -> Option<SliderValues> {
        let values = step_marker(&mut self.indices, marker, action)?;
        self.sync_positions();
        Some(values)
    }

    /// Steps `marker` in response to an accessibility action delivered by
    /// name (`"increment"` or `"decrement"`).
    pub fn on_accessibility_action_named(
        &mut self,
        marker: MarkerType,
        action_name: &str,
    ) -> Option<SliderValues> {
        let values = step_marker_named(&mut self.indices, marker, action_name)?;
        self.sync_positions();
        Some(values)
    }

    /// Moves the lower marker, see [`MarkerIndices::set_lower`].
    pub fn set_lower(
        &mut self,
        idx: isize,
        push_upper: bool,
    ) -> Result<SliderValues, IndexRejection> {
        let values = self.indices.set_lower(idx, push_upper)?;
        self.sync_positions();
        Ok(values)
    }

    /// Moves the upper marker, see [`MarkerIndices::set_upper`].
    pub fn set_upper(
        &mut self,
        idx: isize,
        push_lower: bool,
    ) -> Result<SliderValues, IndexRejection> {
        let values = self.indices.set_upper(idx, push_lower)?;
        self.sync_positions();
        Ok(values)
    }

    /// Current values, `None` while no markers are placed.
    pub fn values(&self) -> Option<SliderValues> {
        self.indices.values()
    }

    /// Current marker indices.
    pub fn index_state(&self) -> Option<IndexState> {
        self.indices.state()
    }

    /// Current stop table.
    pub fn stops(&self) -> &Arc<StopTable> {
        self.indices.stops()
    }

    /// Current drag boundaries of `marker`.
    pub fn pan_boundaries(&self, marker: MarkerType) -> Option<PanBoundaries> {
        self.indices.pan_boundaries(marker)
    }

    /// Visual offset of `marker`, `None` while it is not shown.
    pub fn marker_offset(&self, marker: MarkerType) -> Option<Px> {
        self.indices.index_of(marker)?;
        Some(self.drag(marker).offset())
    }

    /// Returns `true` while `marker` is being dragged.
    pub fn is_dragging(&self, marker: MarkerType) -> bool {
        self.drag(marker).is_dragging()
    }

    /// Single or range.
    pub fn slider_type(&self) -> SliderType {
        self.slider_type
    }

    /// The configuration in use.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// Last measured track width.
    pub fn width(&self) -> Px {
        self.width
    }

    /// Describes the slider for drawing.
    pub fn snapshot(&self) -> SliderSnapshot {
        let markers = [&self.lower_drag, &self.upper_drag].map(|drag| {
            render_marker(MarkerFrame {
                args: &self.args,
                slider_type: self.slider_type,
                indices: &self.indices,
                drag,
                width: self.marker_widths.get(drag.marker()),
            })
        });
        render_slider(&self.args, &self.indices, markers)
    }

    fn drag(&self, marker: MarkerType) -> &DragController {
        match marker {
            MarkerType::Lower => &self.lower_drag,
            MarkerType::Upper => &self.upper_drag,
        }
    }

    fn build_stops(&self) -> Arc<StopTable> {
        let table = match self.args.stop_source() {
            Some(source) => StopTable::build(&source, self.width),
            None => StopTable::empty(),
        };
        tracing::debug!(stops = table.len(), width = %self.width, "Rebuilt slider stop table");
        Arc::new(table)
    }

    fn sync_positions(&mut self) {
        self.lower_drag.sync_position(&self.indices);
        self.upper_drag.sync_position(&self.indices);
    }
}

/// Logs configuration problems once per configuration rather than on every
/// relayout.
fn warn_if_invalid(args: &SliderArgs) {
    if let Err(err) = args.validate() {
        tracing::warn!(%err, "Slider configuration cannot place its markers");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Change(Vec<SliderValue>),
        SlidingStart(MarkerType),
        SlidingComplete(MarkerType),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    fn logged(args: SliderArgs) -> (SliderArgs, Log) {
        let log: Log = Arc::default();
        let (change, start, complete) = (Arc::clone(&log), Arc::clone(&log), Arc::clone(&log));
        let args = args
            .on_change(move |values| {
                if let Ok(mut log) = change.lock() {
                    log.push(Event::Change(values.to_vec()));
                }
            })
            .on_sliding_start(move |marker| {
                if let Ok(mut log) = start.lock() {
                    log.push(Event::SlidingStart(marker));
                }
            })
            .on_sliding_complete(move |marker| {
                if let Ok(mut log) = complete.lock() {
                    log.push(Event::SlidingComplete(marker));
                }
            });
        (args, log)
    }

    fn events(log: &Log) -> Vec<Event> {
        log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn numbers(values: &[f64]) -> Vec<SliderValue> {
        values.iter().copied().map(SliderValue::from).collect()
    }

    fn range_1_to_100(values: &[f64]) -> SliderArgs {
        SliderArgs::default()
            .min(1.0)
            .max(100.0)
            .values(values.iter().copied())
    }

    #[test]
    fn single_slider_resolves_initial_value() {
        let mut slider = Slider::new(range_1_to_100(&[10.0]));
        assert_eq!(slider.slider_type(), SliderType::Single);
        assert_eq!(slider.index_state(), None);

        slider.on_layout(LayoutEvent::new(Px(990)));
        assert_eq!(slider.stops().len(), 100);
        assert_eq!(
            slider.index_state(),
            Some(IndexState {
                lower: 9,
                upper: None
            })
        );
        assert_eq!(slider.values().map(|v| v.to_vec()), Some(numbers(&[10.0])));
        assert_eq!(slider.marker_offset(MarkerType::Lower), Some(Px(90)));
        assert_eq!(slider.marker_offset(MarkerType::Upper), None);
    }

    #[test]
    fn range_drag_stops_short_of_the_upper_marker() {
        let (args, log) = logged(range_1_to_100(&[10.0, 70.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        assert_eq!(
            slider.set_lower(69, false),
            Err(IndexRejection::LowerReachesUpper {
                requested: 69,
                upper: 69
            })
        );

        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        slider.on_gesture(MarkerType::Lower, GestureEvent::moved(600.0));
        slider.on_gesture(MarkerType::Lower, GestureEvent::End);

        assert_eq!(
            slider.index_state(),
            Some(IndexState {
                lower: 68,
                upper: Some(69)
            })
        );
        assert_eq!(slider.marker_offset(MarkerType::Lower), Some(Px(680)));
        assert_eq!(
            events(&log),
            vec![
                Event::SlidingStart(MarkerType::Lower),
                Event::Change(numbers(&[69.0, 70.0])),
                Event::SlidingComplete(MarkerType::Lower),
            ]
        );
    }

    #[test]
    fn explicit_values_are_evenly_spaced() {
        let letters: Vec<String> = ('A'..='Z').map(String::from).collect();
        let mut slider = Slider::new(
            SliderArgs::default()
                .slider_values(letters)
                .values(["D"]),
        );
        slider.on_layout(LayoutEvent::new(Px(250)));

        assert_eq!(slider.stops().len(), 26);
        assert_eq!(slider.index_state().map(|s| s.lower), Some(3));
        assert_eq!(slider.marker_offset(MarkerType::Lower), Some(Px(30)));
        assert_eq!(slider.values().map(|v| v.to_vec()), Some(vec!["D".into()]));
    }

    #[test]
    fn decrement_pushes_only_when_needed() {
        let (args, log) = logged(range_1_to_100(&[5.0, 6.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        let pushed = slider.on_accessibility_action(MarkerType::Upper, Action::Decrement);
        assert_eq!(pushed.map(|v| v.to_vec()), Some(numbers(&[4.0, 5.0])));

        assert!(slider.set_upper(10, false).is_ok());
        let stepped = slider.on_accessibility_action_named(MarkerType::Upper, "decrement");
        assert_eq!(stepped.map(|v| v.to_vec()), Some(numbers(&[4.0, 10.0])));
        assert_eq!(slider.marker_offset(MarkerType::Upper), Some(Px(-900)));
        assert_eq!(events(&log).len(), 3);
    }

    #[test]
    fn relayout_mid_drag_keeps_indices() {
        let (args, log) = logged(range_1_to_100(&[10.0, 70.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        slider.on_gesture(MarkerType::Lower, GestureEvent::moved(100.0));
        assert_eq!(slider.index_state().map(|s| s.lower), Some(19));
        let before = events(&log).len();

        slider.on_layout(LayoutEvent::new(Px(495)));
        assert_eq!(slider.stops().width(), Px(495));
        assert_eq!(
            slider.index_state(),
            Some(IndexState {
                lower: 19,
                upper: Some(69)
            })
        );
        assert_eq!(slider.stops().get(19).map(|s| s.px), Some(Px(95)));
        assert_eq!(events(&log).len(), before);
        assert!(slider.is_dragging(MarkerType::Lower));
        // The idle upper marker follows the new table right away.
        assert_eq!(slider.marker_offset(MarkerType::Upper), Some(Px(-150)));
    }

    #[test]
    fn gestures_on_a_missing_marker_are_ignored() {
        let (args, log) = logged(range_1_to_100(&[10.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        slider.on_gesture(MarkerType::Upper, GestureEvent::Start);
        slider.on_gesture(MarkerType::Upper, GestureEvent::moved(-50.0));
        assert!(!slider.is_dragging(MarkerType::Upper));
        assert!(events(&log).is_empty());
    }

    #[test]
    fn end_completes_a_drag_after_the_track_collapses() {
        let (args, log) = logged(range_1_to_100(&[10.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        slider.on_layout(LayoutEvent::new(Px(0)));
        assert_eq!(slider.index_state(), None);
        slider.on_gesture(MarkerType::Lower, GestureEvent::End);
        assert!(!slider.is_dragging(MarkerType::Lower));

        // The next drag after a valid relayout starts normally.
        slider.on_layout(LayoutEvent::new(Px(990)));
        assert_eq!(slider.marker_offset(MarkerType::Lower), Some(Px(90)));
        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        assert!(slider.is_dragging(MarkerType::Lower));
        assert_eq!(
            events(&log),
            vec![
                Event::SlidingStart(MarkerType::Lower),
                Event::SlidingComplete(MarkerType::Lower),
                Event::SlidingStart(MarkerType::Lower),
            ]
        );
    }

    #[test]
    fn end_completes_an_upper_drag_after_switching_to_single() {
        let (args, log) = logged(range_1_to_100(&[10.0, 70.0]));
        let mut slider = Slider::new(args.clone());
        slider.on_layout(LayoutEvent::new(Px(990)));

        slider.on_gesture(MarkerType::Upper, GestureEvent::Start);
        slider.sync_args(args.values([10.0]));
        assert_eq!(slider.slider_type(), SliderType::Single);
        assert_eq!(slider.index_state().and_then(|state| state.upper), None);

        // Moves on the hidden marker are dropped, the release is not.
        slider.on_gesture(MarkerType::Upper, GestureEvent::moved(-50.0));
        slider.on_gesture(MarkerType::Upper, GestureEvent::End);
        assert!(!slider.is_dragging(MarkerType::Upper));
        assert_eq!(
            events(&log),
            vec![
                Event::SlidingStart(MarkerType::Upper),
                Event::SlidingComplete(MarkerType::Upper),
            ]
        );

        // Restarting on the hidden marker stays ignored.
        slider.on_gesture(MarkerType::Upper, GestureEvent::Start);
        assert!(!slider.is_dragging(MarkerType::Upper));
        assert_eq!(events(&log).len(), 2);
    }

    #[test]
    fn unbounded_slider_stays_empty_across_relayouts() {
        let args = SliderArgs::default().min(1.0).values([10.0]);
        assert_eq!(args.validate(), Err(SliderConfigError::MissingBounds));

        let (args, log) = logged(args);
        let mut slider = Slider::new(args);
        for width in [990, 500, 990] {
            slider.on_layout(LayoutEvent::new(Px(width)));
            assert!(slider.stops().is_empty());
            assert_eq!(slider.values(), None);
        }
        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        assert!(events(&log).is_empty());
    }

    #[test]
    fn repeated_start_fires_once() {
        let (args, log) = logged(range_1_to_100(&[10.0]));
        let mut slider = Slider::new(args);
        slider.on_layout(LayoutEvent::new(Px(990)));

        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        slider.on_gesture(MarkerType::Lower, GestureEvent::Start);
        slider.on_gesture(MarkerType::Lower, GestureEvent::End);
        slider.on_gesture(MarkerType::Lower, GestureEvent::End);
        assert_eq!(
            events(&log),
            vec![
                Event::SlidingStart(MarkerType::Lower),
                Event::SlidingComplete(MarkerType::Lower),
            ]
        );
    }

    #[test]
    fn sync_args_relocates_on_new_values() {
        let mut slider = Slider::new(range_1_to_100(&[10.0, 70.0]));
        slider.on_layout(LayoutEvent::new(Px(990)));
        assert!(slider.set_lower(30, false).is_ok());

        // Unchanged configuration keeps the user's position.
        slider.sync_args(range_1_to_100(&[10.0, 70.0]));
        assert_eq!(slider.index_state().map(|s| s.lower), Some(30));

        slider.sync_args(range_1_to_100(&[20.0, 50.0]));
        assert_eq!(
            slider.index_state(),
            Some(IndexState {
                lower: 19,
                upper: Some(49)
            })
        );

        slider.sync_args(range_1_to_100(&[20.0, 50.0]).increment(2.0));
        assert_eq!(slider.stops().len(), 50);
        assert_eq!(slider.index_state().map(|s| s.lower), Some(0));
    }

    #[test]
    fn no_layout_means_no_markers() {
        let mut slider = Slider::new(range_1_to_100(&[10.0]));
        assert_eq!(
            slider.on_accessibility_action(MarkerType::Lower, Action::Increment),
            None
        );
        assert_eq!(slider.set_lower(3, false), Err(IndexRejection::NoStops));
        assert!(slider.snapshot().markers.is_empty());

        slider.on_layout(LayoutEvent::new(Px(0)));
        assert!(slider.stops().is_empty());
    }

    #[test]
    fn snapshot_describes_both_markers() {
        let mut slider = Slider::new(range_1_to_100(&[10.0, 100.0]));
        slider.on_layout(LayoutEvent::new(Px(990)));
        assert!(slider.on_marker_layout(MarkerType::Lower, Px(30)));

        let snapshot = slider.snapshot();
        assert_eq!(snapshot.markers.len(), 2);
        assert_eq!(
            snapshot.selected_track,
            Some(SelectedTrack {
                left: Px(90),
                right: Px(0)
            })
        );

        let lower = snapshot.marker(MarkerType::Lower);
        assert_eq!(lower.map(|m| m.width), Some(Px(30)));
        assert_eq!(
            lower.and_then(|m| m.accessibility.label.clone()),
            Some("Min".to_string())
        );

        let upper = snapshot.marker(MarkerType::Upper);
        assert_eq!(upper.map(|m| m.layer), Some(MarkerLayer::AtMax));
        assert_eq!(upper.map(|m| m.width), Some(Px(24)));
    }

    #[test]
    fn validate_reports_configuration_problems() {
        assert_eq!(range_1_to_100(&[10.0, 70.0]).validate(), Ok(()));
        assert_eq!(
            range_1_to_100(&[]).validate(),
            Err(SliderConfigError::NoValues)
        );
        assert_eq!(
            range_1_to_100(&[1.0, 2.0, 3.0]).validate(),
            Err(SliderConfigError::TooManyValues(3))
        );
        assert_eq!(
            SliderArgs::default().values([1.0]).validate(),
            Err(SliderConfigError::MissingBounds)
        );
        assert_eq!(
            SliderArgs::default()
                .min(5.0)
                .max(1.0)
                .values([1.0])
                .validate(),
            Err(SliderConfigError::InvertedRange { min: 5.0, max: 1.0 })
        );
        assert_eq!(
            range_1_to_100(&[10.0]).increment(0.0).validate(),
            Err(SliderConfigError::InvalidIncrement(0.0))
        );
        assert_eq!(
            range_1_to_100(&[10.5]).validate(),
            Err(SliderConfigError::ValueNotOnScale(SliderValue::Number(10.5)))
        );
        assert_eq!(
            range_1_to_100(&[70.0, 10.0]).validate(),
            Err(SliderConfigError::ValueNotOnScale(SliderValue::Number(10.0)))
        );
        assert_eq!(
            SliderArgs::default()
                .slider_values(["only"])
                .values(["only", "only"])
                .validate(),
            Err(SliderConfigError::TooFewStops)
        );
    }
}

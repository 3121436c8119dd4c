use detent_ui::{AccessibilityNode, Px};
use smallvec::SmallVec;

use super::{
    MarkerType, SliderArgs, SliderType,
    index_state::MarkerIndices,
    interaction::{DragController, describe_marker},
    layout::{MarkerLayer, SelectedTrack, TrackPlacement},
    stops::Stop,
};

/// Everything a host needs to draw the slider for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSnapshot {
    /// Track insets.
    pub track: TrackPlacement,
    /// Highlighted track section, absent while no markers are placed.
    pub selected_track: Option<SelectedTrack>,
    /// Markers in drawing order, lower first.
    pub markers: SmallVec<[MarkerSnapshot; 2]>,
}

impl SliderSnapshot {
    /// The snapshot of `marker`, if it is drawn.
    pub fn marker(&self, marker: MarkerType) -> Option<&MarkerSnapshot> {
        self.markers
            .iter()
            .find(|snapshot| snapshot.marker_type == marker)
    }
}

/// One marker thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSnapshot {
    /// Which marker this is.
    pub marker_type: MarkerType,
    /// The stop the marker rests on.
    pub stop: Stop,
    /// Horizontal translation from the marker's anchor edge.
    pub offset: Px,
    /// Whether the marker is being dragged.
    pub selected: bool,
    /// Stacking layer.
    pub layer: MarkerLayer,
    /// Measured or configured thumb width.
    pub width: Px,
    /// Value label above the thumb, when labels are shown.
    pub label: Option<LabelSnapshot>,
    /// Accessibility node for the thumb.
    pub accessibility: AccessibilityNode,
}

/// The value label drawn above a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSnapshot {
    /// Label text.
    pub text: String,
    /// Whether the owning marker is being dragged.
    pub selected: bool,
}

pub(super) struct MarkerFrame<'a> {
    pub args: &'a SliderArgs,
    pub slider_type: SliderType,
    pub indices: &'a MarkerIndices,
    pub drag: &'a DragController,
    pub width: Px,
}

pub(super) fn render_marker(frame: MarkerFrame<'_>) -> Option<MarkerSnapshot> {
    let marker = frame.drag.marker();
    let stop = frame.indices.stop_of(marker)?.clone();
    let at_max = frame.indices.stops().last_index() == Some(stop.index);
    let selected = frame.drag.is_dragging();

    let label = frame.args.show_label.then(|| LabelSnapshot {
        text: stop.value.to_string(),
        selected,
    });
    let accessibility = describe_marker(frame.args, frame.slider_type, marker, &stop.value);

    Some(MarkerSnapshot {
        marker_type: marker,
        offset: frame.drag.offset(),
        selected,
        layer: MarkerLayer::resolve(selected, at_max),
        width: frame.width,
        label,
        accessibility,
        stop,
    })
}

pub(super) fn render_slider(
    args: &SliderArgs,
    indices: &MarkerIndices,
    markers: impl IntoIterator<Item = Option<MarkerSnapshot>>,
) -> SliderSnapshot {
    SliderSnapshot {
        track: TrackPlacement::for_marker_size(args.marker_size),
        selected_track: SelectedTrack::between(indices.stops(), indices.state()),
        markers: markers.into_iter().flatten().collect(),
    }
}

use std::sync::Arc;

use detent_ui::{
    AccessibilityNode, Px,
    accessibility::{Action, Role, action_from_name},
};

use super::{
    MarkerType, SliderArgs, SliderType,
    index_state::{MarkerIndices, SliderValues},
    stops::SliderValue,
};

/// Tracks one marker's drag gesture and its visual offset.
///
/// Offsets are relative to the marker's anchor: the lower marker measures
/// from the track start, the upper marker from the track end.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    marker: MarkerType,
    dragging: bool,
    baseline: Option<f64>,
    last_resolved: Option<Px>,
    offset: Px,
}

impl DragController {
    /// An idle controller for `marker`.
    pub fn new(marker: MarkerType) -> Self {
        Self {
            marker,
            dragging: false,
            baseline: None,
            last_resolved: None,
            offset: Px::ZERO,
        }
    }

    /// The marker this controller drives.
    pub fn marker(&self) -> MarkerType {
        self.marker
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current visual offset of the marker.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// Begins a drag. Returns `false` if one was already in progress.
    pub fn start(&mut self) -> bool {
        if self.dragging {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Applies a drag movement of `cumulative_dx` since the drag began.
    ///
    /// The candidate offset is clamped into the marker's pan boundaries and
    /// snapped to the nearest stop. The marker moves only if the index state
    /// accepts the stop, in which case the new offset is returned.
    pub fn update(&mut self, cumulative_dx: f64, indices: &mut MarkerIndices) -> Option<Px> {
        if !self.dragging {
            tracing::trace!(marker = ?self.marker, "Ignored drag movement outside a drag");
            return None;
        }

        let boundaries = indices.pan_boundaries(self.marker)?;
        let candidate = boundaries.clamp(self.baseline.unwrap_or(0.0) + cumulative_dx);

        let stops = Arc::clone(indices.stops());
        let anchor = self.marker.anchor();
        let stop = stops.nearest(candidate, anchor)?;

        match indices.set_index(self.marker, stop.index as isize, false) {
            Ok(_) => {
                let offset = anchor.pixel(stop);
                tracing::trace!(
                    marker = ?self.marker,
                    candidate,
                    index = stop.index,
                    %offset,
                    "Resolved drag position"
                );
                self.offset = offset;
                self.last_resolved = Some(offset);
                Some(offset)
            }
            Err(rejection) => {
                tracing::trace!(marker = ?self.marker, %rejection, "Drag position rejected");
                None
            }
        }
    }

    /// Ends a drag. Returns `false` if no drag was in progress.
    ///
    /// The next drag continues from the last stop this one resolved.
    pub fn end(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        if let Some(resolved) = self.last_resolved {
            self.baseline = Some(resolved.to_f64());
        }
        true
    }

    /// Moves an idle marker onto the stop its index currently points at.
    ///
    /// Has no effect during a drag; the gesture owns the offset then.
    pub fn sync_position(&mut self, indices: &MarkerIndices) {
        if self.dragging {
            return;
        }
        match indices.stop_of(self.marker) {
            Some(stop) => {
                let offset = self.marker.anchor().pixel(stop);
                self.offset = offset;
                self.baseline = Some(offset.to_f64());
                self.last_resolved = Some(offset);
            }
            None => {
                self.offset = Px::ZERO;
                self.baseline = None;
                self.last_resolved = None;
            }
        }
    }
}

/// Moves `marker` one stop in response to an accessibility action.
///
/// `Increment` and `Decrement` push the other marker when needed; other
/// actions are ignored. Returns the new values when the move was accepted.
pub fn step_marker(
    indices: &mut MarkerIndices,
    marker: MarkerType,
    action: Action,
) -> Option<SliderValues> {
    let delta = match action {
        Action::Increment => 1,
        Action::Decrement => -1,
        other => {
            tracing::trace!(?marker, action = ?other, "Ignored accessibility action");
            return None;
        }
    };

    let current = indices.index_of(marker)? as isize;
    match indices.set_index(marker, current + delta, true) {
        Ok(values) => Some(values),
        Err(rejection) => {
            tracing::trace!(?marker, %rejection, "Accessibility step rejected");
            None
        }
    }
}

/// Like [`step_marker`], for bridges that deliver actions by name.
pub fn step_marker_named(
    indices: &mut MarkerIndices,
    marker: MarkerType,
    action_name: &str,
) -> Option<SliderValues> {
    let Some(action) = action_from_name(action_name) else {
        tracing::trace!(?marker, action_name, "Ignored accessibility action");
        return None;
    };
    step_marker(indices, marker, action)
}

/// What a [`SliderArgs::describe_marker`] override is told about a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptionArgs {
    /// Which marker is being described.
    pub marker_type: MarkerType,
    /// The value the marker currently rests on.
    pub value: SliderValue,
    /// Configured numeric minimum, if any.
    pub min_value: Option<f64>,
    /// Configured numeric maximum, if any.
    pub max_value: Option<f64>,
}

/// Accessibility fields a [`SliderArgs::describe_marker`] override may
/// replace. `None` keeps the computed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerDescription {
    /// Replacement label.
    pub label: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement value text.
    pub value: Option<String>,
    /// Replacement numeric value.
    pub numeric_value: Option<f64>,
    /// Replacement numeric range as `(min, max)`.
    pub numeric_range: Option<(f64, f64)>,
}

/// Builds the accessibility node of `marker` resting on `value`.
///
/// The slider's own label and description apply first, then the
/// `describe_marker` override. The increment and decrement actions are
/// always present.
pub fn describe_marker(
    args: &SliderArgs,
    slider_type: SliderType,
    marker: MarkerType,
    value: &SliderValue,
) -> AccessibilityNode {
    let label = match (slider_type, marker) {
        (SliderType::Single, _) => "Select value",
        (SliderType::Range, MarkerType::Lower) => "Min",
        (SliderType::Range, MarkerType::Upper) => "Max",
    };

    let mut node = AccessibilityNode::new(Role::Slider)
        .label(label)
        .value(value.to_string())
        .focusable();
    node.min_numeric_value = args.min;
    node.max_numeric_value = args.max;
    node.numeric_value = value.as_number();

    if let Some(label) = args.accessibility_label.as_ref() {
        node.label = Some(label.clone());
    }
    if let Some(description) = args.accessibility_description.as_ref() {
        node.description = Some(description.clone());
    }

    if let Some(describe) = args.describe_marker.as_ref() {
        let custom = describe.call(MarkerDescriptionArgs {
            marker_type: marker,
            value: value.clone(),
            min_value: args.min,
            max_value: args.max,
        });
        if custom.label.is_some() {
            node.label = custom.label;
        }
        if custom.description.is_some() {
            node.description = custom.description;
        }
        if custom.value.is_some() {
            node.value = custom.value;
        }
        if custom.numeric_value.is_some() {
            node.numeric_value = custom.numeric_value;
        }
        if let Some((min, max)) = custom.numeric_range {
            node = node.numeric_range(min, max);
        }
    }

    node.actions([Action::Increment, Action::Decrement])
}

#[cfg(test)]
mod tests {
    use detent_ui::CallbackWith;

    use super::*;
    use crate::slider::stops::{StopSource, StopTable};

    fn indices(values: &[f64]) -> MarkerIndices {
        let stops = Arc::new(StopTable::build(
            &StopSource::Range {
                min: 0.0,
                max: 10.0,
                increment: 1.0,
            },
            Px(100),
        ));
        let mut indices = MarkerIndices::new(CallbackWith::noop());
        let values: Vec<SliderValue> = values.iter().copied().map(SliderValue::from).collect();
        indices.rebind(stops, &values);
        indices
    }

    fn dragging(marker: MarkerType, indices: &MarkerIndices) -> DragController {
        let mut drag = DragController::new(marker);
        drag.sync_position(indices);
        assert!(drag.start());
        drag
    }

    #[test]
    fn drag_snaps_to_the_nearest_stop() {
        let mut indices = indices(&[2.0]);
        let mut drag = dragging(MarkerType::Lower, &indices);

        assert_eq!(drag.update(14.0, &mut indices), Some(Px(30)));
        assert_eq!(drag.update(16.0, &mut indices), Some(Px(40)));
        assert_eq!(indices.index_of(MarkerType::Lower), Some(4));
    }

    #[test]
    fn lower_drag_is_clamped_short_of_upper() {
        let mut indices = indices(&[2.0, 6.0]);
        let mut drag = dragging(MarkerType::Lower, &indices);

        assert_eq!(drag.update(500.0, &mut indices), Some(Px(50)));
        assert_eq!(indices.index_of(MarkerType::Lower), Some(5));
        assert_eq!(indices.index_of(MarkerType::Upper), Some(6));
    }

    #[test]
    fn upper_drag_uses_end_offsets() {
        let mut indices = indices(&[2.0, 6.0]);
        let mut drag = dragging(MarkerType::Upper, &indices);
        assert_eq!(drag.offset(), Px(-40));

        assert_eq!(drag.update(-500.0, &mut indices), Some(Px(-70)));
        assert_eq!(indices.index_of(MarkerType::Upper), Some(3));
        assert_eq!(drag.update(500.0, &mut indices), Some(Px(0)));
        assert_eq!(indices.index_of(MarkerType::Upper), Some(10));
    }

    #[test]
    fn next_drag_continues_from_the_last_stop() {
        let mut indices = indices(&[0.0]);
        let mut drag = dragging(MarkerType::Lower, &indices);
        assert_eq!(drag.update(31.0, &mut indices), Some(Px(30)));
        assert!(drag.end());
        assert!(!drag.end());

        assert!(drag.start());
        assert_eq!(drag.update(20.0, &mut indices), Some(Px(50)));
    }

    #[test]
    fn movement_outside_a_drag_is_ignored() {
        let mut indices = indices(&[2.0]);
        let mut drag = DragController::new(MarkerType::Lower);
        assert_eq!(drag.update(40.0, &mut indices), None);
        assert_eq!(indices.index_of(MarkerType::Lower), Some(2));
    }

    #[test]
    fn sync_position_waits_for_the_drag_to_end() {
        let mut indices = indices(&[2.0]);
        let mut drag = dragging(MarkerType::Lower, &indices);
        assert!(indices.set_lower(8, false).is_ok());

        drag.sync_position(&indices);
        assert_eq!(drag.offset(), Px(20));

        drag.end();
        drag.sync_position(&indices);
        assert_eq!(drag.offset(), Px(80));
    }

    #[test]
    fn stepping_pushes_the_other_marker() {
        let mut indices = indices(&[5.0, 6.0]);
        let values = step_marker(&mut indices, MarkerType::Upper, Action::Decrement);
        assert_eq!(
            values.map(|values| values.to_vec()),
            Some(vec![SliderValue::Number(4.0), SliderValue::Number(5.0)])
        );

        let mut indices = self::indices(&[5.0, 8.0]);
        assert!(step_marker(&mut indices, MarkerType::Upper, Action::Decrement).is_some());
        assert_eq!(indices.index_of(MarkerType::Lower), Some(5));
        assert_eq!(indices.index_of(MarkerType::Upper), Some(7));
    }

    #[test]
    fn stepping_ignores_other_actions() {
        let mut indices = indices(&[5.0]);
        assert_eq!(step_marker(&mut indices, MarkerType::Lower, Action::Click), None);
        assert_eq!(
            step_marker_named(&mut indices, MarkerType::Lower, "activate"),
            None
        );
        assert!(step_marker_named(&mut indices, MarkerType::Lower, "increment").is_some());
        assert_eq!(indices.index_of(MarkerType::Lower), Some(6));
    }

    #[test]
    fn stepping_at_the_end_is_rejected() {
        let mut indices = indices(&[9.0, 10.0]);
        assert_eq!(
            step_marker(&mut indices, MarkerType::Lower, Action::Increment),
            None
        );
        assert_eq!(indices.index_of(MarkerType::Lower), Some(9));
    }

    #[test]
    fn description_labels_follow_slider_type() {
        let args = SliderArgs::default().min(1.0).max(100.0);
        let value = SliderValue::Number(10.0);

        let single = describe_marker(&args, SliderType::Single, MarkerType::Lower, &value);
        assert_eq!(single.label.as_deref(), Some("Select value"));
        assert_eq!(single.role, Role::Slider);
        assert!(single.focusable);
        assert_eq!(single.numeric_value, Some(10.0));
        assert_eq!(single.min_numeric_value, Some(1.0));
        assert_eq!(single.max_numeric_value, Some(100.0));
        assert_eq!(single.value.as_deref(), Some("10"));

        let upper = describe_marker(&args, SliderType::Range, MarkerType::Upper, &value);
        assert_eq!(upper.label.as_deref(), Some("Max"));
    }

    #[test]
    fn text_values_have_no_numeric_value() {
        let args = SliderArgs::default();
        let node = describe_marker(
            &args,
            SliderType::Range,
            MarkerType::Lower,
            &SliderValue::from("D"),
        );
        assert_eq!(node.label.as_deref(), Some("Min"));
        assert_eq!(node.value.as_deref(), Some("D"));
        assert_eq!(node.numeric_value, None);
        assert_eq!(node.min_numeric_value, None);
    }

    #[test]
    fn override_wins_but_actions_stay() {
        let args = SliderArgs::default()
            .accessibility_label("Price")
            .accessibility_description("Nightly price")
            .describe_marker(|request: MarkerDescriptionArgs| MarkerDescription {
                value: Some(format!("${}", request.value)),
                ..Default::default()
            });
        let node = describe_marker(
            &args,
            SliderType::Single,
            MarkerType::Lower,
            &SliderValue::Number(120.0),
        );
        assert_eq!(node.label.as_deref(), Some("Price"));
        assert_eq!(node.description.as_deref(), Some("Nightly price"));
        assert_eq!(node.value.as_deref(), Some("$120"));
        assert_eq!(node.actions, vec![Action::Increment, Action::Decrement]);
    }
}

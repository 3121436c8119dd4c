//! Recorded slider sessions: a `[slider]` configuration followed by the
//! `[[event]]`s a host would have forwarded.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use detent_components::slider::{
    MarkerType, Slider, SliderArgs, SliderSnapshot, SliderValue, SliderValues,
};
use detent_ui::{Dp, GestureEvent, LayoutEvent, Px};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Session {
    pub slider: SliderConfig,
    #[serde(default, rename = "event")]
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    #[serde(default)]
    pub values: Vec<SliderValue>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub increment: Option<f64>,
    #[serde(default)]
    pub slider_values: Vec<SliderValue>,
    pub show_label: Option<bool>,
    pub marker_size: Option<f64>,
    pub accessibility_label: Option<String>,
    pub accessibility_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    Layout {
        width: i32,
    },
    MarkerLayout {
        marker: MarkerType,
        width: i32,
    },
    Gesture {
        marker: MarkerType,
        #[serde(flatten)]
        gesture: GestureEvent,
    },
    Action {
        marker: MarkerType,
        action: String,
    },
    SetLower {
        index: isize,
        #[serde(default)]
        push: bool,
    },
    SetUpper {
        index: isize,
        #[serde(default)]
        push: bool,
    },
}

/// What happened while replaying, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Changed(SliderValues),
    Rejected(String),
    Ignored,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid session {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let session: Session = toml::from_str(text).context("Failed to parse session TOML")?;
        if session.slider.values.is_empty() {
            bail!("[slider] needs at least one entry in `values`");
        }
        Ok(session)
    }
}

impl SliderConfig {
    pub fn to_args(&self) -> SliderArgs {
        let mut args = SliderArgs::default()
            .values(self.values.iter().cloned())
            .slider_values(self.slider_values.iter().cloned());
        if let Some(min) = self.min {
            args = args.min(min);
        }
        if let Some(max) = self.max {
            args = args.max(max);
        }
        if let Some(increment) = self.increment {
            args = args.increment(increment);
        }
        if let Some(show_label) = self.show_label {
            args = args.show_label(show_label);
        }
        if let Some(marker_size) = self.marker_size {
            args = args.marker_size(Dp(marker_size));
        }
        if let Some(label) = self.accessibility_label.as_ref() {
            args = args.accessibility_label(label.clone());
        }
        if let Some(description) = self.accessibility_description.as_ref() {
            args = args.accessibility_description(description.clone());
        }
        args
    }
}

/// Feeds one recorded event to the slider.
pub fn apply(slider: &mut Slider, event: &SessionEvent) -> Outcome {
    match event {
        SessionEvent::Layout { width } => {
            slider.on_layout(LayoutEvent::new(Px(*width)));
            Outcome::Ignored
        }
        SessionEvent::MarkerLayout { marker, width } => {
            slider.on_marker_layout(*marker, Px(*width));
            Outcome::Ignored
        }
        SessionEvent::Gesture { marker, gesture } => {
            let before = slider.values();
            slider.on_gesture(*marker, *gesture);
            match slider.values() {
                Some(after)
                    if matches!(gesture, GestureEvent::Move { .. })
                        && before.as_ref() != Some(&after) =>
                {
                    Outcome::Changed(after)
                }
                _ => Outcome::Ignored,
            }
        }
        SessionEvent::Action { marker, action } => {
            match slider.on_accessibility_action_named(*marker, action) {
                Some(values) => Outcome::Changed(values),
                None => Outcome::Rejected(format!("{action} on {marker:?} marker")),
            }
        }
        SessionEvent::SetLower { index, push } => match slider.set_lower(*index, *push) {
            Ok(values) => Outcome::Changed(values),
            Err(rejection) => Outcome::Rejected(rejection.to_string()),
        },
        SessionEvent::SetUpper { index, push } => match slider.set_upper(*index, *push) {
            Ok(values) => Outcome::Changed(values),
            Err(rejection) => Outcome::Rejected(rejection.to_string()),
        },
    }
}

pub fn format_values(values: &[SliderValue]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

pub fn describe_snapshot(snapshot: &SliderSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(selected) = snapshot.selected_track {
        lines.push(format!(
            "selected track insets: left {}, right {}",
            selected.left, selected.right
        ));
    }
    for marker in &snapshot.markers {
        let label = marker
            .label
            .as_ref()
            .map(|label| label.text.clone())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:?} marker: stop {} ({}) offset {} layer {:?}, label {}",
            marker.marker_type,
            marker.stop.index,
            marker.stop.value,
            marker.offset,
            marker.layer,
            label
        ));
    }
    lines
}

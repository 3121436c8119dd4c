//! Components built on detent-ui.
//!
//! # Usage
//!
//! Create a [`Slider`](slider::Slider) from [`SliderArgs`](slider::SliderArgs),
//! forward layout, gesture and accessibility events from the host, and draw
//! what [`Slider::snapshot`](slider::Slider::snapshot) returns.
//!
//! # Example
//!
//! ```
//! use detent_components::slider::{MarkerType, Slider, SliderArgs};
//! use detent_ui::{LayoutEvent, Px, accessibility::Action};
//!
//! let mut slider = Slider::new(
//!     SliderArgs::default()
//!         .slider_values(["XS", "S", "M", "L", "XL"])
//!         .values(["S", "L"]),
//! );
//! slider.on_layout(LayoutEvent::new(Px(320)));
//!
//! let values = slider.on_accessibility_action(MarkerType::Upper, Action::Increment);
//! assert_eq!(
//!     values.map(|v| v.iter().map(ToString::to_string).collect::<Vec<_>>()),
//!     Some(vec!["S".to_string(), "XL".to_string()])
//! );
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;

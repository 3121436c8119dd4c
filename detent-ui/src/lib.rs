//! detent-ui holds the foundation types shared by detent components.
//!
//! # Overview
//!
//! Components in detent are renderer independent. A host toolkit measures
//! the widget, captures pointer gestures and bridges platform accessibility;
//! it forwards what it observed as plain events and reads back plain data.
//! This crate defines that boundary:
//!
//! - [`Px`] and [`Dp`]: physical and density-independent units.
//! - [`GestureEvent`] and [`LayoutEvent`]: what the host reports.
//! - [`AccessibilityNode`]: what components describe to assistive technology,
//!   with AccessKit [`Action`](accessibility::Action)s flowing back.
//! - [`CallbackWith`]: identity-compared callback handles used in args.
//! - [`logging`]: tracing bootstrap for binaries.
//!
//! ```
//! use detent_ui::{GestureEvent, LayoutEvent, Px};
//!
//! let layout = LayoutEvent::new(Px(300));
//! let drag = [GestureEvent::Start, GestureEvent::moved(42.0), GestureEvent::End];
//! assert_eq!(layout.width, Px(300));
//! assert_eq!(drag.len(), 3);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod dp;
pub mod gesture;
pub mod logging;
pub mod prop;
pub mod px;

pub use accesskit;

pub use crate::{
    accessibility::AccessibilityNode,
    dp::Dp,
    gesture::{GestureEvent, LayoutEvent},
    prop::CallbackWith,
    px::Px,
};

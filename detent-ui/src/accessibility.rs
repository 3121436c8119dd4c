//! Accessibility metadata for adjustable controls.
//!
//! Components describe each focusable part with an [`AccessibilityNode`]. The
//! host hands it to its platform bridge, either as is or converted with
//! [`AccessibilityNode::to_accesskit`]. Actions flow back either as AccessKit
//! [`Action`]s or by name, see [`action_from_name`].
//!
//! ```
//! use detent_ui::accessibility::{AccessibilityNode, Action, Role};
//!
//! let node = AccessibilityNode::new(Role::Slider)
//!     .label("Select value")
//!     .numeric_range(1.0, 100.0)
//!     .actions([Action::Increment, Action::Decrement]);
//!
//! let accesskit = node.to_accesskit();
//! assert_eq!(accesskit.label(), Some("Select value"));
//! assert!(accesskit.supports_action(Action::Increment));
//! ```

pub use accesskit::{Action, Role};

/// What assistive technology is told about one focusable part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityNode {
    /// Semantic role.
    pub role: Role,
    /// Short name announced on focus.
    pub label: Option<String>,
    /// Longer explanation.
    pub description: Option<String>,
    /// Current value as spoken text.
    pub value: Option<String>,
    /// Current value, when it is numeric.
    pub numeric_value: Option<f64>,
    /// Lower bound of the numeric value.
    pub min_numeric_value: Option<f64>,
    /// Upper bound of the numeric value.
    pub max_numeric_value: Option<f64>,
    /// Whether the part can take focus.
    pub focusable: bool,
    /// Actions assistive technology may invoke.
    pub actions: Vec<Action>,
}

impl AccessibilityNode {
    /// An empty node with `role`.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the spoken value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the numeric value.
    pub fn numeric_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }

    /// Sets both numeric bounds.
    pub fn numeric_range(mut self, min: f64, max: f64) -> Self {
        self.min_numeric_value = Some(min);
        self.max_numeric_value = Some(max);
        self
    }

    /// Makes the node focusable.
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    /// Replaces the supported actions.
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Returns `true` if `action` may be invoked on this node.
    pub fn supports(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Converts into an AccessKit node. Focusable nodes gain
    /// [`Action::Focus`].
    pub fn to_accesskit(&self) -> accesskit::Node {
        let mut node = accesskit::Node::new(self.role);
        if let Some(label) = self.label.as_deref() {
            node.set_label(label);
        }
        if let Some(description) = self.description.as_deref() {
            node.set_description(description);
        }
        if let Some(value) = self.value.as_deref() {
            node.set_value(value);
        }
        if let Some(numeric_value) = self.numeric_value {
            node.set_numeric_value(numeric_value);
        }
        if let Some(min) = self.min_numeric_value {
            node.set_min_numeric_value(min);
        }
        if let Some(max) = self.max_numeric_value {
            node.set_max_numeric_value(max);
        }
        if self.focusable {
            node.add_action(Action::Focus);
        }
        for action in &self.actions {
            node.add_action(*action);
        }
        node
    }
}

/// Maps an action name delivered by a platform bridge to an [`Action`].
///
/// Mobile bridges report adjustable-control actions by name; only
/// `"increment"` and `"decrement"` are recognized.
///
/// ```
/// use detent_ui::accessibility::{Action, action_from_name};
///
/// assert_eq!(action_from_name("increment"), Some(Action::Increment));
/// assert_eq!(action_from_name("activate"), None);
/// ```
pub fn action_from_name(name: &str) -> Option<Action> {
    match name {
        "increment" => Some(Action::Increment),
        "decrement" => Some(Action::Decrement),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_replace_previous_ones() {
        let node = AccessibilityNode::new(Role::Slider)
            .actions([Action::Click])
            .actions([Action::Increment, Action::Decrement]);
        assert!(node.supports(Action::Increment));
        assert!(!node.supports(Action::Click));
    }

    #[test]
    fn accesskit_node_carries_value_and_bounds() {
        let node = AccessibilityNode::new(Role::Slider)
            .value("10")
            .numeric_value(10.0)
            .numeric_range(1.0, 100.0)
            .focusable()
            .to_accesskit();
        assert_eq!(node.role(), Role::Slider);
        assert_eq!(node.value(), Some("10"));
        assert_eq!(node.numeric_value(), Some(10.0));
        assert_eq!(node.min_numeric_value(), Some(1.0));
        assert_eq!(node.max_numeric_value(), Some(100.0));
        assert!(node.supports_action(Action::Focus));
    }

    #[test]
    fn action_names_are_case_sensitive() {
        assert_eq!(action_from_name("decrement"), Some(Action::Decrement));
        assert_eq!(action_from_name("Decrement"), None);
        assert_eq!(action_from_name(""), None);
    }
}

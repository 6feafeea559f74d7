use serde::{Deserialize, Serialize};

use crate::Result;

/// Label shown for a deadline whose due date is missing or unreadable, unless configured otherwise.
pub const DEFAULT_UNKNOWN_DUE_LABEL: &str = "Due date unknown";

/// Configuration for the classboard page behaviors.
///
/// The defaults match the markup the classboard templates render: `.deadline` elements with a `data-due`
/// attribute, and `textarea`s inside `form`s. Any subset of fields can be given as JSON; the rest keep their
/// defaults.
///
/// # Example
///
/// ```rust
/// use classboard_core::Config;
///
/// let cfg = Config::new()
///     .with_deadline_selector("[data-due]")
///     .with_alert_message("Answer every question before submitting");
///
/// let from_json = Config::from_json(r#"{ "warning_color": "darkred" }"#).unwrap();
/// assert_eq!(from_json.warning_color, "darkred");
/// assert_eq!(from_json.form_selector, "form");
/// # let _ = cfg;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selector for the elements that display a countdown.
    pub deadline_selector: String,

    /// Attribute holding the due date on each deadline element.
    pub due_attribute: String,

    /// Selector for the forms that get a submission guard.
    pub form_selector: String,

    /// Selector, relative to each form, for its required fields.
    pub field_selector: String,

    /// Text color applied to past-due labels.
    pub warning_color: String,

    /// Border applied to a required field found blank on submit.
    pub invalid_border: String,

    /// Message shown once per blocked submission.
    pub alert_message: String,

    /// Label written when a due date is missing or cannot be read.
    pub unknown_due_label: String,

    /// Clear the invalid marker on fields that were blank on an earlier attempt and are now filled.
    pub clear_stale_markers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deadline_selector: ".deadline".to_string(),
            due_attribute: "data-due".to_string(),
            form_selector: "form".to_string(),
            field_selector: "textarea".to_string(),
            warning_color: "red".to_string(),
            invalid_border: "1px solid red".to_string(),
            alert_message: "Please fill all required fields".to_string(),
            unknown_due_label: DEFAULT_UNKNOWN_DUE_LABEL.to_string(),
            clear_stale_markers: true,
        }
    }
}

impl Config {
    /// Create a new config with the default markup contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config from JSON. Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the selector used to find deadline elements.
    pub fn with_deadline_selector(mut self, selector: impl Into<String>) -> Self {
        self.deadline_selector = selector.into();
        self
    }

    /// Set the attribute the due date is read from.
    pub fn with_due_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.due_attribute = attribute.into();
        self
    }

    /// Set the selector used to find guarded forms.
    pub fn with_form_selector(mut self, selector: impl Into<String>) -> Self {
        self.form_selector = selector.into();
        self
    }

    /// Set the selector, scoped to a form, used to find required fields.
    pub fn with_field_selector(mut self, selector: impl Into<String>) -> Self {
        self.field_selector = selector.into();
        self
    }

    /// Set the color of past-due labels.
    pub fn with_warning_color(mut self, color: impl Into<String>) -> Self {
        self.warning_color = color.into();
        self
    }

    /// Set the border that marks a blank required field.
    pub fn with_invalid_border(mut self, border: impl Into<String>) -> Self {
        self.invalid_border = border.into();
        self
    }

    /// Set the message shown when a submission is blocked.
    pub fn with_alert_message(mut self, message: impl Into<String>) -> Self {
        self.alert_message = message.into();
        self
    }

    /// Set the label written for unreadable due dates.
    pub fn with_unknown_due_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_due_label = label.into();
        self
    }

    /// Choose whether a marker from an earlier attempt is cleared once its field is filled.
    ///
    /// With `false`, a field stays outlined until the page reloads even after it has been filled in.
    pub fn with_clear_stale_markers(mut self, clear: bool) -> Self {
        self.clear_stale_markers = clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json(r#"{ "alert_message": "Fill in every answer", "clear_stale_markers": false }"#)
            .unwrap();

        assert_eq!(
            cfg,
            Config::new()
                .with_alert_message("Fill in every answer")
                .with_clear_stale_markers(false)
        );
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json("{ deadline_selector: ").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}

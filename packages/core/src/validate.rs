//! Required-field checks run when a form is submitted.

use std::collections::BTreeSet;

use crate::{Config, Reporter};

/// The position of a required field inside its form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldRef(pub usize);

/// A multi-line text field that must not be blank when its form is submitted.
pub trait RequiredField {
    /// The field's current text.
    fn value(&self) -> String;

    /// Outline the field as invalid.
    fn mark_invalid(&mut self, border: &str);

    /// Remove an outline set by [`RequiredField::mark_invalid`].
    fn clear_invalid(&mut self);

    /// Whether the field carries an outline set by [`RequiredField::mark_invalid`]. Borders the page author
    /// set some other way don't count.
    fn is_marked(&self) -> bool;
}

/// The outcome of checking one form's required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` when no field was blank and the submission may go ahead.
    pub ok: bool,

    /// The blank fields, in document order.
    pub invalid_fields: BTreeSet<FieldRef>,
}

impl ValidationResult {
    pub fn from_invalid(invalid_fields: BTreeSet<FieldRef>) -> Self {
        Self {
            ok: invalid_fields.is_empty(),
            invalid_fields,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

/// Whether a field value counts as empty.
///
/// Trims the same set as `String.prototype.trim`: Unicode whitespace and the byte-order mark, but not NEL
/// (U+0085).
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_trimmed).is_empty()
}

fn is_trimmed(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Mark every blank field and report which ones they were.
///
/// Fields that are filled are left untouched, so a marker set on an earlier attempt survives. Use a
/// [`SubmitGuard`] to clear those.
pub fn validate_fields<F: RequiredField>(fields: &mut [F], config: &Config) -> ValidationResult {
    let mut invalid = BTreeSet::new();

    for (idx, field) in fields.iter_mut().enumerate() {
        if is_blank(&field.value()) {
            field.mark_invalid(&config.invalid_border);
            invalid.insert(FieldRef(idx));
        }
    }

    ValidationResult::from_invalid(invalid)
}

/// The submission guard attached to one form.
///
/// Each submission attempt re-reads the form's fields and checks them all again. Fields may come and go
/// between attempts, so the outline is recognized on the field itself rather than by position.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    attempts: usize,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `fields` for one submission attempt.
    pub fn check<F: RequiredField>(&mut self, fields: &mut [F], config: &Config) -> ValidationResult {
        self.attempts += 1;
        let result = validate_fields(fields, config);

        if config.clear_stale_markers {
            for (idx, field) in fields.iter_mut().enumerate() {
                if !result.invalid_fields.contains(&FieldRef(idx)) && field.is_marked() {
                    field.clear_invalid();
                }
            }
        }

        tracing::debug!(
            attempt = self.attempts,
            fields = fields.len(),
            blank = result.invalid_fields.len(),
            "checked required fields"
        );

        result
    }

    /// Check `fields` and, if any is blank, hand the result to `reporter` exactly once.
    pub fn submit<F: RequiredField>(
        &mut self,
        fields: &mut [F],
        config: &Config,
        reporter: &dyn Reporter,
    ) -> ValidationResult {
        let result = self.check(fields, config);
        if !result.ok {
            reporter.report(&result, &config.alert_message);
        }
        result
    }

    /// How many submission attempts this guard has checked.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

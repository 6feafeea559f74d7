use crate::ValidationResult;

/// Surfaces a blocked submission to the user.
///
/// The guard only decides; a reporter chooses how the user hears about it. The web binding shows a blocking
/// alert, tests record the call.
pub trait Reporter {
    /// Called once for every submission attempt that found a blank field.
    fn report(&self, result: &ValidationResult, message: &str);
}

impl<F: Fn(&ValidationResult, &str)> Reporter for F {
    fn report(&self, result: &ValidationResult, message: &str) {
        self(result, message)
    }
}

/// Writes blocked submissions to the `tracing` log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, result: &ValidationResult, message: &str) {
        let fields: Vec<usize> = result.invalid_fields.iter().map(|f| f.0).collect();
        tracing::warn!(?fields, "submission blocked: {message}");
    }
}

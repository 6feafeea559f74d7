use classboard_core::{Reporter, TracingReporter, ValidationResult};

/// Tells the user about a blocked submission with a blocking `window.alert`.
///
/// The page script stops until the dialog is dismissed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertReporter;

impl Reporter for AlertReporter {
    fn report(&self, result: &ValidationResult, message: &str) {
        TracingReporter.report(result, message);
        gloo_dialogs::alert(message);
    }
}

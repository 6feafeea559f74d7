use std::sync::Once;

/// Send `tracing` events to the browser console.
///
/// Safe to call more than once. If the host page already installed a global subscriber, that one is kept.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if !tracing::dispatcher::has_been_set() {
            tracing_wasm::set_as_global_default();
        }
    });
}

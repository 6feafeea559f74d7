use gloo_events::EventListener;
use web_sys::Document;

/// Whether `document` is still parsing its markup.
pub(crate) fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Run `f` once the document's markup has been parsed.
///
/// Scripts loaded with `defer` or at the end of `<body>` may start after `DOMContentLoaded` has fired, so unless
/// the document is `loading`, `f` runs right away and no listener is returned.
pub(crate) fn on_content_loaded(
    document: &Document,
    loading: bool,
    f: impl FnOnce() + 'static,
) -> Option<EventListener> {
    if loading {
        Some(EventListener::once(document, "DOMContentLoaded", move |_| f()))
    } else {
        f();
        None
    }
}

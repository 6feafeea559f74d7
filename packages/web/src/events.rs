//! Listeners classboard attaches to the page.
//!
//! Every listener is held by a [`gloo_events::EventListener`], so dropping the handle detaches it. Pages keep
//! them for their whole lifetime with `forget`; tests drop them to start clean.

mod form;
mod load;

pub use form::{guard_form, guard_forms, required_fields, FormGuards};
pub(crate) use load::{is_loading, on_content_loaded};

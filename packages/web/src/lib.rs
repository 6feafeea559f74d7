//! Classboard WebSys
//!
//! ## Overview
//! ------------
//! This crate binds the page behaviors from `classboard-core` to a live browser document with web-sys:
//! - every `.deadline` element gets its `data-due` attribute turned into "Due in N days" or a red "Past due";
//! - every `form` refuses to submit while one of its `textarea`s is blank, outlining the blank ones and
//!   showing a single alert.
//!
//! Both run once, after the markup has been parsed. Deadlines are never recomputed; form guards stay attached
//! for as long as the returned [`Page`] lives (or for good, after [`Page::forget`]).
//!
//! ## Entry points
//! ------------
//! Built with the `start` feature, the module runs [`launch`] as soon as it is instantiated. Without it,
//! JavaScript calls `startWithOptions(options)` with an object mirroring [`Config`]; any field may be left out.
//!
//! ```js
//! import init, { startWithOptions } from "./classboard_web.js";
//! await init();
//! startWithOptions({ alert_message: "Answer every question before submitting" });
//! ```

use wasm_bindgen::prelude::*;

pub use classboard_core;
pub use classboard_core::Config;

mod alert;
mod deadlines;
mod dom;
mod error;
mod events;
mod launch;
#[cfg(feature = "logging")]
mod logging;

pub use crate::alert::AlertReporter;
pub use crate::deadlines::annotate_document;
pub use crate::dom::{document, ElementLabel, TextAreaField, INVALID_MARKER_ATTRIBUTE};
pub use crate::error::WebError;
pub use crate::events::{guard_form, guard_forms, required_fields, FormGuards};
pub use crate::launch::{launch, launch_cfg, launch_in, launch_with_reporter, Page};
#[cfg(feature = "logging")]
pub use crate::logging::init_logging;

/// Attach classboard to the page as soon as the wasm module is instantiated.
#[cfg(feature = "start")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    init_logging();
    launch()?.forget();
    Ok(())
}

/// Attach classboard to the page with options from JavaScript. `undefined` and `null` mean the defaults.
#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(options: JsValue) -> Result<(), JsValue> {
    #[cfg(feature = "logging")]
    init_logging();

    let config = if options.is_undefined() || options.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(WebError::from)?
    };

    launch_cfg(config)?.forget();
    Ok(())
}

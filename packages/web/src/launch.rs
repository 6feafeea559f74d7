//! This module contains the `launch` functions, the main entry point for classboard pages

use std::cell::RefCell;
use std::rc::Rc;

use classboard_core::{AnnotationSummary, Clock, Config, Reporter};
use gloo_events::EventListener;
use web_sys::Document;

use crate::events::{guard_forms, is_loading, on_content_loaded, FormGuards};
use crate::{annotate_document, dom, AlertReporter, WebError};

#[derive(Default)]
struct PageState {
    summary: Option<AnnotationSummary>,
    guards: Option<FormGuards>,
    forgotten: bool,
}

/// A page with classboard behaviors attached, or waiting for its markup to finish loading.
///
/// Dropping the page detaches its form guards (and the pending load listener, if the document was still
/// loading). Call [`Page::forget`] to keep them for the life of the page.
pub struct Page {
    state: Rc<RefCell<PageState>>,
    pending: Option<EventListener>,
}

impl Page {
    /// Whether the deadlines have been annotated and the forms guarded.
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().summary.is_some()
    }

    /// What the deadline scan wrote, once it has run.
    pub fn summary(&self) -> Option<AnnotationSummary> {
        self.state.borrow().summary
    }

    /// How many forms are guarded, once mounted.
    pub fn guarded_forms(&self) -> usize {
        self.state.borrow().guards.as_ref().map_or(0, FormGuards::len)
    }

    /// Keep every listener attached until the page unloads.
    pub fn forget(self) {
        let mut state = self.state.borrow_mut();
        state.forgotten = true;
        if let Some(guards) = state.guards.take() {
            guards.forget();
        }
        drop(state);

        if let Some(pending) = self.pending {
            pending.forget();
        }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("mounted", &self.is_mounted())
            .field("summary", &self.summary())
            .field("guarded_forms", &self.guarded_forms())
            .finish()
    }
}

/// Launch classboard on the current page with the default markup contract.
pub fn launch() -> Result<Page, WebError> {
    launch_cfg(Config::default())
}

/// Launch classboard on the current page with the given config.
///
/// Blocked submissions are announced with a blocking alert.
pub fn launch_cfg(config: Config) -> Result<Page, WebError> {
    launch_with_reporter(config, Rc::new(AlertReporter))
}

/// Launch classboard on the current page, surfacing blocked submissions through `reporter`.
pub fn launch_with_reporter(config: Config, reporter: Rc<dyn Reporter>) -> Result<Page, WebError> {
    let document = dom::document()?;
    Ok(launch_in(&document, config, reporter))
}

/// Launch classboard on `document`.
///
/// If the document is still loading, the work is deferred to `DOMContentLoaded`; otherwise it runs before this
/// returns. Failures in the deferred case are logged.
pub fn launch_in(document: &Document, config: Config, reporter: Rc<dyn Reporter>) -> Page {
    attach_when(document, is_loading(document), config, reporter)
}

fn attach_when(
    document: &Document,
    loading: bool,
    config: Config,
    reporter: Rc<dyn Reporter>,
) -> Page {
    let state = Rc::new(RefCell::new(PageState::default()));
    let config = Rc::new(config);

    let attach = {
        let state = state.clone();
        let document = document.clone();
        move || match mount(&document, config, reporter) {
            Ok((summary, guards)) => {
                let mut state = state.borrow_mut();
                state.summary = Some(summary);
                if state.forgotten {
                    guards.forget();
                } else {
                    state.guards = Some(guards);
                }
            }
            Err(err) => tracing::error!("failed to attach classboard to the page: {err}"),
        }
    };

    let pending = on_content_loaded(document, loading, attach);

    Page { state, pending }
}

fn mount(
    document: &Document,
    config: Rc<Config>,
    reporter: Rc<dyn Reporter>,
) -> Result<(AnnotationSummary, FormGuards), WebError> {
    let clock = Clock::local();
    let summary = annotate_document(document, &clock, &config)?;
    let guards = guard_forms(document, config, reporter)?;

    tracing::info!(
        deadlines = summary.total(),
        past_due = summary.past_due,
        forms = guards.len(),
        "classboard attached"
    );

    Ok((summary, guards))
}

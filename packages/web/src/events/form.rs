use std::cell::RefCell;
use std::rc::Rc;

use classboard_core::{Config, Reporter, SubmitGuard, ValidationResult};
use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, HtmlFormElement, HtmlTextAreaElement};

use crate::dom::{select_all, select_within, TextAreaField};
use crate::WebError;

/// The submit listeners attached to a page's forms. Dropping this detaches them all.
#[derive(Default)]
pub struct FormGuards {
    listeners: Vec<EventListener>,
}

impl FormGuards {
    /// How many forms are guarded.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keep the guards attached for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

impl std::fmt::Debug for FormGuards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormGuards")
            .field("forms", &self.listeners.len())
            .finish()
    }
}

/// Attach a submission guard to every form in `document` that matches the configured selector.
///
/// Forms added to the page afterwards are not guarded.
pub fn guard_forms(
    document: &Document,
    config: Rc<Config>,
    reporter: Rc<dyn Reporter>,
) -> Result<FormGuards, WebError> {
    let listeners = select_all::<HtmlFormElement>(document, &config.form_selector)?
        .into_iter()
        .map(|form| guard_form(&form, config.clone(), reporter.clone()))
        .collect();

    Ok(FormGuards { listeners })
}

/// Attach a submission guard to one form.
///
/// On every `submit` the form's required fields are read again and checked. If any is blank the default
/// action is cancelled before `reporter` is told, so the form is never sent while the user reads the message.
pub fn guard_form(
    form: &HtmlFormElement,
    config: Rc<Config>,
    reporter: Rc<dyn Reporter>,
) -> EventListener {
    let guard = RefCell::new(SubmitGuard::new());
    let target = form.clone();

    EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let mut fields = match required_fields(&target, &config) {
                Ok(fields) => fields,
                Err(err) => {
                    tracing::error!("cannot check form before submit: {err}");
                    return;
                }
            };

            let block = |result: &ValidationResult, message: &str| {
                event.prevent_default();
                reporter.report(result, message);
            };
            guard.borrow_mut().submit(&mut fields, &config, &block);
        },
    )
}

/// The required fields inside `form`, in document order. Matches that aren't `textarea`s are skipped.
pub fn required_fields(
    form: &HtmlFormElement,
    config: &Config,
) -> Result<Vec<TextAreaField>, WebError> {
    Ok(
        select_within::<HtmlTextAreaElement>(form, &config.field_selector)?
            .into_iter()
            .map(TextAreaField)
            .collect(),
    )
}

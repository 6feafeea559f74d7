use chrono::TimeZone;
use classboard_core::{annotate, AnnotationSummary, Clock, Config, Deadline};
use web_sys::{Document, Element};

use crate::dom::{select_all, ElementLabel};
use crate::WebError;

/// Write a countdown into every deadline element of `document`.
///
/// Elements are read and written once; nothing is scheduled to tick. Matches of any kind are written to,
/// including SVG `<text>`.
pub fn annotate_document<Tz: TimeZone>(
    document: &Document,
    clock: &Clock<Tz>,
    config: &Config,
) -> Result<AnnotationSummary, WebError> {
    let mut deadlines: Vec<Deadline<ElementLabel>> =
        select_all::<Element>(document, &config.deadline_selector)?
            .into_iter()
            .map(|el| Deadline::new(el.get_attribute(&config.due_attribute), ElementLabel(el)))
            .collect();

    Ok(annotate(&mut deadlines, clock, config))
}

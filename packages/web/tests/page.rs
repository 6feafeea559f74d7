use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeDelta, TimeZone, Utc};
use classboard_web::classboard_core::{Clock, Reporter, ValidationResult};
use classboard_web::{
    annotate_document, document, guard_forms, launch_in, start_with_options, Config,
    INVALID_MARKER_ATTRIBUTE,
};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlTextAreaElement, SvgElement,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct Alerts(RefCell<Vec<String>>);

impl Reporter for Alerts {
    fn report(&self, _result: &ValidationResult, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

impl Alerts {
    fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

fn set_body(html: &str) {
    document().unwrap().body().unwrap().set_inner_html(html);
}

fn by_id<T: JsCast>(id: &str) -> T {
    document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

/// Dispatch a cancelable `submit` on the form. Returns `false` if a listener cancelled it.
fn submit(form_id: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    by_id::<HtmlFormElement>(form_id).dispatch_event(&event).unwrap()
}

fn border(id: &str) -> String {
    by_id::<HtmlTextAreaElement>(id)
        .style()
        .get_property_value("border")
        .unwrap()
}

#[wasm_bindgen_test]
fn deadlines_get_countdowns() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let soon = (now + TimeDelta::days(5) + TimeDelta::hours(2)).to_rfc3339();
    let today = (now + TimeDelta::hours(1)).to_rfc3339();
    set_body(&format!(
        r#"
        <span id="soon" class="deadline" data-due="{soon}"></span>
        <span id="today" class="deadline" data-due="{today}"></span>
        <span id="late" class="deadline" data-due="2024-04-01T09:00:00Z"></span>
        <span id="garbage" class="deadline" data-due="whenever"></span>
        <span id="plain" data-due="2024-04-01T09:00:00Z">untouched</span>
        "#
    ));

    let summary = annotate_document(
        &document().unwrap(),
        &Clock::new(now, Utc),
        &Config::default(),
    )
    .unwrap();

    let text = |id: &str| by_id::<HtmlElement>(id).text_content().unwrap();
    let color = |id: &str| {
        by_id::<HtmlElement>(id)
            .style()
            .get_property_value("color")
            .unwrap()
    };

    assert_eq!(text("soon"), "Due in 5 days");
    assert_eq!(text("today"), "Due in 0 days");
    assert_eq!(text("late"), "Past due");
    assert_eq!(color("late"), "red");
    assert_eq!(color("soon"), "");
    assert_eq!(text("garbage"), "Due date unknown");
    assert_eq!(color("garbage"), "");
    assert_eq!(text("plain"), "untouched");
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.past_due, 1);
}

#[wasm_bindgen_test]
fn blank_textarea_blocks_submission() {
    set_body(
        r#"
        <form id="essay">
            <textarea id="intro">Once upon a time</textarea>
            <textarea id="body">   </textarea>
        </form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let _guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();

    assert!(!submit("essay"));
    assert_eq!(alerts.count(), 1);
    assert_eq!(alerts.0.borrow()[0], "Please fill all required fields");
    assert!(!border("body").is_empty());
    assert_eq!(border("intro"), "");
}

#[wasm_bindgen_test]
fn filled_form_submits() {
    set_body(
        r#"
        <form id="feedback">
            <textarea id="comment">Great work</textarea>
            <input name="title" value="">
        </form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let _guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();

    assert!(submit("feedback"));
    assert_eq!(alerts.count(), 0);
    assert_eq!(border("comment"), "");
}

#[wasm_bindgen_test]
fn forms_do_not_affect_each_other() {
    set_body(
        r#"
        <form id="first"><textarea id="first-answer"></textarea></form>
        <form id="second"><textarea id="second-answer"></textarea></form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();
    assert_eq!(guards.len(), 2);

    assert!(!submit("first"));
    assert!(!border("first-answer").is_empty());
    assert_eq!(border("second-answer"), "");
    assert_eq!(alerts.count(), 1);
}

#[wasm_bindgen_test]
fn retry_clears_filled_fields() {
    set_body(
        r#"
        <form id="quiz">
            <textarea id="q1"></textarea>
            <textarea id="q2"></textarea>
        </form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let _guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();

    assert!(!submit("quiz"));
    by_id::<HtmlTextAreaElement>("q1").set_value("42");
    assert!(!submit("quiz"));
    assert_eq!(border("q1"), "");
    assert!(!border("q2").is_empty());

    by_id::<HtmlTextAreaElement>("q2").set_value("blue");
    assert!(submit("quiz"));
    assert_eq!(border("q2"), "");
    assert_eq!(alerts.count(), 2);
}

#[wasm_bindgen_test]
fn dropped_guards_detach() {
    set_body(r#"<form id="empty"><textarea></textarea></form>"#);
    let alerts = Rc::new(Alerts::default());
    let guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();
    drop(guards);

    assert!(submit("empty"));
    assert_eq!(alerts.count(), 0);
}

#[wasm_bindgen_test]
fn launch_on_a_parsed_document_mounts_immediately() {
    set_body(
        r#"
        <span class="due-date" data-deadline="2001-01-01T00:00:00Z"></span>
        <form id="late-work"><textarea></textarea></form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let config = Config::new()
        .with_deadline_selector(".due-date")
        .with_due_attribute("data-deadline");

    let page = launch_in(&document().unwrap(), config, alerts.clone());

    assert!(page.is_mounted());
    assert_eq!(page.guarded_forms(), 1);
    assert_eq!(page.summary().map(|s| s.past_due), Some(1));

    assert!(!submit("late-work"));
    drop(page);
    assert!(submit("late-work"));
    assert_eq!(alerts.count(), 1);
}

#[wasm_bindgen_test]
fn svg_deadlines_are_annotated() {
    set_body(
        r#"
        <svg width="200" height="40">
            <text id="svg-late" class="deadline" data-due="2001-01-01T00:00:00Z" x="0" y="20"></text>
        </svg>
        "#,
    );

    let summary = annotate_document(
        &document().unwrap(),
        &Clock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(), Utc),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(summary.past_due, 1);
    assert_eq!(
        by_id::<Element>("svg-late").text_content().unwrap(),
        "Past due"
    );
    assert_eq!(
        by_id::<SvgElement>("svg-late")
            .style()
            .get_property_value("color")
            .unwrap(),
        "red"
    );
}

#[wasm_bindgen_test]
fn removed_field_leaves_author_border_alone() {
    set_body(
        r#"
        <form id="survey">
            <textarea id="gone"></textarea>
            <textarea id="styled" style="border: 2px dashed gray">Already answered</textarea>
        </form>
        "#,
    );
    let alerts = Rc::new(Alerts::default());
    let _guards = guard_forms(
        &document().unwrap(),
        Rc::new(Config::default()),
        alerts.clone(),
    )
    .unwrap();

    assert!(!submit("survey"));
    assert!(by_id::<Element>("gone").has_attribute(INVALID_MARKER_ATTRIBUTE));
    assert!(!by_id::<Element>("styled").has_attribute(INVALID_MARKER_ATTRIBUTE));

    by_id::<Element>("gone").remove();
    assert!(submit("survey"));
    assert_eq!(border("styled"), "2px dashed gray");
    assert_eq!(alerts.count(), 1);
}

#[wasm_bindgen_test]
fn forgotten_page_keeps_guarding() {
    set_body(r#"<form id="kept"><textarea></textarea></form>"#);
    let alerts = Rc::new(Alerts::default());

    launch_in(&document().unwrap(), Config::default(), alerts.clone()).forget();

    assert!(!submit("kept"));
    assert!(!submit("kept"));
    assert_eq!(alerts.count(), 2);
}

#[wasm_bindgen_test]
fn start_with_null_options_uses_defaults() {
    set_body(r#"<span id="null-opts" class="deadline" data-due="2001-01-01T00:00:00Z"></span>"#);

    start_with_options(JsValue::NULL).unwrap();

    assert_eq!(
        by_id::<HtmlElement>("null-opts").text_content().unwrap(),
        "Past due"
    );
}

#[derive(Serialize)]
struct PartialOptions {
    deadline_selector: &'static str,
    unknown_due_label: &'static str,
}

#[wasm_bindgen_test]
fn start_with_partial_options() {
    set_body(
        r#"
        <span id="custom" class="due"></span>
        <span id="default-class" class="deadline"></span>
        "#,
    );
    let options = serde_wasm_bindgen::to_value(&PartialOptions {
        deadline_selector: ".due",
        unknown_due_label: "No due date set",
    })
    .unwrap();

    start_with_options(options).unwrap();

    let text = |id: &str| by_id::<HtmlElement>(id).text_content().unwrap();
    assert_eq!(text("custom"), "No due date set");
    assert_eq!(text("default-class"), "");
}

#[wasm_bindgen_test]
fn start_rejects_malformed_options() {
    set_body("");
    assert!(start_with_options(JsValue::from_str("quiet please")).is_err());
}

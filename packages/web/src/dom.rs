//! Thin adapters between web-sys elements and the page logic in `classboard-core`.

use classboard_core::{DeadlineLabel, RequiredField};
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlTextAreaElement, NodeList, SvgElement,
};

use crate::WebError;

/// The page's document, or an error if we're not running in a browser window.
pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)
}

/// All elements in `document` matching `selector` that are of type `T`, in document order.
pub(crate) fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, WebError> {
    document
        .query_selector_all(selector)
        .map(cast_all)
        .map_err(|err| selector_error(selector, err))
}

/// Like [`select_all`], scoped to the descendants of `root`.
pub(crate) fn select_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, WebError> {
    root.query_selector_all(selector)
        .map(cast_all)
        .map_err(|err| selector_error(selector, err))
}

fn cast_all<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn selector_error(selector: &str, err: wasm_bindgen::JsValue) -> WebError {
    WebError::Selector {
        selector: selector.to_string(),
        message: format!("{err:?}"),
    }
}

/// Attribute set on a field while it carries the invalid outline, so the outline can be told apart from
/// borders the page author styled.
pub const INVALID_MARKER_ATTRIBUTE: &str = "data-classboard-invalid";

/// The inline style of `element`, for HTML and SVG elements alike.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) -> Result<(), WebError> {
    style
        .set_property(property, value)
        .map_err(|err| style_error(property, err))
}

fn remove_style(style: &CssStyleDeclaration, property: &str) -> Result<(), WebError> {
    style
        .remove_property(property)
        .map(drop)
        .map_err(|err| style_error(property, err))
}

fn style_error(property: &str, err: wasm_bindgen::JsValue) -> WebError {
    WebError::Style {
        property: property.to_string(),
        message: format!("{err:?}"),
    }
}

/// A deadline element whose text and color we write. Any element works; HTML and SVG ones also get the color.
#[derive(Debug, Clone)]
pub struct ElementLabel(pub Element);

impl DeadlineLabel for ElementLabel {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_color(&mut self, color: &str) {
        let Some(style) = inline_style(&self.0) else {
            tracing::warn!("deadline <{}> has no inline style, color not set", self.0.tag_name());
            return;
        };
        if let Err(err) = set_style(&style, "color", color) {
            tracing::error!("failed to set deadline color {color:?}: {err}");
        }
    }
}

/// A `textarea` inside a guarded form.
#[derive(Debug, Clone)]
pub struct TextAreaField(pub HtmlTextAreaElement);

impl RequiredField for TextAreaField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn mark_invalid(&mut self, border: &str) {
        if let Err(err) = set_style(&self.0.style(), "border", border) {
            tracing::error!("failed to outline required field: {err}");
            return;
        }
        if let Err(err) = self.0.set_attribute(INVALID_MARKER_ATTRIBUTE, "") {
            tracing::error!("failed to tag outlined field: {err:?}");
        }
    }

    fn clear_invalid(&mut self) {
        if let Err(err) = remove_style(&self.0.style(), "border") {
            tracing::error!("failed to clear required field outline: {err}");
        }
        if let Err(err) = self.0.remove_attribute(INVALID_MARKER_ATTRIBUTE) {
            tracing::error!("failed to untag required field: {err:?}");
        }
    }

    fn is_marked(&self) -> bool {
        self.0.has_attribute(INVALID_MARKER_ATTRIBUTE)
    }
}

// src/core/html.rs
//
// Thin helpers over `scraper` for walking one results table.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Parse a selector that is known at compile time.
/// Panics only on a typo in one of our own constants.
pub fn css(sel: &str) -> Selector {
    Selector::parse(sel).unwrap_or_else(|e| panic!("invalid selector {sel:?}: {e}"))
}

/// First match of `sel` anywhere in the document.
pub fn find<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// First match of `sel` below `scope`.
pub fn find_in<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Visible text of an element: nested tags dropped, whitespace collapsed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Text of every `sel` match below `scope`, in document order.
pub fn texts(scope: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    scope.select(sel).map(cell_text).collect()
}

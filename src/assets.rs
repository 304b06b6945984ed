//! Static files shared by every song page.

use crate::html::ROW_PADDING;
use crate::pitch::IDXNOTE;

pub const CSS_FILE: &str = "chord.css";
pub const JS_FILE: &str = "chord.js";

const CSS: &str = include_str!("assets/chord.css");
const JS_TEMPLATE: &str = include_str!("assets/chord.js");

/// Stylesheet for song pages.
pub fn stylesheet() -> &'static str {
    CSS
}

/// Client-side transposition script.
///
/// The note table and row padding are filled in from the same constants the
/// converter uses, so chords rendered in the browser match the ones rendered here.
pub fn script() -> String {
    let notes = IDXNOTE
        .iter()
        .map(|note| format!("\"{}\"", note))
        .collect::<Vec<_>>()
        .join(", ");
    JS_TEMPLATE
        .replace("/*NOTES*/", &format!("[{}]", notes))
        .replace("/*PADDING*/", &ROW_PADDING.to_string())
}

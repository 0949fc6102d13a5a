//! The view of a page the comparator works against.
//!
//! A field container groups the current value, the historical value and a
//! place to put the rendered diff. The comparator only sees these traits and
//! never the page itself.

use std::borrow::Cow;

use crate::sanitize;

/// A piece of page content that can be compared
pub trait TextRegion {
    /// The text content of the region
    fn text(&self) -> Cow<'_, str>;

    /// Whether the region is flagged as "do not compare"
    fn dont_compare(&self) -> bool {
        false
    }
}

impl TextRegion for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextRegion for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Somewhere a rendered diff can be shown
pub trait DiffSink {
    /// Replace the sink's content with rendered diff markup
    fn set_diff_markup(&mut self, markup: String);

    fn set_diff_visible(&mut self, visible: bool);
}

/// One editable field showing its current value, its historical value and a diff
pub trait FieldContainer: DiffSink {
    type Region: TextRegion + ?Sized;

    /// The region holding the current value
    fn current(&self) -> Option<&Self::Region>;

    /// The region holding the historical value
    fn history(&self) -> Option<&Self::Region>;

    fn set_history_visible(&mut self, visible: bool);
}

/// Trimmed text of a region, or an empty string if the region is missing
/// or flagged as "do not compare"
pub fn extract_comparable_text<R: TextRegion + ?Sized>(region: Option<&R>) -> String {
    match region {
        Some(region) if !region.dont_compare() => region.text().trim().to_string(),
        _ => String::new(),
    }
}

/// Text of a current value region with any embedded markup reduced to plain text
pub fn extract_current_text<R: TextRegion + ?Sized>(region: Option<&R>) -> String {
    region
        .map(|region| sanitize::plain_text(&region.text()).trim().to_string())
        .unwrap_or_default()
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_span::{DiffOp, DiffSpan};

/// An ordered sequence of spans that reconstructs both compared texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// The spans in this diff, in document order
    spans: Vec<DiffSpan>,
}

impl DiffResult {
    /// Wrap already computed spans
    pub fn new(spans: Vec<DiffSpan>) -> Self {
        Self { spans }
    }

    /// Create a new empty diff
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the spans
    pub fn spans(&self) -> &[DiffSpan] {
        &self.spans
    }

    /// Get the number of spans
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Get a span by index
    pub fn span(&self, index: usize) -> Option<&DiffSpan> {
        self.spans.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.spans.iter().any(DiffSpan::is_change)
    }

    /// Rebuild the old text from the equal and deleted spans
    pub fn old_text(&self) -> String {
        self.collect_text(DiffOp::in_old)
    }

    /// Rebuild the new text from the equal and inserted spans
    pub fn new_text(&self) -> String {
        self.collect_text(DiffOp::in_new)
    }

    /// Get the number of inserted characters
    pub fn inserted_chars(&self) -> usize {
        self.count_chars(DiffOp::Insert)
    }

    /// Get the number of deleted characters
    pub fn deleted_chars(&self) -> usize {
        self.count_chars(DiffOp::Delete)
    }

    /// Get the number of unchanged characters
    pub fn unchanged_chars(&self) -> usize {
        self.count_chars(DiffOp::Equal)
    }

    fn collect_text(&self, keep: impl Fn(DiffOp) -> bool) -> String {
        self.spans
            .iter()
            .filter(|span| keep(span.op))
            .map(|span| span.text.as_str())
            .collect()
    }

    fn count_chars(&self, op: DiffOp) -> usize {
        self.spans
            .iter()
            .filter(|span| span.op == op)
            .map(DiffSpan::char_len)
            .sum()
    }
}

impl From<Vec<DiffSpan>> for DiffResult {
    fn from(spans: Vec<DiffSpan>) -> Self {
        Self::new(spans)
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSpan;
    type IntoIter = std::slice::Iter<'a, DiffSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

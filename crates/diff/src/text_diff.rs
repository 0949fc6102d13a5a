use std::time::Duration;

use derive_more::Display;
use log::debug;
use similar::{Algorithm, TextDiff as SimilarTextDiff};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cleanup::{
    cleanup_efficiency, cleanup_efficiency_at, cleanup_merge_at, DEFAULT_EDIT_COST,
};
use crate::diff_result::DiffResult;
use crate::diff_span::{DiffOp, DiffSpan};
use crate::render;

/// Size of the tokens two texts are compared by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffGranularity {
    /// Compare character by character
    #[default]
    #[display(fmt = "char")]
    Char,

    /// Compare word by word (whitespace runs are their own tokens)
    #[display(fmt = "word")]
    Word,

    /// Compare line by line
    #[display(fmt = "line")]
    Line,
}

/// Diff algorithm run by [`SimilarEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffAlgorithm {
    #[default]
    #[display(fmt = "myers")]
    Myers,

    #[display(fmt = "patience")]
    Patience,

    /// Plain longest common subsequence, quadratic in the input size
    #[display(fmt = "lcs")]
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// A text diff capability: raw comparison plus a cleanup pass.
///
/// The comparator only ever talks to this trait, so callers can swap in a
/// different algorithm or a deterministic stub.
pub trait DiffEngine {
    /// Compare two texts, old first
    fn diff_between(&self, old_text: &str, new_text: &str) -> Vec<DiffSpan>;

    /// Consolidate edits separated by equalities cheaper than `edit_cost`
    fn cleanup(&self, spans: &mut Vec<DiffSpan>, edit_cost: usize) {
        cleanup_efficiency(spans, edit_cost);
    }
}

impl<E: DiffEngine + ?Sized> DiffEngine for &E {
    fn diff_between(&self, old_text: &str, new_text: &str) -> Vec<DiffSpan> {
        (**self).diff_between(old_text, new_text)
    }

    fn cleanup(&self, spans: &mut Vec<DiffSpan>, edit_cost: usize) {
        (**self).cleanup(spans, edit_cost)
    }
}

/// Diff engine backed by the `similar` crate
#[derive(Debug, Clone)]
pub struct SimilarEngine {
    algorithm: DiffAlgorithm,
    granularity: DiffGranularity,
    timeout: Option<Duration>,
}

impl Default for SimilarEngine {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            granularity: DiffGranularity::Char,
            timeout: Some(Duration::from_secs(1)),
        }
    }
}

impl SimilarEngine {
    pub fn new(
        algorithm: DiffAlgorithm,
        granularity: DiffGranularity,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            algorithm,
            granularity,
            timeout,
        }
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    pub fn granularity(&self) -> DiffGranularity {
        self.granularity
    }
}

impl DiffEngine for SimilarEngine {
    fn diff_between(&self, old_text: &str, new_text: &str) -> Vec<DiffSpan> {
        let mut config = SimilarTextDiff::configure();
        config.algorithm(self.algorithm.into());
        if let Some(timeout) = self.timeout {
            config.timeout(timeout);
        }

        let diff = match self.granularity {
            DiffGranularity::Char => config.diff_chars(old_text, new_text),
            DiffGranularity::Word => config.diff_words(old_text, new_text),
            DiffGranularity::Line => config.diff_lines(old_text, new_text),
        };

        // Group consecutive tokens with the same tag into one span
        let mut spans: Vec<DiffSpan> = Vec::new();
        for change in diff.iter_all_changes() {
            let op = DiffOp::from(change.tag());
            match spans.last_mut() {
                Some(last) if last.op == op => last.text.push_str(change.value()),
                _ => spans.push(DiffSpan::new(op, change.value())),
            }
        }
        cleanup_merge_at(&mut spans, self.granularity);
        spans
    }

    fn cleanup(&self, spans: &mut Vec<DiffSpan>, edit_cost: usize) {
        cleanup_efficiency_at(spans, edit_cost, self.granularity);
    }
}

/// Builder for a configured diff
#[derive(Debug, Clone)]
pub struct DiffConfig {
    engine: SimilarEngine,
    edit_cost: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            engine: SimilarEngine::default(),
            edit_cost: DEFAULT_EDIT_COST,
        }
    }
}

impl DiffConfig {
    /// Set the diff algorithm
    pub fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.engine.algorithm = algorithm;
        self
    }

    /// Set the token granularity
    pub fn granularity(mut self, granularity: DiffGranularity) -> Self {
        self.engine.granularity = granularity;
        self
    }

    /// Set the cleanup edit cost
    pub fn edit_cost(mut self, edit_cost: usize) -> Self {
        self.edit_cost = edit_cost;
        self
    }

    /// Bound the time spent diffing; a timed out diff is coarser but still valid
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.engine.timeout = timeout;
        self
    }

    pub fn engine(&self) -> &SimilarEngine {
        &self.engine
    }

    pub fn get_edit_cost(&self) -> usize {
        self.edit_cost
    }

    /// Compute a cleaned-up diff between two texts
    pub fn diff(&self, old_text: &str, new_text: &str) -> DiffResult {
        compute_diff(&self.engine, old_text, new_text, self.edit_cost)
    }
}

/// Run `engine` over two texts and apply its cleanup pass
pub fn compute_diff<E: DiffEngine>(
    engine: &E,
    old_text: &str,
    new_text: &str,
    edit_cost: usize,
) -> DiffResult {
    let mut spans = engine.diff_between(old_text, new_text);
    let raw_count = spans.len();
    engine.cleanup(&mut spans, edit_cost);
    debug!(
        "diffed {} -> {} chars: {} spans ({} before cleanup)",
        old_text.chars().count(),
        new_text.chars().count(),
        spans.len(),
        raw_count
    );
    DiffResult::new(spans)
}

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a character diff between two texts with the default edit cost
    pub fn diff(old_text: &str, new_text: &str) -> DiffResult {
        DiffConfig::default().diff(old_text, new_text)
    }

    /// Create a diff at the given granularity
    pub fn diff_with_granularity(
        old_text: &str,
        new_text: &str,
        granularity: DiffGranularity,
    ) -> DiffResult {
        DiffConfig::default()
            .granularity(granularity)
            .diff(old_text, new_text)
    }

    /// Render the diff between two texts as HTML
    pub fn pretty_html(old_text: &str, new_text: &str) -> String {
        render::render_html(&Self::diff(old_text, new_text))
    }

    /// Render the diff between two texts with inline `[-..-]` / `{+..+}` markers
    pub fn inline_diff(old_text: &str, new_text: &str) -> String {
        render::render_plain(&Self::diff(old_text, new_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_characters_into_spans() {
        let spans = SimilarEngine::default().diff_between("abcxyz", "abc123xyz");
        assert_eq!(
            spans,
            vec![
                DiffSpan::equal("abc"),
                DiffSpan::insert("123"),
                DiffSpan::equal("xyz"),
            ]
        );
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = DiffConfig::default()
            .algorithm(DiffAlgorithm::Lcs)
            .granularity(DiffGranularity::Line)
            .edit_cost(4)
            .timeout(None);
        assert_eq!(config.engine().algorithm(), DiffAlgorithm::Lcs);
        assert_eq!(config.engine().granularity(), DiffGranularity::Line);
        assert_eq!(config.get_edit_cost(), 4);
    }

    #[test]
    fn granularity_display() {
        assert_eq!(DiffGranularity::Char.to_string(), "char");
        assert_eq!(DiffGranularity::Word.to_string(), "word");
        assert_eq!(DiffGranularity::Line.to_string(), "line");
        assert_eq!(DiffAlgorithm::Patience.to_string(), "patience");
    }
}

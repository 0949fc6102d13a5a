use field_diff::{compute_diff, render_html, DiffEngine, DiffResult, SimilarEngine, DEFAULT_EDIT_COST};
use log::debug;

use crate::config::ComparatorConfig;
use crate::region::{extract_comparable_text, extract_current_text, DiffSink, FieldContainer};

/// Compares historical and current field values and renders the result
#[derive(Debug, Clone)]
pub struct Comparator<E = SimilarEngine> {
    engine: E,
    edit_cost: usize,
}

impl Default for Comparator<SimilarEngine> {
    fn default() -> Self {
        Self::new(SimilarEngine::default(), DEFAULT_EDIT_COST)
    }
}

impl Comparator<SimilarEngine> {
    /// Build a comparator using the `similar` engine as configured
    pub fn from_config(config: &ComparatorConfig) -> Self {
        let engine = SimilarEngine::new(config.algorithm, config.granularity, config.timeout());
        Self::new(engine, config.edit_cost)
    }
}

impl<E: DiffEngine> Comparator<E> {
    pub fn new(engine: E, edit_cost: usize) -> Self {
        Self { engine, edit_cost }
    }

    pub fn edit_cost(&self) -> usize {
        self.edit_cost
    }

    /// Diff `old_text` (historical) against `new_text` (current)
    pub fn compute_diff(&self, old_text: &str, new_text: &str) -> DiffResult {
        compute_diff(&self.engine, old_text, new_text, self.edit_cost)
    }

    /// Render a diff as escaped HTML
    pub fn render_diff(&self, diff: &DiffResult) -> String {
        render_html(diff)
    }

    /// Diff and render in one go
    pub fn compare(&self, history_text: &str, current_text: &str) -> String {
        self.render_diff(&self.compute_diff(history_text, current_text))
    }

    /// Replace a field's historical value with the diff against its current value
    pub fn show_diff<C: FieldContainer + ?Sized>(&self, container: &mut C) {
        let current_text = extract_current_text(container.current());
        let history_text = extract_comparable_text(container.history());
        debug!(
            "Comparing field: {} historical chars, {} current chars",
            history_text.chars().count(),
            current_text.chars().count()
        );

        let markup = self.compare(&history_text, &current_text);
        container.set_diff_markup(markup);
        container.set_history_visible(false);
        container.set_diff_visible(true);
    }

    /// Render the diff between two plain strings into `sink`
    pub fn show_diff_course_details<S: DiffSink + ?Sized>(
        &self,
        current_text: &str,
        history_text: &str,
        sink: &mut S,
    ) {
        sink.set_diff_markup(self.compare(history_text, current_text));
        sink.set_diff_visible(true);
    }
}

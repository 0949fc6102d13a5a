// Text diff library for field change comparison
// This crate computes character-level diffs, tidies them up and renders them

mod cleanup;
mod diff_result;
mod diff_span;
mod render;
mod text_diff;

pub use cleanup::{
    cleanup_efficiency, cleanup_efficiency_at, cleanup_merge, cleanup_merge_at, DEFAULT_EDIT_COST,
};
pub use diff_result::DiffResult;
pub use diff_span::{DiffOp, DiffSpan};
pub use render::{escape_html, render_html, render_plain};
pub use text_diff::{
    compute_diff, DiffAlgorithm, DiffConfig, DiffEngine, DiffGranularity, SimilarEngine, TextDiff,
};

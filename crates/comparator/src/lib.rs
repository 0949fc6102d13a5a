// Field change comparison for publisher pages
// Shows, for every field on a page, what changed between its historical and current value

mod comparator;
mod config;
mod page;
mod region;
mod sanitize;
mod toggle;

pub use comparator::Comparator;
pub use config::{ComparatorConfig, Labels, SelectorConfig};
pub use page::{DiffRegion, FieldNode, Page, PageSelectors, Region};
pub use region::{extract_comparable_text, extract_current_text, DiffSink, FieldContainer, TextRegion};
pub use sanitize::plain_text;
pub use toggle::{toggle_all_field_diffs, PageController, ToggleState};

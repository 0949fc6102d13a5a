//! An in-memory model of a publisher page built from its HTML.

use std::borrow::Cow;

use anyhow::{anyhow, Result};
use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};

use crate::config::SelectorConfig;
use crate::region::{DiffSink, FieldContainer, TextRegion};

/// Compiled selectors for locating fields in a page
#[derive(Debug, Clone)]
pub struct PageSelectors {
    container: Selector,
    current: Selector,
    history: Selector,
    diff: Selector,
    dont_compare: Selector,
}

impl PageSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&config.container)?,
            current: parse_selector(&config.current)?,
            history: parse_selector(&config.history)?,
            diff: parse_selector(&config.diff)?,
            dont_compare: parse_selector(&config.dont_compare)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector {:?}: {}", selector, e))
}

/// A text region of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    text: String,
    dont_compare: bool,
    visible: bool,
}

impl Region {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dont_compare: false,
            visible: true,
        }
    }

    /// Flag the region as "do not compare"
    pub fn excluded(mut self) -> Self {
        self.dont_compare = true;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TextRegion for Region {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn dont_compare(&self) -> bool {
        self.dont_compare
    }
}

/// The output region of a field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffRegion {
    markup: String,
    visible: bool,
}

impl DiffRegion {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// One field container on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    current: Option<Region>,
    history: Option<Region>,
    diff: DiffRegion,
}

impl FieldNode {
    pub fn new(current: Option<Region>, history: Option<Region>) -> Self {
        Self {
            current,
            history,
            diff: DiffRegion::default(),
        }
    }

    pub fn history_region(&self) -> Option<&Region> {
        self.history.as_ref()
    }

    pub fn diff_region(&self) -> &DiffRegion {
        &self.diff
    }

    /// Whether the historical text is shown; a field without one never shows it
    pub fn history_visible(&self) -> bool {
        self.history.as_ref().is_some_and(Region::is_visible)
    }

    pub fn diff_visible(&self) -> bool {
        self.diff.visible
    }

    fn from_element(element: ElementRef<'_>, selectors: &PageSelectors) -> Self {
        let current = element
            .select(&selectors.current)
            .next()
            .map(|el| Region::new(el.text().collect::<String>()));
        let history = element.select(&selectors.history).next().map(|el| {
            let region = Region::new(el.text().collect::<String>());
            if el.select(&selectors.dont_compare).next().is_some() {
                region.excluded()
            } else {
                region
            }
        });
        if current.is_none() || history.is_none() {
            debug!("Field container is missing a value region, comparing against empty text");
        }

        let mut field = Self::new(current, history);
        if let Some(diff) = element.select(&selectors.diff).next() {
            field.diff.markup = diff.inner_html();
        }
        field
    }
}

impl DiffSink for FieldNode {
    fn set_diff_markup(&mut self, markup: String) {
        self.diff.markup = markup;
    }

    fn set_diff_visible(&mut self, visible: bool) {
        self.diff.visible = visible;
    }
}

impl FieldContainer for FieldNode {
    type Region = Region;

    fn current(&self) -> Option<&Region> {
        self.current.as_ref()
    }

    fn history(&self) -> Option<&Region> {
        self.history.as_ref()
    }

    fn set_history_visible(&mut self, visible: bool) {
        if let Some(history) = self.history.as_mut() {
            history.visible = visible;
        }
    }
}

/// All field containers found on a page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    fields: Vec<FieldNode>,
}

impl Page {
    /// Build the page model from HTML
    pub fn parse(html: &str, selectors: &PageSelectors) -> Self {
        let document = Html::parse_document(html);
        let fields: Vec<FieldNode> = document
            .select(&selectors.container)
            .map(|element| FieldNode::from_element(element, selectors))
            .collect();
        trace!("Parsed page with {} field containers", fields.len());
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldNode] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FieldNode] {
        &mut self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldNode> {
        self.fields.get(index)
    }
}

//! The "Show changes" / "Hide changes" toggle.

use derive_more::Display;
use field_diff::{DiffEngine, SimilarEngine};
use log::info;

use crate::comparator::Comparator;
use crate::config::{ComparatorConfig, Labels};
use crate::region::FieldContainer;

/// What every field on the page is currently displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum ToggleState {
    /// Historical text visible, diffs hidden
    #[default]
    #[display(fmt = "showing raw")]
    ShowingRaw,

    /// Diffs visible, historical text hidden
    #[display(fmt = "showing diff")]
    ShowingDiff,
}

impl ToggleState {
    /// The state a click moves to
    pub fn toggled(self) -> Self {
        match self {
            ToggleState::ShowingRaw => ToggleState::ShowingDiff,
            ToggleState::ShowingDiff => ToggleState::ShowingRaw,
        }
    }

    /// The button label for this state
    pub fn label(self, labels: &Labels) -> &str {
        match self {
            ToggleState::ShowingRaw => &labels.show,
            ToggleState::ShowingDiff => &labels.hide,
        }
    }
}

/// Flip every container between raw historical text and rendered diffs.
///
/// Diffs are recomputed each time they are shown; going back to the raw text
/// only changes visibility.
pub fn toggle_all_field_diffs<E, C>(
    comparator: &Comparator<E>,
    containers: &mut [C],
    showing: ToggleState,
) -> ToggleState
where
    E: DiffEngine,
    C: FieldContainer,
{
    let next = showing.toggled();
    info!(
        "Toggling {} fields from {} to {}",
        containers.len(),
        showing,
        next
    );

    match next {
        ToggleState::ShowingDiff => {
            for container in containers.iter_mut() {
                comparator.show_diff(container);
            }
        }
        ToggleState::ShowingRaw => {
            for container in containers.iter_mut() {
                container.set_history_visible(true);
                container.set_diff_visible(false);
            }
        }
    }
    next
}

/// Owns the toggle state for one page and handles clicks on its button
#[derive(Debug, Clone)]
pub struct PageController<E = SimilarEngine> {
    comparator: Comparator<E>,
    labels: Labels,
    state: ToggleState,
}

impl PageController<SimilarEngine> {
    pub fn from_config(config: &ComparatorConfig) -> Self {
        Self::new(Comparator::from_config(config), config.labels.clone())
    }
}

impl<E: DiffEngine> PageController<E> {
    pub fn new(comparator: Comparator<E>, labels: Labels) -> Self {
        Self {
            comparator,
            labels,
            state: ToggleState::default(),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn comparator(&self) -> &Comparator<E> {
        &self.comparator
    }

    /// Current label of the toggle button
    pub fn button_label(&self) -> &str {
        self.state.label(&self.labels)
    }

    /// Handle a click on the toggle button, returning the new button label
    pub fn on_toggle_clicked<C: FieldContainer>(&mut self, containers: &mut [C]) -> &str {
        self.state = toggle_all_field_diffs(&self.comparator, containers, self.state);
        self.button_label()
    }
}

use log::debug;

use crate::Recipe;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The recipe list
    #[default]
    List,
    /// One recipe, showing the step at `page`
    Detail { recipe: usize, page: usize },
}

/// User input that moves between screens or pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the recipe at this row of the list
    Select(usize),
    NextPage,
    PreviousPage,
    /// Jump to a zero-based page
    GoToPage(usize),
    /// Return to the list
    Back,
}

impl Screen {
    /// The screen reached by applying `action`.
    ///
    /// Pages stay within the recipe's steps; there is no wraparound. Actions
    /// that make no sense on the current screen leave it unchanged.
    pub fn apply(self, action: Action, recipes: &[Recipe]) -> Screen {
        match (self, action) {
            (Screen::List, Action::Select(index)) if index < recipes.len() => Screen::Detail {
                recipe: index,
                page: 0,
            },
            (Screen::Detail { .. }, Action::Back) => Screen::List,
            (Screen::Detail { recipe, page }, Action::NextPage) => Screen::Detail {
                recipe,
                page: clamp_page(page.saturating_add(1), step_count(recipes, recipe)),
            },
            (Screen::Detail { recipe, page }, Action::PreviousPage) => Screen::Detail {
                recipe,
                page: page.saturating_sub(1),
            },
            (Screen::Detail { recipe, .. }, Action::GoToPage(page)) => Screen::Detail {
                recipe,
                page: clamp_page(page, step_count(recipes, recipe)),
            },
            (screen, action) => {
                debug!("Ignoring {:?} on {:?}", action, screen);
                screen
            }
        }
    }
}

fn step_count(recipes: &[Recipe], recipe: usize) -> usize {
    recipes.get(recipe).map_or(0, |r| r.steps.len())
}

// A recipe without steps still has page 0.
fn clamp_page(page: usize, steps: usize) -> usize {
    page.min(steps.saturating_sub(1))
}

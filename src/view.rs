//! Pure render functions from recipe data and navigation state to views.
//!
//! Every view is a plain value. The terminal shell prints them through their
//! `Display` impls; other shells can read the fields directly.

use std::fmt;

use log::debug;

use crate::{AppConfig, AssetBundle, ImageAsset, Recipe, Screen, Step};

const INDENT: &str = "    ";

/// A circular-cropped image. `asset` is `None` when the name did not resolve,
/// in which case nothing is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub asset: Option<ImageAsset>,
    pub size: u32,
}

/// One row of the recipe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub image: ImageView,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: String,
    pub rows: Vec<ListRow>,
}

/// A single step page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub header: String,
    pub text: String,
    /// Ingredient names, empty when the section is hidden
    pub ingredients: Vec<String>,
}

/// Dots under the pages, one per step. Always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub current: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Navigation bar title
    pub title: String,
    pub image: ImageView,
    pub name: String,
    /// One page per step, in the recipe's order
    pub pages: Vec<StepView>,
    pub current: usize,
}

/// Whatever the current screen renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List(ListView),
    Detail(DetailView),
}

pub fn render_step(step: &Step) -> StepView {
    StepView {
        header: format!("Step {}", step.number),
        text: step.step.clone(),
        ingredients: step.ingredients().iter().map(|i| i.name.clone()).collect(),
    }
}

pub fn render_list(recipes: &[Recipe], bundle: &AssetBundle, config: &AppConfig) -> ListView {
    ListView {
        title: config.title.clone(),
        rows: recipes
            .iter()
            .map(|recipe| ListRow {
                image: render_image(&recipe.image_url, config.list_image_size, bundle),
                name: recipe.name.clone(),
            })
            .collect(),
    }
}

pub fn render_detail(
    recipe: &Recipe,
    page: usize,
    bundle: &AssetBundle,
    config: &AppConfig,
) -> DetailView {
    let pages: Vec<StepView> = recipe.steps.iter().map(render_step).collect();
    let current = page.min(pages.len().saturating_sub(1));

    DetailView {
        title: recipe.name.clone(),
        image: render_image(&recipe.image_url, config.detail_image_size, bundle),
        name: recipe.name.clone(),
        pages,
        current,
    }
}

/// Render the given screen. A detail screen pointing past the collection
/// falls back to the list.
pub fn render(screen: Screen, recipes: &[Recipe], bundle: &AssetBundle, config: &AppConfig) -> View {
    match screen {
        Screen::List => View::List(render_list(recipes, bundle, config)),
        Screen::Detail { recipe, page } => match recipes.get(recipe) {
            Some(r) => View::Detail(render_detail(r, page, bundle, config)),
            None => {
                debug!("No recipe at index {}, showing the list", recipe);
                View::List(render_list(recipes, bundle, config))
            }
        },
    }
}

fn render_image(name: &str, size: u32, bundle: &AssetBundle) -> ImageView {
    ImageView {
        asset: bundle.image(name),
        size,
    }
}

impl StepView {
    pub fn shows_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

impl DetailView {
    pub fn current_page(&self) -> Option<&StepView> {
        self.pages.get(self.current)
    }

    pub fn indicator(&self) -> PageIndicator {
        PageIndicator {
            current: self.current,
            count: self.pages.len(),
        }
    }
}

impl fmt::Display for ImageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.asset {
            Some(asset) => write!(f, "({} {}x{})", asset.name, self.size, self.size),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.image.asset.is_some() {
            write!(f, "{} ", self.image)?;
        }
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for (index, row) in self.rows.iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, row)?;
        }
        Ok(())
    }
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}{}", INDENT, self.text)?;
        if self.shows_ingredients() {
            writeln!(f, "Ingredients:")?;
            for name in &self.ingredients {
                writeln!(f, "{}- {}", INDENT, name)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots: Vec<&str> = (0..self.count)
            .map(|i| if i == self.current { "●" } else { "○" })
            .collect();
        write!(f, "{}", dots.join(" "))
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        if self.image.asset.is_some() {
            writeln!(f, "{}", self.image)?;
        }
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        if let Some(page) = self.current_page() {
            write!(f, "{}", page)?;
            writeln!(f)?;
        }
        writeln!(f, "{}", self.indicator())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::List(list) => write!(f, "{}", list),
            View::Detail(detail) => write!(f, "{}", detail),
        }
    }
}

use crate::view::{render, View};
use crate::{load_recipes, Action, AppConfig, AssetBundle, Recipe, Screen};

/// A browsing session.
///
/// The recipe collection is loaded once when the session starts and never
/// changes afterwards; only the current screen moves.
#[derive(Debug, Clone)]
pub struct App {
    recipes: Vec<Recipe>,
    bundle: AssetBundle,
    config: AppConfig,
    screen: Screen,
}

impl App {
    /// Start a session from the bundle named by `config`.
    pub fn start(config: AppConfig) -> Self {
        let bundle = config.bundle();
        let recipes = load_recipes(&bundle, &config);
        Self::with_recipes(recipes, bundle, config)
    }

    /// Start a session over an already loaded collection.
    pub fn with_recipes(recipes: Vec<Recipe>, bundle: AssetBundle, config: AppConfig) -> Self {
        Self {
            recipes,
            bundle,
            config,
            screen: Screen::List,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn dispatch(&mut self, action: Action) -> Screen {
        self.screen = self.screen.apply(action, &self.recipes);
        self.screen
    }

    pub fn view(&self) -> View {
        self.render(self.screen)
    }

    /// Render any screen of this session without moving to it.
    pub fn render(&self, screen: Screen) -> View {
        render(screen, &self.recipes, &self.bundle, &self.config)
    }
}

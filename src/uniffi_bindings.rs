//! UniFFI bindings for delicious-notes
//!
//! This module provides FFI-compatible types and functions so an iOS or
//! Android shell can load and render recipes with the same core as the
//! terminal browser.

use std::fmt;

use crate::{AppConfig, AssetBundle, Ingredient, LoadError, Recipe, Step};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub id: i64,
    pub name: String,
}

/// FFI-compatible step
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStep {
    pub number: i64,
    pub step: String,
    /// Ingredients used by this step (empty if none were listed)
    pub ingredients: Vec<FfiIngredient>,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub name: String,
    /// Name of a bundled image asset
    pub image_url: String,
    pub steps: Vec<FfiStep>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiLoadError {
    /// The recipe resource does not exist
    ResourceNotFound { message: String },
    /// The resource exists but could not be read
    ReadError { message: String },
    /// The resource is not a JSON array of recipes
    DecodeError { message: String },
    /// Configuration error
    ConfigError { message: String },
}

impl fmt::Display for FfiLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiLoadError::ResourceNotFound { message } => {
                write!(f, "Resource not found: {}", message)
            }
            FfiLoadError::ReadError { message } => write!(f, "Read error: {}", message),
            FfiLoadError::DecodeError { message } => write!(f, "Decode error: {}", message),
            FfiLoadError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiLoadError {}

impl From<LoadError> for FfiLoadError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::ResourceNotFound { name } => FfiLoadError::ResourceNotFound { message: name },
            err @ LoadError::Io { .. } => FfiLoadError::ReadError {
                message: err.to_string(),
            },
            LoadError::Decode(e) => FfiLoadError::DecodeError {
                message: e.to_string(),
            },
            LoadError::Config(e) => FfiLoadError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

impl From<Step> for FfiStep {
    fn from(step: Step) -> Self {
        FfiStep {
            number: step.number,
            step: step.step,
            ingredients: step
                .ingredients
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<FfiStep> for Step {
    fn from(ffi: FfiStep) -> Self {
        Step {
            number: ffi.number,
            step: ffi.step,
            ingredients: if ffi.ingredients.is_empty() {
                None
            } else {
                Some(
                    ffi.ingredients
                        .into_iter()
                        .map(|i| Ingredient {
                            id: i.id,
                            name: i.name,
                        })
                        .collect(),
                )
            },
        }
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            name: recipe.name,
            image_url: recipe.image_url,
            steps: recipe.steps.into_iter().map(Into::into).collect(),
        }
    }
}

fn into_ffi(recipes: Vec<Recipe>) -> Vec<FfiRecipe> {
    recipes.into_iter().map(Into::into).collect()
}

/// Load `recipes.json` from an asset directory
///
/// Any failure is logged and yields an empty list.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn load_recipes_from_directory(path: String) -> Vec<FfiRecipe> {
    into_ffi(crate::load_recipes(
        &AssetBundle::directory(path),
        &AppConfig::default(),
    ))
}

/// Load `recipes.json` from an asset directory, reporting failures
///
/// For shells that want to show a distinct "load failed" state instead of an
/// empty list.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn try_load_recipes_from_directory(path: String) -> Result<Vec<FfiRecipe>, FfiLoadError> {
    let recipes = crate::try_load_recipes(&AssetBundle::directory(path), &AppConfig::default())?;
    Ok(into_ffi(recipes))
}

/// Load recipes from the bundle named by `config.toml` and `DELICIOUS__*`
/// environment variables, reporting failures
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn try_load_configured_recipes() -> Result<Vec<FfiRecipe>, FfiLoadError> {
    let config = crate::load_config()?;
    let recipes = crate::try_load_recipes(&config.bundle(), &config)?;
    Ok(into_ffi(recipes))
}

/// Load the recipes compiled into the library
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn load_embedded_recipes() -> Vec<FfiRecipe> {
    into_ffi(crate::load_bundled_recipes())
}

/// Render one step as display text
///
/// # Returns
/// `Step {number}`, the instruction, and the ingredient lines when there are any
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_step_text(step: FfiStep) -> String {
    crate::render_step(&step.into()).to_string()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

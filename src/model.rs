use serde::{Deserialize, Serialize};

/// A named item used by a step, identified by a numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

/// One instruction within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: i64,
    pub step: String,
    /// Absent and empty are rendered the same way
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl Step {
    /// Ingredients used by this step; empty when the field was absent.
    pub fn ingredients(&self) -> &[Ingredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    pub fn has_ingredients(&self) -> bool {
        !self.ingredients().is_empty()
    }
}

/// A named dish with an image reference and an ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Name of a bundled image asset, not a network address
    pub image_url: String,
    pub steps: Vec<Step>,
}

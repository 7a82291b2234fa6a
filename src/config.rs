use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::{AssetBundle, LoadError};

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding `recipes.json` and image assets.
    /// When unset the recipes compiled into the binary are used.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// Base name of the recipe resource
    #[serde(default = "default_resource_name")]
    pub resource_name: String,
    /// Extension of the recipe resource
    #[serde(default = "default_resource_extension")]
    pub resource_extension: String,
    /// Title shown above the recipe list
    #[serde(default = "default_title")]
    pub title: String,
    /// Edge length of the thumbnails in the list
    #[serde(default = "default_list_image_size")]
    pub list_image_size: u32,
    /// Edge length of the header image in the detail view
    #[serde(default = "default_detail_image_size")]
    pub detail_image_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            resource_name: default_resource_name(),
            resource_extension: default_resource_extension(),
            title: default_title(),
            list_image_size: default_list_image_size(),
            detail_image_size: default_detail_image_size(),
        }
    }
}

// Default value functions
fn default_resource_name() -> String {
    "recipes".to_string()
}

fn default_resource_extension() -> String {
    "json".to_string()
}

fn default_title() -> String {
    "Recipes".to_string()
}

fn default_list_image_size() -> u32 {
    50
}

fn default_detail_image_size() -> u32 {
    100
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DELICIOUS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DELICIOUS__ASSETS_DIR
    pub fn load() -> Result<Self, LoadError> {
        load_config()
    }

    /// The bundle recipes and images are read from.
    pub fn bundle(&self) -> AssetBundle {
        match &self.assets_dir {
            Some(dir) => AssetBundle::directory(dir),
            None => AssetBundle::Embedded,
        }
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, LoadError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(environment())
        .build()?;

    from_settings(settings)
}

// Use double underscore for nested keys: DELICIOUS__LIST_IMAGE_SIZE
fn environment() -> Environment {
    Environment::with_prefix("DELICIOUS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn from_settings(settings: Config) -> Result<AppConfig, LoadError> {
    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_resource_name(), "recipes");
        assert_eq!(default_resource_extension(), "json");
        assert_eq!(default_title(), "Recipes");
        assert_eq!(default_list_image_size(), 50);
        assert_eq!(default_detail_image_size(), 100);
    }

    #[test]
    fn test_default_config_uses_embedded_bundle() {
        let config = AppConfig::default();
        assert!(config.assets_dir.is_none());
        assert_eq!(config.bundle(), AssetBundle::Embedded);
    }

    #[test]
    fn test_assets_dir_selects_directory_bundle() {
        let config = AppConfig {
            assets_dir: Some(PathBuf::from("assets")),
            ..AppConfig::default()
        };
        assert_eq!(config.bundle(), AssetBundle::directory("assets"));
    }

    #[test]
    fn test_environment_overrides() {
        let vars: config::Map<String, String> = [
            ("DELICIOUS__ASSETS_DIR", "/srv/recipes"),
            ("DELICIOUS__LIST_IMAGE_SIZE", "64"),
            ("OTHER__TITLE", "Ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Config::builder()
            .add_source(File::from_str("title = \"Cookbook\"", config::FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let config = from_settings(settings).unwrap();

        assert_eq!(config.assets_dir, Some(PathBuf::from("/srv/recipes")));
        assert_eq!(config.list_image_size, 64);
        assert_eq!(config.title, "Cookbook");
        assert_eq!(config.detail_image_size, 100);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "list_image_size = \"big\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        assert!(matches!(from_settings(settings), Err(LoadError::Config(_))));
    }

    #[test]
    fn test_partial_source_fills_defaults() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "title = \"Cookbook\"\nlist_image_size = 64",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config = from_settings(settings).unwrap();

        assert_eq!(config.title, "Cookbook");
        assert_eq!(config.list_image_size, 64);
        assert_eq!(config.detail_image_size, 100);
        assert_eq!(config.resource_name, "recipes");
    }
}

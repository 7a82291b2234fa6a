use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::LoadError;

/// Recipes compiled into the binary at build time.
pub const BUNDLED_RECIPES: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/recipes.json"));

const BUNDLED_RESOURCE_NAME: &str = "recipes.json";

/// Extensions tried, in order, when an image name has none of its own.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Where the application's read-only resources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBundle {
    /// Resources and images are files under this directory
    Directory(PathBuf),
    /// Only `recipes.json`, compiled in; no images
    Embedded,
}

/// An image asset that resolved to a file in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub name: String,
    pub path: PathBuf,
}

impl AssetBundle {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        AssetBundle::Directory(root.into())
    }

    /// Read the raw bytes of `name.extension`.
    pub fn resource(&self, name: &str, extension: &str) -> Result<Cow<'static, [u8]>, LoadError> {
        let file_name = format!("{}.{}", name, extension);

        match self {
            AssetBundle::Embedded if file_name == BUNDLED_RESOURCE_NAME => {
                Ok(Cow::Borrowed(BUNDLED_RECIPES))
            }
            AssetBundle::Embedded => Err(LoadError::ResourceNotFound { name: file_name }),
            AssetBundle::Directory(root) => {
                let path = root.join(&file_name);
                debug!("Reading resource {}", path.display());
                match fs::read(&path) {
                    Ok(bytes) => Ok(Cow::Owned(bytes)),
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        Err(LoadError::ResourceNotFound { name: file_name })
                    }
                    Err(source) => Err(LoadError::Io { path, source }),
                }
            }
        }
    }

    /// Look up a named image asset.
    ///
    /// The name is tried as a file name first, then with each known image
    /// extension appended. Anything that does not resolve is `None`; callers
    /// render nothing in its place.
    pub fn image(&self, name: &str) -> Option<ImageAsset> {
        let root = match self {
            AssetBundle::Directory(root) => root,
            AssetBundle::Embedded => return None,
        };

        if name.is_empty() {
            return None;
        }

        let candidates = std::iter::once(root.join(name)).chain(
            IMAGE_EXTENSIONS
                .iter()
                .map(|ext| root.join(format!("{}.{}", name, ext))),
        );

        candidates
            .filter(|path| is_inside(root, path))
            .find(|path| path.is_file())
            .map(|path| ImageAsset {
                name: name.to_string(),
                path,
            })
    }
}

// Names come from recipe data, so keep lookups from escaping the bundle.
fn is_inside(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .map(|rest| {
            rest.components()
                .all(|c| matches!(c, std::path::Component::Normal(_)))
        })
        .unwrap_or(false)
}

//! Configuration - Site-Wide Defaults
//!
//! A JSON file can supply defaults for options a caller leaves unset.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::builder::GravatarError;
use crate::options::{AvatarOptions, DefaultImage, HashAlgorithm, ProfileOptions, Rating};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GravatarConfig {
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub default_image: Option<DefaultImage>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub force_secure: bool,
    #[serde(default)]
    pub hash: Option<HashAlgorithm>,
}

impl GravatarConfig {
    pub fn load(path: &Path) -> Result<Self, GravatarError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, GravatarError> {
        // Sizes are not range-checked here; the builder clamps them.
        Ok(serde_json::from_str(content)?)
    }

    /// Fill fields the caller left unset. Explicit values always win.
    pub fn apply(&self, mut options: AvatarOptions) -> AvatarOptions {
        if options.size.is_none() {
            options.size = self.size;
        }
        if options.default_image.is_none() {
            options.default_image = self.default_image.clone();
        }
        if options.rating.is_none() {
            options.rating = self.rating;
        }
        options.force_secure |= self.force_secure;
        if let Some(hash) = self.hash {
            options.hash = hash;
        }
        debug!("applied config defaults: {:?}", options);
        options
    }

    /// Profile counterpart of `apply`: carries the secure flag and digest so
    /// profile links hash the same way as avatar URLs.
    pub fn apply_profile(&self, mut options: ProfileOptions) -> ProfileOptions {
        options.force_secure |= self.force_secure;
        if let Some(hash) = self.hash {
            options.hash = hash;
        }
        options
    }
}

//! User preferences.
//!
//! Preferences are loaded from the built-in `default.yaml` with an optional
//! user YAML file layered on top. Any key missing from the user file keeps its
//! default value.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod interaction;

pub use animation::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
}
impl Preferences {
    /// Loads preferences, layering `user_file` over the defaults if it is
    /// given. If loading fails, a warning is logged and the default
    /// preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences, layering `user_file` over the defaults if it is
    /// given.
    pub fn try_load(user_file: Option<&Path>) -> eyre::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::info!("Loading user preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        let mut prefs: Self = config.build()?.try_deserialize()?;
        prefs.animation.sanitize();
        Ok(prefs)
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}

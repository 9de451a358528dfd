use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::extractor::Extractor;

/// Built-in profile; a user file and the environment are layered on top.
static DEFAULT_CONFIG: &str = include_str!("../config/webtoons.toml");

static USER_CONFIG_NAME: &str = "webtoon-dl";

static ENV_PREFIX: &str = "WEBTOON_DL";

#[derive(Deserialize)]
pub struct Config {
    pub user_agent: String,
    pub referer: String,
    pub site: SiteConfig,
}

#[derive(Deserialize)]
pub struct SiteConfig {
    pub name: String,
    /// Every full-resolution image URL on an episode page.
    pub images: Box<dyn Extractor>,
    pub title: Box<dyn Extractor>,
    pub next_url: Box<dyn Extractor>,
}

impl Config {
    /// Loads the configuration. An explicit `path` must exist; otherwise
    /// `webtoon-dl.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let user_file = match path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::with_name(USER_CONFIG_NAME)
                .format(config::FileFormat::Toml)
                .required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(user_file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("failed to deserialize configuration: {}", e))
    }

    /// The built-in profile alone, without user overrides.
    pub fn builtin() -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("failed to deserialize built-in configuration: {}", e))
    }
}

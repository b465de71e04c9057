use std::{num::NonZeroU32, path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_with::{serde_as, DurationSecondsWithFrac};
use url::Url;

use crate::{api::DEFAULT_BASE_URL, data_collector::DEFAULT_INTERVAL, schema::UserLogin};

pub const DEFAULT_CONFIG_PATH: &str = "ignore/letterboxd-diary.toml";

/// Contents of the optional TOML config file.  Every key may be omitted.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<Url>,
    #[serde_as(as = "Option<DurationSecondsWithFrac<f64>>")]
    #[serde(default)]
    pub interval: Option<Duration>,
    pub output_dir: Option<PathBuf>,
    pub user: Option<UserLogin>,
    pub pages: Option<NonZeroU32>,
}

/// Settings after merging the config file with the built-in defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub base_url: Url,
    pub interval: Duration,
    pub output_dir: PathBuf,
    pub user: Option<UserLogin>,
    pub pages: Option<NonZeroU32>,
}

impl ConfigFile {
    pub fn into_settings(self) -> anyhow::Result<Settings> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        Ok(Settings {
            base_url,
            interval: self.interval.unwrap_or(DEFAULT_INTERVAL),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            user: self.user,
            pages: self.pages,
        })
    }
}

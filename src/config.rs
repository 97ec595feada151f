use crate::error::{Error, Result};
use crate::scenario::{Order, Scenario};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Optional scenario file. Every field falls back to the reference scenario.
///
/// ```toml
/// banner = "---- Bar ----"
/// color = false
///
/// [[orders]]
/// coffee = "latte"
///
/// [[orders]]
/// coffee = "cappuccino"
/// milk = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub banner: Option<String>,
    pub color: Option<bool>,
    pub orders: Option<Vec<Order>>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::read_config(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        debug!(path = %path.display(), format = ?format, "loading scenario");

        let parsed = match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        };
        parsed.map_err(|err| Error::parse_config(path, err))
    }

    /// Files can switch color off; `no_color` (the `NO_COLOR` convention)
    /// always wins.
    pub fn color_enabled(&self, no_color: bool) -> bool {
        !no_color && self.color.unwrap_or(true)
    }

    /// Overlays this file on the reference scenario.
    pub fn into_scenario(self) -> Result<Scenario> {
        let mut scenario = Scenario::reference();
        if let Some(banner) = self.banner {
            scenario.banner = banner;
        }
        if let Some(color) = self.color {
            scenario.color = color;
        }
        if let Some(orders) = self.orders {
            if orders.is_empty() {
                return Err(Error::EmptyOrders);
            }
            scenario.orders = orders;
        }
        Ok(scenario)
    }
}

/// Builds the scenario to run: the reference one when `path` is `None`,
/// otherwise the file overlaid on it. Color follows [`Config::color_enabled`].
pub fn load_scenario(path: Option<&Path>, no_color: bool) -> Result<Scenario> {
    let config = match path {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let color = config.color_enabled(no_color);
    Ok(config.into_scenario()?.with_color(color))
}

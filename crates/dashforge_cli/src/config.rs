//! Dashforge configuration file handling

use anyhow::{Context, Result};
use dashforge_theme::{create_theme, PartialTheme, Theme, ThemeName};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "dashforge.toml";

/// Top-level Dashforge configuration (dashforge.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashforgeConfig {
    /// Emit `.bg-*`/`.text-*`/`.border-*` utility classes
    #[serde(default)]
    pub generate_utilities: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
}

/// `theme = "dark"` or a `[theme]` table layered on a built-in base
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeConfig {
    Named(ThemeName),
    Layered(LayeredTheme),
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayeredTheme {
    /// Built-in theme the overrides apply to
    #[serde(default)]
    pub base: ThemeName,
    #[serde(flatten)]
    pub overrides: PartialTheme,
}

impl ThemeConfig {
    pub fn base(&self) -> ThemeName {
        match self {
            ThemeConfig::Named(name) => *name,
            ThemeConfig::Layered(layered) => layered.base,
        }
    }

    /// The configured theme on top of `base`
    pub fn resolve_on(&self, base: ThemeName) -> Theme {
        match self {
            ThemeConfig::Named(_) => base.theme().clone(),
            ThemeConfig::Layered(layered) => create_theme(&layered.overrides, base.theme()),
        }
    }
}

impl DashforgeConfig {
    /// Load configuration from a file, or from `dashforge.toml` inside a directory.
    ///
    /// `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No configuration found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content, &config_path)
    }

    /// Load `path` if given, else `./dashforge.toml` if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.exists() {
                    Self::load(&local)
                } else {
                    tracing::debug!("no {CONFIG_FILE} found, using the built-in light theme");
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse(content: &str, source: &Path) -> Result<Self> {
        let is_json = source
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse {}", source.display()))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse {}", source.display()))
        }
    }

    pub fn base(&self) -> ThemeName {
        self.theme.as_ref().map(ThemeConfig::base).unwrap_or_default()
    }

    /// The fully resolved theme this configuration describes
    pub fn resolve(&self) -> Theme {
        self.resolve_on(self.base())
    }

    /// The same overrides on a different built-in base
    pub fn resolve_on(&self, base: ThemeName) -> Theme {
        match &self.theme {
            Some(theme) => theme.resolve_on(base),
            None => base.theme().clone(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashforge_theme::{dark_theme, light_theme, Shade};

    fn parse_toml(content: &str) -> DashforgeConfig {
        DashforgeConfig::parse(content, Path::new(CONFIG_FILE)).unwrap()
    }

    #[test]
    fn empty_config_is_light_without_utilities() {
        let config = parse_toml("");
        assert!(!config.generate_utilities);
        assert_eq!(config.base(), ThemeName::Light);
        assert_eq!(&config.resolve(), light_theme());
    }

    #[test]
    fn named_theme() {
        let config = parse_toml(r#"theme = "dark""#);
        assert_eq!(config.base(), ThemeName::Dark);
        assert_eq!(&config.resolve(), dark_theme());
    }

    #[test]
    fn layered_theme_table() {
        let config = parse_toml(
            r##"
generate_utilities = true

[theme]
base = "dark"
name = "brand"

[theme.colors]
primary = "#ff6b35"
secondary = { base = "#0077b6", on-base = "#ffffff" }
"##,
        );

        assert!(config.generate_utilities);
        assert_eq!(config.base(), ThemeName::Dark);

        let theme = config.resolve();
        assert_eq!(theme.name.as_deref(), Some("brand"));
        assert_eq!(theme.color("primary"), Some(&Shade::new("#ff6b35")));
        assert_eq!(
            theme.color("secondary"),
            Some(&Shade::with_on("#0077b6", "#ffffff"))
        );
        assert_eq!(theme.color("surface"), dark_theme().color("surface"));
    }

    #[test]
    fn json_configs_are_accepted() {
        let config = DashforgeConfig::parse(
            r##"{"theme": {"colors": {"primary": "#00af67"}}}"##,
            Path::new("theme.json"),
        )
        .unwrap();
        assert_eq!(config.base(), ThemeName::Light);
        assert_eq!(
            config.resolve().color("primary"),
            Some(&Shade::new("#00af67"))
        );
    }

    #[test]
    fn unknown_theme_name_is_rejected() {
        assert!(DashforgeConfig::parse(r#"theme = "solarized""#, Path::new(CONFIG_FILE)).is_err());
    }
}

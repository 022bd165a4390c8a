//! Built-in light and dark themes derived from the Material 3 baseline palettes

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme::{ColorPalette, ComponentTokens, Shade, Theme, TokenScale};
use crate::tokens::*;

static LIGHT: OnceLock<Theme> = OnceLock::new();
static DARK: OnceLock<Theme> = OnceLock::new();

/// The built-in light theme
pub fn light_theme() -> &'static Theme {
    LIGHT.get_or_init(|| material_theme("light", &ColorTokens::light()))
}

/// The built-in dark theme
pub fn dark_theme() -> &'static Theme {
    DARK.get_or_init(|| material_theme("dark", &ColorTokens::dark()))
}

/// Names of the built-in themes, as accepted in configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Light => light_theme(),
            Self::Dark => dark_theme(),
        }
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for a theme name that is neither `light` nor `dark`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme name `{0}` (expected `light` or `dark`)")]
pub struct UnknownThemeName(pub String);

impl FromStr for ThemeName {
    type Err = UnknownThemeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownThemeName(s.to_string())),
        }
    }
}

fn material_theme(name: &str, colors: &ColorTokens) -> Theme {
    Theme {
        name: Some(name.to_string()),
        colors: palette(colors),
        spacing: Some(SpacingTokens::default().to_scale()),
        typography: Some(TypographyTokens.to_scale()),
        shape: Some(ShapeTokens::default().to_scale()),
        elevation: Some(ElevationTokens::default().to_scale()),
        components: default_components(),
        tokens: elevation_aliases(&ElevationTokens::default()),
    }
}

/// Brand roles carry their `on-` color as a shade record; the `on-` role is
/// also kept as its own entry so `.bg-on-primary` style utilities exist.
fn palette(colors: &ColorTokens) -> ColorPalette {
    ColorRole::ALL
        .iter()
        .map(|role| {
            let shade = match role.on_role() {
                Some(on) => Shade::with_on(colors.get(*role), colors.get(on)),
                None => Shade::new(colors.get(*role)),
            };
            (role.key().to_string(), shade)
        })
        .collect()
}

fn default_components() -> ComponentTokens {
    let mut button_default = TokenScale::new();
    button_default.insert("background".into(), "var(--df-color-primary)".into());
    button_default.insert("color".into(), "var(--df-color-on-primary)".into());

    let mut button = IndexMap::new();
    button.insert("default".to_string(), button_default);

    let mut components = ComponentTokens::new();
    components.insert("button".to_string(), button);
    components
}

/// `elevation-<n>` names for the shadow levels
fn elevation_aliases(elevation: &ElevationTokens) -> TokenScale {
    ElevationToken::ALL
        .iter()
        .map(|t| (format!("elevation-{}", t.level()), elevation.get(*t).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!(" light ".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert!("solarized".parse::<ThemeName>().is_err());
    }

    #[test]
    fn names_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeName::Dark).unwrap(), "\"dark\"");
        let name: ThemeName = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(name, ThemeName::Light);
    }

    #[test]
    fn brand_roles_are_shade_records() {
        let primary = light_theme().color("primary").unwrap();
        assert_eq!(primary, &Shade::with_on("#6750a4", "#ffffff"));
        assert_eq!(light_theme().color("surface"), Some(&Shade::new("#fffbfe")));
    }

    #[test]
    fn built_ins_are_complete() {
        for theme in [light_theme(), dark_theme()] {
            assert_eq!(theme.colors.len(), ColorRole::ALL.len());
            assert!(theme.spacing.is_some());
            assert!(theme.typography.is_some());
            assert!(theme.shape.is_some());
            assert!(theme.elevation.is_some());
            assert_eq!(theme.tokens.get("elevation-0").map(String::as_str), Some("none"));
        }
    }
}

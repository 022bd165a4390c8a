//! Theme model
//!
//! A [`Theme`] is the resolved configuration unit; a [`PartialTheme`] is an
//! override layer that is always resolved against a base theme before use
//! (see [`crate::merge`]). All maps preserve insertion order so that CSS
//! projection is deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokens::TypographyStyle;

/// Named scale of CSS strings (spacing, shape, elevation, raw tokens)
pub type TokenScale = IndexMap<String, String>;

/// Named typography styles
pub type TypeScale = IndexMap<String, TypographyStyle>;

/// Semantic color roles to shades
pub type ColorPalette = IndexMap<String, Shade>;

/// Per-component token overrides: component -> variant -> property -> value
pub type ComponentTokens = IndexMap<String, IndexMap<String, TokenScale>>;

/// A color value with an optional foreground-on-this-color value.
///
/// Plain color strings are normalized into a shade with no `on_base` when
/// they enter a palette, so every palette entry has the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ShadeRepr", into = "ShadeRepr")]
pub struct Shade {
    pub base: String,
    pub on_base: Option<String>,
}

impl Shade {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            on_base: None,
        }
    }

    pub fn with_on(base: impl Into<String>, on_base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            on_base: Some(on_base.into()),
        }
    }
}

impl From<&str> for Shade {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for Shade {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}

/// Wire form: either `"#fff"` or `{ base = "#fff", on-base = "#000" }`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ShadeRepr {
    Flat(String),
    Record {
        base: String,
        #[serde(
            rename = "on-base",
            alias = "onBase",
            alias = "on_base",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        on_base: Option<String>,
    },
}

impl From<ShadeRepr> for Shade {
    fn from(repr: ShadeRepr) -> Self {
        match repr {
            ShadeRepr::Flat(base) => Shade::new(base),
            ShadeRepr::Record { base, on_base } => Shade { base, on_base },
        }
    }
}

impl From<Shade> for ShadeRepr {
    fn from(shade: Shade) -> Self {
        match shade.on_base {
            None => ShadeRepr::Flat(shade.base),
            on_base => ShadeRepr::Record {
                base: shade.base,
                on_base,
            },
        }
    }
}

/// A complete, resolved theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub colors: ColorPalette,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypeScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub components: ComponentTokens,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tokens: TokenScale,
}

impl Theme {
    /// A theme with only colors; every other category is absent
    pub fn from_colors<K, V>(colors: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Shade>,
    {
        Self {
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn color(&self, key: &str) -> Option<&Shade> {
        self.colors.get(key)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An override layer: every field optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<TokenScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypeScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TokenScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<TokenScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentTokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenScale>,
}

impl PartialTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set; merging an empty layer is the identity
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, key: impl Into<String>, shade: impl Into<Shade>) -> Self {
        self.colors
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), shade.into());
        self
    }

    pub fn spacing(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spacing
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn typography(mut self, key: impl Into<String>, style: TypographyStyle) -> Self {
        self.typography
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), style);
        self
    }

    pub fn shape(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.shape
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn elevation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elevation
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn token(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn component(
        mut self,
        component: impl Into<String>,
        variant: impl Into<String>,
        tokens: TokenScale,
    ) -> Self {
        self.components
            .get_or_insert_with(IndexMap::new)
            .entry(component.into())
            .or_default()
            .insert(variant.into(), tokens);
        self
    }
}

impl From<Theme> for PartialTheme {
    fn from(theme: Theme) -> Self {
        Self {
            name: theme.name,
            colors: Some(theme.colors),
            spacing: theme.spacing,
            typography: theme.typography,
            shape: theme.shape,
            elevation: theme.elevation,
            components: Some(theme.components),
            tokens: Some(theme.tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_accepts_string_or_record() {
        let palette: ColorPalette = serde_json::from_str(
            r##"{"primary": {"base": "#111111", "on-base": "#ffffff"}, "accent": "#abcdef"}"##,
        )
        .unwrap();
        assert_eq!(palette["primary"], Shade::with_on("#111111", "#ffffff"));
        assert_eq!(palette["accent"], Shade::new("#abcdef"));
    }

    #[test]
    fn flat_shade_serializes_as_string() {
        let json = serde_json::to_string(&Shade::new("#123456")).unwrap();
        assert_eq!(json, r##""#123456""##);
    }

    #[test]
    fn partial_builder_marks_non_empty() {
        assert!(PartialTheme::new().is_empty());
        let partial = PartialTheme::new().color("primary", "#ff0000");
        assert!(!partial.is_empty());
        assert_eq!(
            partial.colors.as_ref().and_then(|c| c.get("primary")),
            Some(&Shade::new("#ff0000"))
        );
    }

    #[test]
    fn theme_requires_colors_when_deserialized() {
        let err = serde_json::from_str::<Theme>(r#"{"name": "x"}"#);
        assert!(err.is_err());
    }
}

//! Theme merging
//!
//! Layering model: built-in theme -> partial override -> resolved [`Theme`].
//! Merges are shallow: a key present in the override replaces the base
//! entry wholesale, including shade records.

use indexmap::IndexMap;
use std::hash::Hash;

use crate::theme::{PartialTheme, Theme};
use crate::themes::{dark_theme, light_theme};
use crate::tokens::{ElevationTokens, ShapeTokens, SpacingTokens, TypographyTokens};

/// Resolve `partial` against `base`.
///
/// `colors`, `components` and `tokens` always merge key-by-key. The optional
/// categories (`spacing`, `typography`, `shape`, `elevation`) merge only when
/// both sides define them; otherwise whichever side has one wins, and the
/// category stays absent if neither does.
pub fn merge_themes(base: &Theme, partial: &PartialTheme) -> Theme {
    if partial.is_empty() {
        return base.clone();
    }

    Theme {
        name: partial.name.clone().or_else(|| base.name.clone()),
        colors: overlay(&base.colors, partial.colors.as_ref()),
        spacing: merge_category(base.spacing.as_ref(), partial.spacing.as_ref()),
        typography: merge_category(base.typography.as_ref(), partial.typography.as_ref()),
        shape: merge_category(base.shape.as_ref(), partial.shape.as_ref()),
        elevation: merge_category(base.elevation.as_ref(), partial.elevation.as_ref()),
        components: overlay(&base.components, partial.components.as_ref()),
        tokens: overlay(&base.tokens, partial.tokens.as_ref()),
    }
}

/// Build a theme from `config` on top of `base`.
///
/// Colors, components and tokens merge as in [`merge_themes`]. Each token
/// category is taken whole from `config`, else from `base`, else from the
/// default Material tables; categories never merge key-by-key here.
pub fn create_theme(config: &PartialTheme, base: &Theme) -> Theme {
    Theme {
        name: config.name.clone().or_else(|| base.name.clone()),
        colors: overlay(&base.colors, config.colors.as_ref()),
        spacing: Some(first_defined(
            config.spacing.as_ref(),
            base.spacing.as_ref(),
            || SpacingTokens::default().to_scale(),
        )),
        typography: Some(first_defined(
            config.typography.as_ref(),
            base.typography.as_ref(),
            || TypographyTokens.to_scale(),
        )),
        shape: Some(first_defined(
            config.shape.as_ref(),
            base.shape.as_ref(),
            || ShapeTokens::default().to_scale(),
        )),
        elevation: Some(first_defined(
            config.elevation.as_ref(),
            base.elevation.as_ref(),
            || ElevationTokens::default().to_scale(),
        )),
        components: overlay(&base.components, config.components.as_ref()),
        tokens: overlay(&base.tokens, config.tokens.as_ref()),
    }
}

/// [`create_theme`] on the built-in light theme
pub fn create_light_theme(config: &PartialTheme) -> Theme {
    create_theme(config, light_theme())
}

/// [`create_theme`] on the built-in dark theme
pub fn create_dark_theme(config: &PartialTheme) -> Theme {
    create_theme(config, dark_theme())
}

fn overlay<K, V>(base: &IndexMap<K, V>, partial: Option<&IndexMap<K, V>>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base.clone();
    if let Some(partial) = partial {
        for (key, value) in partial {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

fn first_defined<T: Clone>(
    config: Option<&T>,
    base: Option<&T>,
    default: impl FnOnce() -> T,
) -> T {
    config.or(base).cloned().unwrap_or_else(default)
}

fn merge_category<K, V>(
    base: Option<&IndexMap<K, V>>,
    partial: Option<&IndexMap<K, V>>,
) -> Option<IndexMap<K, V>>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    match (base, partial) {
        (Some(base), Some(partial)) => Some(overlay(base, Some(partial))),
        (None, Some(only)) | (Some(only), None) => Some(only.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Shade;

    #[test]
    fn shade_override_replaces_whole_record() {
        let base = Theme::from_colors([("primary", Shade::with_on("#111111", "#ffffff"))]);
        let merged = merge_themes(&base, &PartialTheme::new().color("primary", "#222222"));
        assert_eq!(merged.colors["primary"], Shade::new("#222222"));
    }

    #[test]
    fn categories_merge_only_when_both_sides_define_them() {
        let mut base = Theme::from_colors([("primary", "#000")]);
        base.spacing = Some(SpacingTokens::default().to_scale());

        let merged = merge_themes(&base, &PartialTheme::new().spacing("md", "20px"));
        let spacing = merged.spacing.unwrap();
        assert_eq!(spacing["md"], "20px");
        assert_eq!(spacing["xs"], "4px");

        let merged = merge_themes(&base, &PartialTheme::new().shape("corner-small", "6px"));
        assert_eq!(merged.shape.unwrap().len(), 1);
        assert!(merged.typography.is_none());
    }

    #[test]
    fn override_keeps_base_key_order() {
        let base = Theme::from_colors([("a", "#1"), ("b", "#2")]);
        let merged = merge_themes(&base, &PartialTheme::new().color("c", "#3").color("a", "#4"));
        let keys: Vec<&str> = merged.colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn create_theme_falls_back_to_default_tables() {
        let bare = Theme::from_colors([("primary", "#000")]);
        let theme = create_theme(&PartialTheme::new().name("bare"), &bare);
        assert_eq!(theme.spacing, Some(SpacingTokens::default().to_scale()));
        assert_eq!(theme.elevation, Some(ElevationTokens::default().to_scale()));
        assert_eq!(theme.name.as_deref(), Some("bare"));
    }

    #[test]
    fn create_theme_takes_config_categories_whole() {
        let mut base = Theme::from_colors([("primary", "#000")]);
        base.spacing = Some(SpacingTokens::default().to_scale());
        base.shape = Some(ShapeTokens::default().to_scale());

        let theme = create_theme(&PartialTheme::new().spacing("md", "18px"), &base);
        let spacing = theme.spacing.unwrap();
        assert_eq!(spacing.len(), 1);
        assert_eq!(spacing["md"], "18px");
        assert_eq!(theme.shape, base.shape);
    }
}

//! CSS custom property projection
//!
//! Flattens a [`Theme`] into `--df-*` variables. The projection is one-way:
//! a flat color string and a shade record without `on_base` project to the
//! same variable.

use indexmap::IndexMap;

use crate::theme::Theme;

/// Prefix shared by every generated custom property
pub const VAR_PREFIX: &str = "--df-";

/// Custom property name to value, in projection order
pub type CssVarMap = IndexMap<String, String>;

/// Project a theme into CSS custom properties.
///
/// Categories are emitted in a fixed order: colors, spacing, typography,
/// shape, elevation, then raw tokens. Raw tokens come last and overwrite
/// any structured variable with the same name. Empty values are skipped.
pub fn generate_css_vars(theme: &Theme) -> CssVarMap {
    let mut vars = CssVarMap::new();

    for (key, shade) in &theme.colors {
        put(&mut vars, format!("{VAR_PREFIX}color-{key}"), &shade.base);
        if let Some(on_base) = &shade.on_base {
            put(&mut vars, format!("{VAR_PREFIX}color-on-{key}"), on_base);
        }
    }

    if let Some(spacing) = &theme.spacing {
        for (key, value) in spacing {
            put(&mut vars, format!("{VAR_PREFIX}spacing-{key}"), value);
        }
    }

    if let Some(typography) = &theme.typography {
        for (key, style) in typography {
            put(&mut vars, format!("{VAR_PREFIX}font-size-{key}"), &style.font_size);
            put(
                &mut vars,
                format!("{VAR_PREFIX}font-weight-{key}"),
                &style.font_weight.to_string(),
            );
            put(&mut vars, format!("{VAR_PREFIX}line-height-{key}"), &style.line_height);
            put(
                &mut vars,
                format!("{VAR_PREFIX}letter-spacing-{key}"),
                &style.letter_spacing,
            );
        }
    }

    for scale in [&theme.shape, &theme.elevation].into_iter().flatten() {
        for (key, value) in scale {
            put(&mut vars, format!("{VAR_PREFIX}{key}"), value);
        }
    }

    for (key, value) in &theme.tokens {
        put(&mut vars, format!("{VAR_PREFIX}{key}"), value);
    }

    vars
}

fn put(vars: &mut CssVarMap, name: String, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    vars.insert(name, value.to_string());
}

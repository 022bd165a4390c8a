//! Static stylesheet rendering
//!
//! Produces the same variables as [`crate::generate_css_vars`], but as CSS
//! text for shipping in a static `.css` file instead of writing them into a
//! live document.

use std::fmt::Write;

use crate::css::{generate_css_vars, VAR_PREFIX};
use crate::theme::Theme;
use crate::tokens::{ButtonTokens, IconTokens};

/// Render `:root { name: value; ... }` from `(name, value)` pairs
pub fn root_block<'a, I>(vars: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    block(":root", "", vars)
}

/// Render a theme's variables as a `:root` block.
///
/// With `dark`, the dark theme's color variables follow inside a
/// `prefers-color-scheme: dark` media query, so one file serves both schemes.
pub fn theme_stylesheet(light: &Theme, dark: Option<&Theme>) -> String {
    let vars = generate_css_vars(light);
    let mut css = root_block(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    if let Some(dark) = dark {
        let color_prefix = format!("{VAR_PREFIX}color-");
        let dark_vars = generate_css_vars(dark);
        let colors = dark_vars
            .iter()
            .filter(|(k, _)| k.starts_with(&color_prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()));
        css.push('\n');
        css.push_str("@media (prefers-color-scheme: dark) {\n");
        css.push_str(&block(":root", "  ", colors));
        css.push_str("}\n");
    }
    css
}

/// `:root` block with the `--df-btn-*` variables
pub fn button_variables(tokens: &ButtonTokens) -> String {
    prefixed_block(tokens.variables())
}

/// `:root` block with the `--df-icon-font-size-*` variables
pub fn icon_variables(tokens: &IconTokens) -> String {
    prefixed_block(tokens.variables())
}

fn prefixed_block(vars: Vec<(String, String)>) -> String {
    let named: Vec<(String, String)> = vars
        .into_iter()
        .map(|(k, v)| (format!("{VAR_PREFIX}{k}"), v))
        .collect();
    root_block(named.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

fn block<'a, I>(selector: &str, indent: &str, vars: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut css = String::new();
    let _ = writeln!(css, "{indent}{selector} {{");
    for (name, value) in vars {
        let _ = writeln!(css, "{indent}  {name}: {value};");
    }
    let _ = writeln!(css, "{indent}}}");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{dark_theme, light_theme};

    #[test]
    fn root_block_lists_declarations() {
        let css = root_block([("--df-a", "1px"), ("--df-b", "red")]);
        assert_eq!(css, ":root {\n  --df-a: 1px;\n  --df-b: red;\n}\n");
    }

    #[test]
    fn dark_media_block_holds_only_colors() {
        let css = theme_stylesheet(light_theme(), Some(dark_theme()));
        let (_, media) = css.split_once("@media (prefers-color-scheme: dark)").unwrap();
        assert!(media.contains("--df-color-primary: #d0bcff;"));
        assert!(!media.contains("--df-spacing-"));
    }

    #[test]
    fn component_blocks_are_prefixed() {
        assert!(button_variables(&ButtonTokens::default()).contains("--df-btn-border-radius: 4px;"));
        assert!(icon_variables(&IconTokens::default()).contains("--df-icon-font-size-large: 2rem;"));
    }
}

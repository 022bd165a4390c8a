//! Utility class rules derived from a theme's colors

use std::fmt::Write;

use crate::css::VAR_PREFIX;
use crate::theme::Theme;

/// Attribute that marks the generated utility stylesheet node
pub const UTILITY_MARKER: &str = "data-dashforge-utilities";

/// Render `.bg-*`, `.text-*` and `.border-*` rules for every top-level color.
///
/// Each rule references the color's custom property with the literal base
/// value as fallback, so the classes render before the variables are set.
/// Shade sub-values (`on_base`) do not get their own classes.
pub fn utility_css(theme: &Theme) -> String {
    let mut css = String::with_capacity(theme.colors.len() * 240);
    for (key, shade) in &theme.colors {
        let var = format!("var({VAR_PREFIX}color-{key},{})", shade.base);
        let _ = writeln!(css, ".bg-{key}{{background-color:{var} !important;}}");
        let _ = writeln!(css, ".text-{key}{{color:{var} !important;}}");
        let _ = writeln!(css, ".border-{key}{{border-color:{var} !important;}}");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_rules_per_color() {
        let theme = Theme::from_colors([("custom-brand", "#ff6b35"), ("primary", "#00af67")]);
        let css = utility_css(&theme);
        assert_eq!(css.lines().count(), 6);
        assert!(css.contains(
            ".bg-custom-brand{background-color:var(--df-color-custom-brand,#ff6b35) !important;}"
        ));
        assert!(css.contains(".text-primary{color:var(--df-color-primary,#00af67) !important;}"));
        assert!(css.contains(".border-custom-brand"));
    }

    #[test]
    fn no_colors_no_rules() {
        assert!(utility_css(&Theme::default()).is_empty());
    }
}

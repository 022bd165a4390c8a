//! Palette completeness checks
//!
//! A base color `c` is expected to come with `on-c`, `c-container` and
//! `on-c-container` companions. Missing companions are reported, never
//! rejected: custom palettes are free to omit them.

use std::fmt::{Display, Formatter};

use tracing::warn;

use crate::theme::ColorPalette;

/// Which companion of a base color is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Companion {
    On,
    Container,
    OnContainer,
}

/// A missing companion color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteWarning {
    pub color: String,
    pub companion: Companion,
}

impl PaletteWarning {
    /// The palette key that was expected
    pub fn expected_key(&self) -> String {
        match self.companion {
            Companion::On => format!("on-{}", self.color),
            Companion::Container => format!("{}-container", self.color),
            Companion::OnContainer => format!("on-{}-container", self.color),
        }
    }
}

impl Display for PaletteWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "color `{}` is missing `{}`", self.color, self.expected_key())
    }
}

/// Base colors are keys without an `on-` prefix and without `-container`
pub fn is_base_color(key: &str) -> bool {
    !key.starts_with("on-") && !key.contains("-container")
}

/// Report missing companion colors, logging each finding
pub fn validate_palette(palette: &ColorPalette) -> Vec<PaletteWarning> {
    let mut warnings = Vec::new();
    for color in palette.keys().filter(|k| is_base_color(k)) {
        for companion in [Companion::On, Companion::Container, Companion::OnContainer] {
            let warning = PaletteWarning {
                color: color.clone(),
                companion,
            };
            if !palette.contains_key(&warning.expected_key()) {
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn complete_family_has_no_warnings() {
        let theme = Theme::from_colors([
            ("brand", "#ff6b35"),
            ("on-brand", "#ffffff"),
            ("brand-container", "#ffd4c4"),
            ("on-brand-container", "#4a0000"),
        ]);
        assert!(validate_palette(&theme.colors).is_empty());
    }

    #[test]
    fn reports_each_missing_companion() {
        let theme = Theme::from_colors([("brand", "#ff6b35"), ("on-brand", "#ffffff")]);
        let warnings = validate_palette(&theme.colors);
        let keys: Vec<String> = warnings.iter().map(PaletteWarning::expected_key).collect();
        assert_eq!(keys, ["brand-container", "on-brand-container"]);
    }
}

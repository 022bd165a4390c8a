//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (light and dark palettes)
//! - Spacing
//! - Typography
//! - Shape (corner radii)
//! - Elevation (shadows)
//! - Component tables (button, icon)

mod color;
mod components;
mod elevation;
mod shape;
mod spacing;
mod typography;

pub use color::*;
pub use components::*;
pub use elevation::*;
pub use shape::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;

use crate::theme::{TokenScale, TypeScale};

/// Snapshot of every token table, keyed the way themes and stylesheets key them
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCatalog {
    pub light: TokenScale,
    pub dark: TokenScale,
    pub spacing: TokenScale,
    pub typography: TypeScale,
    pub shape: TokenScale,
    pub elevation: TokenScale,
    pub btn: ButtonTokens,
    pub icon: IconTokens,
    pub font_family: &'static str,
}

impl TokenCatalog {
    pub fn material() -> Self {
        Self {
            light: palette_scale(&ColorTokens::light()),
            dark: palette_scale(&ColorTokens::dark()),
            spacing: SpacingTokens::default().to_scale(),
            typography: TypographyTokens.to_scale(),
            shape: ShapeTokens::default().to_scale(),
            elevation: ElevationTokens::default().to_scale(),
            btn: ButtonTokens::default(),
            icon: IconTokens::default(),
            font_family: FONT_FAMILY,
        }
    }
}

fn palette_scale(colors: &ColorTokens) -> TokenScale {
    colors
        .entries()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

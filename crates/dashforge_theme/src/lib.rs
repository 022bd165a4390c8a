//! Dashforge theme system
//!
//! Design tokens, theme layering and CSS projection for the Dashforge UI
//! components. Everything in this crate is pure: nothing here touches a
//! document. Writing the results into a page is the job of `dashforge_ui`.
//!
//! # Overview
//!
//! - **Tokens**: Material 3 colors, spacing, typography, shape, elevation and
//!   component tables ([`tokens`])
//! - **Themes**: built-in [`light_theme`] and [`dark_theme`], plus
//!   [`create_theme`] / [`merge_themes`] for custom layers
//! - **Projection**: [`generate_css_vars`] flattens a theme into `--df-*`
//!   custom properties; [`utility_css`] derives `.bg-*`/`.text-*`/`.border-*`
//!   rules
//!
//! # Quick Start
//!
//! ```rust
//! use dashforge_theme::{create_light_theme, generate_css_vars, PartialTheme};
//!
//! let brand = create_light_theme(&PartialTheme::new().name("brand").color("primary", "#ff6b35"));
//! let vars = generate_css_vars(&brand);
//! assert_eq!(vars["--df-color-primary"], "#ff6b35");
//! ```

pub mod css;
pub mod merge;
pub mod palette;
pub mod stylesheet;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod utilities;

pub use css::{generate_css_vars, CssVarMap, VAR_PREFIX};
pub use merge::{create_dark_theme, create_light_theme, create_theme, merge_themes};
pub use palette::{validate_palette, Companion, PaletteWarning};
pub use theme::{ColorPalette, ComponentTokens, PartialTheme, Shade, Theme, TokenScale, TypeScale};
pub use themes::{dark_theme, light_theme, ThemeName, UnknownThemeName};
pub use tokens::TokenCatalog;
pub use utilities::{utility_css, UTILITY_MARKER};

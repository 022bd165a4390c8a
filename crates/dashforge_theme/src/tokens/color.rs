//! Color tokens for theming
//!
//! Material Design 3 palettes for the light and dark schemes. Values are CSS
//! hex strings so they can be written into custom properties unchanged.

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Primary
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,

    // Secondary
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,

    // Tertiary
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,

    // Error
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,

    // Neutral
    Neutral,
    OnNeutral,
    NeutralVariant,
    OnNeutralVariant,

    // Surface
    Background,
    Surface,
    SurfaceDim,
    SurfaceBright,
    OnSurface,
    OnSurfaceVariant,

    // Text
    Text,
    TextSecondary,
    TextTertiary,

    // Outline
    Outline,
    OutlineVariant,
}

impl ColorRole {
    /// Every role, in palette order.
    pub const ALL: [ColorRole; 31] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::PrimaryContainer,
        ColorRole::OnPrimaryContainer,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::SecondaryContainer,
        ColorRole::OnSecondaryContainer,
        ColorRole::Tertiary,
        ColorRole::OnTertiary,
        ColorRole::TertiaryContainer,
        ColorRole::OnTertiaryContainer,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::ErrorContainer,
        ColorRole::OnErrorContainer,
        ColorRole::Neutral,
        ColorRole::OnNeutral,
        ColorRole::NeutralVariant,
        ColorRole::OnNeutralVariant,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::SurfaceDim,
        ColorRole::SurfaceBright,
        ColorRole::OnSurface,
        ColorRole::OnSurfaceVariant,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::TextTertiary,
        ColorRole::Outline,
        ColorRole::OutlineVariant,
    ];

    /// Stable kebab-case key used in palettes and CSS variable names.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "on-primary",
            ColorRole::PrimaryContainer => "primary-container",
            ColorRole::OnPrimaryContainer => "on-primary-container",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "on-secondary",
            ColorRole::SecondaryContainer => "secondary-container",
            ColorRole::OnSecondaryContainer => "on-secondary-container",
            ColorRole::Tertiary => "tertiary",
            ColorRole::OnTertiary => "on-tertiary",
            ColorRole::TertiaryContainer => "tertiary-container",
            ColorRole::OnTertiaryContainer => "on-tertiary-container",
            ColorRole::Error => "error",
            ColorRole::OnError => "on-error",
            ColorRole::ErrorContainer => "error-container",
            ColorRole::OnErrorContainer => "on-error-container",
            ColorRole::Neutral => "neutral",
            ColorRole::OnNeutral => "on-neutral",
            ColorRole::NeutralVariant => "neutral-variant",
            ColorRole::OnNeutralVariant => "on-neutral-variant",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceDim => "surface-dim",
            ColorRole::SurfaceBright => "surface-bright",
            ColorRole::OnSurface => "on-surface",
            ColorRole::OnSurfaceVariant => "on-surface-variant",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "text-secondary",
            ColorRole::TextTertiary => "text-tertiary",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outline-variant",
        }
    }

    /// The foreground role paired with a brand role, if any.
    ///
    /// Built-in themes store these brand roles as shade records carrying
    /// their `on-` color.
    pub fn on_role(self) -> Option<ColorRole> {
        match self {
            ColorRole::Primary => Some(ColorRole::OnPrimary),
            ColorRole::Secondary => Some(ColorRole::OnSecondary),
            ColorRole::Tertiary => Some(ColorRole::OnTertiary),
            ColorRole::Error => Some(ColorRole::OnError),
            _ => None,
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTokens {
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub primary_container: &'static str,
    pub on_primary_container: &'static str,

    pub secondary: &'static str,
    pub on_secondary: &'static str,
    pub secondary_container: &'static str,
    pub on_secondary_container: &'static str,

    pub tertiary: &'static str,
    pub on_tertiary: &'static str,
    pub tertiary_container: &'static str,
    pub on_tertiary_container: &'static str,

    pub error: &'static str,
    pub on_error: &'static str,
    pub error_container: &'static str,
    pub on_error_container: &'static str,

    pub neutral: &'static str,
    pub on_neutral: &'static str,
    pub neutral_variant: &'static str,
    pub on_neutral_variant: &'static str,

    pub background: &'static str,
    pub surface: &'static str,
    pub surface_dim: &'static str,
    pub surface_bright: &'static str,
    pub on_surface: &'static str,
    pub on_surface_variant: &'static str,

    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,

    pub outline: &'static str,
    pub outline_variant: &'static str,
}

impl ColorTokens {
    /// MD3 baseline light palette (brand purple `#6750a4`)
    pub const fn light() -> Self {
        Self {
            primary: "#6750a4",
            on_primary: "#ffffff",
            primary_container: "#eaddff",
            on_primary_container: "#21005e",
            secondary: "#625b71",
            on_secondary: "#ffffff",
            secondary_container: "#e8def8",
            on_secondary_container: "#1d192b",
            tertiary: "#7d5260",
            on_tertiary: "#ffffff",
            tertiary_container: "#ffd8e4",
            on_tertiary_container: "#31111d",
            error: "#b3261e",
            on_error: "#ffffff",
            error_container: "#f9dedc",
            on_error_container: "#410e0b",
            neutral: "#1c1b1f",
            on_neutral: "#ffffff",
            neutral_variant: "#49454e",
            on_neutral_variant: "#ffffff",
            background: "#fffbfe",
            surface: "#fffbfe",
            surface_dim: "#ded8e1",
            surface_bright: "#fffbfe",
            on_surface: "#1c1b1f",
            on_surface_variant: "#49454e",
            text: "#1c1b1f",
            text_secondary: "#49454e",
            text_tertiary: "#79747e",
            outline: "#79747e",
            outline_variant: "#cac7d0",
        }
    }

    /// MD3 baseline dark palette
    pub const fn dark() -> Self {
        Self {
            primary: "#d0bcff",
            on_primary: "#371e55",
            primary_container: "#4f378b",
            on_primary_container: "#eaddff",
            secondary: "#ccc7d8",
            on_secondary: "#312e42",
            secondary_container: "#4a4458",
            on_secondary_container: "#e8def8",
            tertiary: "#f0b6cd",
            on_tertiary: "#492532",
            tertiary_container: "#633b48",
            on_tertiary_container: "#ffd8e4",
            error: "#f2b8b5",
            on_error: "#601410",
            error_container: "#8c1d18",
            on_error_container: "#f9dedc",
            neutral: "#e6e1e5",
            on_neutral: "#313033",
            neutral_variant: "#cac7d0",
            on_neutral_variant: "#49454e",
            background: "#1c1b1f",
            surface: "#1c1b1f",
            surface_dim: "#0f0d13",
            surface_bright: "#36343b",
            on_surface: "#e6e1e5",
            on_surface_variant: "#cac7d0",
            text: "#e6e1e5",
            text_secondary: "#cac7d0",
            text_tertiary: "#b0adb8",
            outline: "#938f99",
            outline_variant: "#49454e",
        }
    }

    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::PrimaryContainer => self.primary_container,
            ColorRole::OnPrimaryContainer => self.on_primary_container,
            ColorRole::Secondary => self.secondary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::SecondaryContainer => self.secondary_container,
            ColorRole::OnSecondaryContainer => self.on_secondary_container,
            ColorRole::Tertiary => self.tertiary,
            ColorRole::OnTertiary => self.on_tertiary,
            ColorRole::TertiaryContainer => self.tertiary_container,
            ColorRole::OnTertiaryContainer => self.on_tertiary_container,
            ColorRole::Error => self.error,
            ColorRole::OnError => self.on_error,
            ColorRole::ErrorContainer => self.error_container,
            ColorRole::OnErrorContainer => self.on_error_container,
            ColorRole::Neutral => self.neutral,
            ColorRole::OnNeutral => self.on_neutral,
            ColorRole::NeutralVariant => self.neutral_variant,
            ColorRole::OnNeutralVariant => self.on_neutral_variant,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::SurfaceDim => self.surface_dim,
            ColorRole::SurfaceBright => self.surface_bright,
            ColorRole::OnSurface => self.on_surface,
            ColorRole::OnSurfaceVariant => self.on_surface_variant,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextTertiary => self.text_tertiary,
            ColorRole::Outline => self.outline,
            ColorRole::OutlineVariant => self.outline_variant,
        }
    }

    /// `(key, value)` pairs in palette order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        ColorRole::ALL
            .iter()
            .map(move |role| (role.key(), self.get(*role)))
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

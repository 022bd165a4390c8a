//! Shape tokens (corner radii)

use crate::theme::TokenScale;

/// Corner radius keys. The key doubles as the CSS variable suffix.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShapeToken {
    None,
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Full,
}

impl ShapeToken {
    pub const ALL: [ShapeToken; 7] = [
        ShapeToken::None,
        ShapeToken::ExtraSmall,
        ShapeToken::Small,
        ShapeToken::Medium,
        ShapeToken::Large,
        ShapeToken::ExtraLarge,
        ShapeToken::Full,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ShapeToken::None => "corner-none",
            ShapeToken::ExtraSmall => "corner-extra-small",
            ShapeToken::Small => "corner-small",
            ShapeToken::Medium => "corner-medium",
            ShapeToken::Large => "corner-large",
            ShapeToken::ExtraLarge => "corner-extra-large",
            ShapeToken::Full => "corner-full",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeTokens {
    pub corner_none: &'static str,
    pub corner_extra_small: &'static str,
    pub corner_small: &'static str,
    pub corner_medium: &'static str,
    pub corner_large: &'static str,
    pub corner_extra_large: &'static str,
    pub corner_full: &'static str,
}

impl ShapeTokens {
    pub fn get(&self, token: ShapeToken) -> &'static str {
        match token {
            ShapeToken::None => self.corner_none,
            ShapeToken::ExtraSmall => self.corner_extra_small,
            ShapeToken::Small => self.corner_small,
            ShapeToken::Medium => self.corner_medium,
            ShapeToken::Large => self.corner_large,
            ShapeToken::ExtraLarge => self.corner_extra_large,
            ShapeToken::Full => self.corner_full,
        }
    }

    pub fn to_scale(&self) -> TokenScale {
        ShapeToken::ALL
            .iter()
            .map(|t| (t.key().to_string(), self.get(*t).to_string()))
            .collect()
    }
}

impl Default for ShapeTokens {
    fn default() -> Self {
        Self {
            corner_none: "0px",
            corner_extra_small: "4px",
            corner_small: "8px",
            corner_medium: "12px",
            corner_large: "16px",
            corner_extra_large: "28px",
            corner_full: "9999px",
        }
    }
}

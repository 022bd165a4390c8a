//! Typography tokens (MD3 type scale)

use serde::{Deserialize, Serialize};

use crate::theme::TypeScale;

/// Body font stack
pub const FONT_FAMILY: &str = "Roboto, ui-sans-serif, system-ui, -apple-system, \"Segoe UI\", \"Helvetica Neue\", Arial, sans-serif";

/// One typographic style
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: String,
    pub letter_spacing: String,
}

impl TypographyStyle {
    pub fn new(
        font_size: impl Into<String>,
        font_weight: u16,
        line_height: impl Into<String>,
        letter_spacing: impl Into<String>,
    ) -> Self {
        Self {
            font_size: font_size.into(),
            font_weight,
            line_height: line_height.into(),
            letter_spacing: letter_spacing.into(),
        }
    }
}

/// The fifteen MD3 roles: display, headline, title, body and label in three sizes each
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypeRole {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

impl TypeRole {
    pub const ALL: [TypeRole; 15] = [
        TypeRole::DisplayLarge,
        TypeRole::DisplayMedium,
        TypeRole::DisplaySmall,
        TypeRole::HeadlineLarge,
        TypeRole::HeadlineMedium,
        TypeRole::HeadlineSmall,
        TypeRole::TitleLarge,
        TypeRole::TitleMedium,
        TypeRole::TitleSmall,
        TypeRole::BodyLarge,
        TypeRole::BodyMedium,
        TypeRole::BodySmall,
        TypeRole::LabelLarge,
        TypeRole::LabelMedium,
        TypeRole::LabelSmall,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TypeRole::DisplayLarge => "display-large",
            TypeRole::DisplayMedium => "display-medium",
            TypeRole::DisplaySmall => "display-small",
            TypeRole::HeadlineLarge => "headline-large",
            TypeRole::HeadlineMedium => "headline-medium",
            TypeRole::HeadlineSmall => "headline-small",
            TypeRole::TitleLarge => "title-large",
            TypeRole::TitleMedium => "title-medium",
            TypeRole::TitleSmall => "title-small",
            TypeRole::BodyLarge => "body-large",
            TypeRole::BodyMedium => "body-medium",
            TypeRole::BodySmall => "body-small",
            TypeRole::LabelLarge => "label-large",
            TypeRole::LabelMedium => "label-medium",
            TypeRole::LabelSmall => "label-small",
        }
    }

    /// `(font-size, weight, line-height, letter-spacing)`
    const fn values(self) -> (&'static str, u16, &'static str, &'static str) {
        match self {
            TypeRole::DisplayLarge => ("57px", 400, "64px", "0px"),
            TypeRole::DisplayMedium => ("45px", 400, "52px", "0px"),
            TypeRole::DisplaySmall => ("36px", 400, "44px", "0px"),
            TypeRole::HeadlineLarge => ("32px", 400, "40px", "0px"),
            TypeRole::HeadlineMedium => ("28px", 400, "36px", "0px"),
            TypeRole::HeadlineSmall => ("24px", 400, "32px", "0px"),
            TypeRole::TitleLarge => ("22px", 500, "28px", "0px"),
            TypeRole::TitleMedium => ("16px", 500, "24px", "0.15px"),
            TypeRole::TitleSmall => ("14px", 500, "20px", "0.1px"),
            TypeRole::BodyLarge => ("16px", 400, "24px", "0.5px"),
            TypeRole::BodyMedium => ("14px", 400, "20px", "0.25px"),
            TypeRole::BodySmall => ("12px", 400, "16px", "0.4px"),
            TypeRole::LabelLarge => ("14px", 500, "20px", "0.1px"),
            TypeRole::LabelMedium => ("12px", 500, "16px", "0.5px"),
            TypeRole::LabelSmall => ("11px", 500, "16px", "0.5px"),
        }
    }
}

/// Complete type scale
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypographyTokens;

impl TypographyTokens {
    pub fn get(&self, role: TypeRole) -> TypographyStyle {
        let (size, weight, line_height, letter_spacing) = role.values();
        TypographyStyle::new(size, weight, line_height, letter_spacing)
    }

    pub fn to_scale(&self) -> TypeScale {
        TypeRole::ALL
            .iter()
            .map(|role| (role.key().to_string(), self.get(*role)))
            .collect()
    }
}

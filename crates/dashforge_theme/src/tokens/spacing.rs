//! Spacing tokens (4px base grid)

use crate::theme::TokenScale;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
            SpacingToken::Xxl => "2xl",
        }
    }
}

/// Complete spacing scale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpacingTokens {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> &'static str {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }

    /// Convert to the keyed scale stored on a theme
    pub fn to_scale(&self) -> TokenScale {
        SpacingToken::ALL
            .iter()
            .map(|t| (t.key().to_string(), self.get(*t).to_string()))
            .collect()
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: "4px",
            sm: "8px",
            md: "16px",
            lg: "24px",
            xl: "32px",
            xxl: "48px",
        }
    }
}

//! Elevation tokens (box shadows)

use crate::theme::TokenScale;

/// Elevation levels, `level-0` (flat) through `level-5`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ElevationToken {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl ElevationToken {
    pub const ALL: [ElevationToken; 6] = [
        ElevationToken::Level0,
        ElevationToken::Level1,
        ElevationToken::Level2,
        ElevationToken::Level3,
        ElevationToken::Level4,
        ElevationToken::Level5,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ElevationToken::Level0 => "level-0",
            ElevationToken::Level1 => "level-1",
            ElevationToken::Level2 => "level-2",
            ElevationToken::Level3 => "level-3",
            ElevationToken::Level4 => "level-4",
            ElevationToken::Level5 => "level-5",
        }
    }

    /// Numeric level, used for the `elevation-<n>` alias tokens
    pub fn level(self) -> u8 {
        match self {
            ElevationToken::Level0 => 0,
            ElevationToken::Level1 => 1,
            ElevationToken::Level2 => 2,
            ElevationToken::Level3 => 3,
            ElevationToken::Level4 => 4,
            ElevationToken::Level5 => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevationTokens {
    pub level_0: &'static str,
    pub level_1: &'static str,
    pub level_2: &'static str,
    pub level_3: &'static str,
    pub level_4: &'static str,
    pub level_5: &'static str,
}

impl ElevationTokens {
    pub fn get(&self, token: ElevationToken) -> &'static str {
        match token {
            ElevationToken::Level0 => self.level_0,
            ElevationToken::Level1 => self.level_1,
            ElevationToken::Level2 => self.level_2,
            ElevationToken::Level3 => self.level_3,
            ElevationToken::Level4 => self.level_4,
            ElevationToken::Level5 => self.level_5,
        }
    }

    pub fn to_scale(&self) -> TokenScale {
        ElevationToken::ALL
            .iter()
            .map(|t| (t.key().to_string(), self.get(*t).to_string()))
            .collect()
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self {
            level_0: "none",
            level_1: "0px 1px 3px rgba(0, 0, 0, 0.12), 0px 1px 2px rgba(0, 0, 0, 0.24)",
            level_2: "0px 3px 6px rgba(0, 0, 0, 0.16), 0px 3px 6px rgba(0, 0, 0, 0.23)",
            level_3: "0px 10px 20px rgba(0, 0, 0, 0.19), 0px 6px 6px rgba(0, 0, 0, 0.23)",
            level_4: "0px 15px 25px rgba(0, 0, 0, 0.15), 0px 10px 10px rgba(0, 0, 0, 0.05)",
            level_5: "0px 20px 40px rgba(0, 0, 0, 0.2)",
        }
    }
}

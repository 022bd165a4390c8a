//! Component tokens
//!
//! Sizing and styling tables consumed by the button and icon components.
//! They are rendered as `:root` variable blocks by [`crate::stylesheet`].

use serde::Serialize;

/// Size keys shared by components
pub const SIZES: [&str; 5] = ["x-small", "small", "default", "large", "x-large"];

/// Interaction state overlay opacities
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonStates {
    pub focus: f32,
    pub hover: f32,
    pub active: f32,
}

/// Button tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTokens {
    pub states: ButtonStates,
    /// Font sizes indexed like [`SIZES`]
    pub font_sizes: [&'static str; 5],
    /// Heights indexed like [`SIZES`]
    pub height: [&'static str; 5],
    pub border_radius: &'static str,
    pub rounded_border_radius: &'static str,
    pub border_style: &'static str,
    pub border_width: &'static str,
    pub font_weight: u16,
    pub letter_spacing: &'static str,
    pub text_transform: &'static str,
    pub transition_duration: &'static str,
}

impl ButtonTokens {
    /// `(name, value)` pairs without the `--df-` prefix, in stylesheet order
    pub fn variables(&self) -> Vec<(String, String)> {
        let mut vars = vec![
            ("btn-state-focus".to_string(), self.states.focus.to_string()),
            ("btn-state-hover".to_string(), self.states.hover.to_string()),
            ("btn-state-active".to_string(), self.states.active.to_string()),
        ];
        for (size, value) in SIZES.iter().zip(self.font_sizes) {
            vars.push((format!("btn-font-size-{size}"), value.to_string()));
        }
        for (size, value) in SIZES.iter().zip(self.height) {
            vars.push((format!("btn-height-{size}"), value.to_string()));
        }
        vars.extend([
            ("btn-border-radius".to_string(), self.border_radius.to_string()),
            (
                "btn-rounded-border-radius".to_string(),
                self.rounded_border_radius.to_string(),
            ),
            ("btn-border-style".to_string(), self.border_style.to_string()),
            ("btn-border-width".to_string(), self.border_width.to_string()),
            ("btn-font-weight".to_string(), self.font_weight.to_string()),
            ("btn-letter-spacing".to_string(), self.letter_spacing.to_string()),
            ("btn-text-transform".to_string(), self.text_transform.to_string()),
            (
                "btn-transition-duration".to_string(),
                self.transition_duration.to_string(),
            ),
        ]);
        vars
    }
}

impl Default for ButtonTokens {
    fn default() -> Self {
        Self {
            states: ButtonStates {
                focus: 0.12,
                hover: 0.08,
                active: 0.12,
            },
            font_sizes: ["0.6875rem", "0.75rem", "0.875rem", "1rem", "1.125rem"],
            height: ["2rem", "2.25rem", "2.5rem", "3rem", "3.5rem"],
            border_radius: "4px",
            rounded_border_radius: "28px",
            border_style: "solid",
            border_width: "1px",
            font_weight: 500,
            letter_spacing: "0.1em",
            text_transform: "uppercase",
            transition_duration: "0.28s",
        }
    }
}

/// Icon tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconTokens {
    pub class: &'static str,
    pub prefix: &'static str,
    pub font_sizes: [&'static str; 5],
}

impl IconTokens {
    pub fn variables(&self) -> Vec<(String, String)> {
        SIZES
            .iter()
            .zip(self.font_sizes)
            .map(|(size, value)| (format!("icon-font-size-{size}"), value.to_string()))
            .collect()
    }
}

impl Default for IconTokens {
    fn default() -> Self {
        Self {
            class: "df-icon",
            prefix: "df-icon-",
            font_sizes: ["1rem", "1.125rem", "1.5rem", "2rem", "3rem"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variables_cover_every_size() {
        let vars = ButtonTokens::default().variables();
        for size in SIZES {
            assert!(vars.iter().any(|(k, _)| *k == format!("btn-height-{size}")));
            assert!(vars.iter().any(|(k, _)| *k == format!("btn-font-size-{size}")));
        }
        assert!(vars.contains(&("btn-font-weight".to_string(), "500".to_string())));
    }

    #[test]
    fn icon_default_size_is_24px() {
        let vars = IconTokens::default().variables();
        assert!(vars.contains(&("icon-font-size-default".to_string(), "1.5rem".to_string())));
    }
}

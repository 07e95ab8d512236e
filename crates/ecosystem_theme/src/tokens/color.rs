//! Color tokens for theming

use serde::{Deserialize, Serialize};

macro_rules! color_tokens {
    ($($variant:ident => $field:ident, $css:literal, $fallback:literal;)+) => {
        /// Semantic color token keys for dynamic access
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum ColorToken {
            $($variant,)+
        }

        impl ColorToken {
            /// Every color token, in CSS emission order
            pub const ALL: &'static [ColorToken] = &[$(ColorToken::$variant,)+];

            /// CSS custom property name
            pub fn css_var(self) -> &'static str {
                match self {
                    $(ColorToken::$variant => $css,)+
                }
            }

            /// Field name in [`ColorTokens`] and in TOML token tables
            pub fn field(self) -> &'static str {
                match self {
                    $(ColorToken::$variant => stringify!($field),)+
                }
            }

            pub fn from_css_var(name: &str) -> Option<Self> {
                match name {
                    $($css => Some(ColorToken::$variant),)+
                    _ => None,
                }
            }
        }

        /// Complete set of semantic color tokens, as CSS color strings
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ColorTokens {
            $(pub $field: String,)+
        }

        impl ColorTokens {
            /// Get a color by token key
            pub fn get(&self, token: ColorToken) -> &str {
                match token {
                    $(ColorToken::$variant => &self.$field,)+
                }
            }

            /// Overwrite a color by token key
            pub fn set(&mut self, token: ColorToken, value: impl Into<String>) {
                match token {
                    $(ColorToken::$variant => self.$field = value.into(),)+
                }
            }
        }

        impl Default for ColorTokens {
            fn default() -> Self {
                // Studio light
                Self {
                    $($field: $fallback.to_string(),)+
                }
            }
        }
    };
}

color_tokens! {
    // Surfaces
    Background => background, "--color-background", "#ffffff";
    Foreground => foreground, "--color-foreground", "#0f172a";
    Card => card, "--color-card", "#ffffff";
    CardForeground => card_foreground, "--color-card-foreground", "#0f172a";
    Popover => popover, "--color-popover", "#ffffff";
    PopoverForeground => popover_foreground, "--color-popover-foreground", "#0f172a";

    // Brand
    Primary => primary, "--color-primary", "#4f46e5";
    PrimaryForeground => primary_foreground, "--color-primary-foreground", "#ffffff";
    PrimaryHover => primary_hover, "--color-primary-hover", "#3f35e2";
    PrimaryActive => primary_active, "--color-primary-active", "#2f25d2";
    Secondary => secondary, "--color-secondary", "#0ea5e9";
    SecondaryForeground => secondary_foreground, "--color-secondary-foreground", "#000000";
    SecondaryHover => secondary_hover, "--color-secondary-hover", "#0d93d0";
    SecondaryActive => secondary_active, "--color-secondary-active", "#0b7fb3";

    // Muted and accent
    Muted => muted, "--color-muted", "#f1f5f9";
    MutedForeground => muted_foreground, "--color-muted-foreground", "#64748b";
    Accent => accent, "--color-accent", "#f59e0b";
    AccentForeground => accent_foreground, "--color-accent-foreground", "#000000";
    AccentHover => accent_hover, "--color-accent-hover", "#dd8c09";
    AccentSubtle => accent_subtle, "--color-accent-subtle", "#fef3dc";

    // Status
    Destructive => destructive, "--color-destructive", "#dc2626";
    DestructiveForeground => destructive_foreground, "--color-destructive-foreground", "#ffffff";
    Success => success, "--color-success", "#16a34a";
    Warning => warning, "--color-warning", "#d97706";

    // Chrome
    Border => border, "--color-border", "#e2e8f0";
    Input => input, "--color-input", "#e2e8f0";
    Ring => ring, "--color-ring", "#4f46e5";
    Selection => selection, "--color-selection", "#d1cffa";
    Link => link, "--color-link", "#443ae4";
    LinkHover => link_hover, "--color-link-hover", "#2a1fc3";

    // Data visualization
    Chart1 => chart_1, "--color-chart-1", "#4f46e5";
    Chart2 => chart_2, "--color-chart-2", "#46e583";
    Chart3 => chart_3, "--color-chart-3", "#0ea5e9";
    Chart4 => chart_4, "--color-chart-4", "#f59e0b";
    Chart5 => chart_5, "--color-chart-5", "#f5370b";

    // Brand effects
    Glow => glow, "--glow", "0 0 24px rgba(79, 70, 229, 0.35)";
}

impl ColorTokens {
    /// `(css-var, value)` pairs in emission order
    pub fn css_vars(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ColorToken::ALL
            .iter()
            .map(move |token| (token.css_var(), self.get(*token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_names_are_unique_and_prefixed() {
        let mut names: Vec<_> = ColorToken::ALL.iter().map(|t| t.css_var()).collect();
        assert!(names
            .iter()
            .filter(|n| **n != "--glow")
            .all(|n| n.starts_with("--color-")));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_field_names_match_serde() {
        let value = toml::Value::try_from(ColorTokens::default()).unwrap();
        for token in ColorToken::ALL {
            assert!(value.get(token.field()).is_some(), "{token:?}");
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut tokens = ColorTokens::default();
        tokens.set(ColorToken::Ring, "#123456");
        assert_eq!(tokens.get(ColorToken::Ring), "#123456");
        assert_eq!(tokens.ring, "#123456");
    }

    #[test]
    fn test_from_css_var() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_css_var(token.css_var()), Some(*token));
        }
        assert_eq!(ColorToken::from_css_var("--color-nope"), None);
    }

    #[test]
    fn test_partial_table_falls_back() {
        let tokens: ColorTokens = toml::from_str(r##"primary = "#ff0000""##).unwrap();
        assert_eq!(tokens.primary, "#ff0000");
        assert_eq!(tokens.background, ColorTokens::default().background);
    }
}

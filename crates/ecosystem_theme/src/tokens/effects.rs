//! Blur and shadow tokens
//!
//! The brand glow derives from the primary, so it lives with the colors
//! as [`ColorToken::Glow`](super::ColorToken::Glow).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTokens {
    pub blur_sm: String,
    pub blur_md: String,
    pub blur_lg: String,
    pub shadow_sm: String,
    pub shadow_md: String,
    pub shadow_lg: String,
}

impl EffectTokens {
    pub fn css_vars(&self) -> [(&'static str, &str); 6] {
        [
            ("--blur-sm", &self.blur_sm),
            ("--blur-md", &self.blur_md),
            ("--blur-lg", &self.blur_lg),
            ("--shadow-sm", &self.shadow_sm),
            ("--shadow-md", &self.shadow_md),
            ("--shadow-lg", &self.shadow_lg),
        ]
    }

    /// Shadows for light surfaces
    pub fn light() -> Self {
        Self {
            shadow_sm: "0 1px 2px rgba(15, 23, 42, 0.06)".into(),
            shadow_md: "0 4px 12px rgba(15, 23, 42, 0.08)".into(),
            shadow_lg: "0 12px 32px rgba(15, 23, 42, 0.12)".into(),
            ..Self::blur_defaults()
        }
    }

    /// Heavier shadows for dark surfaces
    pub fn dark() -> Self {
        Self {
            shadow_sm: "0 1px 2px rgba(0, 0, 0, 0.4)".into(),
            shadow_md: "0 4px 12px rgba(0, 0, 0, 0.5)".into(),
            shadow_lg: "0 12px 32px rgba(0, 0, 0, 0.6)".into(),
            ..Self::blur_defaults()
        }
    }

    fn blur_defaults() -> Self {
        Self {
            blur_sm: "4px".into(),
            blur_md: "12px".into(),
            blur_lg: "24px".into(),
            shadow_sm: String::new(),
            shadow_md: String::new(),
            shadow_lg: String::new(),
        }
    }
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self::light()
    }
}

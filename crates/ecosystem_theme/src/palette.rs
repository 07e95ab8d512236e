//! Custom color palettes and saved presets

use crate::derived::{ColorChangeRequest, DerivedTokens};
use crate::theme::ThemeMode;
use crate::tokens::FontTheme;
use chrono::{DateTime, Utc};
use ecosystem_core::color::{
    generate_color_scale, get_optimal_foreground, meets_contrast_requirements, ColorScale,
    ContrastLevel, TextSize,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A custom palette for one theme and mode
///
/// Only constructible from a [`ColorChangeRequest`], so the foregrounds,
/// scale and derived tokens always match the base colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    primary: String,
    primary_foreground: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secondary_foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accent_foreground: Option<String>,
    scale: ColorScale,
    #[serde(default)]
    derived_tokens: DerivedTokens,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ColorPalette {
    /// Build a palette, deriving everything from the requested base colors
    pub fn from_request(request: &ColorChangeRequest, mode: ThemeMode) -> Self {
        let foreground = |hex: &Option<String>| hex.as_deref().map(get_optimal_foreground);
        Self {
            primary: request.primary.clone(),
            primary_foreground: get_optimal_foreground(&request.primary),
            secondary: request.secondary.clone(),
            secondary_foreground: foreground(&request.secondary),
            accent: request.accent.clone(),
            accent_foreground: foreground(&request.accent),
            scale: generate_color_scale(&request.primary),
            derived_tokens: request.derive_tokens(mode),
            name: None,
            description: None,
        }
    }

    pub fn with_label(mut self, name: Option<String>, description: Option<String>) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    /// The base colors this palette was built from
    pub fn request(&self) -> ColorChangeRequest {
        ColorChangeRequest {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            accent: self.accent.clone(),
        }
    }

    /// Recompute every derived field from the base colors, keeping the label
    pub fn rederive(&self, mode: ThemeMode) -> Self {
        Self::from_request(&self.request(), mode)
            .with_label(self.name.clone(), self.description.clone())
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn primary_foreground(&self) -> &str {
        &self.primary_foreground
    }

    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    pub fn secondary_foreground(&self) -> Option<&str> {
        self.secondary_foreground.as_deref()
    }

    pub fn accent(&self) -> Option<&str> {
        self.accent.as_deref()
    }

    pub fn accent_foreground(&self) -> Option<&str> {
        self.accent_foreground.as_deref()
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn derived_tokens(&self) -> &DerivedTokens {
        &self.derived_tokens
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Input to a wholesale palette replacement
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteUpdate {
    pub colors: ColorChangeRequest,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<ColorChangeRequest> for PaletteUpdate {
    fn from(colors: ColorChangeRequest) -> Self {
        Self {
            colors,
            name: None,
            description: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    #[default]
    Custom,
    Builtin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
}

impl Accessibility {
    /// Normal-text compliance of a color against its optimal foreground
    pub fn of(hex: &str) -> Self {
        let foreground = get_optimal_foreground(hex);
        Self {
            wcag_aa: meets_contrast_requirements(&foreground, hex, ContrastLevel::Aa, TextSize::Normal),
            wcag_aaa: meets_contrast_requirements(
                &foreground,
                hex,
                ContrastLevel::Aaa,
                TextSize::Normal,
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteMetadata {
    pub accessibility: Accessibility,
    pub mood: Vec<String>,
}

/// A named, user-created palette preset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub colors: ColorChangeRequest,
    #[serde(default)]
    pub category: PresetCategory,
    #[serde(default)]
    pub metadata: PaletteMetadata,
    pub created_at: DateTime<Utc>,
}

/// What a caller supplies to save a palette
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteDraft {
    pub name: String,
    pub description: Option<String>,
    pub colors: ColorChangeRequest,
    pub mood: Vec<String>,
}

impl PaletteDraft {
    pub(crate) fn into_saved(self, id: String, created_at: DateTime<Utc>) -> SavedPalette {
        let accessibility = Accessibility::of(&self.colors.primary);
        SavedPalette {
            id,
            name: self.name,
            description: self.description,
            colors: self.colors,
            category: PresetCategory::Custom,
            metadata: PaletteMetadata {
                accessibility,
                mood: self.mood,
            },
            created_at,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontMetadata {
    pub mood: Vec<String>,
}

/// A named, user-created font pairing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFontTheme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fonts: FontTheme,
    #[serde(default)]
    pub category: PresetCategory,
    #[serde(default)]
    pub metadata: FontMetadata,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontThemeDraft {
    pub name: String,
    pub description: Option<String>,
    pub fonts: FontTheme,
    pub mood: Vec<String>,
}

impl FontThemeDraft {
    pub(crate) fn into_saved(self, id: String, created_at: DateTime<Utc>) -> SavedFontTheme {
        SavedFontTheme {
            id,
            name: self.name,
            description: self.description,
            fonts: self.fonts,
            category: PresetCategory::Custom,
            metadata: FontMetadata { mood: self.mood },
            created_at,
        }
    }
}

/// `{prefix}-{millis}-{random}` preset id
pub fn preset_id(prefix: &str, now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, now.timestamp_millis(), &suffix[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_request_is_consistent() {
        let palette = ColorPalette::from_request(
            &ColorChangeRequest::new("#ff0000").with_accent("#00ffff"),
            ThemeMode::Light,
        );
        assert_eq!(&palette.scale()[500], "#ff0000");
        assert_eq!(palette.primary_foreground(), "#000000");
        assert_eq!(palette.accent_foreground(), Some("#000000"));
        assert_eq!(palette.secondary(), None);
        assert!(palette.derived_tokens().contains_key("--color-accent-subtle"));
        assert!(!palette.derived_tokens().contains_key("--color-secondary-hover"));
    }

    #[test]
    fn test_rederive_keeps_label() {
        let palette = ColorPalette::from_request(&ColorChangeRequest::new("#3b82f6"), ThemeMode::Light)
            .with_label(Some("Ocean".into()), None);
        let dark = palette.rederive(ThemeMode::Dark);
        assert_eq!(dark.name(), Some("Ocean"));
        assert_eq!(dark.primary(), "#3b82f6");
        assert_ne!(dark.derived_tokens(), palette.derived_tokens());
    }

    #[test]
    fn test_palette_json_shape() {
        let palette = ColorPalette::from_request(&ColorChangeRequest::new("#ff0000"), ThemeMode::Dark);
        let value = serde_json::to_value(&palette).unwrap();
        assert_eq!(value["primaryForeground"], "#000000");
        assert_eq!(value["scale"]["500"], "#ff0000");
        assert!(value.get("secondary").is_none());
        assert!(value["derivedTokens"]["--color-ring"].is_string());

        let back: ColorPalette = serde_json::from_value(value).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_accessibility_flags() {
        assert_eq!(
            Accessibility::of("#000000"),
            Accessibility {
                wcag_aa: true,
                wcag_aaa: true
            }
        );
        // 5.25:1 against black
        let red = Accessibility::of("#ff0000");
        assert!(red.wcag_aa);
        assert!(!red.wcag_aaa);
    }

    #[test]
    fn test_preset_id_shape() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let id = preset_id("palette", now);
        let parts: Vec<_> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "palette");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), 9);
        assert_ne!(preset_id("palette", now), id);
    }
}

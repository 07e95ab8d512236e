//! Customizer state and its transitions
//!
//! Everything here is side-effect free. [`crate::store::CustomizerStore`]
//! owns a [`CustomizerState`], runs these transitions, then persists and
//! notifies.

use crate::derived::ColorChangeRequest;
use crate::palette::{
    ColorPalette, FontThemeDraft, PaletteDraft, PaletteUpdate, SavedFontTheme, SavedPalette,
};
use crate::theme::{ThemeMode, ThemeName};
use crate::tokens::FontTheme;
use chrono::{DateTime, Utc};
use ecosystem_animation::{MotionPreference, MOTION_DEFAULT, MOTION_MAX, MOTION_MIN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether palettes may carry secondary and accent colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationMode {
    /// Primary color only
    #[default]
    Simple,
    /// Primary, secondary and accent
    Advanced,
}

/// Sparse theme -> mode -> palette map
pub type CustomColors = BTreeMap<ThemeName, BTreeMap<ThemeMode, ColorPalette>>;

/// The persisted customizer state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomizerState {
    motion: i32,
    prefers_reduced_motion: bool,
    customization_mode: CustomizationMode,
    custom_colors: CustomColors,
    saved_palettes: Vec<SavedPalette>,
    custom_font_themes: BTreeMap<ThemeName, FontTheme>,
    saved_font_themes: Vec<SavedFontTheme>,
}

impl Default for CustomizerState {
    fn default() -> Self {
        Self {
            motion: MOTION_DEFAULT,
            prefers_reduced_motion: false,
            customization_mode: CustomizationMode::default(),
            custom_colors: CustomColors::new(),
            saved_palettes: Vec::new(),
            custom_font_themes: BTreeMap::new(),
            saved_font_themes: Vec::new(),
        }
    }
}

impl CustomizerState {
    pub fn motion(&self) -> i32 {
        self.motion
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced_motion
    }

    pub fn customization_mode(&self) -> CustomizationMode {
        self.customization_mode
    }

    pub fn custom_colors(&self) -> &CustomColors {
        &self.custom_colors
    }

    pub fn saved_palettes(&self) -> &[SavedPalette] {
        &self.saved_palettes
    }

    pub fn saved_font_themes(&self) -> &[SavedFontTheme] {
        &self.saved_font_themes
    }

    /// Resolved motion contract for animated components
    pub fn motion_preference(&self) -> MotionPreference {
        MotionPreference::resolve(self.motion, self.prefers_reduced_motion)
    }

    /// Set the motion intensity, clamped to `[0, 10]`
    pub fn set_motion(&mut self, level: i32) {
        let clamped = level.clamp(MOTION_MIN, MOTION_MAX);
        if clamped != level {
            tracing::debug!("CustomizerState::set_motion - clamped {} to {}", level, clamped);
        }
        self.motion = clamped;
    }

    /// Mirror the system reduced-motion flag
    pub fn sync_reduced_motion(&mut self, prefers_reduced_motion: bool) {
        self.prefers_reduced_motion = prefers_reduced_motion;
    }

    pub fn set_customization_mode(&mut self, mode: CustomizationMode) {
        self.customization_mode = mode;
    }

    /// The custom palette for `(theme, mode)`, if any
    pub fn active_color_palette(&self, theme: ThemeName, mode: ThemeMode) -> Option<&ColorPalette> {
        self.custom_colors.get(&theme)?.get(&mode)
    }

    /// Replace the primary color, recomputing the scale and derived tokens
    ///
    /// In simple mode any secondary or accent on the palette is dropped.
    pub fn set_custom_primary_color(&mut self, theme: ThemeName, mode: ThemeMode, hex: &str) {
        let existing = self.active_color_palette(theme, mode);
        let mut request = match (existing, self.customization_mode) {
            (Some(palette), CustomizationMode::Advanced) => palette.request(),
            _ => ColorChangeRequest::default(),
        };
        request.primary = hex.to_string();
        self.store_palette(theme, mode, request);
    }

    /// Set the secondary color; returns `false` and does nothing in simple mode
    ///
    /// Without an existing palette, `fallback_primary` seeds the primary.
    pub fn set_custom_secondary_color(
        &mut self,
        theme: ThemeName,
        mode: ThemeMode,
        hex: &str,
        fallback_primary: &str,
    ) -> bool {
        if self.customization_mode == CustomizationMode::Simple {
            tracing::debug!("CustomizerState::set_custom_secondary_color - ignored in simple mode");
            return false;
        }
        let mut request = self.request_or(theme, mode, fallback_primary);
        request.secondary = Some(hex.to_string());
        self.store_palette(theme, mode, request);
        true
    }

    /// Set the accent color; returns `false` and does nothing in simple mode
    pub fn set_custom_accent_color(
        &mut self,
        theme: ThemeName,
        mode: ThemeMode,
        hex: &str,
        fallback_primary: &str,
    ) -> bool {
        if self.customization_mode == CustomizationMode::Simple {
            tracing::debug!("CustomizerState::set_custom_accent_color - ignored in simple mode");
            return false;
        }
        let mut request = self.request_or(theme, mode, fallback_primary);
        request.accent = Some(hex.to_string());
        self.store_palette(theme, mode, request);
        true
    }

    /// Replace the palette wholesale from up to three colors at once
    ///
    /// This is the only transition that sets the palette's name and
    /// description. Simple mode keeps the primary only.
    pub fn apply_color_palette(&mut self, theme: ThemeName, mode: ThemeMode, update: PaletteUpdate) {
        let colors = match self.customization_mode {
            CustomizationMode::Simple => update.colors.primary_only(),
            CustomizationMode::Advanced => update.colors,
        };
        let palette =
            ColorPalette::from_request(&colors, mode).with_label(update.name, update.description);
        self.custom_colors.entry(theme).or_default().insert(mode, palette);
    }

    /// Clear one mode's palette, or with `None` the whole theme entry
    pub fn reset_custom_colors(&mut self, theme: ThemeName, mode: Option<ThemeMode>) {
        match mode {
            None => {
                self.custom_colors.remove(&theme);
            }
            Some(mode) => {
                if let Some(modes) = self.custom_colors.get_mut(&theme) {
                    modes.remove(&mode);
                    if modes.is_empty() {
                        self.custom_colors.remove(&theme);
                    }
                }
            }
        }
    }

    pub fn custom_fonts(&self, theme: ThemeName) -> Option<&FontTheme> {
        self.custom_font_themes.get(&theme)
    }

    pub fn set_custom_fonts(&mut self, theme: ThemeName, fonts: FontTheme) {
        self.custom_font_themes.insert(theme, fonts);
    }

    pub fn reset_custom_fonts(&mut self, theme: ThemeName) {
        self.custom_font_themes.remove(&theme);
    }

    /// Append a new palette preset under `id`
    pub fn save_palette(&mut self, draft: PaletteDraft, id: String, created_at: DateTime<Utc>) {
        self.saved_palettes.push(draft.into_saved(id, created_at));
    }

    /// Remove a palette preset; unknown ids are ignored
    pub fn delete_palette(&mut self, id: &str) {
        self.saved_palettes.retain(|palette| palette.id != id);
    }

    /// Replace the preset list; callers supply the new order
    pub fn reorder_palettes(&mut self, palettes: Vec<SavedPalette>) {
        self.saved_palettes = palettes;
    }

    /// Apply a saved preset to `(theme, mode)`; `false` if the id is unknown
    pub fn apply_saved_palette(&mut self, id: &str, theme: ThemeName, mode: ThemeMode) -> bool {
        let Some(saved) = self.saved_palettes.iter().find(|palette| palette.id == id) else {
            return false;
        };
        let update = PaletteUpdate {
            colors: saved.colors.clone(),
            name: Some(saved.name.clone()),
            description: saved.description.clone(),
        };
        self.apply_color_palette(theme, mode, update);
        true
    }

    pub fn save_font_theme(&mut self, draft: FontThemeDraft, id: String, created_at: DateTime<Utc>) {
        self.saved_font_themes.push(draft.into_saved(id, created_at));
    }

    pub fn delete_font_theme(&mut self, id: &str) {
        self.saved_font_themes.retain(|fonts| fonts.id != id);
    }

    pub fn reorder_font_themes(&mut self, font_themes: Vec<SavedFontTheme>) {
        self.saved_font_themes = font_themes;
    }

    /// Use a saved font pairing for `theme`; `false` if the id is unknown
    pub fn apply_saved_font_theme(&mut self, id: &str, theme: ThemeName) -> bool {
        let Some(saved) = self.saved_font_themes.iter().find(|fonts| fonts.id == id) else {
            return false;
        };
        let fonts = saved.fonts.clone();
        self.set_custom_fonts(theme, fonts);
        true
    }

    /// Repair state loaded from storage
    ///
    /// Clamps motion and recomputes every palette from its base colors so
    /// derived fields match the current derivation rules.
    pub fn normalized(mut self) -> Self {
        self.set_motion(self.motion);
        for modes in self.custom_colors.values_mut() {
            for (mode, palette) in modes.iter_mut() {
                *palette = palette.rederive(*mode);
            }
        }
        self
    }

    fn request_or(&self, theme: ThemeName, mode: ThemeMode, fallback_primary: &str) -> ColorChangeRequest {
        self.active_color_palette(theme, mode)
            .map(ColorPalette::request)
            .unwrap_or_else(|| ColorChangeRequest::new(fallback_primary))
    }

    /// Rebuild the palette from `request`, keeping any existing label
    fn store_palette(&mut self, theme: ThemeName, mode: ThemeMode, request: ColorChangeRequest) {
        let (name, description) = self
            .active_color_palette(theme, mode)
            .map(|p| (p.name().map(String::from), p.description().map(String::from)))
            .unwrap_or_default();
        let palette = ColorPalette::from_request(&request, mode).with_label(name, description);
        self.custom_colors.entry(theme).or_default().insert(mode, palette);
    }
}

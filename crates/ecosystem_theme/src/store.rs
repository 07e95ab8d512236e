//! Observable, persisted stores
//!
//! Both stores are plain owned values: construct as many as needed, inject
//! them where used. Every mutation runs a state transition, writes through
//! to storage, then notifies subscribers with the new state.

use crate::customizer::{CustomizationMode, CustomizerState};
use crate::palette::{preset_id, ColorPalette, FontThemeDraft, PaletteDraft, PaletteUpdate, SavedFontTheme, SavedPalette};
use crate::persist::{
    Persistence, CUSTOMIZER_STORAGE_KEY, CUSTOMIZER_STORAGE_VERSION, THEME_STORAGE_KEY,
    THEME_STORAGE_VERSION,
};
use crate::theme::{ThemeMode, ThemeName, ThemeSelection};
use crate::themes::ThemeAssets;
use crate::tokens::FontTheme;
use chrono::Utc;
use ecosystem_animation::MotionPreference;
use ecosystem_core::{Observers, SubscriptionId};
use ecosystem_storage::Storage;
use std::sync::Arc;

/// Selected theme and color mode
#[derive(Debug)]
pub struct ThemeStore {
    selection: ThemeSelection,
    persistence: Persistence,
    observers: Observers<ThemeSelection>,
}

impl ThemeStore {
    /// Load from `storage`, falling back to the default selection
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_persistence(Persistence::new(
            storage,
            THEME_STORAGE_KEY,
            THEME_STORAGE_VERSION,
        ))
    }

    pub fn in_memory() -> Self {
        Self::with_persistence(Persistence::in_memory(THEME_STORAGE_KEY, THEME_STORAGE_VERSION))
    }

    fn with_persistence(persistence: Persistence) -> Self {
        let selection = persistence.load().unwrap_or_default();
        tracing::debug!("ThemeStore: loaded {:?}", selection);
        Self {
            selection,
            persistence,
            observers: Observers::new(),
        }
    }

    pub fn selection(&self) -> ThemeSelection {
        self.selection
    }

    pub fn theme(&self) -> ThemeName {
        self.selection.theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.selection.mode
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.commit(ThemeSelection { theme, ..self.selection });
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.commit(ThemeSelection { mode, ..self.selection });
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.selection.mode.toggle());
    }

    pub fn set_selection(&mut self, selection: ThemeSelection) {
        self.commit(selection);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeSelection) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn commit(&mut self, next: ThemeSelection) {
        if next == self.selection {
            return;
        }
        tracing::debug!("ThemeStore: {:?} -> {:?}", self.selection, next);
        self.selection = next;
        self.persistence.save(&self.selection);
        self.observers.notify(&self.selection);
    }
}

/// Motion, palettes and font preferences
#[derive(Debug)]
pub struct CustomizerStore {
    state: CustomizerState,
    persistence: Persistence,
    observers: Observers<CustomizerState>,
    assets: Arc<ThemeAssets>,
}

impl CustomizerStore {
    /// Load from `storage`; `assets` supplies base colors for seeding palettes
    pub fn new(storage: Arc<dyn Storage>, assets: Arc<ThemeAssets>) -> Self {
        Self::with_persistence(
            Persistence::new(storage, CUSTOMIZER_STORAGE_KEY, CUSTOMIZER_STORAGE_VERSION),
            assets,
        )
    }

    pub fn in_memory(assets: Arc<ThemeAssets>) -> Self {
        Self::with_persistence(
            Persistence::in_memory(CUSTOMIZER_STORAGE_KEY, CUSTOMIZER_STORAGE_VERSION),
            assets,
        )
    }

    fn with_persistence(persistence: Persistence, assets: Arc<ThemeAssets>) -> Self {
        let state = persistence
            .load::<CustomizerState>()
            .map(CustomizerState::normalized)
            .unwrap_or_default();
        Self {
            state,
            persistence,
            observers: Observers::new(),
            assets,
        }
    }

    pub fn state(&self) -> &CustomizerState {
        &self.state
    }

    pub fn motion_preference(&self) -> MotionPreference {
        self.state.motion_preference()
    }

    pub fn active_color_palette(&self, theme: ThemeName, mode: ThemeMode) -> Option<&ColorPalette> {
        self.state.active_color_palette(theme, mode)
    }

    pub fn custom_fonts(&self, theme: ThemeName) -> Option<&FontTheme> {
        self.state.custom_fonts(theme)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CustomizerState) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn set_motion(&mut self, level: i32) {
        self.update(|state| state.set_motion(level));
    }

    pub fn sync_reduced_motion(&mut self, prefers_reduced_motion: bool) {
        if self.state.prefers_reduced_motion() == prefers_reduced_motion {
            return;
        }
        self.update(|state| state.sync_reduced_motion(prefers_reduced_motion));
    }

    pub fn set_customization_mode(&mut self, mode: CustomizationMode) {
        self.update(|state| state.set_customization_mode(mode));
    }

    pub fn set_custom_primary_color(&mut self, theme: ThemeName, mode: ThemeMode, hex: &str) {
        self.update(|state| state.set_custom_primary_color(theme, mode, hex));
    }

    /// Returns `false` in simple mode, where the call is ignored
    pub fn set_custom_secondary_color(&mut self, theme: ThemeName, mode: ThemeMode, hex: &str) -> bool {
        let fallback = self.assets.primary(theme, mode).to_string();
        self.update_if(|state| state.set_custom_secondary_color(theme, mode, hex, &fallback))
    }

    /// Returns `false` in simple mode, where the call is ignored
    pub fn set_custom_accent_color(&mut self, theme: ThemeName, mode: ThemeMode, hex: &str) -> bool {
        let fallback = self.assets.primary(theme, mode).to_string();
        self.update_if(|state| state.set_custom_accent_color(theme, mode, hex, &fallback))
    }

    pub fn apply_color_palette(&mut self, theme: ThemeName, mode: ThemeMode, update: impl Into<PaletteUpdate>) {
        let update = update.into();
        self.update(|state| state.apply_color_palette(theme, mode, update));
    }

    pub fn reset_custom_colors(&mut self, theme: ThemeName, mode: Option<ThemeMode>) {
        self.update(|state| state.reset_custom_colors(theme, mode));
    }

    pub fn set_custom_fonts(&mut self, theme: ThemeName, fonts: FontTheme) {
        self.update(|state| state.set_custom_fonts(theme, fonts));
    }

    pub fn reset_custom_fonts(&mut self, theme: ThemeName) {
        self.update(|state| state.reset_custom_fonts(theme));
    }

    /// Save a palette preset, returning its generated id
    pub fn save_palette(&mut self, draft: PaletteDraft) -> String {
        let now = Utc::now();
        let id = preset_id("palette", now);
        self.update(|state| state.save_palette(draft, id.clone(), now));
        id
    }

    pub fn delete_palette(&mut self, id: &str) {
        self.update(|state| state.delete_palette(id));
    }

    pub fn reorder_palettes(&mut self, palettes: Vec<SavedPalette>) {
        self.update(|state| state.reorder_palettes(palettes));
    }

    pub fn apply_saved_palette(&mut self, id: &str, theme: ThemeName, mode: ThemeMode) -> bool {
        self.update_if(|state| state.apply_saved_palette(id, theme, mode))
    }

    /// Save a font preset, returning its generated id
    pub fn save_font_theme(&mut self, draft: FontThemeDraft) -> String {
        let now = Utc::now();
        let id = preset_id("font", now);
        self.update(|state| state.save_font_theme(draft, id.clone(), now));
        id
    }

    pub fn delete_font_theme(&mut self, id: &str) {
        self.update(|state| state.delete_font_theme(id));
    }

    pub fn reorder_font_themes(&mut self, font_themes: Vec<SavedFontTheme>) {
        self.update(|state| state.reorder_font_themes(font_themes));
    }

    pub fn apply_saved_font_theme(&mut self, id: &str, theme: ThemeName) -> bool {
        self.update_if(|state| state.apply_saved_font_theme(id, theme))
    }

    fn update(&mut self, transition: impl FnOnce(&mut CustomizerState)) {
        self.update_if(|state| {
            transition(state);
            true
        });
    }

    /// Run a transition; persist and notify only when it reports a change
    fn update_if(&mut self, transition: impl FnOnce(&mut CustomizerState) -> bool) -> bool {
        if !transition(&mut self.state) {
            return false;
        }
        self.persistence.save(&self.state);
        self.observers.notify(&self.state);
        true
    }
}

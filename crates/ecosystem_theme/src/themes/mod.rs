//! Built-in theme token tables
//!
//! Each theme defines a small [`BasePalette`] per mode. [`build_colors`]
//! expands it into the full [`ColorTokens`] set: foregrounds are picked for
//! contrast and every brand-dependent token comes from the derived token
//! graph, so a theme's hover states and chart colors follow the same rules
//! a custom palette does.

mod studio;
mod terra;
mod volt;

use crate::derived::ColorSource;
use crate::error::{Result, ThemeError};
use crate::theme::{ThemeMode, ThemeName};
use crate::tokens::{CodeColors, ColorToken, ColorTokens, EffectTokens, FontTheme, SyntaxColors};
use ecosystem_core::color::get_optimal_foreground;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimal palette a theme defines per mode
#[derive(Clone, Debug)]
pub struct BasePalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub muted: &'static str,
    pub muted_foreground: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub destructive: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub border: &'static str,
}

/// Expand a base palette into the full color token set
pub fn build_colors(base: &BasePalette, mode: ThemeMode) -> ColorTokens {
    let mut colors = ColorTokens {
        background: base.background.into(),
        foreground: base.foreground.into(),
        card: base.card.into(),
        card_foreground: base.foreground.into(),
        popover: base.card.into(),
        popover_foreground: base.foreground.into(),
        primary: base.primary.into(),
        primary_foreground: get_optimal_foreground(base.primary),
        secondary: base.secondary.into(),
        secondary_foreground: get_optimal_foreground(base.secondary),
        muted: base.muted.into(),
        muted_foreground: base.muted_foreground.into(),
        accent: base.accent.into(),
        accent_foreground: get_optimal_foreground(base.accent),
        destructive: base.destructive.into(),
        destructive_foreground: get_optimal_foreground(base.destructive),
        success: base.success.into(),
        warning: base.warning.into(),
        border: base.border.into(),
        input: base.border.into(),
        ..ColorTokens::default()
    };

    for source in ColorSource::ALL {
        let hex = colors.get(source.token()).to_string();
        for (token, derivation) in source.dependents() {
            colors.set(*token, derivation.apply(&hex, mode));
        }
    }

    colors
}

/// Everything one theme contributes for one mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub effects: EffectTokens,
    pub fonts: FontTheme,
}

/// A value per color mode
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSet<T> {
    pub light: T,
    pub dark: T,
}

impl<T> ModeSet<T> {
    pub fn get(&self, mode: ThemeMode) -> &T {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

pub type ThemeBundle = ModeSet<ThemeTokens>;

/// The read-only token tables the engine renders from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAssets {
    pub studio: ThemeBundle,
    pub terra: ThemeBundle,
    pub volt: ThemeBundle,
    pub syntax: ModeSet<SyntaxColors>,
    pub code: ModeSet<CodeColors>,
}

impl ThemeAssets {
    /// The compiled-in tables
    pub fn builtin() -> Self {
        Self {
            studio: studio::tokens(),
            terra: terra::tokens(),
            volt: volt::tokens(),
            syntax: ModeSet {
                light: SyntaxColors::for_mode(ThemeMode::Light),
                dark: SyntaxColors::for_mode(ThemeMode::Dark),
            },
            code: ModeSet {
                light: CodeColors::for_mode(ThemeMode::Light),
                dark: CodeColors::for_mode(ThemeMode::Dark),
            },
        }
    }

    /// Built-in tables with a TOML overlay deep-merged on top
    ///
    /// The overlay only needs the keys it changes, e.g.
    /// `[terra.dark.colors] primary = "#ea580c"`. A changed base color
    /// re-derives its foreground and dependents unless the overlay sets
    /// them too.
    pub fn from_toml_str(overlay: &str) -> Result<Self> {
        let overlay: toml::Table = toml::from_str(overlay)?;
        let builtin = Self::builtin();
        let mut merged =
            toml::Value::try_from(&builtin).map_err(|e| ThemeError::Assets(e.to_string()))?;

        for key in overlay.keys() {
            if !is_known_section(key) {
                tracing::warn!("ThemeAssets: ignoring unknown section [{}]", key);
            }
        }
        let mut explicit = Vec::new();
        for theme in ThemeName::all() {
            for mode in ThemeMode::all() {
                explicit.push((*theme, *mode, overlay_color_keys(&overlay, *theme, *mode)));
            }
        }
        merge_value(&mut merged, toml::Value::Table(overlay));

        let mut assets: Self = merged
            .try_into()
            .map_err(|e: toml::de::Error| ThemeError::Assets(e.to_string()))?;
        for (theme, mode, keys) in explicit {
            if keys.is_empty() {
                continue;
            }
            let base = &builtin.tokens(theme, mode).colors;
            let colors = &mut assets.tokens_mut(theme, mode).colors;
            rederive_changed_sources(colors, base, &keys, mode);
        }
        Ok(assets)
    }

    pub fn bundle(&self, theme: ThemeName) -> &ThemeBundle {
        match theme {
            ThemeName::Studio => &self.studio,
            ThemeName::Terra => &self.terra,
            ThemeName::Volt => &self.volt,
        }
    }

    pub fn tokens(&self, theme: ThemeName, mode: ThemeMode) -> &ThemeTokens {
        self.bundle(theme).get(mode)
    }

    fn tokens_mut(&mut self, theme: ThemeName, mode: ThemeMode) -> &mut ThemeTokens {
        let bundle = match theme {
            ThemeName::Studio => &mut self.studio,
            ThemeName::Terra => &mut self.terra,
            ThemeName::Volt => &mut self.volt,
        };
        match mode {
            ThemeMode::Light => &mut bundle.light,
            ThemeMode::Dark => &mut bundle.dark,
        }
    }

    /// The base primary color of a theme
    pub fn primary(&self, theme: ThemeName, mode: ThemeMode) -> &str {
        self.tokens(theme, mode).colors.get(ColorToken::Primary)
    }
}

impl Default for ThemeAssets {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_known_section(key: &str) -> bool {
    matches!(key, "studio" | "terra" | "volt" | "syntax" | "code")
}

/// Color field names an overlay sets for one theme and mode
fn overlay_color_keys(overlay: &toml::Table, theme: ThemeName, mode: ThemeMode) -> BTreeSet<String> {
    overlay
        .get(theme.id())
        .and_then(|theme| theme.get(mode.id()))
        .and_then(|mode| mode.get("colors"))
        .and_then(toml::Value::as_table)
        .map(|colors| colors.keys().cloned().collect())
        .unwrap_or_default()
}

/// Recompute the foreground and dependents of every base color that moved
/// away from `builtin`, leaving tokens named in `explicit` alone
fn rederive_changed_sources(
    colors: &mut ColorTokens,
    builtin: &ColorTokens,
    explicit: &BTreeSet<String>,
    mode: ThemeMode,
) {
    for source in ColorSource::ALL {
        let hex = colors.get(source.token()).to_string();
        if hex == builtin.get(source.token()) {
            continue;
        }
        tracing::debug!("ThemeAssets: re-deriving {} from {}", source.css_var(), hex);

        let foreground = (source.foreground(), get_optimal_foreground(&hex));
        let dependents = source
            .dependents()
            .iter()
            .map(|(token, derivation)| (*token, derivation.apply(&hex, mode)));
        for (token, value) in std::iter::once(foreground).chain(dependents) {
            if !explicit.contains(token.field()) {
                colors.set(token, value);
            }
        }
    }
}

/// Recursively merge `overlay` into `base`; tables merge, everything else replaces
fn merge_value(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

//! Theme variable sets
//!
//! [`get_theme_vars`] flattens a theme's token tables; [`compute_theme_vars`]
//! layers custom fonts and a custom palette on top. Derived palette tokens
//! are applied last so they win over static base values.

use crate::palette::ColorPalette;
use crate::theme::{ThemeMode, ThemeName, ThemeSelection};
use crate::themes::ThemeAssets;
use crate::tokens::{ColorToken, FontTheme};
use indexmap::IndexMap;

/// Ordered CSS custom property assignments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeVars(IndexMap<String, String>);

impl ThemeVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Set a variable; an existing one keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ThemeVars {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Base variables for one theme and mode
pub fn get_theme_vars(assets: &ThemeAssets, theme: ThemeName, mode: ThemeMode) -> ThemeVars {
    let tokens = assets.tokens(theme, mode);
    let mut vars = ThemeVars::new();
    vars.extend(tokens.colors.css_vars());
    vars.extend(tokens.effects.css_vars());
    vars.extend(tokens.fonts.css_vars());
    vars.extend(assets.syntax.get(mode).css_vars());
    vars.extend(assets.code.get(mode).css_vars());
    vars
}

/// Full variable set for a selection with optional customizations
pub fn compute_theme_vars(
    assets: &ThemeAssets,
    selection: ThemeSelection,
    palette: Option<&ColorPalette>,
    fonts: Option<&FontTheme>,
) -> ThemeVars {
    let mut vars = get_theme_vars(assets, selection.theme, selection.mode);

    if let Some(fonts) = fonts {
        vars.extend(fonts.css_vars());
    }

    if let Some(palette) = palette {
        merge_palette(&mut vars, palette);
    }

    vars
}

fn merge_palette(vars: &mut ThemeVars, palette: &ColorPalette) {
    vars.insert(ColorToken::Primary.css_var(), palette.primary());
    vars.insert(
        ColorToken::PrimaryForeground.css_var(),
        palette.primary_foreground(),
    );

    let optional = [
        (ColorToken::Secondary, palette.secondary()),
        (ColorToken::SecondaryForeground, palette.secondary_foreground()),
        (ColorToken::Accent, palette.accent()),
        (ColorToken::AccentForeground, palette.accent_foreground()),
    ];
    for (token, value) in optional {
        if let Some(value) = value {
            vars.insert(token.css_var(), value);
        }
    }

    for (step, hex) in palette.scale().iter() {
        vars.insert(format!("--color-primary-{step}"), hex);
    }

    vars.extend(
        palette
            .derived_tokens()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
}

//! Theme identifiers and color modes

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Neutral studio look with an indigo primary.
    #[default]
    Studio,
    /// Warm, earthy palette.
    Terra,
    /// High-energy electric palette.
    Volt,
}

impl ThemeName {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::Terra => "terra",
            Self::Volt => "volt",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Terra => "Terra",
            Self::Volt => "Volt",
        }
    }

    /// Full theme list.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 3] = [ThemeName::Studio, ThemeName::Terra, ThemeName::Volt];
        &THEMES
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

/// Light or dark color mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];
        &MODES
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

/// The selected theme and color mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeSelection {
    pub theme: ThemeName,
    pub mode: ThemeMode,
}

impl ThemeSelection {
    pub fn new(theme: ThemeName, mode: ThemeMode) -> Self {
        Self { theme, mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for theme in ThemeName::all() {
            assert_eq!(theme.id().parse::<ThemeName>().unwrap(), *theme);
        }
        assert_eq!(" Terra ".parse::<ThemeName>().unwrap(), ThemeName::Terra);
        assert!(matches!(
            "neon".parse::<ThemeName>(),
            Err(ThemeError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
        assert!("DARK".parse::<ThemeMode>().unwrap().is_dark());
    }

    #[test]
    fn test_selection_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeSelection::new(ThemeName::Volt, ThemeMode::Dark))
            .unwrap();
        assert_eq!(json, r#"{"theme":"volt","mode":"dark"}"#);
    }
}

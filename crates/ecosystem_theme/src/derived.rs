//! Derived token graph
//!
//! Links, focus rings, selection, chart series, the brand glow and
//! hover/active states are functions of one of the three base brand colors. The dependency table
//! lives here so that changing one base color can recompute exactly the
//! tokens that depend on it and nothing else.

use crate::theme::ThemeMode;
use crate::tokens::ColorToken;
use ecosystem_core::color::{adjust_lightness, hex_to_hsl, hex_to_rgb, hsl_to_hex, rotate_hue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS variable name to value, in deterministic order
pub type DerivedTokens = BTreeMap<String, String>;

/// A base color that other tokens derive from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSource {
    Primary,
    Secondary,
    Accent,
}

/// How a dependent token is computed from its source color
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Derivation {
    /// The source color itself
    Same,
    /// Lightness shifted by a per-mode number of points
    Shift { light: f64, dark: f64 },
    /// Source hue and saturation at a fixed per-mode lightness
    Tone { light: f64, dark: f64 },
    /// Hue rotated by degrees
    Rotate(f64),
    /// A `box-shadow` glow in the source color, `(blur px, alpha)` per mode
    Glow { light: (u16, f64), dark: (u16, f64) },
}

impl Derivation {
    pub fn apply(self, hex: &str, mode: ThemeMode) -> String {
        fn per_mode<T>(mode: ThemeMode, light: T, dark: T) -> T {
            if mode.is_dark() {
                dark
            } else {
                light
            }
        }
        match self {
            Derivation::Same => hex.to_string(),
            Derivation::Shift { light, dark } => {
                adjust_lightness(hex, per_mode(mode, light, dark))
            }
            Derivation::Tone { light, dark } => match hex_to_hsl(hex) {
                Some(hsl) => hsl_to_hex(hsl.h, hsl.s, per_mode(mode, light, dark)),
                None => hex.to_string(),
            },
            Derivation::Rotate(degrees) => rotate_hue(hex, degrees),
            Derivation::Glow { light, dark } => match hex_to_rgb(hex) {
                Some(rgb) => {
                    let (blur, alpha) = per_mode(mode, light, dark);
                    format!("0 0 {blur}px rgba({}, {}, {}, {alpha})", rgb.r, rgb.g, rgb.b)
                }
                None => hex.to_string(),
            },
        }
    }
}

const PRIMARY_DEPENDENTS: &[(ColorToken, Derivation)] = &[
    (ColorToken::PrimaryHover, Derivation::Shift { light: -8.0, dark: 8.0 }),
    (ColorToken::PrimaryActive, Derivation::Shift { light: -14.0, dark: 14.0 }),
    (ColorToken::Link, Derivation::Shift { light: -4.0, dark: 10.0 }),
    (ColorToken::LinkHover, Derivation::Shift { light: -12.0, dark: 18.0 }),
    (ColorToken::Ring, Derivation::Same),
    (ColorToken::Selection, Derivation::Tone { light: 88.0, dark: 28.0 }),
    (ColorToken::Chart1, Derivation::Same),
    (ColorToken::Chart2, Derivation::Rotate(150.0)),
    (ColorToken::Glow, Derivation::Glow { light: (24, 0.35), dark: (32, 0.45) }),
];

const SECONDARY_DEPENDENTS: &[(ColorToken, Derivation)] = &[
    (ColorToken::SecondaryHover, Derivation::Shift { light: -6.0, dark: 6.0 }),
    (ColorToken::SecondaryActive, Derivation::Shift { light: -12.0, dark: 12.0 }),
    (ColorToken::Chart3, Derivation::Same),
];

const ACCENT_DEPENDENTS: &[(ColorToken, Derivation)] = &[
    (ColorToken::AccentHover, Derivation::Shift { light: -6.0, dark: 6.0 }),
    (ColorToken::AccentSubtle, Derivation::Tone { light: 94.0, dark: 18.0 }),
    (ColorToken::Chart4, Derivation::Same),
    (ColorToken::Chart5, Derivation::Rotate(-40.0)),
];

impl ColorSource {
    pub const ALL: [ColorSource; 3] = [ColorSource::Primary, ColorSource::Secondary, ColorSource::Accent];

    /// Contrast color paired with the base token
    pub fn foreground(self) -> ColorToken {
        match self {
            ColorSource::Primary => ColorToken::PrimaryForeground,
            ColorSource::Secondary => ColorToken::SecondaryForeground,
            ColorSource::Accent => ColorToken::AccentForeground,
        }
    }

    /// The base token this source writes
    pub fn token(self) -> ColorToken {
        match self {
            ColorSource::Primary => ColorToken::Primary,
            ColorSource::Secondary => ColorToken::Secondary,
            ColorSource::Accent => ColorToken::Accent,
        }
    }

    pub fn css_var(self) -> &'static str {
        self.token().css_var()
    }

    /// Tokens computed from this source and how
    pub fn dependents(self) -> &'static [(ColorToken, Derivation)] {
        match self {
            ColorSource::Primary => PRIMARY_DEPENDENTS,
            ColorSource::Secondary => SECONDARY_DEPENDENTS,
            ColorSource::Accent => ACCENT_DEPENDENTS,
        }
    }
}

/// Every token that depends on `source`, recomputed from `hex` for `mode`
///
/// The base token itself is not included.
pub fn compute_derived_tokens(source: ColorSource, hex: &str, mode: ThemeMode) -> DerivedTokens {
    source
        .dependents()
        .iter()
        .map(|(token, derivation)| (token.css_var().to_string(), derivation.apply(hex, mode)))
        .collect()
}

/// A change to one or more base colors, applied as one unit
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChangeRequest {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ColorChangeRequest {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            accent: None,
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    /// Drop secondary and accent, keeping only the primary
    pub fn primary_only(self) -> Self {
        Self::new(self.primary)
    }

    /// Sources present in this request, primary first
    pub fn sources(&self) -> Vec<(ColorSource, &str)> {
        let mut sources = vec![(ColorSource::Primary, self.primary.as_str())];
        match (self.secondary.as_deref(), self.accent.as_deref()) {
            (Some(secondary), Some(accent)) => {
                sources.push((ColorSource::Secondary, secondary));
                sources.push((ColorSource::Accent, accent));
            }
            (Some(secondary), None) => sources.push((ColorSource::Secondary, secondary)),
            (None, Some(accent)) => sources.push((ColorSource::Accent, accent)),
            (None, None) => {}
        }
        sources
    }

    /// Derived tokens of every present source, merged into one map
    pub fn derive_tokens(&self, mode: ThemeMode) -> DerivedTokens {
        self.sources()
            .into_iter()
            .flat_map(|(source, hex)| compute_derived_tokens(source, hex, mode))
            .collect()
    }
}

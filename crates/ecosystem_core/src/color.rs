//! Color math on hex strings
//!
//! All functions are pure. Hex input is a 6-digit string with an optional
//! leading `#`; anything else parses as `None`. HSL values are rounded to
//! integer degrees/percent, so HSL is a lossy intermediate representation and
//! a hex -> HSL -> hex round trip may drift by a unit or two per channel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tint/shade steps of a generated color scale, lightest first.
pub const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// WCAG luminance threshold below which a channel is linear.
const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex string (`#rrggbb` or `rrggbb`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        get_luminance(self.r, self.g, self.b)
    }

    /// Convert to rounded HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, (l * 100.0).round());
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        Hsl::new((h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to RGB. Hue wraps, saturation and lightness clamp.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a hex color. Returns `None` on malformed input.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

/// Format 8-bit channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Parse a hex color into rounded HSL.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(Rgb::to_hsl)
}

/// Build a hex color from HSL components (degrees, percent, percent).
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// WCAG 2.x relative luminance of 8-bit sRGB channels.
pub fn get_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= SRGB_LINEAR_THRESHOLD {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio in `[1, 21]`, or `0.0` if either color fails to parse.
pub fn get_contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    let (Some(a), Some(b)) = (hex_to_rgb(hex1), hex_to_rgb(hex2)) else {
        return 0.0;
    };

    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Text size class used by WCAG thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl ContrastLevel {
    /// Minimum contrast ratio for this level and text size.
    pub fn threshold(self, size: TextSize) -> f64 {
        match (self, size) {
            (ContrastLevel::Aa, TextSize::Normal) => 4.5,
            (ContrastLevel::Aa, TextSize::Large) => 3.0,
            (ContrastLevel::Aaa, TextSize::Normal) => 7.0,
            (ContrastLevel::Aaa, TextSize::Large) => 4.5,
        }
    }
}

/// Check whether `fg` on `bg` meets the WCAG threshold for `level`/`size`.
pub fn meets_contrast_requirements(
    fg: &str,
    bg: &str,
    level: ContrastLevel,
    size: TextSize,
) -> bool {
    get_contrast_ratio(fg, bg) >= level.threshold(size)
}

/// Shift lightness by `percent` points, clamped to `[0, 100]`.
///
/// Unparseable input is returned unchanged.
pub fn adjust_lightness(hex: &str, percent: f64) -> String {
    match hex_to_hsl(hex) {
        Some(hsl) => hsl_to_hex(hsl.h, hsl.s, (hsl.l + percent).clamp(0.0, 100.0)),
        None => hex.to_string(),
    }
}

/// Shift saturation by `percent` points, clamped to `[0, 100]`.
///
/// Unparseable input is returned unchanged.
pub fn adjust_saturation(hex: &str, percent: f64) -> String {
    match hex_to_hsl(hex) {
        Some(hsl) => hsl_to_hex(hsl.h, (hsl.s + percent).clamp(0.0, 100.0), hsl.l),
        None => hex.to_string(),
    }
}

/// Rotate hue by `degrees`, wrapping into `[0, 360)`. Negative rotations wrap too.
///
/// Unparseable input is returned unchanged.
pub fn rotate_hue(hex: &str, degrees: f64) -> String {
    match hex_to_hsl(hex) {
        Some(hsl) => hsl_to_hex((hsl.h + degrees).rem_euclid(360.0), hsl.s, hsl.l),
        None => hex.to_string(),
    }
}

/// Pick white or black, whichever contrasts more with `bg`.
pub fn get_optimal_foreground(bg: &str) -> String {
    get_optimal_foreground_with(bg, "#ffffff", "#000000")
}

/// Pick `light` or `dark`, whichever contrasts more with `bg`. Ties go to `light`.
pub fn get_optimal_foreground_with(bg: &str, light: &str, dark: &str) -> String {
    if get_contrast_ratio(light, bg) >= get_contrast_ratio(dark, bg) {
        light.to_string()
    } else {
        dark.to_string()
    }
}

/// A 50-900 tint/shade scale keyed by step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(BTreeMap<u16, String>);

impl ColorScale {
    /// Color at `step`, if the step exists.
    pub fn get(&self, step: u16) -> Option<&str> {
        self.0.get(&step).map(String::as_str)
    }

    /// Steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.0.iter().map(|(step, hex)| (*step, hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Index<u16> for ColorScale {
    type Output = str;

    fn index(&self, step: u16) -> &str {
        self.get(step)
            .unwrap_or_else(|| panic!("color scale has no step {step}"))
    }
}

/// Lightness target and saturation rule for each non-base step.
enum Saturation {
    /// `s + delta`, floored at `min`.
    AtLeast(f64, f64),
    /// `s + delta`.
    Delta(f64),
}

const SCALE_TABLE: [(u16, f64, Saturation); 9] = [
    (50, 95.0, Saturation::AtLeast(-10.0, 20.0)),
    (100, 90.0, Saturation::AtLeast(-5.0, 30.0)),
    (200, 80.0, Saturation::Delta(0.0)),
    (300, 70.0, Saturation::Delta(0.0)),
    (400, 60.0, Saturation::Delta(0.0)),
    (600, 45.0, Saturation::Delta(5.0)),
    (700, 35.0, Saturation::Delta(10.0)),
    (800, 25.0, Saturation::Delta(15.0)),
    (900, 15.0, Saturation::Delta(20.0)),
];

/// Generate the 50-900 scale for `base`. Step 500 is `base` verbatim.
///
/// An unparseable base yields a flat scale of `base` at every step.
pub fn generate_color_scale(base: &str) -> ColorScale {
    let mut steps = BTreeMap::new();
    steps.insert(500, base.to_string());

    let Some(hsl) = hex_to_hsl(base) else {
        tracing::trace!("generate_color_scale: unparseable base {:?}", base);
        for step in SCALE_STEPS {
            steps.insert(step, base.to_string());
        }
        return ColorScale(steps);
    };

    for (step, lightness, rule) in SCALE_TABLE {
        let saturation = match rule {
            Saturation::AtLeast(delta, min) => (hsl.s + delta).clamp(0.0, 100.0).max(min),
            Saturation::Delta(delta) => (hsl.s + delta).clamp(0.0, 100.0),
        };
        steps.insert(step, hsl_to_hex(hsl.h, saturation, lightness));
    }

    ColorScale(steps)
}

//! Ecosystem Core
//!
//! Foundational primitives shared by the theming crates:
//!
//! - **Color math**: hex/RGB/HSL conversion, WCAG luminance and contrast,
//!   lightness/saturation/hue adjustment, 50-900 tint/shade scales
//! - **Observers**: a keyed listener registry with explicit subscribe and
//!   unsubscribe, used by every store and the theme engine
//!
//! # Example
//!
//! ```rust
//! use ecosystem_core::color::{generate_color_scale, get_contrast_ratio, get_optimal_foreground};
//!
//! let scale = generate_color_scale("#3b82f6");
//! assert_eq!(scale.get(500), Some("#3b82f6"));
//!
//! assert_eq!(get_optimal_foreground("#000000"), "#ffffff");
//! assert!(get_contrast_ratio("#ffffff", "#000000") > 20.9);
//! ```
//!
//! Malformed hex input never panics: parsing returns `None` and the derived
//! helpers fall back to a safe value so callers stay renderable while a user
//! is still typing a color.

pub mod color;
pub mod observer;

pub use color::{
    adjust_lightness, adjust_saturation, generate_color_scale, get_contrast_ratio,
    get_luminance, get_optimal_foreground, get_optimal_foreground_with, hex_to_hsl, hex_to_rgb,
    hsl_to_hex, meets_contrast_requirements, rgb_to_hex, rotate_hue, ColorScale, ContrastLevel,
    Hsl, Rgb, TextSize, SCALE_STEPS,
};
pub use observer::{Listener, Observers, SubscriptionId};

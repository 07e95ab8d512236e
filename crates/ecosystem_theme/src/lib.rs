//! Ecosystem Theme
//!
//! Token-driven theming with live customization:
//!
//! - **Tokens**: per-theme color, effect and font tables plus shared syntax
//!   and code colors ([`ThemeAssets`])
//! - **Derived tokens**: the dependency graph from primary, secondary and
//!   accent to links, rings, charts and hover states
//! - **Stores**: [`ThemeStore`] (theme and mode) and [`CustomizerStore`]
//!   (motion, palettes, fonts, saved presets), persisted through
//!   `ecosystem_storage`
//! - **Engine**: [`ThemeEngine`] merges everything into CSS custom properties
//!   and writes them to a [`RenderRoot`]
//!
//! # Example
//!
//! ```rust
//! use ecosystem_theme::{
//!     compute_theme_vars, ColorChangeRequest, ColorPalette, ThemeAssets, ThemeMode, ThemeName,
//!     ThemeSelection,
//! };
//!
//! let assets = ThemeAssets::builtin();
//! let palette = ColorPalette::from_request(&ColorChangeRequest::new("#e11d48"), ThemeMode::Dark);
//! let vars = compute_theme_vars(
//!     &assets,
//!     ThemeSelection::new(ThemeName::Volt, ThemeMode::Dark),
//!     Some(&palette),
//!     None,
//! );
//!
//! assert_eq!(vars.get("--color-primary"), Some("#e11d48"));
//! assert_eq!(vars.get("--color-primary-500"), Some("#e11d48"));
//! assert_eq!(vars.get("--color-ring"), Some("#e11d48"));
//! ```

pub mod config;
pub mod customizer;
pub mod derived;
pub mod engine;
pub mod error;
pub mod palette;
pub mod persist;
pub mod root;
pub mod runtime;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod validate;
pub mod vars;

pub use config::{EngineConfig, CONFIG_FILE};
pub use customizer::{CustomColors, CustomizationMode, CustomizerState};
pub use derived::{compute_derived_tokens, ColorChangeRequest, ColorSource, Derivation, DerivedTokens};
pub use engine::{EnginePhase, ThemeApplied, ThemeEngine, DARK_CLASS, TRANSITION_CLASS};
pub use error::{Result, ThemeError};
pub use palette::{
    Accessibility, ColorPalette, FontThemeDraft, PaletteDraft, PaletteUpdate, PresetCategory,
    SavedFontTheme, SavedPalette,
};
pub use persist::{CUSTOMIZER_STORAGE_KEY, CUSTOMIZER_STORAGE_VERSION, THEME_STORAGE_KEY};
pub use root::{RenderRoot, StyleRoot};
pub use runtime::ThemeRuntime;
pub use store::{CustomizerStore, ThemeStore};
pub use theme::{ThemeMode, ThemeName, ThemeSelection};
pub use themes::{ThemeAssets, ThemeTokens};
pub use tokens::{ColorToken, ColorTokens, FontTheme};
pub use validate::{validate_root, TokenIssue, REQUIRED_TOKENS};
pub use vars::{compute_theme_vars, get_theme_vars, ThemeVars};

//! Studio: neutral slate surfaces with an indigo primary

use super::{build_colors, BasePalette, ThemeBundle, ThemeTokens};
use crate::theme::ThemeMode;
use crate::tokens::{EffectTokens, FontTheme};

const LIGHT: BasePalette = BasePalette {
    background: "#ffffff",
    foreground: "#0f172a",
    card: "#ffffff",
    muted: "#f1f5f9",
    muted_foreground: "#64748b",
    primary: "#4f46e5",
    secondary: "#0ea5e9",
    accent: "#f59e0b",
    destructive: "#dc2626",
    success: "#16a34a",
    warning: "#d97706",
    border: "#e2e8f0",
};

const DARK: BasePalette = BasePalette {
    background: "#0b1120",
    foreground: "#e2e8f0",
    card: "#111827",
    muted: "#1e293b",
    muted_foreground: "#94a3b8",
    primary: "#818cf8",
    secondary: "#38bdf8",
    accent: "#fbbf24",
    destructive: "#f87171",
    success: "#4ade80",
    warning: "#fbbf24",
    border: "#1e293b",
};

pub(super) fn tokens() -> ThemeBundle {
    let fonts = FontTheme::default();
    ThemeBundle {
        light: ThemeTokens {
            colors: build_colors(&LIGHT, ThemeMode::Light),
            effects: EffectTokens::light(),
            fonts: fonts.clone(),
        },
        dark: ThemeTokens {
            colors: build_colors(&DARK, ThemeMode::Dark),
            effects: EffectTokens::dark(),
            fonts,
        },
    }
}

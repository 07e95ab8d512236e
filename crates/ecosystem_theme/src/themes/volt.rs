//! Volt: high-contrast zinc with electric violet, cyan and lime

use super::{build_colors, BasePalette, ThemeBundle, ThemeTokens};
use crate::theme::ThemeMode;
use crate::tokens::{EffectTokens, FontTheme};

const LIGHT: BasePalette = BasePalette {
    background: "#fafafa",
    foreground: "#09090b",
    card: "#ffffff",
    muted: "#f4f4f5",
    muted_foreground: "#71717a",
    primary: "#7c3aed",
    secondary: "#0891b2",
    accent: "#65a30d",
    destructive: "#e11d48",
    success: "#16a34a",
    warning: "#ca8a04",
    border: "#e4e4e7",
};

const DARK: BasePalette = BasePalette {
    background: "#09090b",
    foreground: "#fafafa",
    card: "#18181b",
    muted: "#27272a",
    muted_foreground: "#a1a1aa",
    primary: "#a78bfa",
    secondary: "#22d3ee",
    accent: "#bef264",
    destructive: "#fb7185",
    success: "#4ade80",
    warning: "#facc15",
    border: "#27272a",
};

pub(super) fn tokens() -> ThemeBundle {
    let fonts = FontTheme::new(
        "\"Space Grotesk\", system-ui, sans-serif",
        "\"Inter\", system-ui, sans-serif",
        "\"Fira Code\", ui-monospace, monospace",
    );
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

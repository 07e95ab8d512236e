//! Terra: warm paper and stone with burnt orange and olive

use super::{build_colors, BasePalette, ThemeBundle, ThemeTokens};
use crate::theme::ThemeMode;
use crate::tokens::{EffectTokens, FontTheme};

const LIGHT: BasePalette = BasePalette {
    background: "#faf7f2",
    foreground: "#292524",
    card: "#fffdf9",
    muted: "#f0ebe3",
    muted_foreground: "#78716c",
    primary: "#c2410c",
    secondary: "#4d7c0f",
    accent: "#b45309",
    destructive: "#b91c1c",
    success: "#15803d",
    warning: "#a16207",
    border: "#e7e0d6",
};

const DARK: BasePalette = BasePalette {
    background: "#1c1917",
    foreground: "#f5f5f4",
    card: "#24201d",
    muted: "#2e2925",
    muted_foreground: "#a8a29e",
    primary: "#fb923c",
    secondary: "#a3e635",
    accent: "#fbbf24",
    destructive: "#f87171",
    success: "#86efac",
    warning: "#fcd34d",
    border: "#3a332e",
};

pub(super) fn tokens() -> ThemeBundle {
    let fonts = FontTheme::new(
        "\"Fraunces\", Georgia, serif",
        "\"Source Sans 3\", system-ui, sans-serif",
        "\"IBM Plex Mono\", ui-monospace, monospace",
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

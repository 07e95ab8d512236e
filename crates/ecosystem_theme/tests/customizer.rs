use ecosystem_theme::{
    compute_theme_vars, ColorChangeRequest, CustomizationMode, CustomizerStore, PaletteUpdate,
    ThemeAssets, ThemeMode, ThemeName, ThemeSelection,
};
use std::sync::Arc;

const SECONDARY_KEYS: [&str; 3] = [
    "--color-secondary-hover",
    "--color-secondary-active",
    "--color-chart-3",
];
const ACCENT_KEYS: [&str; 4] = [
    "--color-accent-hover",
    "--color-accent-subtle",
    "--color-chart-4",
    "--color-chart-5",
];

fn store() -> CustomizerStore {
    CustomizerStore::in_memory(Arc::new(ThemeAssets::builtin()))
}

#[test]
fn apply_palette_with_primary_only() {
    let mut store = store();
    store.set_customization_mode(CustomizationMode::Advanced);
    store.apply_color_palette(ThemeName::Terra, ThemeMode::Dark, ColorChangeRequest::new("#ff0000"));

    let palette = store
        .active_color_palette(ThemeName::Terra, ThemeMode::Dark)
        .unwrap();
    assert_eq!(&palette.scale()[500], "#ff0000");
    for key in SECONDARY_KEYS.iter().chain(ACCENT_KEYS.iter()) {
        assert!(!palette.derived_tokens().contains_key(*key), "{key}");
    }
}

#[test]
fn simple_mode_drops_secondary_on_primary_change() {
    let mut store = store();
    store.set_customization_mode(CustomizationMode::Advanced);
    store.apply_color_palette(
        ThemeName::Studio,
        ThemeMode::Light,
        PaletteUpdate {
            colors: ColorChangeRequest::new("#ff0000").with_secondary("#00ff00"),
            name: Some("Duo".into()),
            description: None,
        },
    );

    store.set_customization_mode(CustomizationMode::Simple);
    store.set_custom_primary_color(ThemeName::Studio, ThemeMode::Light, "#0000ff");

    let palette = store
        .active_color_palette(ThemeName::Studio, ThemeMode::Light)
        .unwrap();
    assert_eq!(palette.secondary(), None);
    assert_eq!(palette.secondary_foreground(), None);
    assert_eq!(palette.name(), Some("Duo"));
}

#[test]
fn reset_single_mode_keeps_the_other() {
    let mut store = store();
    store.set_custom_primary_color(ThemeName::Studio, ThemeMode::Light, "#ff0000");
    store.set_custom_primary_color(ThemeName::Studio, ThemeMode::Dark, "#00ff00");

    store.reset_custom_colors(ThemeName::Studio, Some(ThemeMode::Dark));

    assert!(store
        .active_color_palette(ThemeName::Studio, ThemeMode::Dark)
        .is_none());
    assert_eq!(
        store
            .active_color_palette(ThemeName::Studio, ThemeMode::Light)
            .unwrap()
            .primary(),
        "#ff0000"
    );
}

#[test]
fn accent_only_touches_accent_dependents() {
    let assets = ThemeAssets::builtin();
    let selection = ThemeSelection::new(ThemeName::Volt, ThemeMode::Light);
    let mut store = store();
    store.set_customization_mode(CustomizationMode::Advanced);
    store.set_custom_accent_color(selection.theme, selection.mode, "#ff00ff");

    let palette = store
        .active_color_palette(selection.theme, selection.mode)
        .unwrap();
    let base = compute_theme_vars(&assets, selection, None, None);
    let custom = compute_theme_vars(&assets, selection, Some(palette), None);

    assert_eq!(custom.get("--color-accent"), Some("#ff00ff"));
    assert_eq!(custom.get("--color-chart-4"), Some("#ff00ff"));
    for key in SECONDARY_KEYS {
        assert_eq!(custom.get(key), base.get(key), "{key}");
    }
    // The seeded primary equals the theme's own, so its dependents are unchanged
    assert_eq!(custom.get("--color-link"), base.get("--color-link"));
}

#[test]
fn motion_preference_scenarios() {
    let mut store = store();
    for (motion, reduced, scale, animate) in [
        (5, false, 5, true),
        (0, false, 0, false),
        (10, true, 10, false),
        (0, true, 0, false),
    ] {
        store.set_motion(motion);
        store.sync_reduced_motion(reduced);
        let pref = store.motion_preference();
        assert_eq!((pref.scale, pref.should_animate), (scale, animate));
    }
}

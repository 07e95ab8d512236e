use clap::Parser;
use ecosystem_cli::{run, Cli};
use std::path::Path;

fn exec(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let dir = dir.to_str().unwrap();
    let argv = ["ecosystem", "-C", dir].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn theme_selection_persists_between_invocations() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(exec(tmp.path(), &["theme"]).unwrap(), "studio (light)\n");

    exec(tmp.path(), &["theme", "set", "terra"]).unwrap();
    exec(tmp.path(), &["theme", "mode", "dark"]).unwrap();
    assert_eq!(exec(tmp.path(), &["theme", "show"]).unwrap(), "terra (dark)\n");

    assert_eq!(exec(tmp.path(), &["theme", "toggle"]).unwrap(), "terra (light)\n");
    assert!(tmp.path().join(".ecosystem/ecosystem-theme.json").exists());
}

#[test]
fn vars_reflect_custom_palette() {
    let tmp = tempfile::tempdir().unwrap();
    exec(tmp.path(), &["palette", "primary", "#ff0000"]).unwrap();

    let css = exec(tmp.path(), &["vars"]).unwrap();
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("  --color-primary: #ff0000;\n"));
    assert!(css.contains("  --color-primary-500: #ff0000;\n"));
    assert!(css.contains("  --color-ring: #ff0000;\n"));

    // Dark mode has no palette yet
    let dark = exec(tmp.path(), &["vars", "--mode", "dark", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&dark).unwrap();
    assert_ne!(value["--color-primary"], "#ff0000");
    assert!(value.get("--color-primary-500").is_none());
}

#[test]
fn secondary_requires_advanced_mode() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(exec(tmp.path(), &["palette", "secondary", "#00ff00"]).is_err());

    exec(tmp.path(), &["palette", "mode", "advanced"]).unwrap();
    let shown = exec(tmp.path(), &["palette", "secondary", "#00ff00"]).unwrap();
    assert!(shown.contains("secondary #00ff00 on #000000"));
    assert!(shown.contains("--color-chart-3: #00ff00;"));
}

#[test]
fn reset_scopes_to_mode() {
    let tmp = tempfile::tempdir().unwrap();
    exec(tmp.path(), &["palette", "primary", "#ff0000", "--mode", "light"]).unwrap();
    exec(tmp.path(), &["palette", "primary", "#00ff00", "--mode", "dark"]).unwrap();

    exec(tmp.path(), &["palette", "reset", "--theme", "studio", "--mode", "dark"]).unwrap();
    assert!(exec(tmp.path(), &["palette", "show", "--mode", "dark"])
        .unwrap()
        .starts_with("no custom palette"));
    assert!(exec(tmp.path(), &["palette", "show", "--mode", "light"])
        .unwrap()
        .contains("primary   #ff0000"));
}

#[test]
fn saved_palettes_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let id = exec(
        tmp.path(),
        &["palette", "save", "--name", "Ink", "--primary", "#000000", "--mood", "calm"],
    )
    .unwrap();
    let id = id.trim();
    assert!(id.starts_with("palette-"));

    let listed = exec(tmp.path(), &["palette", "list"]).unwrap();
    assert_eq!(listed, format!("{id}\tInk\t#000000\tAAA\n"));

    let applied = exec(tmp.path(), &["palette", "use", id, "--theme", "volt"]).unwrap();
    assert!(applied.starts_with("Ink\n"));

    exec(tmp.path(), &["palette", "delete", id]).unwrap();
    assert_eq!(exec(tmp.path(), &["palette", "list"]).unwrap(), "");
    assert!(exec(tmp.path(), &["palette", "use", id]).is_err());
}

#[test]
fn fonts_override_and_reset() {
    let tmp = tempfile::tempdir().unwrap();
    exec(tmp.path(), &["fonts", "set", "--heading", "Georgia"]).unwrap();

    let shown = exec(tmp.path(), &["fonts", "show"]).unwrap();
    assert!(shown.contains("--font-heading: Georgia;"));
    assert!(shown.contains("--font-mono: \"JetBrains Mono\""));

    let css = exec(tmp.path(), &["vars"]).unwrap();
    assert!(css.contains("  --font-heading: Georgia;\n"));

    exec(tmp.path(), &["fonts", "reset"]).unwrap();
    assert!(!exec(tmp.path(), &["vars"]).unwrap().contains("Georgia"));
}

#[test]
fn motion_is_clamped() {
    let tmp = tempfile::tempdir().unwrap();
    let shown = exec(tmp.path(), &["motion", "set", "42"]).unwrap();
    assert!(shown.starts_with("motion 10/10\n"));
}

#[test]
fn scale_and_contrast() {
    let tmp = tempfile::tempdir().unwrap();
    let scale = exec(tmp.path(), &["scale", "#3b82f6"]).unwrap();
    assert_eq!(scale.lines().count(), 10);
    assert!(scale.contains("--color-primary-500: #3b82f6;"));

    let report = exec(tmp.path(), &["contrast", "#ffffff", "#000000"]).unwrap();
    assert!(report.starts_with("contrast 21.00:1\n"));
    assert!(report.contains("AAA normal pass"));

    assert!(exec(tmp.path(), &["contrast", "#fff", "#000000"]).is_err());
}

#[test]
fn config_overlay_is_used() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("ecosystem.toml"),
        "token_assets = \"tokens.toml\"\nstate_dir = \"state\"\n",
    )
    .unwrap();
    std::fs::write(
        tmp.path().join("tokens.toml"),
        "[studio.light.colors]\nbackground = \"#fefefe\"\n",
    )
    .unwrap();

    let css = exec(tmp.path(), &["vars"]).unwrap();
    assert!(css.contains("  --color-background: #fefefe;\n"));

    exec(tmp.path(), &["theme", "set", "volt"]).unwrap();
    assert!(tmp.path().join("state/ecosystem-theme.json").exists());
}

#[test]
fn init_writes_config() {
    let tmp = tempfile::tempdir().unwrap();
    let out = exec(tmp.path(), &["init"]).unwrap();
    assert!(out.starts_with("Created "));
    assert!(exec(tmp.path(), &["init"]).is_err());
    assert!(exec(tmp.path(), &["init", "--force"]).is_ok());
}

//! Command implementations

use crate::cli::{
    Cli, Command, Customization, FontAction, FontArgs, MotionAction, OutputFormat, PaletteAction,
    PaletteColors, Target, ThemeAction,
};
use crate::project::init_project;
use anyhow::{Context, Result};
use ecosystem_animation::{ReducedMotionSignal, SystemClock};
use ecosystem_core::color::{
    generate_color_scale, get_contrast_ratio, hex_to_rgb, meets_contrast_requirements,
    ContrastLevel, TextSize,
};
use ecosystem_storage::{FileStorage, Storage};
use ecosystem_theme::{
    ColorChangeRequest, ColorPalette, CustomizationMode, CustomizerStore, EngineConfig, FontTheme,
    FontThemeDraft, PaletteDraft, PaletteUpdate, StyleRoot, ThemeAssets, ThemeMode, ThemeName,
    ThemeRuntime, ThemeSelection, ThemeStore,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loaded project: config, token tables and the state directory
pub struct Workspace {
    dir: PathBuf,
    config: EngineConfig,
    assets: Arc<ThemeAssets>,
    storage: Arc<dyn Storage>,
}

impl Workspace {
    pub fn open(dir: &Path) -> Result<Self> {
        let config = EngineConfig::load_from_dir(dir)
            .with_context(|| format!("Failed to load config from {}", dir.display()))?;
        let assets = config
            .load_assets(dir)
            .context("Failed to load token assets")?;
        let storage = FileStorage::new(config.state_dir_in(dir));
        tracing::debug!("workspace {} (state in {})", dir.display(), storage.dir().display());

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            assets: Arc::new(assets),
            storage: Arc::new(storage),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn theme_store(&self) -> ThemeStore {
        ThemeStore::new(self.storage.clone())
    }

    pub fn customizer(&self) -> CustomizerStore {
        CustomizerStore::new(self.storage.clone(), self.assets.clone())
    }

    /// A runtime rendering into an in-memory root
    pub fn runtime(&self) -> ThemeRuntime<StyleRoot> {
        ThemeRuntime::new(
            self.storage.clone(),
            StyleRoot::new(),
            &self.config,
            self.assets.clone(),
            Arc::new(SystemClock::new()),
            ReducedMotionSignal::from_system(),
        )
    }

    fn target(&self, target: Target) -> ThemeSelection {
        let stored = self.theme_store().selection();
        ThemeSelection::new(
            target.theme.unwrap_or(stored.theme),
            target.mode.unwrap_or(stored.mode),
        )
    }
}

/// Run a parsed command, writing user-facing output to `out`
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    if let Command::Init { force } = cli.command {
        let path = init_project(&cli.dir, force)?;
        writeln!(out, "Created {}", path.display())?;
        return Ok(());
    }

    let workspace = Workspace::open(&cli.dir)?;
    match &cli.command {
        Command::Init { .. } => Ok(()),
        Command::Vars { theme, mode, format } => vars(&workspace, *theme, *mode, *format, out),
        Command::Scale { hex, format } => scale(hex, *format, out),
        Command::Contrast {
            foreground,
            background,
        } => contrast(foreground, background, out),
        Command::Theme { action } => theme(&workspace, action.as_ref(), out),
        Command::Motion { action } => motion(&workspace, action.as_ref(), out),
        Command::Palette { action } => palette(&workspace, action, out),
        Command::Fonts { action } => fonts(&workspace, action, out),
    }
}

fn vars(
    workspace: &Workspace,
    theme: Option<ThemeName>,
    mode: Option<ThemeMode>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let mut runtime = workspace.runtime();
    let stored = runtime.selection();
    let selection = ThemeSelection::new(theme.unwrap_or(stored.theme), mode.unwrap_or(stored.mode));
    if selection != stored {
        // Render without persisting the override
        let palette = runtime
            .customizer()
            .active_color_palette(selection.theme, selection.mode)
            .cloned();
        let fonts = runtime.customizer().custom_fonts(selection.theme).cloned();
        runtime
            .engine_mut()
            .apply(selection, palette.as_ref(), fonts.as_ref());
    }

    let root = runtime.root();
    match format {
        OutputFormat::Css => write!(out, "{}", root.css_block())?,
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = root
                .properties()
                .map(|(name, value)| (name.to_string(), value.into()))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        }
    }
    Ok(())
}

fn scale(hex: &str, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    parse_hex(hex)?;
    let scale = generate_color_scale(hex);
    match format {
        OutputFormat::Css => {
            for (step, color) in scale.iter() {
                writeln!(out, "--color-primary-{step}: {color};")?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&scale)?)?,
    }
    Ok(())
}

fn contrast(foreground: &str, background: &str, out: &mut dyn Write) -> Result<()> {
    parse_hex(foreground)?;
    parse_hex(background)?;

    let ratio = get_contrast_ratio(foreground, background);
    writeln!(out, "contrast {ratio:.2}:1")?;
    for (label, level, size) in [
        ("AA normal", ContrastLevel::Aa, TextSize::Normal),
        ("AA large", ContrastLevel::Aa, TextSize::Large),
        ("AAA normal", ContrastLevel::Aaa, TextSize::Normal),
        ("AAA large", ContrastLevel::Aaa, TextSize::Large),
    ] {
        let verdict = if meets_contrast_requirements(foreground, background, level, size) {
            "pass"
        } else {
            "fail"
        };
        writeln!(out, "{label:<11}{verdict}")?;
    }
    Ok(())
}

fn theme(workspace: &Workspace, action: Option<&ThemeAction>, out: &mut dyn Write) -> Result<()> {
    let mut store = workspace.theme_store();
    match action {
        None | Some(ThemeAction::Show) => {}
        Some(ThemeAction::Set { theme }) => store.set_theme(*theme),
        Some(ThemeAction::Mode { mode }) => store.set_mode(*mode),
        Some(ThemeAction::Toggle) => store.toggle_mode(),
    }
    let selection = store.selection();
    writeln!(out, "{} ({})", selection.theme.id(), selection.mode)?;
    Ok(())
}

fn motion(workspace: &Workspace, action: Option<&MotionAction>, out: &mut dyn Write) -> Result<()> {
    let mut store = workspace.customizer();
    store.sync_reduced_motion(ReducedMotionSignal::from_system().get());
    if let Some(MotionAction::Set { level }) = action {
        store.set_motion(*level);
    }

    let pref = store.motion_preference();
    writeln!(out, "motion {}/10", pref.scale)?;
    writeln!(out, "reduced motion: {}", pref.prefers_reduced_motion)?;
    writeln!(out, "animate: {}", pref.should_animate)?;
    if pref.should_animate {
        writeln!(out, "duration multiplier: {:.2}", pref.duration_multiplier())?;
    }
    Ok(())
}

fn palette(workspace: &Workspace, action: &PaletteAction, out: &mut dyn Write) -> Result<()> {
    let mut store = workspace.customizer();
    match action {
        PaletteAction::Show { target } => {
            let sel = workspace.target(*target);
            match store.active_color_palette(sel.theme, sel.mode) {
                Some(palette) => write_palette(palette, out)?,
                None => writeln!(out, "no custom palette for {} ({})", sel.theme.id(), sel.mode)?,
            }
        }
        PaletteAction::Mode { mode } => {
            store.set_customization_mode(match mode {
                Customization::Simple => CustomizationMode::Simple,
                Customization::Advanced => CustomizationMode::Advanced,
            });
            writeln!(out, "customization mode: {mode:?}")?;
        }
        PaletteAction::Primary { hex, target } => {
            parse_hex(hex)?;
            let sel = workspace.target(*target);
            store.set_custom_primary_color(sel.theme, sel.mode, hex);
            show_active(&store, sel, out)?;
        }
        PaletteAction::Secondary { hex, target } => {
            parse_hex(hex)?;
            let sel = workspace.target(*target);
            if !store.set_custom_secondary_color(sel.theme, sel.mode, hex) {
                anyhow::bail!("secondary colors need advanced mode (ecosystem palette mode advanced)");
            }
            show_active(&store, sel, out)?;
        }
        PaletteAction::Accent { hex, target } => {
            parse_hex(hex)?;
            let sel = workspace.target(*target);
            if !store.set_custom_accent_color(sel.theme, sel.mode, hex) {
                anyhow::bail!("accent colors need advanced mode (ecosystem palette mode advanced)");
            }
            show_active(&store, sel, out)?;
        }
        PaletteAction::Apply {
            colors,
            name,
            description,
            target,
        } => {
            let sel = workspace.target(*target);
            store.apply_color_palette(
                sel.theme,
                sel.mode,
                PaletteUpdate {
                    colors: change_request(colors)?,
                    name: name.clone(),
                    description: description.clone(),
                },
            );
            show_active(&store, sel, out)?;
        }
        PaletteAction::Reset { theme, mode } => {
            let theme = theme.unwrap_or_else(|| workspace.theme_store().theme());
            store.reset_custom_colors(theme, *mode);
            match mode {
                Some(mode) => writeln!(out, "reset {} ({})", theme.id(), mode)?,
                None => writeln!(out, "reset {}", theme.id())?,
            }
        }
        PaletteAction::Save {
            name,
            description,
            colors,
            mood,
        } => {
            let id = store.save_palette(PaletteDraft {
                name: name.clone(),
                description: description.clone(),
                colors: change_request(colors)?,
                mood: mood.clone(),
            });
            writeln!(out, "{id}")?;
        }
        PaletteAction::List => {
            for saved in store.state().saved_palettes() {
                let access = saved.metadata.accessibility;
                let grade = match (access.wcag_aaa, access.wcag_aa) {
                    (true, _) => "AAA",
                    (false, true) => "AA",
                    (false, false) => "-",
                };
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    saved.id, saved.name, saved.colors.primary, grade
                )?;
            }
        }
        PaletteAction::Use { id, target } => {
            let sel = workspace.target(*target);
            if !store.apply_saved_palette(id, sel.theme, sel.mode) {
                anyhow::bail!("no saved palette {id:?}");
            }
            show_active(&store, sel, out)?;
        }
        PaletteAction::Delete { id } => store.delete_palette(id),
    }
    Ok(())
}

fn fonts(workspace: &Workspace, action: &FontAction, out: &mut dyn Write) -> Result<()> {
    let mut store = workspace.customizer();
    let theme_or_stored =
        |theme: Option<ThemeName>| theme.unwrap_or_else(|| workspace.theme_store().theme());
    let builtin_fonts = |theme: ThemeName| {
        workspace
            .assets
            .tokens(theme, ThemeMode::Light)
            .fonts
            .clone()
    };

    match action {
        FontAction::Show { theme } => {
            let theme = theme_or_stored(*theme);
            let fonts = store
                .custom_fonts(theme)
                .cloned()
                .unwrap_or_else(|| builtin_fonts(theme));
            for (name, value) in fonts.css_vars() {
                writeln!(out, "{name}: {value};")?;
            }
        }
        FontAction::Set { fonts, theme } => {
            let theme = theme_or_stored(*theme);
            let base = store
                .custom_fonts(theme)
                .cloned()
                .unwrap_or_else(|| builtin_fonts(theme));
            store.set_custom_fonts(theme, merge_fonts(base, fonts));
        }
        FontAction::Reset { theme } => store.reset_custom_fonts(theme_or_stored(*theme)),
        FontAction::Save {
            name,
            description,
            fonts,
            mood,
        } => {
            let id = store.save_font_theme(FontThemeDraft {
                name: name.clone(),
                description: description.clone(),
                fonts: merge_fonts(FontTheme::default(), fonts),
                mood: mood.clone(),
            });
            writeln!(out, "{id}")?;
        }
        FontAction::List => {
            for saved in store.state().saved_font_themes() {
                writeln!(out, "{}\t{}\t{}", saved.id, saved.name, saved.fonts.heading)?;
            }
        }
        FontAction::Use { id, theme } => {
            if !store.apply_saved_font_theme(id, theme_or_stored(*theme)) {
                anyhow::bail!("no saved font theme {id:?}");
            }
        }
        FontAction::Delete { id } => store.delete_font_theme(id),
    }
    Ok(())
}

fn merge_fonts(mut base: FontTheme, overrides: &FontArgs) -> FontTheme {
    if let Some(heading) = &overrides.heading {
        base.heading = heading.clone();
    }
    if let Some(body) = &overrides.body {
        base.body = body.clone();
    }
    if let Some(mono) = &overrides.mono {
        base.mono = mono.clone();
    }
    base
}

fn change_request(colors: &PaletteColors) -> Result<ColorChangeRequest> {
    parse_hex(&colors.primary)?;
    let mut request = ColorChangeRequest::new(&colors.primary);
    if let Some(secondary) = &colors.secondary {
        parse_hex(secondary)?;
        request = request.with_secondary(secondary);
    }
    if let Some(accent) = &colors.accent {
        parse_hex(accent)?;
        request = request.with_accent(accent);
    }
    Ok(request)
}

fn parse_hex(hex: &str) -> Result<()> {
    hex_to_rgb(hex)
        .map(|_| ())
        .with_context(|| format!("{hex:?} is not a 6-digit hex color"))
}

fn show_active(store: &CustomizerStore, sel: ThemeSelection, out: &mut dyn Write) -> Result<()> {
    match store.active_color_palette(sel.theme, sel.mode) {
        Some(palette) => write_palette(palette, out),
        None => Ok(()),
    }
}

fn write_palette(palette: &ColorPalette, out: &mut dyn Write) -> Result<()> {
    if let Some(name) = palette.name() {
        writeln!(out, "{name}")?;
    }
    writeln!(out, "primary   {} on {}", palette.primary(), palette.primary_foreground())?;
    if let (Some(color), Some(fg)) = (palette.secondary(), palette.secondary_foreground()) {
        writeln!(out, "secondary {color} on {fg}")?;
    }
    if let (Some(color), Some(fg)) = (palette.accent(), palette.accent_foreground()) {
        writeln!(out, "accent    {color} on {fg}")?;
    }
    for (name, value) in palette.derived_tokens() {
        writeln!(out, "{name}: {value};")?;
    }
    Ok(())
}

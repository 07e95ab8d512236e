//! Argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use ecosystem_theme::{ThemeMode, ThemeName};
use std::path::PathBuf;

/// Inspect and customize Ecosystem themes
#[derive(Parser, Debug)]
#[command(name = "ecosystem", version, about, long_about = None)]
pub struct Cli {
    /// Project directory (holds ecosystem.toml)
    #[arg(short = 'C', long, default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default ecosystem.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Print the applied CSS variables
    Vars {
        /// Theme to render instead of the stored one
        #[arg(long)]
        theme: Option<ThemeName>,
        /// Mode to render instead of the stored one
        #[arg(long)]
        mode: Option<ThemeMode>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },
    /// Print the 50-900 scale generated from a color
    Scale {
        hex: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },
    /// Report the contrast ratio of two colors
    Contrast { foreground: String, background: String },
    /// Show or change the theme selection
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Show or change motion intensity
    Motion {
        #[command(subcommand)]
        action: Option<MotionAction>,
    },
    /// Manage custom color palettes
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Manage custom fonts
    Fonts {
        #[command(subcommand)]
        action: FontAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Css,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the current selection
    Show,
    /// Select a theme
    Set { theme: ThemeName },
    /// Select a color mode
    Mode { mode: ThemeMode },
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum MotionAction {
    /// Print the resolved motion preference
    Show,
    /// Set the intensity (0-10; out-of-range values are clamped)
    Set {
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
}

/// Target (theme, mode); defaults to the stored selection
#[derive(Args, Debug, Clone, Copy)]
pub struct Target {
    #[arg(long)]
    pub theme: Option<ThemeName>,
    #[arg(long)]
    pub mode: Option<ThemeMode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Customization {
    Simple,
    Advanced,
}

#[derive(Subcommand, Debug)]
pub enum PaletteAction {
    /// Print the active custom palette
    Show {
        #[command(flatten)]
        target: Target,
    },
    /// Switch between primary-only and full palettes
    Mode {
        #[arg(value_enum)]
        mode: Customization,
    },
    /// Set the primary color
    Primary {
        hex: String,
        #[command(flatten)]
        target: Target,
    },
    /// Set the secondary color (advanced mode)
    Secondary {
        hex: String,
        #[command(flatten)]
        target: Target,
    },
    /// Set the accent color (advanced mode)
    Accent {
        hex: String,
        #[command(flatten)]
        target: Target,
    },
    /// Replace the palette with up to three colors at once
    Apply {
        #[command(flatten)]
        colors: PaletteColors,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        target: Target,
    },
    /// Remove custom colors (one mode with --mode, else the whole theme)
    Reset {
        #[arg(long)]
        theme: Option<ThemeName>,
        #[arg(long)]
        mode: Option<ThemeMode>,
    },
    /// Save a palette preset
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        colors: PaletteColors,
        /// Mood tags
        #[arg(long = "mood")]
        mood: Vec<String>,
    },
    /// List saved palette presets
    List,
    /// Apply a saved preset
    Use {
        id: String,
        #[command(flatten)]
        target: Target,
    },
    /// Delete a saved preset
    Delete { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct PaletteColors {
    #[arg(long)]
    pub primary: String,
    #[arg(long)]
    pub secondary: Option<String>,
    #[arg(long)]
    pub accent: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct FontArgs {
    #[arg(long)]
    pub heading: Option<String>,
    #[arg(long)]
    pub body: Option<String>,
    #[arg(long)]
    pub mono: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum FontAction {
    /// Print the fonts in effect for a theme
    Show {
        #[arg(long)]
        theme: Option<ThemeName>,
    },
    /// Override fonts for a theme; unset slots keep the theme's fonts
    Set {
        #[command(flatten)]
        fonts: FontArgs,
        #[arg(long)]
        theme: Option<ThemeName>,
    },
    /// Drop font overrides for a theme
    Reset {
        #[arg(long)]
        theme: Option<ThemeName>,
    },
    /// Save a font preset
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        fonts: FontArgs,
        #[arg(long = "mood")]
        mood: Vec<String>,
    },
    /// List saved font presets
    List,
    /// Apply a saved font preset to a theme
    Use {
        id: String,
        #[arg(long)]
        theme: Option<ThemeName>,
    },
    /// Delete a saved font preset
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_theme_names() {
        let cli = Cli::try_parse_from(["ecosystem", "theme", "set", "terra"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: Some(ThemeAction::Set {
                    theme: ThemeName::Terra
                })
            }
        ));
        assert!(Cli::try_parse_from(["ecosystem", "theme", "set", "neon"]).is_err());
    }

    #[test]
    fn test_negative_motion() {
        let cli = Cli::try_parse_from(["ecosystem", "motion", "set", "-3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Motion {
                action: Some(MotionAction::Set { level: -3 })
            }
        ));
    }
}

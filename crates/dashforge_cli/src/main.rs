//! Dashforge CLI
//!
//! Renders theme stylesheets for static hosting, dumps the design token
//! tables and checks palettes for missing companion colors.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashforge_theme::stylesheet::{button_variables, icon_variables, theme_stylesheet};
use dashforge_theme::tokens::{ButtonTokens, IconTokens};
use dashforge_theme::{utility_css, validate_palette, PartialTheme, ThemeName, TokenCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DashforgeConfig, LayeredTheme, ThemeConfig, CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "dashforge")]
#[command(about = "Theme tooling for Dashforge dashboards")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved theme as a stylesheet
    Css {
        /// Configuration file or directory containing dashforge.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Append utility classes (also enabled by `generate_utilities` in the config)
        #[arg(long)]
        utilities: bool,

        /// Add a prefers-color-scheme: dark block built from the dark base
        #[arg(long)]
        dark_media: bool,

        /// Append the button and icon component variables
        #[arg(long)]
        components: bool,
    },

    /// Dump every design token table as JSON
    Tokens {
        #[arg(long)]
        pretty: bool,
    },

    /// Report missing companion colors in the configured palette
    Validate {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a starter dashforge.toml
    Init {
        /// Directory to create the file in
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Start from the dark theme
        #[arg(long)]
        dark: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Css {
            config,
            utilities,
            dark_media,
            components,
        } => {
            let config = DashforgeConfig::discover(config.as_deref())?;
            print!("{}", render_css(&config, utilities, dark_media, components));
        }
        Command::Tokens { pretty } => {
            let catalog = TokenCatalog::material();
            let json = if pretty {
                serde_json::to_string_pretty(&catalog)
            } else {
                serde_json::to_string(&catalog)
            }
            .context("Failed to serialize tokens")?;
            println!("{json}");
        }
        Command::Validate { config } => {
            let config = DashforgeConfig::discover(config.as_deref())?;
            let theme = config.resolve();
            let warnings = validate_palette(&theme.colors);
            if warnings.is_empty() {
                info!("palette complete ({} colors)", theme.colors.len());
            } else {
                for warning in &warnings {
                    println!("{warning}");
                }
                info!("{} missing companion colors", warnings.len());
            }
        }
        Command::Init { path, dark, force } => init(&path, dark, force)?,
    }

    Ok(())
}

/// Stylesheet text for `css`
fn render_css(
    config: &DashforgeConfig,
    utilities: bool,
    dark_media: bool,
    components: bool,
) -> String {
    let theme = config.resolve();
    let dark = dark_media.then(|| config.resolve_on(ThemeName::Dark));

    let mut css = theme_stylesheet(&theme, dark.as_ref());
    if components {
        css.push('\n');
        css.push_str(&button_variables(&ButtonTokens::default()));
        css.push('\n');
        css.push_str(&icon_variables(&IconTokens::default()));
    }
    if utilities || config.generate_utilities {
        css.push('\n');
        css.push_str(&utility_css(&theme));
    }
    css
}

fn init(dir: &Path, dark: bool, force: bool) -> Result<()> {
    let target = dir.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            target.display()
        );
    }

    let base = if dark { ThemeName::Dark } else { ThemeName::Light };
    let primary = base
        .theme()
        .color("primary")
        .cloned()
        .context("built-in theme has no primary color")?;
    let config = DashforgeConfig {
        generate_utilities: false,
        theme: Some(ThemeConfig::Layered(LayeredTheme {
            base,
            overrides: PartialTheme::new().name("custom").color("primary", primary),
        })),
    };

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&target, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    info!("wrote {}", target.display());
    Ok(())
}

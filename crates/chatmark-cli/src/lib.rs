//! # chatmark CLI
//!
//! Reads one chat message, segments it and prints the block tree as HTML,
//! JSON or a debug tree. Rendering options come from the config file and
//! can be overridden per run.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{Block, RenderOptions, render_html, segment};
use clap::{Parser, ValueEnum};

/// Input path meaning "read stdin".
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Html,
    Json,
    /// Rust debug view of the block tree
    Tree,
}

#[derive(Debug, Parser)]
#[command(name = "chatmark", version)]
#[command(about = "Render a chat message as HTML, JSON or a block tree")]
pub struct Cli {
    /// Message file (`-` or absent reads stdin)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Config file (defaults to ~/.config/chatmark/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leave the copy button out of code block headers
    #[arg(long)]
    pub no_copy_button: bool,

    /// Open links in the same tab
    #[arg(long)]
    pub same_tab: bool,

    /// Save the effective render options to the config file instead of rendering
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let config = self.base_config()?;
        let mut options = config.render_options();
        if self.no_copy_button {
            options.copy_button = false;
        }
        if self.same_tab {
            options.open_links_in_new_tab = false;
        }
        Ok(options)
    }

    /// The config to start from. When writing, a missing explicit file is
    /// about to be created, so defaults stand in for it.
    fn base_config(&self) -> Result<Config> {
        match self.config.as_deref() {
            Some(path) if self.write_config && !expand_config_path(path)?.exists() => {
                Ok(Config::default())
            }
            path => load_config(path),
        }
    }
}

fn expand_config_path(path: &Path) -> Result<PathBuf> {
    Config::expand_path(path)
        .with_context(|| format!("Failed to expand config path {}", path.display()))
}

/// Loads the config at `path`, or at the default location when `None`.
///
/// A missing default config yields defaults; a missing explicit one is an
/// error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        let config = Config::load()?;
        if config.is_none() {
            log::debug!(
                "No config at {}, using defaults",
                Config::config_path().display()
            );
        }
        return Ok(config.unwrap_or_default());
    };

    let config_path = expand_config_path(path)?;
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => bail!("Config file not found: {}", config_path.display()),
    }
}

/// Saves `options` to the config at `path`, or at the default location when
/// `None`. Returns the path written.
pub fn write_config(path: Option<&Path>, options: &RenderOptions) -> Result<PathBuf> {
    let config = Config::from(options);
    let config_path = match path {
        Some(path) => {
            let config_path = expand_config_path(path)?;
            config.save_to_path(&config_path)?;
            config_path
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    log::info!("Wrote config to {}", config_path.display());
    Ok(config_path)
}

/// Reads the message from a file, or from stdin for `None` and `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new(STDIN_PATH) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from {}", path.display())),
        _ => {
            let mut message = String::new();
            std::io::stdin()
                .read_to_string(&mut message)
                .context("Failed to read message from stdin")?;
            Ok(message)
        }
    }
}

pub fn format_blocks(blocks: &[Block], format: Format, options: &RenderOptions) -> Result<String> {
    let output = match format {
        Format::Html => render_html(blocks, options),
        Format::Json => {
            serde_json::to_string_pretty(blocks).context("Failed to serialize blocks")?
        }
        Format::Tree => format!("{blocks:#?}"),
    };
    Ok(output)
}

pub fn run(cli: &Cli) -> Result<String> {
    let options = cli.render_options()?;
    if cli.write_config {
        let config_path = write_config(cli.config.as_deref(), &options)?;
        return Ok(format!("Wrote config to {}", config_path.display()));
    }

    let message = read_input(cli.input.as_deref())?;
    let blocks = segment(&message);
    log::info!(
        "Segmented {} byte message into {} blocks",
        message.len(),
        blocks.len()
    );
    format_blocks(&blocks, cli.format, &options)
}

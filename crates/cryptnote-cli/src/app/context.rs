//! Application context for the Cryptnote CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{default_config_path, load_config, CryptnoteConfig};
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CryptnoteConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file location: `--config`, `CRYPTNOTE_CONFIG`, or the XDG default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.cli.config {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&CryptnoteConfig> {
        self.config
            .get_or_try_init(|| load_config(&self.config_path()?))
    }

    /// Build the UI context for a command.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::detect(json, self.cli.no_color, self.cli.ascii)
    }

    /// Whether prompts may be shown.
    pub fn interactive(&self, no_input: bool) -> bool {
        !no_input && std::io::stdin().is_terminal()
    }
}

//! Cryptnote CLI - password-sealed messages that travel as plain text
//!
//! This is the command-line interface for Cryptnote. It wires input,
//! prompts and configuration to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use cryptnote_core::{CryptnoteError, VERSION};
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{file, inspect, keygen, misc, open, seal, share, strength};
use crate::constants::PASSWORD_ENV;
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);

        let full = format!("{}", e);
        let (message, hint) = split_hint(&full);
        let hint = hint.or_else(|| contextual_hint(&e));

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Split an error message of the form "message\nHint: ..." into its parts.
fn split_hint(error: &str) -> (&str, Option<String>) {
    match error.find("\nHint:") {
        Some(idx) => (
            &error[..idx],
            Some(error[idx + 1..].trim_start_matches("Hint:").trim().to_string()),
        ),
        None => (error, None),
    }
}

/// Hints for core errors that carry none of their own.
fn contextual_hint(error: &anyhow::Error) -> Option<String> {
    let core = error.downcast_ref::<CryptnoteError>()?;
    let hint = match core {
        CryptnoteError::InvalidKeyOrCorruptData => format!(
            "Check the password. Set {} or enter it at the prompt.",
            PASSWORD_ENV
        ),
        CryptnoteError::MalformedEnvelope(_) => {
            "Run `cryptnote inspect` on the message to check its structure.".to_string()
        }
        CryptnoteError::NotAFilePayload(_) => {
            "Use `cryptnote open` for text messages.".to_string()
        }
        CryptnoteError::PayloadTooLarge { .. } => {
            "Split the file or compress it before sealing.".to_string()
        }
        _ => return None,
    };
    Some(hint)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Seal(args)) => seal::handle_seal(ctx, args)?,
        Some(Commands::Open(args)) => open::handle_open(ctx, args)?,
        Some(Commands::Inspect(args)) => inspect::handle_inspect(ctx, args)?,
        Some(Commands::Keygen(args)) => keygen::handle_keygen(ctx, args)?,
        Some(Commands::Strength(args)) => strength::handle_strength(ctx, args)?,
        Some(Commands::Share(args)) => share::handle_share(ctx, args)?,
        Some(Commands::SealFile(args)) => file::handle_seal_file(ctx, args)?,
        Some(Commands::OpenFile(args)) => file::handle_open_file(ctx, args)?,
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell)?,
        None => {
            println!("Cryptnote v{}", VERSION);
            println!("\nRun `cryptnote --help` for usage information.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("File not found: a\nHint: Check the path.");
        assert_eq!(message, "File not found: a");
        assert_eq!(hint.as_deref(), Some("Check the path."));
    }

    #[test]
    fn test_split_hint_absent() {
        let (message, hint) = split_hint("plain failure");
        assert_eq!(message, "plain failure");
        assert_eq!(hint, None);
    }

    #[test]
    fn test_contextual_hint_for_wrong_key() {
        let err = anyhow::Error::new(CryptnoteError::InvalidKeyOrCorruptData);
        let hint = contextual_hint(&err).unwrap();
        assert!(hint.contains(PASSWORD_ENV));
    }

    #[test]
    fn test_contextual_hint_absent_for_other_errors() {
        assert_eq!(contextual_hint(&anyhow::anyhow!("boom")), None);
    }
}

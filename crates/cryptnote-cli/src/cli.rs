use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use cryptnote_core::VERSION;

use crate::constants::{CONFIG_ENV, MAX_KEY_LENGTH};

/// Cryptnote - password-sealed messages that travel as plain text
#[derive(Parser)]
#[command(name = "cryptnote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seal a message with a password
    Seal(SealArgs),

    /// Open a sealed message or share link
    Open(OpenArgs),

    /// Show the structure of a sealed message without a password
    Inspect(InspectArgs),

    /// Generate a random password
    Keygen(KeygenArgs),

    /// Score the strength of a password
    Strength(StrengthArgs),

    /// Build a share link for a sealed message
    Share(ShareArgs),

    /// Seal a file
    SealFile(SealFileArgs),

    /// Open a sealed file
    OpenFile(OpenFileArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `seal` command
#[derive(Args)]
pub struct SealArgs {
    /// Message to seal (reads stdin when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Use 10000 key derivation rounds instead of 1000
    #[arg(long)]
    pub high_security: bool,

    /// Also print a share link
    #[arg(long)]
    pub link: bool,

    /// Embed the password in the share link
    #[arg(long, requires = "link")]
    pub embed_key: bool,

    /// Base URL for the share link
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `open` command
#[derive(Args)]
pub struct OpenArgs {
    /// Sealed message or share link (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if the integrity check fails
    #[arg(long)]
    pub strict: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Sealed message (reads stdin when omitted)
    #[arg(value_name = "WIRE")]
    pub wire: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `keygen` command
#[derive(Args)]
pub struct KeygenArgs {
    /// Number of characters (1-4096)
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_KEY_LENGTH as u64)
    )]
    pub length: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `strength` command
#[derive(Args)]
pub struct StrengthArgs {
    /// Password to score (prompted when omitted)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `share` command
#[derive(Args)]
pub struct ShareArgs {
    /// Sealed message
    #[arg(value_name = "WIRE")]
    pub wire: String,

    /// Base URL for the share link
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Embed the password in the share link
    #[arg(long)]
    pub embed_key: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `seal-file` command
#[derive(Args)]
pub struct SealFileArgs {
    /// File to seal
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Destination (defaults to PATH.encrypted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use 10000 key derivation rounds instead of 1000
    #[arg(long)]
    pub high_security: bool,

    /// Overwrite an existing destination
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `open-file` command
#[derive(Args)]
pub struct OpenFileArgs {
    /// Sealed file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Destination (defaults to the original file name)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing destination
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if the integrity check fails
    #[arg(long)]
    pub strict: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for mrkdwn
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Convert Markdown to mrkdwn, and mrkdwn to HTML previews"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, e.g.
  /// `html.large_emoji=yes`, can be used multiple times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mrkdwn CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Convert standard Markdown to mrkdwn.
  ToMrkdwn {
    /// Markdown file to read. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// File to write the result to. Writes to standard output when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Convert mrkdwn to a sanitized HTML preview.
  ToHtml {
    /// Mrkdwn file to read. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// File to write the result to. Writes to standard output when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Look up an emoji shortcode and print its glyph.
  Emoji {
    /// Shortcode name, with or without the surrounding colons.
    name: String,

    /// Print the HTML fragment used in previews instead of the bare glyph.
    #[arg(long)]
    html: bool,

    /// With `--html`, use the enlarged emoji class.
    #[arg(long, requires = "html")]
    large: bool,
  },

  /// Initialize a new mrkdwn configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mrkdwn.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

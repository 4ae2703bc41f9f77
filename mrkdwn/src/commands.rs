//! Subcommand handlers. Each one does its I/O here and leaves conversion to
//! `mrkdwn-convert`.
use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use log::{debug, info};
use mrkdwn_config::Config;
use mrkdwn_convert::{
  Converter,
  ConverterOptions,
  converter::{markdown_to_mrkdwn_with_recovery, mrkdwn_to_html_with_recovery},
  emoji::{EmojiOptions, render_emoji, resolve_emoji},
};

use crate::cli::{Cli, Commands};

/// Run the command selected on the command line.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, input cannot be
/// read, output cannot be written, or an emoji shortcode is unknown.
pub fn run(cli: &Cli) -> Result<()> {
  match &cli.command {
    Commands::ToMrkdwn { input, output } => {
      let converter = converter(cli)?;
      let markdown = read_input(input.as_deref())?;
      let mrkdwn = markdown_to_mrkdwn_with_recovery(&converter, &markdown);
      write_output(output.as_deref(), &mrkdwn)
    },
    Commands::ToHtml { input, output } => {
      let converter = converter(cli)?;
      let text = read_input(input.as_deref())?;
      let html = mrkdwn_to_html_with_recovery(&converter, &text);
      write_output(output.as_deref(), &html)
    },
    Commands::Emoji { name, html, large } => {
      let rendered = emoji(name, *html, *large)?;
      write_output(None, &rendered)
    },
    Commands::Init {
      output,
      format,
      force,
    } => init(output, format, *force),
  }
}

fn converter(cli: &Cli) -> Result<Converter> {
  let config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;
  let options = ConverterOptions::from(&config);
  debug!("Converter options: {options:?}");
  Ok(Converter::new(options))
}

/// Read the whole input, from `path` or standard input. One trailing
/// newline is dropped, since files and shell pipes end with one.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String> {
  let mut content = match path {
    Some(path) => {
      fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read input file: {}", path.display()))?
    },
    None => {
      let mut buffer = String::new();
      io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Failed to read standard input")?;
      buffer
    },
  };

  if content.ends_with('\n') {
    content.pop();
    if content.ends_with('\r') {
      content.pop();
    }
  }
  Ok(content)
}

/// Write `content` followed by a newline to `path`, or to standard output.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
  match path {
    Some(path) => {
      fs::write(path, format!("{content}\n")).wrap_err_with(|| {
        format!("Failed to write output file: {}", path.display())
      })?;
      info!("Wrote {}", path.display());
    },
    None => {
      let mut stdout = io::stdout().lock();
      writeln!(stdout, "{content}")
        .and_then(|()| stdout.flush())
        .wrap_err("Failed to write to standard output")?;
    },
  }
  Ok(())
}

/// Resolve a shortcode, given with or without colons, to its glyph or its
/// preview fragment.
///
/// # Errors
///
/// Returns an error if the name is not a known shortcode.
pub fn emoji(name: &str, html: bool, large: bool) -> Result<String> {
  let name = name.trim();
  let name = name
    .strip_prefix(':')
    .and_then(|inner| inner.strip_suffix(':'))
    .unwrap_or(name);

  let rendered = if html {
    render_emoji(name, EmojiOptions { large })
  } else {
    resolve_emoji(name).map(str::to_owned)
  };

  match rendered {
    Some(rendered) => Ok(rendered),
    None => bail!("Unknown emoji shortcode: :{name}:"),
  }
}

/// Write the default configuration file.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if the
/// file or its parent directory cannot be created.
pub fn init(output: &Path, format: &str, force: bool) -> Result<()> {
  // Check if file already exists and that we're not forcing overwrite
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
    info!("Created directory: {}", parent.display());
  }

  Config::generate_default_config(format, output).wrap_err_with(|| {
    format!("Failed to generate configuration file: {}", output.display())
  })?;

  info!("Configuration file created successfully. Edit it to adjust conversion.");
  Ok(())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_emoji_accepts_colons() {
    assert_eq!(emoji(":tada:", false, false).unwrap(), "🎉");
    assert_eq!(emoji("tada", false, false).unwrap(), "🎉");
  }

  #[test]
  fn test_emoji_html_fragment() {
    let html = emoji("tada", true, true).unwrap();
    assert!(html.contains("emoji-large"));
    assert!(html.contains(r#"title=":tada:""#));
  }

  #[test]
  fn test_emoji_unknown() {
    let err = emoji("not_a_real_emoji", false, false).unwrap_err();
    assert!(err.to_string().contains(":not_a_real_emoji:"));
  }
}

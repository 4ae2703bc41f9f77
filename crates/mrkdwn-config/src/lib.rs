//! File-backed configuration for the `mrkdwn` converter.
//!
//! A [`Config`] is read from TOML or JSON, merged across several files and
//! adjusted with `KEY=VALUE` overrides, then turned into the
//! [`ConverterOptions`](mrkdwn_convert::ConverterOptions) the engine runs
//! with.
pub mod config;
pub mod error;
pub mod templates;

pub use crate::{
  config::{Config, HtmlConfig, MarkdownConfig},
  error::ConfigError,
};

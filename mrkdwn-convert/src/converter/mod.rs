//! The converter and its options.
//!
//! - [`core`]: conversion methods on [`Converter`]
//! - [`process`]: entry points with panic recovery
//! - [`types`]: option and converter type definitions
pub mod core;
pub mod process;
pub mod types;

pub use process::{
  convert_safe,
  markdown_to_mrkdwn_with_recovery,
  mrkdwn_to_html_with_recovery,
};
pub use types::{Converter, ConverterOptions, ConverterOptionsBuilder};

//! Markdown to mrkdwn.
//!
//! Conversion is two steps: [`tokenize`] lexes Markdown into a closed
//! [`Token`] tree, then [`render_tokens`] walks that tree and emits mrkdwn.
//! Callers holding a token tree from elsewhere can skip the lexer and render
//! it directly.
mod render;
mod table;
pub mod token;

pub use render::render_tokens;
pub use token::{Token, TokenKind, tokenize};

//! Library half of the `mrkdwn` binary, exposed so the command handlers can
//! be exercised from integration tests. The conversion API itself lives in
//! `mrkdwn-convert`.
pub mod cli;
pub mod commands;

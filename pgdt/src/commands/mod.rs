//! Command modules for the pgdt CLI.
//!
//! Each subcommand lives in its own file and exposes an args struct plus a
//! `run_*` entry point.

pub mod common;

pub mod check;
pub mod server;
pub mod tokens;

//! Shell completions built from the flag table.
//!
//! clap never parses unipkg's arguments (the grammar has multi-letter short flags
//! like `-iy` that clap cannot express), but its command model is still the
//! easiest way to describe the flags to `clap_complete`. Multi-letter short forms
//! are left out of the model; their long forms complete instead.

use crate::flags::{Flag, FLAGS, SHELL_VALUE};
use crate::output::BIN_NAME;
use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io;

/// The single-character short form of a flag, if it has one.
fn short_char(flag: &Flag) -> Option<char> {
    let mut chars = flag.short?.strip_prefix('-')?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn flag_arg(flag: &'static Flag) -> Arg {
    let id = flag.long.trim_start_matches('-');
    let mut arg = Arg::new(id).long(id).help(flag.about);
    if let Some(c) = short_char(flag) {
        arg = arg.short(c);
    }
    match flag.value {
        Some(SHELL_VALUE) => arg
            .value_name("SHELL")
            .value_parser(clap::value_parser!(Shell)),
        Some(_) => arg.value_name("PACKAGE").action(ArgAction::Set),
        None => arg.action(ArgAction::SetTrue),
    }
}

/// The clap model of unipkg's command line.
#[must_use]
pub fn build_cli() -> Command {
    FLAGS.iter().fold(
        Command::new(BIN_NAME)
            .about("Search, install and remove packages with yay, flatpak and snap")
            .version(clap::crate_version!())
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(
                Arg::new("term")
                    .value_name("TERM")
                    .help("Search every package manager for TERM"),
            ),
        |cmd, flag| cmd.arg(flag_arg(flag)),
    )
}

/// Writes the completion script for `shell`.
pub fn generate_completions(shell: Shell, writer: &mut dyn io::Write) {
    let mut cmd = build_cli();
    generate(shell, &mut cmd, BIN_NAME, writer);
}

//! Help, usage and other fixed text printed by unipkg.
//!
//! Everything here is static: the help table is rendered from the flag table and
//! the rest are constants. Functions return `String`s so the text can be checked
//! without a terminal; the `print_*` wrappers write it out.

use crate::flags::FLAGS;
use colored::Colorize;
use std::fmt;
use tabular::{Row, Table};

pub const BIN_NAME: &str = "unipkg";

/// Printed after a search for `moo`.
pub const MOO: &str = r#"
                 (__)
                 (oo)
           /------\/
          / |    ||
         *  /\---/\
            ~~   ~~
..."Have you mooed today?"...
"#;

/// The two-line message shown for unknown flags and missing arguments.
#[must_use]
pub fn usage_text() -> String {
    format!(
        "Usage: {BIN_NAME} <term> | {BIN_NAME} <flag> [<package>]\n\
         Try '{BIN_NAME} --help' for more information."
    )
}

/// Hint for a flag given without its required value.
#[must_use]
pub fn flag_usage_text(flag: &str, value: &str, about: &str) -> String {
    format!("Usage: {BIN_NAME} {flag} {value}\n  {about}")
}

/// The full help screen.
#[must_use]
pub fn help_text() -> String {
    let mut table = Table::new("  {:<}  {:<}  {:<}");
    for flag in FLAGS {
        let long = match flag.value {
            Some(value) => format!("{} {}", flag.long, value),
            None => flag.long.to_string(),
        };
        table.add_row(
            Row::new()
                .with_cell(flag.short.unwrap_or(""))
                .with_cell(long)
                .with_cell(flag.about),
        );
    }

    format!(
        "{title}\n\n\
         {usage}\n  {BIN_NAME} <term>                 Search yay, flatpak and snap for <term>\n  \
         {BIN_NAME} <flag> [<package>]     Run a single action\n\n\
         {flags}\n{table}",
        title = format!("{BIN_NAME} - one front-end for yay, flatpak and snap").bold(),
        usage = "Usage:".bold(),
        flags = "Flags:".bold(),
    )
}

pub fn print_help() {
    print!("{}", help_text());
}

pub fn print_usage() {
    eprintln!("{}", usage_text());
}

pub fn print_flag_usage(flag: &str, value: &str, about: &str) {
    println!("{}", flag_usage_text(flag, value, about));
}

/// Header line for one backend's block of output.
#[must_use]
pub fn header_text(source: &impl fmt::Display) -> String {
    format!("{} {}", "::".blue().bold(), source.to_string().bold())
}

pub fn header(source: &impl fmt::Display) {
    println!("{}", header_text(source));
}

/// Print an info message in blue with an info icon
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Format a package name with emphasis
#[must_use]
pub fn package_name(name: &str) -> String {
    name.cyan().to_string()
}

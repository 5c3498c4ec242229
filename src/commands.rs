//! Command implementations for every unipkg operation.
//!
//! [`run_operation`] matches the decoded [`Operation`] and calls one of the
//! functions below. Fan-out commands visit the backends strictly one after the
//! other, in yay, flatpak, snap order, and keep going whatever an earlier backend
//! returned. Backend exit codes are logged, never turned into errors.
//!
//! # Examples
//!
//! ```rust,no_run
//! use unipkg::commands::run_operation;
//! use unipkg::flags::Operation;
//! use unipkg::selector::TerminalPrompt;
//! use unipkg::sources::Backends;
//!
//! # async fn example() -> unipkg::Result<()> {
//! let operation = Operation::parse(&["-c"])?;
//! run_operation(&operation, &Backends::builtin(), &mut TerminalPrompt).await?;
//! # Ok(())
//! # }
//! ```

use crate::completions::generate_completions;
use crate::data::Backend;
use crate::errors::Result;
use crate::flags::Operation;
use crate::output;
use crate::selector::{self, ChoicePrompt};
use crate::sources::{Backends, CommandStatus};
use crate::traits::{PackageManager, Verb};
use tracing::{debug, info, warn};


/// The term that earns a cow.
const MOO_TERM: &str = "moo";

/// Runs one decoded operation to completion.
pub async fn run_operation<M, P>(
    operation: &Operation,
    backends: &Backends<M>,
    prompt: &mut P,
) -> Result<()>
where
    M: PackageManager,
    P: ChoicePrompt,
{
    info!("Running {:?}", operation);
    match operation {
        Operation::Search { term } => search_command(backends, term).await,
        Operation::CheckUpdates => check_updates_command(backends).await,
        Operation::UpgradeAll => upgrade_all_command(backends).await,
        Operation::UpgradeOne { backend } => {
            single_command(backends, *backend, Verb::Upgrade).await
        }
        Operation::InstallOne { backend, name } => {
            single_command(backends, *backend, Verb::Install(name)).await
        }
        Operation::RemoveOne { backend, name } => {
            single_command(backends, *backend, Verb::Remove(name)).await
        }
        Operation::InstallInteractive { name } => {
            selector::install_interactive(backends, prompt, name).await
        }
        Operation::RemoveInteractive { name } => {
            selector::remove_interactive(backends, prompt, name).await
        }
        Operation::Help => {
            output::print_help();
            Ok(())
        }
        Operation::Version => {
            println!("{} {}", output::BIN_NAME, clap::crate_version!());
            Ok(())
        }
        Operation::Completions { shell } => {
            generate_completions(*shell, &mut std::io::stdout());
            Ok(())
        }
        Operation::MissingValue { flag, value, about } => {
            output::print_flag_usage(flag, value, about);
            Ok(())
        }
    }
}

fn log_status(backend: Backend, verb: &Verb<'_>, status: CommandStatus) {
    if status.success() {
        debug!("{} {:?} finished with {}", backend, verb, status);
    } else {
        warn!("{} {:?} finished with {}", backend, verb, status);
    }
}

/// Runs `verb` on every backend in order, each under its own header.
async fn fan_out<M: PackageManager>(backends: &Backends<M>, verb: Verb<'_>) -> Result<()> {
    for source in backends.iter() {
        output::header(source);
        let status = source.execute(verb).await?;
        log_status(source.backend(), &verb, status);
    }
    Ok(())
}

/// Searches yay, flatpak and snap for `term`.
pub async fn search_command<M: PackageManager>(backends: &Backends<M>, term: &str) -> Result<()> {
    fan_out(backends, Verb::Search(term)).await?;
    if term == MOO_TERM {
        print!("{}", output::MOO);
    }
    Ok(())
}

/// Lists pending updates from every backend without applying them.
pub async fn check_updates_command<M: PackageManager>(backends: &Backends<M>) -> Result<()> {
    fan_out(backends, Verb::ListUpdates).await
}

/// Upgrades yay, then flatpak, then snap.
///
/// Every backend is upgraded even if an earlier one fails, and the run still
/// succeeds: failures are only logged.
pub async fn upgrade_all_command<M: PackageManager>(backends: &Backends<M>) -> Result<()> {
    fan_out(backends, Verb::Upgrade).await
}

/// Runs one verb on one backend.
pub async fn single_command<M: PackageManager>(
    backends: &Backends<M>,
    backend: Backend,
    verb: Verb<'_>,
) -> Result<()> {
    let status = backends.get(backend).execute(verb).await?;
    log_status(backend, &verb, status);
    Ok(())
}

//! unipkg - one front-end for yay, flatpak and snap
//!
//! unipkg turns a short flag like `-u` or `-is` into the matching command line of
//! one or more Linux package managers and runs them with the terminal attached.
//! It keeps no state of its own: every run decodes the arguments, runs one
//! operation and exits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use unipkg::{Backends, Operation, TerminalPrompt};
//!
//! # async fn example() -> unipkg::Result<()> {
//! let operation = Operation::parse(&["-u"])?;
//! unipkg::commands::run_operation(&operation, &Backends::builtin(), &mut TerminalPrompt).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`flags`]: the flag table and [`Operation::parse`]
//! - [`commands`]: one function per operation
//! - [`sources`]: [`PackageSource`] adapters spawning yay, flatpak and snap
//! - [`selector`]: the probe-then-prompt flow behind `-i` and `-r`
//! - [`output`]: help, usage and headers
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`] with [`UnipkgError`]. A package
//! manager exiting non-zero is not an error: its status is relayed as a
//! [`CommandStatus`] and only logged.

pub mod commands;
pub mod completions;
pub mod data;
pub mod errors;
pub mod flags;
pub mod output;
pub mod selector;
pub mod sources;
pub mod traits;

// Re-export commonly used types
pub use data::Backend;
pub use errors::{Result, UnipkgError};
pub use flags::Operation;
pub use selector::{ChoicePrompt, TerminalPrompt};
pub use sources::{Backends, CommandStatus, PackageSource};
pub use traits::{PackageManager, Verb};

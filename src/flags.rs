//! The flag table and argument decoding.
//!
//! Every accepted flag lives in [`FLAGS`]. Decoding happens in two passes: first
//! every `-`-prefixed token is checked against the table, so a bad trailing flag
//! aborts before anything runs, then the first argument picks the [`Operation`]
//! and the second, if needed, supplies its value. Later arguments are ignored.

use crate::data::Backend;
use crate::errors::{Result, UnipkgError};
use clap::ValueEnum;
use clap_complete::Shell;
use tracing::debug;

/// Placeholder shown for flags that take a package name.
pub const PACKAGE_VALUE: &str = "<package>";

/// Placeholder shown for `--completions`.
pub const SHELL_VALUE: &str = "<shell>";

const FLAG_PREFIX: char = '-';

/// What a flag does once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    CheckUpdates,
    UpgradeAll,
    Upgrade(Backend),
    /// `None` asks the user which backend to use.
    Install(Option<Backend>),
    Remove(Option<Backend>),
    Completions,
}

/// One row of the flag table.
#[derive(Debug, Clone, Copy)]
pub struct Flag {
    pub short: Option<&'static str>,
    pub long: &'static str,
    /// Placeholder for the required second argument, if any.
    pub value: Option<&'static str>,
    pub about: &'static str,
    pub action: Action,
}

impl Flag {
    /// Whether `token` is this flag's short or long form.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.short == Some(token) || self.long == token
    }

    /// Finds the table entry for a token.
    #[must_use]
    pub fn lookup(token: &str) -> Option<&'static Flag> {
        FLAGS.iter().find(|flag| flag.matches(token))
    }
}

pub static FLAGS: &[Flag] = &[
    Flag {
        short: Some("-h"),
        long: "--help",
        value: None,
        about: "Show this help",
        action: Action::Help,
    },
    Flag {
        short: Some("-V"),
        long: "--version",
        value: None,
        about: "Show the version",
        action: Action::Version,
    },
    Flag {
        short: Some("-c"),
        long: "--check-update",
        value: None,
        about: "List available updates from every package manager",
        action: Action::CheckUpdates,
    },
    Flag {
        short: Some("-u"),
        long: "--upgrade-all",
        value: None,
        about: "Upgrade with yay, then flatpak, then snap",
        action: Action::UpgradeAll,
    },
    Flag {
        short: Some("-uy"),
        long: "--upgrade-yay",
        value: None,
        about: "Upgrade yay packages",
        action: Action::Upgrade(Backend::Yay),
    },
    Flag {
        short: Some("-uf"),
        long: "--upgrade-flatpak",
        value: None,
        about: "Upgrade flatpak packages",
        action: Action::Upgrade(Backend::Flatpak),
    },
    Flag {
        short: Some("-us"),
        long: "--upgrade-snap",
        value: None,
        about: "Upgrade snap packages",
        action: Action::Upgrade(Backend::Snap),
    },
    Flag {
        short: Some("-i"),
        long: "--install",
        value: Some(PACKAGE_VALUE),
        about: "Search every package manager, then choose one to install with",
        action: Action::Install(None),
    },
    Flag {
        short: Some("-iy"),
        long: "--install-yay",
        value: Some(PACKAGE_VALUE),
        about: "Install a package with yay",
        action: Action::Install(Some(Backend::Yay)),
    },
    Flag {
        short: Some("-if"),
        long: "--install-flatpak",
        value: Some(PACKAGE_VALUE),
        about: "Install a package with flatpak",
        action: Action::Install(Some(Backend::Flatpak)),
    },
    Flag {
        short: Some("-is"),
        long: "--install-snap",
        value: Some(PACKAGE_VALUE),
        about: "Install a package with snap",
        action: Action::Install(Some(Backend::Snap)),
    },
    Flag {
        short: Some("-r"),
        long: "--remove",
        value: Some(PACKAGE_VALUE),
        about: "Look for the package everywhere, then choose one to remove from",
        action: Action::Remove(None),
    },
    Flag {
        short: Some("-ry"),
        long: "--remove-yay",
        value: Some(PACKAGE_VALUE),
        about: "Remove a package with yay",
        action: Action::Remove(Some(Backend::Yay)),
    },
    Flag {
        short: Some("-rf"),
        long: "--remove-flatpak",
        value: Some(PACKAGE_VALUE),
        about: "Remove a package with flatpak",
        action: Action::Remove(Some(Backend::Flatpak)),
    },
    Flag {
        short: Some("-rs"),
        long: "--remove-snap",
        value: Some(PACKAGE_VALUE),
        about: "Remove a package with snap",
        action: Action::Remove(Some(Backend::Snap)),
    },
    Flag {
        short: None,
        long: "--completions",
        value: Some(SHELL_VALUE),
        about: "Print a completion script for bash, zsh, fish, elvish or powershell",
        action: Action::Completions,
    },
];

/// The single action selected for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Search { term: String },
    CheckUpdates,
    UpgradeAll,
    UpgradeOne { backend: Backend },
    InstallOne { backend: Backend, name: String },
    InstallInteractive { name: String },
    RemoveOne { backend: Backend, name: String },
    RemoveInteractive { name: String },
    Help,
    Version,
    Completions { shell: Shell },
    /// A flag that needs a value was given without one.
    MissingValue {
        flag: String,
        value: &'static str,
        about: &'static str,
    },
}

impl Operation {
    /// Decodes the arguments that follow the program name.
    ///
    /// The second argument is taken verbatim as the package name, even when it
    /// is itself a known flag: `-ry -c` removes a package called `-c`.
    ///
    /// # Errors
    ///
    /// - [`UnipkgError::UnknownFlag`] if any `-`-prefixed token is not in [`FLAGS`]
    /// - [`UnipkgError::MissingArgument`] if the first argument is absent or empty
    /// - [`UnipkgError::UnknownShell`] if `--completions` names an unknown shell
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unipkg::data::Backend;
    /// use unipkg::flags::Operation;
    ///
    /// let op = Operation::parse(&["-iy", "firefox"]).unwrap();
    /// assert_eq!(
    ///     op,
    ///     Operation::InstallOne { backend: Backend::Yay, name: "firefox".to_string() }
    /// );
    /// ```
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Operation> {
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();

        if let Some(bad) = args
            .iter()
            .find(|token| token.starts_with(FLAG_PREFIX) && Flag::lookup(token).is_none())
        {
            return Err(UnipkgError::UnknownFlag(bad.to_string()));
        }

        let first = match args.first() {
            Some(first) if !first.is_empty() => *first,
            _ => return Err(UnipkgError::MissingArgument),
        };
        let second = args.get(1).copied().filter(|value| !value.is_empty());

        let operation = match Flag::lookup(first) {
            None => Operation::Search {
                term: first.to_string(),
            },
            Some(flag) => Self::from_flag(flag, first, second)?,
        };
        debug!("Decoded {:?} from {} argument(s)", operation, args.len());
        Ok(operation)
    }

    fn from_flag(flag: &'static Flag, typed: &str, value: Option<&str>) -> Result<Operation> {
        let missing = || Operation::MissingValue {
            flag: typed.to_string(),
            value: flag.value.unwrap_or_default(),
            about: flag.about,
        };

        let operation = match flag.action {
            Action::Help => Operation::Help,
            Action::Version => Operation::Version,
            Action::CheckUpdates => Operation::CheckUpdates,
            Action::UpgradeAll => Operation::UpgradeAll,
            Action::Upgrade(backend) => Operation::UpgradeOne { backend },
            Action::Install(target) => match (target, value) {
                (_, None) => missing(),
                (Some(backend), Some(name)) => Operation::InstallOne {
                    backend,
                    name: name.to_string(),
                },
                (None, Some(name)) => Operation::InstallInteractive {
                    name: name.to_string(),
                },
            },
            Action::Remove(target) => match (target, value) {
                (_, None) => missing(),
                (Some(backend), Some(name)) => Operation::RemoveOne {
                    backend,
                    name: name.to_string(),
                },
                (None, Some(name)) => Operation::RemoveInteractive {
                    name: name.to_string(),
                },
            },
            Action::Completions => match value {
                None => missing(),
                Some(name) => Operation::Completions {
                    shell: Shell::from_str(name, true)
                        .map_err(|_| UnipkgError::UnknownShell(name.to_string()))?,
                },
            },
        };
        Ok(operation)
    }
}

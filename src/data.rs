//! Backends and their built-in command definitions.
//!
//! There is no configuration file: the three package managers and the command
//! lines used for every verb are fixed here.

use std::fmt;

/// One of the three supported package managers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Backend {
    Yay,
    Flatpak,
    Snap,
}

impl Backend {
    /// All backends, in the order every fan-out visits them.
    pub const ALL: [Backend; 3] = [Backend::Yay, Backend::Flatpak, Backend::Snap];

    /// The lowercase name used in flags, prompts and headers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Yay => "yay",
            Backend::Flatpak => "flatpak",
            Backend::Snap => "snap",
        }
    }

    /// The one-letter key used in flag suffixes (`-iy`) and at the prompt.
    #[must_use]
    pub fn key(&self) -> char {
        match self {
            Backend::Yay => 'y',
            Backend::Flatpak => 'f',
            Backend::Snap => 's',
        }
    }

    /// Position in [`Backend::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Backend::Yay => 0,
            Backend::Flatpak => 1,
            Backend::Snap => 2,
        }
    }

    /// Matches either the one-letter key or the full name.
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Backend> {
        Backend::ALL
            .into_iter()
            .find(|b| answer == b.name() || answer.chars().eq([b.key()]))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of how a backend is driven.
///
/// Command templates include the program name and are split with shell word
/// rules. The package name or search term is appended as its own argument.
#[derive(Debug, Clone, Copy)]
pub struct SourceDefinition {
    pub backend: Backend,
    pub emoji: &'static str,
    pub shell_command: &'static str,
    pub search: &'static str,
    pub list_updates: &'static str,
    pub upgrade: &'static str,
    pub install: &'static str,
    pub remove: &'static str,
    /// Lists installed packages; matched against a name for existence checks.
    pub list_installed: &'static str,
    /// Whether upgrade, install and remove run through `sudo`.
    pub elevate: bool,
}

pub static BUILTIN_SOURCES: [SourceDefinition; 3] = [
    SourceDefinition {
        backend: Backend::Yay,
        emoji: "📦",
        shell_command: "yay",
        search: "yay -Ss",
        list_updates: "yay -Qu",
        upgrade: "yay -Syu",
        install: "yay -S",
        remove: "yay -Rns",
        list_installed: "yay -Q",
        // yay calls sudo itself and refuses to run as root
        elevate: false,
    },
    SourceDefinition {
        backend: Backend::Flatpak,
        emoji: "🧩",
        shell_command: "flatpak",
        search: "flatpak search",
        list_updates: "flatpak remote-ls --updates",
        upgrade: "flatpak update",
        install: "flatpak install",
        remove: "flatpak uninstall",
        list_installed: "flatpak list",
        elevate: true,
    },
    SourceDefinition {
        backend: Backend::Snap,
        emoji: "🫰",
        shell_command: "snap",
        search: "snap find",
        list_updates: "snap refresh --list",
        upgrade: "snap refresh",
        install: "snap install",
        remove: "snap remove",
        list_installed: "snap list",
        elevate: true,
    },
];

/// Looks up the built-in definition for a backend.
#[must_use]
pub fn definition_for(backend: Backend) -> &'static SourceDefinition {
    &BUILTIN_SOURCES[backend.index()]
}

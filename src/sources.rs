//! Package manager adapters.
//!
//! - [`PackageSource`]: runs one backend's fixed command lines
//! - [`Backends`]: the three adapters in fan-out order
//! - [`CommandStatus`]: what an adapter call hands back
//!
//! Commands are spawned directly from an argv vector, never through a shell, and
//! their stdio is inherited so package manager output reaches the user untouched.
//!
//! # Examples
//!
//! ```rust,no_run
//! use unipkg::sources::Backends;
//! use unipkg::traits::{PackageManager, Verb};
//!
//! # async fn example() -> unipkg::Result<()> {
//! let backends = Backends::builtin();
//! for source in backends.iter() {
//!     source.execute(Verb::ListUpdates).await?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::data::{definition_for, Backend, SourceDefinition};
use crate::errors::{Result, UnipkgError};
use crate::traits::{PackageManager, Verb};
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::io::ErrorKind;

use colored::Colorize;
use derive_builder::Builder;
use shell_escape::escape;
use tokio::process::Command;
use tracing::{debug, trace, warn};

/// Prefix for commands that need root.
const ELEVATE_COMMAND: &str = "sudo";

/// The relayed outcome of one package manager invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The process exited with this code.
    Exited(i32),
    /// The process was terminated without an exit code.
    Signaled,
    /// The executable was not found on `PATH`, nothing was run.
    NotInstalled,
}

impl CommandStatus {
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        status
            .code()
            .map_or(CommandStatus::Signaled, CommandStatus::Exited)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Exited(code) => write!(f, "exit code {code}"),
            CommandStatus::Signaled => f.write_str("a signal"),
            CommandStatus::NotInstalled => f.write_str("not installed"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct PackageSource {
    /// The backend this source drives.
    name: Backend,
    /// An icon shown next to the backend name in headers.
    emoji: String,
    /// The executable looked up on `PATH` before anything is run.
    shell_command: String,
    /// Searches remote packages, for example `yay -Ss`.
    search_command: String,
    /// Lists pending updates without applying them.
    list_updates_command: String,
    /// Upgrades everything the backend manages.
    upgrade_command: String,
    install_command: String,
    remove_command: String,
    /// Lists installed packages, one per line.
    list_command: String,
    /// Run upgrade, install and remove through `sudo`.
    #[builder(default)]
    elevate: bool,
}

impl From<&SourceDefinition> for PackageSource {
    fn from(def: &SourceDefinition) -> Self {
        PackageSource {
            name: def.backend,
            emoji: def.emoji.to_string(),
            shell_command: def.shell_command.to_string(),
            search_command: def.search.to_string(),
            list_updates_command: def.list_updates.to_string(),
            upgrade_command: def.upgrade.to_string(),
            install_command: def.install.to_string(),
            remove_command: def.remove.to_string(),
            list_command: def.list_installed.to_string(),
            elevate: def.elevate,
        }
    }
}

impl PackageSource {
    /// The built-in adapter for a backend.
    #[must_use]
    pub fn builtin(backend: Backend) -> Self {
        PackageSource::from(definition_for(backend))
    }

    /// Get the backend this source drives
    #[must_use]
    pub fn name(&self) -> Backend {
        self.name
    }

    /// Get the package source name as string
    #[must_use]
    pub fn name_str(&self) -> String {
        self.name.to_string()
    }

    #[must_use]
    fn template_for(&self, verb: &Verb<'_>) -> &str {
        match verb {
            Verb::Search(_) => &self.search_command,
            Verb::ListUpdates => &self.list_updates_command,
            Verb::Upgrade => &self.upgrade_command,
            Verb::Install(_) => &self.install_command,
            Verb::Remove(_) => &self.remove_command,
        }
    }

    fn split_template(&self, template: &str) -> Result<Vec<String>> {
        shlex::split(template)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| {
                UnipkgError::invalid_source(
                    self.name_str(),
                    format!("cannot split command '{template}'"),
                )
            })
    }

    /// Builds the full argv for a verb, including `sudo` and the operand.
    pub fn command_line(&self, verb: &Verb<'_>) -> Result<Vec<String>> {
        let mut argv = self.split_template(self.template_for(verb))?;
        if let Some(operand) = verb.operand() {
            argv.push(operand.to_string());
        }
        if self.elevate && verb.is_mutating() {
            argv.insert(0, ELEVATE_COMMAND.to_string());
        }
        Ok(argv)
    }

    fn report_missing(&self, program: &str) {
        warn!("{} not found on PATH", program);
        println!(
            "{} {} is not installed, skipping",
            "!".yellow(),
            program.bold()
        );
    }

    /// Spawns `argv` with inherited stdio and waits for it.
    async fn run(&self, argv: &[String]) -> Result<CommandStatus> {
        let rendered = render_command(argv);
        debug!("Running command: {}", rendered);

        let status = match Command::new(&argv[0]).args(&argv[1..]).status().await {
            Ok(status) => CommandStatus::from(status),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.report_missing(&argv[0]);
                return Ok(CommandStatus::NotInstalled);
            }
            Err(e) => return Err(UnipkgError::command_failed(&rendered, e.to_string())),
        };

        if status.success() {
            trace!("{} succeeded", rendered);
        } else {
            warn!("{} finished with {}", rendered, status);
        }
        Ok(status)
    }
}

impl PackageManager for PackageSource {
    fn backend(&self) -> Backend {
        self.name
    }

    /// Looks the executable up on `PATH`.
    fn is_available(&self) -> bool {
        which::which(&self.shell_command).is_ok()
    }

    fn execute(&self, verb: Verb<'_>) -> impl Future<Output = Result<CommandStatus>> + Send {
        async move {
            let argv = self.command_line(&verb)?;
            if !self.is_available() {
                self.report_missing(&self.shell_command);
                return Ok(CommandStatus::NotInstalled);
            }
            self.run(&argv).await
        }
    }

    fn installed_matching(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send {
        async move {
            let argv = self.split_template(&self.list_command)?;
            if !self.is_available() {
                self.report_missing(&self.shell_command);
                return Ok(Vec::new());
            }

            let rendered = render_command(&argv);
            debug!("Listing installed packages: {}", rendered);
            let output = Command::new(&argv[0])
                .args(&argv[1..])
                .output()
                .await
                .map_err(|e| UnipkgError::command_failed(&rendered, e.to_string()))?;

            if !output.status.success() {
                // relayed as-is, a failed listing just means no matches
                eprint!("{}", String::from_utf8_lossy(&output.stderr));
                warn!(
                    "{} finished with {}",
                    rendered,
                    CommandStatus::from(output.status)
                );
                return Ok(Vec::new());
            }

            let listing = String::from_utf8_lossy(&output.stdout);
            let matches = matching_lines(&listing, name);
            debug!("{} - {} matching packages", self.name, matches.len());
            Ok(matches)
        }
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// Renders an argv the way a user would type it.
#[must_use]
pub fn render_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| escape(Cow::from(arg.as_str())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines of a package listing that mention `name`, ignoring case.
#[must_use]
pub fn matching_lines(listing: &str, name: &str) -> Vec<String> {
    let needle = name.to_lowercase();
    listing
        .lines()
        .filter(|line| line.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// The three adapters, always visited yay, flatpak, snap.
#[derive(Debug, Clone)]
pub struct Backends<M> {
    managers: [M; 3],
}

impl<M: PackageManager> Backends<M> {
    pub fn new(yay: M, flatpak: M, snap: M) -> Self {
        debug_assert_eq!(yay.backend(), Backend::Yay);
        debug_assert_eq!(flatpak.backend(), Backend::Flatpak);
        debug_assert_eq!(snap.backend(), Backend::Snap);
        Self {
            managers: [yay, flatpak, snap],
        }
    }

    #[must_use]
    pub fn get(&self, backend: Backend) -> &M {
        &self.managers[backend.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.managers.iter()
    }
}

impl Backends<PackageSource> {
    /// The real adapters for yay, flatpak and snap.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            PackageSource::builtin(Backend::Yay),
            PackageSource::builtin(Backend::Flatpak),
            PackageSource::builtin(Backend::Snap),
        )
    }
}

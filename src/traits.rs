use crate::data::Backend;
use crate::errors::Result;
use crate::sources::CommandStatus;
use std::fmt;
use std::future::Future;

/// A streaming action run against one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb<'a> {
    Search(&'a str),
    ListUpdates,
    Upgrade,
    Install(&'a str),
    Remove(&'a str),
}

impl Verb<'_> {
    /// The package name or search term appended to the command, if any.
    #[must_use]
    pub fn operand(&self) -> Option<&str> {
        match *self {
            Verb::Search(term) => Some(term),
            Verb::Install(name) | Verb::Remove(name) => Some(name),
            Verb::ListUpdates | Verb::Upgrade => None,
        }
    }

    /// Verbs that change the system and may need elevation.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(self, Verb::Upgrade | Verb::Install(_) | Verb::Remove(_))
    }
}

/// Core trait for the package manager adapters.
///
/// Implementations run the backend's fixed command line for a verb and hand back
/// its status without interpreting it. Output goes straight to the terminal. The
/// router and the interactive selector only talk to backends through this trait,
/// so both can be exercised against a fake. The `Display` form labels the
/// adapter's block of output.
///
/// # Examples
///
/// ```rust,no_run
/// use unipkg::data::Backend;
/// use unipkg::sources::PackageSource;
/// use unipkg::traits::{PackageManager, Verb};
///
/// # async fn example() -> unipkg::Result<()> {
/// let yay = PackageSource::builtin(Backend::Yay);
/// let status = yay.execute(Verb::Search("firefox")).await?;
/// println!("yay finished with {status}");
/// # Ok(())
/// # }
/// ```
pub trait PackageManager: fmt::Display {
    /// Which backend this adapter drives.
    fn backend(&self) -> Backend;

    /// Whether the backend executable can be found.
    fn is_available(&self) -> bool;

    /// Runs the command line for `verb`, streaming its output.
    ///
    /// # Errors
    ///
    /// Returns an error only when the process cannot be started for a reason
    /// other than the executable being absent. A missing executable is reported
    /// as [`CommandStatus::NotInstalled`], and non-zero exits are returned as
    /// [`CommandStatus::Exited`].
    fn execute(&self, verb: Verb<'_>) -> impl Future<Output = Result<CommandStatus>> + Send;

    /// Lists the installed packages whose listing line mentions `name`.
    ///
    /// This is the existence check used before an interactive remove. An empty
    /// result means nothing matched, or the backend is not installed.
    fn installed_matching(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;
}

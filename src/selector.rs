//! Probe-then-prompt flow behind `--install` and `--remove`.
//!
//! The selector first shows what every backend knows about the package (a search
//! for install, the installed listing for remove), in yay, flatpak, snap order.
//! It then asks once which backend to use. There is no retry: an answer that is
//! not a backend or `n`/`none` ends the run with [`UnipkgError::UnknownSource`].

use crate::data::Backend;
use crate::errors::{Result, UnipkgError};
use crate::output;
use crate::sources::Backends;
use crate::traits::{PackageManager, Verb};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, IsTerminal};
use tracing::{debug, info};

/// Source of the single answer read by the selector.
pub trait ChoicePrompt {
    /// Shows `message` and returns the raw line the user typed.
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Reads the answer from the terminal, or from piped stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ChoicePrompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        if std::io::stdin().is_terminal() {
            let answer = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        println!("{message}");
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

/// What the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Source(Backend),
    Nothing,
}

impl Choice {
    /// Accepts `y|yay`, `f|flatpak`, `s|snap` and `n|none`, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn parse(answer: &str) -> Option<Choice> {
        let answer = answer.trim().to_lowercase();
        match answer.as_str() {
            "n" | "none" => Some(Choice::Nothing),
            other => Backend::from_answer(other).map(Choice::Source),
        }
    }
}

/// Which side of the selector is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Install,
    Remove,
}

impl Flow {
    fn verb(self) -> &'static str {
        match self {
            Flow::Install => "Install",
            Flow::Remove => "Remove",
        }
    }
}

fn prompt_message(flow: Flow, name: &str) -> String {
    format!(
        "{} {} with which source? [y]ay, [f]latpak, [s]nap, [n]one",
        flow.verb(),
        name
    )
}

/// Searches every backend for `name`, then installs it with the one picked.
pub async fn install_interactive<M, P>(
    backends: &Backends<M>,
    prompt: &mut P,
    name: &str,
) -> Result<()>
where
    M: PackageManager,
    P: ChoicePrompt,
{
    for source in backends.iter() {
        output::header(source);
        let status = source.execute(Verb::Search(name)).await?;
        debug!("{} search finished with {}", source.backend(), status);
    }
    select(backends, prompt, Flow::Install, name).await
}

/// Looks for `name` among installed packages, then removes it with the one
/// picked.
pub async fn remove_interactive<M, P>(
    backends: &Backends<M>,
    prompt: &mut P,
    name: &str,
) -> Result<()>
where
    M: PackageManager,
    P: ChoicePrompt,
{
    for source in backends.iter() {
        output::header(source);
        let available = source.is_available();
        let matches = source.installed_matching(name).await?;
        // a missing backend has already said so
        if matches.is_empty() && available {
            println!("{}", format!("  {name} is not installed").dimmed());
        }
        for line in matches {
            println!("  {line}");
        }
    }
    select(backends, prompt, Flow::Remove, name).await
}

async fn select<M, P>(
    backends: &Backends<M>,
    prompt: &mut P,
    flow: Flow,
    name: &str,
) -> Result<()>
where
    M: PackageManager,
    P: ChoicePrompt,
{
    let answer = prompt.ask(&prompt_message(flow, name))?;
    let choice = Choice::parse(&answer)
        .ok_or_else(|| UnipkgError::UnknownSource(answer.trim().to_string()))?;
    info!("{:?} {} picked {:?}", flow, name, choice);

    let backend = match choice {
        Choice::Nothing => {
            output::info(&format!(
                "Aborted, {} was not {}",
                output::package_name(name),
                match flow {
                    Flow::Install => "installed",
                    Flow::Remove => "removed",
                }
            ));
            return Ok(());
        }
        Choice::Source(backend) => backend,
    };

    let verb = match flow {
        Flow::Install => Verb::Install(name),
        Flow::Remove => Verb::Remove(name),
    };
    let status = backends.get(backend).execute(verb).await?;
    debug!("{} finished with {}", backend, status);
    Ok(())
}

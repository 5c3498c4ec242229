use anyhow::{anyhow, Context};
use std::ffi::OsString;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use unipkg::commands;
use unipkg::output;
use unipkg::{Backends, Operation, TerminalPrompt, UnipkgError};

/// Collects the arguments after the program name exactly as given.
///
/// Nothing is consumed here, not even `--`: every token goes to
/// [`Operation::parse`] for validation.
fn collect_args<I>(args: I) -> Result<Vec<String>, anyhow::Error>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|bad| {
                anyhow!("argument is not valid UTF-8: {}", bad.to_string_lossy())
            })
        })
        .collect()
}

fn init_tracing() -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

pub async fn run() -> Result<(), anyhow::Error> {
    let args = collect_args(std::env::args_os().skip(1))
        .context("Failed to read command line arguments")?;
    init_tracing()?;
    debug!("Raw arguments: {:?}", args);

    let operation = Operation::parse(args.as_slice())?;
    let backends = Backends::builtin();
    commands::run_operation(&operation, &backends, &mut TerminalPrompt).await?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    if let Some(e) = err.downcast_ref::<UnipkgError>() {
        debug!(
            category = e.category(),
            usage = e.is_usage_error(),
            "run failed"
        );
    }
    match err.downcast_ref::<UnipkgError>() {
        Some(e) if e.wants_usage() => {
            eprintln!("error: {e}");
            output::print_usage();
        }
        _ => eprintln!("error: {err:#}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(()) => {}
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

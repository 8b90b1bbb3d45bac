use crate::core::greeter::{write_hello, write_usage};
use crate::domain::model::Invocation;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::validate_required_argument;
use std::io::Write;

pub fn resolve_invocation<C: ConfigProvider>(config: &C) -> Result<Invocation> {
    let name = validate_required_argument(config.program(), config.name())?;
    Ok(Invocation::new(name))
}

/// Runs the CLI path and returns the process exit status.
///
/// Exactly one of `out`/`err` is written to.
pub fn run<C, O, E>(config: &C, out: &mut O, err: &mut E) -> i32
where
    C: ConfigProvider,
    O: Write,
    E: Write,
{
    let result = resolve_invocation(config).and_then(|invocation| {
        tracing::trace!(?invocation, "resolved invocation");
        write_hello(out, &invocation.name)
    });

    match result {
        Ok(()) => 0,
        Err(e) => {
            report(err, &e);
            e.exit_code()
        }
    }
}

fn report<E: Write>(err: &mut E, error: &GreeterError) {
    let written = match error {
        GreeterError::MissingArgument { program } => write_usage(err, program),
        GreeterError::IoError(_) => writeln!(err, "{}", error).map_err(GreeterError::from),
    };
    if let Err(e) = written {
        tracing::debug!("could not report error to stderr: {}", e);
    }
}

use greeter::utils::logger;
use greeter::CliConfig;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger();

    let config = CliConfig::from_env();
    tracing::debug!("CLI config: {:?}", config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = greeter::run(&config, &mut stdout.lock(), &mut stderr.lock());

    tracing::debug!(code, "greeter finished");
    ExitCode::from(code as u8)
}

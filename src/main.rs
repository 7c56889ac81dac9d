use gcmd::cli::Cli;
use gcmd::commands;
use gcmd::core::storage::Store;
use gcmd::GcmdError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("• {}", e);
            ExitCode::from(e.exit_code().clamp(1, 255) as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), GcmdError> {
    let store = Store::open()?;
    commands::dispatch(cli, &store)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "gcmd=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

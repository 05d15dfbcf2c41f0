mod cli_main;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use cli_main::Cli;

fn main() -> ExitCode {
    let command_line: Vec<String> = std::env::args().collect();

    let cli = match Cli::try_parse_from(&command_line) {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let level = if cli.silent { tracing::Level::WARN } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging could not be initialised");
    }

    let start = Instant::now();
    let config = cli.into_config(command_line);

    match kmerset::pipeline::run(&config) {
        Ok(summary) => {
            info!(
                "Finished in {:.2}s ({} outputs, {} bp written)",
                start.elapsed().as_secs_f32(),
                summary.outputs.len(),
                summary.total_length()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

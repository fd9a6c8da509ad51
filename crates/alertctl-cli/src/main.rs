//! alertctl binary entrypoint.
//!
//! This is the main entry point for the `alertctl` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alertctl_cli::cli::{Cli, Commands};
use alertctl_cli::commands::{
    CopyCommand, CreateCommand, DomainCommand, ListCommand, MutateCommand, MutateOp,
};
use alertctl_cli::config::Config;
use alertctl_cli::output::OutputFormat;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), alertctl_cli::CliError> {
    let config = Config::resolve(&cli)?;
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();
    let mut stdin = io::stdin().lock();

    match cli.command {
        Commands::List(filter) => {
            let cmd = ListCommand::new(&config);
            cmd.execute(&mut stdout, &format, &filter).await?;
        }
        Commands::Create(args) => {
            let cmd = CreateCommand::new(&config);
            cmd.execute(&mut stdout, &format, &args.file).await?;
        }
        Commands::Delete(filter) => {
            let cmd = MutateCommand::new(&config, MutateOp::Delete, cli.yes);
            cmd.execute(&mut stdin, &mut stdout, &format, &filter).await?;
        }
        Commands::Enable(filter) => {
            let cmd = MutateCommand::new(&config, MutateOp::Enable, cli.yes);
            cmd.execute(&mut stdin, &mut stdout, &format, &filter).await?;
        }
        Commands::Disable(filter) => {
            let cmd = MutateCommand::new(&config, MutateOp::Disable, cli.yes);
            cmd.execute(&mut stdin, &mut stdout, &format, &filter).await?;
        }
        Commands::Copy(filter) => {
            let cmd = CopyCommand::new(&config, cli.yes);
            cmd.execute(&mut stdin, &mut stdout, &format, &filter).await?;
        }
        Commands::Domain { target } => {
            let cmd = DomainCommand::new(&config);
            cmd.execute(&mut stdout, &format, target).await?;
        }
    }

    Ok(())
}

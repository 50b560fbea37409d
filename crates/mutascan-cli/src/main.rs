use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mutant DNA detector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a single matrix given as rows.
    Check(cmd::check::CheckArgs),
    /// Evaluate a JSON file of matrices through the verdict cache.
    Batch(cmd::batch::BatchArgs),
    /// Emit random matrices as a JSON batch.
    Generate(cmd::generate::GenerateArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => cmd::check::run(args),
        Commands::Batch(args) => cmd::batch::run(args).await,
        Commands::Generate(args) => cmd::generate::run(args),
    }
}

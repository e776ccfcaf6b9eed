use clap::Parser;
use panelbot::cli::{self, output, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Report(arg) => cli::report::execute(arg).await,
        Commands::Sites(arg) => cli::sites::execute(arg),
        Commands::Check(CheckCommand::Config(arg)) => cli::check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

use crate::assess::{run_application_assessment, run_score, ApplicationArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sme_credit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SME Credit Desk",
    about = "Score small businesses and assess loan applications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the credit score and factor breakdown for a business profile
    Score(ScoreArgs),
    /// Assess a loan application for a business profile
    Assess(ApplicationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Assess(args) => run_application_assessment(args),
    }
}

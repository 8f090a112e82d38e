use crate::demo::{run_assess_report, run_batch, run_demo, AssessReportArgs, BatchArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use climasense::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ClimaSense Risk Engine",
    about = "Run climate-to-health risk assessments and the HTTP service from the command line",
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
    /// Score a single climate reading supplied via flags
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
    /// Score a CSV export of climate readings and print the summary
    Batch(BatchArgs),
    /// Walk through canned monsoon, heatwave, and temperate scenarios
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Produce a full risk report for one reading
    Report(AssessReportArgs),
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
        Command::Assess {
            command: AssessCommand::Report(args),
        } => run_assess_report(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}

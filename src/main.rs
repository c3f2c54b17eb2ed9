use anyhow::Result;
use clap::{Parser, Subcommand};
use termstatus::CommandStatus;

mod args;
mod report;

use crate::args::{BaseArgs, MessageArgs, StatusArgs};
use crate::report::Report;

#[derive(Debug, Parser)]
#[command(name = "termstatus", about = "Print colored status lines", version)]
struct Cli {
    #[command(flatten)]
    base: BaseArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a [+] line
    Success(MessageArgs),
    /// Print a [-] line
    Fail(MessageArgs),
    /// Print a [?] line
    Question(MessageArgs),
    /// Print a [~] line
    Unsure(MessageArgs),
    /// Print a line with a custom marker symbol
    Status(StatusArgs),
    /// Print the message in color without a marker
    Color(MessageArgs),
    /// List the named colors
    Colors,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Success(args) => report::run(
            &cli.base,
            Report::known(CommandStatus::Success, &args.message),
        )?,
        Commands::Fail(args) => {
            report::run(&cli.base, Report::known(CommandStatus::Fail, &args.message))?
        }
        Commands::Question(args) => report::run(
            &cli.base,
            Report::known(CommandStatus::Question, &args.message),
        )?,
        Commands::Unsure(args) => report::run(
            &cli.base,
            Report::known(CommandStatus::Unsure, &args.message),
        )?,
        Commands::Status(args) => {
            report::run(&cli.base, Report::custom(&args.symbol, &args.message)?)?
        }
        Commands::Color(args) => report::run(
            &cli.base,
            Report::Color {
                message: &args.message,
            },
        )?,
        Commands::Colors => report::list_colors(&cli.base)?,
    }

    Ok(())
}

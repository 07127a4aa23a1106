mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, ExportArgs, InitArgs};

/// Pagecraft CLI - Visual landing page builder
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagecraft project
    Init(InitArgs),

    /// Compile the page to a standalone HTML file
    Export(ExportArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

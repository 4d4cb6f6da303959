//! stubforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use stubforge_cli_lib::commands::{self, Session};
use stubforge_cli_lib::{
    observability, Config, LocalFilesystem, MakeComponentCommand, MakePageComponentCommand,
    StubLoader, StubsCommand, TerminalPrompter,
};

#[derive(Parser)]
#[command(name = "stubforge")]
#[command(version)]
#[command(about = "Scaffold Vue components with unit tests and stories", long_about = None)]
struct Cli {
    /// Log every step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a component with props, a unit test and a story
    #[command(name = "make:component")]
    MakeComponent {
        /// Component path, last segment is the name (e.g. `widgets/InfoCard`)
        path: String,
    },
    /// Scaffold a page component with a unit test and a story
    #[command(name = "make:page-component")]
    MakePageComponent {
        /// Page path, last segment is the name (e.g. `pages/Profile`)
        path: String,
    },
    /// Show which stubs are customised
    #[command(name = "stubs:list")]
    StubsList,
    /// Copy the default stubs into the stubs directory
    #[command(name = "stubs:publish")]
    StubsPublish {
        /// Overwrite stubs that already exist
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = Config::load()?;
    observability::init(&config.log_level, cli.verbose)?;
    tracing::debug!(?config, "configuration loaded");

    let root = std::env::current_dir().context("Failed to read current directory")?;
    let mut session = Session::new(
        TerminalPrompter::new(config.theme),
        LocalFilesystem,
        StubLoader::new(config.stubs_dir()),
        root,
    );

    let code = match cli.command {
        Commands::MakeComponent { path } => {
            commands::execute(&MakeComponentCommand::new(path), &mut session)
        }
        Commands::MakePageComponent { path } => {
            commands::execute(&MakePageComponentCommand::new(path), &mut session)
        }
        Commands::StubsList => run_stubs(StubsCommand::List, &mut session),
        Commands::StubsPublish { force } => run_stubs(StubsCommand::Publish { force }, &mut session),
    };

    Ok(code)
}

fn run_stubs(command: StubsCommand, session: &mut Session<TerminalPrompter, LocalFilesystem>) -> u8 {
    match command.execute(session) {
        Ok(()) => 0,
        Err(err) => session.report_error(&err),
    }
}

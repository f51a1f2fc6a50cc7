//! `userdir`: list and edit the users of a remote directory from the terminal.

#![allow(clippy::exit)]

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod record;
mod timing;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands, ConfigAction};
use crate::context::build_client;
use crate::output::{Format, Output};
use crate::timing::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.timing);

    if let Err(err) = run(cli).await {
        Output::stderr().error(format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = if cli.json { Format::Json } else { Format::Table };
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::List => commands::run_list(&build_client(api_url)?, format).await,
        Commands::Add { fields, data } => {
            let client = build_client(api_url)?;
            commands::run_add(&client, &fields, data.as_deref(), format).await
        }
        Commands::Update {
            id,
            fields,
            data,
            replace,
        } => {
            let client = build_client(api_url)?;
            commands::run_update(&client, id, &fields, data.as_deref(), replace, format).await
        }
        Commands::Remove { id } => commands::run_remove(&build_client(api_url)?, id, format).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::run_config_show(api_url),
            ConfigAction::SetUrl { url } => commands::run_config_set_url(&url),
        },
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}

use anyhow::Context;
use clap::Parser;
use newsdesk::api::NewsClient;
use newsdesk::cli::{Cli, Command};
use newsdesk::commands;
use newsdesk::config::Config;
use newsdesk::logging::{init_tracing, LogTarget};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command();
    init_tracing(match command {
        Command::Browse => LogTarget::Tui,
        _ => LogTarget::Stderr,
    });

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let client = NewsClient::from_config(&config.service, cli.api_url.as_deref())?;
    tracing::info!(base_url = client.base_url(), "Using news service");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let output = match command {
        Command::Browse => {
            newsdesk::ui::run(&config, client, runtime.handle())
                .context("Terminal UI failed")?;
            return Ok(());
        }
        Command::List { json } => runtime.block_on(commands::list(
            &client,
            json,
            config.display.max_card_tags,
        ))?,
        Command::Show { title } => runtime.block_on(commands::show(&client, &title))?,
        Command::Aggregate => runtime.block_on(commands::aggregate(&client))?,
        Command::Stats => runtime.block_on(commands::stats(&client))?,
        Command::Updates { event_id } => runtime.block_on(commands::updates(&client, &event_id))?,
    };

    print!("{}", output);
    Ok(())
}

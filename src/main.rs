use clap::Parser;

use recap::cli::{Cli, Command, run_render_command, run_serve_command};
use recap::config::Config;
use recap::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.logging);

    match cli.command() {
        Command::Serve { host, port } => run_serve_command(&config, host, port).await?,
        Command::Render { profile, json } => run_render_command(&config, &profile, json).await?,
    }
    Ok(())
}

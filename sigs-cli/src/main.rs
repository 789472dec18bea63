//! SIGS CLI - inspect benchmark catalogs, color scales and plot scenes.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sigs-cli",
    version,
    about = "SIGS results explorer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sigs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sigs_cmd::run(cli.command).await
}

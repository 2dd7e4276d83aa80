use clap::Parser;
use slotwatch_runner::{Cli, execute};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "slotwatch=debug"
    } else {
        "slotwatch=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    execute(cli).await?;
    Ok(())
}

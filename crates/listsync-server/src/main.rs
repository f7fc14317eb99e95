use clap::Parser;
use listsync_server::cli::Cli;
use listsync_server::server::run_server;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let addr: SocketAddr = format!("{}:{}", cli.address, cli.port).parse()?;

    println!();
    println!("  listsync demo server");
    println!("  API:            http://{}/api/strings", addr);
    println!("  Subscriptions:  ws://{}/ws/changes", addr);
    println!("  Notifications:  ws://{}/ws/notifications", addr);
    println!();

    run_server(addr).await?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "listsync_server=debug,listsync_core=debug,tower_http=debug"
    } else {
        "listsync_server=info,listsync_core=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "listsync-server")]
#[command(
    author,
    version,
    about = "Real-time synchronized string list demo server"
)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

use std::sync::Arc;

use clap::Parser;

use sponowd::{Res, config, logging, server, spotify};

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Res<()> {
    config::load_env();
    logging::init(cli.debug);

    let client = Arc::new(spotify::Client::from_env());
    server::start_api_server(client).await
}

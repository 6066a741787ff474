use std::io;

use chester::cli::Opts;
use chester::{Chester, Config, Error};
use tracing::{debug, trace};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Load the config from defaults, the config file and the environment
    let config = Config::load(&opts.config_path).map_err(|err| Error::LoadConfig(Box::new(err)))?;

    // Initialize logging
    chester::tracing::try_init(&config.tracing)?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %opts.config_path,
        "starting"
    );
    trace!(?config, "loaded config");

    let chester = Chester::new(&config)?;

    chester
        .run(&opts.command, opts.pretty, io::stdin().lock(), io::stdout().lock())
        .await?;

    Ok(())
}

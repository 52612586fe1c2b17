//! edu-library CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use edu_library::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Our own logs at info, HTTP internals only when they warn
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("edu_library=info,reqwest=warn,hyper=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Parse and execute CLI
    let cli = Cli::parse();
    cli.execute().await
}

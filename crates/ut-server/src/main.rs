//! Entry point for the universal table HTTP service.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ut_server::ServerConfig;
use ut_table::DEFAULT_TABLE;

#[derive(Parser)]
#[command(
    name = "ut-server",
    about = "Serve universal table lookups and rolls over HTTP",
    version
)]
struct Cli {
    /// Bind address
    #[arg(short, long, env = "UT_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, env = "UT_PORT", default_value = "3000")]
    port: u16,

    /// Table document (JSON)
    #[arg(
        short,
        long,
        env = "UT_TABLE_FILE",
        default_value = "data/universal_table.json"
    )]
    table_file: PathBuf,

    /// Table to read from the document
    #[arg(long, env = "UT_TABLE_NAME", default_value = DEFAULT_TABLE)]
    table_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ut_server=info,ut_table=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::default()
        .with_bind(cli.bind)
        .with_port(cli.port)
        .with_table_file(cli.table_file)
        .with_table_name(cli.table_name);

    if let Err(err) = ut_server::serve(config).await {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use betterct::identity::HostedIdentity;
use betterct::{api, db, AppConfig};

#[derive(Parser)]
#[command(name = "betterct")]
#[command(about = "BetterCT landing site and project-management board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on, overriding the configured bind address
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate configuration and exit
    CheckConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "betterct=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Some(Commands::CheckConfig) => {
            tracing::info!(
                environment = config.publishable_key.environment().as_str(),
                frontend_api = config.publishable_key.frontend_api(),
                bind = %config.bind_addr,
                "Configuration is valid"
            );
        }
        Some(Commands::Serve { port }) => {
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            serve(config).await?;
        }
        None => serve(config).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let db = db::Database::open_location(&config.database)?;
    db.migrate()?;

    let identity = HostedIdentity::new(config.publishable_key.clone())?;
    tracing::info!(
        "Using identity provider at {} ({} key)",
        config.publishable_key.frontend_api(),
        config.publishable_key.environment().as_str()
    );

    let bind_addr = config.bind_addr;
    let app = api::build_app(config, Arc::new(identity), db);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("BetterCT listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

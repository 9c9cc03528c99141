use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use godavaii_config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings};
use godavaii_server::{AppState, create_app};

#[derive(Parser, Debug)]
#[command(name = "godavaii-server")]
#[command(about = "GoDavaii marketing site: landing page, city pages, sitemap and robots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to godavaii.toml
    #[arg(short, long, env = "GODAVAII_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env)
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate the configuration, report warnings and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Check) = cli.command {
        let config = load_runtime_config(&cli.serve)?;
        let catalog = config
            .catalog()
            .context("configured site catalog is invalid")?;
        info!(
            base_url = %config.site.base_url,
            public_dir = %config.public_dir().display(),
            cities = ?catalog.cities.iter().map(|c| c.slug.as_str()).collect::<Vec<_>>(),
            "configuration ok"
        );
        return Ok(());
    }

    run_server(cli.serve).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_warnings(&warnings);

    Ok(config)
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

/// Socket address for `host` and `port`. IPv6 hosts may be bracketed.
fn listen_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = host
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .with_context(|| format!("invalid listen host {host}"))?;
    Ok(SocketAddr::new(ip, port))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(&args)?;

    let addr = listen_addr(&config.server.host, config.server.port)?;

    info!(
        base_url = %config.site.base_url,
        public_dir = %config.public_dir().display(),
        autoplay_ms = config.ui.autoplay_period.as_millis() as u64,
        hsts.https_only = config.security.hsts.https_only,
        "site configuration in effect"
    );

    let state =
        AppState::new(config).context("configured site catalog is invalid")?;
    let router = create_app(state);

    info!("Starting GoDavaii site on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let make_service =
        router.into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, make_service).await?;

    Ok(())
}

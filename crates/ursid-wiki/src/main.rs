//! Ursid Wiki - Entry Point
//!
//! Runs the backend proxy, or loads the bear list once and prints it.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ursid_wiki::config::{Config, api};
use ursid_wiki::formatters::{self, OutputFormat};
use ursid_wiki::server::ProxyServer;
use ursid_wiki::services::{
    BearService, DirectSource, ProxyImageResolver, ProxySource, WikiImageResolver,
};
use ursid_wiki::{ProxyClient, WikiClient};

#[derive(Parser, Debug)]
#[command(name = "ursid-wiki")]
#[command(about = "Bear species from Wikipedia's List of ursids")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MediaWiki proxy
    Serve {
        /// HTTP server port
        #[arg(long, default_value_t = api::PROXY_PORT, env = "PORT")]
        port: u16,
    },
    /// Load the bear list and print it
    Bears {
        /// Go through a running proxy (e.g. http://localhost:3000) instead of MediaWiki
        #[arg(long, env = "URSID_PROXY_URL")]
        via_proxy: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting ursid-wiki");

    let mut config = Config::from_env()?;
    let client = WikiClient::new(&config)?;

    match cli.command {
        Command::Serve { port } => {
            ProxyServer::new(client, &config).run(port).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Bears { via_proxy, format } => {
            if let Some(url) = via_proxy {
                config = config.with_proxy(url);
            }

            let result = match config.proxy_url.as_deref() {
                Some(url) => {
                    tracing::info!(proxy = url, "Loading bears through proxy");
                    let proxy = ProxyClient::new(url, &config)?;
                    let resolver = ProxyImageResolver::new(proxy.clone(), client, &config);
                    BearService::new(ProxySource::new(proxy), resolver).load_bears().await
                }
                None => {
                    tracing::info!(api = client.api_url(), "Loading bears from MediaWiki");
                    let source = DirectSource::new(client.clone(), &config);
                    let resolver = WikiImageResolver::new(client.clone(), client, &config);
                    BearService::new(source, resolver).load_bears().await
                }
            };

            println!("{}", formatters::render(&result, format));
            Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

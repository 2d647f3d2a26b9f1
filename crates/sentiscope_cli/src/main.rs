use anyhow::Context;
use clap::{Parser, Subcommand};
use sentiscope_core::config::LoggingConfig;
use sentiscope_core::SentiscopeConfig;
use sentiscope_gateway::GatewayServer;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sentiscope", author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "sentiscope.toml")]
    config: PathBuf,

    /// Emotion lexicon JSON (overrides the config file)
    #[arg(short, long, env = "SENTISCOPE_LEXICON")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze TEXT (or stdin) and print the profile as JSON
    Analyze {
        text: Option<String>,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Logging depends on the config, so a load failure is reported once it is up.
    let (mut config, load_error) = match SentiscopeConfig::load(&args.config) {
        Ok(config) => (config, None),
        Err(e) => (SentiscopeConfig::from_env(), Some(e)),
    };
    if let Some(lexicon) = args.lexicon {
        config.lexicon.path = lexicon;
    }
    init_logging(&config.logging);
    if let Some(e) = load_error {
        info!("Config file not found or invalid ({:#}), using defaults", e);
    }

    let analyzer = sentiscope_nlp::standard_analyzer(&config)?;

    match args.command {
        Command::Analyze { text, compact } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };
            let doc = analyzer.analyze(&text)?;
            let json = if compact {
                serde_json::to_string(&doc)?
            } else {
                serde_json::to_string_pretty(&doc)?
            };
            println!("{}", json);
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.gateway.host);
            let port = port.unwrap_or(config.gateway.port);
            let server = GatewayServer::new(Arc::new(analyzer), &host, port);
            tokio::select! {
                result = server.serve() => result?,
                _ = tokio::signal::ctrl_c() => info!("Shutting down"),
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so `analyze` output stays pipeable. `RUST_LOG` wins
/// over the configured filter.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

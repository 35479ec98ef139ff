use std::sync::Arc;

use clap::{Parser, Subcommand};
use spout_config::{AppConfig, LoggingConfig};
use spout_core::{JsonScheme, RawScheme, Scheme};
use spout_kafka_connector::{build_batch_config, build_spout_config};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "spout-cli")]
#[command(about = "Kafka input connector configuration toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate connector options and report the resolved values
    Validate {
        /// Path to configuration directory
        #[arg(short, long, default_value = "config")]
        config_dir: String,
    },

    /// Print the resolved connector configuration
    Render {
        /// Path to configuration directory
        #[arg(short, long, default_value = "config")]
        config_dir: String,

        /// Which variant to render (spout, batch)
        #[arg(short, long, default_value = "spout")]
        variant: String,

        /// Payload decoding scheme to attach (raw, json)
        #[arg(short, long, default_value = "raw")]
        scheme: String,
    },
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let level = match logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn scheme_by_name(name: &str) -> anyhow::Result<Arc<dyn Scheme>> {
    match name {
        "raw" => Ok(Arc::new(RawScheme)),
        "json" => Ok(Arc::new(JsonScheme)),
        other => Err(anyhow::anyhow!("Unknown scheme '{}'", other)),
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_dir } => {
            let app_config = AppConfig::load(&config_dir)?;
            init_tracing(&app_config.logging)?;

            info!("Validating connector options from: {}", config_dir);

            let options = app_config.connector_options();
            info!("Loaded {} option(s)", options.len());

            match build_spout_config(&options, Arc::new(RawScheme)) {
                Ok(config) => {
                    println!("✓ Connector options are valid");
                    println!("\n  topic:      {}", config.topic);
                    println!("  client id:  {}", config.client_id);
                    println!(
                        "  zookeeper:  {} server(s) on port {}",
                        config.zk_servers.len(),
                        config.zk_port
                    );
                    println!("  discovery:  {}", config.hosts.connect_string);
                    println!("  offsets at: {}", config.zk_root);
                }
                Err(e) => {
                    println!("✗ {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Render {
            config_dir,
            variant,
            scheme,
        } => {
            let app_config = AppConfig::load(&config_dir)?;
            init_tracing(&app_config.logging)?;

            let options = app_config.connector_options();
            let scheme = scheme_by_name(&scheme)?;

            match variant.as_str() {
                "spout" => {
                    let config = build_spout_config(&options, scheme)?;
                    println!("{config:#?}");
                }
                "batch" => {
                    let config = build_batch_config(&options, scheme);
                    println!("{config:#?}");
                }
                other => {
                    anyhow::bail!("Unknown variant '{}', expected 'spout' or 'batch'", other);
                }
            }
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use oilfinder_core::{config::Config, Catalog};
use std::{path::PathBuf, sync::Arc};

#[derive(Parser)]
#[command(name = "oilfinder", about = "Vehicle lubricant lookup")]
struct Cli {
    /// Config file to use instead of ~/.config/oilfinder/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file to load, overriding `[data] path`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Write debug logs to /tmp/oilfinder-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON API.
    Serve {
        /// Address to bind, overriding `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// List makes derived from the dataset keys.
    Makes,
    /// List model keys filed under a make.
    Models { make: String },
    /// List year ranges of a model key.
    Years { model_key: String },
    /// Show one details record.
    Details { model_key: String, year_range: String },
    /// Search all records by key text.
    Search { query: String },
    /// Suggest makes and models for a partial query.
    Suggest { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug, matches!(cli.command, Command::Serve { .. }))?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config file; using defaults");
            Config::defaults()
        }),
    };
    if let Some(data) = cli.data {
        config.data.path = data;
    }

    let catalog = Catalog::from_config(&config);

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            oilfinder_server::serve(Arc::new(catalog), &bind).await?;
        }
        Command::Makes => print_json(&catalog.list_categories())?,
        Command::Models { make } => print_json(&catalog.list_children(&make))?,
        Command::Years { model_key } => print_json(&catalog.list_year_ranges(&model_key))?,
        Command::Details {
            model_key,
            year_range,
        } => print_json(&catalog.get_details(&model_key, &year_range)?)?,
        Command::Search { query } => print_json(&catalog.search(&query)?)?,
        Command::Suggest { query } => print_json(&catalog.suggest(&query))?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs go to stderr so one-shot commands keep stdout for JSON. `--debug`
/// redirects everything at debug level to a file instead.
fn init_logging(debug: bool, serving: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/oilfinder-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("oilfinder debug log started, tail -f /tmp/oilfinder-debug.log");
        return Ok(());
    }

    let default_level = if serving { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
    Ok(())
}

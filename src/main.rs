mod cli;

use movie_server::{
    config,
    server::{self, AppContext},
};
use movie_server_rotation::{Inventory, MovieRegistry};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    media: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags win over the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(media) = media {
        config.media.root = media;
    }
    config::validate_config(&config)?;

    tracing::info!("Starting movie-server");

    let root = config.media.resolved_root();
    tracing::info!("Scanning media root {:?}", root);
    let registry = MovieRegistry::load(&root, config.media.debounce());

    let inventory = registry.inventory();
    if inventory.total() == 0 {
        tracing::warn!("No movies found under {:?}; every request will fail", root);
    }

    server::start_server(AppContext::new(config, registry)).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "movie_server=trace,movie_server_rotation=trace,tower_http=debug".to_string()
        } else {
            "movie_server=debug,movie_server_rotation=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port, media } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, media, cli.config.as_deref()))
        }
        Commands::Scan { media, json } => scan(media, cli.config.as_deref(), json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("movie-server {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn scan(media: Option<PathBuf>, config_path: Option<&Path>, json: bool) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(media) = media {
        config.media.root = media;
    }

    let registry = MovieRegistry::load(&config.media.resolved_root(), config.media.debounce());
    let inventory = registry.inventory();

    if json {
        println!("{}", serde_json::to_string_pretty(&inventory)?);
    } else {
        print_inventory(&inventory);
    }

    Ok(())
}

fn print_inventory(inventory: &Inventory) {
    println!("Media root: {}", inventory.root.display());
    println!("  intro:    {}", inventory.intro);
    println!("  printing: {}", inventory.printing);
    println!("  counter:  {}", inventory.counter);
    println!("\nShots:");
    for shot in &inventory.shots {
        println!("  [{}] start: {}, end: {}", shot.shot, shot.start, shot.end);
    }
    println!("\nTotal: {} movies", inventory.total());
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Media root: {}", config.media.resolved_root().display());
            println!("  Debounce: {} ms", config.media.debounce_ms);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Media root: {}", config.media.root.display());
        }
    }

    Ok(())
}

// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use cookbook::server::{run_server, CookbookConfig};
use cookbook::MAX_DEPTH_CEILING;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about = "In-memory recipe registry with nested ingredient resolution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// Maximum recipe nesting depth (overrides the config file)
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Normalize a handwritten recipe name
    Normalize {
        /// Raw name
        input: String,
    },
    /// Validate a configuration file and exit
    CheckConfig {
        /// Path to the TOML configuration file
        path: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<CookbookConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CookbookConfig::load(path)
        }
        None => Ok(CookbookConfig::default()),
    }
}

fn check_max_depth(max_depth: usize) -> Result<usize> {
    anyhow::ensure!(max_depth > 0, "--max-depth must be at least 1");
    anyhow::ensure!(
        max_depth <= MAX_DEPTH_CEILING,
        "--max-depth must be at most {}",
        MAX_DEPTH_CEILING
    );
    Ok(max_depth)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            config,
            bind,
            max_depth,
        }) => {
            let mut server_config = load_config(config.as_ref())?.to_server_config()?;
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if let Some(max_depth) = max_depth {
                server_config.max_depth = check_max_depth(max_depth)?;
            }
            run_server(server_config).await
        }
        Some(Commands::Normalize { input }) => {
            let name = cookbook::normalize(&input)?;
            println!("{}", name);
            Ok(())
        }
        Some(Commands::CheckConfig { path }) => {
            let config = CookbookConfig::load(&path)?;
            let server = config.to_server_config()?;
            println!("Configuration OK");
            println!("  Bind: {}", server.bind_addr);
            println!("  Max depth: {}", server.max_depth);
            println!("  Audit log: {}", server.enable_audit_log);
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("Cookbook v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'cookbook --help' for usage information");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "cookbook",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--max-depth",
            "12",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve {
                config,
                bind,
                max_depth,
            }) => {
                assert!(config.is_none());
                assert_eq!(bind, Some("0.0.0.0:9000".parse::<SocketAddr>().unwrap()));
                assert_eq!(max_depth, Some(12));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["cookbook", "serve", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn test_max_depth_override_bounds() {
        assert_eq!(check_max_depth(12).unwrap(), 12);
        assert_eq!(check_max_depth(MAX_DEPTH_CEILING).unwrap(), MAX_DEPTH_CEILING);
        assert!(check_max_depth(0).is_err());
        assert!(check_max_depth(1_000_000).is_err());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }
}

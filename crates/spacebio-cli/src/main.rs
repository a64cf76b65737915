use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use spacebio_core::{
    resolve_route, Catalog, Config, HealthStatus, Route, SearchBackend, SearchClient,
};
use spacebio_tui::{run_tui, App};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spacebio")]
#[command(version, about = "Terminal navigator for NASA space biology research", long_about = None)]
struct Cli {
    /// Research API base URL (overrides config and SPACEBIO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, env = "SPACEBIO_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive navigator (default)
    Tui {
        /// Path to start at, e.g. /dashboard?q=yeast
        #[arg(long)]
        path: Option<String>,
    },
    /// Ask the research API about an organism or topic
    Search {
        /// Search query
        query: String,
        /// Restrict to a space condition, e.g. Microgravity
        #[arg(long)]
        condition: Option<String>,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether the research API can serve searches
    Health {
        /// Also query the root banner and the language model probe
        #[arg(long)]
        verbose: bool,
    },
    /// List every route and its path
    Routes,
    /// Show which route a path resolves to
    Resolve {
        /// Path, e.g. /explore?q=yeast
        path: String,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_logging(cli.log_file.as_ref(), interactive)?;

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.api.timeout_secs = secs;
    }

    match cli.command {
        None => launch_tui(&config, None).await,
        Some(Commands::Tui { path }) => launch_tui(&config, path).await,
        Some(Commands::Search {
            query,
            condition,
            json,
        }) => search(&config, &query, condition.as_deref(), json).await,
        Some(Commands::Health { verbose }) => health(&config, verbose).await,
        Some(Commands::Routes) => {
            for route in Route::ALL {
                println!("{:<10} {}", route.label(), route.path());
            }
            Ok(())
        }
        Some(Commands::Resolve { path }) => {
            let route = resolve_route(&path);
            println!("{} -> {} ({})", path, route.label(), route.path());
            Ok(())
        }
        Some(Commands::Config { init }) => {
            let path = Config::config_path()?;
            if init {
                config.save_to(&path)?;
                println!("Wrote {}", path.display());
            } else {
                println!("# {}", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Commands log to stderr. The TUI owns the terminal, so it only logs to a file.
fn init_logging(log_file: Option<&PathBuf>, interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "spacebio=info".into());

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    let stderr_layer = (!interactive && file_layer.is_none())
        .then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

async fn launch_tui(config: &Config, path: Option<String>) -> anyhow::Result<()> {
    let client = SearchClient::from_config(&config.api)?;
    tracing::info!("Using research API at {}", client.base_url());

    let start = path.unwrap_or_else(|| config.ui.start_path.clone());
    let app = App::new(&start, Catalog::seeded());
    let backend: Arc<dyn SearchBackend> = Arc::new(client);

    run_tui(app, backend, config.ui.mouse_enabled).await
}

async fn search(
    config: &Config,
    query: &str,
    condition: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let client = SearchClient::from_config(&config.api)?;
    let result = client.search_text(query, condition).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let details = &result.scientific_details;
    match &result.condition {
        Some(condition) => println!("{} [{}]", result.organism_name, condition),
        None => println!("{}", result.organism_name),
    }
    println!();
    println!("{}", result.description);
    println!();
    println!("Classification:        {}", details.classification);
    println!("Response mechanisms:");
    for mechanism in &details.response_mechanisms {
        println!("  - {}", mechanism);
    }
    println!("Experimental findings: {}", details.experimental_findings);
    println!("Applications:          {}", details.applications);
    if !result.relevant_chunks.is_empty() {
        println!();
        println!("{} research excerpts (use --json to see them)", result.relevant_chunks.len());
    }
    Ok(())
}

async fn health(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let client = SearchClient::from_config(&config.api)?;
    let backend = client.backend();
    println!("API: {}", client.base_url());

    let response = backend
        .health()
        .await
        .context("Failed to connect to API")?;
    let status = HealthStatus::from_response(&response);

    println!("  api:      {}", response.api);
    println!("  openai:   {}", response.openai);
    println!("  mongodb:  {}", response.mongodb);
    println!(
        "AI search: {}",
        if status.search_enabled() { "ready" } else { "unavailable" }
    );

    if verbose {
        match backend.root().await {
            Ok(root) => println!("Root: {} ({})", root.message, root.status),
            Err(e) => println!("Root: error: {}", e),
        }
        match backend.test_llm().await {
            Ok(probe) => {
                println!(
                    "LLM probe: {} ({} chars, json: {})",
                    probe.status, probe.response_length, probe.is_json
                );
                if let Some(error) = probe.error {
                    println!("  error: {}", error);
                }
            }
            Err(e) => println!("LLM probe: error: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "spacebio",
            "search",
            "yeast",
            "--condition",
            "Microgravity",
            "--api-url",
            "http://example.test",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://example.test"));
        assert_eq!(cli.timeout, Some(5));
        match cli.command {
            Some(Commands::Search {
                query,
                condition,
                json,
            }) => {
                assert_eq!(query, "yeast");
                assert_eq!(condition.as_deref(), Some("Microgravity"));
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["spacebio"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["spacebio", "tui", "--path", "/about"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui { path: Some(ref p) }) if p == "/about"));
    }
}

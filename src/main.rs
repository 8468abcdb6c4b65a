mod api;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod model;
mod runtime;
mod ui;
mod workers;

use crate::api::{ApiClient, DashboardClient};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::{error::Error, io};
use tokio::sync::{broadcast, mpsc};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Backend base URL, e.g. http://127.0.0.1:8000
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Log events to the console instead of drawing the TUI
        #[arg(long)]
        headless: bool,

        /// Disable background colors in the TUI
        #[arg(long)]
        no_background: bool,
    },
    /// Check that the backend is reachable
    Health {
        /// Backend base URL, e.g. http://127.0.0.1:8000
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Persist the backend base URL to the configuration file
    SetUrl {
        /// Backend base URL to save
        url: String,
    },
    /// Remove the saved configuration file
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            headless,
            no_background,
        } => {
            let environment = resolve_environment(base_url, &config_path)?;
            start(environment, headless, !no_background).await
        }
        Command::Health { base_url } => {
            let environment = resolve_environment(base_url, &config_path)?;
            let client = DashboardClient::new(environment);
            let base = client.environment().api_base_url();
            match client.get_health().await {
                Ok(health) if health.ok => {
                    println!("Backend at {} is healthy.", base);
                    Ok(())
                }
                Ok(_) => Err(Box::from(format!(
                    "Backend at {} reported an unhealthy state.",
                    base
                ))),
                Err(e) => {
                    eprintln!("Health check against {} failed: {}", base, e);
                    Err(e.into())
                }
            }
        }
        Command::SetUrl { url } => {
            // Validate before persisting
            let environment: Environment = url.parse().map_err(|_| {
                format!(
                    "Invalid base URL: {}. Expected http(s)://host[:port]",
                    url
                )
            })?;
            let config = Config::new(environment.api_base_url());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved backend URL: {}", environment.api_base_url());
            Ok(())
        }
        Command::Clear => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolve the backend environment from flag, environment variable, or
/// saved configuration, in that order of precedence.
fn resolve_environment(
    base_url: Option<String>,
    config_path: &Path,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = base_url {
        return url
            .parse()
            .map_err(|_| format!("Invalid base URL: {}", url).into());
    }
    if let Ok(url) = std::env::var("TRADEDASH_API_URL") {
        if !url.is_empty() {
            return url
                .parse()
                .map_err(|_| format!("Invalid TRADEDASH_API_URL: {}", url).into());
        }
    }
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(config_path) {
            if let Ok(environment) = config.api_base_url.parse() {
                return Ok(environment);
            }
        }
    }
    Ok(Environment::default())
}

/// Starts the dashboard application.
///
/// # Arguments
/// * `environment` - The backend to connect to.
/// * `headless` - Whether to log to the console instead of drawing the TUI.
/// * `with_background` - Whether to enable background colors in the TUI.
async fn start(
    environment: Environment,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let client = DashboardClient::new(environment.clone());
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
    let (event_receiver, join_handles) =
        runtime::start_refresh_worker(client, shutdown_receiver).await;

    if headless {
        run_headless(event_receiver, shutdown_sender).await?;
    } else {
        run_tui(environment, event_receiver, shutdown_sender, with_background).await?;
    }

    // Wait for workers to finish
    for handle in join_handles {
        let _ = handle.await;
    }
    Ok(())
}

/// Runs the application in TUI mode, handling terminal setup and cleanup.
async fn run_tui(
    environment: Environment,
    event_receiver: mpsc::Receiver<WorkerEvent>,
    shutdown_sender: broadcast::Sender<()>,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(
        environment,
        event_receiver,
        shutdown_sender,
        with_background,
    );
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

/// Runs the application in headless mode: log events to the console
/// until shutdown.
async fn run_headless(
    mut event_receiver: mpsc::Receiver<WorkerEvent>,
    shutdown_sender: broadcast::Sender<()>,
) -> Result<(), Box<dyn Error>> {
    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = shutdown_sender.subscribe();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    Ok(())
}

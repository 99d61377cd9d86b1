use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use cmdpal::app::{controller::PaletteController, r#loop::run_loop};
use cmdpal::config::{config_dir, AppConfig, ServiceConfig};
use cmdpal::domain::models::CommandContext;
use cmdpal::infrastructure::rpc_adapter::RpcAdapter;
use cmdpal::infrastructure::store::{FileStore, KeyValueStore, MemoryStore};
use cmdpal::logging;

#[derive(Parser, Debug)]
#[command(name = "cmdpal", about = "Keyboard command palette for an Odoo project server", version)]
struct Cli {
    /// Config file (defaults to ~/.config/cmdpal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project id sent as command context
    #[arg(long)]
    project: Option<i64>,

    /// Log filter, e.g. "debug" or "cmdpal=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));
}

async fn resolve_user(adapter: &RpcAdapter, service: &ServiceConfig) -> Result<i64> {
    if let Some((login, password)) = service.credentials() {
        let database = service
            .database
            .as_deref()
            .context("service.database is required when logging in")?;
        return adapter
            .authenticate(database, login, password)
            .await
            .with_context(|| format!("failed to authenticate against {}", service.url));
    }

    match service.user_id {
        Some(uid) => Ok(uid),
        None => bail!("no user identity: set service.login and service.password, or service.user_id"),
    }
}

fn open_store() -> Arc<dyn KeyValueStore> {
    match config_dir() {
        Some(dir) => Arc::new(FileStore::new(dir)),
        None => {
            tracing::warn!("no home directory, command history will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(project) = cli.project {
        config.service.project_id = Some(project);
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    match logging::init(&config.log) {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => eprintln!("warning: logging disabled: {e:#}"),
    }

    // Resolve identity BEFORE terminal setup so a failure leaves the
    // terminal untouched.
    let adapter = Arc::new(RpcAdapter::new(&config.service)?);
    let user_id = resolve_user(&adapter, &config.service).await?;
    let context = CommandContext {
        user_id,
        project_id: config.service.project_id,
    };
    tracing::info!(user_id, project_id = ?context.project_id, url = %config.service.url, "starting");

    let (controller, action_rx) =
        PaletteController::mount(adapter, open_store(), context, config.palette.clone());

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, controller, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}

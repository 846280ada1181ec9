use std::time::Instant;

use anyhow::{Context, Result};
use sqlite_console::app::Console;
use sqlite_console::components::ComponentRegistry;
use sqlite_console::connection::{ApiClient, EventBridge};
use sqlite_console::state::{ConfigManager, ConsoleSettings};

const URL_ENV: &str = "SQLITE_CONSOLE_URL";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut settings = load_settings();
    if let Some(url) = std::env::args().nth(1).or_else(|| std::env::var(URL_ENV).ok()) {
        settings.server.base_url = url;
    }

    let registry = ComponentRegistry::standard();
    let mut console =
        Console::new(&registry, settings.clone()).context("Failed to build console views")?;
    let client =
        ApiClient::new(settings.server.base_url.clone(), settings.server.request_timeout())
            .context("Failed to create HTTP client")?;
    log::info!("Polling {}", client.base_url());
    let mut bridge = EventBridge::new(client, &settings, Instant::now());

    loop {
        bridge.poll_due(Instant::now(), &mut console);
        log_summary(&console);

        let wait = bridge.next_deadline().saturating_duration_since(Instant::now());
        std::thread::sleep(wait);
    }
}

fn load_settings() -> ConsoleSettings {
    match ConfigManager::new().and_then(|config| config.load_settings()) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {err:#}");
            ConsoleSettings::default()
        }
    }
}

fn log_summary(console: &Console) {
    let database = console.database();
    let schema = console.schema();
    let active = schema.active_table().map(|table| table.name.as_str()).unwrap_or("-");
    log::info!(
        "version={} schemas={} pool={} schema={} tables={} active={} data={}",
        database.version(),
        database.schemas().len(),
        database.pool().unwrap_or("-"),
        schema.name(),
        schema.tabs().items().len(),
        active,
        console.table_data().summary()
    );
    if let Some(status) = console.status() {
        log::warn!("{}", status.text);
    }
}

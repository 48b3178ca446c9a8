mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use wayfarer_config::WayfarerConfig;

/// Turn a `--log-level` value or config level into a filter directive.
/// Bare levels apply to the workspace crates only.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wayfarer={level}")
    }
}

fn main() {
    let args = cli::parse();

    // Logging needs the config's level, so load first and report afterwards.
    let loaded = wayfarer_config::load_config(args.config.as_deref());
    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => "info".to_string(),
    };
    let fallback = "wayfarer=info";
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive(&level)
                    .parse()
                    .unwrap_or_else(|_| fallback.parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("Wayfarer v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WayfarerConfig::default()
    });

    if let Err(e) = wayfarer_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let keybinds = wayfarer_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", keybinds.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::WayfarerApp::new(config, keybinds, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

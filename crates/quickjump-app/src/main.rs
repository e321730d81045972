mod bridge;
mod cli;
mod search;

use std::process::ExitCode;

use quickjump_config::schema::QuickJumpConfig;
use tracing_subscriber::EnvFilter;

use cli::Command;

fn load_config(args: &cli::Args) -> QuickJumpConfig {
    let loaded = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            quickjump_config::load_config_from(path)
        }
        None => quickjump_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        QuickJumpConfig::default()
    })
}

/// Pick the log directive: CLI flag, then `[logging] level`, then the default.
///
/// Config is read before the subscriber exists, so this peeks at the file
/// without logging.
fn log_directive(args: &cli::Args) -> String {
    if let Some(directive) = &args.log_level {
        return directive.clone();
    }
    let path = args
        .config
        .clone()
        .or_else(|| quickjump_config::toml_loader::default_config_path().ok());
    let level = path
        .and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|s| quickjump_config::toml_loader::parse_config(&s).ok())
        .map(|c| c.logging.level)
        .unwrap_or_default();
    format!("quickjump={}", level.as_directive())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let directive = log_directive(&args);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "quickjump=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::debug!("QuickJump v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&args);

    let result = match args.command {
        Command::Search {
            tabs,
            query,
            limit,
            style,
            json,
        } => {
            if let Some(limit) = limit {
                config.picker.max_results = limit.max(1);
            }
            if let Some(style) = style {
                config.highlight.style = style.into();
            }
            search::load_tabs(&tabs, std::io::stdin().lock())
                .and_then(|tabs| search::run(&config, tabs, &query, json, std::io::stdout().lock()))
                .map(|_| ())
        }
        Command::Bridge => {
            let mut picker = quickjump_picker::Picker::new(&config.picker);
            bridge::run(
                &mut picker,
                &config.keybinds,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("quickjump: {e}");
            ExitCode::FAILURE
        }
    }
}

mod settings;

use settings::Settings;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") | Some("critical") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    // Tracing must be live before Settings::load so the missing env-file
    // warning is visible.
    init_tracing(None);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        app = %settings.app_name,
        tagline = %settings.app_tagline,
        root = %settings.root_dir.display(),
        logo = %settings.app_logo_image.display(),
        log_level = %settings.log_level,
        "Settings loaded"
    );
}

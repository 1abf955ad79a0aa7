//! Earnings GUI - Main Entry Point
//!
//! Earnings table viewer with sorting, pagination and CSV export

use earnings_gui::app::application::run_app;
use earnings_gui::constants::LOG_FILE_PREFIX;
use earnings_gui::helpers::get_or_create_data_dir;
use earnings_gui::utils::config_store::load_settings;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Daily log file in the data dir; stderr only when the dir is unavailable
    let (file_layer, _guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        Err(e) => {
            eprintln!("file logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    tracing::info!("Starting Earnings GUI...");

    let settings = load_settings();
    run_app(settings);
}

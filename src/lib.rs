use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod time_utils;

/// Wire the browser logger and clock into the domain logging facade
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let level = AppConfig::load().log_level().unwrap_or(LogLevel::Debug);
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Logging initialized");
}

/// Mount the chart page into `<body>`
#[wasm_bindgen]
pub fn start_app() {
    let config = AppConfig::load();
    let ticker = match config.ticker() {
        Ok(ticker) => ticker,
        Err(e) => {
            get_logger().error(LogComponent::Presentation("Initialize"), &format!("❌ {e}"));
            return;
        }
    };
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("📈 Mounting chart for {} against {}", ticker, config.api_base_url),
    );
    leptos::mount_to_body(move || leptos::view! { <app::App config=config ticker=ticker /> });
}

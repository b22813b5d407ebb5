mod app;
mod color;
mod config;
mod die;
mod state;
mod strings;
mod ui;

use app::DiceRollerApp;
use config::AppConfig;
use strings::Strings;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_system();
    let strings = Strings::load(&config.locale).unwrap_or_else(|e| {
        log::error!("Failed to load strings: {e:#}");
        Strings::default()
    });
    log::info!(
        "Starting with locale '{}' (system: '{}'), die size {}",
        strings.locale,
        config.locale,
        config.die_size
    );

    let title = strings.app_name.clone();
    eframe::run_native(
        &title,
        config.native_options(),
        Box::new(move |cc| Ok(Box::new(DiceRollerApp::new(&cc.egui_ctx, &config, strings)))),
    )
}

use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::strings::Strings;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiceRollerApp {
    pub state: AppState,
}

impl DiceRollerApp {
    /// Build the app and hook roll notifications up to egui's repaint.
    pub fn new(ctx: &egui::Context, config: &AppConfig, strings: Strings) -> Self {
        let mut state = AppState::new(config, strings);

        let ctx = ctx.clone();
        state.roller.on_change(move |image| {
            log::debug!("Rolled {} ({image})", image.number());
            ctx.request_repaint();
        });

        Self { state }
    }
}

impl eframe::App for DiceRollerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::die_with_button(ui, &mut self.state);
        });
    }
}

use eframe::egui::{self, TextStyle, Ui};

use crate::state::AppState;
use crate::ui::die_view;

/// Minimum width of the Roll button.
const BUTTON_MIN_WIDTH: f32 = 96.0;

// ---------------------------------------------------------------------------
// Central column – die image above the Roll button
// ---------------------------------------------------------------------------

/// Height of a text button as egui lays it out: text plus padding, at least `interact_size`.
fn button_height(ui: &Ui) -> f32 {
    let spacing = ui.spacing();
    let text = ui.text_style_height(&TextStyle::Button);
    (text + 2.0 * spacing.button_padding.y).max(spacing.interact_size.y)
}

/// Space to leave above a column of `content` height so it sits centered in `available`.
fn top_padding(available: f32, content: f32) -> f32 {
    ((available - content) / 2.0).max(0.0)
}

/// Render the die with its Roll button, centered in the available space.
pub fn die_with_button(ui: &mut Ui, state: &mut AppState) {
    // die, item spacing after it, explicit gap, button
    let content_height = state.die_size
        + ui.spacing().item_spacing.y
        + state.spacing
        + button_height(ui);
    let padding = top_padding(ui.available_height(), content_height);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(padding);

        let face = state.roller.face();
        die_view::die_face(ui, state.roller.render(), state.die_size, &state.palette)
            .on_hover_text(state.strings.die_description(face));

        ui.add_space(state.spacing);

        if ui
            .add(egui::Button::new(&state.strings.roll).min_size(egui::vec2(BUTTON_MIN_WIDTH, 0.0)))
            .clicked()
        {
            state.roller.roll();
            log::trace!("Roll #{} handled", state.roller.revision());
        }
    });
}

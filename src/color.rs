use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Die palette: one base hue → body / outline / pip colours
// ---------------------------------------------------------------------------

/// Hue used when the config does not pick one (warm ivory).
pub const DEFAULT_HUE: f32 = 40.0;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Colours used to paint a die face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiePalette {
    pub body: Color32,
    pub outline: Color32,
    pub pip: Color32,
}

impl DiePalette {
    /// Light body, mid-tone outline and dark pips, all sharing `hue`.
    pub fn from_hue(hue: f32) -> Self {
        let hue = hue.rem_euclid(360.0);
        DiePalette {
            body: hsl_to_color32(hue, 0.35, 0.94),
            outline: hsl_to_color32(hue, 0.25, 0.45),
            pip: hsl_to_color32(hue, 0.30, 0.12),
        }
    }
}

impl Default for DiePalette {
    fn default() -> Self {
        Self::from_hue(DEFAULT_HUE)
    }
}

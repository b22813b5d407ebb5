use eframe::egui;

use crate::color::DEFAULT_HUE;
use crate::strings::FALLBACK_LOCALE;

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Startup settings. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial window size in points.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Side length of the painted die.
    pub die_size: f32,
    /// Vertical gap between the die and the button.
    pub spacing: f32,
    /// Hue of the die body, in degrees.
    pub die_hue: f32,
    /// BCP 47 tag used to pick the UI strings, e.g. `de-DE`.
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [360.0, 480.0],
            min_window_size: [240.0, 320.0],
            die_size: 160.0,
            spacing: 16.0,
            die_hue: DEFAULT_HUE,
            locale: FALLBACK_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the locale taken from the operating system.
    pub fn from_system() -> Self {
        Self::default().with_locale(sys_locale::get_locale())
    }

    /// Use `detected` as the locale, keeping the current one when it is absent or blank.
    pub fn with_locale(mut self, detected: Option<String>) -> Self {
        match detected {
            Some(tag) if !tag.trim().is_empty() => self.locale = tag.trim().to_string(),
            _ => log::warn!("No system locale detected, using '{}'", self.locale),
        }
        self
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}

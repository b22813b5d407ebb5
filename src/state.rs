use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::DiePalette;
use crate::config::AppConfig;
use crate::die::{DieFace, DieImage};
use crate::strings::Strings;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub roller: DieRoller,
    pub strings: Strings,
    pub palette: DiePalette,
    /// Side length of the painted die.
    pub die_size: f32,
    /// Gap between the die and the Roll button.
    pub spacing: f32,
}

impl AppState {
    pub fn new(config: &AppConfig, strings: Strings) -> Self {
        Self {
            roller: DieRoller::new(),
            strings,
            palette: DiePalette::from_hue(config.die_hue),
            die_size: config.die_size,
            spacing: config.spacing,
        }
    }
}

// ---------------------------------------------------------------------------
// Roller state
// ---------------------------------------------------------------------------

/// Callback fired after every roll with the image for the new face.
pub type ChangeListener = Box<dyn FnMut(DieImage)>;

/// The die widget's state, independent of rendering.
pub struct DieRoller<R = StdRng> {
    face: DieFace,
    rng: R,
    /// Number of rolls performed so far.
    revision: u64,
    listener: Option<ChangeListener>,
}

impl DieRoller<StdRng> {
    /// Roller seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for DieRoller<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DieRoller<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            face: DieFace::default(),
            rng,
            revision: 0,
            listener: None,
        }
    }

    /// Register the callback notified after each roll. Replaces any previous one.
    pub fn on_change(&mut self, listener: impl FnMut(DieImage) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn face(&self) -> DieFace {
        self.face
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Image for the current face.
    pub fn render(&self) -> DieImage {
        self.face.image()
    }

    /// Replace the face with a fresh uniform draw from the owned RNG.
    pub fn roll(&mut self) {
        let face = DieFace::random(&mut self.rng);
        self.apply(face);
    }

    fn apply(&mut self, face: DieFace) {
        self.face = face;
        self.revision += 1;
        if let Some(listener) = self.listener.as_mut() {
            listener(face.image());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn seeded(seed: u64) -> DieRoller {
        DieRoller::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_initial_render_is_face_one() {
        let roller = DieRoller::default();
        assert_eq!(roller.face().value(), 1);
        assert_eq!(roller.render(), DieImage::Face1);
        assert_eq!(roller.revision(), 0);
    }

    #[test]
    fn test_render_is_pure() {
        let mut roller = seeded(3);
        roller.roll();
        let a = roller.render();
        let b = roller.render();
        assert_eq!(a, b);
        assert_eq!(a, roller.face().image());
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut roller = seeded(11);
        for _ in 0..10_000 {
            roller.roll();
            let v = roller.face().value();
            assert!((1..=6).contains(&v), "rolled {v}");
        }
        assert_eq!(roller.revision(), 10_000);
    }

    #[test]
    fn test_rolls_are_uniform() {
        const N: usize = 6_000;
        let mut roller = seeded(42);
        let mut counts = [0usize; 6];
        for _ in 0..N {
            roller.roll();
            counts[(roller.face().value() - 1) as usize] += 1;
        }

        assert!(counts.iter().all(|&c| c > 0), "stuck value: {counts:?}");

        // Chi-square with 5 degrees of freedom; 20.52 is the 0.999 quantile.
        let expected = N as f64 / 6.0;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 20.52, "chi-square {chi2:.2} for {counts:?}");
    }

    #[test]
    fn test_seeded_rollers_agree() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..100 {
            a.roll();
            b.roll();
            assert_eq!(a.face(), b.face());
        }
    }

    #[test]
    fn test_roll_draws_from_owned_rng() {
        let mut roller = seeded(5);
        let mut reference = StdRng::seed_from_u64(5);
        roller.roll();
        assert_eq!(roller.face(), DieFace::random(&mut reference));
        assert_eq!(roller.revision(), 1);
    }

    #[test]
    fn test_listener_fires_once_per_roll_with_new_image() {
        let seen: Rc<RefCell<Vec<DieImage>>> = Rc::default();
        let mut roller = seeded(8);
        let sink = Rc::clone(&seen);
        roller.on_change(move |image| sink.borrow_mut().push(image));

        let mut expected = Vec::new();
        for _ in 0..50 {
            roller.roll();
            expected.push(roller.render());
        }

        assert_eq!(*seen.borrow(), expected);
        assert_eq!(roller.revision(), 50);
    }

    #[test]
    fn test_app_state_from_config() {
        let config = AppConfig {
            die_size: 96.0,
            spacing: 24.0,
            ..AppConfig::default()
        };
        let mut state = AppState::new(&config, Strings::default());
        assert_eq!(state.die_size, 96.0);
        assert_eq!(state.spacing, 24.0);
        assert_eq!(state.roller.render(), DieImage::Face1);

        state.roller.roll();
        assert!((1..=6).contains(&state.roller.face().value()));
        assert_eq!(state.roller.revision(), 1);
    }

    #[test]
    fn test_listener_not_called_without_roll() {
        let calls = Rc::new(RefCell::new(0u32));
        let mut roller = seeded(8);
        let sink = Rc::clone(&calls);
        roller.on_change(move |_| *sink.borrow_mut() += 1);

        let _ = roller.render();
        let _ = roller.render();
        assert_eq!(*calls.borrow(), 0);
    }
}

/// Die model: face values and the images that represent them.
///
/// ```text
///   rng ──► DieFace (1..=6) ──► DieImage (dice_1 .. dice_6) ──► pips
/// ```

pub mod face;
pub mod image;

pub use face::{DieFace, FaceError};
pub use image::DieImage;

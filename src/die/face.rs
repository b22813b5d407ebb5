use std::fmt;

use rand::Rng;
use thiserror::Error;

use super::image::DieImage;

// ---------------------------------------------------------------------------
// DieFace – the value a six-sided die currently shows
// ---------------------------------------------------------------------------

/// Error returned when a raw integer is not a valid face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FaceError {
    #[error("die face must be between 1 and 6, got {0}")]
    OutOfRange(u8),
}

/// A face value in `1..=6`. Construction outside that range is impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Every face, in ascending order.
    #[cfg(test)]
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    /// Draw a face uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        DieFace(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The image shown for this face.
    pub fn image(self) -> DieImage {
        match self.0 {
            1 => DieImage::Face1,
            2 => DieImage::Face2,
            3 => DieImage::Face3,
            4 => DieImage::Face4,
            5 => DieImage::Face5,
            6 => DieImage::Face6,
            other => unreachable!("DieFace holds {other}, outside 1..=6"),
        }
    }
}

impl Default for DieFace {
    fn default() -> Self {
        DieFace(Self::MIN)
    }
}

impl TryFrom<u8> for DieFace {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(DieFace(value))
        } else {
            Err(FaceError::OutOfRange(value))
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

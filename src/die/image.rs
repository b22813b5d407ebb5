use std::fmt;

// ---------------------------------------------------------------------------
// DieImage – the six static face images
// ---------------------------------------------------------------------------

/// Identifier of one of the six pre-drawn die face images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieImage {
    Face1,
    Face2,
    Face3,
    Face4,
    Face5,
    Face6,
}

/// Pip centre, as fractions of the die's side length.
pub type Pip = (f32, f32);

const LOW: f32 = 0.25;
const MID: f32 = 0.5;
const HIGH: f32 = 0.75;

const PIPS_1: &[Pip] = &[(MID, MID)];
const PIPS_2: &[Pip] = &[(LOW, LOW), (HIGH, HIGH)];
const PIPS_3: &[Pip] = &[(LOW, LOW), (MID, MID), (HIGH, HIGH)];
const PIPS_4: &[Pip] = &[(LOW, LOW), (HIGH, LOW), (LOW, HIGH), (HIGH, HIGH)];
const PIPS_5: &[Pip] = &[(LOW, LOW), (HIGH, LOW), (MID, MID), (LOW, HIGH), (HIGH, HIGH)];
const PIPS_6: &[Pip] = &[
    (LOW, LOW),
    (HIGH, LOW),
    (LOW, MID),
    (HIGH, MID),
    (LOW, HIGH),
    (HIGH, HIGH),
];

impl DieImage {
    /// Pip layout of the image. Origin is the top-left corner.
    pub fn pips(self) -> &'static [Pip] {
        match self {
            DieImage::Face1 => PIPS_1,
            DieImage::Face2 => PIPS_2,
            DieImage::Face3 => PIPS_3,
            DieImage::Face4 => PIPS_4,
            DieImage::Face5 => PIPS_5,
            DieImage::Face6 => PIPS_6,
        }
    }

    /// The face number this image depicts.
    pub fn number(self) -> u8 {
        match self {
            DieImage::Face1 => 1,
            DieImage::Face2 => 2,
            DieImage::Face3 => 3,
            DieImage::Face4 => 4,
            DieImage::Face5 => 5,
            DieImage::Face6 => 6,
        }
    }

    /// Stable resource-style name, used in logs.
    pub fn asset_name(self) -> &'static str {
        match self {
            DieImage::Face1 => "dice_1",
            DieImage::Face2 => "dice_2",
            DieImage::Face3 => "dice_3",
            DieImage::Face4 => "dice_4",
            DieImage::Face5 => "dice_5",
            DieImage::Face6 => "dice_6",
        }
    }
}

impl fmt::Display for DieImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::DieFace;

    #[test]
    fn test_pip_count_matches_number() {
        for face in DieFace::ALL {
            let image = face.image();
            assert_eq!(image.pips().len(), image.number() as usize, "{image}");
            assert_eq!(image.number(), face.value());
        }
    }

    #[test]
    fn test_pips_inside_unit_square() {
        for face in DieFace::ALL {
            for &(x, y) in face.image().pips() {
                assert!(x > 0.0 && x < 1.0);
                assert!(y > 0.0 && y < 1.0);
            }
        }
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(DieImage::Face1.to_string(), "dice_1");
        assert_eq!(DieImage::Face6.asset_name(), "dice_6");
    }
}

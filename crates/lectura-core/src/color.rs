use crate::constants::PALETTE;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Straight (non-premultiplied) colour with a float alpha, the way the 2D
/// canvas API takes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string for canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba::rgb(r, g, b)
    }
}

/// Random entry of the shared party palette.
pub fn random_palette_color(rng: &mut StdRng) -> Rgba {
    PALETTE
        .choose(rng)
        .copied()
        .map(Rgba::from)
        .unwrap_or(Rgba::WHITE)
}

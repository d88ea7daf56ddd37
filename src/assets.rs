//! Palette and sprite data.

use embedded_graphics::pixelcolor::Rgb565;

/// 8-bit-per-channel colour squeezed into RGB565.
const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const SKY: Rgb565 = rgb(138, 235, 244);
pub const BIRD_BODY: Rgb565 = rgb(255, 254, 174);
pub const BIRD_OUTLINE: Rgb565 = rgb(195, 165, 75);
pub const BIRD_BEAK: Rgb565 = rgb(251, 216, 114);
pub const PIPE: Rgb565 = rgb(99, 255, 78);
pub const PIPE_HIGHLIGHT: Rgb565 = rgb(250, 255, 250);
pub const PIPE_SEAM: Rgb565 = rgb(0, 0, 0);
pub const FLOOR: Rgb565 = rgb(246, 240, 163);
pub const FLOOR_EDGE: Rgb565 = rgb(0, 0, 0);
pub const TEXT: Rgb565 = rgb(255, 255, 255);
pub const GAME_OVER_BACKGROUND: Rgb565 = rgb(0, 0, 0);

/// Indexed bitmap: `indices` holds `width * height` palette indices, row-major.
#[derive(Clone, Copy, Debug)]
pub struct Sprite<'a> {
    pub width: u32,
    pub height: u32,
    pub palette: &'a [Rgb565],
    pub indices: &'a [u8],
}

impl Sprite<'_> {
    /// Colour at (`col`, `row`). Out-of-range indices fall back to palette entry 0.
    pub fn color_at(&self, col: u32, row: u32) -> Rgb565 {
        let index = self
            .indices
            .get((row * self.width + col) as usize)
            .copied()
            .unwrap_or(0);
        self.palette
            .get(usize::from(index))
            .or_else(|| self.palette.first())
            .copied()
            .unwrap_or(SKY)
    }
}

/// Entry 0 is the sky so the sprite corners blend into the background.
const BIRD_PALETTE: [Rgb565; 6] = [
    SKY,
    BIRD_OUTLINE,
    BIRD_BODY,
    Rgb565::new(31, 63, 31),
    Rgb565::new(31, 0, 0),
    BIRD_BEAK,
];

#[rustfmt::skip]
const BIRD_INDICES: [u8; 64] = [
    0, 0, 1, 1, 1, 1, 1, 0,
    0, 1, 2, 2, 2, 1, 3, 1,
    0, 2, 2, 2, 2, 1, 3, 1,
    1, 1, 1, 2, 2, 3, 1, 1,
    1, 2, 2, 2, 2, 2, 4, 4,
    1, 2, 2, 2, 1, 5, 4, 0,
    0, 1, 2, 1, 5, 5, 5, 0,
    0, 0, 1, 5, 5, 5, 0, 0,
];

pub const BIRD: Sprite<'static> = Sprite {
    width: 8,
    height: 8,
    palette: &BIRD_PALETTE,
    indices: &BIRD_INDICES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bird_sprite_is_complete() {
        assert_eq!(BIRD.indices.len(), (BIRD.width * BIRD.height) as usize);
        assert!(BIRD.indices.iter().all(|&i| usize::from(i) < BIRD.palette.len()));
    }

    #[test]
    fn corners_are_sky() {
        assert_eq!(BIRD.color_at(0, 0), SKY);
        assert_eq!(BIRD.color_at(7, 7), SKY);
        assert_eq!(BIRD.color_at(6, 4), Rgb565::new(31, 0, 0));
    }
}

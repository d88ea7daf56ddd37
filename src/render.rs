//! Drawing, straight to the display with no framebuffer.
//!
//! Nothing here clears the whole playfield once a run is going. Each frame
//! paints the pipe's leading columns, wipes the columns behind it, and
//! redraws the bird over its previous footprint. Everything is clipped to
//! the 128x160 game area so a translated target never bleeds outside it.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{
            FONT_6X10,
            FONT_10X20,
        },
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{
        Baseline,
        Text,
    },
};
use heapless::String;

use crate::{
    assets::{
        self,
        BIRD,
    },
    state::{
        Bird,
        FLOOR_H,
        GAME_H,
        GAP_H,
        PIPE_W,
        Pipe,
        SCREEN_H,
        SCREEN_W,
    },
};

/// Grass strip height inside the floor; only its bottom line survives.
const GRASS_H: i32 = 4;
/// Seam marks sit this far above and below the gap.
const SEAM_INSET: i32 = 6;
/// Column of the pipe body, relative to its highlight column.
const PIPE_BODY: i32 = 3;

pub const HUD_X: i32 = SCREEN_W / 2 - 1;
pub const HUD_Y: i32 = 4;
/// Advance of one `FONT_6X10` glyph.
const HUD_CHAR_W: i32 = 6;

const SCREEN: Rectangle = Rectangle::new(
    Point::zero(),
    Size::new(SCREEN_W as u32, SCREEN_H as u32),
);
const PLAYFIELD: Rectangle = Rectangle::new(
    Point::zero(),
    Size::new(SCREEN_W as u32, GAME_H as u32),
);

fn fill<D>(target: &mut D, area: Rectangle, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = area.intersection(&SCREEN);
    if area.is_zero_sized() {
        return Ok(());
    }
    target.fill_solid(&area, color)
}

fn vline<D>(target: &mut D, x: i32, y: i32, len: i32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if len <= 0 {
        return Ok(());
    }
    fill(target, Rectangle::new(Point::new(x, y), Size::new(1, len as u32)), color)
}

fn pixel<D>(target: &mut D, x: i32, y: i32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let point = Point::new(x, y);
    if !SCREEN.contains(point) {
        return Ok(());
    }
    Pixel(point, color).draw(target)
}

/// Sky over the whole playfield, plus the floor. Drawn once per run.
pub fn draw_playfield<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill(target, PLAYFIELD, assets::SKY)?;
    fill(
        target,
        Rectangle::new(Point::new(0, GAME_H), Size::new(SCREEN_W as u32, 1)),
        assets::FLOOR_EDGE,
    )?;
    fill(
        target,
        Rectangle::new(
            Point::new(0, GAME_H + GRASS_H - 3),
            Size::new(SCREEN_W as u32, (FLOOR_H - GRASS_H + 3) as u32),
        ),
        assets::FLOOR,
    )
}

/// Leading columns of the pipe: highlight, body and seam marks.
pub fn draw_pipe<D>(target: &mut D, pipe: &Pipe) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if !pipe.is_visible() {
        return Ok(());
    }

    let lower_y = pipe.gap_y + GAP_H + 1;
    let lower_len = GAME_H - lower_y;

    for (x, color) in [
        (pipe.x + PIPE_BODY, assets::PIPE),
        (pipe.x, assets::PIPE_HIGHLIGHT),
    ] {
        vline(target, x, 0, pipe.gap_y, color)?;
        vline(target, x, lower_y, lower_len, color)?;
    }

    pixel(target, pipe.x, pipe.gap_y, assets::PIPE_SEAM)?;
    pixel(target, pipe.x, pipe.gap_y + GAP_H, assets::PIPE_SEAM)?;
    for x in [pipe.x, pipe.x + PIPE_BODY] {
        pixel(target, x, pipe.gap_y - SEAM_INSET, assets::PIPE_SEAM)?;
        pixel(target, x, pipe.gap_y + GAP_H + SEAM_INSET, assets::PIPE_SEAM)?;
    }
    Ok(())
}

/// Paints sky over the two columns the pipe just left behind.
pub fn erase_pipe_trail<D>(target: &mut D, pipe: &Pipe) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if pipe.x > SCREEN_W {
        return Ok(());
    }
    vline(target, pipe.x + PIPE_W - 3, 0, GAME_H, assets::SKY)?;
    vline(target, pipe.x + PIPE_W - 2, 0, GAME_H, assets::SKY)
}

/// Redraws the bird column by column: sky over the rows drawn last time,
/// then the sprite at the current row.
///
/// The bird moves by fractional rows with changing speed, so erasing only
/// the rows it moved off would leave stale pixels behind. Updates
/// `bird.old_y` to the row drawn here.
pub fn draw_bird<D>(target: &mut D, bird: &mut Bird) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let row = bird.row();
    let old_row = bird.old_y;
    let visible = |p: &Pixel<Rgb565>| PLAYFIELD.contains(p.0);

    for col in 0..BIRD.width {
        let x = bird.x + col as i32;
        target.draw_iter(
            (0..BIRD.height)
                .map(|r| Pixel(Point::new(x, old_row + r as i32), assets::SKY))
                .filter(visible),
        )?;
        target.draw_iter(
            (0..BIRD.height)
                .map(|r| Pixel(Point::new(x, row + r as i32), BIRD.color_at(col, r)))
                .filter(visible),
        )?;
    }

    bird.old_y = row;
    Ok(())
}

fn number(value: u32) -> String<10> {
    let mut text = String::new();
    // u32::MAX has ten digits
    let _ = write!(text, "{value}");
    text
}

fn text_width(value: u32) -> i32 {
    number(value).len() as i32 * HUD_CHAR_W
}

/// On-screen score, redrawn only when it changes or the pipe has painted
/// over it.
#[derive(Clone, Debug, Default)]
pub struct Hud {
    shown: Option<u32>,
}

impl Hud {
    /// Forget what is on screen, e.g. after the playfield was cleared.
    pub fn reset(&mut self) {
        self.shown = None;
    }

    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    pub fn update<D>(&mut self, target: &mut D, score: u32, pipe: &Pipe) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let width = self.shown.map_or(0, text_width).max(text_width(score));
        let covered = pipe.x < HUD_X + width && pipe.x + PIPE_W > HUD_X;
        if self.shown == Some(score) && !covered {
            return Ok(());
        }

        let at = Point::new(HUD_X, HUD_Y);
        if let Some(old) = self.shown.filter(|&old| old != score) {
            let erase = MonoTextStyle::new(&FONT_6X10, assets::SKY);
            Text::with_baseline(&number(old), at, erase, Baseline::Top).draw(target)?;
        }
        let style = MonoTextStyle::new(&FONT_6X10, assets::TEXT);
        Text::with_baseline(&number(score), at, style, Baseline::Top).draw(target)?;

        self.shown = Some(score);
        Ok(())
    }
}

/// Final score, best score of the session and the restart/exit prompt.
pub fn draw_game_over<D>(target: &mut D, score: u32, best: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill(target, SCREEN, assets::GAME_OVER_BACKGROUND)?;

    let small = MonoTextStyle::new(&FONT_6X10, assets::TEXT);
    let big = MonoTextStyle::new(&FONT_10X20, assets::TEXT);

    let mut line: String<24> = String::new();
    let _ = write!(line, "best  : {best}");
    Text::with_baseline(&line, Point::new(10, SCREEN_H / 2 - 28), small, Baseline::Top)
        .draw(target)?;

    line.clear();
    let _ = write!(line, "score : {score}");
    Text::with_baseline(&line, Point::new(10, SCREEN_H / 2 - 14), small, Baseline::Top)
        .draw(target)?;

    Text::with_baseline(
        "GAME OVER",
        Point::new(SCREEN_W / 2 - 9 * 5, SCREEN_H / 2 - 4),
        big,
        Baseline::Top,
    )
    .draw(target)?;
    Text::with_baseline(
        "A: again  B: quit",
        Point::new(SCREEN_W / 2 - 17 * 3, SCREEN_H / 2 + 20),
        small,
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

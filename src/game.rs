//! The in-game loop: catch-up physics, one draw, collision check.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};

use crate::{
    collision::{
        self,
        Crash,
        Outcome,
    },
    config::Physics,
    pacer::Pacer,
    ports::{
        Clock,
        Controls,
    },
    render::{
        self,
        Hud,
    },
    state::GameState,
};

/// Plays one run until the bird crashes.
///
/// Every outer iteration runs the physics ticks that are due (at most
/// `physics.max_frameskip`), then draws exactly once and checks for
/// collisions. When no tick is due the clock is awaited until one is.
pub async fn play<D, C, K>(
    state: &mut GameState,
    hud: &mut Hud,
    display: &mut D,
    clock: &mut C,
    controls: &mut K,
    physics: &Physics,
) -> Result<Crash, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    C: Clock,
    K: Controls,
{
    let mut pacer = Pacer::new(clock.now_ms(), physics.tick_ms, physics.max_frameskip);

    loop {
        pacer.begin_frame();
        while pacer.should_update(clock.now_ms()) {
            let flap = controls.read().any();
            state.update(flap, physics);
        }

        render::draw_pipe(display, &state.pipe)?;
        render::erase_pipe_trail(display, &state.pipe)?;
        render::draw_bird(display, &mut state.bird)?;

        match collision::check(state) {
            Outcome::Crashed(crash) => return Ok(crash),
            Outcome::Scored => debug!("score {}", state.score),
            Outcome::Clear => {}
        }

        hud.update(display, state.score, &state.pipe)?;

        let wait = pacer.until_next(clock.now_ms());
        if wait > 0 {
            clock.delay_ms(u32::try_from(wait).unwrap_or(u32::MAX)).await;
        }
    }
}

//! Ground and pipe collisions, and scoring.

use crate::state::{
    BIRD_H,
    BIRD_W,
    GAME_H,
    GAP_H,
    GameState,
    PIPE_W,
};

/// What ended a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crash {
    Ground,
    Pipe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Clear,
    Scored,
    Crashed(Crash),
}

/// Checks the bird against the floor and the pipe, updating the score and
/// the passing flag.
pub fn check(state: &mut GameState) -> Outcome {
    let bird = &state.bird;
    let pipe = &state.pipe;

    if bird.y >= (GAME_H - BIRD_H) as f32 {
        return Outcome::Crashed(Crash::Ground);
    }

    let overlaps = bird.x + BIRD_W > pipe.x && bird.x < pipe.x + PIPE_W;
    if overlaps {
        let top = bird.y;
        let bottom = bird.y + BIRD_H as f32;
        if top < pipe.gap_y as f32 || bottom > (pipe.gap_y + GAP_H) as f32 {
            return Outcome::Crashed(Crash::Pipe);
        }
        state.passing = true;
    } else if state.passing && bird.x >= pipe.x + PIPE_W {
        state.passing = false;
        state.score += 1;
        return Outcome::Scored;
    }

    Outcome::Clear
}

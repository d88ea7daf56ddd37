//! Bird, pipe and score, and the physics tick that moves them.

use crate::{
    config::Physics,
    rng::Rng,
};

pub const SCREEN_W: i32 = 128;
pub const SCREEN_H: i32 = 160;
/// Floor height, measured up from the bottom of the screen.
pub const FLOOR_H: i32 = 20;
/// Playfield height; the floor starts here.
pub const GAME_H: i32 = SCREEN_H - FLOOR_H;

pub const BIRD_W: i32 = 8;
pub const BIRD_H: i32 = 8;
/// Fixed column of the bird's left edge.
pub const BIRD_X: i32 = 28;
pub const BIRD_START_Y: f32 = (SCREEN_H / 2 - BIRD_H) as f32;
/// A flap this close to the top stops the bird instead of lifting it.
const CEILING: f32 = (BIRD_H / 4) as f32;

pub const PIPE_W: i32 = 12;
pub const GAP_H: i32 = 36;
/// Gap offsets are drawn from `GAP_MIN..GAP_MAX`, keeping a 10 px margin.
pub const GAP_MIN: i32 = 10;
pub const GAP_MAX: i32 = GAME_H - (10 + GAP_H);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bird {
    pub x: i32,
    pub y: f32,
    /// Row used by the previous draw, erased before the next one.
    pub old_y: i32,
    pub vel_y: f32,
}

impl Bird {
    fn spawn(physics: &Physics) -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            old_y: BIRD_START_Y as i32,
            vel_y: -physics.jump_force,
        }
    }

    /// Screen row of the sprite's top edge.
    pub fn row(&self) -> i32 {
        self.y as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipe {
    pub x: i32,
    /// Top of the passable gap.
    pub gap_y: i32,
}

impl Pipe {
    pub fn is_visible(&self) -> bool {
        (0..SCREEN_W).contains(&self.x)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub bird: Bird,
    pub pipe: Pipe,
    pub score: u32,
    /// Armed while the bird is inside the pipe's span without touching it.
    pub passing: bool,
    rng: Rng,
}

impl GameState {
    pub fn new(seed: u32, physics: &Physics) -> Self {
        let mut rng = Rng::new(seed);
        let pipe = Pipe {
            x: SCREEN_W,
            gap_y: rng.range(GAP_MIN, GAP_MAX),
        };
        Self {
            bird: Bird::spawn(physics),
            pipe,
            score: 0,
            passing: false,
            rng,
        }
    }

    /// Back to the start of a run, with a freshly seeded gap sequence.
    pub fn reset(&mut self, seed: u32, physics: &Physics) {
        *self = Self::new(seed, physics);
    }

    /// One physics tick.
    pub fn update(&mut self, flap: bool, physics: &Physics) {
        if flap {
            self.bird.vel_y = if self.bird.y > CEILING {
                -physics.jump_force
            } else {
                0.0
            };
        }

        self.bird.vel_y += physics.gravity * physics.tick_seconds();
        self.bird.y += self.bird.vel_y;

        self.pipe.x -= physics.speed;
        if self.pipe.x < -PIPE_W {
            self.pipe.x = SCREEN_W;
            self.pipe.gap_y = self.rng.range(GAP_MIN, GAP_MAX);
            debug!("pipe recycled, gap at {}", self.pipe.gap_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_gap(gap_y: i32) -> GameState {
        let mut state = GameState::new(1, &Physics::default());
        state.pipe.gap_y = gap_y;
        state
    }

    #[test]
    fn spawn_position() {
        let state = GameState::new(7, &Physics::default());
        assert_eq!(state.bird.x, BIRD_X);
        assert_eq!(state.bird.y, 72.0);
        assert_eq!(state.bird.old_y, 72);
        assert_eq!(state.bird.vel_y, -2.15);
        assert_eq!(state.pipe.x, SCREEN_W);
        assert!((GAP_MIN..GAP_MAX).contains(&state.pipe.gap_y));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn one_tick_without_input() {
        let mut state = state_with_gap(50);
        state.update(false, &Physics::default());

        assert!((state.bird.vel_y - -1.954).abs() < 1e-4);
        assert!((state.bird.y - 70.046).abs() < 1e-3);
        assert_eq!(state.pipe.x, SCREEN_W - 1);
        assert_eq!(state.pipe.gap_y, 50);
    }

    #[test]
    fn flap_sets_jump_velocity() {
        let mut state = state_with_gap(50);
        state.bird.vel_y = 3.0;
        state.update(true, &Physics::default());
        assert!((state.bird.vel_y - (-2.15 + 0.196)).abs() < 1e-4);
    }

    #[test]
    fn flap_near_the_top_only_stops_the_bird() {
        let mut state = state_with_gap(50);
        state.bird.y = 1.5;
        state.bird.vel_y = -1.0;
        state.update(true, &Physics::default());
        assert!((state.bird.vel_y - 0.196).abs() < 1e-4);
        assert!(state.bird.y > 1.5);
    }

    #[test]
    fn pipe_recycles_once_fully_off_screen() {
        let mut state = state_with_gap(50);
        state.pipe.x = -PIPE_W;
        state.update(false, &Physics::default());

        assert_eq!(state.pipe.x, SCREEN_W);
        assert!((GAP_MIN..GAP_MAX).contains(&state.pipe.gap_y));
    }

    #[test]
    fn pipe_at_left_edge_is_kept() {
        let mut state = state_with_gap(50);
        state.pipe.x = -PIPE_W + 1;
        state.update(false, &Physics::default());
        assert_eq!(state.pipe.x, -PIPE_W);
        assert_eq!(state.pipe.gap_y, 50);
    }

    #[test]
    fn reset_discards_the_previous_run() {
        let physics = Physics::default();
        let mut state = GameState::new(3, &physics);
        state.score = 12;
        state.passing = true;
        state.bird.y = 130.0;
        state.pipe.x = 4;

        state.reset(99, &physics);
        assert_eq!(state.score, 0);
        assert!(!state.passing);
        assert_eq!(state.bird.y, BIRD_START_Y);
        assert_eq!(state.pipe.x, SCREEN_W);
    }
}

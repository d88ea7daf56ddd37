//! Game loop tests: pacing, crashes and scoring with fake hardware.

mod common;

use common::{
    Canvas,
    FakeClock,
    NONE,
    PRIMARY,
    Script,
};
use embassy_futures::block_on;
use flappy_badge::{
    Crash,
    GameState,
    Physics,
    game,
    render::Hud,
    state::{
        BIRD_START_Y,
        GAME_H,
        SCREEN_W,
    },
};

fn play(state: &mut GameState, canvas: &mut Canvas, clock: &mut FakeClock, controls: &mut Script, physics: &Physics) -> Crash {
    let mut hud = Hud::default();
    block_on(game::play(state, &mut hud, canvas, clock, controls, physics)).unwrap()
}

#[test]
fn falling_bird_hits_the_ground() {
    let physics = Physics::default();
    let mut state = GameState::new(5, &physics);
    let mut canvas = Canvas::new();
    let mut clock = FakeClock::default();
    let mut controls = Script::idle(NONE);

    let crash = play(&mut state, &mut canvas, &mut clock, &mut controls, &physics);

    assert_eq!(crash, Crash::Ground);
    assert_eq!(state.score, 0);
    assert!(state.bird.y >= (GAME_H - 8) as f32);
    // the last draw recorded the row it used
    assert_eq!(state.bird.old_y, state.bird.row());
    // one tick per 20 ms, no frame ever skipped ahead
    let ticks = controls.reads.get() as u64;
    assert!((30..50).contains(&ticks), "ticks: {ticks}");
    assert_eq!(state.pipe.x, SCREEN_W - ticks as i32);
    assert!(clock.now() >= (ticks - 1) * 20);
}

#[test]
fn holding_flap_keeps_the_bird_at_the_top_until_the_pipe() {
    let physics = Physics::default();
    let mut state = GameState::new(5, &physics);
    let mut canvas = Canvas::new();
    let mut clock = FakeClock::default();
    let mut controls = Script::idle(PRIMARY);

    let crash = play(&mut state, &mut canvas, &mut clock, &mut controls, &physics);

    assert_eq!(crash, Crash::Pipe);
    assert!(state.bird.y >= 0.0 && state.bird.y < 3.0, "y: {}", state.bird.y);
    assert_eq!(canvas.out_of_bounds, 0);
}

#[test]
fn gliding_bird_scores_through_a_gap() {
    let physics = Physics {
        gravity: 0.0,
        jump_force: 0.0,
        ..Physics::default()
    };
    let mut state = GameState::new(77, &physics);
    state.pipe.gap_y = 60;
    let mut canvas = Canvas::new();
    let mut clock = FakeClock::default();
    let mut controls = Script::idle(NONE);

    let crash = play(&mut state, &mut canvas, &mut clock, &mut controls, &physics);

    assert_eq!(crash, Crash::Pipe);
    assert_eq!(state.bird.y, BIRD_START_Y);
    assert!(state.score >= 1);
}

#[test]
fn slow_frames_never_run_more_than_max_frameskip_ticks() {
    let physics = Physics::default();
    let mut state = GameState::new(5, &physics);
    let mut controls = Script::idle(NONE);
    let mut canvas = Canvas::new();
    canvas.tap = Some(controls.reads.clone());
    // every clock read costs a quarter second
    let mut clock = FakeClock::stepping(250);

    play(&mut state, &mut canvas, &mut clock, &mut controls, &physics);

    let max_step = canvas
        .taps
        .windows(2)
        .map(|w| w[1] - w[0])
        .max()
        .unwrap_or(0);
    assert_eq!(max_step, usize::from(physics.max_frameskip));
}

#[test]
fn frame_skip_bound_follows_configuration() {
    let physics = Physics {
        max_frameskip: 2,
        ..Physics::default()
    };
    let mut state = GameState::new(5, &physics);
    let mut controls = Script::idle(NONE);
    let mut canvas = Canvas::new();
    canvas.tap = Some(controls.reads.clone());
    let mut clock = FakeClock::stepping(1000);

    play(&mut state, &mut canvas, &mut clock, &mut controls, &physics);

    assert!(canvas.taps.windows(2).all(|w| w[1] - w[0] <= 2));
}

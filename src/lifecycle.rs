//! Session state machine: `Init -> Playing -> GameOver -> Init | Exit`.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};

use crate::{
    config::Config,
    game,
    ports::{
        Clock,
        Controls,
        Cue,
        NoiseSource,
        Notifier,
        ScoreReporter,
    },
    render::{
        self,
        Hud,
    },
    report::{
        self,
        Delivery,
    },
    state::GameState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Reset the run and draw the empty playfield.
    Init,
    Playing,
    /// Show the result, report it, wait for restart or exit.
    GameOver,
    Exit,
}

/// Player's answer on the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Choice {
    Restart,
    Exit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Summary {
    pub games_played: u32,
    pub best_score: u32,
}

/// The hardware a session runs on.
pub struct Board<D, C, K, N, R, S> {
    pub display: D,
    pub clock: C,
    pub controls: K,
    pub notifier: N,
    pub reporter: R,
    pub noise: S,
}

/// Waits until every button is released, then until one is pressed.
/// Primary restarts, secondary exits.
pub async fn await_choice<K, C>(controls: &mut K, clock: &mut C, poll_ms: u32) -> Choice
where
    K: Controls,
    C: Clock,
{
    while controls.read().any() {
        clock.delay_ms(poll_ms).await;
    }
    loop {
        let keys = controls.read();
        if keys.primary {
            return Choice::Restart;
        }
        if keys.secondary {
            return Choice::Exit;
        }
        clock.delay_ms(poll_ms).await;
    }
}

pub struct Lifecycle<D, C, K, N, R, S> {
    board: Board<D, C, K, N, R, S>,
    config: Config,
    state: GameState,
    hud: Hud,
    phase: Phase,
    summary: Summary,
    last_delivery: Option<Delivery>,
}

impl<D, C, K, N, R, S> Lifecycle<D, C, K, N, R, S>
where
    D: DrawTarget<Color = Rgb565>,
    C: Clock,
    K: Controls,
    N: Notifier,
    R: ScoreReporter,
    S: NoiseSource,
{
    pub fn new(board: Board<D, C, K, N, R, S>, config: Config) -> Self {
        let state = GameState::new(0, &config.physics);
        Self {
            board,
            config,
            state,
            hud: Hud::default(),
            phase: Phase::Init,
            summary: Summary::default(),
            last_delivery: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Outcome of the latest score submission, if one was attempted.
    pub fn last_delivery(&self) -> Option<Delivery> {
        self.last_delivery
    }

    pub fn board_mut(&mut self) -> &mut Board<D, C, K, N, R, S> {
        &mut self.board
    }

    pub fn into_board(self) -> Board<D, C, K, N, R, S> {
        self.board
    }

    /// Runs the current phase to completion and moves to the next one.
    pub async fn step(&mut self) -> Result<Phase, D::Error> {
        self.phase = match self.phase {
            Phase::Init => self.init()?,
            Phase::Playing => self.play().await?,
            Phase::GameOver => self.game_over().await?,
            Phase::Exit => Phase::Exit,
        };
        Ok(self.phase)
    }

    /// Steps until the player chooses to exit.
    pub async fn run(&mut self) -> Result<Summary, D::Error> {
        while self.step().await? != Phase::Exit {}
        info!(
            "session over: {} games, best {}",
            self.summary.games_played,
            self.summary.best_score
        );
        Ok(self.summary)
    }

    fn init(&mut self) -> Result<Phase, D::Error> {
        let seed = self.board.noise.noise();
        self.state.reset(seed, &self.config.physics);
        self.hud.reset();
        render::draw_playfield(&mut self.board.display)?;
        info!("new run, gap seed {}", seed);
        Ok(Phase::Playing)
    }

    async fn play(&mut self) -> Result<Phase, D::Error> {
        let crash = game::play(
            &mut self.state,
            &mut self.hud,
            &mut self.board.display,
            &mut self.board.clock,
            &mut self.board.controls,
            &self.config.physics,
        )
        .await?;

        let score = self.state.score;
        info!("crashed into {} with score {}", crash, score);
        self.summary.games_played += 1;
        self.summary.best_score = self.summary.best_score.max(score);

        self.board.notifier.cue(Cue::Crash).await;
        self.board.clock.delay_ms(self.config.game_over_delay_ms).await;
        Ok(Phase::GameOver)
    }

    async fn game_over(&mut self) -> Result<Phase, D::Error> {
        let score = self.state.score;
        render::draw_game_over(&mut self.board.display, score, self.summary.best_score)?;

        if let Some(server) = &self.config.score_server {
            let delivery = report::submit(
                &mut self.board.reporter,
                &mut self.board.clock,
                server,
                score,
                self.config.report_timeout_ms,
            )
            .await;
            self.last_delivery = Some(delivery);
        }

        let choice = await_choice(
            &mut self.board.controls,
            &mut self.board.clock,
            self.config.poll_interval_ms,
        )
        .await;
        info!("game over screen: {}", choice);

        Ok(match choice {
            Choice::Restart => Phase::Init,
            Choice::Exit => Phase::Exit,
        })
    }
}

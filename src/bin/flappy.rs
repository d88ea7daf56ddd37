//! Flappy Bird on the Disobey 2026 badge.
//!
//! - A or B flaps
//! - After a crash: A plays again, B quits and turns the screen off
//! - Crashes buzz the motor and flash the LEDs red
//!
//! Score reporting is enabled at build time:
//! `FLAPPY_USER=me FLAPPY_SERVER=scores.example cargo run --release --features badge`

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};
use esp_backtrace as _;
use esp_hal::{
    dma::DmaDescriptor,
    timer::timg::TimerGroup,
};
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use flappy_badge::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

fn config() -> Config {
    let server = ScoreServer::from_parts(option_env!("FLAPPY_USER"), option_env!("FLAPPY_SERVER"))
        .unwrap_or_else(|e| {
            error!("score reporting disabled: {}", e);
            None
        });
    if let Some(server) = &server {
        info!("reporting scores to {=str} as {=str}", server.host(), server.user());
    }
    Config::default().with_score_server(server)
}

#[embassy_executor::task]
async fn game_task(
    display: &'static mut Display<'static>,
    mut backlight: Backlight,
    buttons: Buttons,
    feedback: Feedback<'static>,
    mic: Microphone<'static>,
) {
    info!("Flappy task started");

    if display.clear(Rgb565::BLACK).is_err() {
        error!("display clear failed");
    }
    backlight.set(true);

    let board = Board {
        display: playfield(display),
        clock: EmbassyClock,
        controls: buttons,
        notifier: feedback,
        reporter: ConsoleReporter,
        noise: mic,
    };
    let mut lifecycle = Lifecycle::new(board, config());

    match lifecycle.run().await {
        Ok(summary) => info!("bye: {}", summary),
        Err(_) => error!("display write failed, stopping"),
    }

    let mut board = lifecycle.into_board();
    board.notifier.off().await;
    backlight.set(false);
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = flappy_badge::init();
    let resources = split_resources!(peripherals);

    // LED frames are built on the heap
    esp_alloc::heap_allocator!(size: 16 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display = mk_static!(Display<'static>, resources.display.into());
    let backlight: Backlight = resources.backlight.into();
    let buttons: Buttons = resources.buttons.into();
    let feedback = Feedback::new(resources.vibra, resources.leds);

    let descriptors = mk_static!([DmaDescriptor; 8], [DmaDescriptor::EMPTY; 8]);
    let mic = Microphone::new(resources.mic, microphone::DEFAULT_SAMPLE_RATE, descriptors);

    spawner.must_spawn(game_task(display, backlight, buttons, feedback, mic));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}

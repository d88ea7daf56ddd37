//! Score submission to the badge server.
//!
//! The request is a bare HTTP/1.0 GET built into a fixed-size buffer. The
//! transport is raced against a timeout and its outcome never affects the
//! game: it is logged and dropped.

use core::fmt::Write as _;

use embassy_futures::select::{
    Either,
    select,
};
use heapless::String;

use crate::{
    config::ScoreServer,
    ports::{
        Clock,
        ScoreReporter,
    },
};

pub const SAVE_POINT_PATH: &str = "/2016/save_point.php";

/// Fits the fixed request text plus the longest identity, host and score.
pub const REQUEST_CAP: usize = 192;

pub type Request = String<REQUEST_CAP>;

pub fn format_request(server: &ScoreServer, score: u32) -> Result<Request, core::fmt::Error> {
    let mut request = Request::new();
    write!(
        request,
        "GET {SAVE_POINT_PATH}?id={}&point={score} HTTP/1.0\r\nHost: {}\r\n\r\n",
        server.user(),
        server.host(),
    )?;
    Ok(request)
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delivery {
    Sent,
    Failed,
    TimedOut,
}

/// Sends `score` for the configured player, giving up after `timeout_ms`.
pub async fn submit<R, C>(
    reporter: &mut R,
    clock: &mut C,
    server: &ScoreServer,
    score: u32,
    timeout_ms: u32,
) -> Delivery
where
    R: ScoreReporter,
    C: Clock,
{
    let Ok(request) = format_request(server, score) else {
        warn!("score request does not fit in {} bytes", REQUEST_CAP);
        return Delivery::Failed;
    };

    match select(reporter.submit(&request), clock.delay_ms(timeout_ms)).await {
        Either::First(Ok(())) => {
            info!("score {} submitted", score);
            Delivery::Sent
        }
        Either::First(Err(_)) => {
            warn!("score submission failed");
            Delivery::Failed
        }
        Either::Second(()) => {
            warn!("score submission timed out after {} ms", timeout_ms);
            Delivery::TimedOut
        }
    }
}

/// Writes the request to the defmt console, where a host-side bridge can
/// forward it. For boards without a network stack of their own.
#[cfg(feature = "defmt")]
pub struct ConsoleReporter;

#[cfg(feature = "defmt")]
impl ScoreReporter for ConsoleReporter {
    type Error = core::convert::Infallible;

    async fn submit(&mut self, request: &str) -> Result<(), Self::Error> {
        defmt::println!("{=str}", request);
        Ok(())
    }
}

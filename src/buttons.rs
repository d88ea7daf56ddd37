//! A and B buttons as game controls.
//!
//! Both buttons flap. On the game-over screen A restarts and B quits.
//! The lifecycle waits for a release before accepting a choice, which is
//! enough debouncing for polling at 10 ms.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    ButtonResources,
    ports::ActiveLow,
};

pub type Buttons = ActiveLow<Input<'static>, Input<'static>>;

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            primary: Input::new(res.a, pull_up),
            secondary: Input::new(res.b, pull_up),
        }
    }
}

//! Game rules and state
//!
//! The level challenge (`Round`, driven by `Game`) and the letter-extraction
//! word finder (`ExtractRound`). Rounds are immutable snapshots; progress lives
//! in a `Session` value owned by the caller.

mod config;
mod controller;
mod error;
pub mod extract;
mod notify;
mod round;
mod session;
mod timer;
mod view;

pub use config::{GameConfig, LOSS_DELAY, MAX_ATTEMPTS, WIN_DELAY};
pub use controller::Game;
pub use error::GuessError;
pub use extract::ExtractRound;
pub use notify::{Notification, Notifier, Severity};
pub use round::{Attempt, Round, RoundState};
pub use session::Session;
pub use timer::AdvanceTimer;
pub use view::{Cell, RoundView};

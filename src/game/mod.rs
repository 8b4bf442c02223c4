//! Game module - Core game logic and state management
//!
//! `Game` owns the authoritative run state. Every command reports an
//! [`Outcome`] and leaves its narration in the message log; nothing here
//! prints.

mod ai;
mod message_log;
mod shared;
mod shop;
mod state;
mod view;

pub use ai::chase_step;
pub use message_log::{GameMessage, MessageCategory, MessageLog};
pub use shared::SharedGame;
pub use shop::ShopTransaction;
pub use state::Game;
pub(crate) use state::usable_config;
pub use view::GameView;

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action succeeded and enemies took their phase (unless the
    /// player died first)
    TurnTaken,
    /// The action succeeded without giving enemies a phase
    Free,
    /// Nothing changed
    Rejected,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Rejected)
    }

    pub fn took_turn(&self) -> bool {
        matches!(self, Outcome::TurnTaken)
    }
}

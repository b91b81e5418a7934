//! Domain layer: the 110 rules engine. Pure, synchronous, no I/O.

pub mod bidding;
pub mod buying;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game;
pub mod game_transition;
pub mod player_view;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_dealing;

// Re-exports for ergonomics
pub use bidding::{Call, CallOutcome};
pub use cards_types::{Card, CardSuit, Rank, Suit};
pub use player_view::{project_state, PlayerPublic, State};
pub use state::{Game, GameStatus, PlayedCard, Player, PlayerId, Round, RoundStatus, Trick};
pub use tricks::PlayOutcome;

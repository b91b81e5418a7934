use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

pub const PLAYER_COUNT: RangeInclusive<usize> = 2..=6;
/// Cards in every hand, the dummy included.
pub const HAND_SIZE: usize = 5;
pub const TRICKS_PER_ROUND: usize = 5;
pub const WINNING_SCORE: i32 = 110;
/// Players below this score may only pass.
pub const BUNKER_SCORE: i32 = -30;
pub const JINK_POINTS: i32 = 60;
pub const BEST_TRUMP_POINTS: i32 = 10;
pub const TRICK_POINTS: i32 = 5;
/// Player count at which three partnerships of two are formed.
pub const DOUBLES_PLAYERS: usize = 6;

pub type TeamId = u8;

pub fn validate_player_count(num_players: usize) -> Result<(), DomainError> {
    if PLAYER_COUNT.contains(&num_players) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Invalid number of players: {num_players}"),
        ))
    }
}

/// Fewest cards a player may keep when discarding.
pub fn min_keep(num_players: usize) -> Result<usize, DomainError> {
    match num_players {
        2..=4 => Ok(0),
        5 => Ok(1),
        6 => Ok(2),
        n => Err(DomainError::fatal(
            FatalKind::UnsupportedPlayerCount,
            format!("No keep rule for {n} players"),
        )),
    }
}

/// Team for the player seated at `index` (0-based). In doubles, seats
/// `i` and `i + 3` are partners; otherwise everyone plays alone.
pub fn team_for_seat(index: usize, num_players: usize) -> TeamId {
    let team = if num_players == DOUBLES_PLAYERS {
        index % 3
    } else {
        index
    };
    (team + 1) as TeamId
}

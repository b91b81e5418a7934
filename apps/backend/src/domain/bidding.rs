use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::domain::round_lifecycle::start_next_round;
use crate::domain::rules::{BUNKER_SCORE, DOUBLES_PLAYERS};
use crate::domain::state::{require_round_status, require_turn, Game, RoundStatus};
use crate::errors::domain::{DomainError, FatalKind, ValidationKind};

/// A bid. Variants are declared in ascending value so `Ord` follows the points.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Call {
    #[default]
    Pass,
    Ten,
    Fifteen,
    Twenty,
    TwentyFive,
    Jink,
}

impl Call {
    pub const fn value(self) -> u8 {
        match self {
            Call::Pass => 0,
            Call::Ten => 10,
            Call::Fifteen => 15,
            Call::Twenty => 20,
            Call::TwentyFive => 25,
            Call::Jink => 30,
        }
    }
}

impl TryFrom<u8> for Call {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Call::Pass),
            10 => Ok(Call::Ten),
            15 => Ok(Call::Fifteen),
            20 => Ok(Call::Twenty),
            25 => Ok(Call::TwentyFive),
            30 => Ok(Call::Jink),
            other => Err(DomainError::validation(
                ValidationKind::InvalidCall,
                format!("Invalid call: {other}"),
            )),
        }
    }
}

impl FromStr for Call {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u8>().map_err(|_| {
            DomainError::validation(ValidationKind::InvalidCall, format!("Invalid call: {s}"))
        })?;
        Call::try_from(value)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Call {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Call {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Call::try_from(value).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// What a successful call led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Bidding continues; see the round for whose turn it is.
    NextCaller,
    /// The dealer matched the top call; the taken player must respond.
    DealerSeeing,
    /// Bidding is over and the named player is the Goer.
    Goer(String),
    /// Nobody bid above Ten; the round was thrown in and redealt.
    Redealt,
}

fn validate_call(game: &Game, player_id: &str, call: Call) -> Result<(), DomainError> {
    let me = game.player(player_id)?;
    if me.score < BUNKER_SCORE && call != Call::Pass {
        return Err(DomainError::validation(
            ValidationKind::BunkerRestriction,
            format!("{player_id} is in the bunker and may only pass"),
        ));
    }

    if call == Call::Ten && game.players.len() != DOUBLES_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidCall,
            "Ten may only be called in doubles",
        ));
    }

    if call != Call::Pass {
        let top_other = game
            .players
            .iter()
            .filter(|p| p.id != player_id)
            .map(|p| p.call)
            .max()
            .unwrap_or(Call::Pass);
        // The dealer may take (equal) the top call; everyone else must beat it.
        let too_low = if game.is_dealer(player_id) {
            call < top_other
        } else {
            call <= top_other
        };
        if too_low {
            return Err(DomainError::validation(
                ValidationKind::InvalidCall,
                format!("Call {call} must beat {top_other}"),
            ));
        }
    }
    Ok(())
}

/// Record a call and advance the bidding state machine.
pub fn place_call<R: Rng + ?Sized>(
    game: &mut Game,
    player_id: &str,
    call: Call,
    rng: &mut R,
) -> Result<CallOutcome, DomainError> {
    require_round_status(game, RoundStatus::Calling)?;
    require_turn(game, player_id)?;
    validate_call(game, player_id, call)?;

    game.player_mut(player_id)?.call = call;

    let is_dealer = game.is_dealer(player_id);
    let dealer_id = game.current_round.dealer_id.clone();
    let dealer_seeing = game.current_round.dealer_seeing;

    match (call, is_dealer, dealer_seeing) {
        (Call::Jink, false, _) => {
            return_to_dealer(game, dealer_id);
            Ok(CallOutcome::NextCaller)
        }
        (Call::Jink, true, _) => {
            make_goer(game, player_id);
            Ok(CallOutcome::Goer(player_id.to_string()))
        }
        (_, true, _) => resolve_dealer_call(game, rng),
        (Call::Pass, false, true) => {
            make_goer(game, &dealer_id);
            Ok(CallOutcome::Goer(dealer_id))
        }
        (_, false, true) => {
            return_to_dealer(game, dealer_id);
            Ok(CallOutcome::NextCaller)
        }
        (_, false, false) => {
            let next = game.next_player_id(player_id)?;
            game.current_round.current_hand.current_player_id = next;
            Ok(CallOutcome::NextCaller)
        }
    }
}

fn return_to_dealer(game: &mut Game, dealer_id: String) {
    let round = &mut game.current_round;
    round.dealer_seeing = false;
    round.current_hand.current_player_id = dealer_id;
}

fn make_goer(game: &mut Game, goer_id: &str) {
    debug!(game_id = %game.id, goer_id, "bidding resolved");
    let round = &mut game.current_round;
    round.status = RoundStatus::Called;
    round.goer_id = Some(goer_id.to_string());
    round.dealer_seeing = false;
    round.current_hand.current_player_id = goer_id.to_string();
}

fn resolve_dealer_call<R: Rng + ?Sized>(
    game: &mut Game,
    rng: &mut R,
) -> Result<CallOutcome, DomainError> {
    let top_call = game.max_call();
    if top_call <= Call::Ten {
        debug!(game_id = %game.id, "no call above ten, redealing");
        start_next_round(game, false, rng)?;
        return Ok(CallOutcome::Redealt);
    }

    let top_callers: Vec<String> = game
        .players
        .iter()
        .filter(|p| p.call == top_call)
        .map(|p| p.id.clone())
        .collect();

    match top_callers.as_slice() {
        [goer] => {
            let goer = goer.clone();
            make_goer(game, &goer);
            Ok(CallOutcome::Goer(goer))
        }
        [a, b] => {
            let taken = if game.is_dealer(a) { b.clone() } else { a.clone() };
            let round = &mut game.current_round;
            round.dealer_seeing = true;
            round.current_hand.current_player_id = taken;
            Ok(CallOutcome::DealerSeeing)
        }
        callers => Err(DomainError::fatal(
            FatalKind::TooManyTopCallers,
            format!("{} players share the top call {top_call}", callers.len()),
        )),
    }
}

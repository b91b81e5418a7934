use crate::domain::state::{Game, GameStatus, PlayerId, RoundStatus};

/// The bits of a game that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub revision: u64,
    pub turn: PlayerId,
    pub status: GameStatus,
    pub round_number: u32,
    pub round_status: RoundStatus,
    pub tricks_completed: usize,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        Self {
            revision: game.revision,
            turn: game.current_player_id().to_string(),
            status: game.status,
            round_number: game.current_round.number,
            round_status: game.current_round.status,
            tricks_completed: game.current_round.completed_hands.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: the round moved to a new phase.
    RoundStatusChanged { from: RoundStatus, to: RoundStatus },

    /// Edge-triggered: a trick closed within the same round.
    TrickCompleted,

    /// Edge-triggered: a new deal began.
    RoundStarted { number: u32 },

    /// Edge-triggered: Game moved from Active -> Completed
    GameEnded,
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if before.status == GameStatus::Active && after.status == GameStatus::Completed {
        transitions.push(GameTransition::GameEnded);
        return transitions;
    }

    if after.round_number != before.round_number {
        transitions.push(GameTransition::RoundStarted {
            number: after.round_number,
        });
    } else {
        if after.tricks_completed > before.tricks_completed {
            transitions.push(GameTransition::TrickCompleted);
        }
        if after.round_status != before.round_status {
            transitions.push(GameTransition::RoundStatusChanged {
                from: before.round_status,
                to: after.round_status,
            });
        }
    }

    if before.turn != after.turn {
        transitions.push(GameTransition::TurnBecame {
            player_id: after.turn.clone(),
        });
    }

    transitions
}

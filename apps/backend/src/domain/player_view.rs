//! Player view of game state: what one viewer is allowed to see.
//!
//! `project_state` is pure and total. Any viewer id gets an answer; viewers
//! who are not seated get the spectator shape with no hand.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Call;
use crate::domain::rules::TeamId;
use crate::domain::state::{Game, GameStatus, Player, PlayerId, Round, RoundStatus};
use crate::domain::Card;

/// Everything about a player except their hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub seat: u8,
    pub call: Call,
    pub score: i32,
    pub rings: u32,
    pub team_id: TeamId,
    pub winner: bool,
}

impl From<&Player> for PlayerPublic {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id.clone(),
            seat: p.seat,
            call: p.call,
            score: p.score,
            rings: p.rings,
            team_id: p.team_id,
            winner: p.winner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
    pub status: GameStatus,
    pub revision: u64,
    pub iam_spectator: bool,
    pub is_my_go: bool,
    pub iam_goer: bool,
    pub iam_dealer: bool,
    pub iam_admin: bool,
    pub max_call: Call,
    pub me: Option<PlayerPublic>,
    /// The viewer's hand, plus the dummy while they are choosing as Goer.
    pub cards: Vec<Card>,
    pub players: Vec<PlayerPublic>,
    pub round: Round,
    pub prev_round: Option<Round>,
}

pub fn project_state(game: &Game, viewer_id: &str) -> State {
    let players: Vec<PlayerPublic> = game.players.iter().map(PlayerPublic::from).collect();
    let mut state = State {
        id: game.id.clone(),
        name: game.name.clone(),
        status: game.status,
        revision: game.revision,
        iam_spectator: true,
        is_my_go: false,
        iam_goer: false,
        iam_dealer: false,
        iam_admin: false,
        max_call: game.max_call(),
        me: None,
        cards: Vec::new(),
        players,
        round: game.current_round.clone(),
        // A finished game archives its final round without replacing it.
        prev_round: game
            .completed
            .iter()
            .rev()
            .find(|r| r.number != game.current_round.number)
            .cloned(),
    };

    let Some(me) = game.players.iter().find(|p| p.id == viewer_id) else {
        return state;
    };

    let iam_goer = game.is_goer(viewer_id);
    let mut cards = me.cards.clone();
    if iam_goer && game.current_round.status == RoundStatus::Called {
        if let Some(dummy) = &game.dummy {
            cards.extend(dummy.iter().copied());
        }
    }

    state.iam_spectator = false;
    state.is_my_go =
        game.status == GameStatus::Active && game.current_player_id() == viewer_id;
    state.iam_goer = iam_goer;
    state.iam_dealer = game.is_dealer(viewer_id);
    state.iam_admin = game.admin_id == viewer_id;
    state.me = Some(PlayerPublic::from(me));
    state.cards = cards;
    state
}

use std::collections::HashSet;

use rand::Rng;

use crate::domain::bidding::Call;
use crate::domain::rules::BUNKER_SCORE;
use crate::domain::state::{Game, GameStatus, RoundStatus};
use crate::domain::test_state_helpers::{ids, rng};
use crate::domain::tricks::is_following;
use crate::domain::{Card, Suit};
use crate::errors::domain::ValidationKind;

fn create(n: usize, seed: u64) -> Game {
    Game::create_with_rng(&ids(n), "friday", "1", &mut rng(seed)).unwrap()
}

#[test]
fn create_seats_everyone_and_deals() {
    let game = create(4, 1);

    assert!(game.id.starts_with("game-"));
    assert_eq!(game.name, "friday");
    assert_eq!(game.admin_id, "1");
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.revision, 0);
    assert!(game.completed.is_empty());

    let seated: HashSet<&str> = game.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(seated, ["1", "2", "3", "4"].into_iter().collect());
    let seats: Vec<u8> = game.players.iter().map(|p| p.seat).collect();
    assert_eq!(seats, vec![1, 2, 3, 4]);

    let round = &game.current_round;
    assert_eq!(round.number, 1);
    assert_eq!(round.status, RoundStatus::Calling);
    assert_eq!(round.dealer_id, game.players[0].id);
    assert_eq!(game.current_player_id(), game.players[1].id);

    for p in &game.players {
        assert_eq!(p.cards.len(), 5);
        assert_eq!(p.score, 0);
        assert_eq!(p.call, Call::Pass);
    }
    assert_eq!(game.dummy.as_ref().map(Vec::len), Some(5));
    assert_eq!(game.deck.len(), 53 - 25);
}

#[test]
fn create_is_reproducible_for_a_seed() {
    let a = create(5, 9);
    let b = create(5, 9);
    let order = |g: &Game| g.players.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(order(&a), order(&b));
    assert_eq!(a.players[0].cards, b.players[0].cards);
    assert_ne!(a.id, b.id);
}

#[test]
fn six_players_form_three_partnerships() {
    let game = create(6, 3);
    let teams: Vec<u8> = game.players.iter().map(|p| p.team_id).collect();
    assert_eq!(teams, vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn everyone_plays_alone_below_six() {
    let game = create(5, 3);
    let teams: HashSet<u8> = game.players.iter().map(|p| p.team_id).collect();
    assert_eq!(teams.len(), 5);
}

#[test]
fn create_rejects_bad_tables() {
    let kind = |ids: Vec<String>, admin: &str| {
        Game::create_with_rng(&ids, "g", admin, &mut rng(1))
            .unwrap_err()
            .validation_kind()
    };
    assert_eq!(kind(ids(1), "1"), Some(ValidationKind::InvalidPlayerCount));
    assert_eq!(kind(ids(7), "1"), Some(ValidationKind::InvalidPlayerCount));
    assert_eq!(
        kind(vec!["a".into(), "b".into(), "a".into()], "a"),
        Some(ValidationKind::DuplicatePlayer)
    );
    assert_eq!(kind(ids(3), "9"), Some(ValidationKind::AdminNotInPlayers));
}

#[test]
fn create_without_a_seed() {
    let game = Game::create(&ids(2), "quick", "2").unwrap();
    assert_eq!(game.players.len(), 2);
}

#[test]
fn failed_mutation_leaves_no_trace() {
    let mut game = create(3, 4);
    let before = game.clone();
    let not_my_go = game.players[2].id.clone();

    assert!(game.call_with_rng(&not_my_go, Call::Fifteen, &mut rng(1)).is_err());
    assert!(game.select_suit(&not_my_go, Suit::Clubs, Vec::new()).is_err());
    assert!(game.buy(&not_my_go, Vec::new()).is_err());
    assert!(game.play_with_rng(&not_my_go, Card::JOKER, &mut rng(1)).is_err());
    assert_eq!(game, before);
}

/// Take one legal action for whoever is to act.
///
/// The first caller able to bid fifteen does so and everyone else passes;
/// goers keep their hand, buyers stand pat, players lead their first legal card.
fn step<R: Rng>(game: &mut Game, r: &mut R) {
    let id = game.current_player_id().to_string();
    match game.current_round.status {
        RoundStatus::Calling => {
            let me = game.player(&id).unwrap();
            let call = if me.score >= BUNKER_SCORE && game.max_call() == Call::Pass {
                Call::Fifteen
            } else {
                Call::Pass
            };
            game.call_with_rng(&id, call, r).unwrap();
        }
        RoundStatus::Called => {
            let kept = game.player(&id).unwrap().cards.clone();
            game.select_suit(&id, Suit::Hearts, kept).unwrap();
        }
        RoundStatus::Buying => {
            let kept = game.player(&id).unwrap().cards.clone();
            game.buy(&id, kept).unwrap();
        }
        RoundStatus::Playing => {
            let hand = game.player(&id).unwrap().cards.clone();
            let trump = game.trump().unwrap();
            let card = hand
                .iter()
                .copied()
                .find(|c| is_following(*c, &hand, &game.current_round.current_hand, trump))
                .expect("some card is always legal");
            game.play_with_rng(&id, card, r).unwrap();
        }
    }
}

#[test]
fn games_run_to_completion() {
    for n in 2..=6 {
        let mut r = rng(n as u64);
        let mut game = Game::create_with_rng(&ids(n), "soak", "1", &mut r).unwrap();
        let mut steps = 0u64;
        while game.status == GameStatus::Active {
            step(&mut game, &mut r);
            steps += 1;
            assert!(steps < 20_000, "{n}-player game never finished");
        }

        assert_eq!(game.revision, steps);
        let winners: Vec<_> = game.players.iter().filter(|p| p.winner).collect();
        assert!(!winners.is_empty());
        assert!(winners.iter().any(|p| p.score >= 110));
        let team = winners[0].team_id;
        assert!(winners.iter().all(|p| p.team_id == team));
        assert!(!game.completed.is_empty());
    }
}

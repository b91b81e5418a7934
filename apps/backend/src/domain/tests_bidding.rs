use crate::domain::bidding::{Call, CallOutcome};
use crate::domain::state::{GameStatus, RoundStatus};
use crate::domain::test_state_helpers::{rng, GameBuilder};
use crate::errors::domain::ValidationKind;

fn kind_of<T: std::fmt::Debug>(r: Result<T, crate::errors::domain::DomainError>) -> ValidationKind {
    r.unwrap_err()
        .validation_kind()
        .expect("expected a validation error")
}

#[test]
fn first_call_passes_turn_to_next_seat() {
    let mut game = GameBuilder::new(3).dealer("1").current("2").build();
    let outcome = game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::NextCaller);
    assert_eq!(game.current_player_id(), "3");
    assert_eq!(game.player("2").unwrap().call, Call::Fifteen);
    assert_eq!(game.revision, 1);
}

#[test]
fn wrong_player_cannot_call() {
    let mut game = GameBuilder::new(3).dealer("1").current("2").build();
    let kind = kind_of(game.call_with_rng("3", Call::Fifteen, &mut rng(1)));
    assert_eq!(kind, ValidationKind::NotCurrentPlayer);
    assert_eq!(game.revision, 0);
}

#[test]
fn unknown_player_cannot_call() {
    let mut game = GameBuilder::new(2).build();
    let kind = kind_of(game.call_with_rng("9", Call::Fifteen, &mut rng(1)));
    assert_eq!(kind, ValidationKind::PlayerNotFound);
}

#[test]
fn calling_outside_calling_phase_is_rejected() {
    let mut game = GameBuilder::new(5)
        .status(RoundStatus::Called)
        .goer("2")
        .current("2")
        .build();
    let kind = kind_of(game.call_with_rng("2", Call::Fifteen, &mut rng(1)));
    assert_eq!(kind, ValidationKind::WrongRoundStatus);
}

#[test]
fn completed_game_rejects_calls() {
    let mut game = GameBuilder::new(2).build();
    game.status = GameStatus::Completed;
    let before = game.clone();
    let kind = kind_of(game.call_with_rng("2", Call::Fifteen, &mut rng(1)));
    assert_eq!(kind, ValidationKind::GameNotActive);
    assert_eq!(game, before);
}

#[test]
fn ten_is_only_legal_in_doubles() {
    let mut two = GameBuilder::new(2).build();
    assert_eq!(
        kind_of(two.call_with_rng("2", Call::Ten, &mut rng(1))),
        ValidationKind::InvalidCall
    );

    let mut six = GameBuilder::new(6).current("5").build();
    six.call_with_rng("5", Call::Ten, &mut rng(1)).unwrap();
    assert_eq!(six.current_player_id(), "6");
}

#[test]
fn non_dealer_must_beat_the_top_call() {
    let mut game = GameBuilder::new(4).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Twenty, &mut rng(1)).unwrap();

    assert_eq!(
        kind_of(game.call_with_rng("3", Call::Twenty, &mut rng(1))),
        ValidationKind::InvalidCall
    );
    assert_eq!(
        kind_of(game.call_with_rng("3", Call::Fifteen, &mut rng(1))),
        ValidationKind::InvalidCall
    );
    game.call_with_rng("3", Call::TwentyFive, &mut rng(1)).unwrap();
    assert_eq!(game.current_player_id(), "4");
}

#[test]
fn dealer_may_not_go_below_the_top_call() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Twenty, &mut rng(1)).unwrap();
    assert_eq!(game.current_player_id(), "1");
    assert_eq!(
        kind_of(game.call_with_rng("1", Call::Fifteen, &mut rng(1))),
        ValidationKind::InvalidCall
    );
    assert_eq!(game.revision, 1);
}

#[test]
fn bunkered_player_may_only_pass() {
    let mut game = GameBuilder::new(3).current("2").score("2", -35).build();
    assert_eq!(
        kind_of(game.call_with_rng("2", Call::Fifteen, &mut rng(1))),
        ValidationKind::BunkerRestriction
    );
    game.call_with_rng("2", Call::Pass, &mut rng(1)).unwrap();
}

#[test]
fn exactly_minus_thirty_is_not_the_bunker() {
    let mut game = GameBuilder::new(3).current("2").score("2", -30).build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
}

#[test]
fn dealer_taking_a_call_puts_the_dealer_seeing() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Fifteen, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::DealerSeeing);
    assert_eq!(game.current_round.status, RoundStatus::Calling);
    assert!(game.current_round.dealer_seeing);
    assert_eq!(game.current_player_id(), "2");
}

#[test]
fn taken_player_passing_hands_the_contract_to_the_dealer() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
    game.call_with_rng("1", Call::Fifteen, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("2", Call::Pass, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::Goer("1".to_string()));
    assert_eq!(game.current_round.status, RoundStatus::Called);
    assert_eq!(game.current_round.goer_id.as_deref(), Some("1"));
    assert_eq!(game.current_player_id(), "1");
    // Seeing ends with the contract settled.
    assert!(!game.current_round.dealer_seeing);
    assert_eq!(game.revision, 3);
}

#[test]
fn taken_player_raising_returns_to_the_dealer() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
    game.call_with_rng("1", Call::Fifteen, &mut rng(1)).unwrap();
    game.call_with_rng("2", Call::Twenty, &mut rng(1)).unwrap();

    assert!(!game.current_round.dealer_seeing);
    assert_eq!(game.current_player_id(), "1");

    let outcome = game.call_with_rng("1", Call::Pass, &mut rng(1)).unwrap();
    assert_eq!(outcome, CallOutcome::Goer("2".to_string()));
    assert_eq!(game.current_player_id(), "2");
}

#[test]
fn taken_player_must_beat_the_dealer_to_raise() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
    game.call_with_rng("1", Call::Fifteen, &mut rng(1)).unwrap();
    assert_eq!(
        kind_of(game.call_with_rng("2", Call::Fifteen, &mut rng(1))),
        ValidationKind::InvalidCall
    );
}

#[test]
fn dealer_raising_over_the_top_call_becomes_goer() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Fifteen, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Twenty, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::Goer("1".to_string()));
    assert_eq!(game.current_round.status, RoundStatus::Called);
}

#[test]
fn everyone_passing_throws_the_round_in() {
    let mut game = GameBuilder::new(2).dealer("1").current("2").build();
    game.call_with_rng("2", Call::Pass, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Pass, &mut rng(7)).unwrap();

    assert_eq!(outcome, CallOutcome::Redealt);
    let round = &game.current_round;
    assert_eq!(round.number, 2);
    assert_eq!(round.status, RoundStatus::Calling);
    assert_eq!(round.goer_id, None);
    assert_eq!(round.dealer_id, "2");
    assert_eq!(game.current_player_id(), "1");
    assert!(game.completed.is_empty(), "thrown-in rounds are not archived");
    for p in &game.players {
        assert_eq!(p.cards.len(), 5);
        assert_eq!(p.call, Call::Pass);
    }
    assert_eq!(game.dummy.as_ref().map(Vec::len), Some(5));
    assert_eq!(game.deck.len(), 53 - 15);
    assert_eq!(game.revision, 2);
}

#[test]
fn ten_in_doubles_is_still_thrown_in() {
    let mut game = GameBuilder::new(6).dealer("1").current("6").build();
    game.call_with_rng("6", Call::Ten, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Pass, &mut rng(1)).unwrap();
    assert_eq!(outcome, CallOutcome::Redealt);
}

#[test]
fn jink_by_a_non_dealer_jumps_to_the_dealer() {
    let mut game = GameBuilder::new(6).dealer("1").current("5").build();
    game.call_with_rng("5", Call::Jink, &mut rng(1)).unwrap();
    assert_eq!(game.current_player_id(), "1");
    assert_eq!(game.current_round.status, RoundStatus::Calling);
}

#[test]
fn dealer_taking_a_jink_goes_immediately() {
    let mut game = GameBuilder::new(6).dealer("1").current("5").build();
    game.call_with_rng("5", Call::Jink, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Jink, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::Goer("1".to_string()));
    assert_eq!(game.current_round.goer_id.as_deref(), Some("1"));
    assert_eq!(game.current_player_id(), "1");
}

#[test]
fn dealer_letting_a_jink_go() {
    let mut game = GameBuilder::new(6).dealer("1").current("5").build();
    game.call_with_rng("5", Call::Jink, &mut rng(1)).unwrap();
    let outcome = game.call_with_rng("1", Call::Pass, &mut rng(1)).unwrap();

    assert_eq!(outcome, CallOutcome::Goer("5".to_string()));
    assert_eq!(game.current_player_id(), "5");
}

#[test]
fn three_top_callers_is_fatal() {
    let mut game = GameBuilder::new(4)
        .dealer("1")
        .current("1")
        .call("2", Call::Twenty)
        .call("3", Call::Twenty)
        .build();
    let before = game.clone();
    let err = game.call_with_rng("1", Call::Twenty, &mut rng(1)).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(game, before);
}

#[test]
fn call_strings_parse() {
    assert_eq!("0".parse::<Call>().unwrap(), Call::Pass);
    assert_eq!("25".parse::<Call>().unwrap(), Call::TwentyFive);
    assert_eq!("30".parse::<Call>().unwrap(), Call::Jink);
    assert!("35".parse::<Call>().is_err());
    assert!("jink".parse::<Call>().is_err());
    assert_eq!(serde_json::to_string(&Call::Twenty).unwrap(), "20");
}

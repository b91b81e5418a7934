//! Property tests for dealing, buying and trick resolution.

use proptest::prelude::*;

use crate::domain::cards_logic::{is_trump, trump_rank};
use crate::domain::dealing::{buy, deal, new_deck, shuffle};
use crate::domain::state::{PlayedCard, Trick};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::rng;
use crate::domain::tricks::winning_play;
use crate::domain::{Card, Suit};

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every card ends up in exactly one place after a deal.
    #[test]
    fn prop_deal_conserves_the_deck(
        num_players in 2usize..=6,
        seed in any::<u64>(),
    ) {
        let dealt = deal(shuffle(new_deck(), &mut rng(seed)), num_players).unwrap();

        let mut all: Vec<Card> = dealt.hands.concat();
        all.extend(dealt.dummy.iter().copied());
        all.extend(dealt.deck.iter().copied());
        all.sort();
        prop_assert_eq!(all, new_deck());
    }

    /// Buying never loses or duplicates a card.
    #[test]
    fn prop_buy_conserves_cards(
        seed in any::<u64>(),
        keep in 0usize..=5,
    ) {
        let deck = shuffle(new_deck(), &mut rng(seed));
        let kept: Vec<Card> = deck[..keep].to_vec();
        let rest = deck[5..].to_vec();

        let (remaining, hand) = buy(rest.clone(), kept.clone()).unwrap();
        prop_assert_eq!(hand.len(), 5);
        prop_assert_eq!(&hand[..keep], &kept[..]);
        prop_assert_eq!(remaining.len() + (5 - keep), rest.len());

        let mut before: Vec<Card> = kept.iter().chain(rest.iter()).copied().collect();
        let mut after: Vec<Card> = hand.iter().chain(remaining.iter()).copied().collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// The winner played into the trick, and if trumps fell it holds the best of them.
    #[test]
    fn prop_trick_winner_is_sound(
        seed in any::<u64>(),
        num_players in 2usize..=6,
        trump in any_suit(),
    ) {
        let deck = shuffle(new_deck(), &mut rng(seed));
        let mut trick = Trick::led_by("p0");
        for (i, card) in deck.iter().take(num_players).enumerate() {
            if trick.lead_out.is_none() {
                trick.lead_out = Some(*card);
            }
            trick.played_cards.push(PlayedCard { player_id: format!("p{i}"), card: *card });
        }

        let won = winning_play(&trick, trump).unwrap();
        prop_assert!(trick.played_cards.contains(&won));

        let best_trump = trick
            .played_cards
            .iter()
            .filter(|p| is_trump(p.card, trump))
            .map(|p| trump_rank(p.card))
            .max();
        if let Some(best) = best_trump {
            prop_assert_eq!(trump_rank(won.card), best);
        } else {
            prop_assert_eq!(won.card.suit(), trick.lead_out.unwrap().suit());
        }
    }
}

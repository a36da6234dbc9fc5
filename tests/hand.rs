//! Hand scoring tests.

use bjtable::{Card, DealerHand, Hand, Suit, hand::score};
use proptest::prelude::*;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn arb_card() -> impl Strategy<Value = Card> {
    (prop::sample::select(Suit::ALL.to_vec()), 1u8..=13).prop_map(|(suit, rank)| card(suit, rank))
}

#[test]
fn pair_of_aces_scores_twelve() {
    assert_eq!(score(&[card(Suit::Spades, 1), card(Suit::Hearts, 1)]), 12);
}

#[test]
fn ace_softens_to_avoid_bust() {
    let cards = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(score(&cards), 20);

    let cards = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 1),
    ];
    assert_eq!(score(&cards), 21);
}

#[test]
fn bust_reports_fully_softened_total() {
    let cards = [
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Spades, 5),
    ];
    assert_eq!(score(&cards), 27);
}

#[test]
fn face_cards_count_ten() {
    let cards = [card(Suit::Spades, 11), card(Suit::Hearts, 12)];
    assert_eq!(score(&cards), 20);
    assert_eq!(score(&[card(Suit::Clubs, 13)]), 10);
    assert_eq!(score(&[]), 0);
}

#[test]
fn hand_natural_soft_and_bust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_natural());
    assert!(hand.is_soft());
    assert_eq!(
        hand.initial_pair(),
        Some([card(Suit::Hearts, 1), card(Suit::Spades, 13)])
    );

    hand.add_card(card(Suit::Clubs, 5));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_natural());
    assert!(!hand.is_soft());

    hand.add_card(card(Suit::Clubs, 9));
    assert!(hand.is_bust());
    assert_eq!(hand.len(), 4);
}

#[test]
fn dealer_hides_the_first_card() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 6));
    dealer.add_card(card(Suit::Clubs, 1));

    assert_eq!(dealer.hole_card(), Some(&card(Suit::Hearts, 6)));
    assert_eq!(dealer.up_card(), Some(&card(Suit::Clubs, 1)));
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

proptest! {
    #[test]
    fn score_ignores_card_order(
        (cards, shuffled) in prop::collection::vec(arb_card(), 0..8)
            .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
    ) {
        prop_assert_eq!(score(&cards), score(&shuffled));
    }

    #[test]
    fn score_is_best_softened_total(cards in prop::collection::vec(arb_card(), 0..8)) {
        let hard: u32 = cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { u32::from(c.points()) })
            .sum();
        let has_ace = cards.iter().any(Card::is_ace);
        let best = if has_ace && hard + 10 <= 21 { hard + 10 } else { hard };

        prop_assert_eq!(u32::from(score(&cards)), best);
    }
}

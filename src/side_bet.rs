//! Perfect Pairs and 21+3 side bet evaluation.
//!
//! Both bets are settled from the cards visible straight after the deal:
//! the slot's first two cards, plus the dealer's up-card for 21+3.

use crate::card::Card;
use crate::options::{PerfectPairsTable, TwentyOnePlusThreeTable};

/// Perfect Pairs hand categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerfectPairsHand {
    /// Same rank, same suit.
    PerfectPair,
    /// Same rank, same color, different suit.
    ColoredPair,
    /// Same rank, different color.
    MixedPair,
    /// Not a pair.
    NoPair,
}

impl PerfectPairsHand {
    /// Classifies a two-card hand.
    #[must_use]
    pub fn classify(cards: [Card; 2]) -> Self {
        let [first, second] = cards;
        if first.rank != second.rank {
            Self::NoPair
        } else if first.suit == second.suit {
            Self::PerfectPair
        } else if first.suit.is_red() == second.suit.is_red() {
            Self::ColoredPair
        } else {
            Self::MixedPair
        }
    }

    /// Profit multiplier for this category under the given pay table.
    #[must_use]
    pub const fn multiplier(self, table: &PerfectPairsTable) -> usize {
        match self {
            Self::PerfectPair => table.suited,
            Self::ColoredPair => table.colored,
            Self::MixedPair => table.mixed,
            Self::NoPair => 0,
        }
    }
}

/// 21+3 hand categories, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThreeCardHand {
    /// Three of a kind in one suit.
    SuitedTrips,
    /// Straight in one suit.
    StraightFlush,
    /// Three of a kind.
    Trips,
    /// Three consecutive ranks.
    Straight,
    /// Three cards of one suit.
    Flush,
    /// Nothing.
    Nothing,
}

/// Three distinct ranks, ace high, spanning exactly two steps.
///
/// A-2-3 is not a straight here: the ace only plays high.
fn is_straight(cards: &[Card; 3]) -> bool {
    let mut ranks = cards.map(|card| card.rank_ace_high());
    ranks.sort_unstable();
    ranks[0] != ranks[1] && ranks[1] != ranks[2] && ranks[2] - ranks[0] == 2
}

impl ThreeCardHand {
    /// Classifies the slot's two cards together with the dealer up-card.
    #[must_use]
    pub fn classify(cards: [Card; 3]) -> Self {
        let is_flush = cards[0].suit == cards[1].suit && cards[1].suit == cards[2].suit;
        let is_trips = cards[0].rank == cards[1].rank && cards[1].rank == cards[2].rank;
        let is_straight = is_straight(&cards);

        if is_trips && is_flush {
            Self::SuitedTrips
        } else if is_straight && is_flush {
            Self::StraightFlush
        } else if is_trips {
            Self::Trips
        } else if is_straight {
            Self::Straight
        } else if is_flush {
            Self::Flush
        } else {
            Self::Nothing
        }
    }

    /// Profit multiplier for this category under the given pay table.
    #[must_use]
    pub const fn multiplier(self, table: &TwentyOnePlusThreeTable) -> usize {
        match self {
            Self::SuitedTrips => table.suited_trips,
            Self::StraightFlush => table.straight_flush,
            Self::Trips => table.trips,
            Self::Straight => table.straight,
            Self::Flush => table.flush,
            Self::Nothing => 0,
        }
    }
}

/// Outcome of a single side wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideBetPayout<H> {
    /// The hand category that was scored.
    pub hand: H,
    /// Amount wagered.
    pub wager: usize,
    /// Profit multiplier that applied (0 on a loss).
    pub multiplier: usize,
    /// Amount credited: stake plus profit on a win, 0 on a loss.
    pub payout: usize,
}

impl<H> SideBetPayout<H> {
    fn new(hand: H, wager: usize, multiplier: usize) -> Self {
        let payout = if multiplier == 0 {
            0
        } else {
            wager.saturating_mul(multiplier + 1)
        };
        Self {
            hand,
            wager,
            multiplier,
            payout,
        }
    }

    /// Returns whether the side bet paid.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Side bet results for one slot in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideBetResult {
    /// Perfect Pairs result, if wagered.
    pub perfect_pairs: Option<SideBetPayout<PerfectPairsHand>>,
    /// 21+3 result, if wagered.
    pub twenty_one_plus_three: Option<SideBetPayout<ThreeCardHand>>,
}

impl SideBetResult {
    /// Total amount credited across both side bets.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.perfect_pairs.map_or(0, |bet| bet.payout)
            + self.twenty_one_plus_three.map_or(0, |bet| bet.payout)
    }

    /// Total amount wagered across both side bets.
    #[must_use]
    pub fn total_wagered(&self) -> usize {
        self.perfect_pairs.map_or(0, |bet| bet.wager)
            + self.twenty_one_plus_three.map_or(0, |bet| bet.wager)
    }
}

/// Scores a Perfect Pairs wager.
#[must_use]
pub fn perfect_pairs(
    cards: [Card; 2],
    wager: usize,
    table: &PerfectPairsTable,
) -> SideBetPayout<PerfectPairsHand> {
    let hand = PerfectPairsHand::classify(cards);
    SideBetPayout::new(hand, wager, hand.multiplier(table))
}

/// Scores a 21+3 wager over the slot's two cards and the dealer up-card.
#[must_use]
pub fn twenty_one_plus_three(
    cards: [Card; 3],
    wager: usize,
    table: &TwentyOnePlusThreeTable,
) -> SideBetPayout<ThreeCardHand> {
    let hand = ThreeCardHand::classify(cards);
    SideBetPayout::new(hand, wager, hand.multiplier(table))
}

/// Resolves both side wagers for one slot. Zero wagers are skipped.
#[must_use]
pub fn resolve(
    pair: [Card; 2],
    dealer_up: Card,
    perfect_pairs_wager: usize,
    twenty_one_plus_three_wager: usize,
    perfect_pairs_table: &PerfectPairsTable,
    three_card_table: &TwentyOnePlusThreeTable,
) -> SideBetResult {
    SideBetResult {
        perfect_pairs: (perfect_pairs_wager > 0)
            .then(|| perfect_pairs(pair, perfect_pairs_wager, perfect_pairs_table)),
        twenty_one_plus_three: (twenty_one_plus_three_wager > 0).then(|| {
            twenty_one_plus_three(
                [pair[0], pair[1], dealer_up],
                twenty_one_plus_three_wager,
                three_card_table,
            )
        }),
    }
}

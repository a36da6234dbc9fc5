//! Betting slots: one independently wagered and played hand each.

use crate::card::Card;
use crate::hand::Hand;
use crate::result::HandOutcome;
use crate::side_bet::SideBetResult;

/// The three wagers a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetType {
    /// The main blackjack wager.
    Main,
    /// Perfect Pairs side bet.
    PerfectPairs,
    /// 21+3 side bet.
    TwentyOnePlusThree,
}

/// A slot's wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WagerSet {
    /// Main wager (doubled in place by a double down).
    pub main: usize,
    /// Perfect Pairs wager.
    pub perfect_pairs: usize,
    /// 21+3 wager.
    pub twenty_one_plus_three: usize,
}

impl WagerSet {
    /// Returns the amount on the given bet.
    #[must_use]
    pub const fn get(&self, bet: BetType) -> usize {
        match bet {
            BetType::Main => self.main,
            BetType::PerfectPairs => self.perfect_pairs,
            BetType::TwentyOnePlusThree => self.twenty_one_plus_three,
        }
    }

    pub(crate) const fn get_mut(&mut self, bet: BetType) -> &mut usize {
        match bet {
            BetType::Main => &mut self.main,
            BetType::PerfectPairs => &mut self.perfect_pairs,
            BetType::TwentyOnePlusThree => &mut self.twenty_one_plus_three,
        }
    }

    /// Sum of all three wagers.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.main + self.perfect_pairs + self.twenty_one_plus_three
    }

    /// Returns whether nothing is wagered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every wager multiplied by `factor`, or `None` on overflow.
    #[must_use]
    pub fn scaled(&self, factor: usize) -> Option<Self> {
        Some(Self {
            main: self.main.checked_mul(factor)?,
            perfect_pairs: self.perfect_pairs.checked_mul(factor)?,
            twenty_one_plus_three: self.twenty_one_plus_three.checked_mul(factor)?,
        })
    }
}

/// Slot status within the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotStatus {
    /// Accepting wagers.
    #[default]
    Betting,
    /// Dealt in and awaiting player decisions.
    Playing,
    /// Initial two cards total 21.
    Blackjack,
    /// Over 21.
    Bust,
    /// Player stood (or doubled without busting).
    Stand,
}

impl SlotStatus {
    /// Returns whether the slot is done playing but not yet settled.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Blackjack | Self::Bust | Self::Stand)
    }
}

/// One participant's wagers, cards, and status.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    id: usize,
    hand: Hand,
    wagers: WagerSet,
    status: SlotStatus,
    active: bool,
    side_bets: Option<SideBetResult>,
    outcome: Option<HandOutcome>,
}

impl Slot {
    /// Creates an empty slot in the betting state.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Slot identity; slots play in ascending id order.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The slot's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Current wagers.
    #[must_use]
    pub const fn wagers(&self) -> &WagerSet {
        &self.wagers
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SlotStatus {
        self.status
    }

    /// Whether the slot is dealt into the current round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Side bet results from the current or most recent round.
    #[must_use]
    pub const fn side_bets(&self) -> Option<&SideBetResult> {
        self.side_bets.as_ref()
    }

    /// Main wager outcome from the most recent settled round.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Hand score.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.value()
    }

    pub(crate) const fn wagers_mut(&mut self) -> &mut WagerSet {
        &mut self.wagers
    }

    pub(crate) const fn set_status(&mut self, status: SlotStatus) {
        self.status = status;
    }

    pub(crate) const fn set_side_bets(&mut self, result: SideBetResult) {
        self.side_bets = Some(result);
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Dealt in: fresh hand, playing status.
    pub(crate) fn join_round(&mut self) {
        self.hand.clear();
        self.status = SlotStatus::Playing;
        self.active = true;
        self.side_bets = None;
        self.outcome = None;
    }

    /// Sits the slot out of a round: last round's cards are cleared.
    pub(crate) fn sit_out(&mut self) {
        self.hand.clear();
        self.status = SlotStatus::Betting;
        self.active = false;
        self.side_bets = None;
        self.outcome = None;
    }

    /// Records the settlement and returns the slot to betting. The hand stays
    /// on the table until the next deal.
    pub(crate) fn settle(&mut self, outcome: HandOutcome) {
        self.outcome = Some(outcome);
        self.wagers = WagerSet::default();
        self.status = SlotStatus::Betting;
        self.active = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.id);
    }
}

//! Observable table state for a presentation layer.
//!
//! A [`Snapshot`] is plain owned data. The table queues one [`TableEvent`]
//! per atomic transition so a front-end can replay the round at its own
//! pace.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Seat, TableState};
use crate::hand::{DealerHand, score};
use crate::result::{HandOutcome, RoundResult};
use crate::side_bet::SideBetResult;
use crate::slot::{Slot, SlotStatus, WagerSet};

/// What a player can see of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotView {
    /// Slot id.
    pub id: usize,
    /// Cards in the slot's hand.
    pub cards: Vec<Card>,
    /// Hand score (0 for an empty hand).
    pub score: u8,
    /// Current wagers.
    pub wagers: WagerSet,
    /// Current status.
    pub status: SlotStatus,
    /// Whether the slot is dealt into the current round.
    pub active: bool,
    /// Side bet results of the current or most recent round.
    pub side_bets: Option<SideBetResult>,
    /// Main wager outcome of the most recent settled round.
    pub outcome: Option<HandOutcome>,
}

impl From<&Slot> for SlotView {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id(),
            cards: slot.hand().cards().to_vec(),
            score: slot.score(),
            wagers: *slot.wagers(),
            status: slot.status(),
            active: slot.is_active(),
            side_bets: slot.side_bets().copied(),
            outcome: slot.outcome(),
        }
    }
}

/// What a player can see of the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerView {
    /// Dealer cards in deal order; `None` marks the face-down hole card.
    pub cards: Vec<Option<Card>>,
    /// Score of the visible cards.
    pub score: u8,
    /// Whether the hole card is face up.
    pub revealed: bool,
}

impl From<&DealerHand> for DealerView {
    fn from(dealer: &DealerHand) -> Self {
        let revealed = dealer.is_hole_revealed();
        let cards: Vec<Option<Card>> = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (revealed || index > 0).then_some(*card))
            .collect();
        let visible: Vec<Card> = cards.iter().flatten().copied().collect();

        Self {
            cards,
            score: score(&visible),
            revealed,
        }
    }
}

/// Full observable table state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Table state.
    pub state: TableState,
    /// Player balance.
    pub balance: usize,
    /// Every slot, in id order.
    pub slots: Vec<SlotView>,
    /// The dealer's hand as currently visible.
    pub dealer: DealerView,
    /// Slot holding play priority, if any.
    pub turn: Option<usize>,
    /// Result of the most recent settled round.
    pub last_result: Option<RoundResult>,
}

/// The transition a [`TableEvent`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A wager was added to a slot.
    WagerPlaced {
        /// Slot id.
        slot: usize,
        /// Amount added.
        amount: usize,
    },
    /// Pending wagers were refunded.
    WagersCleared {
        /// Amount refunded.
        refunded: usize,
    },
    /// A round began with a fresh shoe.
    RoundStarted,
    /// A card was dealt.
    CardDealt {
        /// Who received it.
        seat: Seat,
    },
    /// A slot's side bets were settled.
    SideBetsResolved {
        /// Slot id.
        slot: usize,
        /// Amount credited.
        payout: usize,
    },
    /// Play priority moved; `None` hands play to the dealer.
    TurnChanged {
        /// Slot now holding priority.
        slot: Option<usize>,
    },
    /// The dealer's hole card was turned over.
    DealerRevealed,
    /// The dealer finished drawing.
    DealerStood {
        /// Dealer's final score.
        score: u8,
    },
    /// Main wagers were settled and the table is back to betting.
    RoundSettled,
    /// Balance and slots were reset.
    SessionReset,
}

/// A transition and the table state right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEvent {
    /// What happened.
    pub kind: EventKind,
    /// State after it happened.
    pub snapshot: Snapshot,
}

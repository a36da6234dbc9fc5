//! Round engine and session state.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::DealerHand;
use crate::options::{MAX_SLOTS, TableOptions};
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::slot::{Slot, WagerSet};
use crate::snapshot::{DealerView, EventKind, SlotView, Snapshot, TableEvent};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Seat, TableState};

/// A blackjack table: one balance, a fixed row of betting slots, and a dealer.
///
/// The table owns every piece of round state (shoe, hands, wagers, balance)
/// and only changes it through its own methods. Each method validates fully
/// before mutating, so a rejected call leaves the table untouched.
#[derive(Debug)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Current table state.
    state: TableState,
    /// Player balance shared by every slot.
    balance: usize,
    /// Betting slots, indexed by id.
    slots: Vec<Slot>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Shoe for the current round.
    shoe: Shoe,
    /// Draw order to use for the next round instead of a shuffle.
    preset: Option<Vec<Card>>,
    /// Slot holding play priority.
    current_turn: Option<usize>,
    /// Wagers as they stood when the last round was dealt.
    previous_wagers: Vec<WagerSet>,
    /// Result of the last settled round.
    last_result: Option<RoundResult>,
    /// Transitions not yet taken by the front-end, oldest first.
    events: VecDeque<TableEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.balance(), 100);
    /// assert_eq!(table.slots().len(), 3);
    /// ```
    #[must_use]
    pub fn new(mut options: TableOptions, seed: u64) -> Self {
        options.slots = options.slots.clamp(1, MAX_SLOTS);
        let slots = (0..options.slots).map(Slot::new).collect();

        Self {
            balance: options.starting_balance,
            options,
            state: TableState::Betting,
            slots,
            dealer_hand: DealerHand::new(),
            shoe: Shoe::default(),
            preset: None,
            current_turn: None,
            previous_wagers: Vec::new(),
            last_result: None,
            events: VecDeque::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resets the balance to the starting value and clears every slot.
    ///
    /// Any round in progress is abandoned along with its wagers.
    pub fn reset_session(&mut self) {
        self.balance = self.options.starting_balance;
        for slot in &mut self.slots {
            slot.reset();
        }
        self.dealer_hand.clear();
        self.shoe = Shoe::default();
        self.state = TableState::Betting;
        self.current_turn = None;
        self.previous_wagers.clear();
        self.last_result = None;
        self.events.clear();

        tracing::info!(balance = self.balance, "session reset");
        self.emit(EventKind::SessionReset);
    }

    /// Fixes the draw order of the next round's shoe.
    ///
    /// The preset is used by exactly one round; later rounds shuffle again.
    pub fn preset_shoe(&mut self, draws: &[Card]) {
        self.preset = Some(draws.to_vec());
    }

    /// Returns the full observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            balance: self.balance,
            slots: self.slots.iter().map(SlotView::from).collect(),
            dealer: DealerView::from(&self.dealer_hand),
            turn: self.current_turn,
            last_result: self.last_result.clone(),
        }
    }

    /// Drains the queued transitions, oldest first.
    ///
    /// At most `event_capacity` events are held; when the queue is full the
    /// oldest is dropped to make room.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, kind: EventKind) {
        let capacity = self.options.event_capacity;
        if capacity == 0 {
            return;
        }

        while self.events.len() >= capacity {
            self.events.pop_front();
        }
        let snapshot = self.snapshot();
        self.events.push_back(TableEvent { kind, snapshot });
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the player balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the slot holding play priority.
    #[must_use]
    pub const fn current_slot(&self) -> Option<usize> {
        self.current_turn
    }

    /// Returns the slot with the given id.
    #[must_use]
    pub fn slot(&self, id: usize) -> Option<&Slot> {
        self.slots.get(id)
    }

    /// Returns every slot, in id order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the wagers recorded when the last round was dealt.
    #[must_use]
    pub fn previous_wagers(&self) -> &[WagerSet] {
        &self.previous_wagers
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Sum of every wager currently on the table.
    fn pending_wagers(&self) -> usize {
        self.slots.iter().map(|slot| slot.wagers().total()).sum()
    }
}

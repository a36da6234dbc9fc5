extern crate alloc;

use alloc::vec::Vec;

use crate::error::{DealError, RebetError, WagerError};
use crate::shoe::Shoe;
use crate::side_bet;
use crate::slot::{BetType, SlotStatus, WagerSet};
use crate::snapshot::EventKind;

use super::{Seat, Table, TableState};

impl Table {
    fn deal_one_card_to_slots(&mut self, slots: &[usize]) {
        for &id in slots {
            if let Some(card) = self.shoe.draw() {
                self.slots[id].add_card(card);
                tracing::debug!(slot = id, %card, "card dealt");
                self.emit(EventKind::CardDealt {
                    seat: Seat::Slot(id),
                });
            }
        }
    }

    fn deal_one_card_to_dealer(&mut self) {
        if let Some(card) = self.shoe.draw() {
            self.dealer_hand.add_card(card);
            self.emit(EventKind::CardDealt { seat: Seat::Dealer });
        }
    }

    /// Places a wager on the given slot, debiting the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, a round is in progress, the
    /// slot cannot be found, or the amount exceeds the balance.
    pub fn place_wager(
        &mut self,
        slot: usize,
        bet: BetType,
        amount: usize,
    ) -> Result<(), WagerError> {
        if amount == 0 {
            return Err(WagerError::ZeroAmount);
        }

        if self.state.round_active() {
            return Err(WagerError::RoundInProgress);
        }

        if slot >= self.slots.len() {
            return Err(WagerError::SlotNotFound);
        }

        if amount > self.balance {
            return Err(WagerError::InsufficientBalance);
        }

        self.balance -= amount;
        *self.slots[slot].wagers_mut().get_mut(bet) += amount;

        tracing::debug!(slot, ?bet, amount, balance = self.balance, "wager placed");
        self.emit(EventKind::WagerPlaced { slot, amount });

        Ok(())
    }

    /// Refunds every pending wager and returns the amount refunded.
    ///
    /// Does nothing while a round is in progress.
    pub fn clear_wagers(&mut self) -> usize {
        if self.state.round_active() {
            return 0;
        }

        let refunded = self.pending_wagers();
        if refunded == 0 {
            return 0;
        }

        for slot in &mut self.slots {
            *slot.wagers_mut() = WagerSet::default();
        }
        self.balance += refunded;

        tracing::debug!(refunded, balance = self.balance, "wagers cleared");
        self.emit(EventKind::WagersCleared { refunded });

        refunded
    }

    /// Replaces the pending wagers with the previous round's wagers scaled
    /// by the configured rebet multiplier. Returns the total placed.
    ///
    /// Pending wagers are refunded first, so they count toward the balance
    /// available for the rebet.
    ///
    /// # Errors
    ///
    /// Returns an error if rebetting is disabled, a round is in progress,
    /// there is nothing to repeat, or the scaled wagers exceed the balance.
    pub fn rebet_previous(&mut self) -> Result<usize, RebetError> {
        if !self.options.rebet {
            return Err(RebetError::NotOffered);
        }

        if self.state.round_active() {
            return Err(RebetError::RoundInProgress);
        }

        if self.previous_wagers.iter().all(WagerSet::is_empty) {
            return Err(RebetError::NoPreviousWagers);
        }

        let multiplier = self.options.rebet_multiplier;
        let scaled = self
            .previous_wagers
            .iter()
            .map(|wagers| wagers.scaled(multiplier))
            .collect::<Option<Vec<WagerSet>>>()
            .ok_or(RebetError::InsufficientBalance)?;
        let total = scaled
            .iter()
            .try_fold(0usize, |sum, wagers| sum.checked_add(wagers.total()))
            .ok_or(RebetError::InsufficientBalance)?;

        if total > self.balance + self.pending_wagers() {
            return Err(RebetError::InsufficientBalance);
        }

        self.clear_wagers();

        for (id, wagers) in scaled.into_iter().enumerate() {
            if wagers.is_empty() {
                continue;
            }
            let amount = wagers.total();
            self.balance -= amount;
            *self.slots[id].wagers_mut() = wagers;
            self.emit(EventKind::WagerPlaced { slot: id, amount });
        }

        tracing::debug!(
            total,
            multiplier,
            balance = self.balance,
            "previous wagers repeated"
        );
        Ok(total)
    }

    /// Starts a round: shuffles a fresh shoe, deals two cards to every slot
    /// with a main wager and to the dealer, then settles side bets.
    ///
    /// Slots without a main wager sit the round out; any side wagers on them
    /// stay pending.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, no slot has a main
    /// wager, or a preset shoe is too short for the initial deal.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.state.round_active() {
            return Err(DealError::RoundInProgress);
        }

        let playing: Vec<usize> = self
            .slots
            .iter()
            .filter(|slot| slot.wagers().main > 0)
            .map(|slot| slot.id())
            .collect();

        if playing.is_empty() {
            return Err(DealError::NoActiveWager);
        }

        let cards_needed = (playing.len() + 1) * 2;
        if self
            .preset
            .as_ref()
            .is_some_and(|draws| draws.len() < cards_needed)
        {
            return Err(DealError::NotEnoughCards);
        }

        self.shoe = match self.preset.take() {
            Some(draws) => Shoe::stacked(&draws),
            None => Shoe::shuffled(&mut self.rng),
        };

        self.previous_wagers = self.slots.iter().map(|slot| *slot.wagers()).collect();
        self.last_result = None;
        self.dealer_hand.clear();
        self.current_turn = None;
        for slot in &mut self.slots {
            if slot.wagers().main > 0 {
                slot.join_round();
            } else {
                slot.sit_out();
            }
        }
        self.state = TableState::PlayerTurn;

        tracing::info!(
            slots = playing.len(),
            wagered = self.pending_wagers(),
            balance = self.balance,
            "round started"
        );
        self.emit(EventKind::RoundStarted);

        for _ in 0..2 {
            self.deal_one_card_to_slots(&playing);
            self.deal_one_card_to_dealer();
        }

        self.resolve_side_bets(&playing);

        for &id in &playing {
            let slot = &mut self.slots[id];
            if slot.hand().is_natural() {
                slot.set_status(SlotStatus::Blackjack);
                tracing::debug!(slot = id, "blackjack");
            }
        }

        self.advance_to_next_slot();

        Ok(())
    }

    /// Settles Perfect Pairs and 21+3 for every playing slot, crediting wins
    /// straight away.
    fn resolve_side_bets(&mut self, playing: &[usize]) {
        let Some(&up_card) = self.dealer_hand.up_card() else {
            return;
        };

        for &id in playing {
            let slot = &self.slots[id];
            let Some(pair) = slot.hand().initial_pair() else {
                continue;
            };
            let wagers = *slot.wagers();
            let result = side_bet::resolve(
                pair,
                up_card,
                wagers.perfect_pairs,
                wagers.twenty_one_plus_three,
                &self.options.perfect_pairs,
                &self.options.twenty_one_plus_three,
            );
            let payout = result.total_payout();

            self.balance += payout;
            self.slots[id].set_side_bets(result);

            if wagers.perfect_pairs > 0 || wagers.twenty_one_plus_three > 0 {
                tracing::debug!(slot = id, payout, "side bets resolved");
                self.emit(EventKind::SideBetsResolved { slot: id, payout });
            }
        }
    }
}

use crate::card::Card;
use crate::error::ActionError;
use crate::slot::SlotStatus;
use crate::snapshot::EventKind;

use super::{Seat, Table, TableState};

impl Table {
    fn ensure_slot_turn(&self, slot: usize) -> Result<(), ActionError> {
        if self.state != TableState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if slot >= self.slots.len() {
            return Err(ActionError::SlotNotFound);
        }

        if self.current_turn != Some(slot) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the slot's turn. Reaching 21 does not; the player still
    /// has to stand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting on player decisions, the slot
    /// cannot be found or does not hold play priority, or the shoe is empty.
    pub fn hit(&mut self, slot: usize) -> Result<Card, ActionError> {
        self.ensure_slot_turn(slot)?;

        let card = self.shoe.draw().ok_or(ActionError::NoCards)?;

        let player = &mut self.slots[slot];
        player.add_card(card);
        let bust = player.hand().is_bust();
        if bust {
            player.set_status(SlotStatus::Bust);
        }

        tracing::debug!(slot, %card, score = self.slots[slot].score(), "hit");
        self.emit(EventKind::CardDealt {
            seat: Seat::Slot(slot),
        });

        if bust {
            self.advance_to_next_slot();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting on player decisions, or the
    /// slot cannot be found or does not hold play priority.
    pub fn stand(&mut self, slot: usize) -> Result<(), ActionError> {
        self.ensure_slot_turn(slot)?;

        self.slots[slot].set_status(SlotStatus::Stand);
        tracing::debug!(slot, score = self.slots[slot].score(), "stand");

        self.advance_to_next_slot();

        Ok(())
    }

    /// Player action: Double down (double the main wager, receive exactly one
    /// card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting on player decisions, the slot
    /// cannot be found or does not hold play priority, the hand is not
    /// eligible to double down, the balance cannot cover the main wager, or
    /// the shoe is empty.
    pub fn double_down(&mut self, slot: usize) -> Result<Card, ActionError> {
        self.ensure_slot_turn(slot)?;

        let player = &self.slots[slot];

        // Can only double on first two cards
        if player.hand().len() != 2 || !self.options.double.allows(player.score()) {
            return Err(ActionError::CannotDouble);
        }

        let bet = player.wagers().main;
        if self.balance < bet {
            return Err(ActionError::InsufficientBalance);
        }

        let card = self.shoe.draw().ok_or(ActionError::NoCards)?;

        self.balance -= bet;
        let player = &mut self.slots[slot];
        player.wagers_mut().main += bet;
        player.add_card(card);
        let status = if player.hand().is_bust() {
            SlotStatus::Bust
        } else {
            SlotStatus::Stand
        };
        player.set_status(status);

        tracing::debug!(
            slot,
            %card,
            wager = bet * 2,
            score = self.slots[slot].score(),
            "double down"
        );
        self.emit(EventKind::CardDealt {
            seat: Seat::Slot(slot),
        });

        self.advance_to_next_slot();

        Ok(card)
    }

    /// Returns whether the given slot may double down right now.
    #[must_use]
    pub fn can_double(&self, slot: usize) -> bool {
        self.ensure_slot_turn(slot).is_ok()
            && self.slots.get(slot).is_some_and(|player| {
                player.hand().len() == 2
                    && self.options.double.allows(player.score())
                    && self.balance >= player.wagers().main
            })
    }

    /// Hands play priority to the lowest-id slot still playing. When none
    /// remain, the dealer plays and the round is settled.
    pub(super) fn advance_to_next_slot(&mut self) {
        let next = self
            .slots
            .iter()
            .find(|slot| slot.status() == SlotStatus::Playing)
            .map(|slot| slot.id());

        self.current_turn = next;
        self.emit(EventKind::TurnChanged { slot: next });

        if next.is_none() {
            self.state = TableState::DealerTurn;
            self.dealer_play();
            self.settle();
        }
    }
}

extern crate alloc;

use alloc::vec::Vec;

use crate::options::RoundingMode;
use crate::result::{HandOutcome, RoundResult, SlotResult};
use crate::slot::SlotStatus;
use crate::snapshot::EventKind;

use super::{Seat, Table, TableState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Table {
    /// Dealer reveals the hole card and draws until reaching 17 or higher.
    ///
    /// If `stand_on_soft_17` is true, dealer stands on soft 17.
    /// Otherwise, dealer hits on soft 17.
    pub(super) fn dealer_play(&mut self) {
        self.dealer_hand.reveal_hole();
        self.emit(EventKind::DealerRevealed);

        loop {
            let value = self.dealer_hand.value();
            let is_soft = self.dealer_hand.is_soft();

            if value > 17 {
                break;
            }
            if value == 17 && (!is_soft || self.options.stand_on_soft_17) {
                break;
            }

            let Some(card) = self.shoe.draw() else {
                tracing::warn!(value, "shoe exhausted during dealer play");
                break;
            };
            self.dealer_hand.add_card(card);
            tracing::debug!(%card, value = self.dealer_hand.value(), "dealer draws");
            self.emit(EventKind::CardDealt { seat: Seat::Dealer });
        }

        let score = self.dealer_hand.value();
        self.emit(EventKind::DealerStood { score });
    }

    /// Main wager payout for a finished slot against the dealer's total.
    fn main_payout(
        &self,
        status: SlotStatus,
        player_value: u8,
        bet: usize,
    ) -> (HandOutcome, usize) {
        let dealer_value = self.dealer_hand.value();

        match status {
            SlotStatus::Bust => (HandOutcome::Lose, 0),
            SlotStatus::Blackjack => {
                if dealer_value == 21 {
                    (HandOutcome::Push, bet)
                } else {
                    #[expect(
                        clippy::cast_precision_loss,
                        reason = "f64 has sufficient precision for monetary values"
                    )]
                    let winnings = (bet as f64) * self.options.blackjack_pays;
                    let rounded = round_amount(winnings, self.options.rounding_blackjack);
                    (HandOutcome::Blackjack, bet + rounded)
                }
            }
            SlotStatus::Stand | SlotStatus::Playing | SlotStatus::Betting => {
                if dealer_value > 21 || player_value > dealer_value {
                    (HandOutcome::Win, bet * 2)
                } else if player_value < dealer_value {
                    (HandOutcome::Lose, 0)
                } else {
                    (HandOutcome::Push, bet)
                }
            }
        }
    }

    /// Settles every main wager, records the round result, and returns the
    /// table to betting.
    pub(super) fn settle(&mut self) {
        let dealer_value = self.dealer_hand.value();
        let mut results = Vec::new();
        let mut total_wagered = 0;
        let mut total_returned = 0;

        for index in 0..self.slots.len() {
            let slot = &self.slots[index];
            if !slot.is_active() {
                continue;
            }

            let main_wager = slot.wagers().main;
            let player_value = slot.score();
            let side_bets = slot.side_bets().copied().unwrap_or_default();
            let (outcome, payout) = self.main_payout(slot.status(), player_value, main_wager);

            self.balance += payout;
            total_wagered += main_wager + side_bets.total_wagered();
            total_returned += payout + side_bets.total_payout();

            results.push(SlotResult {
                slot: index,
                outcome,
                main_wager,
                payout,
                player_value,
                side_bets,
            });
            self.slots[index].settle(outcome);
        }

        let result = RoundResult {
            slots: results,
            dealer_value,
            dealer_bust: dealer_value > 21,
            total_wagered,
            total_returned,
        };

        tracing::info!(
            dealer = dealer_value,
            wagered = total_wagered,
            returned = total_returned,
            balance = self.balance,
            "round settled"
        );

        self.last_result = Some(result);
        self.current_turn = None;
        self.state = TableState::Betting;
        self.emit(EventKind::RoundSettled);
    }
}

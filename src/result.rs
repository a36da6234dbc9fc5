//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::side_bet::SideBetResult;

/// `returned - wagered`, saturating at the bounds of `isize`.
fn signed_net(returned: usize, wagered: usize) -> isize {
    if returned >= wagered {
        isize::try_from(returned - wagered).unwrap_or(isize::MAX)
    } else {
        isize::try_from(wagered - returned).map_or(isize::MIN, |loss| -loss)
    }
}

/// Result of a slot's main wager after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Natural 21 against a dealer total other than 21.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Push (tie).
    Push,
    /// Player loses (player busts or dealer has higher value).
    Lose,
}

/// Result for a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotResult {
    /// The slot id.
    pub slot: usize,
    /// The outcome of the main wager.
    pub outcome: HandOutcome,
    /// The main wager, including any double.
    pub main_wager: usize,
    /// Amount credited for the main wager.
    pub payout: usize,
    /// The slot's final hand value.
    pub player_value: u8,
    /// Side bets, which were paid straight after the deal.
    pub side_bets: SideBetResult,
}

impl SlotResult {
    /// Net result of the slot across main and side wagers.
    #[must_use]
    pub fn net(&self) -> isize {
        let returned = self.payout.saturating_add(self.side_bets.total_payout());
        let wagered = self
            .main_wager
            .saturating_add(self.side_bets.total_wagered());
        signed_net(returned, wagered)
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each slot that played, in play order.
    pub slots: Vec<SlotResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Everything wagered on the round, side bets and doubles included.
    pub total_wagered: usize,
    /// Everything credited back for the round, side bets included.
    pub total_returned: usize,
}

impl RoundResult {
    /// Net result of the round for the player.
    #[must_use]
    pub fn net(&self) -> isize {
        signed_net(self.total_returned, self.total_wagered)
    }
}

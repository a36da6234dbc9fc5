//! Table state types.

/// Table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableState {
    /// Accepting wagers for the next round.
    #[default]
    Betting,
    /// Waiting for the slot holding play priority to act.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
}

impl TableState {
    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn round_active(self) -> bool {
        !matches!(self, Self::Betting)
    }
}

/// A position at the table that can receive a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    /// A betting slot.
    Slot(usize),
    /// The dealer.
    Dealer,
}

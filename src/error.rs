//! Error types for table operations.
//!
//! Every error leaves the table exactly as it was before the call.

use thiserror::Error;

/// Broad category of a rejected call, for user-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A wager or double exceeds the available balance.
    InsufficientBalance,
    /// The action is not allowed right now.
    InvalidAction,
    /// A round was requested with no main wager on the table.
    NoActiveWager,
}

/// Errors that can occur when placing or clearing wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Slot not found.
    #[error("slot not found")]
    SlotNotFound,
    /// Insufficient balance.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// A round is in progress.
    #[error("a round is in progress")]
    RoundInProgress,
    /// Wager amount is zero.
    #[error("wager amount is zero")]
    ZeroAmount,
}

impl WagerError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientBalance => ErrorKind::InsufficientBalance,
            Self::SlotNotFound | Self::RoundInProgress | Self::ZeroAmount => {
                ErrorKind::InvalidAction
            }
        }
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// No slot has a main wager.
    #[error("no slot has a main wager")]
    NoActiveWager,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

impl DealError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoActiveWager => ErrorKind::NoActiveWager,
            Self::RoundInProgress | Self::NotEnoughCards => ErrorKind::InvalidAction,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is waiting on player decisions.
    #[error("no round is waiting on player decisions")]
    InvalidState,
    /// Slot not found.
    #[error("slot not found")]
    SlotNotFound,
    /// The slot does not hold play priority.
    #[error("not this slot's turn")]
    NotYourTurn,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient balance for this action.
    #[error("insufficient balance for this action")]
    InsufficientBalance,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl ActionError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientBalance => ErrorKind::InsufficientBalance,
            Self::InvalidState
            | Self::SlotNotFound
            | Self::NotYourTurn
            | Self::CannotDouble
            | Self::NoCards => ErrorKind::InvalidAction,
        }
    }
}

/// Errors that can occur when repeating the previous round's wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RebetError {
    /// Rebetting is disabled at this table.
    #[error("rebet is not offered at this table")]
    NotOffered,
    /// A round is in progress.
    #[error("a round is in progress")]
    RoundInProgress,
    /// No previous round to repeat.
    #[error("no previous wagers to repeat")]
    NoPreviousWagers,
    /// Insufficient balance for the repeated wagers.
    #[error("insufficient balance")]
    InsufficientBalance,
}

impl RebetError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientBalance => ErrorKind::InsufficientBalance,
            Self::NotOffered | Self::RoundInProgress | Self::NoPreviousWagers => {
                ErrorKind::InvalidAction
            }
        }
    }
}

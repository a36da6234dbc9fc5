//! A blackjack table engine with Perfect Pairs and 21+3 side bets and
//! optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the full round flow for one
//! or more betting slots against a single dealer: wager intake, the deal,
//! side bet settlement, player decisions, dealer play, and payouts. A
//! presentation layer drives it through its methods and renders the
//! [`Snapshot`]s it hands back.
//!
//! # Example
//!
//! ```
//! use bjtable::{BetType, Table, TableOptions, TableState};
//!
//! let mut table = Table::new(TableOptions::default().with_slots(1), 42);
//! table.place_wager(0, BetType::Main, 10).unwrap();
//! table.start_round().unwrap();
//!
//! while table.state() == TableState::PlayerTurn {
//!     let slot = table.current_slot().unwrap();
//!     table.stand(slot).unwrap();
//! }
//! assert_eq!(table.state(), TableState::Betting);
//! assert!(table.last_result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod side_bet;
pub mod slot;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, DealError, ErrorKind, RebetError, WagerError};
pub use game::{Seat, Table, TableState};
pub use hand::{DealerHand, Hand};
pub use options::{
    DoubleOption, PerfectPairsTable, RoundingMode, TableOptions, TwentyOnePlusThreeTable,
};
pub use result::{HandOutcome, RoundResult, SlotResult};
pub use side_bet::{PerfectPairsHand, SideBetPayout, SideBetResult, ThreeCardHand};
pub use slot::{BetType, Slot, SlotStatus, WagerSet};
pub use snapshot::{DealerView, EventKind, SlotView, Snapshot, TableEvent};

//! Table configuration options.

/// Largest number of slots a table can seat.
pub const MAX_SLOTS: usize = 7;

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two-card hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand of the given value may be doubled.
    #[must_use]
    pub fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// Default number of queued table events kept before the oldest is dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Perfect Pairs pay table, as profit multipliers on the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfectPairsTable {
    /// Same rank, same suit.
    pub suited: usize,
    /// Same rank, same color, different suit.
    pub colored: usize,
    /// Same rank, different color.
    pub mixed: usize,
}

impl Default for PerfectPairsTable {
    fn default() -> Self {
        Self {
            suited: 25,
            colored: 12,
            mixed: 6,
        }
    }
}

/// 21+3 pay table, as profit multipliers on the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwentyOnePlusThreeTable {
    /// Three of a kind, all the same suit.
    pub suited_trips: usize,
    /// Straight, all the same suit.
    pub straight_flush: usize,
    /// Three of a kind.
    pub trips: usize,
    /// Three consecutive ranks.
    pub straight: usize,
    /// All the same suit.
    pub flush: usize,
}

impl Default for TwentyOnePlusThreeTable {
    fn default() -> Self {
        Self {
            suited_trips: 100,
            straight_flush: 40,
            trips: 30,
            straight: 10,
            flush: 5,
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{DoubleOption, TableOptions};
///
/// let options = TableOptions::default()
///     .with_slots(5)
///     .with_starting_balance(500)
///     .with_double(DoubleOption::NineThrough11)
///     .with_rebet(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// Number of betting slots at the table.
    pub slots: usize,
    /// Balance a session starts with.
    pub starting_balance: usize,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether the previous round's wagers can be placed again.
    pub rebet: bool,
    /// Multiplier applied to the previous wagers by a rebet.
    pub rebet_multiplier: usize,
    /// Blackjack profit ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts. Balances are whole units, so the
    /// default rounds a half-unit profit up in the player's favour.
    pub rounding_blackjack: RoundingMode,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Perfect Pairs pay table.
    pub perfect_pairs: PerfectPairsTable,
    /// 21+3 pay table.
    pub twenty_one_plus_three: TwentyOnePlusThreeTable,
    /// Most events held until [`Table::take_events`] drains them. Older
    /// events are dropped first; 0 turns event recording off.
    ///
    /// [`Table::take_events`]: crate::Table::take_events
    pub event_capacity: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            slots: 3,
            starting_balance: 100,
            double: DoubleOption::Any,
            rebet: true,
            rebet_multiplier: 2,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Up,
            stand_on_soft_17: true,
            perfect_pairs: PerfectPairsTable::default(),
            twenty_one_plus_three: TwentyOnePlusThreeTable::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl TableOptions {
    /// Sets the number of slots. Values are clamped to `1..=MAX_SLOTS`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// assert_eq!(TableOptions::default().with_slots(1).slots, 1);
    /// assert_eq!(TableOptions::default().with_slots(0).slots, 1);
    /// assert_eq!(TableOptions::default().with_slots(99).slots, bjtable::options::MAX_SLOTS);
    /// ```
    #[must_use]
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots.clamp(1, MAX_SLOTS);
        self
    }

    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DoubleOption, TableOptions};
    ///
    /// let options = TableOptions::default().with_double(DoubleOption::None);
    /// assert_eq!(options.double, DoubleOption::None);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether rebetting the previous round is allowed.
    #[must_use]
    pub const fn with_rebet(mut self, allowed: bool) -> Self {
        self.rebet = allowed;
        self
    }

    /// Sets the rebet multiplier.
    #[must_use]
    pub const fn with_rebet_multiplier(mut self, multiplier: usize) -> Self {
        self.rebet_multiplier = multiplier;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the Perfect Pairs pay table.
    #[must_use]
    pub const fn with_perfect_pairs(mut self, table: PerfectPairsTable) -> Self {
        self.perfect_pairs = table;
        self
    }

    /// Sets the 21+3 pay table.
    #[must_use]
    pub const fn with_twenty_one_plus_three(mut self, table: TwentyOnePlusThreeTable) -> Self {
        self.twenty_one_plus_three = table;
        self
    }

    /// Sets how many events are queued before the oldest is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{BetType, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default().with_event_capacity(0), 1);
    /// table.place_wager(0, BetType::Main, 10).unwrap();
    /// assert!(table.take_events().is_empty());
    /// ```
    #[must_use]
    pub const fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

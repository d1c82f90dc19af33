use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{self, CATALOG, FSD_SOFTWARE, Item, TESLA_MODEL_Y};

/// The donation the player starts with.
pub const STARTING_BALANCE: Decimal = dec!(15000000);

/// Reasons a purchase is refused. A refused purchase never changes state.
///
/// The messages are shown to the player as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Invalid choice. Try again.")]
    InvalidChoice(u32),

    #[error("You need to purchase a Tesla Model Y first.")]
    RequiresTesla,

    #[error("You don't have enough money for this purchase. Try something else.")]
    InsufficientFunds { price: Decimal, balance: Decimal },
}

/// Starting balances the game refuses, because no sequence of purchases
/// could bring them to exactly zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("balance must be at least ${cheapest}, got ${balance}")]
    BelowCheapestItem { balance: Decimal, cheapest: Decimal },

    #[error("balance must be a whole number of dollars, got ${0}")]
    FractionalDollars(Decimal),
}

/// A completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub item: &'static Item,
    /// Balance left after paying.
    pub balance: Decimal,
}

/// Running state of one game: balance, what has been bought, and whether the
/// Tesla that unlocks FSD Software is owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingGame {
    balance: Decimal,
    tesla_owned: bool,
    tally: BTreeMap<u32, u32>,
}

impl Default for SpendingGame {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

impl SpendingGame {
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance,
            tesla_owned: false,
            tally: BTreeMap::new(),
        }
    }

    /// Like [`SpendingGame::new`], but only for balances that can be spent
    /// down to zero. Every price is a whole number of dollars.
    pub fn try_new(balance: Decimal) -> Result<Self, BalanceError> {
        let cheapest = catalog::cheapest_price();
        if balance < cheapest {
            return Err(BalanceError::BelowCheapestItem { balance, cheapest });
        }
        if !balance.fract().is_zero() {
            return Err(BalanceError::FractionalDollars(balance));
        }
        Ok(Self::new(balance))
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn tesla_owned(&self) -> bool {
        self.tesla_owned
    }

    /// The game ends once the money is gone.
    pub fn is_over(&self) -> bool {
        self.balance <= Decimal::ZERO
    }

    /// Buys the item with menu number `choice`.
    pub fn purchase(
        &mut self,
        choice: u32,
    ) -> Result<Purchase, PurchaseError> {
        let item = catalog::find(choice).ok_or(PurchaseError::InvalidChoice(choice))?;

        if item.number == FSD_SOFTWARE && !self.tesla_owned {
            debug!(choice, "FSD Software refused before Tesla purchase");
            return Err(PurchaseError::RequiresTesla);
        }

        if item.price > self.balance {
            debug!(choice, price = %item.price, balance = %self.balance, "insufficient funds");
            return Err(PurchaseError::InsufficientFunds {
                price: item.price,
                balance: self.balance,
            });
        }

        self.balance -= item.price;
        if item.number == TESLA_MODEL_Y {
            self.tesla_owned = true;
        }
        *self.tally.entry(item.number).or_default() += 1;

        debug!(item = item.name, balance = %self.balance, "purchase completed");

        Ok(Purchase {
            item,
            balance: self.balance,
        })
    }

    /// Times `number` has been bought.
    pub fn count(
        &self,
        number: u32,
    ) -> u32 {
        self.tally.get(&number).copied().unwrap_or(0)
    }

    /// `(item name, times bought)` for every purchased item, in menu order.
    pub fn summary(&self) -> Vec<(&'static str, u32)> {
        CATALOG
            .iter()
            .filter_map(|item| {
                self.tally
                    .get(&item.number)
                    .map(|&count| (item.name, count))
            })
            .collect()
    }
}

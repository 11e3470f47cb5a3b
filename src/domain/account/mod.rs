//! Account domain — balances, wallets and account info.

mod convert;
pub mod wire;

pub use convert::{adapt_account_info, adapt_balance, adapt_wallet};

use crate::shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Balance ─────────────────────────────────────────────────────────────────

/// Holdings of one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub currency: Currency,
    pub total: Decimal,
    pub available: Decimal,
}

impl Balance {
    /// Amount reserved by open orders or pending operations.
    pub fn frozen(&self) -> Decimal {
        self.total - self.available
    }
}

// ─── Wallet ──────────────────────────────────────────────────────────────────

/// One balance per currency the account holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub balances: Vec<Balance>,
}

impl Wallet {
    pub fn new(balances: Vec<Balance>) -> Self {
        Self { balances }
    }

    pub fn balance(&self, currency: &Currency) -> Option<&Balance> {
        self.balances.iter().find(|b| &b.currency == currency)
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

// ─── AccountInfo ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub username: String,
    /// Fee as a fraction (`0.006`), never a percentage.
    pub trading_fee: Decimal,
    pub wallet: Wallet,
}

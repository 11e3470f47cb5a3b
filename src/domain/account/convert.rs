//! Conversions: ANX wallets and account info → Balance / Wallet / AccountInfo.

use super::wire::{AnxAccountInfo, AnxWallet};
use super::{AccountInfo, Balance, Wallet};
use crate::shared::{percent_to_factor, Currency};
use std::collections::HashMap;

/// Adapt one wallet entry. A missing wallet (or one without a currency code)
/// is absent, not a zero balance.
pub fn adapt_balance(raw: Option<&AnxWallet>) -> Option<Balance> {
    let wallet = raw?;
    if wallet.balance.currency.is_empty() {
        return None;
    }
    Some(Balance {
        currency: Currency::new(wallet.balance.currency.as_str()),
        total: wallet.balance.value,
        available: wallet.available_balance.value,
    })
}

/// Adapt the wallet map, dropping absent entries. Balances are ordered by
/// currency code.
pub fn adapt_wallet(raw: &HashMap<String, Option<AnxWallet>>) -> Wallet {
    let mut balances = Vec::with_capacity(raw.len());
    for (code, wallet) in raw {
        match adapt_balance(wallet.as_ref()) {
            Some(balance) => balances.push(balance),
            None => tracing::trace!("Skipping absent wallet for {}", code),
        }
    }
    balances.sort_by(|a, b| a.currency.cmp(&b.currency));
    Wallet::new(balances)
}

pub fn adapt_account_info(raw: &AnxAccountInfo) -> AccountInfo {
    AccountInfo {
        username: raw.login.clone(),
        trading_fee: percent_to_factor(raw.trade_fee),
        wallet: adapt_wallet(&raw.wallets),
    }
}

impl From<AnxAccountInfo> for AccountInfo {
    fn from(raw: AnxAccountInfo) -> Self {
        adapt_account_info(&raw)
    }
}

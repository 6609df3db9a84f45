//! Per-account balances over the whole snapshot.

use std::collections::HashMap;

use crate::{LedgerConfig, TransactionRecord};

/// Balance of one configured account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountBalance {
    pub account: String,
    pub balance_minor: i64,
}

/// Balances for every configured account plus their sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountBalances {
    /// One entry per configured account, in configuration order. Accounts
    /// with no records balance to 0.
    pub accounts: Vec<AccountBalance>,
    /// Sum of the per-account balances.
    pub total_minor: i64,
}

/// Sums signed amounts per configured account.
///
/// Records posted to accounts outside the configuration contribute nothing,
/// neither to a per-account entry nor to the total. Accumulation runs in
/// input order; integer addition keeps the result independent of record
/// order.
#[must_use]
pub fn account_balances(
    records: &[TransactionRecord],
    config: &LedgerConfig,
) -> AccountBalances {
    let mut sums: HashMap<&str, i64> = HashMap::with_capacity(config.accounts.len());
    for record in records {
        if config.is_account(&record.account) {
            *sums.entry(record.account.as_str()).or_insert(0) += record.amount_minor;
        }
    }

    let accounts: Vec<AccountBalance> = config
        .accounts
        .iter()
        .map(|account| AccountBalance {
            account: account.clone(),
            balance_minor: sums.get(account.as_str()).copied().unwrap_or(0),
        })
        .collect();
    let total_minor = accounts.iter().map(|a| a.balance_minor).sum();

    AccountBalances {
        accounts,
        total_minor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(account: &str, amount_minor: i64) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            date: None,
            account: account.to_string(),
            category: None,
            note: None,
            amount_minor,
        }
    }

    #[test]
    fn configured_accounts_default_to_zero() {
        let config = LedgerConfig::default();
        let result = account_balances(&[], &config);
        assert_eq!(result.accounts.len(), config.accounts.len());
        assert!(result.accounts.iter().all(|a| a.balance_minor == 0));
        assert_eq!(result.total_minor, 0);
    }

    #[test]
    fn unknown_accounts_are_ignored() {
        let config = LedgerConfig::default();
        let records = vec![record("Checking", 10_00), record("Offshore", 99_99)];
        let result = account_balances(&records, &config);
        assert_eq!(result.total_minor, 10_00);
        assert!(result.accounts.iter().all(|a| a.account != "Offshore"));
    }
}

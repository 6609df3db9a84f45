//! Ledger configuration: the fixed account set and the reserved category
//! labels, passed explicitly to every aggregation that needs them instead of
//! living as string literals inside the logic.

/// Accounts and reserved categories the aggregations operate against.
///
/// `accounts` is the fixed enumeration used by [`account_balances`]: every
/// configured name gets a balance entry even with no records, and records
/// posted to unknown accounts are ignored there. The three labels mark
/// structural rows: `income_category` is the default for positive amounts
/// without a category, `transfer_out`/`transfer_in` tag the paired rows a
/// transfer materializes as.
///
/// [`account_balances`]: crate::account_balances
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    pub accounts: Vec<String>,
    pub income_category: String,
    pub transfer_out: String,
    pub transfer_in: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            accounts: ["Checking", "Savings", "Cash", "Credit Card"]
                .map(str::to_string)
                .to_vec(),
            income_category: "Income".to_string(),
            transfer_out: "Transfer Out".to_string(),
            transfer_in: "Transfer In".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Returns `true` if `name` is one of the configured accounts.
    #[must_use]
    pub fn is_account(&self, name: &str) -> bool {
        self.accounts.iter().any(|a| a == name)
    }

    /// Returns `true` if `category` is one of the two transfer labels.
    #[must_use]
    pub fn is_transfer(&self, category: &str) -> bool {
        category == self.transfer_out || category == self.transfer_in
    }

    /// Returns `true` if `category` is reserved (income or transfer label).
    ///
    /// Reserved categories never appear in the category distribution.
    #[must_use]
    pub fn is_reserved(&self, category: &str) -> bool {
        category == self.income_category || self.is_transfer(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reserves_income_and_transfer_labels() {
        let config = LedgerConfig::default();
        assert!(config.is_reserved("Income"));
        assert!(config.is_reserved("Transfer Out"));
        assert!(config.is_reserved("Transfer In"));
        assert!(!config.is_reserved("Groceries"));
        assert!(config.is_transfer("Transfer In"));
        assert!(!config.is_transfer("Income"));
    }
}

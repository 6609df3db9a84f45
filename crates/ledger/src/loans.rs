//! Per-person loan balances derived from the loan event log.

use std::collections::HashMap;

use crate::LoanRecord;

/// Running balance of one counterparty.
///
/// Positive = the person owes the owner; negative = the owner owes the
/// person (overpayment); zero = settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonBalance {
    pub person: String,
    pub balance_minor: i64,
}

/// Every counterparty's balance plus the outstanding-lent headline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanLedger {
    /// Sorted descending by balance; ties keep first-encounter order.
    pub balances: Vec<PersonBalance>,
    /// Sum of `max(0, balance)` per person. An overpaid counterparty never
    /// offsets what others still owe.
    pub total_lent_minor: i64,
}

/// Nets the loan log per person.
///
/// Pure summation: the result does not depend on event order.
#[must_use]
pub fn loan_balances(loans: &[LoanRecord]) -> LoanLedger {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, i64> = HashMap::new();

    for loan in loans {
        let entry = sums.entry(loan.person.clone()).or_insert_with(|| {
            order.push(loan.person.clone());
            0
        });
        *entry += loan.signed_effect_minor();
    }

    let mut balances: Vec<PersonBalance> = order
        .into_iter()
        .map(|person| {
            let balance_minor = sums[&person];
            PersonBalance {
                person,
                balance_minor,
            }
        })
        .collect();
    balances.sort_by(|a, b| b.balance_minor.cmp(&a.balance_minor));

    let total_lent_minor = balances.iter().map(|b| b.balance_minor.max(0)).sum();

    LoanLedger {
        balances,
        total_lent_minor,
    }
}

/// One person's loan history, most recent first.
///
/// Records without a parseable date sort last; same-day events keep input
/// order.
#[must_use]
pub fn person_transactions(loans: &[LoanRecord], person: &str) -> Vec<LoanRecord> {
    let mut history: Vec<LoanRecord> = loans
        .iter()
        .filter(|loan| loan.person == person)
        .cloned()
        .collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoanKind;
    use uuid::Uuid;

    fn event(person: &str, kind: LoanKind, amount_minor: i64, date: &str) -> LoanRecord {
        LoanRecord {
            id: Uuid::new_v4(),
            date: date.parse().ok(),
            person: person.to_string(),
            kind,
            amount_minor,
            note: None,
        }
    }

    #[test]
    fn balances_net_per_person() {
        let loans = vec![
            event("John", LoanKind::Lent, 5000_00, "2025-01-01"),
            event("John", LoanKind::Received, 2000_00, "2025-02-01"),
            event("John", LoanKind::AdditionalLoan, 1500_00, "2025-03-01"),
            event("Sarah", LoanKind::Lent, 3000_00, "2025-01-15"),
            event("Sarah", LoanKind::Received, 3000_00, "2025-04-01"),
        ];

        let ledger = loan_balances(&loans);
        assert_eq!(ledger.balances[0].person, "John");
        assert_eq!(ledger.balances[0].balance_minor, 4500_00);
        assert_eq!(ledger.balances[1].person, "Sarah");
        assert_eq!(ledger.balances[1].balance_minor, 0);
        assert_eq!(ledger.total_lent_minor, 4500_00);
    }

    #[test]
    fn overpayment_does_not_offset_other_people() {
        let loans = vec![
            event("John", LoanKind::Lent, 100_00, "2025-01-01"),
            event("Sarah", LoanKind::Lent, 50_00, "2025-01-02"),
            event("Sarah", LoanKind::Received, 80_00, "2025-01-03"),
        ];

        let ledger = loan_balances(&loans);
        assert_eq!(ledger.total_lent_minor, 100_00);
        assert_eq!(ledger.balances.last().unwrap().balance_minor, -30_00);
    }

    #[test]
    fn history_is_newest_first_and_scoped_to_the_person() {
        let loans = vec![
            event("John", LoanKind::Lent, 10_00, "2025-01-01"),
            event("Sarah", LoanKind::Lent, 20_00, "2025-06-01"),
            event("John", LoanKind::Received, 5_00, "2025-03-01"),
        ];

        let history = person_transactions(&loans, "John");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, LoanKind::Received);
        assert_eq!(history[1].kind, LoanKind::Lent);
    }
}

//! The transaction store: the single owner of persisted ledger state.
//!
//! Aggregations never touch the database; they consume snapshots read here.
//! All admission rules live on the write side of this boundary: required
//! fields, ISO dates, configured accounts, the category defaulting rule and
//! the transfer invariants. Whatever passed admission (or predates it) is
//! read back tolerantly.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use ledger::{LedgerConfig, LoanKind, LoanRecord, TransactionRecord};

pub use error::StoreError;

mod error;
mod loans;
mod transactions;

type ResultStore<T> = Result<T, StoreError>;

/// A new expense/income row, as entered by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDraft {
    /// ISO calendar date, `YYYY-MM-DD`. Anything else is rejected rather
    /// than guessed at.
    pub date: String,
    pub account: String,
    pub category: Option<String>,
    pub note: Option<String>,
    /// Signed: positive = received, negative = spent.
    pub amount_minor: i64,
}

/// A new transfer between two accounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferDraft {
    pub date: String,
    pub from_account: String,
    pub to_account: String,
    /// Magnitude moved; must be positive.
    pub amount_minor: i64,
    pub note: Option<String>,
}

/// A new loan event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanDraft {
    pub date: String,
    pub person: String,
    pub kind: LoanKind,
    /// Non-negative; the sign is derived from `kind`.
    pub amount_minor: i64,
    pub note: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Store {
    database: DatabaseConnection,
    config: LedgerConfig,
}

impl Store {
    pub fn new(database: DatabaseConnection, config: LedgerConfig) -> Self {
        Self { database, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Reads the full transaction snapshot in insertion order.
    pub async fn transactions(&self) -> ResultStore<Vec<TransactionRecord>> {
        let models = transactions::Entity::find()
            .order_by_asc(transactions::Column::Seq)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(TransactionRecord::from).collect())
    }

    /// Reads the full loan snapshot in insertion order.
    ///
    /// Rows whose kind column holds an unknown value are excluded rather
    /// than failing the snapshot.
    pub async fn loans(&self) -> ResultStore<Vec<LoanRecord>> {
        let models = loans::Entity::find()
            .order_by_asc(loans::Column::Seq)
            .all(&self.database)
            .await?;

        Ok(models
            .into_iter()
            .filter_map(loans::Model::into_record)
            .collect())
    }

    /// Appends a validated expense/income row; returns its immutable id.
    pub async fn append_transaction(&self, draft: TransactionDraft) -> ResultStore<Uuid> {
        let draft = self.validate_transaction(draft)?;
        let id = Uuid::new_v4();

        row_from_draft(id, &draft).insert(&self.database).await?;
        Ok(id)
    }

    /// Replaces the row addressed by `id` with new validated values.
    ///
    /// The id stays stable across the update; every later snapshot carries
    /// the new values only. Transfer legs cannot be rewritten through this
    /// path since changing one leg alone would unbalance the pair.
    pub async fn update_transaction(
        &self,
        id: Uuid,
        draft: TransactionDraft,
    ) -> ResultStore<()> {
        let draft = self.validate_transaction(draft)?;

        let model = transactions::Entity::find()
            .filter(transactions::Column::Id.eq(id.to_string()))
            .one(&self.database)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if model
            .category
            .as_deref()
            .is_some_and(|c| self.config.is_transfer(c))
        {
            return Err(StoreError::Rejected(
                "transfer legs cannot be updated individually".to_string(),
            ));
        }

        let mut row = row_from_draft(id, &draft);
        row.seq = ActiveValue::Set(model.seq);
        row.update(&self.database).await?;
        Ok(())
    }

    /// Appends the two legs of a transfer in one database transaction.
    ///
    /// Either both rows land or neither does; a one-sided transfer cannot
    /// be observed. Returns `(out_id, in_id)`.
    pub async fn append_transfer(&self, draft: TransferDraft) -> ResultStore<(Uuid, Uuid)> {
        parse_date(&draft.date)?;
        self.require_account(&draft.from_account)?;
        self.require_account(&draft.to_account)?;
        if draft.from_account == draft.to_account {
            return Err(StoreError::Rejected(
                "transfer accounts must differ".to_string(),
            ));
        }
        if draft.amount_minor <= 0 {
            return Err(StoreError::Rejected(
                "transfer amount must be positive".to_string(),
            ));
        }

        let out_id = Uuid::new_v4();
        let in_id = Uuid::new_v4();
        let out_row = transactions::ActiveModel {
            seq: ActiveValue::NotSet,
            id: ActiveValue::Set(out_id.to_string()),
            date: ActiveValue::Set(draft.date.clone()),
            account: ActiveValue::Set(draft.from_account.clone()),
            category: ActiveValue::Set(Some(self.config.transfer_out.clone())),
            note: ActiveValue::Set(draft.note.clone()),
            amount_minor: ActiveValue::Set(-draft.amount_minor),
        };
        let in_row = transactions::ActiveModel {
            seq: ActiveValue::NotSet,
            id: ActiveValue::Set(in_id.to_string()),
            date: ActiveValue::Set(draft.date),
            account: ActiveValue::Set(draft.to_account),
            category: ActiveValue::Set(Some(self.config.transfer_in.clone())),
            note: ActiveValue::Set(draft.note),
            amount_minor: ActiveValue::Set(draft.amount_minor),
        };

        let db_tx = self.database.begin().await?;
        out_row.insert(&db_tx).await?;
        in_row.insert(&db_tx).await?;
        db_tx.commit().await?;

        Ok((out_id, in_id))
    }

    /// Appends a validated loan event; returns its immutable id.
    pub async fn append_loan(&self, draft: LoanDraft) -> ResultStore<Uuid> {
        parse_date(&draft.date)?;
        if draft.person.trim().is_empty() {
            return Err(StoreError::Rejected("person is required".to_string()));
        }
        if draft.amount_minor < 0 {
            return Err(StoreError::Rejected(
                "loan amount must be non-negative".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let row = loans::ActiveModel {
            seq: ActiveValue::NotSet,
            id: ActiveValue::Set(id.to_string()),
            date: ActiveValue::Set(draft.date),
            person: ActiveValue::Set(draft.person),
            kind: ActiveValue::Set(draft.kind.as_str().to_string()),
            amount_minor: ActiveValue::Set(draft.amount_minor),
            note: ActiveValue::Set(draft.note),
        };
        row.insert(&self.database).await?;
        Ok(id)
    }

    /// Admission rules for expense/income rows.
    ///
    /// - the date must be an ISO calendar date
    /// - the account must be configured
    /// - a negative amount requires a category; a non-negative amount
    ///   without one defaults to the income label
    /// - the transfer labels are reserved for [`append_transfer`]
    ///
    /// [`append_transfer`]: Store::append_transfer
    fn validate_transaction(&self, draft: TransactionDraft) -> ResultStore<TransactionDraft> {
        parse_date(&draft.date)?;
        self.require_account(&draft.account)?;

        let category = match draft.category.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(category) => {
                if self.config.is_transfer(category) {
                    return Err(StoreError::Rejected(format!(
                        "category {category:?} is reserved for transfers"
                    )));
                }
                Some(category.to_string())
            }
            None if draft.amount_minor < 0 => {
                return Err(StoreError::Rejected(
                    "category is required for expenses".to_string(),
                ));
            }
            None => Some(self.config.income_category.clone()),
        };

        Ok(TransactionDraft { category, ..draft })
    }

    fn require_account(&self, name: &str) -> ResultStore<()> {
        if self.config.is_account(name) {
            Ok(())
        } else {
            Err(StoreError::Rejected(format!("unknown account: {name:?}")))
        }
    }
}

fn parse_date(date: &str) -> ResultStore<NaiveDate> {
    date.parse().map_err(|_| {
        StoreError::Rejected(format!(
            "date must be an ISO calendar date (YYYY-MM-DD), got {date:?}"
        ))
    })
}

fn row_from_draft(id: Uuid, draft: &TransactionDraft) -> transactions::ActiveModel {
    transactions::ActiveModel {
        seq: ActiveValue::NotSet,
        id: ActiveValue::Set(id.to_string()),
        date: ActiveValue::Set(draft.date.clone()),
        account: ActiveValue::Set(draft.account.clone()),
        category: ActiveValue::Set(draft.category.clone()),
        note: ActiveValue::Set(draft.note.clone()),
        amount_minor: ActiveValue::Set(draft.amount_minor),
    }
}

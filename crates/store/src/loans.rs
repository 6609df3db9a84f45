//! Persisted loan event rows.

use ledger::{LoanKind, LoanRecord};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loan_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    #[sea_orm(unique)]
    pub id: String,
    pub date: String,
    pub person: String,
    pub kind: String,
    pub amount_minor: i64,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Softens a stored row into the snapshot form.
    ///
    /// Returns `None` when the kind column holds none of the three known
    /// values; such a row cannot contribute a signed effect and is excluded
    /// from the snapshot.
    pub fn into_record(self) -> Option<LoanRecord> {
        let kind = LoanKind::try_from(self.kind.as_str()).ok()?;
        Some(LoanRecord {
            id: Uuid::parse_str(&self.id).unwrap_or_default(),
            date: self.date.parse().ok(),
            person: self.person,
            kind,
            amount_minor: self.amount_minor,
            note: self.note,
        })
    }
}

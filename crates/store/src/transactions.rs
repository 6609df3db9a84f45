//! Persisted transaction rows.

use ledger::TransactionRecord;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Insertion order; the canonical accumulation order for snapshots.
    #[sea_orm(primary_key)]
    pub seq: i32,
    /// Immutable handle assigned at creation, used for updates.
    #[sea_orm(unique)]
    pub id: String,
    /// ISO `YYYY-MM-DD`, validated on write. Historical rows imported from
    /// elsewhere may not parse; reads tolerate that.
    pub date: String,
    pub account: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub amount_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TransactionRecord {
    /// Softens a stored row into the snapshot form: an unparseable date or
    /// a missing id degrades instead of failing the whole snapshot.
    fn from(model: Model) -> Self {
        Self {
            id: Uuid::parse_str(&model.id).unwrap_or_default(),
            date: model.date.parse().ok(),
            account: model.account,
            category: model.category.filter(|c| !c.is_empty()),
            note: model.note,
            amount_minor: model.amount_minor,
        }
    }
}

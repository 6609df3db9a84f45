//! Initial schema migration - creates both ledger tables from scratch.
//!
//! - `transactions`: expense/income rows plus the paired transfer legs
//! - `loan_transactions`: person-to-person loan events
//!
//! Rows are addressed by an immutable UUID (`id`) assigned at creation; the
//! autoincrementing `seq` column records insertion order, which is the
//! canonical accumulation order for aggregation snapshots.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Transactions {
    Table,
    Seq,
    Id,
    Date,
    Account,
    Category,
    Note,
    AmountMinor,
}

#[derive(Iden)]
enum LoanTransactions {
    Table,
    Seq,
    Id,
    Date,
    Person,
    Kind,
    AmountMinor,
    Note,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Transactions::Date).string().not_null())
                    .col(ColumnDef::new(Transactions::Account).string().not_null())
                    .col(ColumnDef::new(Transactions::Category).string())
                    .col(ColumnDef::new(Transactions::Note).string())
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LoanTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoanTransactions::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LoanTransactions::Id)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(LoanTransactions::Date).string().not_null())
                    .col(
                        ColumnDef::new(LoanTransactions::Person)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LoanTransactions::Kind).string().not_null())
                    .col(
                        ColumnDef::new(LoanTransactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LoanTransactions::Note).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-loan_transactions-person")
                    .table(LoanTransactions::Table)
                    .col(LoanTransactions::Person)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoanTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        Ok(())
    }
}

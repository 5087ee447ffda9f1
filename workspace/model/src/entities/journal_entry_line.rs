use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// One debit/credit line of a journal entry.
///
/// Both amounts are non-negative; a line is normally one-sided but the
/// schema does not forbid both sides being set. Deleting an account with
/// lines is blocked (restrict) so history cannot be orphaned.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journal_entry_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub journal_entry_id: i32,
    pub account_id: i32,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub debit: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub credit: Decimal,
    pub cost_center_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journal_entry::Entity",
        from = "Column::JournalEntryId",
        to = "super::journal_entry::Column::Id",
        on_delete = "Cascade"
    )]
    JournalEntry,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_delete = "Restrict"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::cost_center::Entity",
        from = "Column::CostCenterId",
        to = "super::cost_center::Column::Id",
        on_delete = "SetNull"
    )]
    CostCenter,
}

impl Related<super::journal_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntry.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::cost_center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

/// Header of one journal entry. The debit/credit content lives in the
/// entry's lines.
///
/// A balanced entry has equal debit and credit totals across its lines, but
/// nothing at this layer enforces that; see `compute::ledger::entry_imbalance`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub date: NaiveDate,
    pub reference: Option<String>,
    pub narration: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(has_many = "super::journal_entry_line::Entity")]
    JournalEntryLine,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::journal_entry_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntryLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

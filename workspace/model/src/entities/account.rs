use sea_orm::entity::prelude::*;

/// Double-entry classification of a ledger account.
///
/// The type drives report sign conventions: Revenue accounts aggregate on
/// their credit side, Expense accounts on their debit side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AccountType {
    #[sea_orm(string_value = "Asset")]
    Asset,
    #[sea_orm(string_value = "Liability")]
    Liability,
    #[sea_orm(string_value = "Equity")]
    Equity,
    #[sea_orm(string_value = "Revenue")]
    Revenue,
    #[sea_orm(string_value = "Expense")]
    Expense,
}

/// One account in the chart of accounts.
///
/// Accounts form a tree through `parent_account_id`. Both grouping nodes and
/// leaves are legal posting targets; the distinction belongs to the posting
/// collaborators, not the reports.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    /// Short human-entered code, unique across the chart.
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    /// Parent in the account tree; None for a root account.
    pub parent_account_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentAccountId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    ParentAccount,
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

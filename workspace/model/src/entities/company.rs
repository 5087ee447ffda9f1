use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

/// A legal entity whose books live in this system.
///
/// Reports currently aggregate across every company; the foreign keys below
/// exist so per-company scoping can be added without a schema change.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub fiscal_year_start: NaiveDate,
    pub fiscal_year_end: NaiveDate,
    /// ISO 4217 currency code, e.g. "USD", "INR".
    pub currency: String,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Account,
    #[sea_orm(has_many = "super::cost_center::Entity")]
    CostCenter,
    #[sea_orm(has_many = "super::journal_entry::Entity")]
    JournalEntry,
    #[sea_orm(has_many = "super::sales_invoice::Entity")]
    SalesInvoice,
    #[sea_orm(has_many = "super::purchase_invoice::Entity")]
    PurchaseInvoice,
    #[sea_orm(has_many = "super::payment_entry::Entity")]
    PaymentEntry,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

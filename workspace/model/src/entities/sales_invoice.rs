use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Sales invoice header. Line items live in `sales_invoice_item`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales_invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    #[sea_orm(unique)]
    pub invoice_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    /// Invoice grand total; this is the figure trend and receivables
    /// reporting aggregate, independent of the line items.
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub total_amount: Decimal,
    pub tax_template_id: Option<i32>,
    pub payment_term_id: Option<i32>,
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
        belongs_to = "super::tax_template::Entity",
        from = "Column::TaxTemplateId",
        to = "super::tax_template::Column::Id",
        on_delete = "SetNull"
    )]
    TaxTemplate,
    #[sea_orm(
        belongs_to = "super::payment_term::Entity",
        from = "Column::PaymentTermId",
        to = "super::payment_term::Column::Id",
        on_delete = "SetNull"
    )]
    PaymentTerm,
    #[sea_orm(has_many = "super::sales_invoice_item::Entity")]
    SalesInvoiceItem,
    #[sea_orm(has_many = "super::payment_entry::Entity")]
    PaymentEntry,
}

impl Related<super::sales_invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesInvoiceItem.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

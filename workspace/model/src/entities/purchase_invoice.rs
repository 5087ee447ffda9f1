use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Purchase invoice header. Line items live in `purchase_invoice_item`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase_invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    #[sea_orm(unique)]
    pub invoice_number: String,
    pub supplier_name: String,
    pub date: NaiveDate,
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
    #[sea_orm(has_many = "super::purchase_invoice_item::Entity")]
    PurchaseInvoiceItem,
}

impl Related<super::purchase_invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseInvoiceItem.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

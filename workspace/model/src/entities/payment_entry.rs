use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A payment received or made.
///
/// `related_invoice_id` links a receipt to the sales invoice it settles.
/// Receivables reporting counts only linked payments; an unapplied receipt
/// does not reduce the outstanding amount.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub payment_date: NaiveDate,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub amount: Decimal,
    pub mode_of_payment_id: Option<i32>,
    pub reference: Option<String>,
    pub related_invoice_id: Option<i32>,
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
        belongs_to = "super::payment_mode::Entity",
        from = "Column::ModeOfPaymentId",
        to = "super::payment_mode::Column::Id",
        on_delete = "SetNull"
    )]
    PaymentMode,
    #[sea_orm(
        belongs_to = "super::sales_invoice::Entity",
        from = "Column::RelatedInvoiceId",
        to = "super::sales_invoice::Column::Id",
        on_delete = "SetNull"
    )]
    RelatedInvoice,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::payment_mode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMode.def()
    }
}

impl Related<super::sales_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelatedInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Inventory item referenced by invoice line items.
///
/// `cost_price` is what gross-profit reporting costs a sold unit at;
/// the invoiced `rate` lives on the line item, not here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub cost_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub sale_price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sales_invoice_item::Entity")]
    SalesInvoiceItem,
    #[sea_orm(has_many = "super::purchase_invoice_item::Entity")]
    PurchaseInvoiceItem,
}

impl Related<super::sales_invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesInvoiceItem.def()
    }
}

impl Related<super::purchase_invoice_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseInvoiceItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

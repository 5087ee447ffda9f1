use sea_orm::entity::prelude::*;

/// How a payment was made (cash, cheque, bank transfer, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_modes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment_entry::Entity")]
    PaymentEntry,
}

impl ActiveModelBehavior for ActiveModel {}

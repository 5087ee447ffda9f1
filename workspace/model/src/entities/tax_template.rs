use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Flat-rate tax template an invoice can reference.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tax_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Percentage rate, e.g. 18.00.
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub tax_rate: Decimal,
    pub tax_category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tax_category::Entity",
        from = "Column::TaxCategoryId",
        to = "super::tax_category::Column::Id",
        on_delete = "Cascade"
    )]
    TaxCategory,
}

impl Related<super::tax_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaxCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

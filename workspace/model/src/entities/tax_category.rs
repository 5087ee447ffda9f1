use sea_orm::entity::prelude::*;

/// Grouping for tax templates (e.g. "GST", "VAT").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tax_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tax_template::Entity")]
    TaxTemplate,
}

impl Related<super::tax_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaxTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_colors::Entity")]
    ProductColors,
    #[sea_orm(has_many = "super::product_sizes::Entity")]
    ProductSizes,
}

impl Related<super::product_colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductColors.def()
    }
}

impl Related<super::product_sizes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSizes.def()
    }
}

impl Related<super::colors::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_colors::Relation::Colors.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_colors::Relation::Products.def().rev())
    }
}

impl Related<super::sizes::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_sizes::Relation::Sizes.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_sizes::Relation::Products.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

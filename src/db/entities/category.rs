use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub name: String,
    #[sea_orm(has_many)]
    pub film_categories: HasMany<super::film_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub film_id: i32,
    pub title: String,
    #[sea_orm(has_many)]
    pub inventory: HasMany<super::inventory::Entity>,
    #[sea_orm(has_many)]
    pub film_categories: HasMany<super::film_category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

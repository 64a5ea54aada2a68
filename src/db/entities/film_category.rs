use sea_orm::entity::prelude::*;

/// Join table between films and categories; a film may sit in several categories.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub film_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
    #[sea_orm(belongs_to, from = "film_id", to = "film_id")]
    pub film: HasOne<super::film::Entity>,
    #[sea_orm(belongs_to, from = "category_id", to = "category_id")]
    pub category: HasOne<super::category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub inventory_id: i32,
    #[sea_orm(indexed)]
    pub film_id: i32,
    #[sea_orm(belongs_to, from = "film_id", to = "film_id")]
    pub film: HasOne<super::film::Entity>,
    #[sea_orm(has_many)]
    pub rentals: HasMany<super::rental::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub rental_id: i32,
    pub rental_date: DateTime,
    #[sea_orm(indexed)]
    pub inventory_id: i32,
    #[sea_orm(indexed)]
    pub customer_id: i32,
    #[sea_orm(belongs_to, from = "inventory_id", to = "inventory_id")]
    pub inventory: HasOne<super::inventory::Entity>,
    #[sea_orm(belongs_to, from = "customer_id", to = "customer_id")]
    pub customer: HasOne<super::customer::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

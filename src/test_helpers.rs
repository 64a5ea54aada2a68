//! Builders shared by unit and integration tests: an in-memory copy of the rental
//! schema and terse helpers to fill it.

use std::sync::Arc;

use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, prelude::Decimal};

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::{
        connection,
        entities::{category, customer, film, film_category, inventory, payment, rental},
    },
    routes::router,
    state::AppState,
};

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    AppState::new(AppConfig::default(), db)
}

pub fn test_router(db: DatabaseConnection) -> Router {
    router(test_state(db))
}

/// Midday on the given calendar day.
pub fn day(year: i32, month: u32, date: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .expect("fixture date should be valid")
}

/// An empty in-memory SQLite database carrying the rental schema.
pub async fn memory_database() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let db = connection::connect(&cfg).await?;
    db.get_schema_registry("sakila_reports::db::entities::*")
        .sync(&db)
        .await?;
    Ok(db)
}

/// Inserts rows with generated keys for inventory, rentals and payments.
pub struct RentalFixture<'a> {
    db: &'a DatabaseConnection,
    next_inventory_id: i32,
    next_rental_id: i32,
    next_payment_id: i32,
}

impl<'a> RentalFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            next_inventory_id: 1,
            next_rental_id: 1,
            next_payment_id: 1,
        }
    }

    pub async fn category(&self, category_id: i32, name: &str) -> Result<(), DbErr> {
        category::Entity::insert(category::ActiveModel {
            category_id: Set(category_id),
            name: Set(name.to_string()),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;
        Ok(())
    }

    pub async fn film(&self, film_id: i32, title: &str, categories: &[i32]) -> Result<(), DbErr> {
        film::Entity::insert(film::ActiveModel {
            film_id: Set(film_id),
            title: Set(title.to_string()),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        for category_id in categories {
            film_category::Entity::insert(film_category::ActiveModel {
                film_id: Set(film_id),
                category_id: Set(*category_id),
                ..Default::default()
            })
            .exec_without_returning(self.db)
            .await?;
        }
        Ok(())
    }

    pub async fn customer(
        &self,
        customer_id: i32,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), DbErr> {
        customer::Entity::insert(customer::ActiveModel {
            customer_id: Set(customer_id),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(None),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;
        Ok(())
    }

    /// Adds one inventory copy of `film_id` and rents it `count` times to `customer_id`.
    pub async fn rentals(
        &mut self,
        film_id: i32,
        customer_id: i32,
        count: usize,
        rental_date: NaiveDateTime,
    ) -> Result<(), DbErr> {
        let inventory_id = self.next_inventory_id;
        self.next_inventory_id += 1;
        inventory::Entity::insert(inventory::ActiveModel {
            inventory_id: Set(inventory_id),
            film_id: Set(film_id),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        for _ in 0..count {
            let rental_id = self.next_rental_id;
            self.next_rental_id += 1;
            rental::Entity::insert(rental::ActiveModel {
                rental_id: Set(rental_id),
                rental_date: Set(rental_date),
                inventory_id: Set(inventory_id),
                customer_id: Set(customer_id),
                ..Default::default()
            })
            .exec_without_returning(self.db)
            .await?;
        }
        Ok(())
    }

    pub async fn payment(&mut self, customer_id: i32, amount: Decimal) -> Result<(), DbErr> {
        let payment_id = self.next_payment_id;
        self.next_payment_id += 1;
        payment::Entity::insert(payment::ActiveModel {
            payment_id: Set(payment_id),
            customer_id: Set(customer_id),
            amount: Set(amount),
            payment_date: Set(day(2005, 5, 25)),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;
        Ok(())
    }
}

use sea_orm::{FromQueryResult, prelude::Decimal};
use serde::Serialize;

/// Q1: the most rented film of one category.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct TopFilmByCategory {
    pub category: String,
    pub title: String,
    pub total_rentals: i64,
}

/// Q2: a customer whose payments add up to more than the per-customer mean.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct AboveAverageSpender {
    pub customer_id: i32,
    pub customer_name: String,
    pub total_spent: Decimal,
}

/// Q3: a film rented more often than the average film of the same category.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct AboveCategoryAverageFilm {
    pub category: String,
    pub title: String,
    pub total_rentals: i64,
}

/// Q4: a customer with rentals in the first calendar quarter and none in the second.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct FirstQuarterOnlyCustomer {
    pub customer_id: i32,
    pub customer_name: String,
}

//! The query layer. Every report is one read-only statement built from named CTE stages;
//! only quarter extraction and name concatenation vary with the backend.

use sea_orm::{ConnectionTrait, FromQueryResult, Statement};
use tracing::debug;

use super::{DaoResult, QueryExecutionError, dialect::Dialect};
use crate::reports::{
    AboveAverageSpender, AboveCategoryAverageFilm, FirstQuarterOnlyCustomer, ReportId, ReportRows,
    TopFilmByCategory,
};

/// Runs `report` on `conn` and returns its complete result set.
pub async fn execute<C>(report: ReportId, conn: &C) -> DaoResult<ReportRows>
where
    C: ConnectionTrait,
{
    ReportDao::new(conn).run(report).await
}

pub struct ReportDao<'c, C> {
    conn: &'c C,
}

impl<'c, C> ReportDao<'c, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    pub async fn run(&self, report: ReportId) -> DaoResult<ReportRows> {
        let rows = match report {
            ReportId::Q1 => {
                ReportRows::TopFilmPerCategory(self.top_rented_film_per_category().await?)
            }
            ReportId::Q2 => {
                ReportRows::AboveAverageSpenders(self.customers_above_average_spend().await?)
            }
            ReportId::Q3 => {
                ReportRows::AboveCategoryAverageFilms(self.films_above_category_average().await?)
            }
            ReportId::Q4 => {
                ReportRows::FirstQuarterOnlyCustomers(self.first_quarter_only_customers().await?)
            }
        };
        Ok(rows)
    }

    pub async fn top_rented_film_per_category(&self) -> DaoResult<Vec<TopFilmByCategory>> {
        self.fetch(ReportId::Q1, top_rented_film_per_category_sql())
            .await
    }

    pub async fn customers_above_average_spend(&self) -> DaoResult<Vec<AboveAverageSpender>> {
        self.fetch(ReportId::Q2, customers_above_average_spend_sql(self.dialect()))
            .await
    }

    pub async fn films_above_category_average(&self) -> DaoResult<Vec<AboveCategoryAverageFilm>> {
        self.fetch(ReportId::Q3, films_above_category_average_sql())
            .await
    }

    pub async fn first_quarter_only_customers(&self) -> DaoResult<Vec<FirstQuarterOnlyCustomer>> {
        self.fetch(ReportId::Q4, first_quarter_only_customers_sql(self.dialect()))
            .await
    }

    fn dialect(&self) -> Dialect {
        Dialect::new(self.conn.get_database_backend())
    }

    async fn fetch<T>(&self, report: ReportId, sql: String) -> DaoResult<Vec<T>>
    where
        T: FromQueryResult,
    {
        debug!(report = %report, "executing report statement");
        let stmt = Statement::from_string(self.conn.get_database_backend(), sql);
        T::find_by_statement(stmt)
            .all(self.conn)
            .await
            .map_err(|source| QueryExecutionError::new(report, source))
    }
}

/// Rental counts per (category, film), shared by Q1 and Q3.
const RENTALS_PER_FILM_CTE: &str = "rentals_per_film AS (
    SELECT c.category_id, c.name AS category, f.film_id, f.title,
           COUNT(r.rental_id) AS total_rentals
    FROM rental r
    JOIN inventory i ON r.inventory_id = i.inventory_id
    JOIN film f ON i.film_id = f.film_id
    JOIN film_category fc ON f.film_id = fc.film_id
    JOIN category c ON fc.category_id = c.category_id
    GROUP BY c.category_id, c.name, f.film_id, f.title
)";

// Ties on the top count go to the lowest film_id.
pub(crate) fn top_rented_film_per_category_sql() -> String {
    format!(
        "WITH {RENTALS_PER_FILM_CTE},
ranked AS (
    SELECT category, title, total_rentals,
           ROW_NUMBER() OVER (
               PARTITION BY category_id
               ORDER BY total_rentals DESC, film_id ASC
           ) AS rn
    FROM rentals_per_film
)
SELECT category, title, total_rentals
FROM ranked
WHERE rn = 1
ORDER BY category"
    )
}

pub(crate) fn customers_above_average_spend_sql(dialect: Dialect) -> String {
    let customer_name = dialect.full_name("c.first_name", "c.last_name");
    format!(
        "WITH customer_totals AS (
    SELECT p.customer_id, SUM(p.amount) AS total_spent
    FROM payment p
    GROUP BY p.customer_id
)
SELECT c.customer_id, {customer_name} AS customer_name, t.total_spent
FROM customer c
JOIN customer_totals t ON t.customer_id = c.customer_id
WHERE t.total_spent > (SELECT AVG(total_spent) FROM customer_totals)
ORDER BY t.total_spent DESC, c.customer_id"
    )
}

pub(crate) fn films_above_category_average_sql() -> String {
    format!(
        "WITH {RENTALS_PER_FILM_CTE},
category_avg AS (
    SELECT category_id, AVG(total_rentals) AS avg_rentals
    FROM rentals_per_film
    GROUP BY category_id
)
SELECT fr.category, fr.title, fr.total_rentals
FROM rentals_per_film fr
JOIN category_avg ca ON fr.category_id = ca.category_id
WHERE fr.total_rentals > ca.avg_rentals
ORDER BY fr.category, fr.total_rentals DESC, fr.title"
    )
}

// A NULL customer_id inside NOT IN would make the predicate unknown for every row.
pub(crate) fn first_quarter_only_customers_sql(dialect: Dialect) -> String {
    let customer_name = dialect.full_name("c.first_name", "c.last_name");
    let first_quarter = dialect.quarter("r.rental_date");
    let second_quarter = dialect.quarter("r2.rental_date");
    format!(
        "SELECT DISTINCT c.customer_id, {customer_name} AS customer_name
FROM customer c
JOIN rental r ON r.customer_id = c.customer_id
WHERE {first_quarter} = 1
  AND c.customer_id NOT IN (
      SELECT r2.customer_id
      FROM rental r2
      WHERE {second_quarter} = 2
        AND r2.customer_id IS NOT NULL
  )
ORDER BY c.customer_id"
    )
}

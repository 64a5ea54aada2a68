//! The four canned reports: identifiers, their typed rows, and positional rendering.

mod rows;

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

pub use rows::{
    AboveAverageSpender, AboveCategoryAverageFilm, FirstQuarterOnlyCustomer, TopFilmByCategory,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportId {
    Q1,
    Q2,
    Q3,
    Q4,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportIdError {
    #[error("unknown report '{0}'; expected one of q1, q2, q3, q4")]
    UnknownReport(String),
}

impl ReportId {
    pub const ALL: [ReportId; 4] = [ReportId::Q1, ReportId::Q2, ReportId::Q3, ReportId::Q4];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportId::Q1 => "q1",
            ReportId::Q2 => "q2",
            ReportId::Q3 => "q3",
            ReportId::Q4 => "q4",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportId::Q1 => "Most rented film per category",
            ReportId::Q2 => "Customers spending above the average",
            ReportId::Q3 => "Films rented more than their category average",
            ReportId::Q4 => "Customers who rented only in the first quarter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportId::Q1 => "For every category, the title with the most rentals.",
            ReportId::Q2 => {
                "Customers whose total payments exceed the average total across all paying customers."
            }
            ReportId::Q3 => "Titles whose rental count beats the mean of their own category.",
            ReportId::Q4 => "Customers with rentals in Q1 (Jan-Mar) but none in Q2 (Apr-Jun).",
        }
    }

    /// Extra remark shown next to the report, if any.
    pub fn note(self) -> Option<&'static str> {
        match self {
            ReportId::Q4 => Some(
                "The stock dataset may contain no customer that matches; an empty table is a valid answer.",
            ),
            _ => None,
        }
    }

    /// Column headers, in the same order as [`ReportRows::cells`].
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ReportId::Q1 | ReportId::Q3 => &["Category", "Title", "Total rentals"],
            ReportId::Q2 => &["Customer ID", "Name", "Total spent"],
            ReportId::Q4 => &["Customer ID", "Full name"],
        }
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportId {
    type Err = ReportIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ReportId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ReportIdError::UnknownReport(value.trim().to_string()))
    }
}

/// The result set of one report run, typed per report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", content = "rows")]
pub enum ReportRows {
    #[serde(rename = "q1")]
    TopFilmPerCategory(Vec<TopFilmByCategory>),
    #[serde(rename = "q2")]
    AboveAverageSpenders(Vec<AboveAverageSpender>),
    #[serde(rename = "q3")]
    AboveCategoryAverageFilms(Vec<AboveCategoryAverageFilm>),
    #[serde(rename = "q4")]
    FirstQuarterOnlyCustomers(Vec<FirstQuarterOnlyCustomer>),
}

impl ReportRows {
    pub fn report_id(&self) -> ReportId {
        match self {
            ReportRows::TopFilmPerCategory(_) => ReportId::Q1,
            ReportRows::AboveAverageSpenders(_) => ReportId::Q2,
            ReportRows::AboveCategoryAverageFilms(_) => ReportId::Q3,
            ReportRows::FirstQuarterOnlyCustomers(_) => ReportId::Q4,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportRows::TopFilmPerCategory(rows) => rows.len(),
            ReportRows::AboveAverageSpenders(rows) => rows.len(),
            ReportRows::AboveCategoryAverageFilms(rows) => rows.len(),
            ReportRows::FirstQuarterOnlyCustomers(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders every row as display strings, positionally matching [`ReportId::columns`].
    pub fn cells(&self) -> Vec<Vec<String>> {
        match self {
            ReportRows::TopFilmPerCategory(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        row.category.clone(),
                        row.title.clone(),
                        row.total_rentals.to_string(),
                    ]
                })
                .collect(),
            ReportRows::AboveAverageSpenders(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        row.customer_id.to_string(),
                        row.customer_name.clone(),
                        format!("{:.2}", row.total_spent),
                    ]
                })
                .collect(),
            ReportRows::AboveCategoryAverageFilms(rows) => rows
                .iter()
                .map(|row| {
                    vec![
                        row.category.clone(),
                        row.title.clone(),
                        row.total_rentals.to_string(),
                    ]
                })
                .collect(),
            ReportRows::FirstQuarterOnlyCustomers(rows) => rows
                .iter()
                .map(|row| vec![row.customer_id.to_string(), row.customer_name.clone()])
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::prelude::Decimal;

    use super::{
        AboveAverageSpender, FirstQuarterOnlyCustomer, ReportId, ReportIdError, ReportRows,
        TopFilmByCategory,
    };

    #[test]
    fn parses_known_ids_case_insensitively() {
        assert_eq!("q1".parse::<ReportId>(), Ok(ReportId::Q1));
        assert_eq!(" Q3 ".parse::<ReportId>(), Ok(ReportId::Q3));
        assert_eq!("q4".parse::<ReportId>().map(|id| id.to_string()), Ok("q4".to_string()));
    }

    #[test]
    fn rejects_ids_outside_the_closed_set() {
        assert_eq!(
            "q5".parse::<ReportId>(),
            Err(ReportIdError::UnknownReport("q5".to_string()))
        );
        assert!("".parse::<ReportId>().is_err());
        assert!("q1; drop table film".parse::<ReportId>().is_err());
    }

    #[test]
    fn every_report_declares_headers() {
        for id in ReportId::ALL {
            assert!(!id.columns().is_empty(), "{id} has no columns");
            assert!(!id.title().is_empty());
        }
        assert_eq!(ReportId::Q4.columns().len(), 2);
        assert!(ReportId::Q4.note().is_some());
        assert!(ReportId::Q1.note().is_none());
    }

    #[test]
    fn cells_follow_column_order() {
        let rows = ReportRows::TopFilmPerCategory(vec![TopFilmByCategory {
            category: "Action".to_string(),
            title: "A".to_string(),
            total_rentals: 10,
        }]);

        assert_eq!(rows.report_id(), ReportId::Q1);
        assert_eq!(rows.cells(), vec![vec!["Action", "A", "10"]]);
        assert_eq!(rows.cells()[0].len(), ReportId::Q1.columns().len());
    }

    #[test]
    fn money_is_rendered_with_two_decimals() {
        let rows = ReportRows::AboveAverageSpenders(vec![
            AboveAverageSpender {
                customer_id: 148,
                customer_name: "ELEANOR HUNT".to_string(),
                total_spent: Decimal::new(21655, 2),
            },
            AboveAverageSpender {
                customer_id: 526,
                customer_name: "KARL SEAL".to_string(),
                total_spent: Decimal::new(2215, 1),
            },
        ]);

        let cells = rows.cells();
        assert_eq!(cells[0][2], "216.55");
        assert_eq!(cells[1][2], "221.50");
    }

    #[test]
    fn empty_result_is_reported_as_empty() {
        let rows = ReportRows::FirstQuarterOnlyCustomers(Vec::<FirstQuarterOnlyCustomer>::new());

        assert!(rows.is_empty());
        assert_eq!(rows.len(), 0);
        assert!(rows.cells().is_empty());
    }

    #[test]
    fn serializes_with_report_tag() {
        let rows = ReportRows::FirstQuarterOnlyCustomers(vec![FirstQuarterOnlyCustomer {
            customer_id: 7,
            customer_name: "MARIA MILLER".to_string(),
        }]);

        let json = serde_json::to_value(&rows).expect("rows should serialize");

        assert_eq!(json["report"], "q4");
        assert_eq!(json["rows"][0]["customer_id"], 7);
        assert_eq!(json["rows"][0]["customer_name"], "MARIA MILLER");
    }
}

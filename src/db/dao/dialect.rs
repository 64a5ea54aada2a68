use sea_orm::DbBackend;

/// The few SQL fragments that differ between the supported backends.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dialect(DbBackend);

impl Dialect {
    pub(crate) fn new(backend: DbBackend) -> Self {
        Self(backend)
    }

    /// Calendar quarter (1-4) of a date or timestamp column.
    pub(crate) fn quarter(self, column: &str) -> String {
        match self.0 {
            DbBackend::Sqlite => format!("((CAST(strftime('%m', {column}) AS INTEGER) + 2) / 3)"),
            _ => format!("EXTRACT(QUARTER FROM {column})"),
        }
    }

    /// `first last`, joined by a single space.
    pub(crate) fn full_name(self, first: &str, last: &str) -> String {
        format!("{first} || ' ' || {last}")
    }
}

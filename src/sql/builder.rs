//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a table descriptor.

use super::Table;

/// Quote identifier for PostgreSQL. `user` and `transaction` are reserved words.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Primary key first, then the remaining columns in row order.
fn select_column_list(table: &Table) -> String {
    std::iter::once(table.pk)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every row, ordered by primary key.
pub fn select_all(table: &Table) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk)
    )
}

/// Rows whose `column` equals $1, ordered by primary key.
pub fn select_where(table: &Table, column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        quoted(table.pk)
    )
}

/// Highest `column` first, ties by primary key, at most $1 rows.
pub fn select_top(table: &Table, column: &str) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} DESC, {} ASC LIMIT $1",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        quoted(table.pk)
    )
}

/// INSERT of `insert_columns()` as $1..$n, returning the stored row.
pub fn insert(table: &Table) -> String {
    let cols: Vec<String> = table.insert_columns().map(quoted).collect();
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    )
}

/// `column = column + $1` for the row whose primary key is $2. Single statement, so
/// concurrent increments serialize on the row lock.
pub fn increment(table: &Table, column: &str) -> String {
    let col = quoted(column);
    format!(
        "UPDATE {} SET {} = {} + $1 WHERE {} = $2",
        quoted(table.name),
        col,
        col,
        quoted(table.pk)
    )
}

/// `column = $1` for the row whose primary key is $2.
pub fn set_column(table: &Table, column: &str) -> String {
    format!(
        "UPDATE {} SET {} = $1 WHERE {} = $2",
        quoted(table.name),
        quoted(column),
        quoted(table.pk)
    )
}

/// DELETE by primary key ($1).
pub fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table.name), quoted(table.pk))
}

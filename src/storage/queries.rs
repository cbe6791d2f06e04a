//! Statement catalog for the `visitors` table.
//!
//! Parameters bound as text are cast explicitly where the column is typed
//! (`DATE`, `TIME`, `INT`), so string input reaches the column unchanged.

use crate::domain::VisitorColumn;

pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS visitors (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    age INT NOT NULL,
    date_of_visit DATE NOT NULL,
    time_of_visit TIME NOT NULL,
    assistant TEXT NOT NULL,
    comments TEXT NOT NULL
)";

pub const ADD_NEW_VISITOR: &str = "INSERT INTO visitors
    (name, age, date_of_visit, time_of_visit, assistant, comments)
    VALUES ($1, $2::int, $3::date, $4::time, $5, $6)
    RETURNING *";

pub const LIST_ALL_VISITORS: &str = "SELECT id, name FROM visitors ORDER BY id";

pub const VIEW_VISITOR: &str = "SELECT * FROM visitors WHERE id = $1";

pub const VIEW_LAST_VISITOR: &str = "SELECT * FROM visitors ORDER BY id DESC LIMIT 1";

pub const DELETE_VISITOR: &str = "DELETE FROM visitors WHERE id = $1";

pub const DELETE_ALL_VISITORS: &str = "DELETE FROM visitors";

pub const PING: &str = "SELECT 1";

/// Single-column update by id; parameters are `(new_value, id)`.
pub fn update_visitor(column: VisitorColumn) -> &'static str {
    match column {
        VisitorColumn::Name => "UPDATE visitors SET name = $1::text WHERE id = $2",
        VisitorColumn::Age => "UPDATE visitors SET age = $1::int WHERE id = $2",
        VisitorColumn::DateOfVisit => "UPDATE visitors SET date_of_visit = $1::date WHERE id = $2",
        VisitorColumn::TimeOfVisit => "UPDATE visitors SET time_of_visit = $1::time WHERE id = $2",
        VisitorColumn::Assistant => "UPDATE visitors SET assistant = $1::text WHERE id = $2",
        VisitorColumn::Comments => "UPDATE visitors SET comments = $1::text WHERE id = $2",
    }
}

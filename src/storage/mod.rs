pub mod executor;
pub mod postgres;
pub mod queries;

pub use executor::{QueryExecutor, QueryResult};
pub use postgres::PgExecutor;

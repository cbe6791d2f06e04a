pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::visitor_repository::VisitorRepository;
pub use domain::{
    validate, NewVisitor, ValidationError, Visitor, VisitorColumn, VisitorError, VisitorInput,
    VisitorResult, VisitorSummary,
};
pub use storage::{PgExecutor, QueryExecutor, QueryResult};

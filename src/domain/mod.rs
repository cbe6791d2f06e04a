//! Domain model: visitor records, their validation, and the error taxonomy.

pub mod error;
pub mod validate;
pub mod visitor;

pub use error::{ValidationError, VisitorError, VisitorResult};
pub use validate::validate;
pub use visitor::{NewVisitor, Visitor, VisitorColumn, VisitorInput, VisitorSummary};

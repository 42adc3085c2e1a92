//! Report generation core
//!
//! The one piece of real logic in the service: variance percentages and
//! report assembly. Ingestion sits behind [`SalesDataSource`] so spreadsheet
//! parsing can replace the simulated rows without touching the assembler.
//!
//! All revenue arithmetic runs on `Decimal` internally and converts to `f64`
//! only at the serialization boundary.

pub mod assembler;
pub mod money;
pub mod source;
pub mod variance;

pub use assembler::generate_report;
pub use money::{to_decimal, to_f64};
pub use source::{ReportError, SalesDataSource, SimulatedSalesSource, UploadBatch};
pub use variance::{NO_CHANGE, NOT_APPLICABLE, variance_percentage};

#[cfg(test)]
mod tests;

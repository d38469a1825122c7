pub mod dietary;
pub mod hydration;
pub mod meal;
pub mod nutrition;
mod store;

pub use store::{create, Error, FileReportStore, MockReportStore, ReportStore, Result};

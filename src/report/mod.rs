// src/report/mod.rs
// =============================================================================
// Aggregation and reporting.
//
// Submodules:
// - results: the shared, mutex-guarded ResultSet every producer writes into
// - output: text/JSON rendering, printing and saving to a file
// =============================================================================

mod output;
mod results;

pub use output::{display, persist, ReportFormat};
pub use results::{EmailResults, ResultSet};

//! What commands print once they are done.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, ModelSummary};
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};

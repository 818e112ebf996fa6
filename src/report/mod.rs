pub mod error;
pub mod station;
pub mod summary_csv;
pub mod variable;

pub use error::ReportError;
pub use station::StationReport;
pub use summary_csv::read_summary_csv;
pub use variable::VariableReport;

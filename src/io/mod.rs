pub mod input;
pub mod output;

pub use input::read_table;
pub use output::{create_writer, OutputFormat, ReportWriter};

pub mod csv_parser;

pub use csv_parser::{CsvCourseParser, Parser};

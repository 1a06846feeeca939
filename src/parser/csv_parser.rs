// Course-listing CSV parsing
use crate::model::{ParserError, SourceRow};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub const REQUIRED_COLUMNS: [&str; 3] = ["course", "title", "fall_2023_attribute"];

pub trait Parser {
    fn parse_reader<R: Read>(&self, reader: R) -> Result<Vec<SourceRow>, ParserError>;

    fn parse_file(&self, path: &Path) -> Result<Vec<SourceRow>, ParserError> {
        if !path.exists() {
            return Err(ParserError::NotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        self.parse_reader(file)
    }
}

pub struct CsvCourseParser;

impl CsvCourseParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CsvCourseParser {
    fn parse_reader<R: Read>(&self, reader: R) -> Result<Vec<SourceRow>, ParserError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(ParserError::MissingColumns(missing));
        }

        let column = |name: &str| headers.iter().position(|h| h == name).unwrap_or(usize::MAX);
        let (course, title, attribute) = (
            column("course"),
            column("title"),
            column("fall_2023_attribute"),
        );

        // Short rows leave their trailing cells empty
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
            rows.push(SourceRow {
                course: cell(course),
                title: cell(title),
                fall_2023_attribute: cell(attribute),
            });
        }
        info!("Read {} rows from CSV", rows.len());
        Ok(rows)
    }
}

mod file;
mod stdin;

pub use file::CsvSource;
pub use stdin::StdinSource;

use csv::{Reader, ReaderBuilder};

use crate::error::{Error, Result};

pub type Records = Box<dyn Iterator<Item = Result<String>>>;

/// Batch input: one credential per CSV row, first column only.
pub trait Source {
    fn name(&self) -> &str;
    fn records(&self) -> Result<Records>;
}

pub fn parse(spec: &str) -> Box<dyn Source> {
    if spec == "-" {
        Box::new(StdinSource::new())
    } else {
        Box::new(CsvSource::new(spec))
    }
}

/// No header row. Rows must keep the field count of the first row. A stray
/// quote inside an unquoted field is kept as a literal character.
fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(false);
    builder
}

fn first_column<R: std::io::Read + 'static>(reader: Reader<R>, name: String) -> Records {
    Box::new(reader.into_records().map(move |record| {
        record
            .map(|r| r.get(0).unwrap_or_default().to_string())
            .map_err(|source| Error::Input {
                name: name.clone(),
                source,
            })
    }))
}

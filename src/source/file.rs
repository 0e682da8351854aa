use std::path::{Path, PathBuf};

use super::{first_column, reader_builder, Records, Source};
use crate::error::{Error, Result};

pub struct CsvSource {
    path: PathBuf,
    name: String,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Source for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Result<Records> {
        let reader = reader_builder()
            .from_path(&self.path)
            .map_err(|source| Error::Input {
                name: self.name.clone(),
                source,
            })?;
        Ok(first_column(reader, self.name.clone()))
    }
}

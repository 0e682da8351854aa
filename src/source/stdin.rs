use std::io;

use super::{first_column, reader_builder, Records, Source};
use crate::error::Result;

pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn records(&self) -> Result<Records> {
        let reader = reader_builder().from_reader(io::stdin());
        Ok(first_column(reader, self.name().to_string()))
    }
}

//! Results file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::DorkError;
use crate::models::ResultLink;

/// The flat results file, one `"<index>. <link>"` line per result
#[derive(Debug)]
pub struct ResultsFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ResultsFile {
    /// Create the file, truncating anything left from a previous run
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DorkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| DorkError::FileCreate {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Created results file");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Append one result line
    pub fn write_link(&mut self, link: &ResultLink) -> Result<(), DorkError> {
        writeln!(self.writer, "{}", link).map_err(|source| self.write_error(source))
    }

    /// Flush buffered lines and close the file
    pub fn finish(mut self) -> Result<PathBuf, DorkError> {
        self.writer
            .flush()
            .map_err(|source| self.write_error(source))?;
        Ok(self.path)
    }

    fn write_error(&self, source: std::io::Error) -> DorkError {
        DorkError::FileWrite {
            path: self.path.clone(),
            source,
        }
    }
}

//! Handle on the PDF being processed.

use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Output stem used when the input has no usable file name.
pub const FALLBACK_STEM: &str = "statement";

/// A PDF on disk for the duration of a run. Uploaded content is held in a
/// uniquely named temporary file, removed when the handle is dropped.
#[derive(Debug)]
pub enum InputDocument {
    Path(PathBuf),
    Temporary(tempfile::NamedTempFile),
}

impl InputDocument {
    pub fn from_path(path: PathBuf) -> Self {
        Self::Path(path)
    }

    /// Copies the whole of `reader` into a new temporary file.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("stmtable-")
            .suffix(".pdf")
            .tempfile()
            .context("creating temporary file for input PDF")?;
        let size = io::copy(&mut reader, &mut file).context("copying input PDF")?;
        file.flush().context("flushing input PDF")?;
        log::debug!("Copied {size} bytes of input PDF to {:?}", file.path());
        Ok(Self::Temporary(file))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Temporary(file) => file.path(),
        }
    }

    /// The input's file name up to its first `.`, for naming the output.
    pub fn output_stem(&self) -> String {
        let Self::Path(path) = self else {
            return FALLBACK_STEM.to_string();
        };
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(FALLBACK_STEM)
            .to_string()
    }
}

//! Optional YAML configuration for a run.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use serde_derive::Deserialize;
use statement::{config::AssemblyConfig, variant::PreprocessVariant};

use crate::provider::StreamTolerances;

/// Every key is optional, falling back to the defaults.
///
/// ```yaml
/// variant: hsbc1
/// tolerances:
///   row: 4.0
/// assembly:
///   boilerplate_markers:
///     - "Balance carried forward"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub variant: PreprocessVariant,
    pub tolerances: StreamTolerances,
    pub assembly: AssemblyConfig,
}

pub fn parse_config<R: Read>(reader: R) -> Result<RunConfig> {
    serde_yaml_ng::from_reader(reader).context("parsing run configuration")
}

pub fn load_config(path: &Path) -> Result<RunConfig> {
    let file =
        File::open(path).with_context(|| format!("opening run configuration {path:?}"))?;
    parse_config(file).with_context(|| format!("loading run configuration {path:?}"))
}

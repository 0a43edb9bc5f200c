use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;

pub mod checksums;
pub mod coordinates;
pub mod maven1_parser;
pub mod maven2_parser;
pub mod paths;

use crate::maven::coordinates::MavenPath;

/// The directory conventions of a Maven repository. A repository uses exactly one of them, so
///  callers pick the parser by layout rather than trying both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RepositoryLayout {
    /// "legacy": `<groupId>/<type>s/<artifactId>-<version>.<extension>`
    Maven1,
    /// "default": `<groupId with '/' for '.'>/<artifactId>/<version>/<artifactId>-<version>[-<classifier>].<extension>`
    #[default]
    Maven2,
}
impl RepositoryLayout {
    /// None if the path is neither an artifact nor maven metadata in this layout
    pub fn parse(self, path: &str) -> Option<MavenPath> {
        match self {
            RepositoryLayout::Maven1 => maven1_parser::parse_maven1_path(path),
            RepositoryLayout::Maven2 => maven2_parser::parse_maven2_path(path),
        }
    }
}

impl FromStr for RepositoryLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<RepositoryLayout> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "maven1" | "legacy" => Ok(RepositoryLayout::Maven1),
            "2" | "maven2" | "default" => Ok(RepositoryLayout::Maven2),
            _ => Err(anyhow!("unknown repository layout {:?} - expected 'maven1' or 'maven2'", s)),
        }
    }
}

impl Display for RepositoryLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryLayout::Maven1 => f.write_str("maven1"),
            RepositoryLayout::Maven2 => f.write_str("maven2"),
        }
    }
}

//! Style bundle composition
//!
//! Style sheets are concatenated verbatim in walk order, each followed by a
//! newline.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bundle::FileSet;
use crate::config::{ProjectLayout, STYLE_EXTENSION};
use crate::error::{Result, fs::read_failed};
use crate::stream::{copy_source, write_fragment};
use crate::walker::walk_files;

/// Discovered inputs of one style bundle
#[derive(Debug, Clone, Default)]
pub struct StyleSources {
    files: Vec<PathBuf>,
}

impl StyleSources {
    pub fn discover(root: &Path) -> Result<Self> {
        Ok(Self {
            files: walk_files(root, STYLE_EXTENSION)?,
        })
    }

    pub fn from_layout(layout: &ProjectLayout) -> Result<Self> {
        Self::discover(&layout.app_styles)
    }

    pub fn file_set(&self) -> FileSet {
        FileSet::new(self.files.clone())
    }

    /// Concatenate every style sheet into `out`
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for path in &self.files {
            let mut file = File::open(path).map_err(|e| read_failed(path, e))?;
            copy_source(path, &mut file, out)?;
            write_fragment(out, b"\n")?;
        }
        Ok(())
    }
}

/// Discover and compose the style bundle of a project into `out`
pub fn compose_styles<W>(layout: &ProjectLayout, out: &mut W) -> Result<FileSet>
where
    W: Write + ?Sized,
{
    let sources = StyleSources::from_layout(layout)?;
    sources.write_to(out)?;
    Ok(sources.file_set())
}

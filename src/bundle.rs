//! Script bundle composition
//!
//! A script bundle is written in three parts:
//! 1. every vendor script verbatim, each followed by a newline;
//! 2. the loader runtime;
//! 3. one `require.register` fragment per app module.
//!
//! Vendor code comes first so it never depends on the loader, and the loader
//! precedes every registration that needs it. Output is streamed file by file;
//! the first open, read or write failure aborts the composition.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{ProjectLayout, SCRIPT_EXTENSION};
use crate::encoder::write_module;
use crate::error::{Result, fs::read_failed};
use crate::module_id::module_id_for;
use crate::runtime::LOADER_RUNTIME;
use crate::stream::{copy_source, write_fragment};
use crate::walker::walk_files;

/// Files that contributed to one build, in the order they were emitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<PathBuf>,
}

impl FileSet {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    #[cfg(test)]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl fmt::Display for FileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", file.display())?;
        }
        write!(f, "]")
    }
}

/// An app script and the identifier it registers under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppModule {
    pub id: String,
    pub path: PathBuf,
}

/// Discovered inputs of one script bundle
#[derive(Debug, Clone, Default)]
pub struct ScriptSources {
    vendor: Vec<PathBuf>,
    modules: Vec<AppModule>,
}

impl ScriptSources {
    /// Walk the vendor and app roots.
    ///
    /// Either root may be missing. When two app files map to the same module
    /// identifier both are kept; the later registration wins at runtime.
    pub fn discover(vendor_root: &Path, app_root: &Path) -> Result<Self> {
        let vendor = walk_files(vendor_root, SCRIPT_EXTENSION)?;

        let mut seen = HashSet::new();
        let mut modules = Vec::new();
        for path in walk_files(app_root, SCRIPT_EXTENSION)? {
            let relative = path.strip_prefix(app_root).unwrap_or(path.as_path());
            let id = module_id_for(relative, SCRIPT_EXTENSION);
            if !seen.insert(id.clone()) {
                warn!(
                    module = %id,
                    path = %path.display(),
                    "duplicate module id, last registration wins"
                );
            }
            modules.push(AppModule { id, path });
        }

        debug!(
            vendor = vendor.len(),
            modules = modules.len(),
            "discovered script sources"
        );
        Ok(Self { vendor, modules })
    }

    /// Discover the script sources of a project
    pub fn from_layout(layout: &ProjectLayout) -> Result<Self> {
        Self::discover(&layout.vendor_scripts, &layout.app_scripts)
    }

    #[cfg(test)]
    pub fn vendor(&self) -> &[PathBuf] {
        &self.vendor
    }

    #[cfg(test)]
    pub fn modules(&self) -> &[AppModule] {
        &self.modules
    }

    /// Vendor files followed by app files, in emission order
    pub fn file_set(&self) -> FileSet {
        let files = self
            .vendor
            .iter()
            .cloned()
            .chain(self.modules.iter().map(|m| m.path.clone()))
            .collect();
        FileSet::new(files)
    }

    /// Compose the bundle into `out`
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for path in &self.vendor {
            let mut file = File::open(path).map_err(|e| read_failed(path, e))?;
            copy_source(path, &mut file, out)?;
            write_fragment(out, b"\n")?;
        }

        write_fragment(out, LOADER_RUNTIME.as_bytes())?;

        for module in &self.modules {
            write_module(&module.id, &module.path, out)?;
        }

        Ok(())
    }
}

/// Discover and compose the script bundle of a project into `out`.
///
/// Returns the files that went into the bundle.
pub fn compose_scripts<W>(layout: &ProjectLayout, out: &mut W) -> Result<FileSet>
where
    W: Write + ?Sized,
{
    let sources = ScriptSources::from_layout(layout)?;
    sources.write_to(out)?;
    Ok(sources.file_set())
}

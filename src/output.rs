//! Static build output
//!
//! Writes `index.html`, `index.js` and `index.css` into the output directory.
//! Each artifact is composed into a temporary file next to its destination and
//! renamed into place only once composition succeeds, so a failed build never
//! leaves a truncated artifact behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::bundle::{FileSet, compose_scripts};
use crate::config::{INDEX_CSS_FILE, INDEX_HTML_FILE, INDEX_JS_FILE, ProjectLayout};
use crate::error::{
    Result,
    fs::{output_failed, write_failed},
};
use crate::runtime::INDEX_HTML;
use crate::styles::compose_styles;

/// Mode of written artifacts on unix
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// What one build wrote and what went into it
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub index_html: PathBuf,
    pub index_js: PathBuf,
    pub index_css: PathBuf,
    pub script_files: FileSet,
    pub style_files: FileSet,
}

/// Compose an artifact named `name` inside `dir` through `compose`.
///
/// The destination is only replaced when `compose` succeeds.
pub fn write_artifact<T, F>(dir: &Path, name: &str, compose: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> Result<T>,
{
    let destination = dir.join(name);
    let temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(&destination, e))?;

    let mut writer = BufWriter::new(temp);
    let value = compose(&mut writer)?;
    writer.flush().map_err(output_failed)?;

    let temp = writer
        .into_inner()
        .map_err(|e| write_failed(&destination, e.error()))?;
    publish_permissions(temp.path()).map_err(|e| write_failed(&destination, e))?;
    temp.persist(&destination)
        .map_err(|e| write_failed(&destination, e.error))?;

    Ok(value)
}

/// Temp files are created owner-only; artifacts must be readable by whoever
/// serves the output directory.
#[cfg(unix)]
fn publish_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(ARTIFACT_MODE))
}

#[cfg(not(unix))]
fn publish_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Run a one-shot build of `layout` into its output directory
pub fn build(layout: &ProjectLayout) -> Result<BuildOutput> {
    info!("building compiled application");
    let dir = &layout.output_dir;
    fs::create_dir_all(dir).map_err(|e| write_failed(dir, e))?;

    write_artifact(dir, INDEX_HTML_FILE, |out| {
        out.write_all(INDEX_HTML.as_bytes()).map_err(output_failed)
    })?;

    let script_files = write_artifact(dir, INDEX_JS_FILE, |out| compose_scripts(layout, out))?;
    debug!(files = %script_files, "composed {}", INDEX_JS_FILE);

    let style_files = write_artifact(dir, INDEX_CSS_FILE, |out| compose_styles(layout, out))?;
    debug!(files = %style_files, "composed {}", INDEX_CSS_FILE);

    Ok(BuildOutput {
        index_html: dir.join(INDEX_HTML_FILE),
        index_js: dir.join(INDEX_JS_FILE),
        index_css: dir.join(INDEX_CSS_FILE),
        script_files,
        style_files,
    })
}

//! Build command implementation

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::ProjectLayout;
use crate::error::Result;
use crate::output;

/// Run build command
pub fn run(root: Option<PathBuf>) -> Result<()> {
    let layout = ProjectLayout::from_root(root)?;
    let built = output::build(&layout)?;

    if built.script_files.is_empty() && built.style_files.is_empty() {
        warn!("no scripts or styles found");
    }
    for artifact in [&built.index_html, &built.index_js, &built.index_css] {
        debug!("wrote {}", artifact.display());
    }

    info!(
        scripts = built.script_files.len(),
        styles = built.style_files.len(),
        "wrote {}",
        layout.output_dir.display()
    );
    Ok(())
}

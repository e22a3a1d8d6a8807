//! Project layout
//!
//! Sources and outputs live at fixed locations under a project root:
//!
//! | Role    | Directory        | Extension |
//! |---------|------------------|-----------|
//! | vendor  | `vendor/scripts` | `js`      |
//! | app     | `app/scripts`    | `js`      |
//! | styles  | `app/styles`     | `css`     |
//! | output  | `public`         |           |

use std::path::{Path, PathBuf};

use crate::error::{Result, fs::read_failed};

/// Extension of script sources
pub const SCRIPT_EXTENSION: &str = "js";

/// Extension of style sources
pub const STYLE_EXTENSION: &str = "css";

/// Output file names inside the output directory
pub const INDEX_HTML_FILE: &str = "index.html";
pub const INDEX_JS_FILE: &str = "index.js";
pub const INDEX_CSS_FILE: &str = "index.css";

/// Default port of the development server
pub const DEFAULT_PORT: u16 = 3333;

/// Default bind address of the development server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Resolved source and output locations for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub vendor_scripts: PathBuf,
    pub app_scripts: PathBuf,
    pub app_styles: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectLayout {
    /// Standard layout rooted at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            vendor_scripts: root.join("vendor").join("scripts"),
            app_scripts: root.join("app").join("scripts"),
            app_styles: root.join("app").join("styles"),
            output_dir: root.join("public"),
        }
    }

    /// Layout rooted at `root`, or at the current directory when `root` is `None`.
    ///
    /// The root is made absolute so file sets report absolute paths.
    pub fn from_root(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let root = std::path::absolute(&root).map_err(|e| read_failed(&root, e))?;
        Ok(Self::new(&root))
    }
}

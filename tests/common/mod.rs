//! Common test utilities for assetpipe integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A scratch project with the standard source layout
pub struct TestProject {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write an app module under `app/scripts`
    #[allow(dead_code)]
    pub fn app_module(&self, name: &str, content: &str) {
        self.write_file(&format!("app/scripts/{name}"), content);
    }

    /// Write a vendor script under `vendor/scripts`
    #[allow(dead_code)]
    pub fn vendor_script(&self, name: &str, content: &str) {
        self.write_file(&format!("vendor/scripts/{name}"), content);
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Command running the real assetpipe binary against `root`
#[allow(deprecated)]
pub fn assetpipe_cmd(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("assetpipe").expect("binary should be built");
    cmd.arg("--root").arg(root);
    cmd
}

/// Whether a `node` executable is on PATH
#[allow(dead_code)]
pub fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Evaluate `bundle` under node the way a page would, then run `script`.
///
/// `window` is aliased to the global object before the bundle runs. Returns
/// `(success, stdout, stderr)`.
#[allow(dead_code)]
pub fn eval_bundle(bundle: &Path, script: &str) -> (bool, String, String) {
    let harness = format!(
        "const vm = require('vm');\n\
         const fs = require('fs');\n\
         globalThis.window = globalThis;\n\
         vm.runInThisContext(fs.readFileSync(process.argv[1], 'utf8'), {{ filename: 'index.js' }});\n\
         vm.runInThisContext({script:?});\n"
    );
    let output = Command::new("node")
        .arg("-e")
        .arg(harness)
        .arg(bundle)
        .output()
        .expect("Failed to run node");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

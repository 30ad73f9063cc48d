//! Binary entry point for `update-manifest-version-unconditional`.

use std::process;
use version_stamp::Tool;

fn main() {
    if let Err(e) = version_stamp::run(Tool::UnconditionalManifestVersion) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

//! Binary entry point for `update-manifest-version`.

use std::process;
use version_stamp::Tool;

fn main() {
    if let Err(e) = version_stamp::run(Tool::ManifestVersion) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

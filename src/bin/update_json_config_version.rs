//! Binary entry point for `update-json-config-version`.

use std::process;
use version_stamp::Tool;

fn main() {
    if let Err(e) = version_stamp::run(Tool::JsonConfigVersion) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

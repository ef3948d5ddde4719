//! Environment override for Settings.
//!
//! Kept in its own test binary: it mutates the process environment.

use std::env;
use std::fs;

use tempfile::TempDir;

use msgtree::config::{ColorMode, Settings};

#[test]
fn given_msgtree_color_env_when_load_then_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("msgtree.toml");
    fs::write(&path, "color = \"never\"\n").unwrap();

    env::set_var("MSGTREE_COLOR", "always");
    let with_file = Settings::load_from(Some(&path));
    let without_file = Settings::load_from(None);
    env::remove_var("MSGTREE_COLOR");

    assert_eq!(with_file.expect("load").color, ColorMode::Always);
    assert_eq!(without_file.expect("load").color, ColorMode::Always);
}

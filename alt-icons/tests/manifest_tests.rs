#![allow(clippy::unwrap_used)]
//! Every `<key>.workspace = true` package field must be defined by the workspace root.

use std::fs;
use std::path::Path;

fn workspace_package_section(root_manifest: &str) -> &str {
    let start = root_manifest.find("[workspace.package]").unwrap();
    let rest = &root_manifest[start + "[workspace.package]".len()..];
    rest.find("\n[").map_or(rest, |end| &rest[..end])
}

fn package_section(manifest: &str) -> &str {
    let start = manifest.find("[package]").unwrap();
    let rest = &manifest[start + "[package]".len()..];
    rest.find("\n[").map_or(rest, |end| &rest[..end])
}

#[test]
fn inherited_package_fields_exist_in_workspace() {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
    let root = fs::read_to_string(crate_dir.parent().unwrap().join("Cargo.toml")).unwrap();

    let defined: Vec<&str> = workspace_package_section(&root)
        .lines()
        .filter_map(|l| l.split_once('=').map(|(k, _)| k.trim()))
        .collect();

    let inherited: Vec<&str> = package_section(&manifest)
        .lines()
        .filter_map(|l| l.trim().strip_suffix(".workspace = true"))
        .collect();

    assert!(!inherited.is_empty());
    for key in inherited {
        assert!(
            defined.contains(&key),
            "`{key}.workspace = true` but [workspace.package] has no `{key}`"
        );
    }
}

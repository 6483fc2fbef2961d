use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// The six-node weighted example graph used across the CLI tests
pub const SCENARIO: &str = "6 8\n0 1 2\n0 2 4\n1 2 1\n1 3 7\n2 4 3\n3 5 1\n4 3 2\n4 5 5\n";

/// Get a Command for graphkit with a clean logging/config environment
pub fn graphkit() -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    cmd.env_remove("GRAPHKIT_LOG")
        .env_remove("GRAPHKIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Scenario graph with an extra `5 -> 0` edge that closes a negative cycle
#[allow(dead_code)]
pub fn negative_cycle_scenario() -> String {
    SCENARIO.replacen("6 8", "6 9", 1) + "5 0 -100\n"
}

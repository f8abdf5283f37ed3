//! Help and version output

mod common;

use common::*;

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();

    let result = env.run(&["--help"]);

    assert!(result.success);
    assert!(result.stdout.contains("lint"));
    assert!(result.stdout.contains("build"));
    assert!(result.stdout.contains("--no-esm"));
    assert!(result
        .stdout
        .contains("Run 'esmc' without a subcommand for the full pipeline."));
}

#[test]
fn version_prints_package_version() {
    let env = TestEnv::new();

    let result = env.run(&["--version"]);

    assert!(result.success);
    assert!(result.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let env = TestEnv::new();

    let result = env.run(&["--no-such-flag"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--no-such-flag"));
}

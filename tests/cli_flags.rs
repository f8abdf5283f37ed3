//! Flag validation and configuration warnings

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn no_build_with_no_esm_is_rejected_before_any_work() {
    let env = TestEnv::new();
    env.write("src/a.js", "export const a = 1;\n");

    let result = env.run(&["--no-build", "--no-esm"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("fatal"), "{}", result.stderr);
    assert!(result
        .stderr
        .contains("Cannot use --no-build and --no-esm flags together"));
    assert!(!env.exists("node_modules"));
    assert!(!env.exists("dist"));
    assert!(env.log_lines("lint.log").is_empty());
}

#[test]
fn rejected_flags_in_json_mode_emit_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "--no-build", "--no-esm"]);

    assert_eq!(result.exit_code, 1);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["command"], "esmc");
    assert!(event.get("stage").is_none());
}

#[test]
fn lint_subcommand_ignores_output_flags() {
    let env = TestEnv::new();
    env.write("src/a.js", "export const a = 1;\n");

    let result = env.run(&["lint", "--no-build", "--no-esm"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.log_lines("lint.log").len(), 1);
}

#[test]
fn last_paired_flag_wins() {
    let env = TestEnv::new();
    env.write("src/a.js", "export const a = 1;\n");

    let result = env.run(&["--no-esm", "--esm"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.log_lines("bridge.log"), vec!["esm=true"]);
}

#[test]
fn warnings_flag_reaches_collaborators() {
    let env = TestEnv::new();
    let config = SHELL_COLLABORATORS.replace(
        "echo \\\"esm=$ESMC_ESM\\\" >> bridge.log",
        "echo \\\"warnings=$ESMC_WARNINGS\\\" >> bridge.log",
    );
    env.write("esmc.toml", &config);
    env.write("src/a.js", "export const a = 1;\n");

    assert!(env.run(&["--warnings"]).success);
    assert_eq!(env.log_lines("bridge.log"), vec!["warnings=true"]);
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::with_config(&format!(
        "{}\n[output]\ncolr = \"never\"\n",
        SHELL_COLLABORATORS
    ));
    env.write("src/a.js", "export const a = 1;\n");

    let result = env.run(&["lint"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'colr'"), "{}", result.stderr);
    assert!(result.stderr.contains("Did you mean 'color'?"));
    assert!(!result.stdout.contains("colr"));
}

#[test]
fn malformed_config_is_an_error() {
    let env = TestEnv::with_config("[collaborators\nlint = ");

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

#[test]
fn unconfigured_collaborator_points_at_config() {
    let env = TestEnv::with_config("[collaborators]\nlint = []\n");
    env.write("src/a.js", "export const a = 1;\n");

    let result = env.run(&["lint"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("lint failed"), "{}", result.stderr);
    assert!(result.stderr.contains("[collaborators]"));
}

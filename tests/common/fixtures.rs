//! Reusable test content

/// Collaborators implemented as small shell scripts.
///
/// - type check and lint append their file list to `typecheck.log` / `lint.log`
/// - lint fails on any file containing `LINT_ERROR`
/// - transform fails on `SYNTAX_ERROR`, otherwise prefixes the source with
///   the profile it saw and logs each file to `transform.log`
/// - strip removes `: number` annotations
/// - bridge appends the module mode to `bridge.log`
pub const SHELL_COLLABORATORS: &str = r#"
[collaborators]
typecheck = ["sh", "-c", "if grep -l FLOW_ERROR \"$@\" >&2; then exit 2; fi; echo \"$@\" >> typecheck.log", "typecheck"]
lint = ["sh", "-c", "if grep -l LINT_ERROR \"$@\" >&2; then exit 1; fi; echo \"$@\" >> lint.log", "lint"]
transform = ["sh", "-c", "if grep -q SYNTAX_ERROR \"$1\"; then echo \"SyntaxError: $1: Unexpected token (1:0)\" >&2; exit 1; fi; echo \"$1\" >> transform.log; echo \"// browsers=$ESMC_BROWSERS cjs=$ESMC_CJS\"; cat \"$1\"", "transform"]
strip = ["sh", "-c", "sed -e \"s/: number//g\" \"$1\"", "strip"]
bridge = ["sh", "-c", "echo \"esm=$ESMC_ESM\" >> bridge.log", "bridge"]
"#;

pub const MANIFEST_PATH: &str = "node_modules/.cache/esmc/.esmc-cache";
pub const DEBUG_MANIFEST_PATH: &str = "node_modules/.cache/esmc-dbg/.esmc-cache";
pub const LINT_CACHE_PATH: &str = "node_modules/.cache/esmc/.esmc-cache-lint";

//! Command-backed collaborators
//!
//! Each adapter runs a configured argv in the project root with stdin
//! closed and output captured. Placeholders in arguments:
//!
//! - `{file}` - the file being transformed or stripped (appended when absent)
//! - `{lint_cache}` - the lint sub-cache path
//! - `{project}` - the project root
//! - `{dist}` - the dist root
//!
//! Type checkers and linters receive the file list after their arguments.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::domain::ports::collaborators::{
    BridgeGenerator, CollaboratorError, CollaboratorOptions, Linter, StripRequest,
    TransformOutput, Transformer, TypeChecker, TypeStripper,
};
use crate::domain::ports::FileSystem;
use crate::domain::services::{destination_for, legible};
use crate::domain::value_objects::ProfileConfig;
use crate::infrastructure::fs::LocalFs;

/// Where collaborators run and what they are told about the invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_root: PathBuf,
    pub dist_root: PathBuf,
    pub options: CollaboratorOptions,
}

impl CommandContext {
    fn option_env(&self) -> [(&'static str, &'static str); 4] {
        let flag = |value: bool| if value { "true" } else { "false" };
        [
            ("ESMC_WARNINGS", flag(self.options.warnings)),
            ("ESMC_ESM", flag(self.options.esm)),
            ("ESMC_FLOW", flag(self.options.flow)),
            ("ESMC_DBG", flag(self.options.dbg)),
        ]
    }
}

#[derive(Default)]
struct Vars<'a> {
    file: Option<&'a Path>,
    lint_cache: Option<&'a Path>,
}

/// A configured external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split an argv vector; `None` when it is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self::new(program.clone(), args.to_vec()))
    }

    /// Program name used in error messages
    pub fn tool(&self) -> &str {
        &self.program
    }

    fn uses(&self, placeholder: &str) -> bool {
        self.args.iter().any(|arg| arg.contains(placeholder))
    }

    fn expand(&self, ctx: &CommandContext, vars: &Vars<'_>) -> Vec<String> {
        let project = ctx.project_root.to_string_lossy();
        let dist = ctx.dist_root.to_string_lossy();
        let file = vars.file.map(|p| p.to_string_lossy());
        let lint_cache = vars.lint_cache.map(|p| p.to_string_lossy());

        self.args
            .iter()
            .map(|arg| {
                let mut arg = arg.replace("{project}", &project).replace("{dist}", &dist);
                if let Some(file) = &file {
                    arg = arg.replace("{file}", file);
                }
                if let Some(cache) = &lint_cache {
                    arg = arg.replace("{lint_cache}", cache);
                }
                arg
            })
            .collect()
    }

    /// Arguments for a single-file invocation
    fn file_args(&self, ctx: &CommandContext, file: &Path) -> Vec<String> {
        let mut args = self.expand(
            ctx,
            &Vars {
                file: Some(file),
                ..Vars::default()
            },
        );
        if !self.uses("{file}") {
            args.push(file.to_string_lossy().into_owned());
        }
        args
    }

    /// Arguments followed by the file list
    fn batch_args(&self, ctx: &CommandContext, vars: &Vars<'_>, files: &[PathBuf]) -> Vec<String> {
        let mut args = self.expand(ctx, vars);
        args.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        args
    }

    fn run(
        &self,
        ctx: &CommandContext,
        args: &[String],
        extra_env: &[(&'static str, &'static str)],
    ) -> Result<Output, CollaboratorError> {
        debug!(tool = %self.program, ?args, "running collaborator");

        Command::new(&self.program)
            .args(args)
            .current_dir(&ctx.project_root)
            .envs(ctx.option_env())
            .envs(extra_env.iter().copied())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CollaboratorError::Spawn {
                tool: self.program.clone(),
                source,
            })
    }

    /// Run and require a zero exit status
    fn run_checked(
        &self,
        ctx: &CommandContext,
        args: &[String],
    ) -> Result<(), CollaboratorError> {
        let output = self.run(ctx, args, &[])?;
        let captured = captured_output(&output);
        if !output.status.success() {
            return Err(CollaboratorError::Failed {
                tool: self.program.clone(),
                code: output.status.code(),
                stderr: captured,
            });
        }
        if ctx.options.warnings && !captured.trim().is_empty() {
            warn!(tool = %self.program, "{}", captured.trim_end());
        }
        Ok(())
    }
}

/// Stdout followed by stderr, lossily decoded
fn captured_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !text.is_empty() && !stderr.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&stderr);
    text
}

fn required<'a>(
    spec: &'a Option<CommandSpec>,
    what: &'static str,
) -> Result<&'a CommandSpec, CollaboratorError> {
    spec.as_ref().ok_or(CollaboratorError::NotConfigured(what))
}

/// Type checker driven by an external command
pub struct CommandTypeChecker {
    spec: Option<CommandSpec>,
    ctx: CommandContext,
}

impl CommandTypeChecker {
    pub fn new(spec: Option<CommandSpec>, ctx: CommandContext) -> Self {
        Self { spec, ctx }
    }
}

impl TypeChecker for CommandTypeChecker {
    fn check(
        &self,
        files: &[PathBuf],
        options: &CollaboratorOptions,
    ) -> Result<(), CollaboratorError> {
        let spec = required(&self.spec, "type-check")?;
        let ctx = CommandContext {
            options: *options,
            ..self.ctx.clone()
        };
        spec.run_checked(&ctx, &spec.batch_args(&ctx, &Vars::default(), files))
    }
}

/// Linter driven by an external command
pub struct CommandLinter {
    spec: Option<CommandSpec>,
    ctx: CommandContext,
}

impl CommandLinter {
    pub fn new(spec: Option<CommandSpec>, ctx: CommandContext) -> Self {
        Self { spec, ctx }
    }
}

impl Linter for CommandLinter {
    fn lint(
        &self,
        files: &[PathBuf],
        cache: &Path,
        options: &CollaboratorOptions,
    ) -> Result<(), CollaboratorError> {
        let spec = required(&self.spec, "lint")?;
        let ctx = CommandContext {
            options: *options,
            ..self.ctx.clone()
        };
        let vars = Vars {
            lint_cache: Some(cache),
            ..Vars::default()
        };
        spec.run_checked(&ctx, &spec.batch_args(&ctx, &vars, files))
    }
}

/// Transformer that reads compiled code from the command's stdout
pub struct CommandTransformer {
    spec: Option<CommandSpec>,
    ctx: CommandContext,
}

impl CommandTransformer {
    pub fn new(spec: Option<CommandSpec>, ctx: CommandContext) -> Self {
        Self { spec, ctx }
    }
}

impl Transformer for CommandTransformer {
    fn transform_file(
        &self,
        path: &Path,
        profile: &ProfileConfig,
    ) -> Result<TransformOutput, CollaboratorError> {
        let spec = required(&self.spec, "compile")?;
        let output = spec.run(&self.ctx, &spec.file_args(&self.ctx, path), &profile.env_pairs())?;

        if !output.status.success() {
            let raw = captured_output(&output);
            let message = if raw.trim().is_empty() {
                CollaboratorError::Failed {
                    tool: spec.tool().to_string(),
                    code: output.status.code(),
                    stderr: String::new(),
                }
                .to_string()
            } else {
                legible(&raw, &self.ctx.project_root)
            };
            return Err(CollaboratorError::Diagnostic {
                file: path.to_path_buf(),
                message,
            });
        }

        let code = String::from_utf8(output.stdout).map_err(|e| CollaboratorError::Diagnostic {
            file: path.to_path_buf(),
            message: format!("'{}' produced non UTF-8 output: {}", spec.tool(), e),
        })?;
        Ok(TransformOutput { code })
    }
}

/// Type stripper that runs once per file and writes stdout to every
/// destination root
pub struct CommandStripper {
    spec: Option<CommandSpec>,
    ctx: CommandContext,
    fs: LocalFs,
}

impl CommandStripper {
    pub fn new(spec: Option<CommandSpec>, ctx: CommandContext) -> Self {
        Self {
            spec,
            ctx,
            fs: LocalFs::new(),
        }
    }
}

impl TypeStripper for CommandStripper {
    fn strip(
        &self,
        request: &StripRequest<'_>,
        options: &CollaboratorOptions,
    ) -> Result<(), CollaboratorError> {
        let spec = required(&self.spec, "strip-types")?;
        let ctx = CommandContext {
            options: *options,
            ..self.ctx.clone()
        };

        for file in request.selected() {
            let output = spec.run(&ctx, &spec.file_args(&ctx, file), &[])?;
            if !output.status.success() {
                return Err(CollaboratorError::Failed {
                    tool: spec.tool().to_string(),
                    code: output.status.code(),
                    stderr: legible(&captured_output(&output), &ctx.project_root),
                });
            }

            for root in request.destinations {
                let dest = destination_for(file, request.source_root, root).map_err(|e| {
                    CollaboratorError::Write {
                        path: file.clone(),
                        message: e.to_string(),
                    }
                })?;
                self.fs
                    .write(&dest, &output.stdout)
                    .map_err(|e| CollaboratorError::Write {
                        path: dest.clone(),
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }
}

/// Bridge generator driven by an external command
pub struct CommandBridge {
    spec: Option<CommandSpec>,
    ctx: CommandContext,
}

impl CommandBridge {
    pub fn new(spec: Option<CommandSpec>, ctx: CommandContext) -> Self {
        Self { spec, ctx }
    }
}

impl BridgeGenerator for CommandBridge {
    fn generate(&self, options: &CollaboratorOptions) -> Result<(), CollaboratorError> {
        let spec = required(&self.spec, "bridge")?;
        let ctx = CommandContext {
            options: *options,
            ..self.ctx.clone()
        };
        spec.run_checked(&ctx, &spec.expand(&ctx, &Vars::default()))
    }
}

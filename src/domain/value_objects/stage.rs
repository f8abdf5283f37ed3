//! Pipeline stages

use std::fmt;

/// One phase of the build pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    TypeCheck,
    Lint,
    Compile,
    StripTypes,
    RawCopy,
    Bridge,
}

impl Stage {
    /// Stable identifier used in logs and JSON events
    pub fn id(&self) -> &'static str {
        match self {
            Stage::TypeCheck => "type-check",
            Stage::Lint => "lint",
            Stage::Compile => "compile",
            Stage::StripTypes => "strip-types",
            Stage::RawCopy => "raw-copy",
            Stage::Bridge => "bridge",
        }
    }

    /// Progress message shown while the stage runs
    pub fn progress_message(&self) -> &'static str {
        match self {
            Stage::TypeCheck => "Code type checking...",
            Stage::Lint => "Code style linting...",
            Stage::Compile => "Source files compiling...",
            Stage::StripTypes => "Removing types...",
            Stage::RawCopy => "Copying source files...",
            Stage::Bridge => "Creating bridge file...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

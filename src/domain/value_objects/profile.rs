//! Output profiles
//!
//! The two distribution targets every compiled file is emitted for.

use std::fmt;
use std::path::{Path, PathBuf};

/// Target runtime environment of a compile pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputProfile {
    /// Server-side runtime (`dist/nodejs`)
    Server,
    /// Browser bundle (`dist/browsers`)
    Browser,
}

impl OutputProfile {
    /// Pass order of the dual-target compiler. Server always runs first.
    pub const PASS_ORDER: [OutputProfile; 2] = [OutputProfile::Server, OutputProfile::Browser];

    /// Directory name of this profile under the dist root
    pub fn dir_name(&self) -> &'static str {
        match self {
            OutputProfile::Server => "nodejs",
            OutputProfile::Browser => "browsers",
        }
    }

    /// Destination root for this profile
    pub fn destination_root(&self, dist_root: &Path) -> PathBuf {
        dist_root.join(self.dir_name())
    }

    /// Explicit transform configuration for a pass of this profile
    pub fn config(&self, esm: bool) -> ProfileConfig {
        ProfileConfig {
            profile: *self,
            browsers: matches!(self, OutputProfile::Browser),
            commonjs: !esm,
        }
    }
}

impl fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Per-pass configuration handed to every transform call.
///
/// Carried by value into each call instead of being published through
/// process-wide state, so concurrent transforms never observe a pass switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    pub profile: OutputProfile,
    /// Target browsers instead of the server runtime
    pub browsers: bool,
    /// Emit CommonJS instead of ES modules
    pub commonjs: bool,
}

impl ProfileConfig {
    /// Environment pairs describing this configuration to an external transformer
    pub fn env_pairs(&self) -> [(&'static str, &'static str); 2] {
        [
            ("ESMC_BROWSERS", bool_str(self.browsers)),
            ("ESMC_CJS", bool_str(self.commonjs)),
        ]
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
